use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use markup_finder::{
    CssTranslator, DocumentKind, ElementFinder, ExpressionTranslator, StringCollection,
    XpathTranslator,
};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser)]
#[command(name = "markup-finder")]
#[command(about = "Query HTML/XML documents with XPath or CSS selectors", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct QueryOpts {
    /// Input file, or '-' for stdin
    input: PathBuf,

    /// XPath expression (or CSS selector with --css)
    expression: String,

    /// Parse the input as XML instead of HTML
    #[arg(long)]
    xml: bool,

    /// Treat the expression as a CSS selector
    #[arg(long)]
    css: bool,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the markup inside each matched node
    Content {
        #[command(flatten)]
        opts: QueryOpts,

        /// Include the matched node's own tags
        #[arg(long)]
        outer: bool,
    },

    /// Print the text value of each matched node
    Value {
        #[command(flatten)]
        opts: QueryOpts,
    },

    /// Print one attribute of each matched element
    Attr {
        #[command(flatten)]
        opts: QueryOpts,

        /// Attribute name
        name: String,
    },

    /// Print one regex capture group across the document markup
    Matches {
        /// Input file, or '-' for stdin
        input: PathBuf,

        /// Regex pattern
        pattern: String,

        /// Capture group to print (0 is the whole match)
        #[arg(short, long, default_value_t = 1)]
        group: usize,

        /// Parse the input as XML instead of HTML
        #[arg(long)]
        xml: bool,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Content { opts, outer } => cmd_content(opts, outer),
        Commands::Value { opts } => cmd_value(opts),
        Commands::Attr { opts, name } => cmd_attr(opts, name),
        Commands::Matches {
            input,
            pattern,
            group,
            xml,
            json,
        } => cmd_matches(input, pattern, group, xml, json),
    };

    if let Err(e) = outcome {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_content(opts: QueryOpts, outer: bool) -> Result<()> {
    let finder = load_finder(&opts)?;
    let found = if outer {
        finder.content_outer(&opts.expression)?
    } else {
        finder.content(&opts.expression)?
    };
    print_collection(&found, opts.json)
}

fn cmd_value(opts: QueryOpts) -> Result<()> {
    let finder = load_finder(&opts)?;
    let found = finder.value(&opts.expression)?;
    print_collection(&found, opts.json)
}

fn cmd_attr(opts: QueryOpts, name: String) -> Result<()> {
    let finder = load_finder(&opts)?;
    let found = finder.element(&opts.expression)?.attribute(&name);
    print_collection(&found, opts.json)
}

fn cmd_matches(
    input: PathBuf,
    pattern: String,
    group: usize,
    xml: bool,
    json: bool,
) -> Result<()> {
    let markup = read_input(&input)?;
    let finder = build_finder(&markup, xml, false)?;
    let found = finder.match_regex(&pattern, group)?;
    print_collection(&found, json)
}

fn load_finder(opts: &QueryOpts) -> Result<ElementFinder> {
    let markup = read_input(&opts.input)?;
    build_finder(&markup, opts.xml, opts.css)
}

fn build_finder(markup: &str, xml: bool, css: bool) -> Result<ElementFinder> {
    let kind = if xml {
        DocumentKind::Xml
    } else {
        DocumentKind::Html
    };
    let translator: Rc<dyn ExpressionTranslator> = if css {
        Rc::new(CssTranslator)
    } else {
        Rc::new(XpathTranslator)
    };
    let finder = ElementFinder::new(markup, kind, translator)?;

    for diagnostic in finder.load_diagnostics() {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }
    Ok(finder)
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn print_collection(found: &StringCollection, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(found)?);
    } else {
        for item in found {
            println!("{item}");
        }
    }
    Ok(())
}
