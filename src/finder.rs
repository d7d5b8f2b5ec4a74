//! The document facade: parse once, query many times.

use crate::collection::{ElementCollection, ObjectCollection, StringCollection};
use crate::element::Element;
use crate::helpers::regex::{self as regex_helper, RegexError};
use crate::helpers::strings;
use crate::translate::{ExpressionTranslator, TranslateError, XpathTranslator};
use libxml::parser::{Parser, ParserOptions};
use libxml::tree::{Document, Node, NodeType};
use libxml::xpath::Context;
use regex::Captures;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Markup substituted when an `object` query hits a node with blank content,
/// so sub-finders never fail the non-empty input check.
pub const EMPTY_DOCUMENT_MARKUP: &str = "<html data-document-is-empty></html>";

/// How the input markup is handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    /// Error-tolerant HTML parsing.
    #[default]
    Html,
    /// XML parsing, recovering where the engine can.
    Xml,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Html => write!(f, "html"),
            DocumentKind::Xml => write!(f, "xml"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("expected a non-empty markup string")]
    EmptyDocument,

    #[error("engine failed to parse {kind} input: {message}")]
    Parse { kind: DocumentKind, message: String },

    #[error("engine failed to create an XPath context")]
    EngineContext,

    #[error("engine rejected XPath expression: {expression}")]
    InvalidExpression { expression: String },

    #[error("failed to remove attribute '{name}': {message}")]
    Attribute { name: String, message: String },

    #[error("key and value queries must hit equal numbers of nodes, got {keys} keys and {values} values")]
    KeyValueLengthMismatch { keys: usize, values: usize },

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Regex(#[from] RegexError),
}

/// Wraps one parsed document plus an XPath evaluation context and an
/// expression translator.
///
/// All querying, tree-walking and serialization is delegated to libxml2;
/// this type only translates expressions and shapes results into typed
/// collections.
pub struct ElementFinder {
    kind: DocumentKind,
    document: Document,
    context: Context,
    translator: Rc<dyn ExpressionTranslator>,
    diagnostics: Vec<String>,
}

impl ElementFinder {
    /// Parse HTML with the default pass-through XPath translator.
    pub fn html(input: &str) -> Result<Self, FinderError> {
        Self::new(input, DocumentKind::Html, Rc::new(XpathTranslator))
    }

    /// Parse XML with the default pass-through XPath translator.
    pub fn xml(input: &str) -> Result<Self, FinderError> {
        Self::new(input, DocumentKind::Xml, Rc::new(XpathTranslator))
    }

    /// Parse markup with an explicit document kind and translator.
    pub fn new(
        input: &str,
        kind: DocumentKind,
        translator: Rc<dyn ExpressionTranslator>,
    ) -> Result<Self, FinderError> {
        if input.is_empty() {
            return Err(FinderError::EmptyDocument);
        }

        let (document, diagnostics) = parse_markup(input, kind)?;
        let context = Context::new(&document).map_err(|_| FinderError::EngineContext)?;

        Ok(Self {
            kind,
            document,
            context,
            translator,
            diagnostics,
        })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Diagnostics the engine surfaced while loading the document. Empty
    /// when the input parsed cleanly on the first attempt.
    pub fn load_diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Run a translated query and return raw element handles.
    pub fn query(&self, expression: &str) -> Result<Vec<Element>, FinderError> {
        let nodes = self.query_nodes(expression)?;
        Ok(nodes
            .into_iter()
            .map(|node| Element::new(node, self.document.clone()))
            .collect())
    }

    /// Inner markup of every hit.
    pub fn content(&self, expression: &str) -> Result<StringCollection, FinderError> {
        let items = self
            .query(expression)?
            .iter()
            .map(Element::inner_markup)
            .collect();
        Ok(items)
    }

    /// Outer markup of every hit, tags included.
    pub fn content_outer(&self, expression: &str) -> Result<StringCollection, FinderError> {
        let items = self
            .query(expression)?
            .iter()
            .map(Element::outer_markup)
            .collect();
        Ok(items)
    }

    /// String-value of every hit: text content for elements, the value for
    /// attribute and text nodes.
    pub fn value(&self, expression: &str) -> Result<StringCollection, FinderError> {
        let items = self.query(expression)?.iter().map(Element::text).collect();
        Ok(items)
    }

    /// Element handles for every hit.
    pub fn element(&self, expression: &str) -> Result<ElementCollection, FinderError> {
        Ok(ElementCollection::new(self.query(expression)?))
    }

    /// Pair up the string-values of two queries.
    ///
    /// Later keys overwrite earlier duplicates, matching map semantics.
    pub fn key_value(
        &self,
        key_expression: &str,
        value_expression: &str,
    ) -> Result<HashMap<String, String>, FinderError> {
        let keys = self.query(key_expression)?;
        let values = self.query(value_expression)?;
        if keys.len() != values.len() {
            return Err(FinderError::KeyValueLengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        Ok(keys
            .iter()
            .zip(values.iter())
            .map(|(key, value)| (key.text(), value.text()))
            .collect())
    }

    /// Sub-finder per hit, built from the hit's inner markup.
    pub fn object(&self, expression: &str) -> Result<ObjectCollection, FinderError> {
        self.build_objects(expression, false)
    }

    /// Sub-finder per hit, built from the hit's outer markup.
    pub fn object_outer(&self, expression: &str) -> Result<ObjectCollection, FinderError> {
        self.build_objects(expression, true)
    }

    fn build_objects(&self, expression: &str, outer: bool) -> Result<ObjectCollection, FinderError> {
        let mut finders = Vec::new();
        for element in self.query(expression)? {
            let mut markup = if outer {
                element.outer_markup()
            } else {
                element.inner_markup()
            };

            if markup.trim().is_empty() {
                markup = EMPTY_DOCUMENT_MARKUP.to_string();
            }
            // Re-parsed XML fragments need a single root
            if self.kind == DocumentKind::Xml && !markup.contains("<?xml") {
                markup = format!("<root>{markup}</root>");
            }

            finders.push(ElementFinder::new(
                &markup,
                self.kind,
                Rc::clone(&self.translator),
            )?);
        }
        Ok(ObjectCollection::new(finders))
    }

    /// Delete every hit from the tree. Attribute hits are removed through
    /// their owning element; other nodes are unlinked.
    pub fn remove(&mut self, expression: &str) -> Result<(), FinderError> {
        for mut node in self.query_nodes(expression)? {
            if node.get_type() == Some(NodeType::AttributeNode) {
                let name = node.get_name();
                if let Some(mut owner) = node.get_parent() {
                    owner
                        .remove_attribute(&name)
                        .map_err(|e| FinderError::Attribute {
                            name: name.clone(),
                            message: e.to_string(),
                        })?;
                }
            } else {
                node.unlink();
            }
        }
        Ok(())
    }

    /// Collect one capture group of `pattern` across the document's markup.
    pub fn match_regex(&self, pattern: &str, group: usize) -> Result<StringCollection, FinderError> {
        let markup = vec![self.markup()];
        Ok(regex_helper::match_group(pattern, group, &markup)?)
    }

    /// Map every capture set of `pattern` across the document's markup
    /// through `f`, keeping the `Some` results.
    pub fn match_with<F>(&self, pattern: &str, f: F) -> Result<StringCollection, FinderError>
    where
        F: Fn(&Captures<'_>) -> Option<String>,
    {
        let markup = vec![self.markup()];
        Ok(regex_helper::match_with(pattern, f, &markup)?)
    }

    /// Full document markup; empty when serialization fails.
    ///
    /// Evaluates `.` directly, bypassing the translator, so it keeps working
    /// with translators that only accept CSS selectors.
    pub fn markup(&self) -> String {
        match self.evaluate_raw(".") {
            Ok(nodes) => nodes
                .first()
                .map(|node| crate::helpers::node::inner_markup(&self.document, node))
                .unwrap_or_default(),
            Err(_) => String::new(),
        }
    }

    fn query_nodes(&self, expression: &str) -> Result<Vec<Node>, FinderError> {
        let xpath = self.translator.to_xpath(expression)?;
        self.evaluate_raw(&xpath)
    }

    fn evaluate_raw(&self, xpath: &str) -> Result<Vec<Node>, FinderError> {
        let evaluated = self.context.evaluate(xpath).map_err(|_| {
            FinderError::InvalidExpression {
                expression: xpath.to_string(),
            }
        })?;
        Ok(evaluated.get_nodes_as_vec())
    }
}

impl fmt::Display for ElementFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup())
    }
}

impl fmt::Debug for ElementFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementFinder")
            .field("kind", &self.kind)
            .field("diagnostics", &self.diagnostics.len())
            .finish_non_exhaustive()
    }
}

fn parse_markup(input: &str, kind: DocumentKind) -> Result<(Document, Vec<String>), FinderError> {
    match kind {
        DocumentKind::Html => {
            let data = strings::safe_encode(input);
            let parser = Parser::default_html();
            let document = parser
                .parse_string_with_options(data.as_bytes(), lenient_options())
                .map_err(|e| FinderError::Parse {
                    kind,
                    message: format!("{e:?}"),
                })?;
            Ok((document, Vec::new()))
        }
        DocumentKind::Xml => {
            let parser = Parser::default();
            // Strict pass first, so a recovered parse can still report what
            // the engine objected to
            match parser.parse_string_with_options(input.as_bytes(), strict_options()) {
                Ok(document) => Ok((document, Vec::new())),
                Err(strict_failure) => {
                    let document = parser
                        .parse_string_with_options(input.as_bytes(), lenient_options())
                        .map_err(|e| FinderError::Parse {
                            kind,
                            message: format!("{e:?}"),
                        })?;
                    Ok((document, vec![format!("{strict_failure:?}")]))
                }
            }
        }
    }
}

fn lenient_options<'a>() -> ParserOptions<'a> {
    ParserOptions {
        recover: true,
        no_error: true,
        no_warning: true,
        no_net: true,
        ..ParserOptions::default()
    }
}

fn strict_options<'a>() -> ParserOptions<'a> {
    ParserOptions {
        recover: false,
        no_error: true,
        no_warning: true,
        no_net: true,
        ..ParserOptions::default()
    }
}
