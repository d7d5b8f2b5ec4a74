//! Markup Finder: HTML/XML querying facade over libxml2
//!
//! Parse a markup string once, run XPath or CSS-selector expressions against
//! it, and get typed collections back: strings, element handles, or nested
//! sub-documents.
//!
//! # Architecture
//!
//! DOM construction, error-tolerant HTML parsing, XPath evaluation and
//! serialization are all delegated to libxml2 through the [`libxml`] crate.
//! This crate contributes expression translation ([`translate`]), result
//! shaping ([`collection`]), and string/regex/node helpers ([`helpers`]).
//! There is no parser or evaluator of its own.
//!
//! # Example
//!
//! ```no_run
//! use markup_finder::ElementFinder;
//!
//! let page = ElementFinder::html("<html><a href='/a'>first</a></html>")?;
//!
//! let links = page.value("//a/@href")?;
//! assert_eq!(links.first(), Some("/a"));
//!
//! let texts = page.content("//a")?;
//! assert_eq!(texts.first(), Some("first"));
//! # Ok::<(), markup_finder::FinderError>(())
//! ```

pub mod cache;
pub mod collection;
pub mod element;
pub mod finder;
pub mod helpers;
pub mod translate;

// Re-exports
pub use collection::{ElementCollection, ObjectCollection, StringCollection};
pub use element::Element;
pub use finder::{DocumentKind, ElementFinder, FinderError, EMPTY_DOCUMENT_MARKUP};
pub use helpers::RegexError;
pub use translate::{CssTranslator, ExpressionTranslator, TranslateError, XpathTranslator};
