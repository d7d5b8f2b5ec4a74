//! Query-expression translation.
//!
//! Finder operations accept an expression string and hand it to an
//! [`ExpressionTranslator`] before evaluation, so callers can write either
//! raw XPath ([`XpathTranslator`], the default) or a CSS selector subset
//! ([`CssTranslator`]). The engine only ever sees XPath.

mod css;
mod errors;

pub use css::CssTranslator;
pub use errors::TranslateError;

/// Converts a caller-facing query expression into XPath 1.0.
pub trait ExpressionTranslator {
    fn to_xpath(&self, expression: &str) -> Result<String, TranslateError>;
}

/// Pass-through translator for callers that already write XPath.
#[derive(Debug, Clone, Copy, Default)]
pub struct XpathTranslator;

impl ExpressionTranslator for XpathTranslator {
    fn to_xpath(&self, expression: &str) -> Result<String, TranslateError> {
        if expression.trim().is_empty() {
            return Err(TranslateError::EmptyExpression);
        }
        Ok(expression.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xpath_translator_is_identity() {
        let xpath = XpathTranslator.to_xpath("//a[@href]").unwrap();
        assert_eq!(xpath, "//a[@href]");
    }

    #[test]
    fn xpath_translator_rejects_blank_input() {
        assert_eq!(
            XpathTranslator.to_xpath("  "),
            Err(TranslateError::EmptyExpression)
        );
    }
}
