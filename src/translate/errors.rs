use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("empty expression")]
    EmptyExpression,

    #[error("empty selector in group: {selector}")]
    EmptySelector { selector: String },

    #[error("selector '{selector}' has an empty {kind} name")]
    EmptyName { selector: String, kind: &'static str },

    #[error("unclosed attribute filter in selector: {selector}")]
    UnclosedAttribute { selector: String },

    #[error("unexpected character '{character}' in selector: {selector}")]
    UnexpectedCharacter { character: char, selector: String },

    #[error("unsupported selector syntax '{syntax}' in: {selector}")]
    Unsupported { syntax: String, selector: String },
}
