//! String, regex and node helpers shared by the finder and the collections.

pub mod node;
pub mod regex;
pub mod strings;

pub use self::regex::RegexError;
