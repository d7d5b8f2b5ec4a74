use crate::cache;
use crate::translate::{ExpressionTranslator, TranslateError};

/// Translates a CSS selector subset into XPath 1.0.
///
/// # Supported Syntax
///
/// - Element names and `*`
/// - `#id` and `.class`
/// - `[attr]` and `[attr=value]` (quoted or bare values)
/// - Descendant (space) and child (`>`) combinators
/// - Comma-separated selector groups
///
/// Anything else (pseudo-classes, sibling combinators, namespaces) is
/// rejected with a typed error rather than silently mis-translated.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssTranslator;

impl ExpressionTranslator for CssTranslator {
    fn to_xpath(&self, expression: &str) -> Result<String, TranslateError> {
        if expression.trim().is_empty() {
            return Err(TranslateError::EmptyExpression);
        }
        cache::get_or_translate("css", expression, translate_group)
    }
}

/// Translate a full selector group, e.g. `div.item, #nav a`.
fn translate_group(expression: &str) -> Result<String, TranslateError> {
    let mut paths = Vec::new();
    for selector in split_group(expression)? {
        paths.push(translate_selector(selector.trim(), expression)?);
    }
    Ok(paths.join(" | "))
}

/// Split on top-level commas, ignoring commas inside attribute filters.
fn split_group(expression: &str) -> Result<Vec<&str>, TranslateError> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_brackets = false;
    let mut quote: Option<char> = None;

    for (i, ch) in expression.char_indices() {
        match ch {
            '\'' | '"' if in_brackets => match quote {
                Some(q) if q == ch => quote = None,
                Some(_) => {}
                None => quote = Some(ch),
            },
            '[' if quote.is_none() => in_brackets = true,
            ']' if quote.is_none() => in_brackets = false,
            ',' if !in_brackets && quote.is_none() => {
                parts.push(&expression[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&expression[start..]);

    if parts.iter().any(|p| p.trim().is_empty()) {
        return Err(TranslateError::EmptySelector {
            selector: expression.to_string(),
        });
    }
    Ok(parts)
}

/// Translate a single selector (no commas) into one XPath location path.
fn translate_selector(selector: &str, full: &str) -> Result<String, TranslateError> {
    let mut out = String::new();
    let mut rest = selector;
    let mut axis = "//";

    loop {
        rest = rest.trim_start();
        if let Some(stripped) = rest.strip_prefix('>') {
            axis = "/";
            rest = stripped.trim_start();
            if rest.starts_with('>') {
                return Err(TranslateError::UnexpectedCharacter {
                    character: '>',
                    selector: full.to_string(),
                });
            }
        }
        if rest.is_empty() {
            return Err(TranslateError::EmptySelector {
                selector: full.to_string(),
            });
        }

        let (step, remaining) = translate_compound(rest, full)?;
        out.push_str(axis);
        out.push_str(&step);

        if remaining.trim_start().is_empty() {
            break;
        }
        axis = "//";
        rest = remaining;
    }

    Ok(out)
}

/// Translate one compound selector (`a.title[href]`) into one XPath step.
/// Returns the step and the unconsumed remainder of the input.
fn translate_compound<'a>(
    input: &'a str,
    full: &str,
) -> Result<(String, &'a str), TranslateError> {
    let mut tag = String::new();
    let mut predicates: Vec<String> = Vec::new();
    let mut chars = input.char_indices().peekable();
    let mut end = input.len();

    while let Some(&(i, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() || c == '>' => {
                end = i;
                break;
            }
            '*' if tag.is_empty() && predicates.is_empty() => {
                tag.push('*');
                chars.next();
            }
            '#' => {
                chars.next();
                let name = take_name(&mut chars);
                if name.is_empty() {
                    return Err(TranslateError::EmptyName {
                        selector: full.to_string(),
                        kind: "id",
                    });
                }
                predicates.push(format!("@id='{name}'"));
            }
            '.' => {
                chars.next();
                let name = take_name(&mut chars);
                if name.is_empty() {
                    return Err(TranslateError::EmptyName {
                        selector: full.to_string(),
                        kind: "class",
                    });
                }
                predicates.push(format!(
                    "contains(concat(' ', normalize-space(@class), ' '), ' {name} ')"
                ));
            }
            '[' => {
                chars.next();
                predicates.push(translate_attribute(&mut chars, full)?);
            }
            ':' => {
                let syntax: String = input[i..].chars().take_while(|c| !c.is_whitespace()).collect();
                return Err(TranslateError::Unsupported {
                    syntax,
                    selector: full.to_string(),
                });
            }
            c if is_name_char(c) => {
                if !predicates.is_empty() {
                    return Err(TranslateError::UnexpectedCharacter {
                        character: c,
                        selector: full.to_string(),
                    });
                }
                tag.push(c);
                chars.next();
            }
            other => {
                return Err(TranslateError::UnexpectedCharacter {
                    character: other,
                    selector: full.to_string(),
                });
            }
        }
    }

    let mut step = if tag.is_empty() { "*".to_string() } else { tag };
    for predicate in predicates {
        step.push('[');
        step.push_str(&predicate);
        step.push(']');
    }
    Ok((step, &input[end..]))
}

/// Translate the inside of an attribute filter, after the opening `[`.
fn translate_attribute(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    full: &str,
) -> Result<String, TranslateError> {
    skip_spaces(chars);
    let name = take_name(chars);
    if name.is_empty() {
        return Err(TranslateError::EmptyName {
            selector: full.to_string(),
            kind: "attribute",
        });
    }
    skip_spaces(chars);

    match chars.peek().map(|&(_, c)| c) {
        Some(']') => {
            chars.next();
            Ok(format!("@{name}"))
        }
        Some('=') => {
            chars.next();
            skip_spaces(chars);
            let value = take_attribute_value(chars, full)?;
            skip_spaces(chars);
            match chars.next() {
                Some((_, ']')) => Ok(format!("@{name}='{value}'")),
                _ => Err(TranslateError::UnclosedAttribute {
                    selector: full.to_string(),
                }),
            }
        }
        Some(other) => Err(TranslateError::UnexpectedCharacter {
            character: other,
            selector: full.to_string(),
        }),
        None => Err(TranslateError::UnclosedAttribute {
            selector: full.to_string(),
        }),
    }
}

fn take_attribute_value(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    full: &str,
) -> Result<String, TranslateError> {
    let mut value = String::new();

    match chars.peek().map(|&(_, c)| c) {
        Some(quote @ ('\'' | '"')) => {
            chars.next();
            loop {
                match chars.next() {
                    Some((_, c)) if c == quote => break,
                    Some((_, c)) => value.push(c),
                    None => {
                        return Err(TranslateError::UnclosedAttribute {
                            selector: full.to_string(),
                        })
                    }
                }
            }
        }
        _ => {
            while let Some(&(_, c)) = chars.peek() {
                if c == ']' || c.is_whitespace() {
                    break;
                }
                value.push(c);
                chars.next();
            }
        }
    }

    // XPath 1.0 has no in-string quote escaping
    if value.contains('\'') {
        return Err(TranslateError::Unsupported {
            syntax: value,
            selector: full.to_string(),
        });
    }
    Ok(value)
}

fn take_name(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) -> String {
    let mut name = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if is_name_char(c) {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }
    name
}

fn skip_spaces(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) {
    while let Some(&(_, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else {
            break;
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
