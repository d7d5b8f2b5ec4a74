//! String preparation for error-tolerant parsing.

/// Escape stray `&` characters that do not start a character reference.
///
/// The lenient HTML parser drops a bare `&` together with the text after it
/// when it fails to read an entity, so `a & b` would lose data. Ampersands
/// already starting `&name;`, `&#10;` or `&#x1F;` references are left alone.
pub fn safe_encode(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        if starts_character_reference(tail) {
            out.push('&');
        } else {
            out.push_str("&amp;");
        }
        rest = tail;
    }
    out.push_str(rest);
    out
}

enum ReferenceBody {
    Decimal,
    Hex,
    Name,
}

impl ReferenceBody {
    fn accepts(&self, c: char) -> bool {
        match self {
            ReferenceBody::Decimal => c.is_ascii_digit(),
            ReferenceBody::Hex => c.is_ascii_hexdigit(),
            ReferenceBody::Name => c.is_ascii_alphanumeric(),
        }
    }
}

/// Does `tail` (the text after an `&`) begin with a character reference body
/// terminated by `;`?
fn starts_character_reference(tail: &str) -> bool {
    let mut chars = tail.chars();
    let (body, mut seen_body) = match chars.next() {
        Some('#') => match chars.next() {
            Some('x') | Some('X') => (ReferenceBody::Hex, false),
            Some(d) if d.is_ascii_digit() => (ReferenceBody::Decimal, true),
            _ => return false,
        },
        Some(c) if c.is_ascii_alphabetic() => (ReferenceBody::Name, true),
        _ => return false,
    };

    for c in chars {
        if c == ';' {
            return seen_body;
        }
        if !body.accepts(c) {
            return false;
        }
        seen_body = true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(safe_encode("hello world"), "hello world");
    }

    #[test]
    fn stray_ampersand_is_escaped() {
        assert_eq!(safe_encode("a & b"), "a &amp; b");
        assert_eq!(safe_encode("&"), "&amp;");
        assert_eq!(safe_encode("x=1&y=2"), "x=1&amp;y=2");
    }

    #[test]
    fn character_references_are_preserved() {
        assert_eq!(safe_encode("a &amp; b"), "a &amp; b");
        assert_eq!(safe_encode("&#60;tag&#62;"), "&#60;tag&#62;");
        assert_eq!(safe_encode("&#x1F600;"), "&#x1F600;");
    }

    #[test]
    fn unterminated_reference_is_escaped() {
        assert_eq!(safe_encode("&amp"), "&amp;amp");
        assert_eq!(safe_encode("&#12"), "&amp;#12");
        assert_eq!(safe_encode("&#x;"), "&amp;#x;");
    }

    #[test]
    fn mixed_input() {
        assert_eq!(safe_encode("&lt;a&b&gt;"), "&lt;a&amp;b&gt;");
    }
}
