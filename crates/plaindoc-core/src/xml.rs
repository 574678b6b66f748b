//! XML text escaping shared by the package writers.

use std::borrow::Cow;

use quick_xml::escape::escape;

/// Whether `c` is allowed in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
}

/// Escape `text` for element content or attribute values.
///
/// Characters XML 1.0 cannot carry are removed first. Vertical tab and form
/// feed become a space so the words around them stay apart.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return escape(text);
    }

    let cleaned: String = text
        .chars()
        .filter_map(|c| match c {
            '\u{0B}' | '\u{0C}' => Some(' '),
            c if is_xml_char(c) => Some(c),
            _ => None,
        })
        .collect();
    Cow::Owned(escape(cleaned.as_str()).into_owned())
}
