use std::borrow::Cow;

pub(crate) fn escape_text(content: &str) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        content.into()
    } else {
        result.into()
    }
}

pub(crate) fn escape_attribute(content: &str) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            '"' => {
                entity_seen = true;
                result.push_str("&quot;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        content.into()
    } else {
        result.into()
    }
}
