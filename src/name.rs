use std::sync::LazyLock;

use regex::Regex;

// Character classes from the XML 1.0 Name production. Surrogates cannot
// appear in a Rust string, so the D800-DFFF gap needs no special casing.
const NAME_START_CHAR: &str = r"A-Za-z_:\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{2FF}\x{370}-\x{37D}\x{37F}-\x{1FFF}\x{200C}-\x{200D}\x{2070}-\x{218F}\x{2C00}-\x{2FEF}\x{3001}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFFD}\x{10000}-\x{EFFFF}";

const NAME_CHAR: &str = r"\-.0-9\x{B7}\x{300}-\x{36F}\x{203F}-\x{2040}";

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[{NAME_START_CHAR}][{NAME_START_CHAR}{NAME_CHAR}]*$"))
        .expect("name grammar regex is valid")
});

/// Check whether `name` is a legal XML tag or attribute name.
///
/// This is the check the serializer applies to every element name and
/// attribute name before emitting it; it is exposed so callers can
/// validate names up front.
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}
