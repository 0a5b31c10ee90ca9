//! Identifier and literal helpers for Rust source emission.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Rust keywords that cannot appear as bare identifiers.
pub static RUST_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ]
    .into_iter()
    .collect()
});

/// Keywords without a raw-identifier form.
const NO_RAW_FORM: [&str; 4] = ["self", "Self", "super", "crate"];

/// Escape a string for use inside a double-quoted Rust string literal.
pub fn escape_str_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Convert a contract-style name (`GetStringAsync`, `itemId`) to snake_case.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Sanitize a name into a valid Rust identifier.
///
/// Non-identifier characters become underscores, a leading digit gets an
/// underscore prefix, and reserved words become raw identifiers where the
/// language allows it (underscore-prefixed otherwise).
pub fn sanitize_ident(name: &str) -> String {
    let mut result: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if result.is_empty() {
        return "_unnamed".to_owned();
    }

    if result.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    if RUST_RESERVED_WORDS.contains(result.as_str()) {
        if NO_RAW_FORM.contains(&result.as_str()) {
            result.insert(0, '_');
        } else {
            result = format!("r#{result}");
        }
    }

    result
}

/// Rust method identifier for a contract operation name.
pub fn method_ident(operation_name: &str) -> String {
    sanitize_ident(&to_snake_case(operation_name))
}

/// Rust binding identifier for a contract parameter name.
pub fn param_ident(parameter_name: &str) -> String {
    sanitize_ident(&to_snake_case(parameter_name))
}
