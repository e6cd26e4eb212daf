//! Identifier rules for generated C# code.

/// C# reserved keywords that cannot be used as bare identifiers.
/// Source: https://learn.microsoft.com/dotnet/csharp/language-reference/keywords/
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword.
pub fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Validate that a name is a usable C# identifier.
///
/// Returns `None` if valid, `Some(reason)` if not. Keywords are reported
/// separately through [`is_csharp_keyword`] so callers can word the error.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Escape a keyword as a verbatim identifier (`class` -> `@class`).
pub fn escape_keyword(name: &str) -> String {
    if is_csharp_keyword(name) {
        format!("@{name}")
    } else {
        name.to_string()
    }
}

/// Parameter name for a member: leading underscores dropped, first letter
/// lowercased, keywords escaped (`_data` -> `data`, `Class` -> `@class`).
///
/// A name made only of underscores is kept as is.
pub fn parameter_name(member: &str) -> String {
    let trimmed = member.trim_start_matches('_');
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return member.to_string();
    };
    let camel: String = first.to_lowercase().chain(chars).collect();
    escape_keyword(&camel)
}
