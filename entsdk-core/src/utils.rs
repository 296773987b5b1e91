//! Shared string helpers for code generation.

/// Convert a string to PascalCase (e.g., "cur_hp" -> "CurHp")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Escape a string for use inside a double-quoted literal in C# or C++.
pub fn escape_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hp"), "Hp");
        assert_eq!(to_pascal_case("cur_hp"), "CurHp");
        assert_eq!(to_pascal_case("moveSpeed"), "MoveSpeed");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_escape_string_literal() {
        assert_eq!(escape_string_literal("plain"), "plain");
        assert_eq!(
            escape_string_literal(r#"say "hi"\now"#),
            r#"say \"hi\"\\now"#
        );
        assert_eq!(escape_string_literal("a\nb"), "a\\nb");
    }
}
