//! Type expressions: `NAME` or `ARRAY<expr>`.

use std::fmt;

/// A parsed type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named(String),
    Array(Box<TypeExpr>),
}

impl TypeExpr {
    /// Parse an expression, returning the reason on failure.
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err("expression is empty".to_string());
        }

        if input == "ARRAY" {
            return Err("ARRAY needs an element type, e.g. ARRAY<INT32>".to_string());
        }
        if let Some(rest) = input.strip_prefix("ARRAY") {
            let rest = rest.trim_start();
            if let Some(inner) = rest.strip_prefix('<') {
                let inner = inner
                    .strip_suffix('>')
                    .ok_or_else(|| "missing closing '>' after the ARRAY element".to_string())?;
                return Ok(TypeExpr::Array(Box::new(TypeExpr::parse(inner)?)));
            }
        }

        let mut chars = input.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!(
                "'{}' is not a type name; use letters, digits, and underscores",
                input
            ));
        }
        Ok(TypeExpr::Named(input.to_string()))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => f.write_str(name),
            TypeExpr::Array(inner) => write!(f, "ARRAY<{}>", inner),
        }
    }
}
