use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for entsdk-defs operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(&self.src, name)
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn invalid_type_expr_error(
        &self,
        expr: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let expr = expr.into();
        Box::new(Error::InvalidTypeExpr {
            src: self.named_source(),
            span: self.find_span(&expr),
            expr,
            reason: reason.into(),
        })
    }

    pub fn unknown_type_error(
        &self,
        name: impl Into<String>,
        used_in: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span: self.find_span(&name),
            name,
            used_in: used_in.into(),
        })
    }

    pub fn type_cycle_error(&self, name: impl Into<String>, cycle: &[String]) -> Box<Error> {
        let name = name.into();
        Box::new(Error::TypeCycle {
            src: self.named_source(),
            span: self.find_span(&name),
            name,
            cycle: cycle.join(" -> "),
        })
    }

    pub fn duplicate_type_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            span: self.find_span(&name),
            name,
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the definitions file with --defs, e.g. --defs entities.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse entity definitions")]
    #[diagnostic(code(entsdk::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid type expression '{expr}'")]
    #[diagnostic(
        code(entsdk::invalid_type_expr),
        help("{reason}. Expressions are a type name or ARRAY<expr>.")
    )]
    InvalidTypeExpr {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid expression")]
        span: Option<SourceSpan>,
        expr: String,
        reason: String,
    },

    #[error("unknown type '{name}' used in {used_in}")]
    #[diagnostic(
        code(entsdk::unknown_type),
        help("declare '{name}' under [types] or use a builtin type")
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared")]
        span: Option<SourceSpan>,
        name: String,
        used_in: String,
    },

    #[error("type '{name}' refers to itself: {cycle}")]
    #[diagnostic(code(entsdk::type_cycle))]
    TypeCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        name: String,
        cycle: String,
    },

    #[error("duplicate type '{name}'")]
    #[diagnostic(code(entsdk::duplicate_type), help("{reason}"))]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },
}

/// Find the span of a name in the TOML source.
///
/// Prefers key positions (`[types.NAME]`, `NAME =`) and falls back to the
/// first occurrence anywhere.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let patterns = [
        (format!(".{}]", name), 1),
        (format!("\n{} =", name), 1),
        (format!("\n{}=", name), 1),
        (format!("\"{}\"", name), 1),
    ];

    for (pattern, skip) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}
