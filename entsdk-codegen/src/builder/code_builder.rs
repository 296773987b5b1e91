//! Code builder utility for generating properly indented code.

use super::Indent;

/// Mutable API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use entsdk_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::csharp();
/// builder.push_block("public class Avatar", "}", |b| {
///     b.push_line("public UInt16 hp = 0;");
/// });
///
/// assert_eq!(
///     builder.build(),
///     "public class Avatar\n{\n    public UInt16 hp = 0;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Create a new CodeBuilder with tab indentation.
    pub fn cpp() -> Self {
        Self::new(Indent::CPP)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a line comment (`// text`).
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Add an Allman-style block: header line, opening brace, indented
    /// body, and `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_line("{").push_indent();
        f(&mut *self);
        self.push_dedent().push_line(close)
    }

    /// Replace every occurrence of `token` and return how many were replaced.
    pub fn substitute(&mut self, token: &str, replacement: &str) -> usize {
        let count = self.buffer.matches(token).count();
        if count > 0 {
            self.buffer = self.buffer.replace(token, replacement);
        }
        count
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::csharp();
        builder.push_line("using System;");
        assert_eq!(builder.build(), "using System;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::cpp();
        builder
            .push_line("class Avatar")
            .push_line("{")
            .push_line("public:")
            .push_indent()
            .push_line("uint16 hp = 0;")
            .push_dedent()
            .push_line("};");
        assert_eq!(
            builder.build(),
            "class Avatar\n{\npublic:\n\tuint16 hp = 0;\n};\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::csharp();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_blank_and_comment() {
        let mut builder = CodeBuilder::csharp();
        builder.push_comment("header").push_blank().push_raw("tail");
        assert_eq!(builder.build(), "// header\n\ntail");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::csharp();
        builder.push_block("namespace Sdk", "}", |b| {
            b.push_block("public class A", "}", |b| {
                b.push_line("public int x = 0;");
            });
        });
        assert_eq!(
            builder.build(),
            "namespace Sdk\n{\n    public class A\n    {\n        public int x = 0;\n    }\n}\n"
        );
    }

    #[test]
    fn test_substitute_counts_occurrences() {
        let mut builder = CodeBuilder::csharp();
        builder.push_line("List<#A#>").push_line("#A#");
        assert_eq!(builder.substitute("#A#", "int"), 2);
        assert_eq!(builder.substitute("#B#", "int"), 0);
        assert_eq!(builder.as_str(), "List<int>\nint\n");
    }
}
