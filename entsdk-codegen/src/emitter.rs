//! Per-file output buffers.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use entsdk_core::{normalize_path, write_file_atomic};

use crate::{
    builder::{CodeBuilder, Indent},
    error::{CodegenError, Result},
};

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// A token reserved in an [`Emitter`] buffer for deferred substitution.
///
/// Substituting consumes the placeholder, so it can be filled at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct Placeholder {
    token: String,
}

impl Placeholder {
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Text buffer and target name for the one file currently being produced.
#[derive(Debug)]
pub struct Emitter {
    file_name: String,
    code: CodeBuilder,
    pending: Vec<String>,
    next_slot: usize,
}

impl Emitter {
    pub fn new(file_name: impl Into<String>, indent: Indent) -> Self {
        Self {
            file_name: file_name.into(),
            code: CodeBuilder::new(indent),
            pending: Vec::new(),
            next_slot: 0,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Current buffer content.
    pub fn content(&self) -> &str {
        self.code.as_str()
    }

    /// Append a raw fragment.
    pub fn write(&mut self, fragment: &str) -> &mut Self {
        self.code.push_raw(fragment);
        self
    }

    /// Run a backend hook against the buffer.
    pub fn emit<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        hook(&mut self.code);
        self
    }

    /// Reserve a fresh token. Nothing is written; the hook that renders the
    /// surrounding text embeds it.
    pub fn placeholder(&mut self) -> Placeholder {
        self.next_slot += 1;
        let token = format!("#SLOT{}#", self.next_slot);
        self.pending.push(token.clone());
        Placeholder { token }
    }

    /// Replace the single occurrence of `placeholder` with `replacement`.
    pub fn substitute(&mut self, placeholder: Placeholder, replacement: &str) -> Result<usize> {
        let Placeholder { token } = placeholder;
        let found = self.content().matches(token.as_str()).count();
        if found != 1 {
            return Err(self.mismatch(
                &token,
                format!("expected exactly one occurrence, found {}", found),
            ));
        }

        let replaced = self.code.substitute(&token, replacement);
        self.pending.retain(|pending| *pending != token);
        Ok(replaced)
    }

    /// Close the buffer, checking that every placeholder was substituted.
    pub fn finish(self) -> Result<PreviewFile> {
        if let Some(token) = self.pending.first() {
            return Err(self.mismatch(token, "never substituted".to_string()));
        }
        Ok(PreviewFile {
            path: self.file_name,
            content: self.code.build(),
        })
    }

    /// Finish the buffer and write it under `output_dir`, creating missing
    /// directories.
    pub fn flush(self, output_dir: &Path) -> Result<PathBuf> {
        let file = self.finish()?;
        let path = normalize_path(&output_dir.join(&file.path));

        tracing::debug!("writing {} ({} bytes)", path.display(), file.content.len());
        write_file_atomic(&path, &file.content).map_err(|err| CodegenError::write(&path, err))?;
        Ok(path)
    }

    fn mismatch(&self, token: &str, detail: String) -> CodegenError {
        CodegenError::PlaceholderMismatch {
            file: self.file_name.clone(),
            token: token.to_string(),
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_placeholder_substitution() {
        let mut emitter = Emitter::new("EntityTypes.cs", Indent::CSHARP);
        let slot = emitter.placeholder();
        emitter.emit(|out| {
            out.push_line(&format!("public class IDS : List<{}>", slot));
        });

        assert_eq!(emitter.substitute(slot, "Int32").unwrap(), 1);

        let file = emitter.finish().unwrap();
        assert_eq!(file.path, "EntityTypes.cs");
        assert_eq!(file.content, "public class IDS : List<Int32>\n");
    }

    #[test]
    fn test_placeholders_are_unique() {
        let mut emitter = Emitter::new("f", Indent::CSHARP);
        let a = emitter.placeholder();
        let b = emitter.placeholder();
        assert_ne!(a.token(), b.token());
    }

    #[test]
    fn test_missing_token_is_mismatch() {
        let mut emitter = Emitter::new("f", Indent::CSHARP);
        let slot = emitter.placeholder();
        emitter.write("nothing here");

        let err = emitter.substitute(slot, "x").unwrap_err();
        assert!(matches!(err, CodegenError::PlaceholderMismatch { .. }));
        assert!(err.to_string().contains("found 0"));
    }

    #[test]
    fn test_duplicated_token_is_mismatch() {
        let mut emitter = Emitter::new("f", Indent::CSHARP);
        let slot = emitter.placeholder();
        let line = format!("{} {}", slot, slot);
        emitter.write(&line);

        let err = emitter.substitute(slot, "x").unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_unsubstituted_token_fails_finish() {
        let mut emitter = Emitter::new("Avatar.h", Indent::CPP);
        let slot = emitter.placeholder();
        let line = format!("TArray<{}>", slot);
        emitter.write(&line);

        let err = emitter.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "placeholder '#SLOT1#' in Avatar.h: never substituted"
        );
    }

    #[test]
    fn test_flush_creates_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("client").join("sdk");

        let mut emitter = Emitter::new("Avatar.cs", Indent::CSHARP);
        emitter.write("// avatar\n");
        let path = emitter.flush(&out).unwrap();

        assert_eq!(path, out.join("Avatar.cs"));
        assert_eq!(fs::read_to_string(path).unwrap(), "// avatar\n");
    }

    #[test]
    fn test_flush_failure_is_io_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let emitter = Emitter::new("Avatar.cs", Indent::CSHARP);
        let err = emitter.flush(&blocker).unwrap_err();
        assert!(matches!(err, CodegenError::Io { .. }));
    }
}
