//! Generator configuration.
//!
//! Read from the `[codegen]` table of a TOML document; every key is optional.
//!
//! ```toml
//! [codegen]
//! export_hook = true
//! validation = "strict"
//! indent_width = 4
//! parallel = true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{HookgenError, Result};
use crate::ir::EmitOptions;

/// How input problems are handled before synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Fail on the first invalid endpoint
    #[default]
    Strict,
    /// Log a warning and embed placeholder text
    Lenient,
}

/// Options controlling synthesis and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Prefix the hook constant with `export`
    pub export_hook: bool,
    /// Validation mode applied to the endpoint document
    pub validation: ValidationMode,
    /// Spaces per indentation level in rendered output
    pub indent_width: usize,
    /// Synthesize modules on the rayon thread pool
    pub parallel: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            export_hook: true,
            validation: ValidationMode::Strict,
            indent_width: 4,
            parallel: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    codegen: CodegenConfig,
}

impl CodegenConfig {
    /// Parse a TOML document containing an optional `[codegen]` table.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.codegen)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| HookgenError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), ?config, "Loaded codegen config.");
        Ok(config)
    }

    /// Renderer options derived from this config.
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            indent_width: self.indent_width,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodegenConfig::default();
        assert!(config.export_hook);
        assert_eq!(config.validation, ValidationMode::Strict);
        assert_eq!(config.indent_width, 4);
        assert!(config.parallel);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(CodegenConfig::from_toml_str("").unwrap(), CodegenConfig::default());
    }

    #[test]
    fn test_partial_table() {
        let config = CodegenConfig::from_toml_str(
            r#"
[codegen]
export_hook = false
validation = "lenient"
"#,
        )
        .unwrap();
        assert!(!config.export_hook);
        assert_eq!(config.validation, ValidationMode::Lenient);
        assert_eq!(config.indent_width, 4);
        assert!(config.parallel);
    }

    #[test]
    fn test_invalid_validation_mode() {
        let err = CodegenConfig::from_toml_str("[codegen]\nvalidation = \"loose\"\n").unwrap_err();
        assert!(matches!(err, HookgenError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CodegenConfig::load(&dir.path().join("hookgen.toml")).unwrap_err();
        assert!(matches!(err, HookgenError::ConfigIo { .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hookgen.toml");
        fs::write(&path, "[codegen]\nindent_width = 2\nparallel = false\n").unwrap();
        let config = CodegenConfig::load(&path).unwrap();
        assert_eq!(config.indent_width, 2);
        assert!(!config.parallel);
        assert_eq!(config.emit_options().indent_width, 2);
    }
}
