//! `rill.toml` loading.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rill.toml";

/// Result type for config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(rill::config_io),
        help("omit --config to fall back to ./rill.toml or the built-in defaults")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(rill::config_parse))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub compile: CompileConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    pub out_dir: PathBuf,
    pub stdout: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            stdout: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, a missing `rill.toml` in
    /// the working directory yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse `content`, naming it `filename` in diagnostics.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| {
            let span = source.span().map(SourceSpan::from);
            Box::new(Error::Parse {
                filename: filename.to_string(),
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = Config::parse("", "rill.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.compile.out_dir, PathBuf::from("."));
        assert!(!config.compile.stdout);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_full_file() {
        let config = Config::parse(
            r#"
[compile]
out_dir = "build/bpmn"
stdout = true

[log]
level = "info"
"#,
            "rill.toml",
        )
        .unwrap();

        assert_eq!(config.compile.out_dir, PathBuf::from("build/bpmn"));
        assert!(config.compile.stdout);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = Config::parse("[compile]\nstdout = true\n", "rill.toml").unwrap();
        assert_eq!(config.compile.out_dir, PathBuf::from("."));
        assert!(config.compile.stdout);
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::parse("[compile]\nout = \"x\"\n", "custom.toml").unwrap_err();
        match *err {
            Error::Parse { filename, span, .. } => {
                assert_eq!(filename, "custom.toml");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rill.toml");
        fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
