// src/input.rs
use crate::error::{AppError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

const STDIN_MARKER: &str = "-";

/// Where a document tree is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == STDIN_MARKER {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Reads and parses the document JSON.
    ///
    /// # Errors
    /// Returns [`AppError::Read`] when the source cannot be read and
    /// [`AppError::Parse`] when it is not valid JSON.
    pub fn load(&self) -> Result<Value> {
        let bytes = self.read_bytes().map_err(|source| AppError::Read {
            input: self.to_string(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| AppError::Parse {
            input: self.to_string(),
            source,
        })
    }

    fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        match self {
            Self::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
            Self::File(path) => std::fs::read(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<InputSource> for String {
    fn from(source: InputSource) -> Self {
        source.to_string()
    }
}
