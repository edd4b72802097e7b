use std::{error::Error, fmt, io, path::PathBuf};

use array_translate_table::UnknownLang;

/// An error from outside the translation core
///
/// Translation itself never fails. These errors come from parsing language
/// ids, loading configuration, and reading or writing files.
#[derive(Debug)]
pub enum TranslateError {
    UnknownLang(UnknownLang),
    Read(PathBuf, io::Error),
    Write(PathBuf, io::Error),
    Stdin(io::Error),
    Stdout(io::Error),
    Config(PathBuf, serde_json::Error),
    Json(serde_json::Error),
    NoPasses,
}

pub type TranslateResult<T = ()> = Result<T, TranslateError>;

impl From<UnknownLang> for TranslateError {
    fn from(e: UnknownLang) -> Self {
        Self::UnknownLang(e)
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::UnknownLang(e) => write!(f, "{e}"),
            TranslateError::Read(path, e) => {
                write!(f, "failed to read {}: {e}", path.to_string_lossy())
            }
            TranslateError::Write(path, e) => {
                write!(f, "failed to write {}: {e}", path.to_string_lossy())
            }
            TranslateError::Stdin(e) => write!(f, "failed to read stdin: {e}"),
            TranslateError::Stdout(e) => write!(f, "failed to write stdout: {e}"),
            TranslateError::Config(path, e) => {
                write!(f, "invalid config {}: {e}", path.to_string_lossy())
            }
            TranslateError::Json(e) => write!(f, "{e}"),
            TranslateError::NoPasses => write!(f, "every translation pass is disabled"),
        }
    }
}

impl Error for TranslateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranslateError::UnknownLang(e) => Some(e),
            TranslateError::Read(_, e)
            | TranslateError::Write(_, e)
            | TranslateError::Stdin(e)
            | TranslateError::Stdout(e) => Some(e),
            TranslateError::Config(_, e) | TranslateError::Json(e) => Some(e),
            TranslateError::NoPasses => None,
        }
    }
}

/// Parse a language id
pub fn parse_lang(id: &str) -> TranslateResult<array_translate_table::Lang> {
    Ok(id.parse()?)
}
