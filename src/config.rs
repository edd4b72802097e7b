//! Configuration for translation

use std::{
    env,
    fmt::{self, Display},
    fs,
    path::{Path, PathBuf},
};

use paste::paste;
use serde::*;

use crate::{TranslateError, TranslateResult};

/// The name of the configuration file searched for by [`ConfigSource::SearchFile`]
pub const CONFIG_FILE_NAME: &str = ".translate.json";

macro_rules! create_config {
    ($(
        $(#[doc = $doc:literal])*
        (
            $name:ident,
            $ty:ty,
            $default:expr
        )
    ),* $(,)?) => {
        #[derive(Debug, Clone, Default, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        struct PartialTranslateConfig {
            $(
                $name: Option<$ty>,
            )*
        }

        /// Configuration for translation
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        pub struct TranslateConfig {
            $(
                $(#[doc = $doc])*
                #[doc = concat!("Default: `", stringify!($default), "`")]
                pub $name: $ty,
            )*
        }

        paste! {
            impl TranslateConfig {
                $(
                    #[doc = concat!("Set `", stringify!($name), "`")]
                    pub fn [<with_ $name>](self, $name: $ty) -> Self {
                        Self {
                            $name,
                            ..self
                        }
                    }
                )*
            }
        }

        impl Default for TranslateConfig {
            fn default() -> Self {
                Self {
                    $(
                        $name: $default,
                    )*
                }
            }
        }

        impl From<PartialTranslateConfig> for TranslateConfig {
            fn from(config: PartialTranslateConfig) -> Self {
                Self {
                    $(
                        $name: config.$name.unwrap_or($default),
                    )*
                }
            }
        }
    }
}

create_config!(
    /// Whether to substitute primitive tokens
    (primitives, bool, true),
    /// Whether to rewrite array literals
    (array_literals, bool, true),
    /// Whether to translate the markers that start line comments
    ///
    /// Comment text itself is never changed.
    (comment_markers, bool, true),
);

impl TranslateConfig {
    /// Only substitute primitives and comment markers
    pub fn primitives_only() -> Self {
        Self::default().with_array_literals(false)
    }
    /// Only rewrite array literals
    pub fn array_literals_only() -> Self {
        Self::default()
            .with_primitives(false)
            .with_comment_markers(false)
    }
    /// Whether any pass is enabled
    pub fn any(&self) -> bool {
        self.primitives || self.array_literals || self.comment_markers
    }
    /// Reject a configuration that would leave every input unchanged
    pub fn require_any(self) -> TranslateResult<Self> {
        if self.any() {
            Ok(self)
        } else {
            Err(TranslateError::NoPasses)
        }
    }
    /// Parse a configuration from JSON
    ///
    /// Missing options take their default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<PartialTranslateConfig>(json).map(Into::into)
    }
    /// Load a configuration file
    pub fn from_file(path: PathBuf) -> TranslateResult<Self> {
        let json = fs::read_to_string(&path).map_err(|e| TranslateError::Read(path.clone(), e))?;
        Self::from_json(&json).map_err(|e| TranslateError::Config(path, e))
    }
    /// Get a configuration from a source
    pub fn from_source(source: ConfigSource, target_path: Option<&Path>) -> TranslateResult<Self> {
        match source {
            ConfigSource::SearchFile => {
                if let Some(file_path) = Self::search_config_file(target_path) {
                    Self::from_file(file_path)
                } else {
                    Ok(Self::default())
                }
            }
            ConfigSource::Default => Ok(Self::default()),
            ConfigSource::Path(file_path) => Self::from_file(file_path),
        }
    }
    fn search_config_file(path: Option<&Path>) -> Option<PathBuf> {
        let mut path = path
            .and_then(|p| fs::canonicalize(p).ok())
            .unwrap_or(env::current_dir().ok()?);
        loop {
            let file_path = path.join(CONFIG_FILE_NAME);
            if file_path.is_file() {
                return Some(file_path);
            }
            if !path.pop() {
                return None;
            }
        }
    }
}

/// The source from which to populate the translation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Search upward for a `.translate.json` file, using the default
    /// configuration if none is found
    SearchFile,
    /// Use the default configuration
    Default,
    /// Use the configuration in the specified file
    Path(PathBuf),
}

impl From<&str> for ConfigSource {
    fn from(s: &str) -> Self {
        match s {
            "search-file" => Self::SearchFile,
            "default" => Self::Default,
            path => Self::Path(path.into()),
        }
    }
}

impl Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::SearchFile => write!(f, "search-file"),
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let config = TranslateConfig::default();
        assert!(config.primitives && config.array_literals && config.comment_markers);
        assert!(!TranslateConfig::array_literals_only().primitives);
        assert!(!TranslateConfig::primitives_only().array_literals);
        assert!(!TranslateConfig::default()
            .with_primitives(false)
            .with_array_literals(false)
            .with_comment_markers(false)
            .any());
    }

    #[test]
    fn some_pass_is_required() {
        assert!(TranslateConfig::default().require_any().is_ok());
        let none = TranslateConfig::array_literals_only().with_array_literals(false);
        assert!(matches!(none.require_any(), Err(TranslateError::NoPasses)));
    }

    #[test]
    fn partial_json() {
        let config = TranslateConfig::from_json(r#"{"array_literals": false}"#).unwrap();
        assert_eq!(config, TranslateConfig::primitives_only());
        assert_eq!(
            TranslateConfig::from_json("{}").unwrap(),
            TranslateConfig::default()
        );
        assert!(TranslateConfig::from_json(r#"{"colour": true}"#).is_err());
    }

    #[test]
    fn source_names() {
        assert_eq!(ConfigSource::from("default"), ConfigSource::Default);
        assert_eq!(ConfigSource::from("search-file").to_string(), "search-file");
        assert_eq!(
            ConfigSource::from("cfg.json"),
            ConfigSource::Path("cfg.json".into())
        );
    }
}
