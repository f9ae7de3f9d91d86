//! Normalizer configuration.
//!
//! A [`Normalizer`] pairs a separator with a transliteration strategy so callers
//! can fix both once (usually from a TOML file) instead of passing them per call.
//!
//! ```toml
//! separator = "_"
//! strategy = "table"   # auto | unicode | table
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::NormalizeError;
use crate::clean::{normalize_with, strip_lines, strip_tags};
use crate::slug::{DEFAULT_SEPARATOR, SEPARATOR_CHARS, normalize_path_with, slugify_path_with, slugify_with};
use crate::translit::{Transliterate, transliterator_for};

/// Which transliteration strategy a [`Normalizer`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Unicode normalization when compiled in, else the table.
    #[default]
    Auto,
    /// Unicode normalization; fails to resolve without the `unicode` feature.
    Unicode,
    /// Fixed regex substitution table.
    Table,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Auto => "auto",
            Strategy::Unicode => "unicode",
            Strategy::Table => "table",
        })
    }
}

/// Settings read from a config file or built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    pub separator: String,
    pub strategy: Strategy,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            strategy: Strategy::Auto,
        }
    }
}

impl NormalizerConfig {
    /// Parse a TOML document. Missing keys take their defaults; unknown keys are errors.
    pub fn from_toml_str(src: &str) -> Result<Self, NormalizeError> {
        Ok(toml::from_str(src)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NormalizeError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| NormalizeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&src)?;
        debug!("loaded normalizer config from '{}': {config:?}", path.display());
        Ok(config)
    }
}

/// A configured set of transforms.
///
/// The free functions of the crate behave like `Normalizer::default()`.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    fold: &'static dyn Transliterate,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            config: NormalizerConfig::default(),
            fold: crate::translit::default_transliterator(),
        }
    }
}

impl Normalizer {
    /// Validate `config` and resolve its strategy.
    ///
    /// # Errors
    /// `InvalidSeparator` when the separator is empty or uses characters outside
    /// the allowed set; `StrategyUnavailable` when the strategy is not compiled in.
    pub fn new(config: NormalizerConfig) -> Result<Self, NormalizeError> {
        validate_separator(&config.separator)?;
        let fold = transliterator_for(config.strategy)?;
        debug!("normalizer ready: separator {:?}, strategy {}", config.separator, fold.name());
        Ok(Self { config, fold })
    }

    /// Build from a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, NormalizeError> {
        Self::new(NormalizerConfig::from_toml_str(src)?)
    }

    /// Build from a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NormalizeError> {
        Self::new(NormalizerConfig::load(path)?)
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Name of the resolved transliteration strategy (`"unicode"` or `"table"`).
    pub fn strategy_name(&self) -> &'static str {
        self.fold.name()
    }

    pub fn strip_tags(&self, input: &str) -> String {
        strip_tags(input)
    }

    pub fn strip_lines(&self, input: &str) -> String {
        strip_lines(input)
    }

    pub fn transliterate(&self, input: &str) -> String {
        self.fold.transliterate(input)
    }

    pub fn normalize_string(&self, input: &str, transliterate: bool) -> String {
        normalize_with(input, transliterate.then_some(self.fold))
    }

    /// Slugify text with the configured separator.
    pub fn slugify(&self, input: &str) -> String {
        slugify_with(input, &self.config.separator, self.fold)
    }

    /// Slugify a path or URL with the configured separator.
    pub fn slugify_path(&self, uri: &str) -> Result<String, NormalizeError> {
        slugify_path_with(uri, &self.config.separator, self.fold)
    }

    pub fn normalize_path(&self, uri: &str) -> Result<String, NormalizeError> {
        normalize_path_with(uri, self.fold)
    }
}

fn validate_separator(separator: &str) -> Result<(), NormalizeError> {
    if separator.is_empty() || !separator.chars().all(|ch| SEPARATOR_CHARS.contains(ch)) {
        return Err(NormalizeError::InvalidSeparator(separator.to_string()));
    }
    Ok(())
}
