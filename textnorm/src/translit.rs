//! Transliteration strategies.
//!
//! Two interchangeable folds turn accented Latin letters and "smart" punctuation
//! into plain ASCII:
//!
//! - [`UnicodeFold`] decomposes, drops combining marks, recomposes, then maps
//!   leftover Latin letters (`ø`, `ß`, `æ`, ...) through `any_ascii`. Needs the
//!   `unicode` feature (on by default).
//! - [`TableFold`] applies a fixed, ordered table of regex character classes and
//!   is always available.
//!
//! [`default_transliterator`] chooses one of them once per process.

use std::fmt;
use std::sync::LazyLock;

use log::debug;

use crate::NormalizeError;
use crate::config::Strategy;

mod table;
#[cfg(feature = "unicode")]
mod unicode;

pub use table::TableFold;
#[cfg(feature = "unicode")]
pub use unicode::UnicodeFold;

/// Single quotes (curly, angled, low) that fold to a space.
pub(crate) const SINGLE_QUOTES: &str = "\u{2019}\u{2018}\u{2039}\u{203A}\u{201A}";
/// Double quotes (curly, guillemets, low) that fold to a space.
pub(crate) const DOUBLE_QUOTES: &str = "\u{201C}\u{201D}\u{00AB}\u{00BB}\u{201E}";
/// En and em dash, both folded to `-`.
pub(crate) const DASHES: &str = "\u{2013}\u{2014}";
pub(crate) const NO_BREAK_SPACE: char = '\u{00A0}';

/// A stateless text fold toward ASCII.
pub trait Transliterate: Send + Sync {
    /// Fold `input`, returning a new string.
    fn transliterate(&self, input: &str) -> String;

    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn Transliterate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static TABLE: TableFold = TableFold;
#[cfg(feature = "unicode")]
static UNICODE: UnicodeFold = UnicodeFold;

static DEFAULT: LazyLock<&'static dyn Transliterate> = LazyLock::new(|| {
    #[cfg(feature = "unicode")]
    let fold: &'static dyn Transliterate = &UNICODE;
    #[cfg(not(feature = "unicode"))]
    let fold: &'static dyn Transliterate = &TABLE;

    debug!("default transliteration strategy: {}", fold.name());
    fold
});

/// The process-wide transliterator: [`UnicodeFold`] when compiled in, else [`TableFold`].
pub fn default_transliterator() -> &'static dyn Transliterate {
    *DEFAULT
}

/// Resolve a configured [`Strategy`] to its implementation.
pub fn transliterator_for(strategy: Strategy) -> Result<&'static dyn Transliterate, NormalizeError> {
    match strategy {
        Strategy::Auto => Ok(default_transliterator()),
        Strategy::Table => Ok(&TABLE),
        #[cfg(feature = "unicode")]
        Strategy::Unicode => Ok(&UNICODE),
        #[cfg(not(feature = "unicode"))]
        Strategy::Unicode => Err(NormalizeError::StrategyUnavailable(strategy)),
    }
}

/// Fold accented letters and smart punctuation to ASCII with the default strategy.
///
/// ```
/// assert_eq!(textnorm::transliterate("café naïve"), "cafe naive");
/// assert_eq!(textnorm::transliterate("“quoted” – text"), " quoted  - text");
/// ```
pub fn transliterate(input: &str) -> String {
    default_transliterator().transliterate(input)
}
