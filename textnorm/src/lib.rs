#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** textnorm **
//! Small, deterministic text clean-up: tag stripping, line flattening,
//! ASCII transliteration and URL-safe slugs for strings and paths.
//!
//! ```
//! assert_eq!(textnorm::strip_tags("<b>Hello</b> &amp; World"), "Hello & World");
//! assert_eq!(textnorm::slugify("Héllo, World!!  Foo_Bar"), "hello-world-foo-bar");
//! assert_eq!(
//!     textnorm::slugify_path("/Some Café/Path?x=1&y=2", "-").unwrap(),
//!     "some-cafe/path?x=1&y=2"
//! );
//! ```

pub const TEXTNORM_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod clean;
pub mod config;
pub mod error;
pub mod slug;
pub mod translit;

// Re-exports for convenience
pub use clean::{decode_input, normalize_string, strip_lines, strip_tags};
pub use config::{Normalizer, NormalizerConfig, Strategy};
pub use error::NormalizeError;
pub use slug::{normalize_path, slugify, slugify_path, slugify_string};
pub use translit::{TableFold, Transliterate, default_transliterator, transliterate};

#[cfg(feature = "unicode")]
pub use translit::UnicodeFold;
