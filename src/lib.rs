//! Find the most likely base language spoken in a region.
//!
//! Given a region code such as `"at"` or `"CA"`, `regionlang` scans an
//! ordered list of language tags and returns the base language most
//! confidently associated with that region. The built-in list covers the
//! major world languages and a few regional variants.
//!
//! # Example
//!
//! ```rust
//! use regionlang::{find, Confidence};
//!
//! let (base, confidence) = find("fr", &[]);
//! assert_eq!(base.as_str(), "fr");
//! assert_eq!(confidence, Confidence::Exact);
//! ```
//!
//! When a region matches several tags with the same confidence, the last
//! one wins. Append tags to [`all_default_tags`] to override a default:
//!
//! ```rust
//! use regionlang::{all_default_tags, Finder, LanguageTag};
//!
//! let mut tags = all_default_tags().to_vec();
//! tags.push(LanguageTag::parse("fr-BE")?);
//!
//! let finder = Finder::new(&tags);
//! assert_eq!(finder.find("be").0.as_str(), "fr");
//! # Ok::<(), regionlang::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod finder;
pub mod language;
pub mod matcher;

pub use error::{Error, Result};
pub use finder::{find, Finder};
pub use language::{all_default_tags, parse_region, Base, Confidence, LanguageTag, Region};
