//! Language model: tags, regions and the built-in default tag list.
//!
//! # Architecture
//!
//! - `tag`: `LanguageTag` with region/base extraction and `Confidence`
//! - `region`: `Region` and the region code parser
//! - `defaults`: the default tag registry
//!
//! # Example
//!
//! ```rust
//! use regionlang::language::{parse_region, Confidence, LanguageTag};
//!
//! let tag = LanguageTag::parse("fr-CA")?;
//! let (region, confidence) = tag.region();
//!
//! assert_eq!(region, parse_region("ca")?);
//! assert_eq!(confidence, Confidence::Exact);
//! # Ok::<(), regionlang::Error>(())
//! ```

mod defaults;
mod region;
mod tag;

pub use defaults::{all_default_tags, DefaultTag, DefaultTags};
pub use region::{parse_region, Region};
pub use tag::{Base, Confidence, LanguageTag};
