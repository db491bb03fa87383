//! Finder: a tag list bound to the region matcher.

use crate::language::{all_default_tags, Base, Confidence, LanguageTag};
use crate::matcher::find_in;
use std::borrow::Cow;

/// Finds base languages for regions (countries).
///
/// A `Finder` holds an ordered tag list that never changes after
/// construction, so it can be shared between threads.
///
/// # Example
/// ```
/// use regionlang::{Confidence, Finder};
///
/// let finder = Finder::default();
/// let (base, confidence) = finder.find("us");
///
/// assert_eq!(base.as_str(), "en");
/// assert_eq!(confidence, Confidence::Exact);
/// ```
#[derive(Debug, Clone)]
pub struct Finder<'a> {
    tags: Cow<'a, [LanguageTag]>,
}

impl<'a> Finder<'a> {
    /// Create a Finder for the given tags.
    ///
    /// An empty slice binds the built-in default tags instead.
    pub fn new(tags: &'a [LanguageTag]) -> Self {
        if tags.is_empty() {
            return Self::default();
        }
        Finder {
            tags: Cow::Borrowed(tags),
        }
    }

    /// Find the base language for a region.
    ///
    /// See [`find_in`] for the matching rules.
    pub fn find(&self, region: &str) -> (Base, Confidence) {
        find_in(region, &self.tags)
    }

    /// The tags this Finder searches, in order.
    pub fn tags(&self) -> &[LanguageTag] {
        &self.tags
    }
}

impl Finder<'static> {
    /// Create a Finder that owns its tags.
    ///
    /// An empty vector binds the built-in default tags instead.
    pub fn from_tags(tags: Vec<LanguageTag>) -> Self {
        if tags.is_empty() {
            return Self::default();
        }
        Finder {
            tags: Cow::Owned(tags),
        }
    }
}

impl Default for Finder<'_> {
    fn default() -> Self {
        Finder {
            tags: Cow::Borrowed(all_default_tags()),
        }
    }
}

/// Find the base language for a region using a one-shot [`Finder`].
///
/// If `tags` is empty, the built-in default tags are used. When a region
/// matches several tags with the same confidence, the last one wins.
///
/// # Example
/// ```
/// use regionlang::{all_default_tags, find, LanguageTag};
///
/// let mut tags = all_default_tags().to_vec();
/// tags.push(LanguageTag::parse("en-CA")?);
///
/// let (base, _) = find("ca", &tags);
/// assert_eq!(base.as_str(), "en");
/// # Ok::<(), regionlang::Error>(())
/// ```
pub fn find(region: &str, tags: &[LanguageTag]) -> (Base, Confidence) {
    Finder::new(tags).find(region)
}
