//! Configuration for building a tag list from the environment.
//!
//! | Variable                  | Effect                                    |
//! |---------------------------|-------------------------------------------|
//! | `REGIONLANG_TAGS`         | Comma-separated tags replacing defaults   |
//! | `REGIONLANG_PREPEND_TAGS` | Tags placed before the base list          |
//! | `REGIONLANG_APPEND_TAGS`  | Tags placed after the base list           |
//!
//! Appended tags override equally confident earlier matches, so
//! `REGIONLANG_APPEND_TAGS=en-CA` makes Canada resolve to English.

use crate::finder::Finder;
use crate::language::{all_default_tags, LanguageTag};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub const TAGS_VAR: &str = "REGIONLANG_TAGS";
pub const PREPEND_TAGS_VAR: &str = "REGIONLANG_PREPEND_TAGS";
pub const APPEND_TAGS_VAR: &str = "REGIONLANG_APPEND_TAGS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Replaces the default tags when set
    pub tags: Option<Vec<LanguageTag>>,

    /// Placed before the base list
    pub prepend_tags: Vec<LanguageTag>,

    /// Placed after the base list
    pub append_tags: Vec<LanguageTag>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a `.env`-style file.
    ///
    /// The process environment is neither read nor modified.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let vars = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .collect::<std::result::Result<Vec<(String, String)>, _>>()
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Self::from_lookup(|key| {
            vars.iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        })
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Every listed tag is parsed here; an invalid one is an error naming
    /// its variable. A variable that is unset, empty or holds only
    /// separators counts as unset, so an empty `REGIONLANG_TAGS` keeps the
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            tags: read_list(&lookup, TAGS_VAR)?,
            prepend_tags: read_list(&lookup, PREPEND_TAGS_VAR)?.unwrap_or_default(),
            append_tags: read_list(&lookup, APPEND_TAGS_VAR)?.unwrap_or_default(),
        })
    }

    /// Build the ordered tag list: prepended tags, base list, appended tags.
    ///
    /// The base list is `tags` if set, the built-in defaults otherwise.
    pub fn tags(&self) -> Vec<LanguageTag> {
        let base = match &self.tags {
            Some(tags) => {
                info!(count = tags.len(), "Replacing default tags");
                tags.clone()
            }
            None => all_default_tags().to_vec(),
        };

        if !self.prepend_tags.is_empty() || !self.append_tags.is_empty() {
            info!(
                prepended = self.prepend_tags.len(),
                appended = self.append_tags.len(),
                "Extending tag list"
            );
        }

        self.prepend_tags
            .iter()
            .cloned()
            .chain(base)
            .chain(self.append_tags.iter().cloned())
            .collect()
    }

    /// Build a [`Finder`] owning the configured tag list.
    pub fn finder(&self) -> Finder<'static> {
        Finder::from_tags(self.tags())
    }
}

/// Read a comma-separated tag list; `None` when there are no items.
fn read_list<F>(lookup: &F, var: &str) -> Result<Option<Vec<LanguageTag>>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };

    let tags = value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            LanguageTag::parse(item).with_context(|| format!("{} contains an invalid tag", var))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(if tags.is_empty() { None } else { Some(tags) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn tags(codes: &[&str]) -> Vec<LanguageTag> {
        codes
            .iter()
            .map(|code| LanguageTag::parse(code).expect("valid tag"))
            .collect()
    }

    // ==================== Loading Tests ====================

    #[test]
    fn test_empty_lookup_is_default() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_lists_are_split_and_trimmed() {
        let config = Config::from_lookup(lookup(&[
            (TAGS_VAR, "de, fr-CA ,,en"),
            (APPEND_TAGS_VAR, "en-CA"),
        ]))
        .unwrap();

        assert_eq!(config.tags, Some(tags(&["de", "fr-CA", "en"])));
        assert_eq!(config.append_tags, tags(&["en-CA"]));
        assert!(config.prepend_tags.is_empty());
    }

    #[test]
    fn test_invalid_tag_names_variable() {
        let err = Config::from_lookup(lookup(&[(APPEND_TAGS_VAR, "en-CA,!!")])).unwrap_err();
        assert!(err.to_string().contains(APPEND_TAGS_VAR));
    }

    // ==================== Empty Variable Tests ====================

    #[test]
    fn test_empty_tags_var_keeps_defaults() {
        for value in ["", "   ", " , ,"] {
            let config = Config::from_lookup(lookup(&[(TAGS_VAR, value)])).unwrap();
            assert_eq!(config.tags, None);
            assert_eq!(config.tags(), all_default_tags().to_vec());
        }
    }

    #[test]
    fn test_empty_tags_var_with_append_keeps_defaults() {
        let config =
            Config::from_lookup(lookup(&[(TAGS_VAR, ""), (APPEND_TAGS_VAR, "fr-BE")])).unwrap();

        let finder = config.finder();
        assert_eq!(finder.tags().len(), all_default_tags().len() + 1);
        assert_eq!(finder.find("de").0.as_str(), "de");
        assert_eq!(finder.find("be").0.as_str(), "fr");
    }

    // ==================== Tag List Tests ====================

    #[test]
    fn test_tags_default_to_builtin() {
        assert_eq!(Config::default().tags(), all_default_tags().to_vec());
    }

    #[test]
    fn test_tags_order_prepend_base_append() {
        let config = Config {
            tags: Some(tags(&["de"])),
            prepend_tags: tags(&["fr"]),
            append_tags: tags(&["it"]),
        };

        let codes: Vec<String> = config.tags().iter().map(|t| t.to_string()).collect();
        assert_eq!(codes, vec!["fr", "de", "it"]);
    }

    #[test]
    fn test_finder_applies_override() {
        let config = Config {
            append_tags: tags(&["en-CA"]),
            ..Config::default()
        };

        let (base, _) = config.finder().find("ca");
        assert_eq!(base.as_str(), "en");
    }
}
