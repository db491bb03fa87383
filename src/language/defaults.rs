//! Default tags: the built-in candidate list used when no tags are given.
//!
//! The list is parsed once on first access (`OnceLock`) and is immutable
//! thereafter, so it can be shared freely across threads.

use crate::language::LanguageTag;
use std::sync::OnceLock;

/// A named entry of the default tag list.
#[derive(Debug, Clone)]
pub struct DefaultTag {
    /// English name of the variant (e.g. "Canadian French")
    pub name: &'static str,

    /// The parsed tag (e.g. `fr-CA`)
    pub tag: LanguageTag,
}

/// Registry of the built-in default tags.
///
/// Order matters: when several tags match a region with equal confidence,
/// the later one wins.
pub struct DefaultTags {
    entries: Vec<DefaultTag>,
    tags: Vec<LanguageTag>,
}

/// Global registry instance (initialized lazily)
static DEFAULT_TAGS: OnceLock<DefaultTags> = OnceLock::new();

impl DefaultTags {
    /// Get the global default tag registry.
    pub fn get() -> &'static DefaultTags {
        DEFAULT_TAGS.get_or_init(|| {
            let entries: Vec<DefaultTag> = DEFAULT_TAG_CODES
                .iter()
                .map(|&(code, name)| DefaultTag {
                    name,
                    tag: LanguageTag::parse(code).expect("Default tag codes should always be valid"),
                })
                .collect();
            let tags = entries.iter().map(|entry| entry.tag.clone()).collect();
            DefaultTags { entries, tags }
        })
    }

    /// All default tags, in order.
    pub fn tags(&self) -> &[LanguageTag] {
        &self.tags
    }

    /// All default entries with their names, in order.
    pub fn entries(&self) -> &[DefaultTag] {
        &self.entries
    }

    /// Get a default tag by its English name (e.g. "Canadian French").
    ///
    /// # Returns
    /// * `Some(&LanguageTag)` if the name exists
    /// * `None` if no default tag has this name
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageTag> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| &entry.tag)
    }

    /// Get a default tag by its code (e.g. "fr-CA").
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageTag> {
        let wanted = LanguageTag::parse(code).ok()?;
        self.tags.iter().find(|tag| **tag == wanted)
    }
}

/// The built-in default tags, in order.
///
/// Pass this (extended or prepended to) as a custom candidate list to
/// override specific regions.
pub fn all_default_tags() -> &'static [LanguageTag] {
    DefaultTags::get().tags()
}

// Keep this updated.
const DEFAULT_TAG_CODES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("ar-001", "Modern Standard Arabic"),
    ("az", "Azerbaijani"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("en-US", "American English"),
    ("en-GB", "British English"),
    ("es", "Spanish"),
    ("es-ES", "European Spanish"),
    ("es-419", "Latin American Spanish"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("fr-CA", "Canadian French"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("ky", "Kirghiz"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("my", "Burmese"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pt-BR", "Brazilian Portuguese"),
    ("pt-PT", "European Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sr-Latn", "Serbian Latin"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
    ("zh-Hans", "Simplified Chinese"),
    ("zh-Hant", "Traditional Chinese"),
    ("zu", "Zulu"),
];
