//! Language tags, base languages and confidence levels.
//!
//! `LanguageTag` wraps a `unic_langid::LanguageIdentifier` and derives a
//! region and a base language from it. Subtags that were not given
//! explicitly are inferred with CLDR likely subtags, and the returned
//! [`Confidence`] says how the value was obtained.

use crate::error::{Error, Result};
use crate::language::Region;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use unic_langid::{subtags, LanguageIdentifier};

/// How certain a derived value is.
///
/// Ordered: `No < Low < High < Exact`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Nothing could be derived
    #[default]
    No,
    /// Inferred from weak evidence
    Low,
    /// Inferred from strong evidence (script or country given)
    High,
    /// Given explicitly
    Exact,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Confidence::No => "no",
            Confidence::Low => "low",
            Confidence::High => "high",
            Confidence::Exact => "exact",
        };
        f.write_str(name)
    }
}

/// A base language, independent of script and region (e.g. "de").
///
/// The default value is "und" (undetermined).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Base(subtags::Language);

impl Base {
    /// The language subtag, "und" when undetermined.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_undetermined(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Base {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An immutable BCP 47 language tag such as `de`, `fr-CA` or `zh-Hant`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(LanguageIdentifier);

impl LanguageTag {
    /// Parse a well-formed language tag. Both `-` and `_` separate subtags.
    ///
    /// # Example
    /// ```
    /// use regionlang::LanguageTag;
    ///
    /// let tag = LanguageTag::parse("fr_CA")?;
    /// assert_eq!(tag.to_string(), "fr-CA");
    /// # Ok::<(), regionlang::Error>(())
    /// ```
    pub fn parse(tag: &str) -> Result<Self> {
        tag.trim()
            .parse::<LanguageIdentifier>()
            .map(LanguageTag)
            .map_err(|source| Error::InvalidTag {
                tag: tag.to_string(),
                source,
            })
    }

    /// Build a tag from any string, never failing.
    ///
    /// Subtags are read left to right and reading stops at the first one
    /// that does not fit, so `"de-AT-!!"` yields `de-AT`. Input without a
    /// valid language subtag yields "und", whose base is `(und, No)`: bare
    /// "und" is not expanded by the likely-subtags data.
    pub fn make(tag: &str) -> Self {
        if let Ok(parsed) = Self::parse(tag) {
            return parsed;
        }

        let parts: Vec<&str> = tag.trim().split(['-', '_']).collect();
        let len = valid_prefix_len(&parts);
        if len == 0 {
            return Self::default();
        }
        parts[..len]
            .join("-")
            .parse()
            .map(LanguageTag)
            .unwrap_or_default()
    }

    /// The region of the tag.
    ///
    /// An explicit region has `Exact` confidence. Otherwise the likely
    /// region is inferred with `Low` confidence (`fr` gives `FR`). When no
    /// known region can be found, `(Region::UNKNOWN, Confidence::No)` is
    /// returned.
    pub fn region(&self) -> (Region, Confidence) {
        if let Some(subtag) = self.0.region {
            return match Region::from_subtag(subtag) {
                Some(region) => (region, Confidence::Exact),
                None => (Region::UNKNOWN, Confidence::No),
            };
        }

        self.maximized()
            .region
            .and_then(Region::from_subtag)
            .map(|region| (region, Confidence::Low))
            .unwrap_or((Region::UNKNOWN, Confidence::No))
    }

    /// The base language of the tag.
    ///
    /// An explicit language has `Exact` confidence. For tags like
    /// `und-Cyrl` or `und-RU` the likely language is inferred with `High`
    /// confidence if a script or a country was given, `Low` otherwise.
    /// "und" with neither yields `(und, No)`.
    pub fn base(&self) -> (Base, Confidence) {
        if !self.0.language.is_empty() {
            return (Base(self.0.language), Confidence::Exact);
        }

        let has_country = self
            .0
            .region
            .and_then(Region::from_subtag)
            .map_or(false, |region| region.is_country());
        let confidence = if self.0.script.is_none() && !has_country {
            Confidence::Low
        } else {
            Confidence::High
        };

        let maximized = self.maximized();
        if maximized.language.is_empty() {
            return (Base::default(), Confidence::No);
        }
        (Base(maximized.language), confidence)
    }

    /// The underlying language identifier.
    pub fn as_langid(&self) -> &LanguageIdentifier {
        &self.0
    }

    fn maximized(&self) -> LanguageIdentifier {
        let mut langid = self.0.clone();
        langid.maximize();
        langid
    }
}

/// Number of leading subtags forming a well-formed
/// `language[-script][-region](-variant)*` sequence.
fn valid_prefix_len(parts: &[&str]) -> usize {
    let fits = |i: usize, check: fn(&[u8]) -> bool| {
        parts.get(i).map_or(false, |part| check(part.as_bytes()))
    };

    if !fits(0, |b| subtags::Language::from_bytes(b).is_ok()) {
        return 0;
    }
    let mut len = 1;
    if fits(len, |b| subtags::Script::from_bytes(b).is_ok()) {
        len += 1;
    }
    if fits(len, |b| subtags::Region::from_bytes(b).is_ok()) {
        len += 1;
    }
    while fits(len, |b| subtags::Variant::from_bytes(b).is_ok()) {
        len += 1;
    }
    len
}

impl Default for LanguageTag {
    /// The undetermined tag, "und".
    fn default() -> Self {
        LanguageTag(LanguageIdentifier::default())
    }
}

impl From<LanguageIdentifier> for LanguageTag {
    fn from(langid: LanguageIdentifier) -> Self {
        LanguageTag(langid)
    }
}

impl FromStr for LanguageTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.to_string()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LanguageTag {
        LanguageTag::parse(s).expect("valid tag")
    }

    // ==================== Confidence Tests ====================

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::No < Confidence::Low);
        assert!(Confidence::Low < Confidence::High);
        assert!(Confidence::High < Confidence::Exact);
        assert_eq!(Confidence::default(), Confidence::No);
    }

    #[test]
    fn test_confidence_display_and_serialize() {
        assert_eq!(Confidence::Exact.to_string(), "exact");
        assert_eq!(serde_json::to_string(&Confidence::Low).unwrap(), "\"low\"");
    }

    // ==================== Parse Tests ====================

    #[test]
    fn test_parse_underscore_separator() {
        assert_eq!(tag("fr_CA").to_string(), "fr-CA");
    }

    #[test]
    fn test_parse_invalid() {
        let result = LanguageTag::parse("!!");
        assert!(matches!(result, Err(Error::InvalidTag { .. })));
    }

    #[test]
    fn test_from_str() {
        let parsed: LanguageTag = "en-GB".parse().unwrap();
        assert_eq!(parsed, tag("en-GB"));
    }

    // ==================== Make Tests ====================

    #[test]
    fn test_make_valid() {
        assert_eq!(LanguageTag::make("de-AT"), tag("de-AT"));
    }

    #[test]
    fn test_make_drops_malformed_suffix() {
        assert_eq!(LanguageTag::make("de-AT-!!"), tag("de-AT"));
    }

    #[test]
    fn test_make_stops_at_first_malformed_subtag() {
        assert_eq!(LanguageTag::make("de-!!-AT"), tag("de"));
        assert_eq!(LanguageTag::make("sr_Latn_RS_!!"), tag("sr-Latn-RS"));
    }

    #[test]
    fn test_make_long_malformed_input() {
        let input = "a-".repeat(20_000);
        assert_eq!(LanguageTag::make(&input), LanguageTag::default());

        let input = format!("de-AT-{}", "!!-".repeat(20_000));
        assert_eq!(LanguageTag::make(&input), tag("de-AT"));
    }

    #[test]
    fn test_make_garbage_is_undetermined() {
        assert_eq!(LanguageTag::make("!!"), LanguageTag::default());
        assert_eq!(LanguageTag::make(""), LanguageTag::default());
    }

    // ==================== Region Tests ====================

    #[test]
    fn test_region_explicit_is_exact() {
        let (region, conf) = tag("fr-CA").region();
        assert_eq!(region.code(), "CA");
        assert_eq!(conf, Confidence::Exact);
    }

    #[test]
    fn test_region_inferred_is_low() {
        let (region, conf) = tag("de").region();
        assert_eq!(region.code(), "DE");
        assert_eq!(conf, Confidence::Low);
    }

    #[test]
    fn test_region_macro_region() {
        let (region, conf) = tag("es-419").region();
        assert_eq!(region.code(), "419");
        assert_eq!(conf, Confidence::Exact);
    }

    #[test]
    fn test_region_unassigned_is_no() {
        let (region, conf) = tag("fr-AA").region();
        assert_eq!(region, Region::UNKNOWN);
        assert_eq!(conf, Confidence::No);
    }

    // ==================== Base Tests ====================

    #[test]
    fn test_base_explicit_is_exact() {
        let (base, conf) = tag("zh-Hant").base();
        assert_eq!(base.as_str(), "zh");
        assert_eq!(conf, Confidence::Exact);
    }

    #[test]
    fn test_base_from_country_is_high() {
        let (base, conf) = tag("und-FR").base();
        assert_eq!(base.as_str(), "fr");
        assert_eq!(conf, Confidence::High);
    }

    #[test]
    fn test_base_undetermined_is_never_confident() {
        let (base, conf) = LanguageTag::default().base();
        assert!(base.is_undetermined());
        assert_eq!(conf, Confidence::No);
    }

    #[test]
    fn test_base_default_is_und() {
        assert_eq!(Base::default().as_str(), "und");
        assert!(Base::default().is_undetermined());
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_tag_serde() {
        let json = serde_json::to_string(&tag("pt-BR")).unwrap();
        assert_eq!(json, "\"pt-BR\"");

        let restored: LanguageTag = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tag("pt-BR"));

        let invalid: std::result::Result<LanguageTag, _> = serde_json::from_str("\"!!\"");
        assert!(invalid.is_err());
    }
}
