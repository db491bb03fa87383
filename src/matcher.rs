//! Region matching: pick the base language for a region from a tag list.

use crate::language::{parse_region, Base, Confidence, LanguageTag};
use tracing::{debug, trace};

/// Find the base language for `region` among `tags`.
///
/// Tags are scanned in order. A tag matches when its region (explicit or
/// inferred) equals the parsed region. A match replaces the current best
/// when its base confidence is greater than **or equal to** the best so
/// far, so among equally confident matches the last one wins. Appending a
/// tag to a list therefore overrides earlier defaults; prepending does not.
///
/// If `region` is not a region code (e.g. `"de-AT"`), the base language is
/// guessed from the string itself with [`LanguageTag::make`] and `tags` are
/// not consulted. If nothing matches, `(Base::default(), Confidence::No)`
/// is returned.
pub fn find_in(region: &str, tags: &[LanguageTag]) -> (Base, Confidence) {
    let target = match parse_region(region) {
        Ok(target) => target,
        Err(e) => {
            debug!(region, error = %e, "Not a region code, guessing base language from input");
            return LanguageTag::make(region).base();
        }
    };

    let mut best_match = Base::default();
    let mut best_confidence = Confidence::No;

    for tag in tags {
        let (tag_region, confidence) = tag.region();
        if confidence == Confidence::No || tag_region != target {
            continue;
        }

        let (base, confidence) = tag.base();
        if confidence >= best_confidence {
            trace!(%tag, %base, %confidence, "New best match for region {}", target);
            best_match = base;
            best_confidence = confidence;
        }
    }

    if best_confidence == Confidence::No {
        debug!(region = %target, candidates = tags.len(), "No tag matched region");
    }

    (best_match, best_confidence)
}
