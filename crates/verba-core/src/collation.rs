use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

/// CLDR root collator, tertiary strength, punctuation not ignored
static ROOT_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
        .inspect_err(|e| tracing::error!("Root collator unavailable, using code point order: {}", e))
        .ok()
});

/// Locale-aware ordering for headwords.
///
/// Strings the collator considers equal (canonically equivalent forms) are
/// ordered by code point, so this is a total order over distinct strings.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    match ROOT_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
        None => a.cmp(b),
    }
}
