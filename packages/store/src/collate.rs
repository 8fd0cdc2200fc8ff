//! Locale-aware string comparison used when sorting the directory.
//!
//! Comparison goes through an ICU root-locale collator at tertiary strength
//! with lowercase ordered first on case-only ties. Accented and Nordic letters
//! sort next to their base letters rather than after `z`. Punctuation is
//! non-ignorable, so phone numbers compare character by character.
//!
//! Strings the collator considers equal fall back to byte order, so the result
//! is total.

use std::cmp::Ordering;

use icu_collator::{AlternateHandling, CaseFirst, Collator, CollatorOptions, Strength};

thread_local! {
    static COLLATOR: Option<Collator> = build_collator();
}

fn build_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    options.case_first = Some(CaseFirst::LowerFirst);
    options.alternate_handling = Some(AlternateHandling::NonIgnorable);
    Collator::try_new(&Default::default(), options).ok()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
        None => a.cmp(b),
    })
}
