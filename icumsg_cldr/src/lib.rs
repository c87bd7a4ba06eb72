//! CLDR plural-form data for ICU MessageFormat validation.
//!
//! This crate is a standalone, dependency-free data layer: it answers exactly
//! one question — *which plural keywords does a locale permit?* — for both
//! cardinal (`{n, plural, …}`) and ordinal (`{n, selectordinal, …}`)
//! selection. The tokenizer and completeness analyzer in the `icumsg` crate
//! consult it; external tools (linters, translation pipelines) can use it
//! without pulling in the parser.
//!
//! # Lookup
//!
//! [`plural_forms`] tries the exact tag first, then the tag's base language,
//! and finally falls back to the `und` (undefined) entry, which permits only
//! `other` on both axes:
//!
//! ```
//! use icumsg_cldr::{plural_forms, Locale};
//!
//! let locale: Locale = "en-US".parse()?;
//! let forms = plural_forms(&locale); // falls back to "en"
//! assert!(forms.cardinal.one);
//! assert!(!forms.cardinal.few);
//! # Ok::<(), icumsg_cldr::LocaleError>(())
//! ```
//!
//! # Data
//!
//! The table ships as a checked-in artifact derived from CLDR v47
//! (`tables.rs`), 218 locale entries sorted for binary search. It is
//! immutable at runtime and safe to read from any thread.

mod locale;
mod tables;

pub use locale::{Locale, LocaleError};

/// The set of plural keywords a locale permits on one axis
/// (cardinal or ordinal).
///
/// `other` is `true` for every locale — the format makes the `other`
/// branch mandatory, so no rule set can exclude it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormSet {
    /// The `zero` keyword is permitted.
    pub zero: bool,
    /// The `one` keyword is permitted.
    pub one: bool,
    /// The `two` keyword is permitted.
    pub two: bool,
    /// The `few` keyword is permitted.
    pub few: bool,
    /// The `many` keyword is permitted.
    pub many: bool,
    /// Always `true`; every message must carry an `other` branch.
    pub other: bool,
}

impl FormSet {
    /// The `und` fallback: only `other` is permitted.
    pub const OTHER_ONLY: FormSet = FormSet {
        zero: false,
        one: false,
        two: false,
        few: false,
        many: false,
        other: true,
    };

    /// Number of permitted forms (at least 1, for `other`).
    #[must_use]
    pub fn count(&self) -> usize {
        usize::from(self.zero)
            + usize::from(self.one)
            + usize::from(self.two)
            + usize::from(self.few)
            + usize::from(self.many)
            + usize::from(self.other)
    }
}

/// Cardinal and ordinal plural forms for one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PluralForms {
    /// Forms for counting (`{n, plural, …}`).
    pub cardinal: FormSet,
    /// Forms for ranking (`{n, selectordinal, …}`).
    pub ordinal: FormSet,
}

impl PluralForms {
    /// The `und` (undefined locale) entry: `other`-only on both axes.
    pub const UND: PluralForms = PluralForms {
        cardinal: FormSet::OTHER_ONLY,
        ordinal: FormSet::OTHER_ONLY,
    };
}

/// Look up the plural forms for `locale`.
///
/// Resolution order: exact tag, then base language, then [`PluralForms::UND`].
/// The only non-base entry in CLDR v47 is `pt-PT`; every regional tag like
/// `en-US` or `zh-Hans-CN` resolves through its base language.
#[must_use]
pub fn plural_forms(locale: &Locale) -> PluralForms {
    lookup(locale.as_str())
        .or_else(|| lookup(locale.base()))
        .unwrap_or(PluralForms::UND)
}

fn lookup(tag: &str) -> Option<PluralForms> {
    tables::PLURAL_FORMS
        .binary_search_by_key(&tag, |&(t, _)| t)
        .ok()
        .map(|idx| tables::PLURAL_FORMS[idx].1)
}
