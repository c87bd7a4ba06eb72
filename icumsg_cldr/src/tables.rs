//! CLDR plural-form table.
//!
//! Data derived from the Unicode CLDR v47 plural rules (cardinal and
//! ordinal `plurals.xml`). One entry per locale that CLDR defines rules
//! for; every other tag falls back to its base language and then to the
//! `und` entry. Sorted by tag for binary search.

use crate::{FormSet, PluralForms};

const OTHER: FormSet = FormSet { zero: false, one: false, two: false, few: false, many: false, other: true };
const ONE: FormSet = FormSet { zero: false, one: true, two: false, few: false, many: false, other: true };
const FEW: FormSet = FormSet { zero: false, one: false, two: false, few: true, many: false, other: true };
const MANY: FormSet = FormSet { zero: false, one: false, two: false, few: false, many: true, other: true };
const ZERO_ONE: FormSet = FormSet { zero: true, one: true, two: false, few: false, many: false, other: true };
const ONE_TWO: FormSet = FormSet { zero: false, one: true, two: true, few: false, many: false, other: true };
const ONE_FEW: FormSet = FormSet { zero: false, one: true, two: false, few: true, many: false, other: true };
const ONE_MANY: FormSet = FormSet { zero: false, one: true, two: false, few: false, many: true, other: true };
const ZERO_ONE_FEW: FormSet = FormSet { zero: true, one: true, two: false, few: true, many: false, other: true };
const ONE_TWO_FEW: FormSet = FormSet { zero: false, one: true, two: true, few: true, many: false, other: true };
const ONE_TWO_MANY: FormSet = FormSet { zero: false, one: true, two: true, few: false, many: true, other: true };
const ONE_FEW_MANY: FormSet = FormSet { zero: false, one: true, two: false, few: true, many: true, other: true };
const ONE_TWO_FEW_MANY: FormSet = FormSet { zero: false, one: true, two: true, few: true, many: true, other: true };
const ZERO_ONE_TWO_FEW_MANY: FormSet = FormSet { zero: true, one: true, two: true, few: true, many: true, other: true };

/// Plural forms per locale tag, sorted by tag. All entries except
/// `pt-PT` are base languages.
pub(crate) static PLURAL_FORMS: &[(&str, PluralForms)] = &[
    ("af", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ak", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("am", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("an", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ar", PluralForms { cardinal: ZERO_ONE_TWO_FEW_MANY, ordinal: OTHER }),
    ("ars", PluralForms { cardinal: ZERO_ONE_TWO_FEW_MANY, ordinal: OTHER }),
    ("as", PluralForms { cardinal: ONE, ordinal: ONE_TWO_FEW_MANY }),
    ("asa", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ast", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("az", PluralForms { cardinal: ONE, ordinal: ONE_FEW_MANY }),
    ("bal", PluralForms { cardinal: ONE, ordinal: ONE }),
    ("be", PluralForms { cardinal: ONE_FEW_MANY, ordinal: FEW }),
    ("bem", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("bez", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("bg", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("bho", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("blo", PluralForms { cardinal: ZERO_ONE, ordinal: ZERO_ONE_FEW }),
    ("bm", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("bn", PluralForms { cardinal: ONE, ordinal: ONE_TWO_FEW_MANY }),
    ("bo", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("br", PluralForms { cardinal: ONE_TWO_FEW_MANY, ordinal: OTHER }),
    ("brx", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("bs", PluralForms { cardinal: ONE_FEW, ordinal: OTHER }),
    ("ca", PluralForms { cardinal: ONE_MANY, ordinal: ONE_TWO_FEW }),
    ("ce", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ceb", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("cgg", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("chr", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ckb", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("cs", PluralForms { cardinal: ONE_FEW_MANY, ordinal: OTHER }),
    ("csw", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("cy", PluralForms { cardinal: ZERO_ONE_TWO_FEW_MANY, ordinal: ZERO_ONE_TWO_FEW_MANY }),
    ("da", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("de", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("doi", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("dsb", PluralForms { cardinal: ONE_TWO_FEW, ordinal: OTHER }),
    ("dv", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("dz", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("ee", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("el", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("en", PluralForms { cardinal: ONE, ordinal: ONE_TWO_FEW }),
    ("eo", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("es", PluralForms { cardinal: ONE_MANY, ordinal: OTHER }),
    ("et", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("eu", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("fa", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ff", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("fi", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("fil", PluralForms { cardinal: ONE, ordinal: ONE }),
    ("fo", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("fr", PluralForms { cardinal: ONE_MANY, ordinal: ONE }),
    ("fur", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("fy", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ga", PluralForms { cardinal: ONE_TWO_FEW_MANY, ordinal: ONE }),
    ("gd", PluralForms { cardinal: ONE_TWO_FEW, ordinal: ONE_TWO_FEW }),
    ("gl", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("gsw", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("gu", PluralForms { cardinal: ONE, ordinal: ONE_TWO_FEW_MANY }),
    ("guw", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("gv", PluralForms { cardinal: ONE_TWO_FEW_MANY, ordinal: OTHER }),
    ("ha", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("haw", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("he", PluralForms { cardinal: ONE_TWO_MANY, ordinal: OTHER }),
    ("hi", PluralForms { cardinal: ONE, ordinal: ONE_TWO_FEW_MANY }),
    ("hnj", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("hr", PluralForms { cardinal: ONE_FEW, ordinal: OTHER }),
    ("hsb", PluralForms { cardinal: ONE_TWO_FEW, ordinal: OTHER }),
    ("hu", PluralForms { cardinal: ONE, ordinal: ONE }),
    ("hy", PluralForms { cardinal: ONE, ordinal: ONE }),
    ("ia", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("id", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("ig", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("ii", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("io", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("is", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("it", PluralForms { cardinal: ONE_MANY, ordinal: MANY }),
    ("iu", PluralForms { cardinal: ONE_TWO, ordinal: OTHER }),
    ("ja", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("jbo", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("jgo", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("jmc", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("jv", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("jw", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("ka", PluralForms { cardinal: ONE, ordinal: ONE_MANY }),
    ("kab", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("kaj", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("kcg", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("kde", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("kea", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("kk", PluralForms { cardinal: ONE, ordinal: MANY }),
    ("kkj", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("kl", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("km", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("kn", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ko", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("ks", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ksb", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ksh", PluralForms { cardinal: ZERO_ONE, ordinal: OTHER }),
    ("ku", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("kw", PluralForms { cardinal: ZERO_ONE_TWO_FEW_MANY, ordinal: ONE_MANY }),
    ("ky", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("lag", PluralForms { cardinal: ZERO_ONE, ordinal: OTHER }),
    ("lb", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("lg", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("lij", PluralForms { cardinal: ONE, ordinal: MANY }),
    ("lkt", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("lld", PluralForms { cardinal: ONE_MANY, ordinal: MANY }),
    ("ln", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("lo", PluralForms { cardinal: OTHER, ordinal: ONE }),
    ("lt", PluralForms { cardinal: ONE_FEW_MANY, ordinal: OTHER }),
    ("lv", PluralForms { cardinal: ZERO_ONE, ordinal: OTHER }),
    ("mas", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("mg", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("mgo", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("mk", PluralForms { cardinal: ONE, ordinal: ONE_TWO_MANY }),
    ("ml", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("mn", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("mo", PluralForms { cardinal: ONE_FEW, ordinal: ONE }),
    ("mr", PluralForms { cardinal: ONE, ordinal: ONE_TWO_FEW }),
    ("ms", PluralForms { cardinal: OTHER, ordinal: ONE }),
    ("mt", PluralForms { cardinal: ONE_TWO_FEW_MANY, ordinal: OTHER }),
    ("my", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("nah", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("naq", PluralForms { cardinal: ONE_TWO, ordinal: OTHER }),
    ("nb", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("nd", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ne", PluralForms { cardinal: ONE, ordinal: ONE }),
    ("nl", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("nn", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("nnh", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("no", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("nqo", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("nr", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("nso", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ny", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("nyn", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("om", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("or", PluralForms { cardinal: ONE, ordinal: ONE_TWO_FEW_MANY }),
    ("os", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("osa", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("pa", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("pap", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("pcm", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("pl", PluralForms { cardinal: ONE_FEW_MANY, ordinal: OTHER }),
    ("prg", PluralForms { cardinal: ZERO_ONE, ordinal: OTHER }),
    ("ps", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("pt", PluralForms { cardinal: ONE_MANY, ordinal: OTHER }),
    ("pt-PT", PluralForms { cardinal: ONE_MANY, ordinal: OTHER }),
    ("rm", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ro", PluralForms { cardinal: ONE_FEW, ordinal: ONE }),
    ("rof", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ru", PluralForms { cardinal: ONE_FEW_MANY, ordinal: OTHER }),
    ("rwk", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("sah", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("saq", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("sat", PluralForms { cardinal: ONE_TWO, ordinal: OTHER }),
    ("sc", PluralForms { cardinal: ONE, ordinal: MANY }),
    ("scn", PluralForms { cardinal: ONE_MANY, ordinal: MANY }),
    ("sd", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("sdh", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("se", PluralForms { cardinal: ONE_TWO, ordinal: OTHER }),
    ("seh", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ses", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("sg", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("sh", PluralForms { cardinal: ONE_FEW, ordinal: OTHER }),
    ("shi", PluralForms { cardinal: ONE_FEW, ordinal: OTHER }),
    ("si", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("sk", PluralForms { cardinal: ONE_FEW_MANY, ordinal: OTHER }),
    ("sl", PluralForms { cardinal: ONE_TWO_FEW, ordinal: OTHER }),
    ("sma", PluralForms { cardinal: ONE_TWO, ordinal: OTHER }),
    ("smi", PluralForms { cardinal: ONE_TWO, ordinal: OTHER }),
    ("smj", PluralForms { cardinal: ONE_TWO, ordinal: OTHER }),
    ("smn", PluralForms { cardinal: ONE_TWO, ordinal: OTHER }),
    ("sms", PluralForms { cardinal: ONE_TWO, ordinal: OTHER }),
    ("sn", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("so", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("sq", PluralForms { cardinal: ONE, ordinal: ONE_MANY }),
    ("sr", PluralForms { cardinal: ONE_FEW, ordinal: OTHER }),
    ("ss", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ssy", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("st", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("su", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("sv", PluralForms { cardinal: ONE, ordinal: ONE }),
    ("sw", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("syr", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ta", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("te", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("teo", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("th", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("ti", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("tig", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("tk", PluralForms { cardinal: ONE, ordinal: FEW }),
    ("tl", PluralForms { cardinal: ONE, ordinal: ONE }),
    ("tn", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("to", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("tpi", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("tr", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ts", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("tzm", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ug", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("uk", PluralForms { cardinal: ONE_FEW_MANY, ordinal: FEW }),
    ("ur", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("uz", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("ve", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("vec", PluralForms { cardinal: ONE_MANY, ordinal: MANY }),
    ("vi", PluralForms { cardinal: OTHER, ordinal: ONE }),
    ("vo", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("vun", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("wa", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("wae", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("wo", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("xh", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("xog", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("yi", PluralForms { cardinal: ONE, ordinal: OTHER }),
    ("yo", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("yue", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("zh", PluralForms { cardinal: OTHER, ordinal: OTHER }),
    ("zu", PluralForms { cardinal: ONE, ordinal: OTHER }),
];

