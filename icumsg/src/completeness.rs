//! Completeness analysis over a token buffer.
//!
//! Translation workflows want more than "does it parse": a Ukrainian plural
//! without a `many` branch will render, but it is wrong for most counts, and
//! a select that dropped a key the caller's data model requires is a silent
//! gap. The analyzer walks an already-validated buffer and reports both
//! through callbacks, without allocating a result structure or ever failing.

use icumsg_cldr::{plural_forms, FormSet, Locale};
use rustc_hash::FxHashSet;

use crate::options::options;
use crate::token::{Token, TokenKind};

/// Whether the caller-supplied keys must all be present on a select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPresence {
    /// Every key in `keys` must appear; a missing one is incomplete.
    Required,
    /// The keys are informational only.
    Optional,
}

/// What to do with named select options that are not in the caller's keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Leave them alone.
    Ignore,
    /// Report each one through `on_rejected`.
    Reject,
}

/// The caller's policy for one select argument, returned by the
/// `required_options` callback.
#[derive(Clone, Copy, Debug)]
pub struct RequiredOptions<'k> {
    /// Select keys the caller knows about, e.g. `["male", "female"]`.
    pub keys: &'k [&'k str],
    /// Whether all of `keys` must be present.
    pub presence: KeyPresence,
    /// Whether keys outside `keys` are rejected.
    pub unknown: UnknownKeys,
}

impl Default for RequiredOptions<'_> {
    /// No keys, nothing required, nothing rejected.
    fn default() -> Self {
        Self {
            keys: &[],
            presence: KeyPresence::Optional,
            unknown: UnknownKeys::Ignore,
        }
    }
}

/// Check every complex argument in `buffer` for completeness.
///
/// For each `plural`/`selectordinal`, the locale's CLDR form set is the
/// requirement: if any permitted keyword other than `other` is missing,
/// `on_incomplete` fires once with the opener's buffer index. For each
/// `select`, `required_options` is consulted with the argument name;
/// missing required keys fire `on_incomplete` once, and unknown keys fire
/// `on_rejected` per offending option when the policy rejects them.
///
/// Nested arguments are analyzed exactly like top-level ones. Returns the
/// total number of complex arguments seen, callbacks or not.
///
/// `buffer` must be a complete stream produced by a successful
/// [`Tokenizer::tokenize`](crate::Tokenizer::tokenize) call on `input`.
pub fn analyze_completeness<'k>(
    locale: &Locale,
    input: &str,
    buffer: &[Token],
    mut required_options: impl FnMut(&str) -> RequiredOptions<'k>,
    mut on_incomplete: impl FnMut(usize),
    mut on_rejected: impl FnMut(usize),
) -> usize {
    let forms = plural_forms(locale);
    let mut total = 0;
    // Openers of nested arguments appear in the flat buffer like any other
    // token, so one linear pass visits every complex argument at any depth.
    for (i, tok) in buffer.iter().enumerate() {
        let keyword_forms = match tok.kind {
            TokenKind::Plural => Some(forms.cardinal),
            TokenKind::SelectOrdinal => Some(forms.ordinal),
            TokenKind::Select => None,
            _ => continue,
        };
        total += 1;
        // The argument name always immediately follows the opener.
        let name = buffer[i + 1].text(input, buffer);
        let policy = required_options(name);
        match keyword_forms {
            Some(required) => {
                if !keyed_options_complete(buffer, i, required) {
                    on_incomplete(i);
                }
            }
            None => check_select(
                input,
                buffer,
                i,
                &policy,
                &mut on_incomplete,
                &mut on_rejected,
            ),
        }
    }
    total
}

/// `true` when every locale-permitted plural keyword appears among the
/// options of the argument at `index`. `other` is guaranteed by the
/// tokenizer; exact-number options never satisfy a keyword.
fn keyed_options_complete(buffer: &[Token], index: usize, required: FormSet) -> bool {
    let mut present = FormSet {
        zero: false,
        one: false,
        two: false,
        few: false,
        many: false,
        other: true,
    };
    for oi in options(buffer, index) {
        match buffer[oi].kind {
            TokenKind::OptionZero => present.zero = true,
            TokenKind::OptionOne => present.one = true,
            TokenKind::OptionTwo => present.two = true,
            TokenKind::OptionFew => present.few = true,
            TokenKind::OptionMany => present.many = true,
            _ => {}
        }
    }
    (!required.zero || present.zero)
        && (!required.one || present.one)
        && (!required.two || present.two)
        && (!required.few || present.few)
        && (!required.many || present.many)
}

fn check_select(
    input: &str,
    buffer: &[Token],
    index: usize,
    policy: &RequiredOptions<'_>,
    on_incomplete: &mut impl FnMut(usize),
    on_rejected: &mut impl FnMut(usize),
) {
    if policy.presence == KeyPresence::Optional && policy.unknown == UnknownKeys::Ignore {
        return;
    }
    let known: FxHashSet<&str> = policy.keys.iter().copied().collect();

    if policy.presence == KeyPresence::Required {
        let mut present: FxHashSet<&str> = options(buffer, index)
            .filter(|&oi| buffer[oi].kind == TokenKind::Option)
            .map(|oi| buffer[oi + 1].text(input, buffer))
            .collect();
        // The tokenizer already enforced `other`.
        present.insert("other");
        if policy.keys.iter().any(|key| !present.contains(key)) {
            on_incomplete(index);
        }
    }

    if policy.unknown == UnknownKeys::Reject {
        for oi in options(buffer, index) {
            if buffer[oi].kind == TokenKind::Option
                && !known.contains(buffer[oi + 1].text(input, buffer))
            {
                on_rejected(oi);
            }
        }
    }
}
