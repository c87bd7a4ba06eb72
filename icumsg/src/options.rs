//! Lazy iteration over a complex argument's options.

use crate::token::Token;

/// Iterate the option-opener indices of the complex argument at
/// `buffer[index]`.
///
/// Yields buffer indices of this argument's own options, in source order,
/// hopping over each option's body via its terminator link — nested
/// arguments' options are not yielded. For any token kind other than
/// `Plural`, `Select` or `SelectOrdinal` the iterator is empty.
///
/// ```
/// use icumsg::{options, TokenKind, Tokenizer};
///
/// let locale = "en".parse()?;
/// let mut buffer = Vec::new();
/// Tokenizer::new().tokenize(&locale, &mut buffer, "{n,plural,one{#}other{#s}}")?;
/// let kinds: Vec<_> = options(&buffer, 0).map(|i| buffer[i].kind).collect();
/// assert_eq!(kinds, [TokenKind::OptionOne, TokenKind::OptionOther]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn options(buffer: &[Token], index: usize) -> Options<'_> {
    match buffer.get(index) {
        Some(tok) if tok.kind.is_complex_arg() => Options {
            buffer,
            // +2 skips the opener and its argument name.
            next: index + 2,
            end: tok.end as usize,
        },
        _ => Options {
            buffer,
            next: 0,
            end: 0,
        },
    }
}

/// Iterator returned by [`options`].
#[derive(Clone, Debug)]
pub struct Options<'a> {
    buffer: &'a [Token],
    next: usize,
    end: usize,
}

impl Iterator for Options<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.end {
            let i = self.next;
            let tok = self.buffer[i];
            if tok.kind.is_option() {
                self.next = tok.end as usize + 1;
                return Some(i);
            }
            // A plural offset token sits before the first option.
            self.next = i + 1;
        }
        None
    }
}

impl std::iter::FusedIterator for Options<'_> {}
