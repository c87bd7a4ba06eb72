//! Hand-written recursive-descent tokenizer.
//!
//! One pass over the input appends [`Token`]s to the caller's buffer and
//! validates structure as it goes: bracket balance, quoting, option
//! uniqueness, the mandatory `other` branch, and plural-keyword legality for
//! the caller's locale. Token text is represented purely by byte offsets —
//! the scanner allocates nothing beyond growth of the caller-supplied buffer.
//!
//! # Keyword dispatch order
//!
//! Keywords are matched by prefix, so order matters in exactly two places:
//! `selectordinal` must be tried before its prefix `select`, and `offset`
//! must be tried before the plural option loop.
//!
//! # Error positions
//!
//! Each failure leaves the cursor at the position the error taxonomy
//! prescribes (often rolled back to the start of the offending construct)
//! before returning, so [`Tokenizer::pos`] and [`Error::pos`] can drive
//! caret diagnostics.

use icumsg_cldr::{plural_forms, FormSet, Locale, PluralForms};

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::token::{Token, TokenKind};
use crate::unicode_pattern;

/// Reusable ICU MessageFormat tokenizer.
///
/// Holds only the last attempted byte position; each
/// [`tokenize`](Self::tokenize) call resets it. One instance per thread —
/// the tokenizer is cheap to create and not meant to be shared.
///
/// ```
/// use icumsg::{Tokenizer, TokenKind};
///
/// let locale = "en".parse()?;
/// let mut tokenizer = Tokenizer::new();
/// let mut buffer = Vec::new();
/// tokenizer.tokenize(&locale, &mut buffer, "Hello {name}!")?;
/// assert_eq!(buffer[1].kind, TokenKind::SimpleArg);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct Tokenizer {
    pos: u32,
}

impl Tokenizer {
    /// Create a tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last byte position the tokenizer attempted.
    ///
    /// After a failed [`tokenize`](Self::tokenize) call this is the error
    /// position; after a successful call it is the end of the input.
    #[must_use]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Tokenize `input` for `locale`, appending to `buffer`.
    ///
    /// The buffer is appended to (not cleared), so a caller can reuse one
    /// allocation across many messages. On failure the tokens appended so
    /// far are not guaranteed to form a well-formed stream and should be
    /// truncated by the caller.
    ///
    /// # Errors
    ///
    /// Returns the first parse failure with its byte position; the same
    /// position stays readable via [`pos`](Self::pos).
    pub fn tokenize(
        &mut self,
        locale: &Locale,
        buffer: &mut Vec<Token>,
        input: &str,
    ) -> Result<(), Error> {
        self.pos = 0;
        let Ok(len) = u32::try_from(input.len()) else {
            return Err(Error {
                kind: ErrorKind::InputTooLarge,
                pos: 0,
            });
        };
        if input.is_empty() {
            return Ok(());
        }

        // Fast path: nothing to quote or nest, the whole input is one literal.
        if memchr::memchr3(b'\'', b'{', b'}', input.as_bytes()).is_none() {
            buffer.push(Token::new(TokenKind::Literal, 0, len));
            self.pos = len;
            return Ok(());
        }

        let mut scan = Scan {
            cur: Cursor::new(input),
            forms: plural_forms(locale),
            buffer,
        };
        let result = scan.consume_message().and_then(|()| {
            if scan.cur.is_eof() {
                Ok(())
            } else {
                // A stray `}` stopped the top-level loop early.
                Err(ErrorKind::UnexpectedToken)
            }
        });
        self.pos = scan.cur.pos();
        result.map_err(|kind| Error {
            kind,
            pos: self.pos,
        })
    }
}

/// Per-call scanner state: cursor, the locale's plural forms, and the
/// output buffer.
struct Scan<'a, 'b> {
    cur: Cursor<'a>,
    forms: PluralForms,
    buffer: &'b mut Vec<Token>,
}

impl Scan<'_, '_> {
    /// Index the next pushed token will occupy.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "buffer holds at most one token per input byte, and the input fits in u32"
    )]
    fn next_index(&self) -> u32 {
        self.buffer.len() as u32
    }

    /// Parse expressions until EOF or a `}` at this nesting level.
    ///
    /// The `}` is left unconsumed: at the top level it is a stray bracket
    /// (reported by the caller), inside an option body it is the body's
    /// terminator.
    fn consume_message(&mut self) -> Result<(), ErrorKind> {
        while !self.cur.is_eof() {
            match self.cur.current() {
                b'}' => break,
                b'{' => self.consume_argument()?,
                _ => self.consume_literal()?,
            }
        }
        Ok(())
    }

    /// Scan a literal run up to the next unescaped `{`, `}`, or EOF.
    ///
    /// A `'` toggles a quoted span in which braces are plain bytes; `''` is
    /// a literal apostrophe and never toggles. The token keeps the source
    /// verbatim, quotes included — unescaping is a rendering concern.
    fn consume_literal(&mut self) -> Result<(), ErrorKind> {
        let start = self.cur.pos();
        let mut in_quote = false;
        let mut quote_start = start;
        loop {
            match self.cur.skip_to_literal_delim() {
                0 => break,
                b'\'' => {
                    if self.cur.peek() == b'\'' {
                        // Doubled quote: literal apostrophe either way.
                        self.cur.advance_n(2);
                        continue;
                    }
                    if !in_quote {
                        quote_start = self.cur.pos();
                    }
                    in_quote = !in_quote;
                    self.cur.advance();
                }
                _ => {
                    if !in_quote {
                        break;
                    }
                    self.cur.advance();
                }
            }
        }
        if in_quote {
            self.cur.set_pos(quote_start);
            return Err(ErrorKind::UnclosedQuote);
        }
        let end = self.cur.pos();
        if end > start {
            self.buffer.push(Token::new(TokenKind::Literal, start, end));
        }
        Ok(())
    }

    /// Byte offset of the first rune in the unread input that cannot appear
    /// in an identifier-like run (UAX #31 pattern properties).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "char offsets are bounded by input length which fits in u32"
    )]
    fn name_end(&self) -> u32 {
        for (i, c) in self.cur.rest().char_indices() {
            if unicode_pattern::is_name_boundary(c) {
                return self.cur.pos() + i as u32;
            }
        }
        self.cur.source_len()
    }

    /// Parse one `{…}` argument, simple or complex.
    fn consume_argument(&mut self) -> Result<(), ErrorKind> {
        let start = self.cur.pos();
        self.cur.advance(); // '{'
        self.cur.skip_whitespace();

        let name_start = self.cur.pos();
        let name_end = self.name_end();
        self.cur.set_pos(name_end);
        self.cur.skip_whitespace();

        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        if name_start == name_end {
            return Err(ErrorKind::UnexpectedToken);
        }
        match self.cur.current() {
            b'}' => {
                self.cur.advance();
                self.buffer
                    .push(Token::new(TokenKind::SimpleArg, start, self.cur.pos()));
                self.buffer
                    .push(Token::new(TokenKind::ArgName, name_start, name_end));
                Ok(())
            }
            b',' => {
                self.cur.advance();
                self.cur.skip_whitespace();
                if self.cur.is_eof() {
                    return Err(ErrorKind::UnexpectedEof);
                }

                if let Some(arg_type) = self.consume_arg_type() {
                    return self.consume_simple_arg_tail(start, name_start, name_end, arg_type);
                }

                // Longest keyword first: `select` is a prefix of `selectordinal`.
                let kind = if self.cur.starts_with("plural") {
                    self.cur.advance_n(6);
                    TokenKind::Plural
                } else if self.cur.starts_with("selectordinal") {
                    self.cur.advance_n(13);
                    TokenKind::SelectOrdinal
                } else if self.cur.starts_with("select") {
                    self.cur.advance_n(6);
                    TokenKind::Select
                } else {
                    return Err(ErrorKind::UnexpectedToken);
                };
                self.cur.skip_whitespace();
                self.consume_complex_arg(kind, start, name_start, name_end)
            }
            _ => Err(ErrorKind::UnexpectedToken),
        }
    }

    /// The six argument-type keywords, matched by prefix.
    fn consume_arg_type(&mut self) -> Option<Token> {
        const ARG_TYPES: &[(&str, TokenKind)] = &[
            ("number", TokenKind::ArgTypeNumber),
            ("date", TokenKind::ArgTypeDate),
            ("time", TokenKind::ArgTypeTime),
            ("spellout", TokenKind::ArgTypeSpellout),
            ("ordinal", TokenKind::ArgTypeOrdinal),
            ("duration", TokenKind::ArgTypeDuration),
        ];
        self.consume_keyword(ARG_TYPES)
    }

    /// Finish `{name, type}` / `{name, type, style}` after the type keyword.
    fn consume_simple_arg_tail(
        &mut self,
        start: u32,
        name_start: u32,
        name_end: u32,
        arg_type: Token,
    ) -> Result<(), ErrorKind> {
        self.cur.skip_whitespace();
        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        let mut style = None;
        if self.cur.current() == b',' {
            self.cur.advance();
            self.cur.skip_whitespace();
            style = self.consume_arg_style();
            self.cur.skip_whitespace();
        }
        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        if self.cur.current() != b'}' {
            return Err(ErrorKind::ExpectBracketClose);
        }
        self.cur.advance();

        self.buffer
            .push(Token::new(TokenKind::SimpleArg, start, self.cur.pos()));
        self.buffer
            .push(Token::new(TokenKind::ArgName, name_start, name_end));
        self.buffer.push(arg_type);
        if let Some(style) = style {
            self.buffer.push(style);
        }
        Ok(())
    }

    /// An argument style: a known keyword, a `::` skeleton, or a custom run.
    ///
    /// Returns `None` when no style is present (the caller then expects the
    /// closing `}` immediately).
    fn consume_arg_style(&mut self) -> Option<Token> {
        const ARG_STYLES: &[(&str, TokenKind)] = &[
            ("short", TokenKind::ArgStyleShort),
            ("medium", TokenKind::ArgStyleMedium),
            ("long", TokenKind::ArgStyleLong),
            ("full", TokenKind::ArgStyleFull),
            ("integer", TokenKind::ArgStyleInteger),
            ("currency", TokenKind::ArgStyleCurrency),
            ("percent", TokenKind::ArgStylePercent),
        ];

        let start = self.cur.pos();
        if self.cur.starts_with("::") {
            // Number skeleton: `::` plus everything up to the next
            // structural byte. `::` alone is not a style.
            self.cur.advance_n(2);
            self.eat_style_run();
            if self.cur.pos() == start + 2 {
                self.cur.set_pos(start);
                return None;
            }
            return Some(Token::new(TokenKind::ArgStyleSkeleton, start, self.cur.pos()));
        }
        if let Some(tok) = self.consume_keyword(ARG_STYLES) {
            return Some(tok);
        }
        self.eat_style_run();
        (self.cur.pos() > start).then(|| Token::new(TokenKind::ArgStyleCustom, start, self.cur.pos()))
    }

    /// Advance over a style run: anything but `{`, `}`, `,`, whitespace, EOF.
    fn eat_style_run(&mut self) {
        while !self.cur.is_eof()
            && !matches!(
                self.cur.current(),
                b'{' | b'}' | b',' | b' ' | b'\t' | b'\n' | b'\r'
            )
        {
            self.cur.advance();
        }
    }

    /// Match one of `keywords` by prefix and emit its token.
    fn consume_keyword(&mut self, keywords: &[(&str, TokenKind)]) -> Option<Token> {
        for &(word, kind) in keywords {
            if self.cur.starts_with(word) {
                let start = self.cur.pos();
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "keyword table entries are all under 16 bytes"
                )]
                self.cur.advance_n(word.len() as u32);
                return Some(Token::new(kind, start, self.cur.pos()));
            }
        }
        None
    }

    /// Parse a complex argument after its keyword: `, option… }`.
    ///
    /// `start`/`name_start`/`name_end` locate the `{` and the argument name
    /// already scanned by [`consume_argument`].
    fn consume_complex_arg(
        &mut self,
        kind: TokenKind,
        start: u32,
        name_start: u32,
        name_end: u32,
    ) -> Result<(), ErrorKind> {
        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        if self.cur.current() != b',' {
            return Err(ErrorKind::ExpectedComma);
        }
        self.cur.advance();
        self.cur.skip_whitespace();

        let opener = self.buffer.len();
        // The opener's end is patched to the terminator index below.
        self.buffer.push(Token::new(kind, start, 0));
        self.buffer
            .push(Token::new(TokenKind::ArgName, name_start, name_end));

        if kind == TokenKind::Plural {
            self.consume_plural_offset()?;
        }

        loop {
            self.cur.skip_whitespace();
            if self.cur.is_eof() {
                return Err(ErrorKind::UnexpectedEof);
            }
            if self.cur.current() == b'}' {
                self.cur.advance();
                break;
            }
            match kind {
                TokenKind::Plural => self.consume_keyed_option(self.forms.cardinal)?,
                TokenKind::SelectOrdinal => self.consume_keyed_option(self.forms.ordinal)?,
                _ => self.consume_named_option()?,
            }
        }

        self.validate_options(opener + 2, start)?;

        self.buffer[opener].end = self.next_index();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "opener is an index into a buffer bounded by input length"
        )]
        self.buffer.push(Token::new(
            TokenKind::ComplexArgTerm,
            opener as u32,
            self.cur.pos(),
        ));
        Ok(())
    }

    /// The optional `offset: <digits>` clause of a plural, with an optional
    /// trailing comma.
    fn consume_plural_offset(&mut self) -> Result<(), ErrorKind> {
        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        if !self.cur.starts_with("offset") {
            return Ok(());
        }
        self.cur.advance_n(6);
        self.cur.skip_whitespace();
        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        if self.cur.current() != b':' {
            return Err(ErrorKind::ExpectedColon);
        }
        self.cur.advance();
        self.cur.skip_whitespace();
        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }

        let start = self.cur.pos();
        if self.cur.current() == b'0' {
            // A lone `0` is a valid offset; `01` has a leading zero.
            if self.cur.peek().is_ascii_digit() {
                return Err(ErrorKind::InvalidOption);
            }
            self.cur.advance();
        } else {
            while self.cur.current().is_ascii_digit() {
                self.cur.advance();
            }
            if self.cur.pos() == start {
                return Err(ErrorKind::InvalidOffset);
            }
        }
        self.buffer
            .push(Token::new(TokenKind::PluralOffset, start, self.cur.pos()));

        self.cur.skip_whitespace();
        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        if self.cur.current() == b',' {
            self.cur.advance();
            self.cur.skip_whitespace();
        }
        Ok(())
    }

    /// One option of a plural or selectordinal: a plural keyword checked
    /// against `forms`, or `=<digits>`.
    fn consume_keyed_option(&mut self, forms: FormSet) -> Result<(), ErrorKind> {
        let start = self.cur.pos();
        let kind;
        let mut name_span = None;

        if self.cur.current() == b'=' {
            self.cur.advance();
            let digits_start = self.cur.pos();
            loop {
                if self.cur.is_eof() {
                    return Err(ErrorKind::UnexpectedEof);
                }
                if !self.cur.current().is_ascii_digit() {
                    break;
                }
                self.cur.advance();
            }
            if self.cur.pos() == digits_start {
                return Err(ErrorKind::InvalidOption);
            }
            if self.cur.pos() - start > 2 && self.cur.byte_at(digits_start) == b'0' {
                // Leading zero in a multi-digit number; `=0` itself is fine.
                self.cur.set_pos(start);
                return Err(ErrorKind::InvalidOption);
            }
            kind = TokenKind::OptionNumber;
            name_span = Some((start, self.cur.pos()));
        } else {
            // Keyword scan stops at the structural bytes only; whatever is
            // in between is the candidate keyword.
            while !self.cur.is_eof()
                && !matches!(
                    self.cur.current(),
                    b'{' | b'}' | b',' | b' ' | b'\t' | b'\n' | b'\r'
                )
            {
                self.cur.advance();
            }
            kind = match self.cur.slice(start, self.cur.pos()) {
                "zero" if forms.zero => TokenKind::OptionZero,
                "one" if forms.one => TokenKind::OptionOne,
                "two" if forms.two => TokenKind::OptionTwo,
                "few" if forms.few => TokenKind::OptionFew,
                "many" if forms.many => TokenKind::OptionMany,
                "other" => TokenKind::OptionOther,
                "zero" | "one" | "two" | "few" | "many" => {
                    self.cur.set_pos(start);
                    return Err(ErrorKind::UnsupportedPluralForm);
                }
                _ => {
                    self.cur.set_pos(start);
                    return Err(ErrorKind::InvalidOption);
                }
            };
        }
        self.consume_option_body(start, kind, name_span)
    }

    /// One option of a select: an identifier-like key, with `other`
    /// recognized specially.
    fn consume_named_option(&mut self) -> Result<(), ErrorKind> {
        let start = self.cur.pos();
        let end = self.name_end();
        if start == end {
            return Err(ErrorKind::InvalidOption);
        }
        self.cur.set_pos(end);
        let (kind, name_span) = if self.cur.slice(start, end) == "other" {
            (TokenKind::OptionOther, None)
        } else {
            (TokenKind::Option, Some((start, end)))
        };
        self.consume_option_body(start, kind, name_span)
    }

    /// The `{ … }` body shared by every option form.
    ///
    /// Pushes the opener (and its `OptionName` where one applies), parses
    /// the body recursively, then pushes the linked terminator.
    fn consume_option_body(
        &mut self,
        opt_start: u32,
        kind: TokenKind,
        name_span: Option<(u32, u32)>,
    ) -> Result<(), ErrorKind> {
        let opener = self.buffer.len();
        self.buffer.push(Token::new(kind, opt_start, 0));
        if let Some((s, e)) = name_span {
            self.buffer.push(Token::new(TokenKind::OptionName, s, e));
        }

        self.cur.skip_whitespace();
        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        let bracket_open = self.cur.pos();
        if self.cur.current() != b'{' {
            return Err(ErrorKind::ExpectBracketOpen);
        }
        self.cur.advance();

        // Lookahead for an empty body before parsing it.
        let body_start = self.cur.pos();
        self.cur.skip_whitespace();
        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        if self.cur.current() == b'}' {
            self.cur.set_pos(bracket_open);
            return Err(ErrorKind::EmptyOption);
        }
        self.cur.set_pos(body_start);

        self.consume_message()?;

        if self.cur.is_eof() {
            return Err(ErrorKind::UnexpectedEof);
        }
        if self.cur.current() != b'}' {
            return Err(ErrorKind::ExpectBracketClose);
        }
        self.cur.advance();

        self.buffer[opener].end = self.next_index();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "opener is an index into a buffer bounded by input length"
        )]
        self.buffer.push(Token::new(
            TokenKind::OptionTerm,
            opener as u32,
            self.cur.pos(),
        ));
        Ok(())
    }

    /// Enforce option uniqueness and the mandatory `other` over the option
    /// subtrees appended since `first`.
    ///
    /// Both the outer walk and the duplicate comparison hop over option
    /// bodies via the opener links, so nested arguments cannot shadow or
    /// collide with this level's keys. A duplicate is reported at the later
    /// occurrence's key; a missing `other` rolls back to `arg_start`.
    fn validate_options(&mut self, first: usize, arg_start: u32) -> Result<(), ErrorKind> {
        // zero, one, two, few, many, other
        let mut seen = [false; 6];
        let end = self.buffer.len();
        let mut i = first;
        while i < end {
            let outer = self.buffer[i];
            let flag = match outer.kind {
                TokenKind::OptionZero => Some(0),
                TokenKind::OptionOne => Some(1),
                TokenKind::OptionTwo => Some(2),
                TokenKind::OptionFew => Some(3),
                TokenKind::OptionMany => Some(4),
                TokenKind::OptionOther => Some(5),
                _ => None,
            };
            if let Some(f) = flag {
                if seen[f] {
                    self.cur.set_pos(outer.start);
                    return Err(ErrorKind::DuplicateOption);
                }
                seen[f] = true;
                i = outer.end as usize + 1;
                continue;
            }
            if matches!(outer.kind, TokenKind::Option | TokenKind::OptionNumber) {
                let name = self.buffer[i + 1];
                let key = self.cur.slice(name.start, name.end);
                let mut j = first;
                while j < i {
                    let inner = self.buffer[j];
                    if inner.kind.is_option() {
                        if inner.kind == outer.kind {
                            let other = self.buffer[j + 1];
                            if self.cur.slice(other.start, other.end) == key {
                                self.cur.set_pos(name.start);
                                return Err(ErrorKind::DuplicateOption);
                            }
                        }
                        j = inner.end as usize + 1;
                    } else {
                        j += 1;
                    }
                }
                i = outer.end as usize + 1;
                continue;
            }
            // PluralOffset sits between the argument name and the options.
            i += 1;
        }
        if !seen[5] {
            self.cur.set_pos(arg_start);
            return Err(ErrorKind::MissingOptionOther);
        }
        Ok(())
    }
}
