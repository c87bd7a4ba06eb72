//! Tokenizer and semantic validator for the ICU Message Format.
//!
//! Parses localized message patterns like
//! `{count, plural, one{# message} other{# messages}}` into a flat,
//! index-linked token buffer, validating as it scans: quoting rules, bracket
//! balance, option uniqueness, the mandatory `other` branch, and — against
//! the CLDR data in [`icumsg_cldr`] — whether each plural keyword is legal
//! for the message's locale.
//!
//! This crate parses and validates only. It never formats a value,
//! substitutes an argument, or evaluates a message.
//!
//! # Architecture
//!
//! - [`Tokenizer`] appends [`Token`]s to a caller-owned `Vec`, borrowing the
//!   input only for the duration of the call; token text lives as byte-offset
//!   spans into the input (see the dual interpretation on [`Token`]).
//! - [`options`] walks one complex argument's options in O(options), hopping
//!   bodies through the opener/terminator index links.
//! - [`analyze_completeness`] reports per-locale plural-keyword gaps and
//!   caller-defined select-key gaps through callbacks.
//!
//! # Example
//!
//! ```
//! use icumsg::{Tokenizer, TokenKind};
//!
//! let locale = "en".parse()?;
//! let mut tokenizer = Tokenizer::new();
//! let mut buffer = Vec::new();
//! let msg = "Hello {arg} ({rank, ordinal})!";
//! tokenizer.tokenize(&locale, &mut buffer, msg)?;
//!
//! assert_eq!(buffer.len(), 8);
//! assert_eq!(buffer[0].text(msg, &buffer), "Hello ");
//! assert_eq!(buffer[6].kind, TokenKind::ArgTypeOrdinal);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Failures carry a byte position for caret diagnostics:
//!
//! ```
//! use icumsg::{ErrorKind, Tokenizer};
//!
//! let locale = "en".parse()?;
//! let mut tokenizer = Tokenizer::new();
//! let msg = "{n,plural, one{# message} other{# messages} few{?}}";
//! let err = tokenizer
//!     .tokenize(&locale, &mut Vec::new(), msg)
//!     .unwrap_err();
//! // English has no `few` cardinal form.
//! assert_eq!(err.kind, ErrorKind::UnsupportedPluralForm);
//! assert_eq!(&msg[err.pos as usize..][..3], "few");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod completeness;
mod cursor;
mod error;
mod options;
mod token;
mod tokenizer;
mod unicode_pattern;


pub use completeness::{analyze_completeness, KeyPresence, RequiredOptions, UnknownKeys};
pub use error::{Error, ErrorKind};
pub use options::{options, Options};
pub use token::{Token, TokenCategory, TokenKind};
pub use tokenizer::Tokenizer;

// The data layer, re-exported so most callers need only this crate.
pub use icumsg_cldr::{plural_forms, FormSet, Locale, LocaleError, PluralForms};
