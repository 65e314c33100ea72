//! Free-form language input → canonical ISO 639-1 code.
//!
//! Matching is a case-insensitive, exact comparison against the alias set of
//! every language in [`all_langs`] order. The first hit wins.
//!
//! Two entry points cover the two ways callers consume the result:
//!
//! * [`resolve_language_code`] – total. Unmatched input comes back lowercased
//!   (passthrough fallback), so a caller cannot tell a real code from noise.
//! * [`lookup_language`] – explicit. Unmatched or empty input is a
//!   [`ResolveError`].
//!
//! Both are thin wrappers around a default [`Resolver`]. Build a custom one
//! with [`Resolver::builder`] to change the fallback policy or to trim input
//! before matching.

use crate::lang::{Lang, LanguageAliases, all_langs};
use std::{borrow::Cow, str::FromStr};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("language input is empty")]
    Empty,
    #[error("unknown language `{0}`")]
    Unknown(String),
}

/// What an unmatched, non-empty input resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// The lowercased input, unchanged.
    #[default]
    Passthrough,
    /// The empty string.
    Empty,
    /// The code of the given language.
    Default(Lang),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolver {
    fallback: Fallback,
    trim: bool,
}

/// Outcome of a single alias scan.
enum Scan<'a> {
    Blank,
    Found(Lang),
    Missed(Cow<'a, str>),
}

static DEFAULT_RESOLVER: Resolver = Resolver::new();

impl Resolver {
    /// Passthrough fallback, no trimming before the match.
    pub const fn new() -> Self {
        Self {
            fallback: Fallback::Passthrough,
            trim: false,
        }
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    #[inline]
    pub const fn fallback(&self) -> Fallback {
        self.fallback
    }

    #[inline]
    pub const fn trims(&self) -> bool {
        self.trim
    }

    /// Resolve `input` to a canonical code, applying the fallback policy when
    /// nothing matches. Absent or whitespace-only input yields `""`.
    ///
    /// Canonical codes are borrowed from static data. Passthrough results
    /// borrow `input` when it is already lowercase.
    pub fn resolve<'a>(&self, input: impl Into<Option<&'a str>>) -> Cow<'a, str> {
        match self.scan(input.into()) {
            Scan::Blank => Cow::Borrowed(""),
            Scan::Found(lang) => Cow::Borrowed(lang.code()),
            Scan::Missed(lower) => {
                debug!(input = %lower, fallback = ?self.fallback, "no language alias matched");
                match self.fallback {
                    Fallback::Passthrough => lower,
                    Fallback::Empty => Cow::Borrowed(""),
                    Fallback::Default(lang) => Cow::Borrowed(lang.code()),
                }
            }
        }
    }

    /// Like [`Resolver::resolve`] but reports a miss instead of falling back.
    /// The fallback policy is ignored here.
    pub fn lookup(&self, input: &str) -> Result<Lang, ResolveError> {
        match self.scan(Some(input)) {
            Scan::Blank => Err(ResolveError::Empty),
            Scan::Found(lang) => Ok(lang),
            Scan::Missed(lower) => Err(ResolveError::Unknown(lower.into_owned())),
        }
    }

    fn scan<'a>(&self, input: Option<&'a str>) -> Scan<'a> {
        let Some(raw) = input else {
            return Scan::Blank;
        };
        if raw.trim_matches(is_js_whitespace).is_empty() {
            return Scan::Blank;
        }

        let candidate = if self.trim {
            raw.trim_matches(is_js_whitespace)
        } else {
            raw
        };
        let lower = lowercase(candidate);

        match all_langs().iter().find(|lang| lang.is_alias(&lower)) {
            Some(&lang) => {
                trace!(code = lang.code(), "language alias matched");
                Scan::Found(lang)
            }
            None => Scan::Missed(lower),
        }
    }
}

#[derive(Debug, Default)]
pub struct ResolverBuilder {
    fallback: Fallback,
    trim: bool,
}

impl ResolverBuilder {
    pub fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Strip leading/trailing whitespace before matching.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn build(self) -> Resolver {
        Resolver {
            fallback: self.fallback,
            trim: self.trim,
        }
    }
}

/// Whitespace as ECMAScript `String.prototype.trim` sees it: WhiteSpace plus
/// LineTerminator. Unlike `char::is_whitespace`, U+FEFF counts and U+0085
/// does not.
#[inline]
pub(crate) fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' ' | '\u{a0}' | '\u{feff}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}'
    )
}

/// Zero-copy when `text` has nothing to lowercase.
#[inline]
fn lowercase(text: &str) -> Cow<'_, str> {
    if text.chars().flat_map(char::to_lowercase).eq(text.chars()) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Resolve free-form input (`"French"`, `"FR"`, `"français"`, …) to its
/// canonical code. Unmatched input is returned lowercased; absent or blank
/// input yields `""`. Never fails.
#[inline]
pub fn resolve_language_code<'a>(input: impl Into<Option<&'a str>>) -> Cow<'a, str> {
    DEFAULT_RESOLVER.resolve(input)
}

/// Resolve free-form input to a [`Lang`], reporting empty and unknown input.
#[inline]
pub fn lookup_language(input: &str) -> Result<Lang, ResolveError> {
    DEFAULT_RESOLVER.lookup(input)
}

impl FromStr for Lang {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_language(s)
    }
}
