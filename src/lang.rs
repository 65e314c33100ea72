pub(crate) mod behaviour;
pub mod data;

pub use behaviour::LanguageAliases;
pub use data::{DE, EN, ES, FR, IT, LANG_TABLE, PT, all_langs, from_code};

use std::fmt;

/// Identifier of a supported language.
///
/// `code` is the canonical ISO 639-1 code, `name` the lowercase English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Static record stored in `LANG_TABLE` for every language.
#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub name: &'static str,
    /// Native or localized name, also present in `aliases`.
    pub localized: &'static str,
    /// Every lowercase spelling that resolves to this language, code included.
    pub aliases: &'static [&'static str],
}

impl LangEntry {
    #[inline]
    pub fn contains_alias(&self, candidate: &str) -> bool {
        self.aliases.contains(&candidate)
    }
}
