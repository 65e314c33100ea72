use crate::lang::{Lang, LangEntry, data::LANG_TABLE};

/// ---------------------------------------------------------------------------
/// LanguageAliases – alias queries answered from the static table
/// ---------------------------------------------------------------------------
pub trait LanguageAliases {
    fn entry(&self) -> Option<&'static LangEntry>;

    /// Every lowercase alias of this language, or an empty slice for a
    /// hand-built `Lang` that is not in the table.
    #[inline]
    fn aliases(&self) -> &'static [&'static str] {
        self.entry().map(|e| e.aliases).unwrap_or(&[])
    }

    #[inline]
    fn localized_name(&self) -> Option<&'static str> {
        self.entry().map(|e| e.localized)
    }

    /// Exact match against the alias set. `candidate` must already be lowercase.
    #[inline]
    fn is_alias(&self, candidate: &str) -> bool {
        self.entry().is_some_and(|e| e.contains_alias(candidate))
    }
}

impl LanguageAliases for Lang {
    #[inline(always)]
    fn entry(&self) -> Option<&'static LangEntry> {
        LANG_TABLE.get(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::LanguageAliases;
    use crate::lang::{DE, IT, Lang};

    #[test]
    fn aliases_follow_table() {
        assert_eq!(IT.aliases(), &["italien", "italian", "it"]);
        assert_eq!(DE.localized_name(), Some("allemand"));
        assert!(DE.is_alias("german"));
        assert!(!DE.is_alias("German"));
        assert!(!DE.is_alias("italian"));
    }

    #[test]
    fn unknown_lang_has_no_aliases() {
        let tlh = Lang { code: "tlh", name: "klingon" };
        assert!(tlh.entry().is_none());
        assert!(tlh.aliases().is_empty());
        assert_eq!(tlh.localized_name(), None);
        assert!(!tlh.is_alias("tlh"));
    }
}
