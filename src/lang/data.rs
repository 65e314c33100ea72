use crate::lang::{Lang, LangEntry};

use paste::paste;
use phf::{Map, phf_map};

// ---------------------------------------------------------------------------
//    Macro – generates everything from a single table
// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $name:literal,
        localized: $localized:literal,
        aliases: [ $($alias:literal),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    pub const ALIASES: &[&str] = &[$($alias),*];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        name: $name,
                        localized: $localized,
                        aliases: [<$code:lower _data>]::ALIASES,
                    }
                ),*
            };
        }

        // Declaration order, used as the resolver scan order.
        static ALL_LANGS: &[Lang] = &[$($code),*];

        // Helper: `Lang::from_code`
        pub fn from_code(code: &str) -> Option<Lang> {
            let lower = code.to_ascii_lowercase();
            match lower.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Localized names are the French spellings, except French itself.
// ---------------------------------------------------------------------------
define_languages! {
    FR, "fr", "french",
        localized: "français",
        aliases: ["french", "français", "fr"],

    EN, "en", "english",
        localized: "anglais",
        aliases: ["english", "anglais", "en"],

    ES, "es", "spanish",
        localized: "espagnol",
        aliases: ["spanish", "espagnol", "es"],

    DE, "de", "german",
        localized: "allemand",
        aliases: ["german", "allemand", "de"],

    IT, "it", "italian",
        localized: "italien",
        aliases: ["italien", "italian", "it"],

    PT, "pt", "portuguese",
        localized: "portugais",
        aliases: ["portuguese", "portugais", "pt"],
}

/// All supported languages in declaration order.
#[inline]
pub fn all_langs() -> &'static [Lang] {
    ALL_LANGS
}

#[cfg(test)]
mod tests {
    use crate::lang::{
        LangEntry,
        data::{DE, EN, ES, FR, IT, LANG_TABLE, PT, all_langs, from_code},
    };
    use std::collections::HashSet;

    fn get_from_table(code: &str) -> &'static LangEntry {
        LANG_TABLE.get(code).unwrap()
    }

    #[test]
    fn test_table_matches_constants() {
        assert_eq!(LANG_TABLE.len(), all_langs().len());
        for lang in all_langs() {
            let entry = get_from_table(lang.code());
            assert_eq!(entry.name, lang.name());
        }
    }

    #[test]
    fn test_code_is_its_own_alias() {
        for (code, entry) in LANG_TABLE.entries() {
            assert!(entry.contains_alias(code), "{code} missing from its aliases");
        }
    }

    #[test]
    fn test_name_and_localized_are_aliases() {
        for entry in LANG_TABLE.values() {
            assert!(entry.contains_alias(entry.name));
            assert!(entry.contains_alias(entry.localized));
        }
    }

    #[test]
    fn test_aliases_are_lowercase() {
        for entry in LANG_TABLE.values() {
            for alias in entry.aliases {
                assert_eq!(*alias, alias.to_lowercase());
                assert_eq!(*alias, alias.trim());
            }
        }
    }

    #[test]
    fn test_alias_sets_are_disjoint() {
        let mut seen = HashSet::new();
        for entry in LANG_TABLE.values() {
            for alias in entry.aliases {
                assert!(seen.insert(*alias), "alias `{alias}` declared twice");
            }
        }
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(all_langs(), &[FR, EN, ES, DE, IT, PT]);
    }

    #[test]
    fn test_french_entry() {
        let entry = get_from_table("fr");
        assert_eq!(entry.name, "french");
        assert_eq!(entry.localized, "français");
        assert!(entry.contains_alias("français"));
        assert!(!entry.contains_alias("Français"));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(from_code("fr"), Some(FR));
        assert_eq!(from_code("FR"), Some(FR));
        assert_eq!(from_code("Pt"), Some(PT));
        assert_eq!(from_code("french"), None);
        assert_eq!(from_code("xx"), None);
        assert_eq!(from_code(""), None);
    }
}
