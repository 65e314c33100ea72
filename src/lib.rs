pub mod lang;
pub mod resolve;

pub use lang::{DE, EN, ES, FR, IT, PT};
pub use lang::{Lang, LangEntry, LanguageAliases, all_langs, from_code};
pub use resolve::{
    Fallback, ResolveError, Resolver, ResolverBuilder, lookup_language, resolve_language_code,
};
