use std::env;

use crate::phonedata::helper_constants::LOCALE_ENV_VARS;

/// Extracts the lowercase country of a POSIX or BCP 47 style locale tag:
/// `en_US.UTF-8` -> `us`, `pt-BR` -> `br`, `de_DE@euro` -> `de`.
///
/// Returns `None` for tags without a region such as `C`, `POSIX` or `en`.
pub fn country_from_locale_tag(tag: &str) -> Option<String> {
    let tag = tag.split(['.', '@']).next()?;
    tag.split(['_', '-'])
        .skip(1)
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_lowercase)
}

/// Country of the process locale, taken from the first non-empty of
/// `LC_ALL`, `LC_MESSAGES` and `LANG`.
pub fn default_locale_country() -> Option<String> {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
        .and_then(|tag| country_from_locale_tag(&tag))
}

#[cfg(test)]
mod tests {
    use super::country_from_locale_tag;

    #[test]
    fn parses_locale_tags() {
        assert_eq!(country_from_locale_tag("en_US.UTF-8").as_deref(), Some("us"));
        assert_eq!(country_from_locale_tag("pt-BR").as_deref(), Some("br"));
        assert_eq!(country_from_locale_tag("de_DE@euro").as_deref(), Some("de"));
        assert_eq!(country_from_locale_tag("zh-Hant-TW").as_deref(), Some("tw"));
        assert_eq!(country_from_locale_tag("C"), None);
        assert_eq!(country_from_locale_tag("POSIX"), None);
        assert_eq!(country_from_locale_tag("en"), None);
        assert_eq!(country_from_locale_tag(""), None);
    }
}
