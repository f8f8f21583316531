mod locale;

pub use locale::{country_from_locale_tag, default_locale_country};
