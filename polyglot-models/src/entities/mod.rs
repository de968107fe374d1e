pub mod app;
pub mod app_locale;
pub mod category;
pub mod key;
pub mod key_translation;
pub mod language;
pub mod locale;
pub mod locale_name;
pub mod prelude;
pub mod script;
pub mod territory;
pub mod territory_name;
pub mod variant;
