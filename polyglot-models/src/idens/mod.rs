pub mod app;
pub mod app_locale;
pub mod category;
pub mod key;
pub mod key_translation;
pub mod language;
pub mod locale;
pub mod locale_name;
pub mod script;
pub mod territory;
pub mod territory_name;
pub mod variant;

// Reference vocabulary first, then the tables that point at it
const INIT_REFERENCE_ORDER: i32 = 0;
const INIT_LANGUAGE_ORDER: i32 = INIT_REFERENCE_ORDER + 1;
const INIT_SCRIPT_ORDER: i32 = INIT_LANGUAGE_ORDER + 1;
const INIT_TERRITORY_ORDER: i32 = INIT_SCRIPT_ORDER + 1;
const INIT_VARIANT_ORDER: i32 = INIT_TERRITORY_ORDER + 1;
const INIT_LOCALE_ORDER: i32 = INIT_VARIANT_ORDER + 1;
const INIT_LOCALE_NAME_ORDER: i32 = INIT_LOCALE_ORDER + 1;
const INIT_TERRITORY_NAME_ORDER: i32 = INIT_LOCALE_NAME_ORDER + 1;

const INIT_CONTENT_ORDER: i32 = 100;
const INIT_APP_ORDER: i32 = INIT_CONTENT_ORDER + 1;
const INIT_APP_LOCALE_ORDER: i32 = INIT_APP_ORDER + 1;
const INIT_CATEGORY_ORDER: i32 = INIT_APP_LOCALE_ORDER + 1;
const INIT_KEY_ORDER: i32 = INIT_CATEGORY_ORDER + 1;
const INIT_KEY_TRANSLATION_ORDER: i32 = INIT_KEY_ORDER + 1;
