pub mod app;
pub mod category;
pub mod key;
pub mod key_translation;
pub mod locale;
pub mod territory;

pub use app::AppRepository;
pub use category::CategoryRepository;
pub use key::KeyRepository;
pub use key_translation::KeyTranslationRepository;
pub use locale::LocaleRepository;
pub use territory::TerritoryRepository;
