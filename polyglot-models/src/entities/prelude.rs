pub use super::app::{
    ActiveModel as AppActiveModel, Column as AppColumn, Entity as App, Model as AppModel,
};
pub use super::app_locale::{
    ActiveModel as AppLocaleActiveModel, Column as AppLocaleColumn, Entity as AppLocale,
    Model as AppLocaleModel,
};
pub use super::category::{
    ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as Category,
    Model as CategoryModel,
};
pub use super::key::{
    ActiveModel as KeyActiveModel, Column as KeyColumn, Entity as Key, Model as KeyModel,
};
pub use super::key_translation::{
    ActiveModel as KeyTranslationActiveModel, Column as KeyTranslationColumn,
    Entity as KeyTranslation, Model as KeyTranslationModel,
};
pub use super::language::{
    ActiveModel as LanguageActiveModel, Column as LanguageColumn, Entity as Language,
    Model as LanguageModel,
};
pub use super::locale::{
    ActiveModel as LocaleActiveModel, Column as LocaleColumn, Entity as Locale,
    Model as LocaleModel,
};
pub use super::locale_name::{
    ActiveModel as LocaleNameActiveModel, Column as LocaleNameColumn, Entity as LocaleName,
    Model as LocaleNameModel,
};
pub use super::script::{
    ActiveModel as ScriptActiveModel, Column as ScriptColumn, Entity as Script,
    Model as ScriptModel,
};
pub use super::territory::{
    ActiveModel as TerritoryActiveModel, Column as TerritoryColumn, Entity as Territory,
    Model as TerritoryModel,
};
pub use super::territory_name::{
    ActiveModel as TerritoryNameActiveModel, Column as TerritoryNameColumn,
    Entity as TerritoryName, Model as TerritoryNameModel,
};
pub use super::variant::{
    ActiveModel as VariantActiveModel, Column as VariantColumn, Entity as Variant,
    Model as VariantModel,
};
