pub use crate::domain::{
    app::{AppLocales, SetAppLocales},
    category::{CategoryPageParams, NewCategory, UpdateCategory},
    common::{PageParams, PageResult},
    key::{
        KeyInfo, KeyPageInfo, KeyPageParams, NewKey, NewKeyTranslation, UpdateKey,
        UpdateKeyTranslation,
    },
    lookup::{CategoryLookup, LocaleLookup, NamedRecord, TerritoryLookup},
    translation::{TranslationRow, TranslationTree, TranslationValue},
};
