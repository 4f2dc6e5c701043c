//! # Ration
//!
//! NDDB 乳牛/水牛日糧配方引擎門面：
//! 基礎日糧查表 → 體型/泌乳階段調整 → 營養彙總 → 全群縮放。

pub use ration_calc::{
    FeedSelection, HerdScaler, HerdTotals, NutrientAggregator, RationCalculator, RationPlan,
    RationResolver, RationWarning, WarningSeverity,
};
pub use ration_core::{
    AnimalProfile, AnimalType, BodySize, FeedCategory, IngredientRecord, LactationStage, MilkBand,
    NutrientKey, NutrientProfile, NutrientTotals, Ration, RationError, Result,
};
pub use ration_table::FeedTable;
