//! # Ration Core
//!
//! 核心資料模型與類型定義

pub mod category;
pub mod ingredient;
pub mod nutrient;
pub mod profile;
pub mod ration;
pub mod tables;

// Re-export 主要類型
pub use category::FeedCategory;
pub use ingredient::IngredientRecord;
pub use nutrient::{NutrientKey, NutrientProfile, NutrientTotals};
pub use profile::{AnimalProfile, AnimalType, BodySize, LactationStage, MilkBand};
pub use ration::Ration;

/// 日糧計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum RationError {
    #[error("參考表缺少必要欄位: {0}")]
    MissingColumn(String),

    #[error("找不到飼料原料: {0}")]
    IngredientNotFound(String),

    #[error("飼料原料重複: {0}")]
    DuplicateIngredient(String),

    #[error("無效的營養成分值: {0}")]
    InvalidNutrientValue(String),

    #[error("參考表格式錯誤: {0}")]
    TableFormat(String),

    #[error("缺少必要的飼料選擇: {0}")]
    MissingSelection(String),

    #[error("動物數量超出範圍 (1-500): {0}")]
    HerdCountOutOfRange(u32),
}

pub type Result<T> = std::result::Result<T, RationError>;
