//! 飼料原料模型

use serde::{Deserialize, Serialize};

use crate::category::FeedCategory;
use crate::nutrient::NutrientProfile;
use crate::Result;

/// 飼料原料（參考表的一列）
///
/// 載入後不可變；(類別, 名稱) 在同一張表內必須唯一，查詢才不會歧義。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// 原料名稱（同類別內唯一）
    pub name: String,

    /// 飼料類別
    pub category: FeedCategory,

    /// 營養組成
    pub nutrients: NutrientProfile,
}

impl IngredientRecord {
    /// 創建新的原料記錄
    pub fn new(name: String, category: FeedCategory, nutrients: NutrientProfile) -> Self {
        Self {
            name,
            category,
            nutrients,
        }
    }

    /// 驗證營養組成
    pub fn validate(&self) -> Result<()> {
        self.nutrients.validate(&self.name)
    }
}
