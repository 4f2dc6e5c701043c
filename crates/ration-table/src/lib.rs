//! # Ration Reference Table
//!
//! 飼料原料參考表：載入、驗證與查詢。
//! 表在程序啟動時載入一次，之後不可變，可供多執行緒無鎖併發讀取。

mod loader;

use std::collections::HashMap;

use ration_core::{FeedCategory, IngredientRecord, RationError, Result};

/// 飼料原料參考表
#[derive(Debug, Clone)]
pub struct FeedTable {
    /// 原料記錄（保持載入順序，供 UI 列表使用）
    records: Vec<IngredientRecord>,

    /// (類別, 名稱) → 記錄索引
    index: HashMap<(FeedCategory, String), usize>,
}

impl FeedTable {
    /// 從 JSON 文字載入參考表
    ///
    /// 欄位名稱在查詢前先做正規化（去除空白、零寬空白與 BOM）。
    /// 缺少必要欄位、未知類別、無效營養值或重複原料都會立即失敗，
    /// 不會進入任何計算。
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records = loader::parse_rows(json)?;
        let table = Self::from_records(records)?;
        tracing::info!("參考表載入完成：{} 筆原料", table.len());
        Ok(table)
    }

    /// 從已建構的記錄建立參考表
    pub fn from_records(records: Vec<IngredientRecord>) -> Result<Self> {
        let mut index = HashMap::new();

        for (i, record) in records.iter().enumerate() {
            record.validate()?;

            let key = (record.category, record.name.clone());
            if index.insert(key, i).is_some() {
                return Err(RationError::DuplicateIngredient(format!(
                    "{} / {}",
                    record.category.label(),
                    record.name
                )));
            }
        }

        Ok(Self { records, index })
    }

    /// 查詢指定類別的原料
    pub fn get(&self, category: FeedCategory, name: &str) -> Result<&IngredientRecord> {
        self.index
            .get(&(category, name.to_string()))
            .map(|&i| &self.records[i])
            .ok_or_else(|| {
                RationError::IngredientNotFound(format!("{} / {}", category.label(), name))
            })
    }

    /// 列出指定類別的全部原料（依載入順序）
    pub fn ingredients_in(&self, category: FeedCategory) -> Vec<&IngredientRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// 原料總數
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ration_core::NutrientProfile;
    use rust_decimal::Decimal;

    fn sample_record(name: &str, category: FeedCategory) -> IngredientRecord {
        IngredientRecord::new(
            name.to_string(),
            category,
            NutrientProfile::new(
                Decimal::from(9),
                Decimal::from(2),
                Decimal::from(33),
                Decimal::from(44),
                Decimal::from(10),
                Decimal::from(67),
                Decimal::from(41),
                Decimal::new(72, 1),
            ),
        )
    }

    #[test]
    fn test_get_and_list() {
        let table = FeedTable::from_records(vec![
            sample_record("Paddy straw", FeedCategory::DryFodder),
            sample_record("Wheat straw", FeedCategory::DryFodder),
            sample_record("Berseem", FeedCategory::GreenFodder),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get(FeedCategory::DryFodder, "Paddy straw").unwrap().name,
            "Paddy straw"
        );

        let dry = table.ingredients_in(FeedCategory::DryFodder);
        assert_eq!(dry.len(), 2);
        assert_eq!(dry[0].name, "Paddy straw");
        assert_eq!(dry[1].name, "Wheat straw");
    }

    #[test]
    fn test_missing_ingredient() {
        let table =
            FeedTable::from_records(vec![sample_record("Berseem", FeedCategory::GreenFodder)])
                .unwrap();

        assert!(matches!(
            table.get(FeedCategory::GreenFodder, "Napier grass"),
            Err(RationError::IngredientNotFound(_))
        ));
    }

    #[test]
    fn test_same_name_in_different_categories_allowed() {
        // 唯一性約束是 (類別, 名稱)，不同類別可以同名
        let table = FeedTable::from_records(vec![
            sample_record("Maize", FeedCategory::GreenFodder),
            sample_record("Maize", FeedCategory::Concentrate),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = FeedTable::from_records(vec![
            sample_record("Berseem", FeedCategory::GreenFodder),
            sample_record("Berseem", FeedCategory::GreenFodder),
        ]);

        assert!(matches!(result, Err(RationError::DuplicateIngredient(_))));
    }

    #[test]
    fn test_invalid_record_rejected_at_load() {
        let mut bad = sample_record("Broken", FeedCategory::Bran);
        bad.nutrients.cp = Decimal::from(-1);

        assert!(matches!(
            FeedTable::from_records(vec![bad]),
            Err(RationError::InvalidNutrientValue(_))
        ));
    }
}
