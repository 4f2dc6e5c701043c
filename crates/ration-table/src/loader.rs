//! 參考表解析與欄位正規化
//!
//! 試算表匯出的欄位名稱常混入空白、零寬空白（U+200B）或 BOM（U+FEFF），
//! 數值欄位也可能以字串形式出現；解析前先做正規化。

use std::collections::HashMap;

use ration_core::{FeedCategory, IngredientRecord, NutrientKey, NutrientProfile, RationError, Result};
use rust_decimal::Decimal;
use serde_json::Value;

/// 解析 JSON 列陣列為原料記錄
pub(crate) fn parse_rows(json: &str) -> Result<Vec<IngredientRecord>> {
    let rows: Vec<serde_json::Map<String, Value>> = serde_json::from_str(json)
        .map_err(|e| RationError::TableFormat(e.to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| parse_row(row).map_err(|e| annotate_row(i, e)))
        .collect()
}

/// 正規化欄位名稱：去除首尾空白、零寬空白與 BOM
fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| *c != '\u{200b}' && *c != '\u{feff}')
        .collect()
}

fn parse_row(row: &serde_json::Map<String, Value>) -> Result<IngredientRecord> {
    let fields: HashMap<String, &Value> = row
        .iter()
        .map(|(k, v)| (normalize_key(k), v))
        .collect();

    let name = require_str(&fields, "Ingredient")?.trim().to_string();

    let category_text = require_str(&fields, "Category")?;
    let category = FeedCategory::parse(category_text).ok_or_else(|| {
        RationError::TableFormat(format!("未知的飼料類別: {}", category_text))
    })?;

    let nutrients = NutrientProfile::new(
        require_decimal(&fields, NutrientKey::Cp.column())?,
        require_decimal(&fields, NutrientKey::Ee.column())?,
        require_decimal(&fields, NutrientKey::Cf.column())?,
        require_decimal(&fields, NutrientKey::Nfe.column())?,
        require_decimal(&fields, NutrientKey::Ash.column())?,
        require_decimal(&fields, NutrientKey::Ndf.column())?,
        require_decimal(&fields, NutrientKey::Adf.column())?,
        require_decimal(&fields, NutrientKey::Me.column())?,
    );

    Ok(IngredientRecord::new(name, category, nutrients))
}

fn require_str<'a>(fields: &'a HashMap<String, &Value>, column: &str) -> Result<&'a str> {
    match fields.get(column) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(RationError::TableFormat(format!(
            "欄位 {} 應為文字，得到 {}",
            column, other
        ))),
        None => Err(RationError::MissingColumn(column.to_string())),
    }
}

/// 讀取數值欄位（接受 JSON 數字或數字字串）
fn require_decimal(fields: &HashMap<String, &Value>, column: &str) -> Result<Decimal> {
    let value = fields
        .get(column)
        .ok_or_else(|| RationError::MissingColumn(column.to_string()))?;

    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(RationError::TableFormat(format!(
                "欄位 {} 應為數值，得到 {}",
                column, other
            )))
        }
    };

    text.parse::<Decimal>().map_err(|_| {
        RationError::InvalidNutrientValue(format!("欄位 {} 無法解析: {}", column, text))
    })
}

/// 在錯誤信息中加上列號（缺欄位錯誤保持原樣，對所有列都成立）
fn annotate_row(index: usize, error: RationError) -> RationError {
    match error {
        RationError::MissingColumn(_) => error,
        RationError::TableFormat(msg) => {
            RationError::TableFormat(format!("第 {} 列: {}", index + 1, msg))
        }
        RationError::InvalidNutrientValue(msg) => {
            RationError::InvalidNutrientValue(format!("第 {} 列: {}", index + 1, msg))
        }
        other => other,
    }
}
