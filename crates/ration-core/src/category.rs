//! 飼料類別

use serde::{Deserialize, Serialize};

/// 飼料類別（封閉集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedCategory {
    /// 乾草料
    DryFodder,
    /// 青綠飼料
    GreenFodder,
    /// 精料
    Concentrate,
    /// 油粕
    OilCake,
    /// 麩皮
    Bran,
    /// 礦物質補充劑
    MineralSupplement,
}

impl FeedCategory {
    /// 全部類別（固定順序）
    pub const ALL: [FeedCategory; 6] = [
        FeedCategory::DryFodder,
        FeedCategory::GreenFodder,
        FeedCategory::Concentrate,
        FeedCategory::OilCake,
        FeedCategory::Bran,
        FeedCategory::MineralSupplement,
    ];

    /// 參考表中使用的類別名稱
    pub fn label(&self) -> &'static str {
        match self {
            FeedCategory::DryFodder => "Dry fodder",
            FeedCategory::GreenFodder => "Green fodder",
            FeedCategory::Concentrate => "Concentrate",
            FeedCategory::OilCake => "Oil cake",
            FeedCategory::Bran => "Bran",
            FeedCategory::MineralSupplement => "Mineral supplement",
        }
    }

    /// 從參考表文字解析類別
    pub fn parse(text: &str) -> Option<FeedCategory> {
        match text.trim() {
            "Dry fodder" => Some(FeedCategory::DryFodder),
            "Green fodder" => Some(FeedCategory::GreenFodder),
            "Concentrate" => Some(FeedCategory::Concentrate),
            "Oil cake" => Some(FeedCategory::OilCake),
            "Bran" => Some(FeedCategory::Bran),
            "Mineral supplement" => Some(FeedCategory::MineralSupplement),
            _ => None,
        }
    }

    /// 檢查是否有對應的參考表原料
    ///
    /// 礦物質補充劑為固定合成原料（Mineral Mixture），參考表中沒有原料列。
    pub fn has_ingredients(&self) -> bool {
        !matches!(self, FeedCategory::MineralSupplement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_roundtrip() {
        for category in FeedCategory::ALL {
            assert_eq!(FeedCategory::parse(category.label()), Some(category));
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            FeedCategory::parse("  Green fodder "),
            Some(FeedCategory::GreenFodder)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(FeedCategory::parse("Silage"), None);
    }

    #[test]
    fn test_mineral_has_no_ingredients() {
        assert!(!FeedCategory::MineralSupplement.has_ingredients());
        assert!(FeedCategory::DryFodder.has_ingredients());
    }
}
