//! 日糧模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::FeedCategory;

/// 單隻動物的每日日糧
///
/// 乾草料/青綠飼料/精料/油粕/麩皮以 kg/day 計，礦物質以 g/day 計。
/// 解析器每次呼叫都產生新值；調整步驟回傳新的日糧而非就地修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ration {
    /// 乾草料（kg/day）
    pub dry: Decimal,

    /// 青綠飼料（kg/day）
    pub green: Decimal,

    /// 精料（kg/day）
    pub conc: Decimal,

    /// 油粕（kg/day）
    pub oil: Decimal,

    /// 麩皮（kg/day）
    pub bran: Decimal,

    /// 礦物質（g/day）
    pub mineral: Decimal,
}

impl Ration {
    /// 創建新的日糧
    pub fn new(
        dry: Decimal,
        green: Decimal,
        conc: Decimal,
        oil: Decimal,
        bran: Decimal,
        mineral: Decimal,
    ) -> Self {
        Self {
            dry,
            green,
            conc,
            oil,
            bran,
            mineral,
        }
    }

    /// 取得指定類別的數量（礦物質以公克計，其餘以公斤計）
    pub fn quantity(&self, category: FeedCategory) -> Decimal {
        match category {
            FeedCategory::DryFodder => self.dry,
            FeedCategory::GreenFodder => self.green,
            FeedCategory::Concentrate => self.conc,
            FeedCategory::OilCake => self.oil,
            FeedCategory::Bran => self.bran,
            FeedCategory::MineralSupplement => self.mineral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_accessor() {
        let ration = Ration::new(
            Decimal::from(7),
            Decimal::from(4),
            Decimal::from(4),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::from(100),
        );

        assert_eq!(ration.quantity(FeedCategory::DryFodder), Decimal::from(7));
        assert_eq!(ration.quantity(FeedCategory::OilCake), Decimal::ZERO);
        assert_eq!(
            ration.quantity(FeedCategory::MineralSupplement),
            Decimal::from(100)
        );
    }
}
