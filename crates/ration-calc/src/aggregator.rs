//! 營養總量計算

use ration_core::{FeedCategory, IngredientRecord, NutrientTotals, Ration};
use rust_decimal::Decimal;

/// 飼料選擇
///
/// 每個類別至多一種原料；缺席以 `None` 明確表示，而非以零值哨兵推斷。
/// 油粕與麩皮在解析數量為 0 時本來就沒有選擇（有效狀態，非錯誤）。
/// 礦物質補充劑為固定合成原料，無原料可選。
#[derive(Debug, Clone, Default)]
pub struct FeedSelection {
    pub dry_fodder: Option<IngredientRecord>,
    pub green_fodder: Option<IngredientRecord>,
    pub concentrate: Option<IngredientRecord>,
    pub oil_cake: Option<IngredientRecord>,
    pub bran: Option<IngredientRecord>,
}

impl FeedSelection {
    /// 創建空的選擇
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置乾草料
    pub fn with_dry_fodder(mut self, record: IngredientRecord) -> Self {
        self.dry_fodder = Some(record);
        self
    }

    /// 建構器模式：設置青綠飼料
    pub fn with_green_fodder(mut self, record: IngredientRecord) -> Self {
        self.green_fodder = Some(record);
        self
    }

    /// 建構器模式：設置精料
    pub fn with_concentrate(mut self, record: IngredientRecord) -> Self {
        self.concentrate = Some(record);
        self
    }

    /// 建構器模式：設置油粕
    pub fn with_oil_cake(mut self, record: IngredientRecord) -> Self {
        self.oil_cake = Some(record);
        self
    }

    /// 建構器模式：設置麩皮
    pub fn with_bran(mut self, record: IngredientRecord) -> Self {
        self.bran = Some(record);
        self
    }

    /// 取得指定類別的選擇
    pub fn get(&self, category: FeedCategory) -> Option<&IngredientRecord> {
        match category {
            FeedCategory::DryFodder => self.dry_fodder.as_ref(),
            FeedCategory::GreenFodder => self.green_fodder.as_ref(),
            FeedCategory::Concentrate => self.concentrate.as_ref(),
            FeedCategory::OilCake => self.oil_cake.as_ref(),
            FeedCategory::Bran => self.bran.as_ref(),
            FeedCategory::MineralSupplement => None,
        }
    }
}

/// 營養總量計算器
pub struct NutrientAggregator;

impl NutrientAggregator {
    /// 彙總每日營養攝取
    ///
    /// 對全部 6 個類別定義為全函數：數量為零或未選擇原料的類別
    /// 貢獻零總量（加總的單位元素），不會跳過而破壞累加。
    /// 不做正規化也不做上限裁剪。
    pub fn aggregate(selection: &FeedSelection, ration: &Ration) -> NutrientTotals {
        let mut totals = NutrientTotals::zero();

        for category in FeedCategory::ALL {
            let contribution =
                Self::contribution(selection.get(category), ration.quantity(category));
            totals = totals.add(&contribution);
        }

        totals
    }

    /// 單一類別的營養貢獻
    ///
    /// CP–ADF：數量 × 百分比 / 100（kg/day）；ME：數量 × MJ/kg（MJ/day）。
    fn contribution(record: Option<&IngredientRecord>, qty: Decimal) -> NutrientTotals {
        let record = match record {
            Some(record) if qty > Decimal::ZERO => record,
            _ => return NutrientTotals::zero(),
        };

        let n = &record.nutrients;
        NutrientTotals {
            cp: qty * n.cp / Decimal::ONE_HUNDRED,
            ee: qty * n.ee / Decimal::ONE_HUNDRED,
            cf: qty * n.cf / Decimal::ONE_HUNDRED,
            nfe: qty * n.nfe / Decimal::ONE_HUNDRED,
            ash: qty * n.ash / Decimal::ONE_HUNDRED,
            ndf: qty * n.ndf / Decimal::ONE_HUNDRED,
            adf: qty * n.adf / Decimal::ONE_HUNDRED,
            me: qty * n.me,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ration_core::{NutrientKey, NutrientProfile};

    fn record(name: &str, category: FeedCategory, cp: Decimal, me: Decimal) -> IngredientRecord {
        IngredientRecord::new(
            name.to_string(),
            category,
            NutrientProfile::new(
                cp,
                Decimal::ZERO,
                Decimal::ZERO,
                Decimal::ZERO,
                Decimal::ZERO,
                Decimal::ZERO,
                Decimal::ZERO,
                me,
            ),
        )
    }

    #[test]
    fn test_single_category_contribution() {
        // 乾草料 7 kg，CP 10%，ME 7.2 MJ/kg
        let selection = FeedSelection::new().with_dry_fodder(record(
            "Paddy straw",
            FeedCategory::DryFodder,
            Decimal::from(10),
            Decimal::new(72, 1),
        ));
        let ration = Ration::new(
            Decimal::from(7),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::from(100),
        );

        let totals = NutrientAggregator::aggregate(&selection, &ration);

        // CP = 7 × 10 / 100 = 0.7 kg/day；ME = 7 × 7.2 = 50.4 MJ/day
        assert_eq!(totals.cp, Decimal::new(7, 1));
        assert_eq!(totals.me, Decimal::new(504, 1));
        assert_eq!(totals.ee, Decimal::ZERO);
    }

    #[test]
    fn test_contributions_sum_across_categories() {
        let selection = FeedSelection::new()
            .with_dry_fodder(record(
                "Wheat straw",
                FeedCategory::DryFodder,
                Decimal::from(4),
                Decimal::from(6),
            ))
            .with_green_fodder(record(
                "Berseem",
                FeedCategory::GreenFodder,
                Decimal::from(17),
                Decimal::from(9),
            ));
        let ration = Ration::new(
            Decimal::from(5),
            Decimal::from(10),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::from(50),
        );

        let totals = NutrientAggregator::aggregate(&selection, &ration);

        // CP = 5 × 4/100 + 10 × 17/100 = 0.2 + 1.7 = 1.9
        assert_eq!(totals.cp, Decimal::new(19, 1));
        // ME = 5 × 6 + 10 × 9 = 120
        assert_eq!(totals.me, Decimal::from(120));
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        // 即使名義上指定了原料，數量為零的類別對每項營養的貢獻都是 0
        let selection = FeedSelection::new().with_oil_cake(record(
            "Groundnut cake",
            FeedCategory::OilCake,
            Decimal::from(45),
            Decimal::from(11),
        ));
        let ration = Ration::new(
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO, // 油粕數量為零
            Decimal::ZERO,
            Decimal::from(100),
        );

        let totals = NutrientAggregator::aggregate(&selection, &ration);

        for key in NutrientKey::ALL {
            assert_eq!(totals.get(key), Decimal::ZERO);
        }
    }

    #[test]
    fn test_absent_selection_contributes_nothing() {
        let selection = FeedSelection::new();
        let ration = Ration::new(
            Decimal::from(7),
            Decimal::from(4),
            Decimal::from(4),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::from(100),
        );

        let totals = NutrientAggregator::aggregate(&selection, &ration);

        for key in NutrientKey::ALL {
            assert_eq!(totals.get(key), Decimal::ZERO);
        }
    }

    #[test]
    fn test_mineral_never_contributes() {
        // 礦物質補充劑沒有營養組成列，正的礦物質數量不影響總量
        let selection = FeedSelection::new();
        let with_mineral = Ration::new(
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::from(150),
        );

        let totals = NutrientAggregator::aggregate(&selection, &with_mineral);
        assert_eq!(totals, NutrientTotals::zero());
    }
}
