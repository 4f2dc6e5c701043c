//! 全群縮放

use ration_core::{NutrientTotals, Ration};
use rust_decimal::Decimal;

/// 全群總量
#[derive(Debug, Clone, PartialEq)]
pub struct HerdTotals {
    /// 動物數量
    pub animal_count: u32,

    /// 全群每日日糧（礦物質仍以公克計）
    pub ration: Ration,

    /// 全群每日營養總量
    pub nutrients: NutrientTotals,
}

impl HerdTotals {
    /// 全群每日礦物質需求（公斤）
    ///
    /// 單位換算必須精確：1 kg = 1000 g。顯示層級的換算，不屬於縮放本身。
    pub fn mineral_kg(&self) -> Decimal {
        self.ration.mineral / Decimal::from(1000)
    }
}

/// 全群縮放器
///
/// 純線性乘法；輸入為已四捨五入的單隻日糧，縮放本身不再四捨五入。
pub struct HerdScaler;

impl HerdScaler {
    /// 依動物數量縮放日糧
    pub fn scale_ration(ration: &Ration, count: u32) -> Ration {
        let n = Decimal::from(count);
        Ration::new(
            ration.dry * n,
            ration.green * n,
            ration.conc * n,
            ration.oil * n,
            ration.bran * n,
            ration.mineral * n,
        )
    }

    /// 依動物數量縮放營養總量
    pub fn scale_nutrients(nutrients: &NutrientTotals, count: u32) -> NutrientTotals {
        nutrients.scale(Decimal::from(count))
    }

    /// 計算全群總量
    pub fn totals(ration: &Ration, nutrients: &NutrientTotals, count: u32) -> HerdTotals {
        HerdTotals {
            animal_count: count,
            ration: Self::scale_ration(ration, count),
            nutrients: Self::scale_nutrients(nutrients, count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use ration_core::FeedCategory;

    fn sample_ration() -> Ration {
        Ration::new(
            Decimal::new(805, 2),
            Decimal::new(115, 1),
            Decimal::new(621, 2),
            Decimal::new(23, 1),
            Decimal::ZERO,
            Decimal::from(201),
        )
    }

    #[test]
    fn test_scale_ration() {
        let herd = HerdScaler::scale_ration(&sample_ration(), 10);

        assert_eq!(herd.dry, Decimal::new(8050, 2));
        assert_eq!(herd.green, Decimal::from(115));
        assert_eq!(herd.mineral, Decimal::from(2010));
    }

    #[test]
    fn test_mineral_kg_conversion() {
        let totals = HerdScaler::totals(&sample_ration(), &NutrientTotals::zero(), 10);

        // 201 g × 10 / 1000 = 2.01 kg，精確換算
        assert_eq!(totals.mineral_kg(), Decimal::new(201, 2));
    }

    #[test]
    fn test_count_one_is_identity() {
        let ration = sample_ration();
        assert_eq!(HerdScaler::scale_ration(&ration, 1), ration);
    }

    proptest! {
        #[test]
        fn test_scaling_linearity(n1 in 1u32..=250, n2 in 1u32..=250) {
            // scale(R, n1 + n2) == scale(R, n1) + scale(R, n2) 逐項成立
            let ration = sample_ration();
            let combined = HerdScaler::scale_ration(&ration, n1 + n2);
            let a = HerdScaler::scale_ration(&ration, n1);
            let b = HerdScaler::scale_ration(&ration, n2);

            for category in FeedCategory::ALL {
                prop_assert_eq!(
                    combined.quantity(category),
                    a.quantity(category) + b.quantity(category)
                );
            }
        }

        #[test]
        fn test_nutrient_scaling_linearity(n1 in 1u32..=250, n2 in 1u32..=250) {
            let mut nutrients = NutrientTotals::zero();
            nutrients.cp = Decimal::new(19, 1);
            nutrients.me = Decimal::new(504, 1);

            let combined = HerdScaler::scale_nutrients(&nutrients, n1 + n2);
            let sum = HerdScaler::scale_nutrients(&nutrients, n1)
                .add(&HerdScaler::scale_nutrients(&nutrients, n2));

            prop_assert_eq!(combined, sum);
        }
    }
}
