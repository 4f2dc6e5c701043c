//! 日糧解析器
//!
//! 純函數：(動物類型, 產奶量級距, 泌乳階段, 體型) → 日糧。
//! 輸入域為有限封閉列舉，對任何組合都不會失敗。

use ration_core::{tables, AnimalType, BodySize, LactationStage, MilkBand, Ration};
use rust_decimal::Decimal;

/// 日糧解析器
pub struct RationResolver;

impl RationResolver {
    /// 解析日糧
    ///
    /// Step 1: 依泌乳階段決定基礎日糧；
    /// Step 2: 依體型縮放各項數量；
    /// Step 3: 對已縮放值套用階段調整；
    /// Step 4: 礦物質只依體型縮放，四捨五入到整數克。
    pub fn resolve(
        animal_type: AnimalType,
        milk_band: MilkBand,
        stage: LactationStage,
        body_size: BodySize,
    ) -> Ration {
        let base = Self::base_for(animal_type, milk_band, stage);
        Self::adjust(&base, body_size, stage)
    }

    /// 依泌乳階段決定基礎日糧
    fn base_for(animal_type: AnimalType, milk_band: MilkBand, stage: LactationStage) -> Ration {
        match stage {
            // 懷孕動物使用固定日糧，與動物類型/產奶量無關
            LactationStage::Pregnant => tables::pregnant_base(),
            // 乾乳期一律使用乾乳日糧，忽略產奶量輸入
            LactationStage::DryPeriod => tables::base_ration(animal_type, MilkBand::Dry),
            _ => tables::base_ration(animal_type, milk_band),
        }
    }

    /// 體型縮放與階段調整
    fn adjust(base: &Ration, body_size: BodySize, stage: LactationStage) -> Ration {
        let factor = tables::body_factor(body_size);

        // 依體型縮放，各項獨立四捨五入到小數兩位
        let dry = (base.dry * factor).round_dp(2);
        let mut green = (base.green * factor).round_dp(2);
        let mut conc = (base.conc * factor).round_dp(2);
        let oil = (base.oil * factor).round_dp(2);
        let bran = (base.bran * factor).round_dp(2);

        // 階段調整（輕微，作用在已縮放值上）
        match stage {
            LactationStage::EarlyLactation => {
                conc = (conc * Decimal::new(115, 2)).round_dp(2);
                green = (green * Decimal::new(105, 2)).round_dp(2);
            }
            LactationStage::LateLactation => {
                conc = (conc * Decimal::new(9, 1)).round_dp(2);
            }
            _ => {}
        }

        // 礦物質保持 NDDB 基礎值，只做體型縮放；階段永不影響礦物質
        let mineral = (base.mineral * factor).round_dp(0);

        Ration::new(dry, green, conc, oil, bran, mineral)
    }
}
