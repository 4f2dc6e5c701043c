//! NDDB 基礎日糧靜態表
//!
//! 基礎日糧取自 NDDB TMR 表；懷孕日糧為 NDDB 建議範圍的中點。
//! 全部為封閉列舉上的全函數，每次呼叫建構新值，無全域可變狀態，
//! 多執行緒併發讀取安全。

use rust_decimal::Decimal;

use crate::profile::{AnimalType, BodySize, MilkBand};
use crate::ration::Ration;

/// 查詢基礎日糧（NDDB TMR 表）
pub fn base_ration(animal: AnimalType, band: MilkBand) -> Ration {
    match (animal, band) {
        (AnimalType::Cow, MilkBand::Dry) => from_whole(7, 4, 2, 0, 0, 50),
        (AnimalType::Cow, MilkBand::FiveLitres) => from_whole(7, 4, 4, 0, 0, 100),
        (AnimalType::Cow, MilkBand::TenLitres) => from_whole(7, 4, 6, 0, 0, 150),
        (AnimalType::Buffalo, MilkBand::Dry) => from_whole(6, 2, 0, 2, 0, 75),
        (AnimalType::Buffalo, MilkBand::FiveLitres) => from_whole(7, 5, 5, 0, 0, 125),
        (AnimalType::Buffalo, MilkBand::TenLitres) => from_whole(7, 10, 6, 2, 0, 175),
    }
}

/// 懷孕動物固定日糧（與動物類型、產奶量無關）
pub fn pregnant_base() -> Ration {
    Ration::new(
        Decimal::new(45, 1),  // 乾草料 4.5 kg
        Decimal::new(175, 1), // 青綠飼料 17.5 kg
        Decimal::new(25, 1),  // 精料 2.5 kg
        Decimal::ONE,         // 油粕 1.0 kg
        Decimal::ZERO,        // 麩皮 0 kg
        Decimal::from(50),    // 礦物質 50 g
    )
}

/// 體型係數
pub fn body_factor(size: BodySize) -> Decimal {
    match size {
        BodySize::Small => Decimal::new(9, 1),    // 0.9
        BodySize::Medium => Decimal::ONE,         // 1.0
        BodySize::Large => Decimal::new(115, 2),  // 1.15
    }
}

fn from_whole(dry: i64, green: i64, conc: i64, oil: i64, bran: i64, mineral: i64) -> Ration {
    Ration::new(
        Decimal::from(dry),
        Decimal::from(green),
        Decimal::from(conc),
        Decimal::from(oil),
        Decimal::from(bran),
        Decimal::from(mineral),
    )
}
