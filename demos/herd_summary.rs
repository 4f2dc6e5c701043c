//! 簡單全群縮放示例

use ration::{
    AnimalType, BodySize, HerdScaler, LactationStage, MilkBand, NutrientTotals, RationResolver,
};

fn main() {
    println!("=== 簡單全群縮放示例 ===\n");

    // 解析單隻日糧：乳牛、5 L、泌乳初期、中等體型
    let ration = RationResolver::resolve(
        AnimalType::Cow,
        MilkBand::FiveLitres,
        LactationStage::EarlyLactation,
        BodySize::Medium,
    );

    println!("單隻日糧:");
    println!(
        "  乾草料 {} kg, 青綠飼料 {} kg, 精料 {} kg, 礦物質 {} g",
        ration.dry, ration.green, ration.conc, ration.mineral
    );

    // 縮放到 50 隻
    let herd = HerdScaler::totals(&ration, &NutrientTotals::zero(), 50);

    println!("\n全群（{} 隻）:", herd.animal_count);
    println!(
        "  乾草料 {} kg, 青綠飼料 {} kg, 精料 {} kg, 礦物質 {} kg",
        herd.ration.dry,
        herd.ration.green,
        herd.ration.conc,
        herd.mineral_kg()
    );
}
