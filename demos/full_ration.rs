//! 完整日糧計算示例
//!
//! 載入參考表 → 配置動物檔案 → 計算日糧/營養/全群總量並輸出報表。

use ration::{
    AnimalProfile, AnimalType, BodySize, FeedCategory, FeedSelection, LactationStage, MilkBand,
    NutrientKey, RationCalculator,
};
use ration_table::FeedTable;

const TABLE_JSON: &str = r#"[
    {"Ingredient": "Paddy straw",    "Category": "Dry fodder",   "CP": 3.5,  "EE": 1.5, "CF": 35.0, "NFE": 45.0, "Ash": 15.0, "NDF": 70.0, "ADF": 45.0, "ME": 6.5},
    {"Ingredient": "Berseem",        "Category": "Green fodder", "CP": 17.0, "EE": 2.5, "CF": 28.0, "NFE": 40.0, "Ash": 12.5, "NDF": 50.0, "ADF": 35.0, "ME": 9.5},
    {"Ingredient": "Maize grain",    "Category": "Concentrate",  "CP": 9.8,  "EE": 4.5, "CF": 2.5,  "NFE": 80.0, "Ash": 1.5,  "NDF": 12.0, "ADF": 3.5,  "ME": 13.5},
    {"Ingredient": "Groundnut cake", "Category": "Oil cake",     "CP": 45.0, "EE": 8.0, "CF": 7.0,  "NFE": 30.0, "Ash": 6.0,  "NDF": 25.0, "ADF": 15.0, "ME": 11.5}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== 完整日糧計算示例 ===\n");

    // 載入參考表
    let table = FeedTable::from_json_str(TABLE_JSON)?;
    println!("參考表原料數: {}\n", table.len());

    // 動物配置：水牛、10 L、泌乳後期、大體型、12 隻
    let profile = AnimalProfile::new(
        AnimalType::Buffalo,
        MilkBand::TenLitres,
        BodySize::Large,
        LactationStage::LateLactation,
    )
    .with_herd_count(12);

    // 飼料選擇
    let selection = FeedSelection::new()
        .with_dry_fodder(table.get(FeedCategory::DryFodder, "Paddy straw")?.clone())
        .with_green_fodder(table.get(FeedCategory::GreenFodder, "Berseem")?.clone())
        .with_concentrate(table.get(FeedCategory::Concentrate, "Maize grain")?.clone())
        .with_oil_cake(table.get(FeedCategory::OilCake, "Groundnut cake")?.clone());

    let plan = RationCalculator::calculate(&profile, &selection)?;

    println!("每日飼料建議（單隻）:");
    println!("  - 乾草料:   {} kg", plan.ration.dry);
    println!("  - 青綠飼料: {} kg", plan.ration.green);
    println!("  - 精料:     {} kg", plan.ration.conc);
    println!("  - 油粕:     {} kg", plan.ration.oil);
    println!("  - 麩皮:     {} kg", plan.ration.bran);
    println!("  - 礦物質:   {} g", plan.ration.mineral);

    println!("\n營養分析（單隻每日）:");
    for key in NutrientKey::ALL {
        println!(
            "  - {}: {:.2} {}",
            key.label(),
            plan.nutrients.get(key),
            key.unit()
        );
    }

    println!("\n全群總需求（{} 隻）:", plan.herd.animal_count);
    println!("  - 乾草料:   {} kg/day", plan.herd.ration.dry);
    println!("  - 青綠飼料: {} kg/day", plan.herd.ration.green);
    println!("  - 精料:     {} kg/day", plan.herd.ration.conc);
    println!("  - 油粕:     {} kg/day", plan.herd.ration.oil);
    println!("  - 礦物質:   {} kg/day", plan.herd.mineral_kg());

    for warning in &plan.warnings {
        println!("\n警告 [{:?}]: {}", warning.severity, warning.message);
    }

    Ok(())
}
