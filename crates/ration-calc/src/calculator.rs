//! 日糧主計算器

use ration_core::{AnimalProfile, FeedCategory, RationError, Ration};
use rust_decimal::Decimal;

use crate::{
    FeedSelection, HerdScaler, NutrientAggregator, RationPlan, RationResolver, RationWarning,
};

/// 日糧計算器
///
/// 端到端流程：輸入驗證 → 解析日糧 → 檢查飼料選擇 → 彙總營養 → 全群縮放。
/// 全程純計算，無共享可變狀態；要麼回傳完整結果，要麼回傳錯誤，沒有部分結果。
pub struct RationCalculator;

impl RationCalculator {
    /// 主計算入口
    pub fn calculate(
        profile: &AnimalProfile,
        selection: &FeedSelection,
    ) -> ration_core::Result<RationPlan> {
        tracing::info!(
            "開始日糧計算：{} / {} / {}，{} 隻",
            profile.animal_type.label(),
            profile.milk_band.label(),
            profile.stage.label(),
            profile.herd_count
        );

        let start_time = std::time::Instant::now();

        // Step 0: 輸入驗證
        profile.validate()?;

        // Step 1: 解析日糧
        tracing::debug!("Step 1: 解析日糧");
        let ration = RationResolver::resolve(
            profile.animal_type,
            profile.milk_band,
            profile.stage,
            profile.body_size,
        );

        // Step 2: 檢查飼料選擇與數量的一致性
        tracing::debug!("Step 2: 檢查飼料選擇");
        let warnings = Self::check_selection(selection, &ration)?;

        // Step 3: 彙總營養
        tracing::debug!("Step 3: 彙總營養");
        let nutrients = NutrientAggregator::aggregate(selection, &ration);

        // Step 4: 全群縮放
        tracing::debug!("Step 4: 全群縮放（{} 隻）", profile.herd_count);
        let herd = HerdScaler::totals(&ration, &nutrients, profile.herd_count);

        let elapsed = start_time.elapsed().as_millis();
        tracing::info!("日糧計算完成，耗時 {} ms", elapsed);

        Ok(RationPlan {
            ration,
            nutrients,
            herd,
            warnings,
            calculation_time_ms: Some(elapsed),
        })
    }

    /// 檢查每個類別的選擇與解析數量是否一致
    ///
    /// 數量為正但未選擇原料 → MissingSelection（配置錯誤，計算不繼續）；
    /// 數量為零卻提供了原料 → 資訊性警告（有效狀態，原料不列入計算）；
    /// 數量為零且無選擇 → 正常的 no-op 類別。
    fn check_selection(
        selection: &FeedSelection,
        ration: &Ration,
    ) -> ration_core::Result<Vec<RationWarning>> {
        let mut warnings = Vec::new();

        for category in FeedCategory::ALL {
            if !category.has_ingredients() {
                continue;
            }

            let qty = ration.quantity(category);
            match selection.get(category) {
                None if qty > Decimal::ZERO => {
                    return Err(RationError::MissingSelection(category.label().to_string()));
                }
                Some(record) if qty <= Decimal::ZERO => {
                    warnings.push(RationWarning::info(
                        category,
                        format!("數量為零，原料 {} 不列入計算", record.name),
                    ));
                }
                _ => {}
            }
        }

        Ok(warnings)
    }
}
