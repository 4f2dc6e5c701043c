//! # Ration Calculation Engine
//!
//! 核心日糧計算引擎

pub mod aggregator;
pub mod calculator;
pub mod herd;
pub mod resolver;

// Re-export 主要類型
pub use aggregator::{FeedSelection, NutrientAggregator};
pub use calculator::RationCalculator;
pub use herd::{HerdScaler, HerdTotals};
pub use resolver::RationResolver;

use ration_core::FeedCategory;

/// 日糧計算結果
#[derive(Debug, Clone)]
pub struct RationPlan {
    /// 單隻動物每日日糧
    pub ration: ration_core::Ration,

    /// 單隻動物每日營養總量
    pub nutrients: ration_core::NutrientTotals,

    /// 全群總量
    pub herd: HerdTotals,

    /// 警告信息
    pub warnings: Vec<RationWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

/// 計算警告
#[derive(Debug, Clone)]
pub struct RationWarning {
    pub category: FeedCategory,
    pub message: String,
    pub severity: WarningSeverity,
}

impl RationWarning {
    pub fn new(category: FeedCategory, message: String, severity: WarningSeverity) -> Self {
        Self {
            category,
            message,
            severity,
        }
    }

    pub fn info(category: FeedCategory, message: String) -> Self {
        Self::new(category, message, WarningSeverity::Info)
    }

    pub fn warning(category: FeedCategory, message: String) -> Self {
        Self::new(category, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}
