//! 動物檔案模型

use serde::{Deserialize, Serialize};

use crate::{RationError, Result};

/// 動物類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimalType {
    /// 乳牛
    Cow,
    /// 水牛
    Buffalo,
}

impl AnimalType {
    pub fn label(&self) -> &'static str {
        match self {
            AnimalType::Cow => "Cow",
            AnimalType::Buffalo => "Buffalo",
        }
    }
}

/// 產奶量級距
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilkBand {
    /// 乾乳（0 公升）
    Dry,
    /// 每日 5 公升
    FiveLitres,
    /// 每日 10 公升
    TenLitres,
}

impl MilkBand {
    pub fn label(&self) -> &'static str {
        match self {
            MilkBand::Dry => "Dry (0 L milk)",
            MilkBand::FiveLitres => "5 L milk",
            MilkBand::TenLitres => "10 L milk",
        }
    }
}

/// 體型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodySize {
    Small,
    Medium,
    Large,
}

/// 泌乳階段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LactationStage {
    /// 泌乳初期
    EarlyLactation,
    /// 泌乳中期
    MidLactation,
    /// 泌乳後期
    LateLactation,
    /// 懷孕（7–9 個月）
    Pregnant,
    /// 乾乳期
    DryPeriod,
}

impl LactationStage {
    pub fn label(&self) -> &'static str {
        match self {
            LactationStage::EarlyLactation => "Early lactation",
            LactationStage::MidLactation => "Mid lactation",
            LactationStage::LateLactation => "Late lactation",
            LactationStage::Pregnant => "Pregnant (7-9 months)",
            LactationStage::DryPeriod => "Dry period",
        }
    }
}

/// 動物檔案（暫態輸入）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalProfile {
    /// 動物類型
    pub animal_type: AnimalType,

    /// 產奶量級距（僅在泌乳階段需要時使用）
    pub milk_band: MilkBand,

    /// 體型
    pub body_size: BodySize,

    /// 泌乳階段
    pub stage: LactationStage,

    /// 動物數量（1-500）
    pub herd_count: u32,
}

impl AnimalProfile {
    /// 動物數量下限
    pub const MIN_HERD_COUNT: u32 = 1;
    /// 動物數量上限
    pub const MAX_HERD_COUNT: u32 = 500;

    /// 創建新的動物檔案（預設 1 隻）
    pub fn new(
        animal_type: AnimalType,
        milk_band: MilkBand,
        body_size: BodySize,
        stage: LactationStage,
    ) -> Self {
        Self {
            animal_type,
            milk_band,
            body_size,
            stage,
            herd_count: 1,
        }
    }

    /// 建構器模式：設置動物數量
    pub fn with_herd_count(mut self, count: u32) -> Self {
        self.herd_count = count;
        self
    }

    /// 驗證輸入域
    ///
    /// 列舉欄位由類型系統保證封閉，只需檢查動物數量範圍。
    pub fn validate(&self) -> Result<()> {
        if self.herd_count < Self::MIN_HERD_COUNT || self.herd_count > Self::MAX_HERD_COUNT {
            return Err(RationError::HerdCountOutOfRange(self.herd_count));
        }
        Ok(())
    }
}
