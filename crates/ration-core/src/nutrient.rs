//! 營養成分模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{RationError, Result};

/// 營養成分鍵（8 項）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientKey {
    /// 粗蛋白
    Cp,
    /// 乙醚萃取物（脂肪）
    Ee,
    /// 粗纖維
    Cf,
    /// 無氮浸出物（碳水化合物）
    Nfe,
    /// 灰分（礦物質）
    Ash,
    /// 中性洗滌纖維
    Ndf,
    /// 酸性洗滌纖維
    Adf,
    /// 代謝能
    Me,
}

impl NutrientKey {
    /// 全部營養成分（固定順序）
    pub const ALL: [NutrientKey; 8] = [
        NutrientKey::Cp,
        NutrientKey::Ee,
        NutrientKey::Cf,
        NutrientKey::Nfe,
        NutrientKey::Ash,
        NutrientKey::Ndf,
        NutrientKey::Adf,
        NutrientKey::Me,
    ];

    /// 參考表欄位名稱
    pub fn column(&self) -> &'static str {
        match self {
            NutrientKey::Cp => "CP",
            NutrientKey::Ee => "EE",
            NutrientKey::Cf => "CF",
            NutrientKey::Nfe => "NFE",
            NutrientKey::Ash => "Ash",
            NutrientKey::Ndf => "NDF",
            NutrientKey::Adf => "ADF",
            NutrientKey::Me => "ME",
        }
    }

    /// 完整名稱（報表顯示用）
    pub fn label(&self) -> &'static str {
        match self {
            NutrientKey::Cp => "Crude Protein (Protein)",
            NutrientKey::Ee => "Ether Extract (Fat)",
            NutrientKey::Cf => "Crude Fibre (Fibre)",
            NutrientKey::Nfe => "Nitrogen Free Extract (Carbohydrates)",
            NutrientKey::Ash => "Ash (Minerals)",
            NutrientKey::Ndf => "Neutral Detergent Fibre (Digestible Fibre)",
            NutrientKey::Adf => "Acid Detergent Fibre (Indigestible Fibre)",
            NutrientKey::Me => "Metabolizable Energy (Energy)",
        }
    }

    /// 每日總量的單位
    pub fn unit(&self) -> &'static str {
        match self {
            NutrientKey::Me => "MJ/day",
            _ => "kg/day",
        }
    }

    /// 檢查是否為能量成分（ME 以 MJ/kg 計，其餘為乾物質百分比）
    pub fn is_energy(&self) -> bool {
        *self == NutrientKey::Me
    }
}

/// 單一原料的營養組成
///
/// CP–ADF 為乾物質百分比（0–100），ME 為每公斤代謝能（MJ/kg）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// 粗蛋白（%）
    pub cp: Decimal,
    /// 乙醚萃取物（%）
    pub ee: Decimal,
    /// 粗纖維（%）
    pub cf: Decimal,
    /// 無氮浸出物（%）
    pub nfe: Decimal,
    /// 灰分（%）
    pub ash: Decimal,
    /// 中性洗滌纖維（%）
    pub ndf: Decimal,
    /// 酸性洗滌纖維（%）
    pub adf: Decimal,
    /// 代謝能（MJ/kg）
    pub me: Decimal,
}

impl NutrientProfile {
    /// 創建新的營養組成
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cp: Decimal,
        ee: Decimal,
        cf: Decimal,
        nfe: Decimal,
        ash: Decimal,
        ndf: Decimal,
        adf: Decimal,
        me: Decimal,
    ) -> Self {
        Self {
            cp,
            ee,
            cf,
            nfe,
            ash,
            ndf,
            adf,
            me,
        }
    }

    /// 取得指定成分的數值
    pub fn get(&self, key: NutrientKey) -> Decimal {
        match key {
            NutrientKey::Cp => self.cp,
            NutrientKey::Ee => self.ee,
            NutrientKey::Cf => self.cf,
            NutrientKey::Nfe => self.nfe,
            NutrientKey::Ash => self.ash,
            NutrientKey::Ndf => self.ndf,
            NutrientKey::Adf => self.adf,
            NutrientKey::Me => self.me,
        }
    }

    /// 驗證成分值
    ///
    /// 所有成分不可為負；百分比成分不可超過 100。
    /// `context` 為錯誤信息中的原料名稱。
    pub fn validate(&self, context: &str) -> Result<()> {
        for key in NutrientKey::ALL {
            let value = self.get(key);
            if value < Decimal::ZERO {
                return Err(RationError::InvalidNutrientValue(format!(
                    "{} 的 {} 為負值: {}",
                    context,
                    key.column(),
                    value
                )));
            }
            if !key.is_energy() && value > Decimal::ONE_HUNDRED {
                return Err(RationError::InvalidNutrientValue(format!(
                    "{} 的 {} 超過 100%: {}",
                    context,
                    key.column(),
                    value
                )));
            }
        }
        Ok(())
    }
}

/// 每日營養攝取總量
///
/// CP–ADF 以 kg/day 計，ME 以 MJ/day 計。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub cp: Decimal,
    pub ee: Decimal,
    pub cf: Decimal,
    pub nfe: Decimal,
    pub ash: Decimal,
    pub ndf: Decimal,
    pub adf: Decimal,
    pub me: Decimal,
}

impl NutrientTotals {
    /// 創建零總量（加總的單位元素）
    pub fn zero() -> Self {
        Self {
            cp: Decimal::ZERO,
            ee: Decimal::ZERO,
            cf: Decimal::ZERO,
            nfe: Decimal::ZERO,
            ash: Decimal::ZERO,
            ndf: Decimal::ZERO,
            adf: Decimal::ZERO,
            me: Decimal::ZERO,
        }
    }

    /// 取得指定成分的每日總量
    pub fn get(&self, key: NutrientKey) -> Decimal {
        match key {
            NutrientKey::Cp => self.cp,
            NutrientKey::Ee => self.ee,
            NutrientKey::Cf => self.cf,
            NutrientKey::Nfe => self.nfe,
            NutrientKey::Ash => self.ash,
            NutrientKey::Ndf => self.ndf,
            NutrientKey::Adf => self.adf,
            NutrientKey::Me => self.me,
        }
    }

    /// 逐項相加
    pub fn add(&self, other: &NutrientTotals) -> NutrientTotals {
        NutrientTotals {
            cp: self.cp + other.cp,
            ee: self.ee + other.ee,
            cf: self.cf + other.cf,
            nfe: self.nfe + other.nfe,
            ash: self.ash + other.ash,
            ndf: self.ndf + other.ndf,
            adf: self.adf + other.adf,
            me: self.me + other.me,
        }
    }

    /// 逐項乘以係數
    pub fn scale(&self, factor: Decimal) -> NutrientTotals {
        NutrientTotals {
            cp: self.cp * factor,
            ee: self.ee * factor,
            cf: self.cf * factor,
            nfe: self.nfe * factor,
            ash: self.ash * factor,
            ndf: self.ndf * factor,
            adf: self.adf * factor,
            me: self.me * factor,
        }
    }
}
