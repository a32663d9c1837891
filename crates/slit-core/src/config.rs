//! 分切規格配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 規格計算參數配置
///
/// 原本寫死在計算式中的常數（材料密度、分批門檻、預設捲長）
/// 都改為顯式參數，更換材料或調整門檻時不需要改程式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecConfig {
    /// 薄膜面密度常數（每單位寬度、每單位長度、每微米的重量）
    pub density: Decimal,

    /// 分批生產門檻（公尺）
    /// - 各訂單所需米數的最大差距 **大於** 此值時，判定需要分批生產
    /// - 等於此值不算
    pub split_run_threshold: Decimal,

    /// 新合併作業的預設捲長（分切長度）
    pub default_roll_length: Decimal,
}

impl SpecConfig {
    /// 預設材料密度 0.00276
    pub const DEFAULT_DENSITY: Decimal = Decimal::from_parts(276, 0, 0, false, 5);

    /// 預設分批門檻 50 公尺
    pub const DEFAULT_SPLIT_RUN_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

    /// 預設捲長 2000
    pub const DEFAULT_ROLL_LENGTH: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

    /// 創建新的規格配置
    pub fn new(density: Decimal) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    /// 建構器模式：設置材料密度
    pub fn with_density(mut self, density: Decimal) -> Self {
        self.density = density;
        self
    }

    /// 建構器模式：設置分批門檻
    pub fn with_split_run_threshold(mut self, threshold: Decimal) -> Self {
        self.split_run_threshold = threshold;
        self
    }

    /// 建構器模式：設置預設捲長
    pub fn with_default_roll_length(mut self, length: Decimal) -> Self {
        self.default_roll_length = length;
        self
    }

    /// 半密度（管狀摺疊後單層的密度項）
    pub fn half_density(&self) -> Decimal {
        self.density / Decimal::TWO
    }
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self {
            density: Self::DEFAULT_DENSITY,
            split_run_threshold: Self::DEFAULT_SPLIT_RUN_THRESHOLD,
            default_roll_length: Self::DEFAULT_ROLL_LENGTH,
        }
    }
}
