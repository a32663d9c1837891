//! # Slitting Specification Engine
//!
//! 合併分切規格計算引擎

pub mod breakdown;
pub mod calculator;
pub mod multi_up;

// Re-export 主要類型
pub use breakdown::CoilBreakdown;
pub use calculator::SpecCalculator;
pub use multi_up::{adjust_for_multi_up, AdjustedOrder};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 分切規格計算結果
///
/// 純衍生值：只在預覽/顯示期間存在，確認後僅卷清單與少數數值會被保存。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    /// 合併分切寬度（含對開加倍）
    pub combined_slit_size: Decimal,

    /// 大捲寬度
    pub sizer: Decimal,

    /// 微米
    pub micron: Decimal,

    /// 分切長度（捲長）
    pub slit_length: Decimal,

    /// 管膜每米重量
    pub tube_1mtr_weight: Decimal,

    /// 管膜捲長（分切長度的一半）
    pub tube_roll_len: Decimal,

    /// 大捲重量
    pub jumbo_weight: Decimal,

    /// 各卷捲數最大值
    pub max_rolls: u32,

    /// 合併總產量（以原始訂單加總）
    pub total_combined_qty: Decimal,

    /// 各卷明細
    pub coils_breakdown: Vec<CoilBreakdown>,

    /// 以大捲寬度換算的預計產量
    pub production_qty: Decimal,

    /// 所需米數最大值
    pub max_mtrs: Decimal,

    /// 所需米數最小值
    pub min_mtrs: Decimal,

    /// 是否需要分批生產
    pub needs_split_run: bool,

    /// 是否實際套用了對開加倍
    pub multi_up: bool,
}

impl Specification {
    /// 被對開加倍的卷（最多一個）
    pub fn multi_coil(&self) -> Option<&CoilBreakdown> {
        self.coils_breakdown.iter().find(|c| c.is_multi)
    }

    /// 米數差距
    pub fn mtrs_spread(&self) -> Decimal {
        self.max_mtrs - self.min_mtrs
    }
}
