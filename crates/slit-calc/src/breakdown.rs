//! 單卷明細計算

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use slit_core::SpecConfig;

use crate::multi_up::AdjustedOrder;

const THOUSAND: Decimal = Decimal::ONE_THOUSAND;

/// 單卷明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoilBreakdown {
    /// 分切寬度（對開時為加倍後寬度）
    pub size: Decimal,

    /// 單捲重量
    pub unit_roll_weight: Decimal,

    /// 目標產量
    pub target_qty: Decimal,

    /// 所需捲數
    pub specific_rolls: u32,

    /// 卷總重
    pub total_coil_weight: Decimal,

    /// 單獨完成此訂單所需的大捲米數
    pub mtrs_required: Decimal,

    /// 是否為對開加倍的卷
    pub is_multi: bool,
}

/// 完成訂單產量所需的線性米數
///
/// `qty * 1000 / (size * micron * density / 2)`，分母為零或數值溢位時回傳 `None`。
pub fn meters_required(size: Decimal, qty: Decimal, micron: Decimal, half_density: Decimal) -> Option<Decimal> {
    let denominator = size.checked_mul(micron)?.checked_mul(half_density)?;
    qty.checked_mul(THOUSAND)?.checked_div(denominator)
}

/// 每個成品捲的重量
///
/// `size * micron * density / 2 * slit_length / 1000`
pub fn unit_roll_weight(size: Decimal, micron: Decimal, half_density: Decimal, slit_length: Decimal) -> Decimal {
    size * micron * half_density * slit_length / THOUSAND
}

impl CoilBreakdown {
    /// 計算單卷明細
    ///
    /// 呼叫端須保證寬度、微米、分切長度皆非零；否則回傳 `None`。
    pub fn compute(
        adjusted: &AdjustedOrder,
        micron: Decimal,
        slit_length: Decimal,
        config: &SpecConfig,
    ) -> Option<Self> {
        let order = &adjusted.order;
        let half_density = config.half_density();

        let unit_roll_weight = unit_roll_weight(order.size, micron, half_density, slit_length);
        let rolls = match order.effective_roll_override() {
            Some(rolls) => rolls,
            None => order.qty.checked_div(unit_roll_weight)?,
        };
        let mtrs_required = meters_required(order.size, order.qty, micron, half_density)?;

        Some(Self {
            size: order.size,
            unit_roll_weight,
            target_qty: order.qty,
            specific_rolls: ceil_to_count(rolls),
            total_coil_weight: order.qty,
            mtrs_required,
            is_multi: adjusted.is_multi,
        })
    }
}

/// 無條件進位為捲數（負值歸零，超出範圍取上限）
fn ceil_to_count(value: Decimal) -> u32 {
    use rust_decimal::prelude::ToPrimitive;

    let ceiled = value.ceil();
    if ceiled <= Decimal::ZERO {
        0
    } else {
        ceiled.to_u32().unwrap_or(u32::MAX)
    }
}
