//! 分切規格主計算器

use rust_decimal::Decimal;
use slit_core::{Order, SpecConfig};

use crate::breakdown::CoilBreakdown;
use crate::multi_up::adjust_for_multi_up;
use crate::Specification;

/// 分切規格計算器
///
/// 無狀態、無副作用；相同輸入永遠得到相同輸出，可在多執行緒間共用。
#[derive(Debug, Clone, Default)]
pub struct SpecCalculator {
    /// 計算參數
    config: SpecConfig,
}

impl SpecCalculator {
    /// 創建新的規格計算器
    pub fn new(config: SpecConfig) -> Self {
        Self { config }
    }

    /// 主計算入口
    ///
    /// # 參數
    /// * `orders` - 同一微米的待合併訂單（微米一致性由呼叫端檢查）
    /// * `micron` - 共用微米
    /// * `sizer` - 大捲寬度
    /// * `slit_length` - 分切長度（捲長）
    /// * `multi_up` - 是否套用對開加倍（少於兩張訂單時忽略）
    ///
    /// # 回傳
    /// 合併寬度、大捲寬度、微米、合併產量任一為零時回傳 `None`，
    /// 代表「輸入不足，尚無法預覽」，不是錯誤。
    pub fn calculate(
        &self,
        orders: &[Order],
        micron: Decimal,
        sizer: Decimal,
        slit_length: Decimal,
        multi_up: bool,
    ) -> Option<Specification> {
        let density = self.config.density;
        let half_density = self.config.half_density();

        // Step 1: 對開調整
        let adjusted = adjust_for_multi_up(orders, micron, half_density, multi_up);
        let multi_applied = adjusted.iter().any(|a| a.is_multi);

        // Step 2: 合併寬度用調整後的清單，合併產量用原始訂單
        let combined_slit_size: Decimal = adjusted.iter().map(|a| a.order.size).sum();
        let total_combined_qty: Decimal = orders.iter().map(|o| o.qty).sum();

        // Step 3: 零值防護
        if combined_slit_size.is_zero()
            || sizer.is_zero()
            || micron.is_zero()
            || total_combined_qty.is_zero()
        {
            tracing::debug!(
                "輸入不足: 合併寬度 {}, 大捲寬度 {}, 微米 {}, 合併產量 {}",
                combined_slit_size,
                sizer,
                micron,
                total_combined_qty
            );
            return None;
        }
        if slit_length.is_zero() || adjusted.iter().any(|a| a.order.size.is_zero()) {
            tracing::debug!("分切長度或單卷寬度為零，無法計算捲重");
            return None;
        }

        // Step 4-6: 大捲
        let tube_1mtr_weight = sizer * micron * density;
        let tube_roll_len = slit_length / Decimal::TWO;
        let jumbo_weight = tube_1mtr_weight / Decimal::ONE_THOUSAND * tube_roll_len;

        // Step 7: 各卷明細
        let coils_breakdown = adjusted
            .iter()
            .map(|a| CoilBreakdown::compute(a, micron, slit_length, &self.config))
            .collect::<Option<Vec<_>>>()?;

        // Step 8: 米數差距與分批判定
        let max_mtrs = coils_breakdown
            .iter()
            .map(|c| c.mtrs_required)
            .max()
            .unwrap_or(Decimal::ZERO);
        let min_mtrs = coils_breakdown
            .iter()
            .map(|c| c.mtrs_required)
            .min()
            .unwrap_or(Decimal::ZERO);
        let needs_split_run = max_mtrs - min_mtrs > self.config.split_run_threshold;

        // Step 9-10
        let production_qty = total_combined_qty / combined_slit_size * sizer;
        let max_rolls = coils_breakdown
            .iter()
            .map(|c| c.specific_rolls)
            .max()
            .unwrap_or(0);

        if needs_split_run {
            tracing::debug!(
                "米數差距 {} 超過門檻 {}，建議分批生產",
                max_mtrs - min_mtrs,
                self.config.split_run_threshold
            );
        }

        Some(Specification {
            combined_slit_size,
            sizer,
            micron,
            slit_length,
            tube_1mtr_weight,
            tube_roll_len,
            jumbo_weight,
            max_rolls,
            total_combined_qty,
            coils_breakdown,
            production_qty,
            max_mtrs,
            min_mtrs,
            needs_split_run,
            multi_up: multi_applied,
        })
    }

    /// 合併寬度（不計算完整規格）
    pub fn combined_slit_size(&self, orders: &[Order], micron: Decimal, multi_up: bool) -> Decimal {
        adjust_for_multi_up(orders, micron, self.config.half_density(), multi_up)
            .iter()
            .map(|a| a.order.size)
            .sum()
    }

    /// 獲取配置引用
    pub fn config(&self) -> &SpecConfig {
        &self.config
    }
}
