//! 對開（multi-up）調整
//!
//! 在至少兩張訂單的合併中，把所需米數最少（最快用完）的那張訂單寬度加倍，
//! 以兩條同寬並排分切，善用大捲剩餘寬度。

use rust_decimal::Decimal;
use slit_core::Order;

use crate::breakdown::meters_required;

/// 調整後的訂單
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustedOrder {
    /// 訂單（對開時寬度已加倍，產量不變）
    pub order: Order,

    /// 是否為對開加倍的訂單
    pub is_multi: bool,
}

impl AdjustedOrder {
    /// 未調整的訂單
    pub fn plain(order: Order) -> Self {
        Self {
            order,
            is_multi: false,
        }
    }

    /// 對開加倍後的訂單
    pub fn doubled(order: &Order) -> Self {
        Self {
            order: Order {
                size: order.size * Decimal::TWO,
                ..order.clone()
            },
            is_multi: true,
        }
    }
}

/// 對開調整
///
/// 回傳新的訂單清單，不修改輸入。
/// - `multi_up` 為 false 或訂單少於兩張時原樣回傳
/// - 以所需米數最小者加倍；同值時取輸入順序中的第一張
/// - 米數無法計算（分母為零）的訂單不會被選中
pub fn adjust_for_multi_up(
    orders: &[Order],
    micron: Decimal,
    half_density: Decimal,
    multi_up: bool,
) -> Vec<AdjustedOrder> {
    let target = if multi_up && orders.len() >= 2 {
        shortest_run_index(orders, micron, half_density)
    } else {
        None
    };

    if let Some(idx) = target {
        tracing::debug!(
            "對開加倍: 第 {} 張訂單，寬度 {} -> {}",
            idx + 1,
            orders[idx].size,
            orders[idx].size * Decimal::TWO
        );
    }

    orders
        .iter()
        .enumerate()
        .map(|(i, order)| {
            if Some(i) == target {
                AdjustedOrder::doubled(order)
            } else {
                AdjustedOrder::plain(order.clone())
            }
        })
        .collect()
}

/// 所需米數最小的訂單索引（嚴格小於才替換，因此同值保留第一張）
fn shortest_run_index(orders: &[Order], micron: Decimal, half_density: Decimal) -> Option<usize> {
    let mut best: Option<(usize, Decimal)> = None;

    for (i, order) in orders.iter().enumerate() {
        let Some(meters) = meters_required(order.size, order.qty, micron, half_density) else {
            continue;
        };
        match best {
            Some((_, best_meters)) if meters >= best_meters => {}
            _ => best = Some((i, meters)),
        }
    }

    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slit_core::SpecConfig;

    fn order(size: i64, qty: i64) -> Order {
        Order::new(Decimal::from(size), Decimal::from(qty))
    }

    fn half() -> Decimal {
        SpecConfig::default().half_density()
    }

    #[test]
    fn test_disabled_returns_plain_copy() {
        let orders = vec![order(100, 500), order(150, 300)];
        let adjusted = adjust_for_multi_up(&orders, Decimal::from(35), half(), false);

        assert_eq!(adjusted.len(), 2);
        assert!(adjusted.iter().all(|a| !a.is_multi));
        assert_eq!(adjusted[0].order, orders[0]);
        assert_eq!(adjusted[1].order, orders[1]);
    }

    #[test]
    fn test_single_order_is_never_doubled() {
        let orders = vec![order(100, 500)];
        let adjusted = adjust_for_multi_up(&orders, Decimal::from(35), half(), true);

        assert_eq!(adjusted, vec![AdjustedOrder::plain(order(100, 500))]);
    }

    #[test]
    fn test_doubles_shortest_run() {
        // 米數: 500000/4.83 ≈ 103519.7；300000/7.245 ≈ 41407.9 -> 第二張
        let orders = vec![order(100, 500), order(150, 300)];
        let adjusted = adjust_for_multi_up(&orders, Decimal::from(35), half(), true);

        assert!(!adjusted[0].is_multi);
        assert!(adjusted[1].is_multi);
        assert_eq!(adjusted[1].order.size, Decimal::from(300));
        // 產量不加倍
        assert_eq!(adjusted[1].order.qty, Decimal::from(300));
        // 輸入未被修改
        assert_eq!(orders[1].size, Decimal::from(150));
    }

    #[test]
    fn test_selection_by_meters_not_size_or_qty() {
        // 第一張寬度最小、產量最小，但米數最多
        let orders = vec![order(50, 400), order(200, 600), order(300, 700)];
        let adjusted = adjust_for_multi_up(&orders, Decimal::from(35), half(), true);

        let doubled: Vec<_> = adjusted.iter().filter(|a| a.is_multi).collect();
        assert_eq!(doubled.len(), 1);
        assert_eq!(doubled[0].order.size, Decimal::from(600));
    }

    #[test]
    fn test_tie_picks_first_occurrence() {
        let orders = vec![order(120, 400), order(80, 900), order(120, 400)];
        let adjusted = adjust_for_multi_up(&orders, Decimal::from(35), half(), true);

        assert!(adjusted[0].is_multi);
        assert!(!adjusted[1].is_multi);
        assert!(!adjusted[2].is_multi);
    }

    #[test]
    fn test_undefined_meters_are_skipped() {
        let orders = vec![order(0, 10), order(100, 500), order(150, 750)];
        let adjusted = adjust_for_multi_up(&orders, Decimal::from(35), half(), true);

        assert!(!adjusted[0].is_multi);
        assert_eq!(adjusted.iter().filter(|a| a.is_multi).count(), 1);

        // 微米為零時全部無法計算，不加倍
        let adjusted = adjust_for_multi_up(&orders, Decimal::ZERO, half(), true);
        assert!(adjusted.iter().all(|a| !a.is_multi));
    }
}
