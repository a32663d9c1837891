//! 生產計劃佇列

use slit_core::PlantPlan;
use std::cmp::Ordering;

/// 生產計劃佇列查詢
pub struct PlantQueue;

impl PlantQueue {
    /// 依關鍵字篩選並排序
    ///
    /// - 關鍵字不分大小寫，比對客戶代碼或尺寸
    /// - 待生產排在前面，其次依日期由新到舊
    pub fn filter<'a>(plans: &'a [PlantPlan], search: &str) -> Vec<&'a PlantPlan> {
        let needle = search.to_lowercase();
        let mut matched: Vec<&PlantPlan> = plans
            .iter()
            .filter(|p| {
                p.party_code.to_lowercase().contains(&needle) || p.size.to_lowercase().contains(&needle)
            })
            .collect();

        matched.sort_by(|a, b| Self::queue_order(a, b));
        matched
    }

    /// 只取待生產的計劃（排序同 `filter`）
    pub fn pending(plans: &[PlantPlan]) -> Vec<&PlantPlan> {
        let mut pending: Vec<&PlantPlan> = plans.iter().filter(|p| p.is_pending()).collect();
        pending.sort_by(|a, b| Self::queue_order(a, b));
        pending
    }

    fn queue_order(a: &PlantPlan, b: &PlantPlan) -> Ordering {
        match (a.is_pending(), b.is_pending()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => b.date.cmp(&a.date),
        }
    }
}

/// 操作員勾選的計劃ID（保留勾選順序）
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切換勾選狀態
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|x| x == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use slit_core::PlanStatus;

    fn plan(id: &str, party: &str, size: &str, day: u32, status: PlanStatus) -> PlantPlan {
        PlantPlan::new(
            party.to_string(),
            size.to_string(),
            Decimal::from(35),
            Decimal::from(100),
            NaiveDate::from_ymd_opt(2025, 11, day).unwrap(),
        )
        .with_id(id)
        .with_status(status)
    }

    fn sample_plans() -> Vec<PlantPlan> {
        vec![
            plan("a", "REL/001", "250", 1, PlanStatus::Completed),
            plan("b", "REL/002", "120", 2, PlanStatus::Pending),
            plan("c", "REL/001", "300", 5, PlanStatus::Pending),
            plan("d", "ABC/009", "125", 9, PlanStatus::Completed),
        ]
    }

    #[test]
    fn test_filter_orders_pending_first_then_newest() {
        let plans = sample_plans();
        let ids: Vec<_> = PlantQueue::filter(&plans, "").iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn test_filter_by_party_or_size() {
        let plans = sample_plans();

        let by_party: Vec<_> = PlantQueue::filter(&plans, "rel/001").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(by_party, vec!["c", "a"]);

        let by_size: Vec<_> = PlantQueue::filter(&plans, "12").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(by_size, vec!["b", "d"]);
    }

    #[test]
    fn test_pending_only() {
        let plans = sample_plans();
        let ids: Vec<_> = PlantQueue::pending(&plans).iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn test_selection_toggle() {
        let mut selection = Selection::new();
        selection.toggle("a");
        selection.toggle("b");
        assert_eq!(selection.ids(), &["a".to_string(), "b".to_string()]);

        selection.toggle("a");
        assert!(!selection.contains("a"));
        assert!(selection.contains("b"));

        selection.clear();
        assert!(selection.is_empty());
    }
}
