//! 廠內生產計劃模型

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::order::{parse_size, Order};
use crate::Result;

/// 計劃狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    /// 待生產
    Pending,
    /// 已合併/已完成
    Completed,
}

/// 廠內生產計劃（待合併分切的訂單來源）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantPlan {
    /// 計劃ID
    pub id: String,

    /// 計劃日期
    pub date: NaiveDate,

    /// 客戶代碼
    pub party_code: String,

    /// 尺寸（以字串儲存，例如 "250"）
    pub size: String,

    /// 微米（厚度）
    pub micron: Decimal,

    /// 目標產量
    pub qty: Decimal,

    /// 狀態
    pub status: PlanStatus,

    /// 建立時間
    pub created_at: DateTime<Utc>,
}

impl PlantPlan {
    /// 創建新的待生產計劃
    pub fn new(
        party_code: String,
        size: String,
        micron: Decimal,
        qty: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            party_code,
            size,
            micron,
            qty,
            status: PlanStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// 建構器模式：設置計劃ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: PlanStatus) -> Self {
        self.status = status;
        self
    }

    /// 檢查是否待生產
    pub fn is_pending(&self) -> bool {
        self.status == PlanStatus::Pending
    }

    /// 解析後的分切寬度
    pub fn size_value(&self) -> Result<Decimal> {
        parse_size(&self.size)
    }

    /// 轉換為合併輸入訂單
    pub fn order(&self) -> Result<Order> {
        Ok(Order::new(self.size_value()?, self.qty))
    }
}
