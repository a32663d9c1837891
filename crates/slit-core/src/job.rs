//! 分切工單模型（合併後產生的主工單）

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::order::{parse_size, Order};
use crate::Result;

/// 工單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// 待分切
    Pending,
    /// 分切中
    InProgress,
    /// 已完成
    Completed,
}

/// 分切卷（一個成品寬度對應一張客戶訂單）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlittingCoil {
    /// 卷ID
    pub id: String,

    /// 序號（從 1 開始）
    pub number: u32,

    /// 分切寬度
    pub size: String,

    /// 捲數
    pub rolls: u32,

    /// 目標產量
    #[serde(default)]
    pub target_qty: Option<Decimal>,

    /// 已生產包數
    #[serde(default)]
    pub produced_bundles: u32,
}

impl SlittingCoil {
    /// 創建新的分切卷
    pub fn new(number: u32, size: String, rolls: u32) -> Self {
        Self {
            id: format!("c-{}", Uuid::new_v4().simple()),
            number,
            size,
            rolls,
            target_qty: None,
            produced_bundles: 0,
        }
    }

    /// 建構器模式：設置目標產量
    pub fn with_target_qty(mut self, qty: Decimal) -> Self {
        self.target_qty = Some(qty);
        self
    }

    /// 還原為規格計算用的訂單（缺少目標產量時視為 0）
    pub fn order(&self) -> Result<Order> {
        Ok(Order::new(
            parse_size(&self.size)?,
            self.target_qty.unwrap_or(Decimal::ZERO),
        ))
    }
}

/// 分切主工單
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlittingJob {
    /// 工單ID
    pub id: String,

    /// 工單日期
    pub date: NaiveDate,

    /// 工單號（例如 MJ-4821）
    pub job_no: String,

    /// 客戶代碼組合（以 " / " 連接）
    pub job_code: String,

    /// 分切卷清單
    pub coils: Vec<SlittingCoil>,

    /// 計劃微米
    pub plan_micron: Decimal,

    /// 計劃總產量
    pub plan_qty: Decimal,

    /// 計劃捲長
    pub plan_roll_length: Decimal,

    /// 計劃大捲寬度（sizer），0 表示未指定
    #[serde(default)]
    pub plan_sizer: Decimal,

    /// 分切生產紀錄（原樣保留，本模組不解讀）
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,

    /// 狀態
    pub status: JobStatus,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 更新時間
    pub updated_at: DateTime<Utc>,
}

impl SlittingJob {
    /// 工單號的流水號部分（"MJ-4821" -> "4821"）
    pub fn serial_no(&self) -> &str {
        self.job_no.rsplit('-').next().unwrap_or(&self.job_no)
    }

    /// 卷寬度合計
    pub fn combined_coil_size(&self) -> Result<Decimal> {
        self.coils
            .iter()
            .map(|c| parse_size(&c.size))
            .sum::<Result<Decimal>>()
    }

    /// 所有卷的捲數合計（超出範圍取上限）
    pub fn total_rolls(&self) -> u32 {
        self.coils.iter().fold(0u32, |acc, c| acc.saturating_add(c.rolls))
    }

    /// 檢查是否待分切
    pub fn is_pending(&self) -> bool {
        self.status == JobStatus::Pending
    }
}
