//! # Slitting Core
//!
//! 分切合併規格的核心資料模型與類型定義

pub mod config;
pub mod job;
pub mod order;
pub mod plan;

// Re-export 主要類型
pub use config::SpecConfig;
pub use job::{JobStatus, SlittingCoil, SlittingJob};
pub use order::{parse_size, Order};
pub use plan::{PlanStatus, PlantPlan};

use rust_decimal::Decimal;

/// 分切規格錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SlitError {
    #[error("未選擇任何生產計劃")]
    EmptySelection,

    #[error("微米不一致：預期 {expected}，實際 {found}")]
    MicronMismatch { expected: Decimal, found: Decimal },

    #[error("找不到生產計劃: {0}")]
    PlanNotFound(String),

    #[error("生產計劃不是待生產狀態: {0}")]
    PlanNotPending(String),

    #[error("無效的尺寸: {0}")]
    InvalidSize(String),

    #[error("輸入不足，無法產生分切規格")]
    InsufficientInput,

    /// 外部儲存實作（文件資料庫等）的寫入失敗
    #[error("儲存錯誤: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SlitError>;
