//! 合併訂單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Result, SlitError};

/// 合併輸入訂單
///
/// 同一微米的多張訂單會合併到同一支大捲（jumbo）上生產。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// 分切寬度（mm）
    pub size: Decimal,

    /// 目標產量（重量）
    pub qty: Decimal,

    /// 外部指定的捲數（覆寫依重量推算的捲數）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_override: Option<Decimal>,
}

impl Order {
    /// 創建新的訂單
    pub fn new(size: Decimal, qty: Decimal) -> Self {
        Self {
            size,
            qty,
            roll_override: None,
        }
    }

    /// 建構器模式：設置指定捲數
    pub fn with_roll_override(mut self, rolls: Decimal) -> Self {
        self.roll_override = Some(rolls);
        self
    }

    /// 有效的指定捲數（零或負值視為未指定）
    pub fn effective_roll_override(&self) -> Option<Decimal> {
        self.roll_override.filter(|r| *r > Decimal::ZERO)
    }
}

/// 解析以字串儲存的尺寸（例如 "250"、"250mm"、" 120.5 "）
///
/// 取開頭的數字部分，與表單輸入的寬鬆解析一致。
pub fn parse_size(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    let numeric_len = trimmed
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .count();

    Decimal::from_str(&trimmed[..numeric_len]).map_err(|_| SlitError::InvalidSize(raw.to_string()))
}
