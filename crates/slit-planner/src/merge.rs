//! 合併預覽與主工單產生

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use slit_calc::{SpecCalculator, Specification};
use slit_core::{JobStatus, Order, PlantPlan, Result, SlitError, SlittingCoil, SlittingJob};
use uuid::Uuid;

use crate::store::ProductionStore;

/// 合併作業
///
/// 操作員勾選多張同微米的待生產計劃後開啟，可調整大捲寬度、捲長與對開，
/// 預覽分切規格，確認後產生一張分切主工單。
#[derive(Debug, Clone)]
pub struct MergeSession<'a> {
    calculator: &'a SpecCalculator,

    /// 被合併的計劃（依計劃清單順序）
    plans: Vec<PlantPlan>,

    /// 由計劃轉換的訂單
    orders: Vec<Order>,

    /// 共用微米
    micron: Decimal,

    /// 操作員輸入的大捲寬度（None 或 0 時使用預設值）
    sizer: Option<Decimal>,

    /// 捲長
    roll_length: Decimal,

    /// 是否對開
    multi_up: bool,
}

impl<'a> MergeSession<'a> {
    /// 開啟合併作業
    ///
    /// # 錯誤
    /// * `EmptySelection` - 沒有勾選任何計劃
    /// * `PlanNotFound` - 勾選的ID不在計劃清單中
    /// * `PlanNotPending` - 勾選的計劃已完成
    /// * `MicronMismatch` - 計劃的微米不一致
    /// * `InvalidSize` - 計劃尺寸無法解析
    pub fn open<S: AsRef<str>>(
        plans: &[PlantPlan],
        selected_ids: &[S],
        calculator: &'a SpecCalculator,
    ) -> Result<Self> {
        if selected_ids.is_empty() {
            tracing::warn!("合併被拒絕：未選擇任何計劃");
            return Err(SlitError::EmptySelection);
        }

        if let Some(missing) = selected_ids
            .iter()
            .map(|id| -> &str { id.as_ref() })
            .find(|id| !plans.iter().any(|p| p.id == *id))
        {
            tracing::warn!("合併被拒絕：找不到計劃 {}", missing);
            return Err(SlitError::PlanNotFound(missing.to_string()));
        }

        let items: Vec<PlantPlan> = plans
            .iter()
            .filter(|p| selected_ids.iter().any(|id| id.as_ref() == p.id))
            .cloned()
            .collect();

        if let Some(done) = items.iter().find(|p| !p.is_pending()) {
            tracing::warn!("合併被拒絕：計劃 {} 已完成", done.id);
            return Err(SlitError::PlanNotPending(done.id.clone()));
        }

        let micron = items[0].micron;
        if let Some(other) = items.iter().find(|p| p.micron != micron) {
            tracing::warn!("合併被拒絕：微米不一致 {} / {}", micron, other.micron);
            return Err(SlitError::MicronMismatch {
                expected: micron,
                found: other.micron,
            });
        }

        let orders = items.iter().map(PlantPlan::order).collect::<Result<Vec<_>>>()?;
        let initial_sizer: Decimal = orders.iter().map(|o| o.size).sum();

        tracing::debug!("開啟合併作業：{} 張計劃，微米 {}", items.len(), micron);

        Ok(Self {
            calculator,
            plans: items,
            orders,
            micron,
            sizer: Some(initial_sizer),
            roll_length: calculator.config().default_roll_length,
            multi_up: false,
        })
    }

    /// 設置大捲寬度（None 表示清空，改用預設值）
    pub fn set_sizer(&mut self, sizer: Option<Decimal>) {
        self.sizer = sizer;
    }

    /// 設置捲長
    pub fn set_roll_length(&mut self, roll_length: Decimal) {
        self.roll_length = roll_length;
    }

    /// 設置是否對開
    pub fn set_multi_up(&mut self, multi_up: bool) {
        self.multi_up = multi_up;
    }

    /// 預設大捲寬度
    ///
    /// 未對開時為各訂單寬度合計；對開時為加倍後的合併寬度。
    pub fn default_sizer(&self) -> Decimal {
        if self.multi_up {
            self.calculator
                .calculate(
                    &self.orders,
                    self.micron,
                    Decimal::ONE,
                    self.calculator.config().default_roll_length,
                    true,
                )
                .map(|spec| spec.combined_slit_size)
                .unwrap_or(Decimal::ZERO)
        } else {
            self.orders.iter().map(|o| o.size).sum()
        }
    }

    /// 實際使用的大捲寬度
    pub fn effective_sizer(&self) -> Decimal {
        self.sizer
            .filter(|s| !s.is_zero())
            .unwrap_or_else(|| self.default_sizer())
    }

    /// 預覽分切規格
    pub fn preview(&self) -> Option<Specification> {
        self.calculator.calculate(
            &self.orders,
            self.micron,
            self.effective_sizer(),
            self.roll_length,
            self.multi_up,
        )
    }

    pub fn plans(&self) -> &[PlantPlan] {
        &self.plans
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn micron(&self) -> Decimal {
        self.micron
    }

    pub fn roll_length(&self) -> Decimal {
        self.roll_length
    }

    pub fn multi_up(&self) -> bool {
        self.multi_up
    }

    /// 客戶代碼組合（去重，依計劃順序，以 " / " 連接）
    pub fn job_code(&self) -> String {
        let mut codes: Vec<&str> = Vec::new();
        for plan in &self.plans {
            if !codes.contains(&plan.party_code.as_str()) {
                codes.push(&plan.party_code);
            }
        }
        codes.join(" / ")
    }

    /// 確認合併（以目前時間）
    pub fn confirm<S: ProductionStore>(&self, store: &mut S) -> Result<SlittingJob> {
        self.confirm_at(store, Utc::now())
    }

    /// 確認合併：產生主工單、保存，並把被合併的計劃標記為完成
    ///
    /// 儲存中缺少任何一張被合併的計劃時，不寫入任何資料。
    pub fn confirm_at<S: ProductionStore>(&self, store: &mut S, now: DateTime<Utc>) -> Result<SlittingJob> {
        let spec = self.preview().ok_or(SlitError::InsufficientInput)?;

        if let Some(missing) = self.plans.iter().find(|p| !store.has_plan(&p.id)) {
            tracing::warn!("確認被拒絕：儲存中找不到計劃 {}", missing.id);
            return Err(SlitError::PlanNotFound(missing.id.clone()));
        }

        let job = self.build_job(&spec, now);

        store.save_slitting_job(&job)?;
        for plan in &self.plans {
            store.mark_plan_completed(&plan.id)?;
        }

        tracing::info!(
            "主工單 #{} 已建立：{} 卷，合併寬度 {}，大捲寬度 {}",
            job.job_no,
            job.coils.len(),
            spec.combined_slit_size,
            job.plan_sizer
        );

        Ok(job)
    }

    fn build_job(&self, spec: &Specification, now: DateTime<Utc>) -> SlittingJob {
        let coils = spec
            .coils_breakdown
            .iter()
            .enumerate()
            .map(|(idx, c)| {
                SlittingCoil::new(idx as u32 + 1, c.size.normalize().to_string(), c.specific_rolls)
                    .with_target_qty(c.target_qty)
            })
            .collect();

        SlittingJob {
            id: format!("mj-{}", Uuid::new_v4().simple()),
            date: now.date_naive(),
            job_no: job_number(now),
            job_code: self.job_code(),
            coils,
            plan_micron: self.micron,
            plan_qty: spec.total_combined_qty,
            plan_roll_length: self.roll_length,
            plan_sizer: spec.sizer,
            rows: Vec::new(),
            status: JobStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 工單號：MJ- 加上毫秒時間戳的末四碼
fn job_number(now: DateTime<Utc>) -> String {
    format!("MJ-{:04}", now.timestamp_millis().rem_euclid(10_000))
}
