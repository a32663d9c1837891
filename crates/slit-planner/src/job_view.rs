//! 工單檢視：依已保存的卷清單重新計算分切規格

use rust_decimal::Decimal;
use slit_calc::{SpecCalculator, Specification};
use slit_core::{Order, Result, SlittingCoil, SlittingJob};

/// 工單檢視
#[derive(Debug, Clone)]
pub struct JobView {
    /// 工單
    pub job: SlittingJob,

    /// 重新計算的規格（輸入不足時為 None）
    pub specs: Option<Specification>,
}

impl JobView {
    /// 開啟工單檢視
    ///
    /// 對開只在合併當下套用，卷清單中已是加倍後的寬度，所以此處固定不對開。
    /// 大捲寬度取工單保存值；未保存時以各卷寬度合計代替。
    pub fn open(job: &SlittingJob, calculator: &SpecCalculator) -> Result<Self> {
        let orders = job
            .coils
            .iter()
            .map(SlittingCoil::order)
            .collect::<Result<Vec<Order>>>()?;

        let combined: Decimal = orders.iter().map(|o| o.size).sum();
        let sizer = if job.plan_sizer.is_zero() {
            combined
        } else {
            job.plan_sizer
        };

        let specs = calculator.calculate(&orders, job.plan_micron, sizer, job.plan_roll_length, false);
        if specs.is_none() {
            tracing::debug!("工單 {} 輸入不足，無法重新計算規格", job.job_no);
        }

        Ok(Self {
            job: job.clone(),
            specs,
        })
    }

    /// 依工單ID尋找並開啟
    pub fn find(jobs: &[SlittingJob], job_id: &str, calculator: &SpecCalculator) -> Result<Option<Self>> {
        jobs.iter()
            .find(|j| j.id == job_id)
            .map(|job| Self::open(job, calculator))
            .transpose()
    }
}
