//! 持久化介面
//!
//! 規格核心只需要兩個寫入動作：保存主工單、把已合併的計劃標記為完成。
//! 文件資料庫與試算表同步都在此介面之外，其寫入失敗以 `SlitError::Store` 回報。

use slit_core::{PlanStatus, PlantPlan, Result, SlitError, SlittingJob};

/// 生產資料儲存
pub trait ProductionStore {
    /// 計劃是否存在（寫入前檢查用）
    fn has_plan(&self, plan_id: &str) -> bool;

    /// 保存（新增或覆寫）分切主工單
    fn save_slitting_job(&mut self, job: &SlittingJob) -> Result<()>;

    /// 把生產計劃標記為已完成
    fn mark_plan_completed(&mut self, plan_id: &str) -> Result<()>;
}

/// 記憶體儲存（離線/示範模式）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    plans: Vec<PlantPlan>,
    jobs: Vec<SlittingJob>,
}

impl MemoryStore {
    /// 以既有計劃建立
    pub fn new(plans: Vec<PlantPlan>) -> Self {
        Self {
            plans,
            jobs: Vec::new(),
        }
    }

    pub fn plans(&self) -> &[PlantPlan] {
        &self.plans
    }

    /// 所有工單（依建立時間由新到舊）
    pub fn jobs(&self) -> &[SlittingJob] {
        &self.jobs
    }

    pub fn plan(&self, plan_id: &str) -> Option<&PlantPlan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }

    pub fn job(&self, job_id: &str) -> Option<&SlittingJob> {
        self.jobs.iter().find(|j| j.id == job_id)
    }

    /// 新增生產計劃
    pub fn add_plan(&mut self, plan: PlantPlan) {
        self.plans.push(plan);
    }
}

impl ProductionStore for MemoryStore {
    fn has_plan(&self, plan_id: &str) -> bool {
        self.plan(plan_id).is_some()
    }

    fn save_slitting_job(&mut self, job: &SlittingJob) -> Result<()> {
        self.jobs.retain(|j| j.id != job.id);
        self.jobs.push(job.clone());
        self.jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(())
    }

    fn mark_plan_completed(&mut self, plan_id: &str) -> Result<()> {
        let plan = self
            .plans
            .iter_mut()
            .find(|p| p.id == plan_id)
            .ok_or_else(|| SlitError::PlanNotFound(plan_id.to_string()))?;
        plan.status = PlanStatus::Completed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};
    use rust_decimal::Decimal;
    use slit_core::JobStatus;

    fn plan(id: &str) -> PlantPlan {
        PlantPlan::new(
            "REL/001".to_string(),
            "100".to_string(),
            Decimal::from(35),
            Decimal::from(100),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        )
        .with_id(id)
    }

    fn job(id: &str, age_minutes: i64) -> SlittingJob {
        let created = Utc::now() - Duration::minutes(age_minutes);
        SlittingJob {
            id: id.to_string(),
            date: created.date_naive(),
            job_no: "MJ-0001".to_string(),
            job_code: "REL/001".to_string(),
            coils: Vec::new(),
            plan_micron: Decimal::from(35),
            plan_qty: Decimal::from(100),
            plan_roll_length: Decimal::from(2000),
            plan_sizer: Decimal::from(100),
            rows: Vec::new(),
            status: JobStatus::Pending,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_mark_plan_completed() {
        let mut store = MemoryStore::new(vec![plan("p1"), plan("p2")]);

        assert!(store.has_plan("p1"));
        assert!(!store.has_plan("missing"));

        store.mark_plan_completed("p1").unwrap();
        assert!(!store.plan("p1").unwrap().is_pending());
        assert!(store.plan("p2").unwrap().is_pending());

        assert!(matches!(
            store.mark_plan_completed("missing"),
            Err(SlitError::PlanNotFound(id)) if id == "missing"
        ));
    }

    #[test]
    fn test_jobs_newest_first_and_upsert() {
        let mut store = MemoryStore::default();
        store.save_slitting_job(&job("old", 30)).unwrap();
        store.save_slitting_job(&job("new", 1)).unwrap();

        let ids: Vec<_> = store.jobs().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);

        let mut updated = job("old", 30);
        updated.status = JobStatus::InProgress;
        store.save_slitting_job(&updated).unwrap();

        assert_eq!(store.jobs().len(), 2);
        assert_eq!(store.job("old").unwrap().status, JobStatus::InProgress);
    }
}
