//! # Slitting
//!
//! 薄膜合併分切規格引擎：資料模型、規格計算、合併與工單檢視

pub mod logging;

pub use slit_calc::{adjust_for_multi_up, AdjustedOrder, CoilBreakdown, SpecCalculator, Specification};
pub use slit_core::{
    JobStatus, Order, PlanStatus, PlantPlan, Result, SlitError, SlittingCoil, SlittingJob, SpecConfig,
};
pub use slit_planner::{JobView, MemoryStore, MergeSession, PlantQueue, ProductionStore, Selection};
