//! # Slitting Planner
//!
//! 廠內排程：生產計劃佇列、合併預覽與主工單產生、工單檢視

pub mod job_view;
pub mod merge;
pub mod queue;
pub mod store;

// Re-export 主要類型
pub use job_view::JobView;
pub use merge::MergeSession;
pub use queue::{PlantQueue, Selection};
pub use store::{MemoryStore, ProductionStore};
