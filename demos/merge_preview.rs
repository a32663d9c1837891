//! 合併預覽示例：勾選兩張計劃、對開預覽、確認產生主工單

use chrono::NaiveDate;
use rust_decimal::Decimal;
use slitting::{
    logging, JobView, MemoryStore, MergeSession, PlantPlan, PlantQueue, Selection, SpecCalculator,
};

fn main() -> anyhow::Result<()> {
    logging::init();

    let date = NaiveDate::from_ymd_opt(2025, 11, 1).ok_or_else(|| anyhow::anyhow!("無效日期"))?;
    let plans = vec![
        PlantPlan::new("REL/001".into(), "100".into(), Decimal::from(35), Decimal::from(500), date).with_id("ppl-1"),
        PlantPlan::new("REL/002".into(), "150".into(), Decimal::from(35), Decimal::from(300), date).with_id("ppl-2"),
        PlantPlan::new("REL/003".into(), "200".into(), Decimal::from(40), Decimal::from(420), date).with_id("ppl-3"),
    ];
    let mut store = MemoryStore::new(plans);
    let calculator = SpecCalculator::default();

    println!("=== 待生產計劃 ===");
    for plan in PlantQueue::pending(store.plans()) {
        println!("  {} {}mm {}mic {}", plan.party_code, plan.size, plan.micron, plan.qty);
    }

    let mut selection = Selection::new();
    selection.toggle("ppl-1");
    selection.toggle("ppl-2");

    let plans = store.plans().to_vec();
    let mut session = MergeSession::open(&plans, selection.ids(), &calculator)?;
    session.set_multi_up(true);
    session.set_sizer(None);

    if let Some(spec) = session.preview() {
        println!("\n=== 預覽 ===");
        println!("合併寬度 {} / 大捲寬度 {}", spec.combined_slit_size, spec.sizer);
        println!("大捲重量 {:.3}，預計產量 {:.2}", spec.jumbo_weight, spec.production_qty);
        for coil in &spec.coils_breakdown {
            println!(
                "  {}mm{} 捲數 {} 米數 {:.0}",
                coil.size,
                if coil.is_multi { " (對開)" } else { "" },
                coil.specific_rolls,
                coil.mtrs_required
            );
        }
        if spec.needs_split_run {
            println!("米數差距 {:.0}，建議分批生產", spec.mtrs_spread());
        }
    }

    let job = session.confirm(&mut store)?;
    println!("\n主工單 #{} 已建立", job.job_no);

    if let Some(view) = JobView::find(store.jobs(), &job.id, &calculator)? {
        if let Some(spec) = view.specs {
            println!("重新計算：最大捲數 {}", spec.max_rolls);
        }
    }

    Ok(())
}
