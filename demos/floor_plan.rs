use floor_planner::logging::{init_logging, LoggingConfig};
use floor_planner::prelude::*;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/plan.ron"));
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("floor_plan.svg"));

    let plan = PlanFile::from_file(&input)?.to_plan()?;
    plan.save(&output)?;
    Ok(())
}
