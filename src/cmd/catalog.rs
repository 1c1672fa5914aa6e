use crate::reports;
use clap::Args;
use gymjudge::error::JudgeResult;
use gymjudge::scorer::types::{Discipline, Event};

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(long, default_value = "mag")]
    pub discipline: Discipline,
    #[arg(long, default_value = "FX")]
    pub event: Event,
}

pub fn run(args: &CatalogArgs) -> JudgeResult<()> {
    reports::print_catalog(args.discipline, args.event);
    Ok(())
}
