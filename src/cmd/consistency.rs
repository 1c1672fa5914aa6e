use crate::reports;
use clap::Args;
use gymjudge::error::JudgeResult;
use gymjudge::scorer::consistency;
use gymjudge::scorer::input::parse_score_input;

#[derive(Args, Debug, Clone)]
pub struct ConsistencyArgs {
    /// The judge's own execution score.
    #[arg(long)]
    pub judge_e: String,

    /// The panel's official execution score.
    #[arg(long)]
    pub panel_e: String,
}

pub fn run(args: &ConsistencyArgs) -> JudgeResult<()> {
    let judge_e = parse_score_input(&args.judge_e)?;
    let panel_e = parse_score_input(&args.panel_e)?;
    reports::print_consistency_report(&consistency::evaluate(judge_e, panel_e));
    Ok(())
}
