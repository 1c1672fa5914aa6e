use crate::reports;
use clap::Args;
use gymjudge::api::AnySession;
use gymjudge::config::{Config, PanelSettings};
use gymjudge::error::JudgeResult;
use gymjudge::record::{Edit, NumericField};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Toggle an element, e.g. `J:1`. Repeatable.
    #[arg(long = "element", value_name = "LETTER:N")]
    pub elements: Vec<String>,

    /// Select an element-group value, e.g. `IV=0.5`. Repeatable.
    #[arg(long = "group", value_name = "GROUP=VALUE")]
    pub groups: Vec<String>,

    /// Connection value.
    #[arg(long)]
    pub cv: Option<String>,

    /// Execution deduction.
    #[arg(long)]
    pub execution: Option<String>,

    #[arg(long)]
    pub stick: Option<bool>,

    /// Neutral deduction.
    #[arg(long)]
    pub nd: Option<String>,

    /// Panel D score.
    #[arg(long)]
    pub d: Option<String>,

    /// Panel E score.
    #[arg(long)]
    pub e: Option<String>,

    #[arg(long)]
    pub comp_stick: Option<bool>,

    /// Panel neutral deduction.
    #[arg(long)]
    pub comp_nd: Option<String>,
}

impl ScoreArgs {
    /// Edits in application order.
    pub fn edits(&self) -> JudgeResult<Vec<Edit>> {
        let mut edits = Vec::new();
        for spec in &self.elements {
            edits.push(Edit::parse_element(spec)?);
        }
        for spec in &self.groups {
            edits.push(Edit::parse_group(spec)?);
        }

        let text_edits = [
            (NumericField::ConnectionValue, &self.cv),
            (NumericField::ExecutionDeduction, &self.execution),
        ];
        for (field, raw) in text_edits {
            if let Some(raw) = raw {
                edits.push(Edit::from_text(field, raw)?);
            }
        }
        if let Some(flag) = self.stick {
            edits.push(Edit::SetStickBonus(flag));
        }

        let text_edits = [
            (NumericField::NeutralDeduction, &self.nd),
            (NumericField::CompetitionD, &self.d),
            (NumericField::CompetitionE, &self.e),
        ];
        for (field, raw) in text_edits {
            if let Some(raw) = raw {
                edits.push(Edit::from_text(field, raw)?);
            }
        }
        if let Some(flag) = self.comp_stick {
            edits.push(Edit::SetCompetitionStickBonus(flag));
        }
        if let Some(raw) = &self.comp_nd {
            edits.push(Edit::from_text(NumericField::CompetitionNeutralDeduction, raw)?);
        }
        Ok(edits)
    }
}

pub fn run(args: &ScoreArgs, settings: &PanelSettings) -> JudgeResult<()> {
    // Parse everything up front so a typo doesn't leave a half-edited record.
    let edits = args.edits()?;
    let mut session = AnySession::open(&args.config.session, settings)?;

    for edit in edits {
        session.apply(edit)?;
    }

    let summary = session.summary();
    reports::print_score_report(&summary);
    reports::print_consistency_report(&summary.consistency);
    Ok(())
}
