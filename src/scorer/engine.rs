//! Recomputation chains over a [`ScoreRecord`].
//!
//! Edits are applied to a copy of the record; the caller's record is only
//! replaced once the edit validated. The returned patch holds exactly the
//! fields that changed.

use crate::consts::{EXECUTION_BASE_MILLIS, MAX_SCORE_INPUT, STICK_BONUS_MILLIS};
use crate::error::{JudgeError, JudgeResult};
use crate::record::{Edit, RecordPatch, ScoreRecord};
use crate::scorer::consistency;
use crate::scorer::groups::ElementGroupValues;
use crate::scorer::rounding::{from_millis, round_1dp, round_3dp, to_millis, ScoreRounder};
use tracing::{debug, info};

/// `difficulty + element groups + connection value`, in thousandths.
#[inline]
pub fn start_value_millis(difficulty: i64, groups_total: i64, connection_value: i64) -> i64 {
    difficulty + groups_total + connection_value
}

#[inline]
fn stick_millis(stick_bonus: bool) -> i64 {
    if stick_bonus {
        STICK_BONUS_MILLIS
    } else {
        0
    }
}

/// The judge's displayed score ("My Score"), in thousandths.
pub fn my_score_millis(
    execution_score: i64,
    start_value: i64,
    stick_bonus: bool,
    neutral_deduction: i64,
) -> i64 {
    let raw = execution_score + start_value + stick_millis(stick_bonus) - neutral_deduction;
    ScoreRounder::round_millis(raw)
}

/// The official panel score, in thousandths.
pub fn competition_score_millis(d: i64, e: i64, stick_bonus: bool, neutral_deduction: i64) -> i64 {
    let raw = d + e + stick_millis(stick_bonus) - neutral_deduction;
    ScoreRounder::round_millis(raw)
}

/// `10 - execution deduction`, in thousandths.
#[inline]
pub fn execution_score_millis(execution_deduction: i64) -> i64 {
    EXECUTION_BASE_MILLIS - execution_deduction
}

pub fn recompute_start_value(record: &mut ScoreRecord) {
    let difficulty = record.selection.difficulty_millis();
    let groups = record.groups.total_millis();
    let cv = to_millis(record.score.connection_value);
    let sv = start_value_millis(difficulty, groups, cv);

    record.score.difficulty_value = from_millis(difficulty);
    record.score.element_groups_total = from_millis(groups);
    record.score.start_value = from_millis(sv);
    debug!(
        "SV {:.3} = D {:.3} + EG {:.3} + CV {:.3}",
        record.score.start_value,
        record.score.difficulty_value,
        record.score.element_groups_total,
        record.score.connection_value
    );
}

pub fn recompute_execution_score(record: &mut ScoreRecord) {
    let ded = to_millis(record.score.execution_deduction);
    record.score.execution_score = from_millis(execution_score_millis(ded));
}

pub fn recompute_my_score(record: &mut ScoreRecord) {
    let s = &mut record.score;
    s.my_score = from_millis(my_score_millis(
        to_millis(s.execution_score),
        to_millis(s.start_value),
        s.stick_bonus,
        to_millis(s.neutral_deduction),
    ));
    debug!("My Score {:.3}", s.my_score);
}

pub fn recompute_competition_score(record: &mut ScoreRecord) {
    let c = &mut record.competition;
    c.competition_score = from_millis(competition_score_millis(
        to_millis(c.d),
        to_millis(c.e),
        c.stick_bonus,
        to_millis(c.neutral_deduction),
    ));
    debug!("Competition Score {:.3}", c.competition_score);
}

pub fn recompute_consistency(record: &mut ScoreRecord) {
    let result = consistency::evaluate(record.score.execution_score, record.competition.e);
    record.consistency = result.state();
    debug!(
        "Consistency: delta {:.1}, deduction {:.3}, interval {}, {}%",
        record.consistency.delta,
        record.consistency.deduction,
        result.interval,
        result.percentage
    );
}

/// Recomputes every derived field from the stored inputs.
pub fn recompute_all(record: &mut ScoreRecord) {
    recompute_start_value(record);
    recompute_execution_score(record);
    recompute_my_score(record);
    recompute_competition_score(record);
    recompute_consistency(record);
}

/// Numeric fields take finite values in `0..=MAX_SCORE_INPUT`.
fn score_input(value: f64, what: &str) -> JudgeResult<f64> {
    if value.is_finite() && (0.0..=MAX_SCORE_INPUT).contains(&value) {
        Ok(value)
    } else {
        Err(JudgeError::InvalidInput(format!("{} {}", what, value)))
    }
}

/// Validates and applies one edit, then runs its recomputation chain.
pub fn apply_edit(record: &mut ScoreRecord, edit: Edit) -> JudgeResult<RecordPatch> {
    let mut next = *record;

    match edit {
        Edit::ToggleElement {
            letter,
            multiplicity,
        } => {
            next.selection.toggle(letter, multiplicity)?;
            recompute_start_value(&mut next);
            recompute_my_score(&mut next);
        }
        Edit::SelectGroupValue { group, value } => {
            next.groups
                .select(next.discipline, next.event, group, value)?;
            next.groups_initialized = true;
            recompute_start_value(&mut next);
            recompute_my_score(&mut next);
        }
        Edit::SetConnectionValue(value) => {
            next.score.connection_value = round_3dp(score_input(value, "connection value")?);
            recompute_start_value(&mut next);
            recompute_my_score(&mut next);
        }
        Edit::SetExecutionDeduction(value) => {
            next.score.execution_deduction =
                round_3dp(score_input(value, "execution deduction")?);
            recompute_execution_score(&mut next);
            recompute_my_score(&mut next);
            recompute_consistency(&mut next);
        }
        Edit::SetStickBonus(flag) => {
            next.score.stick_bonus = flag;
            recompute_my_score(&mut next);
        }
        Edit::SetNeutralDeduction(value) => {
            next.score.neutral_deduction = round_3dp(score_input(value, "neutral deduction")?);
            recompute_my_score(&mut next);
        }
        Edit::SetCompetitionD(value) => {
            next.competition.d = round_1dp(score_input(value, "D score")?);
            recompute_competition_score(&mut next);
        }
        Edit::SetCompetitionE(value) => {
            next.competition.e = round_3dp(score_input(value, "E score")?);
            recompute_competition_score(&mut next);
            recompute_consistency(&mut next);
        }
        Edit::SetCompetitionStickBonus(flag) => {
            next.competition.stick_bonus = flag;
            recompute_competition_score(&mut next);
        }
        Edit::SetCompetitionNeutralDeduction(value) => {
            next.competition.neutral_deduction =
                round_1dp(score_input(value, "competition neutral deduction")?);
            recompute_competition_score(&mut next);
        }
    }

    let patch = RecordPatch::diff(record, &next);
    *record = next;
    Ok(patch)
}

/// First-load element-group default.
///
/// A record that has never been initialized and holds 0.0 in every group
/// receives `value` in all four slots. The record is marked initialized either
/// way, so the default is considered exactly once.
pub fn bootstrap_groups(record: &mut ScoreRecord, value: f64) -> RecordPatch {
    if record.groups_initialized {
        return RecordPatch::default();
    }

    let mut next = *record;
    next.groups_initialized = true;
    if next.groups.is_all_zero() {
        next.groups = ElementGroupValues::uniform(value);
        recompute_start_value(&mut next);
        recompute_my_score(&mut next);
        info!(
            "Applied default element groups ({} each, total {:.1})",
            value,
            next.groups.total()
        );
    }

    let patch = RecordPatch::diff(record, &next);
    *record = next;
    patch
}
