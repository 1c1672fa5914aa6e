use crate::consts::{CONSISTENCY_CUTOFF_TENTHS, EXECUTION_BASE_MILLIS};
use crate::scorer::rounding::{from_millis, to_millis};
use serde::{Deserialize, Serialize};

/// Delta columns of [`PERCENTAGE_TABLE`], in tenths.
pub const DELTA_STEPS: [f64; 17] = [
    0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6,
];

/// Inclusive upper bound of each deduction interval, in thousandths.
/// Interval 1 also includes its lower bound 0.0.
pub const INTERVAL_UPPER_MILLIS: [i64; 7] = [400, 600, 1000, 1500, 2000, 2500, 10_000];

/// Certification percentage by deduction interval (rows) and delta step (columns).
pub const PERCENTAGE_TABLE: [[u8; 17]; 7] = [
    [100, 75, 65, 55, 45, 35, 25, 15, 5, 0, 0, 0, 0, 0, 0, 0, 0],
    [100, 80, 70, 60, 50, 40, 30, 20, 10, 0, 0, 0, 0, 0, 0, 0, 0],
    [100, 100, 80, 70, 60, 50, 40, 30, 20, 10, 0, 0, 0, 0, 0, 0, 0],
    [100, 100, 94, 80, 70, 60, 50, 40, 30, 20, 10, 0, 0, 0, 0, 0, 0],
    [100, 100, 100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 0, 0, 0, 0, 0],
    [100, 100, 100, 96, 88, 80, 70, 60, 50, 40, 30, 20, 10, 0, 0, 0, 0],
    [100, 100, 100, 100, 93, 87, 80, 70, 60, 50, 40, 30, 20, 0, 0, 0, 0],
];

/// Judge-vs-panel consistency for one routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsistencyState {
    pub delta: f64,
    pub deduction: f64,
    pub percentage: u8,
}

/// Detailed result, including the resolved interval (0 = out of range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyResult {
    pub delta_tenths: i64,
    pub deduction_millis: i64,
    pub interval: usize,
    pub percentage: u8,
}

impl ConsistencyResult {
    pub fn state(&self) -> ConsistencyState {
        ConsistencyState {
            delta: self.delta_tenths as f64 / 10.0,
            deduction: from_millis(self.deduction_millis),
            percentage: self.percentage,
        }
    }
}

/// Compares the judge's execution score with the panel's official E score.
pub fn evaluate(judge_e: f64, panel_e: f64) -> ConsistencyResult {
    evaluate_millis(to_millis(judge_e), to_millis(panel_e))
}

pub fn evaluate_millis(judge_e_millis: i64, panel_e_millis: i64) -> ConsistencyResult {
    let delta_tenths = delta_tenths(judge_e_millis - panel_e_millis);
    let deduction_millis = EXECUTION_BASE_MILLIS - panel_e_millis;
    let interval = classify_deduction(deduction_millis);
    let delta = delta_tenths as f64 / 10.0;

    ConsistencyResult {
        delta_tenths,
        deduction_millis,
        interval,
        percentage: lookup_percentage(interval, delta),
    }
}

/// `abs(round(diff * 10) / 10)` with ties rounded toward positive infinity.
fn delta_tenths(diff_millis: i64) -> i64 {
    (diff_millis + 50).div_euclid(100).abs()
}

/// 1-based deduction interval, or 0 when the deduction falls outside 0.0..=10.0.
pub fn classify_deduction(deduction_millis: i64) -> usize {
    if deduction_millis < 0 {
        return 0;
    }
    INTERVAL_UPPER_MILLIS
        .iter()
        .position(|&upper| deduction_millis <= upper)
        .map_or(0, |idx| idx + 1)
}

/// Column of the largest delta step not above `delta`, clamped to the table.
pub fn delta_column(delta: f64) -> usize {
    DELTA_STEPS
        .iter()
        .rposition(|&step| step <= delta)
        .unwrap_or(0)
}

/// Table lookup. Undefined cells and out-of-range intervals read as 0.
pub fn lookup_percentage(interval: usize, delta: f64) -> u8 {
    if delta >= CONSISTENCY_CUTOFF_TENTHS as f64 / 10.0 {
        return 0;
    }
    if interval == 0 {
        return 0;
    }
    PERCENTAGE_TABLE
        .get(interval - 1)
        .and_then(|row| row.get(delta_column(delta)))
        .copied()
        .unwrap_or(0)
}
