/// Maximum number of counted elements across all difficulty letters.
pub const MAX_ELEMENTS: u8 = 8;

/// Number of difficulty letters (A..J).
pub const LETTER_COUNT: usize = 10;

/// Fixed stick bonus, in thousandths.
pub const STICK_BONUS_MILLIS: i64 = 100;

/// The execution panel scores out of 10.000.
pub const EXECUTION_BASE_MILLIS: i64 = 10_000;

/// Element-group value applied to every slot when a record is first loaded with all zeros.
pub const DEFAULT_BOOTSTRAP_GROUP_VALUE: f64 = 0.5;

/// Largest value any numeric score field accepts.
pub const MAX_SCORE_INPUT: f64 = 100.0;

/// A delta at or above this many tenths yields 0% regardless of the deduction interval.
pub const CONSISTENCY_CUTOFF_TENTHS: i64 = 14;
