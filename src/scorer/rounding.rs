//! Decimal helpers on the thousandths grid and the score display correction.
//!
//! Every score in the engine is carried as an `i64` count of thousandths.
//! Conversion to and from `f64` happens only at the record boundary.

/// Converts a decimal to thousandths, rounding half away from zero.
#[inline]
pub fn to_millis(value: f64) -> i64 {
    (value * 1000.0).round() as i64
}

#[inline]
pub fn from_millis(millis: i64) -> f64 {
    millis as f64 / 1000.0
}

/// Rounds a decimal to 1 decimal place and returns it in thousandths.
#[inline]
pub fn to_millis_1dp(value: f64) -> i64 {
    (value * 10.0).round() as i64 * 100
}

/// Rounds a decimal to 3 decimal places.
#[inline]
pub fn round_3dp(value: f64) -> f64 {
    from_millis(to_millis(value))
}

/// Rounds a decimal to 1 decimal place.
#[inline]
pub fn round_1dp(value: f64) -> f64 {
    from_millis(to_millis_1dp(value))
}

/// The shared score correction applied to every displayed score.
///
/// 1. Round to 3 decimals.
/// 2. If the hundredths and thousandths digits are both 9 (`_._D99`), add 0.001.
/// 3. Floor to 2 decimals.
/// 4. Repeat the hundredths digit as the thousandths digit.
///
/// `9.6989 -> 9.699 -> 9.700 -> 9.70 -> 9.700` and `9.734 -> 9.73 -> 9.733`.
pub struct ScoreRounder;

impl ScoreRounder {
    pub fn round(raw: f64) -> f64 {
        from_millis(Self::round_millis(to_millis(raw)))
    }

    /// Applies steps 2-4 to a value already on the thousandths grid.
    pub fn round_millis(millis: i64) -> i64 {
        let corrected = carry_x99(millis);
        let hundredths = corrected.div_euclid(10);
        duplicate_last_digit(hundredths)
    }
}

/// Adds one thousandth when the fractional digits read `D99`.
#[inline]
fn carry_x99(millis: i64) -> i64 {
    // Digits are read from the written value, sign excluded.
    if millis.abs() % 100 == 99 {
        millis + 1
    } else {
        millis
    }
}

/// Appends the last written hundredths digit as a thousandths digit.
#[inline]
fn duplicate_last_digit(hundredths: i64) -> i64 {
    let digit = hundredths.abs() % 10;
    if hundredths < 0 {
        hundredths * 10 - digit
    } else {
        hundredths * 10 + digit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carry_only_on_double_nine() {
        assert_eq!(carry_x99(9699), 9700);
        assert_eq!(carry_x99(9698), 9698);
        assert_eq!(carry_x99(9909), 9909);
        assert_eq!(carry_x99(-199), -198);
    }

    #[test]
    fn test_duplicate_last_digit() {
        assert_eq!(duplicate_last_digit(970), 9700);
        assert_eq!(duplicate_last_digit(973), 9733);
        assert_eq!(duplicate_last_digit(0), 0);
        assert_eq!(duplicate_last_digit(-19), -199);
    }

    #[test]
    fn test_round_millis_pipeline() {
        assert_eq!(ScoreRounder::round_millis(9699), 9700);
        assert_eq!(ScoreRounder::round_millis(9734), 9733);
        assert_eq!(ScoreRounder::round_millis(12800), 12800);
        assert_eq!(ScoreRounder::round_millis(9799), 9800);
    }

    #[test]
    fn test_negative_score_floors_toward_negative_infinity() {
        // -0.199 carries to -0.198, floors to -0.20, written -0.200
        assert_eq!(ScoreRounder::round_millis(-199), -200);
        // -0.153 floors to -0.16 and is written -0.166
        assert_eq!(ScoreRounder::round_millis(-153), -166);
    }

    #[test]
    fn test_boundary_conversions() {
        assert_eq!(to_millis(9.6989), 9699);
        assert_eq!(to_millis(12.898999), 12899);
        assert_eq!(to_millis_1dp(0.34), 300);
        assert_eq!(round_3dp(10.0 - 1.2), 8.8);
        assert_eq!(round_1dp(4.56), 4.6);
    }
}
