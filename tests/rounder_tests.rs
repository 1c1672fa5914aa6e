use gymjudge::scorer::rounding::to_millis;
use gymjudge::scorer::ScoreRounder;
use proptest::prelude::*;
use rstest::rstest;

// --- PINNED DISPLAY CORRECTIONS ---
#[rstest]
#[case(9.699, 9.700)] // .x99 carries
#[case(9.6989, 9.700)] // rounds to 9.699 first, then carries
#[case(12.898999, 12.900)] // rounds to 12.899 -> carries, never shown as 12.899
#[case(9.734, 9.733)] // truncates to 9.73, duplicates the 3
#[case(9.70, 9.700)]
#[case(9.7049, 9.700)] // 9.705 truncates to 9.70
#[case(12.8, 12.800)]
#[case(13.456, 13.455)]
#[case(8.909, 8.900)] // 09 is not 99
#[case(0.0, 0.0)]
#[case(9.99, 9.999)] // truncated 9.99 duplicates its 9
fn test_rounder_pins(#[case] raw: f64, #[case] expected: f64) {
    assert_eq!(ScoreRounder::round(raw), expected, "raw {}", raw);
}

#[test]
fn test_output_ending_in_99_carries_on_second_pass() {
    // 9.79x truncates to 9.79 and is written 9.799, which itself has the
    // .x99 shape and carries when corrected again.
    let once = ScoreRounder::round(9.794);
    assert_eq!(once, 9.799);
    assert_eq!(ScoreRounder::round(once), 9.800);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn test_thousandths_digit_repeats_hundredths(raw in 0.0f64..40.0) {
        let m = to_millis(ScoreRounder::round(raw));
        prop_assert_eq!(m % 10, (m / 10) % 10, "raw {} -> {}", raw, m);
    }

    #[test]
    fn test_rounder_is_idempotent(raw in 0.0f64..40.0) {
        let once = ScoreRounder::round(raw);
        // Outputs whose hundredths digit is 9 re-enter the carry rule.
        prop_assume!((to_millis(once) / 10) % 10 != 9);
        prop_assert_eq!(ScoreRounder::round(once), once);
    }

    #[test]
    fn test_rounder_never_moves_more_than_a_hundredth(raw in 0.0f64..40.0) {
        let diff = ScoreRounder::round(raw) - raw;
        prop_assert!(diff.abs() < 0.0105, "raw {} moved by {}", raw, diff);
    }
}
