use gymjudge::consts::MAX_ELEMENTS;
use gymjudge::error::JudgeError;
use gymjudge::scorer::{
    Discipline, ElementGroup, ElementGroupCatalog, ElementSelection, Event, Letter,
};
use proptest::prelude::*;
use rstest::rstest;

fn arb_letter() -> impl Strategy<Value = Letter> {
    (0usize..10).prop_map(|i| Letter::ALL[i])
}

/// A selection that fits in 8 elements, as (letter, multiplicity) pairs.
fn arb_plan() -> impl Strategy<Value = Vec<(Letter, u8)>> {
    proptest::sample::subsequence(Letter::ALL.to_vec(), 0..=4)
        .prop_flat_map(|letters| {
            let n = letters.len();
            (Just(letters), proptest::collection::vec(1u8..=2, n))
        })
        .prop_map(|(letters, mults)| letters.into_iter().zip(mults).collect::<Vec<_>>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_total_never_exceeds_capacity(
        toggles in proptest::collection::vec((arb_letter(), 1u8..=8), 0..40)
    ) {
        let mut sel = ElementSelection::new();
        for (letter, mult) in toggles {
            let before = sel;
            match sel.toggle(letter, mult) {
                Ok(_) => {}
                Err(JudgeError::CapacityExceeded { .. }) => {
                    prop_assert_eq!(sel, before);
                }
                Err(e) => {
                    prop_assert!(false, "unexpected error {}", e);
                }
            }
            prop_assert!(sel.total() <= MAX_ELEMENTS);
        }
    }

    #[test]
    fn test_difficulty_independent_of_toggle_order(
        (plan, shuffled) in arb_plan().prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle()))
    ) {
        let mut a = ElementSelection::new();
        for &(letter, mult) in &plan {
            a.toggle(letter, mult).unwrap();
        }
        let mut b = ElementSelection::new();
        for &(letter, mult) in &shuffled {
            b.toggle(letter, mult).unwrap();
        }
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.difficulty_millis(), b.difficulty_millis());
    }
}

#[test]
fn test_full_selection_blocks_everything_but_deselect() {
    let mut sel = ElementSelection::new();
    sel.toggle(Letter::H, 3).unwrap();
    sel.toggle(Letter::G, 5).unwrap();
    assert_eq!(sel.total(), 8);

    for letter in Letter::ALL {
        if letter != Letter::H && letter != Letter::G {
            assert!(!sel.can_toggle(letter, 1), "{} should be disabled", letter);
        }
    }
    // Swapping G down to a smaller multiplicity is still allowed.
    assert!(sel.can_toggle(Letter::G, 4));
    sel.toggle(Letter::G, 4).unwrap();
    assert!(sel.can_toggle(Letter::A, 1));
}

// --- ELEMENT GROUP CATALOG ---
#[rstest]
#[case(Discipline::Mag, Event::Fx, ElementGroup::I, &[0.0, 0.3, 0.5][..])]
#[case(Discipline::Wag, Event::Ub, ElementGroup::III, &[0.0, 0.5][..])]
#[case(Discipline::Mag, Event::Fx, ElementGroup::IV, &[0.0, 0.3, 0.5][..])]
#[case(Discipline::Wag, Event::Fx, ElementGroup::IV, &[0.0, 0.5][..])]
#[case(Discipline::Wag, Event::Bb, ElementGroup::IV, &[0.0, 0.5][..])]
fn test_short_catalogs(
    #[case] discipline: Discipline,
    #[case] event: Event,
    #[case] group: ElementGroup,
    #[case] expected: &[f64],
) {
    assert_eq!(
        ElementGroupCatalog::legal_values(discipline, event, group),
        expected.to_vec()
    );
}

#[rstest]
#[case(Discipline::Mag, Event::Ph)]
#[case(Discipline::Mag, Event::Sr)]
#[case(Discipline::Mag, Event::Pb)]
#[case(Discipline::Mag, Event::Hb)]
#[case(Discipline::Mag, Event::Vt)]
#[case(Discipline::Wag, Event::Vt)]
fn test_group_iv_open_range(#[case] discipline: Discipline, #[case] event: Event) {
    let values = ElementGroupCatalog::legal_values(discipline, event, ElementGroup::IV);
    let expected: Vec<f64> = (0..=11).map(|i| i as f64 / 10.0).collect();
    assert_eq!(values, expected);
    assert!(ElementGroupCatalog::is_legal(discipline, event, ElementGroup::IV, 0.7));
    assert!(!ElementGroupCatalog::is_legal(discipline, event, ElementGroup::IV, 1.2));
}
