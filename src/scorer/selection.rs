use crate::consts::{LETTER_COUNT, MAX_ELEMENTS};
use crate::error::{JudgeError, JudgeResult};
use crate::scorer::types::Letter;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

type Slots = [Option<u8>; LETTER_COUNT];

/// Chosen multiplicity per difficulty letter.
///
/// At most one multiplicity per letter, and the multiplicities never sum past
/// [`MAX_ELEMENTS`]. Deserialized selections are checked against the same rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Slots", into = "Slots")]
pub struct ElementSelection {
    slots: Slots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
}

impl ElementSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: Letter) -> Option<u8> {
        self.slots[letter.index()]
    }

    /// Selected `(letter, multiplicity)` pairs, lowest letter first.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u8)> + '_ {
        Letter::ALL
            .iter()
            .filter_map(move |&l| self.slots[l.index()].map(|m| (l, m)))
    }

    pub fn total(&self) -> u8 {
        self.slots.iter().flatten().sum()
    }

    fn total_excluding(&self, letter: Letter) -> u8 {
        self.iter()
            .filter(|(l, _)| *l != letter)
            .map(|(_, m)| m)
            .sum()
    }

    /// Whether `toggle(letter, multiplicity)` would be accepted.
    /// The UI uses this to disable buttons.
    pub fn can_toggle(&self, letter: Letter, multiplicity: u8) -> bool {
        if !(1..=MAX_ELEMENTS).contains(&multiplicity) {
            return false;
        }
        self.get(letter) == Some(multiplicity)
            || self.total_excluding(letter) + multiplicity <= MAX_ELEMENTS
    }

    /// Selects `multiplicity` for `letter`, or clears it if already selected.
    /// A rejected toggle leaves the selection untouched.
    pub fn toggle(&mut self, letter: Letter, multiplicity: u8) -> JudgeResult<ToggleOutcome> {
        if !(1..=MAX_ELEMENTS).contains(&multiplicity) {
            return Err(JudgeError::InvalidInput(format!(
                "multiplicity {} outside 1..={}",
                multiplicity, MAX_ELEMENTS
            )));
        }

        let slot = letter.index();
        if self.slots[slot] == Some(multiplicity) {
            self.slots[slot] = None;
            debug!("Deselected {} x{}, total {}", letter, multiplicity, self.total());
            return Ok(ToggleOutcome::Deselected);
        }

        let other = self.total_excluding(letter);
        if other + multiplicity > MAX_ELEMENTS {
            warn!(
                "Rejected {} x{}: {} elements already selected",
                letter, multiplicity, other
            );
            return Err(JudgeError::CapacityExceeded {
                letter,
                multiplicity,
                other,
            });
        }

        self.slots[slot] = Some(multiplicity);
        debug!("Selected {} x{}, total {}", letter, multiplicity, self.total());
        Ok(ToggleOutcome::Selected)
    }

    /// Difficulty in thousandths: sum of multiplicity times letter weight.
    pub fn difficulty_millis(&self) -> i64 {
        self.iter()
            .map(|(l, m)| m as i64 * l.weight_tenths() * 100)
            .sum()
    }

    pub fn difficulty_value(&self) -> f64 {
        self.difficulty_millis() as f64 / 1000.0
    }
}

impl TryFrom<Slots> for ElementSelection {
    type Error = String;

    fn try_from(slots: Slots) -> Result<Self, Self::Error> {
        let mut total: u32 = 0;
        for (idx, m) in slots.iter().enumerate() {
            if let Some(m) = *m {
                if !(1..=MAX_ELEMENTS).contains(&m) {
                    return Err(format!(
                        "letter {} holds multiplicity {}",
                        Letter::ALL[idx],
                        m
                    ));
                }
                total += m as u32;
            }
        }
        if total > MAX_ELEMENTS as u32 {
            return Err(format!("{} elements selected, max {}", total, MAX_ELEMENTS));
        }
        Ok(Self { slots })
    }
}

impl From<ElementSelection> for Slots {
    fn from(sel: ElementSelection) -> Self {
        sel.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_multiplicity_deselects() {
        let mut sel = ElementSelection::new();
        assert_eq!(sel.toggle(Letter::C, 2).unwrap(), ToggleOutcome::Selected);
        assert_eq!(sel.toggle(Letter::C, 2).unwrap(), ToggleOutcome::Deselected);
        assert_eq!(sel.get(Letter::C), None);
        assert_eq!(sel.total(), 0);
    }

    #[test]
    fn test_toggle_replaces_previous_multiplicity() {
        let mut sel = ElementSelection::new();
        sel.toggle(Letter::D, 5).unwrap();
        sel.toggle(Letter::D, 8).unwrap();
        assert_eq!(sel.get(Letter::D), Some(8));
        assert_eq!(sel.total(), 8);
    }

    #[test]
    fn test_capacity_rejection_does_not_mutate() {
        let mut sel = ElementSelection::new();
        sel.toggle(Letter::A, 5).unwrap();
        sel.toggle(Letter::B, 2).unwrap();
        let before = sel;

        let err = sel.toggle(Letter::J, 2).unwrap_err();
        assert!(matches!(
            err,
            JudgeError::CapacityExceeded { other: 7, multiplicity: 2, .. }
        ));
        assert_eq!(sel, before);
        assert!(!sel.can_toggle(Letter::J, 2));
        assert!(sel.can_toggle(Letter::J, 1));
        // Existing selection can always be cleared.
        assert!(sel.can_toggle(Letter::A, 5));
    }

    #[test]
    fn test_multiplicity_out_of_range() {
        let mut sel = ElementSelection::new();
        assert!(sel.toggle(Letter::A, 0).is_err());
        assert!(sel.toggle(Letter::A, 9).is_err());
        assert_eq!(sel.total(), 0);
    }

    #[test]
    fn test_difficulty_weights() {
        let mut sel = ElementSelection::new();
        sel.toggle(Letter::J, 1).unwrap();
        sel.toggle(Letter::I, 1).unwrap();
        assert_eq!(sel.difficulty_millis(), 1900);

        sel.toggle(Letter::A, 3).unwrap();
        assert_eq!(sel.difficulty_millis(), 2200);
        assert_eq!(sel.difficulty_value(), 2.2);
    }

    #[test]
    fn test_deserialize_rejects_overfull_selection() {
        let json = "[8,1,null,null,null,null,null,null,null,null]";
        assert!(serde_json::from_str::<ElementSelection>(json).is_err());

        let json = "[null,null,null,null,null,null,null,null,1,1]";
        let sel: ElementSelection = serde_json::from_str(json).unwrap();
        assert_eq!(sel.difficulty_millis(), 1900);
    }
}
