use crate::error::{JudgeError, JudgeResult};
use crate::scorer::rounding::{from_millis, to_millis};
use crate::scorer::types::{Discipline, ElementGroup, Event};
use serde::{Deserialize, Serialize};
use tracing::warn;

// Legal element-group values, in thousandths.
const MAG_STANDARD: &[i64] = &[0, 300, 500];
const WAG_STANDARD: &[i64] = &[0, 500];
const OPEN_RANGE: &[i64] = &[0, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100];

/// Legal element-group values per discipline, event and group.
pub struct ElementGroupCatalog;

impl ElementGroupCatalog {
    pub fn legal_millis(discipline: Discipline, event: Event, group: ElementGroup) -> &'static [i64] {
        match (group, discipline, event) {
            (ElementGroup::IV, Discipline::Mag, Event::Fx) => MAG_STANDARD,
            (ElementGroup::IV, Discipline::Wag, Event::Fx | Event::Ub | Event::Bb) => WAG_STANDARD,
            // Dismount groups on PH/SR/PB/HB and every remaining combination
            (ElementGroup::IV, _, _) => OPEN_RANGE,
            (_, Discipline::Mag, _) => MAG_STANDARD,
            (_, Discipline::Wag, _) => WAG_STANDARD,
        }
    }

    pub fn legal_values(discipline: Discipline, event: Event, group: ElementGroup) -> Vec<f64> {
        Self::legal_millis(discipline, event, group)
            .iter()
            .map(|&m| from_millis(m))
            .collect()
    }

    /// Maps `value` onto the catalog, returning its thousandths if legal.
    pub fn resolve(
        discipline: Discipline,
        event: Event,
        group: ElementGroup,
        value: f64,
    ) -> Option<i64> {
        if !value.is_finite() {
            return None;
        }
        let millis = to_millis(value);
        if (value * 1000.0 - millis as f64).abs() > 1e-6 {
            return None;
        }
        Self::legal_millis(discipline, event, group)
            .contains(&millis)
            .then_some(millis)
    }

    pub fn is_legal(discipline: Discipline, event: Event, group: ElementGroup, value: f64) -> bool {
        Self::resolve(discipline, event, group, value).is_some()
    }
}

/// The four element-group slots of one routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementGroupValues {
    pub i: f64,
    pub ii: f64,
    pub iii: f64,
    pub iv: f64,
}

impl ElementGroupValues {
    pub fn uniform(value: f64) -> Self {
        Self {
            i: value,
            ii: value,
            iii: value,
            iv: value,
        }
    }

    pub fn get(&self, group: ElementGroup) -> f64 {
        match group {
            ElementGroup::I => self.i,
            ElementGroup::II => self.ii,
            ElementGroup::III => self.iii,
            ElementGroup::IV => self.iv,
        }
    }

    fn slot_mut(&mut self, group: ElementGroup) -> &mut f64 {
        match group {
            ElementGroup::I => &mut self.i,
            ElementGroup::II => &mut self.ii,
            ElementGroup::III => &mut self.iii,
            ElementGroup::IV => &mut self.iv,
        }
    }

    /// Sets one slot after checking the value against the catalog.
    pub fn select(
        &mut self,
        discipline: Discipline,
        event: Event,
        group: ElementGroup,
        value: f64,
    ) -> JudgeResult<()> {
        let millis = ElementGroupCatalog::resolve(discipline, event, group, value).ok_or_else(|| {
            warn!(
                "Rejected group {} value {} for {} {}",
                group, value, discipline, event
            );
            JudgeError::IllegalGroupValue {
                group,
                value,
                discipline,
                event,
            }
        })?;
        *self.slot_mut(group) = from_millis(millis);
        Ok(())
    }

    pub fn total_millis(&self) -> i64 {
        to_millis(self.i) + to_millis(self.ii) + to_millis(self.iii) + to_millis(self.iv)
    }

    pub fn total(&self) -> f64 {
        from_millis(self.total_millis())
    }

    pub fn is_all_zero(&self) -> bool {
        self.i == 0.0 && self.ii == 0.0 && self.iii == 0.0 && self.iv == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_iv_open_range_on_pommel() {
        let values = ElementGroupCatalog::legal_values(Discipline::Mag, Event::Ph, ElementGroup::IV);
        assert_eq!(values.len(), 12);
        assert_eq!(values[11], 1.1);
    }

    #[test]
    fn test_select_rejects_without_mutation() {
        let mut groups = ElementGroupValues::uniform(0.5);
        let err = groups
            .select(Discipline::Wag, Event::Bb, ElementGroup::II, 0.3)
            .unwrap_err();
        assert!(matches!(err, JudgeError::IllegalGroupValue { .. }));
        assert_eq!(groups, ElementGroupValues::uniform(0.5));
    }

    #[test]
    fn test_resolve_rejects_off_grid_values() {
        assert!(!ElementGroupCatalog::is_legal(
            Discipline::Mag,
            Event::Fx,
            ElementGroup::I,
            0.3004
        ));
        assert!(!ElementGroupCatalog::is_legal(
            Discipline::Mag,
            Event::Fx,
            ElementGroup::I,
            f64::NAN
        ));
    }

    #[test]
    fn test_total() {
        let mut groups = ElementGroupValues::default();
        groups
            .select(Discipline::Mag, Event::Hb, ElementGroup::IV, 0.7)
            .unwrap();
        groups
            .select(Discipline::Mag, Event::Hb, ElementGroup::I, 0.3)
            .unwrap();
        assert_eq!(groups.total_millis(), 1000);
        assert!(!groups.is_all_zero());
    }
}
