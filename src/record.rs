use crate::error::{JudgeError, JudgeResult};
use crate::scorer::consistency::ConsistencyState;
use crate::scorer::groups::ElementGroupValues;
use crate::scorer::input::parse_score_input;
use crate::scorer::selection::ElementSelection;
use crate::scorer::types::{Discipline, ElementGroup, Event, Letter};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The judge's own breakdown of a routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreState {
    pub difficulty_value: f64,
    pub element_groups_total: f64,
    pub connection_value: f64,
    pub start_value: f64,
    pub execution_deduction: f64,
    pub execution_score: f64,
    pub stick_bonus: bool,
    pub neutral_deduction: f64,
    pub my_score: f64,
}

/// The official panel score as entered after the routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionScoreState {
    pub d: f64,
    pub e: f64,
    pub stick_bonus: bool,
    pub neutral_deduction: f64,
    pub competition_score: f64,
}

/// Everything scored for one gymnast on one apparatus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRecord {
    pub discipline: Discipline,
    pub event: Event,
    pub selection: ElementSelection,
    pub groups: ElementGroupValues,
    /// Set once the first-load element-group default has been considered.
    pub groups_initialized: bool,
    pub score: ScoreState,
    pub competition: CompetitionScoreState,
    pub consistency: ConsistencyState,
}

impl ScoreRecord {
    /// A fresh record with every derived field computed.
    pub fn new(discipline: Discipline, event: Event) -> Self {
        let mut record = Self {
            discipline,
            event,
            ..Default::default()
        };
        crate::scorer::engine::recompute_all(&mut record);
        record
    }
}

/// A discrete command from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    ToggleElement { letter: Letter, multiplicity: u8 },
    SelectGroupValue { group: ElementGroup, value: f64 },
    SetConnectionValue(f64),
    SetExecutionDeduction(f64),
    SetStickBonus(bool),
    SetNeutralDeduction(f64),
    SetCompetitionD(f64),
    SetCompetitionE(f64),
    SetCompetitionStickBonus(bool),
    SetCompetitionNeutralDeduction(f64),
}

/// Fields edited as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum NumericField {
    #[strum(to_string = "cv")]
    ConnectionValue,
    #[strum(to_string = "execution")]
    ExecutionDeduction,
    #[strum(to_string = "nd")]
    NeutralDeduction,
    #[strum(to_string = "d")]
    CompetitionD,
    #[strum(to_string = "e")]
    CompetitionE,
    #[strum(to_string = "comp_nd")]
    CompetitionNeutralDeduction,
}

impl Edit {
    /// Validates raw text for `field` and builds the matching edit.
    pub fn from_text(field: NumericField, raw: &str) -> JudgeResult<Self> {
        let value = parse_score_input(raw)?;
        Ok(match field {
            NumericField::ConnectionValue => Edit::SetConnectionValue(value),
            NumericField::ExecutionDeduction => Edit::SetExecutionDeduction(value),
            NumericField::NeutralDeduction => Edit::SetNeutralDeduction(value),
            NumericField::CompetitionD => Edit::SetCompetitionD(value),
            NumericField::CompetitionE => Edit::SetCompetitionE(value),
            NumericField::CompetitionNeutralDeduction => Edit::SetCompetitionNeutralDeduction(value),
        })
    }

    /// Parses `J:1` style element toggles.
    pub fn parse_element(raw: &str) -> JudgeResult<Self> {
        let invalid = || JudgeError::InvalidInput(format!("element '{}'", raw));
        let (letter, mult) = raw.split_once(':').ok_or_else(invalid)?;
        let letter: Letter = letter.trim().parse().map_err(|_| invalid())?;
        let multiplicity: u8 = mult.trim().parse().map_err(|_| invalid())?;
        Ok(Edit::ToggleElement {
            letter,
            multiplicity,
        })
    }

    /// Parses `II=0.5` style group selections.
    pub fn parse_group(raw: &str) -> JudgeResult<Self> {
        let invalid = || JudgeError::InvalidInput(format!("group '{}'", raw));
        let (group, value) = raw.split_once('=').ok_or_else(invalid)?;
        let group: ElementGroup = group.trim().parse().map_err(|_| invalid())?;
        let value = parse_score_input(value)?;
        Ok(Edit::SelectGroupValue { group, value })
    }
}

macro_rules! record_fields {
    ($($field:ident : $ty:ty => $($path:ident).+;)*) => {
        /// Partial update of a [`ScoreRecord`]. Only `Some` fields are written.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct RecordPatch {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl RecordPatch {
            /// Fields that differ between two versions of a record.
            pub fn diff(before: &ScoreRecord, after: &ScoreRecord) -> Self {
                let mut patch = Self::default();
                $(
                    if before.$($path).+ != after.$($path).+ {
                        patch.$field = Some(after.$($path).+);
                    }
                )*
                patch
            }

            /// Every field of `record`.
            pub fn full(record: &ScoreRecord) -> Self {
                Self {
                    $($field: Some(record.$($path).+),)*
                }
            }

            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }

            pub fn changed_fields(&self) -> Vec<&'static str> {
                let mut names = Vec::new();
                $(
                    if self.$field.is_some() {
                        names.push(stringify!($field));
                    }
                )*
                names
            }
        }

        impl ScoreRecord {
            pub fn apply_patch(&mut self, patch: &RecordPatch) {
                $(
                    if let Some(value) = patch.$field {
                        self.$($path).+ = value;
                    }
                )*
            }
        }
    };
}

record_fields! {
    discipline: Discipline => discipline;
    event: Event => event;
    selection: ElementSelection => selection;
    groups: ElementGroupValues => groups;
    groups_initialized: bool => groups_initialized;
    difficulty_value: f64 => score.difficulty_value;
    element_groups_total: f64 => score.element_groups_total;
    connection_value: f64 => score.connection_value;
    start_value: f64 => score.start_value;
    execution_deduction: f64 => score.execution_deduction;
    execution_score: f64 => score.execution_score;
    stick_bonus: bool => score.stick_bonus;
    neutral_deduction: f64 => score.neutral_deduction;
    my_score: f64 => score.my_score;
    competition_d: f64 => competition.d;
    competition_e: f64 => competition.e;
    competition_stick_bonus: bool => competition.stick_bonus;
    competition_neutral_deduction: f64 => competition.neutral_deduction;
    competition_score: f64 => competition.competition_score;
    delta: f64 => consistency.delta;
    deduction: f64 => consistency.deduction;
    percentage: u8 => consistency.percentage;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_routes_fields() {
        assert_eq!(
            Edit::from_text(NumericField::ExecutionDeduction, "1,2").unwrap(),
            Edit::SetExecutionDeduction(1.2)
        );
        assert_eq!(
            Edit::from_text(NumericField::CompetitionE, "8.").unwrap(),
            Edit::SetCompetitionE(8.0)
        );
        assert!(Edit::from_text(NumericField::CompetitionD, "").is_err());
    }

    #[test]
    fn test_numeric_field_names() {
        assert_eq!("comp_nd".parse::<NumericField>().unwrap(), NumericField::CompetitionNeutralDeduction);
        assert_eq!(NumericField::ConnectionValue.to_string(), "cv");
    }

    #[test]
    fn test_parse_element_and_group() {
        assert_eq!(
            Edit::parse_element("j:1").unwrap(),
            Edit::ToggleElement {
                letter: Letter::J,
                multiplicity: 1
            }
        );
        assert_eq!(
            Edit::parse_group("IV=1.1").unwrap(),
            Edit::SelectGroupValue {
                group: ElementGroup::IV,
                value: 1.1
            }
        );
        assert!(Edit::parse_element("K:1").is_err());
        assert!(Edit::parse_group("V=0.5").is_err());
    }

    #[test]
    fn test_patch_diff_and_apply() {
        let before = ScoreRecord::default();
        let mut after = before;
        after.score.my_score = 12.8;
        after.consistency.percentage = 55;

        let patch = RecordPatch::diff(&before, &after);
        assert_eq!(patch.changed_fields(), vec!["my_score", "percentage"]);

        let mut target = before;
        target.apply_patch(&patch);
        assert_eq!(target, after);

        assert!(RecordPatch::diff(&after, &after).is_empty());
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = RecordPatch {
            my_score: Some(9.7),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"my_score":9.7}"#);
    }
}
