use thiserror::Error;

use crate::scorer::types::{Discipline, ElementGroup, Event, Letter};

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error(
        "Capacity Exceeded: {letter} x{multiplicity} with {other} elements already selected (max 8)"
    )]
    CapacityExceeded {
        letter: Letter,
        multiplicity: u8,
        other: u8,
    },

    #[error("Illegal Group Value: {value} is not allowed for group {group} ({discipline} {event})")]
    IllegalGroupValue {
        group: ElementGroup,
        value: f64,
        discipline: Discipline,
        event: Event,
    },

    #[error("Invalid Input: enter a valid value ({0})")]
    InvalidInput(String),

    #[error("Unknown Record: {0}")]
    UnknownRecord(String),
}

pub type JudgeResult<T> = Result<T, JudgeError>;
