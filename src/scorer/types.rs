use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Difficulty letter of a counted element, ordered lowest to highest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
}

impl Letter {
    pub const ALL: [Letter; 10] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::H,
        Letter::I,
        Letter::J,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Difficulty weight in tenths: A = 1 (0.1) up to J = 10 (1.0).
    #[inline(always)]
    pub fn weight_tenths(self) -> i64 {
        self as i64 + 1
    }
}

/// One of the four element-group requirements.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ElementGroup {
    I,
    II,
    III,
    IV,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// Men's artistic gymnastics.
    #[default]
    Mag,
    /// Women's artistic gymnastics.
    Wag,
}

impl Discipline {
    #[inline(always)]
    pub fn is_mag(self) -> bool {
        self == Discipline::Mag
    }
}

/// Apparatus code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Event {
    /// Floor exercise.
    #[default]
    Fx,
    /// Pommel horse.
    Ph,
    /// Still rings.
    Sr,
    /// Vault.
    Vt,
    /// Parallel bars.
    Pb,
    /// Horizontal bar.
    Hb,
    /// Uneven bars.
    Ub,
    /// Balance beam.
    Bb,
}
