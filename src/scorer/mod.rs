pub mod consistency;
pub mod engine;
pub mod groups;
pub mod input;
pub mod rounding;
pub mod selection;
pub mod types;

pub use self::consistency::{ConsistencyResult, ConsistencyState};
pub use self::engine::apply_edit;
pub use self::groups::{ElementGroupCatalog, ElementGroupValues};
pub use self::rounding::ScoreRounder;
pub use self::selection::{ElementSelection, ToggleOutcome};
pub use self::types::{Discipline, ElementGroup, Event, Letter};
