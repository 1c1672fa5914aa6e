use crate::consts::DEFAULT_BOOTSTRAP_GROUP_VALUE;
use crate::error::{JudgeError, JudgeResult};
use crate::scorer::groups::ElementGroupCatalog;
use crate::scorer::types::{Discipline, ElementGroup, Event};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub session: SessionParams,
    #[command(flatten)]
    pub panel: PanelSettings,
}

/// Which record is scored, and where it lives.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionParams {
    /// Directory of the JSON record store. Records stay in memory when omitted.
    #[arg(long)]
    pub store_dir: Option<String>,
    #[arg(long, default_value = "default")]
    pub record: String,
    #[arg(long, default_value = "mag")]
    pub discipline: Discipline,
    #[arg(long, default_value = "FX")]
    pub event: Event,
    /// Fail instead of creating the record when it is not in the store.
    #[arg(long)]
    pub existing: bool,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            store_dir: None,
            record: "default".to_string(),
            discipline: Discipline::Mag,
            event: Event::Fx,
            existing: false,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Element-group value given to every group when a record first loads with all zeros.
    #[arg(long, default_value_t = DEFAULT_BOOTSTRAP_GROUP_VALUE)]
    pub bootstrap_group_value: f64,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            bootstrap_group_value: DEFAULT_BOOTSTRAP_GROUP_VALUE,
        }
    }
}

impl PanelSettings {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> JudgeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            JudgeError::Config(format!("Failed to read settings '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overrides values that were given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &PanelSettings, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(bootstrap_group_value, "bootstrap_group_value");
    }

    /// The bootstrap value must be selectable in all four groups of the event.
    pub fn validate(&self, discipline: Discipline, event: Event) -> JudgeResult<()> {
        for group in ElementGroup::iter() {
            if !ElementGroupCatalog::is_legal(discipline, event, group, self.bootstrap_group_value) {
                return Err(JudgeError::Config(format!(
                    "bootstrap_group_value {} is not legal for group {} on {} {}",
                    self.bootstrap_group_value, group, discipline, event
                )));
            }
        }
        Ok(())
    }
}
