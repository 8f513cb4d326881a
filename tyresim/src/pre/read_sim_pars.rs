use crate::core::tyreset::CompoundProfile;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::Path;

/// * `race_distance` - Number of laps to simulate
/// * `track_temperature` - (deg C) Track temperature, reported only and not used in the tyre model
/// * `pit_stop_time` - (s) Time loss of a forced pit stop
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RacePars {
    #[serde(default = "default_race_distance")]
    pub race_distance: u32,
    #[serde(default = "default_track_temperature")]
    pub track_temperature: f64,
    #[serde(default = "default_pit_stop_time")]
    pub pit_stop_time: f64,
}

fn default_race_distance() -> u32 {
    50
}

fn default_track_temperature() -> f64 {
    30.0
}

fn default_pit_stop_time() -> f64 {
    20.0
}

impl Default for RacePars {
    fn default() -> Self {
        RacePars {
            race_distance: default_race_distance(),
            track_temperature: default_track_temperature(),
            pit_stop_time: default_pit_stop_time(),
        }
    }
}

/// SimPars is used to store the compounds to compare together with the race parameters. In the
/// parameter file the race parameters sit next to the compound list.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SimPars {
    #[serde(default)]
    pub compounds: Vec<CompoundProfile>,
    #[serde(flatten)]
    pub race_pars: RacePars,
}

impl Default for SimPars {
    /// Soft, medium and hard compound over a 50 lap race.
    fn default() -> Self {
        SimPars {
            compounds: vec![
                CompoundProfile::new("Soft", 1.2, 80.0, 0.03),
                CompoundProfile::new("Medium", 0.9, 82.0, 0.02),
                CompoundProfile::new("Hard", 0.6, 85.0, 0.01),
            ],
            race_pars: RacePars::default(),
        }
    }
}

/// read_sim_pars reads the JSON file and decodes the JSON string into the simulation parameters
/// struct.
pub fn read_sim_pars(filepath: &Path) -> anyhow::Result<SimPars> {
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}
