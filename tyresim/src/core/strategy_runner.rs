use crate::core::simulator::simulate;
use crate::core::tyreset::CompoundProfile;
use crate::post::strategy_result::{SimulationResult, StrategyResults};
use helpers::general::InvalidConfiguration;
use rayon::prelude::*;

/// validate checks the race parameters and every compound before any simulation is started. The
/// first violated rule is returned.
pub fn validate(
    compounds: &[CompoundProfile],
    race_distance: u32,
    pit_stop_time: f64,
) -> Result<(), InvalidConfiguration> {
    if compounds.is_empty() {
        return Err(InvalidConfiguration::NoCompounds);
    }
    if race_distance < 1 {
        return Err(InvalidConfiguration::RaceDistance(race_distance));
    }
    // written as negated comparisons so that NaN is rejected as well
    if !(pit_stop_time >= 0.0) || pit_stop_time.is_infinite() {
        return Err(InvalidConfiguration::PitStopTime(pit_stop_time));
    }

    for compound in compounds.iter() {
        if !(compound.wear_rate > 0.0) || compound.wear_rate.is_infinite() {
            return Err(InvalidConfiguration::WearRate {
                name: compound.name.to_owned(),
                value: compound.wear_rate,
            });
        }
        if !(compound.base_lap_time > 0.0) || compound.base_lap_time.is_infinite() {
            return Err(InvalidConfiguration::BaseLapTime {
                name: compound.name.to_owned(),
                value: compound.base_lap_time,
            });
        }
        if !(compound.performance_drop >= 0.0) || compound.performance_drop.is_infinite() {
            return Err(InvalidConfiguration::PerformanceDrop {
                name: compound.name.to_owned(),
                value: compound.performance_drop,
            });
        }
    }

    Ok(())
}

/// run simulates every compound in the given order and collects the results by compound name.
/// If two compounds share a name, the later one wins.
pub fn run(
    compounds: &[CompoundProfile],
    race_distance: u32,
    pit_stop_time: f64,
) -> Result<StrategyResults, InvalidConfiguration> {
    validate(compounds, race_distance, pit_stop_time)?;

    let mut results = StrategyResults::with_capacity(compounds.len());
    for compound in compounds.iter() {
        results.insert(
            &compound.name,
            simulate(compound, race_distance, pit_stop_time),
        );
    }
    Ok(results)
}

/// run_parallel does the same as run but simulates the compounds on the rayon thread pool. Every
/// compound writes into its own slot, the slots are merged in input order afterwards.
pub fn run_parallel(
    compounds: &[CompoundProfile],
    race_distance: u32,
    pit_stop_time: f64,
) -> Result<StrategyResults, InvalidConfiguration> {
    validate(compounds, race_distance, pit_stop_time)?;

    let slots: Vec<SimulationResult> = compounds
        .par_iter()
        .map(|compound| simulate(compound, race_distance, pit_stop_time))
        .collect();

    let mut results = StrategyResults::with_capacity(compounds.len());
    for (compound, result) in compounds.iter().zip(slots) {
        results.insert(&compound.name, result);
    }
    Ok(results)
}
