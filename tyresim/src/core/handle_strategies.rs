use crate::core::strategy_runner::{run, run_parallel, validate};
use crate::post::strategy_result::StrategyResults;
use crate::pre::read_sim_pars::SimPars;
use anyhow::Context;
use tracing::{debug, info};

/// handle_strategies simulates every compound of the inserted parameters, and returns the
/// results for post-processing.
pub fn handle_strategies(sim_pars: &SimPars, parallel: bool) -> anyhow::Result<StrategyResults> {
    let race_pars = &sim_pars.race_pars;

    validate(
        &sim_pars.compounds,
        race_pars.race_distance,
        race_pars.pit_stop_time,
    )
    .context("Strategy simulation was aborted!")?;

    for compound in sim_pars.compounds.iter() {
        info!("Simulating strategy for {} compound...", compound.name);
    }

    let results = if parallel {
        run_parallel(
            &sim_pars.compounds,
            race_pars.race_distance,
            race_pars.pit_stop_time,
        )
    } else {
        run(
            &sim_pars.compounds,
            race_pars.race_distance,
            race_pars.pit_stop_time,
        )
    }
    .context("Strategy simulation was aborted!")?;

    for (name, result) in results.iter() {
        debug!(
            compound = name,
            total_time = result.total_time,
            pit_laps = ?result.pit_laps,
            "Finished simulation"
        );
    }

    Ok(results)
}
