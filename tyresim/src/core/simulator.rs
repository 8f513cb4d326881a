use crate::core::tyreset::{CompoundProfile, TyreState};
use crate::post::strategy_result::SimulationResult;

/// simulate runs one compound over the full race distance. The compound is driven until its
/// tyre life reaches zero, then a pit stop is forced and a new set of the same compound is
/// fitted.
///
/// Per lap, the lap time is calculated from the wear accumulated before the lap, i.e. the first
/// lap on a fresh set is always driven in the base lap time. The pit stop penalty is added to the
/// total time in the lap in which the tyre life reaches zero.
pub fn simulate(
    compound: &CompoundProfile,
    race_distance: u32,
    pit_stop_time: f64,
) -> SimulationResult {
    let mut tyre_state = TyreState::new();
    let mut lap_times = Vec::with_capacity(race_distance as usize);
    let mut pit_laps = Vec::new();
    let mut total_time = 0.0;

    for lap in 1..=race_distance {
        let lap_time =
            compound.base_lap_time + tyre_state.t_add_tyreset(compound.performance_drop);
        total_time += lap_time;
        lap_times.push(lap_time);

        // clamp happens inside drive_lap, the worn out check must come afterwards
        tyre_state.drive_lap(compound.wear_rate);

        if tyre_state.is_worn_out() {
            total_time += pit_stop_time;
            pit_laps.push(lap);
            tyre_state.fit_new_set();
        }
    }

    SimulationResult {
        lap_times,
        total_time,
        pit_laps,
    }
}
