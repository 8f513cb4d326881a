use serde::{Deserialize, Serialize};

/// Tyre life of a fresh set in percent.
pub const FULL_TYRE_LIFE: f64 = 100.0;

/// * `name` - Compound name, e.g. Soft (unique within a run)
/// * `wear_rate` - (%/lap) Tyre life consumed per lap
/// * `base_lap_time` - (s) Lap time on a fresh set, i.e. at 100% tyre life
/// * `performance_drop` - (s/%) Time added per lap for each percentage point of wear already
/// accumulated
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CompoundProfile {
    pub name: String,
    pub wear_rate: f64,
    pub base_lap_time: f64,
    pub performance_drop: f64,
}

impl CompoundProfile {
    pub fn new(name: &str, wear_rate: f64, base_lap_time: f64, performance_drop: f64) -> Self {
        CompoundProfile {
            name: name.to_owned(),
            wear_rate,
            base_lap_time,
            performance_drop,
        }
    }
}

/// TyreState tracks the remaining life of the set currently fitted. It lives for a single
/// compound simulation only.
#[derive(Debug, Clone, PartialEq)]
pub struct TyreState {
    remaining_tyre: f64,
}

impl Default for TyreState {
    fn default() -> Self {
        TyreState::new()
    }
}

impl TyreState {
    pub fn new() -> TyreState {
        TyreState {
            remaining_tyre: FULL_TYRE_LIFE,
        }
    }

    pub fn remaining_tyre(&self) -> f64 {
        self.remaining_tyre
    }

    /// t_add_tyreset returns the current time loss due to tyre wear, based on the wear accumulated
    /// before the lap is driven.
    pub fn t_add_tyreset(&self, performance_drop: f64) -> f64 {
        (FULL_TYRE_LIFE - self.remaining_tyre) * performance_drop
    }

    /// drive_lap consumes one lap of tyre life. The remaining life is clamped at zero.
    pub fn drive_lap(&mut self, wear_rate: f64) {
        self.remaining_tyre = (self.remaining_tyre - wear_rate).max(0.0);
    }

    /// The set is worn out only at exactly zero life, which the clamp in drive_lap guarantees
    /// once the wear would drive it negative.
    pub fn is_worn_out(&self) -> bool {
        self.remaining_tyre == 0.0
    }

    /// fit_new_set resets the tyre life after a pit stop.
    pub fn fit_new_set(&mut self) {
        self.remaining_tyre = FULL_TYRE_LIFE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fresh_set_has_no_time_loss() {
        let tyre_state = TyreState::new();
        assert_eq!(tyre_state.remaining_tyre(), FULL_TYRE_LIFE);
        assert_eq!(tyre_state.t_add_tyreset(0.03), 0.0);
    }

    #[test]
    fn time_loss_grows_with_wear() {
        let mut tyre_state = TyreState::new();
        tyre_state.drive_lap(10.0);
        assert_relative_eq!(tyre_state.t_add_tyreset(0.05), 0.5);
        tyre_state.drive_lap(10.0);
        assert_relative_eq!(tyre_state.t_add_tyreset(0.05), 1.0);
    }

    #[test]
    fn wear_is_clamped_at_zero() {
        let mut tyre_state = TyreState::new();
        tyre_state.drive_lap(30.0);
        tyre_state.drive_lap(30.0);
        tyre_state.drive_lap(30.0);
        assert!(!tyre_state.is_worn_out());
        tyre_state.drive_lap(30.0);
        assert_eq!(tyre_state.remaining_tyre(), 0.0);
        assert!(tyre_state.is_worn_out());
    }

    #[test]
    fn new_set_restores_full_life() {
        let mut tyre_state = TyreState::new();
        tyre_state.drive_lap(150.0);
        assert!(tyre_state.is_worn_out());
        tyre_state.fit_new_set();
        assert_eq!(tyre_state, TyreState::new());
    }
}
