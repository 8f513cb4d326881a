pub mod handle_strategies;
pub mod simulator;
pub mod strategy_runner;
pub mod tyreset;
