pub mod strategy_result;
