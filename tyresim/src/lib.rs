//! Lap-by-lap tyre compound strategy calculator.
//!
//! Every compound is driven until its tyre life is used up, then a pit stop is forced and a new
//! set of the same compound is fitted. The total race times of the compounds can then be
//! compared.

pub mod core;
pub mod post;
pub mod pre;
