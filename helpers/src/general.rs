use thiserror::Error;

/// InvalidConfiguration is used if some compound or race parameter does not fulfill the posed
/// requirements, e.g., a race distance of zero laps. It is raised before any simulation work is
/// started.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("Invalid configuration: no tyre compounds supplied")]
    NoCompounds,

    #[error("Invalid configuration: race distance must be at least 1 lap (got {0})")]
    RaceDistance(u32),

    #[error("Invalid configuration: pit stop time must be non-negative (got {0}s)")]
    PitStopTime(f64),

    #[error("Invalid configuration: wear rate of compound {name} must be positive (got {value})")]
    WearRate { name: String, value: f64 },

    #[error(
        "Invalid configuration: base lap time of compound {name} must be positive (got {value}s)"
    )]
    BaseLapTime { name: String, value: f64 },

    #[error(
        "Invalid configuration: performance drop of compound {name} must be non-negative (got {value}s)"
    )]
    PerformanceDrop { name: String, value: f64 },
}

/// min returns the minimum value in the array x.
pub fn min<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> T {
    let &min_val = x.iter().fold(
        &x[0],
        |val_min, val| {
            if val_min < val {
                val_min
            } else {
                val
            }
        },
    );
    min_val
}

/// max returns the maximum value in the array x.
pub fn max<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> T {
    let &max_val = x.iter().fold(
        &x[0],
        |val_max, val| {
            if val_max > val {
                val_max
            } else {
                val
            }
        },
    );
    max_val
}

#[derive(Debug, Clone, Copy)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// argsort returns the indices that would sort an array. The sort is stable, i.e. equal values
/// keep their original order. Incomparable values (NaN) are treated as equal.
pub fn argsort<T: std::cmp::PartialOrd>(x: &[T], order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..x.len()).collect();
    match order {
        SortOrder::Ascending => indices.sort_by(|&a, &b| {
            x[a].partial_cmp(&x[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortOrder::Descending => indices.sort_by(|&a, &b| {
            x[b].partial_cmp(&x[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
    indices
}
