use anyhow::Context;
use helpers::general::{argsort, SortOrder};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::io::Write as IoWrite;
use std::path::Path;

/// SimulationResult contains the outcome of simulating one compound over the full race distance.
///
/// * `lap_times` - (s) One entry per lap, pit stop penalties are not included
/// * `total_time` - (s) Sum of all lap times plus all pit stop penalties
/// * `pit_laps` - Laps (1-based) at the end of which a forced pit stop was taken
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SimulationResult {
    pub lap_times: Vec<f64>,
    pub total_time: f64,
    pub pit_laps: Vec<u32>,
}

impl SimulationResult {
    pub fn no_pit_stops(&self) -> usize {
        self.pit_laps.len()
    }

    /// race_times returns the cumulative race time at the end of every lap, including the pit stop
    /// penalties taken so far. The last entry equals the total time up to rounding.
    pub fn race_times(&self, pit_stop_time: f64) -> Vec<f64> {
        let mut race_times = Vec::with_capacity(self.lap_times.len());
        let mut cur_racetime = 0.0;
        let mut pit_laps = self.pit_laps.iter().peekable();

        for (i, lap_time) in self.lap_times.iter().enumerate() {
            cur_racetime += lap_time;
            while pit_laps.next_if(|&&lap| lap as usize == i + 1).is_some() {
                cur_racetime += pit_stop_time;
            }
            race_times.push(cur_racetime);
        }
        race_times
    }
}

/// StrategyResults maps compound names to their simulation results. Iteration follows the order
/// in which the compounds were inserted; inserting a name again replaces the earlier result in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StrategyResults {
    entries: IndexMap<String, SimulationResult>,
}

impl StrategyResults {
    pub fn new() -> StrategyResults {
        StrategyResults {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> StrategyResults {
        StrategyResults {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// insert stores the result of a compound and returns the result it replaced, if any.
    pub fn insert(&mut self, name: &str, result: SimulationResult) -> Option<SimulationResult> {
        self.entries.insert(name.to_owned(), result)
    }

    pub fn get(&self, name: &str) -> Option<&SimulationResult> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SimulationResult)> {
        self.entries
            .iter()
            .map(|(name, result)| (name.as_str(), result))
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| name).collect()
    }

    /// ranking returns the compound names ordered by ascending total race time.
    pub fn ranking(&self) -> Vec<&str> {
        let total_times: Vec<f64> = self.iter().map(|(_, result)| result.total_time).collect();
        argsort(&total_times, SortOrder::Ascending)
            .into_iter()
            .filter_map(|idx| self.entries.get_index(idx))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// fastest returns the name of the compound with the lowest total race time.
    pub fn fastest(&self) -> Option<&str> {
        self.ranking().into_iter().next()
    }

    /// no_laps returns the length of the longest lap time sequence. Results inserted by hand may
    /// differ in length; missing laps are left blank in the tables.
    fn no_laps(&self) -> usize {
        self.entries
            .values()
            .map(|result| result.lap_times.len())
            .max()
            .unwrap_or(0)
    }

    /// format_lap_and_total_times creates the lap time table (one row per lap, one column per
    /// compound) followed by the total times and the ranking.
    pub fn format_lap_and_total_times(&self) -> Result<String, std::fmt::Error> {
        let mut tmp_string_header = String::from("lap, ");
        let mut tmp_string_laptime = String::new();
        let mut tmp_string_totaltime = String::from("tot, ");
        let no_compounds = self.entries.len();

        for (i, (name, result)) in self.entries.iter().enumerate() {
            let sep = if i < no_compounds - 1 { ", " } else { "" };
            write!(&mut tmp_string_header, "{:>9}{}", name, sep)?;
            write!(
                &mut tmp_string_totaltime,
                "{:8.3}s ({} stops){}",
                result.total_time,
                result.no_pit_stops(),
                sep
            )?;
        }

        for lap in 0..self.no_laps() {
            write!(&mut tmp_string_laptime, "{:3}, ", lap + 1)?;

            for (i, result) in self.entries.values().enumerate() {
                let cell = match result.lap_times.get(lap) {
                    Some(lap_time) => format!("{:8.3}s", lap_time),
                    None => format!("{:>9}", "-"),
                };
                if i < no_compounds - 1 {
                    write!(&mut tmp_string_laptime, "{}, ", cell)?;
                } else {
                    writeln!(&mut tmp_string_laptime, "{}", cell)?;
                }
            }
        }

        let mut content = String::new();
        writeln!(&mut content, "RESULT: Lap times")?;
        writeln!(&mut content, "{}", tmp_string_header)?;
        writeln!(&mut content, "{}", tmp_string_laptime)?;
        writeln!(&mut content, "RESULT: Total race times")?;
        writeln!(&mut content, "{}", tmp_string_header)?;
        writeln!(&mut content, "{}", tmp_string_totaltime)?;
        writeln!(&mut content)?;
        writeln!(&mut content, "RESULT: Ranking")?;
        for (pos, name) in self.ranking().iter().enumerate() {
            let total_time = self.get(name).map(|result| result.total_time).unwrap_or(0.0);
            writeln!(&mut content, "{:3}. {} ({:.3}s)", pos + 1, name, total_time)?;
        }
        Ok(content)
    }

    /// print_lap_and_total_times prints the resulting lap and total times to the console output.
    pub fn print_lap_and_total_times(&self) -> anyhow::Result<()> {
        let content = self
            .format_lap_and_total_times()
            .context("Failed to format strategy results!")?;
        print!("{}", content);
        Ok(())
    }

    /// write_lap_and_total_times_to_file writes the same tables as print_lap_and_total_times to a
    /// text file.
    pub fn write_lap_and_total_times_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = self
            .format_lap_and_total_times()
            .context("Failed to format strategy results!")?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)
            .context(format!("Failed to open result file {}!", path.display()))?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// write_csv writes one row per lap with the lap times of all compounds, followed by a row
    /// containing the total times.
    pub fn write_csv(&self, path: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .context(format!("Failed to create CSV file {}!", path.display()))?;

        let mut header = vec!["lap".to_owned()];
        header.extend(self.entries.keys().cloned());
        wtr.write_record(&header)?;

        for lap in 0..self.no_laps() {
            let mut record = vec![(lap + 1).to_string()];
            record.extend(
                self.entries.values().map(|result| {
                    result
                        .lap_times
                        .get(lap)
                        .map(|lap_time| format!("{:.3}", lap_time))
                        .unwrap_or_default()
                }),
            );
            wtr.write_record(&record)?;
        }

        let mut record = vec!["total".to_owned()];
        record.extend(
            self.entries
                .values()
                .map(|result| format!("{:.3}", result.total_time)),
        );
        wtr.write_record(&record)?;
        wtr.flush()?;
        Ok(())
    }

    /// write_json writes the results as a JSON object keyed by compound name.
    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .context(format!("Failed to create JSON file {}!", path.display()))?;
        serde_json::to_writer_pretty(file, self)
            .context(format!("Failed to write JSON file {}!", path.display()))?;
        Ok(())
    }
}
