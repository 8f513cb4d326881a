use anyhow::Context;
use clap::Parser;
use helpers::general::{max, min};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use tyresim::core::handle_strategies::handle_strategies;
use tyresim::post::strategy_result::StrategyResults;
use tyresim::pre::read_sim_pars::{read_sim_pars, RacePars, SimPars};
use tyresim::pre::sim_opts::SimOpts;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(env_filter).with_target(false).init();
}

/// export_results_plot draws the lap times of all compounds (upper half) and their total race
/// times (lower half) into a PNG file in the output directory.
fn export_results_plot(
    results: &StrategyResults,
    race_pars: &RacePars,
    out_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let out_path = out_dir.join(format!("strategy_plot_{}.png", ts));

    let all_laptimes: Vec<f64> = results
        .iter()
        .flat_map(|(_, result)| result.lap_times.iter().copied())
        .collect();
    if all_laptimes.is_empty() {
        anyhow::bail!("No lap times available for plotting!");
    }
    let mut y_min = min(&all_laptimes);
    let mut y_max = max(&all_laptimes);
    let margin = ((y_max - y_min) * 0.05).max(0.5);
    y_min -= margin;
    y_max += margin;

    let root = BitMapBackend::new(&out_path, (1400, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(450);

    // LAP TIMES -----------------------------------------------------------------------------------
    let mut chart = ChartBuilder::on(&upper)
        .caption("Lap Times Over Race Distance", ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1u32..race_pars.race_distance.max(2), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Lap")
        .y_desc("Lap Time (s)")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    let palette = Palette99::pick;
    for (i, (name, result)) in results.iter().enumerate() {
        let series = result
            .lap_times
            .iter()
            .enumerate()
            .map(|(lap, &laptime)| (lap as u32 + 1, laptime));

        chart
            .draw_series(LineSeries::new(series, palette(i)))?
            .label(format!("{} Lap Times", name))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], palette(i)));

        // mark the laps that ended with a forced pit stop
        chart.draw_series(result.pit_laps.iter().map(|&lap| {
            Circle::new(
                (lap, result.lap_times[lap as usize - 1]),
                4,
                palette(i).filled(),
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(("sans-serif", 16))
        .position(plotters::chart::SeriesLabelPosition::UpperLeft)
        .draw()?;

    // TOTAL TIMES ---------------------------------------------------------------------------------
    let names = results.names();
    let total_times: Vec<f64> = results.iter().map(|(_, result)| result.total_time).collect();

    let mut bar_chart = ChartBuilder::on(&lower)
        .caption(
            format!(
                "Total Race Time Per Compound ({} laps, track {:.1} degC)",
                race_pars.race_distance, race_pars.track_temperature
            ),
            ("sans-serif", 24).into_font(),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..names.len()).into_segmented(), 0.0..max(&total_times) * 1.05)?;

    bar_chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Compound")
        .y_desc("Total Time (s)")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => names
                .get(*idx)
                .map(|name| name.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    bar_chart.draw_series(
        Histogram::vertical(&bar_chart)
            .style(RGBColor(135, 206, 235).filled())
            .margin(20)
            .data(total_times.iter().enumerate().map(|(idx, &t)| (idx, t))),
    )?;

    root.present()?;
    Ok(out_path.clone())
}

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get simulation options from the command line arguments
    let sim_opts: SimOpts = SimOpts::parse();
    init_logging(sim_opts.debug);

    // get simulation parameters
    let sim_pars = if let Some(parfile_path) = &sim_opts.parfile_path {
        info!("Reading simulation parameters from {:?}", parfile_path);
        read_sim_pars(parfile_path)?
    } else {
        info!("No parameter file provided, using the built-in soft, medium and hard compounds");
        SimPars::default()
    };

    info!(
        "Simulating {} compounds over {} laps (track temperature {:.1} degC, pit stop time {:.1}s)",
        sim_pars.compounds.len(),
        sim_pars.race_pars.race_distance,
        sim_pars.race_pars.track_temperature,
        sim_pars.race_pars.pit_stop_time
    );

    // EXECUTION -----------------------------------------------------------------------------------
    let t_start = Instant::now();
    let results = handle_strategies(&sim_pars, sim_opts.parallel)?;
    info!("Execution time: {}ms", t_start.elapsed().as_millis());

    // POST-PROCESSING -----------------------------------------------------------------------------
    results.print_lap_and_total_times()?;

    let out_dir = sim_opts.output_dir.as_path();
    std::fs::create_dir_all(out_dir).context(format!(
        "Failed to create output directory {}!",
        out_dir.display()
    ))?;

    let txt_path = out_dir.join("last_run.txt");
    results.write_lap_and_total_times_to_file(&txt_path)?;
    info!("Results written to {}", txt_path.display());

    if sim_opts.csv {
        let csv_path = out_dir.join("last_run.csv");
        results.write_csv(&csv_path)?;
        info!("CSV written to {}", csv_path.display());
    }

    if sim_opts.json {
        let json_path = out_dir.join("last_run.json");
        results.write_json(&json_path)?;
        info!("JSON written to {}", json_path.display());
    }

    if !sim_opts.no_plot {
        match export_results_plot(&results, &sim_pars.race_pars, out_dir) {
            Ok(path) => info!("Chart saved to {}", path.display()),
            Err(e) => warn!("Could not export results chart: {:#}", e),
        }
    }

    if let Some(name) = results.fastest() {
        info!("Fastest compound: {}", name);
    }

    Ok(())
}
