use approx::assert_relative_eq;
use std::path::PathBuf;
use tyresim::core::handle_strategies::handle_strategies;
use tyresim::core::simulator::simulate;
use tyresim::pre::read_sim_pars::read_sim_pars;

/// Paths carry the process id so that concurrent test runs do not share files.
fn unique_temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}", std::process::id(), name))
}

fn write_parfile(file_name: &str, content: &str) -> PathBuf {
    let path = unique_temp_path(file_name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn parameter_file_drives_all_compounds() {
    let path = write_parfile(
        "tyresim_two_compounds.json",
        r#"{
            "compounds": [
                {"name": "Quali", "wear_rate": 50, "base_lap_time": 80, "performance_drop": 0},
                {"name": "Sprint", "wear_rate": 100, "base_lap_time": 80, "performance_drop": 0.1}
            ],
            "race_distance": 4,
            "track_temperature": 38,
            "pit_stop_time": 20
        }"#,
    );

    let sim_pars = read_sim_pars(&path).unwrap();
    assert_eq!(sim_pars.race_pars.track_temperature, 38.0);

    let results = handle_strategies(&sim_pars, false).unwrap();
    assert_eq!(results.names(), vec!["Quali", "Sprint"]);

    let quali = results.get("Quali").unwrap();
    assert_eq!(quali.lap_times, vec![80.0; 4]);
    assert_relative_eq!(quali.total_time, 360.0);

    let sprint = results.get("Sprint").unwrap();
    assert_eq!(sprint.pit_laps, vec![1, 2, 3, 4]);
    assert_relative_eq!(sprint.total_time, 400.0);

    for compound in sim_pars.compounds.iter() {
        assert_eq!(
            results.get(&compound.name),
            Some(&simulate(compound, 4, 20.0))
        );
    }
}

#[test]
fn results_are_exported_as_text_csv_and_json() {
    let path = write_parfile(
        "tyresim_export.json",
        r#"{
            "compounds": [
                {"name": "Soft", "wear_rate": 1.2, "base_lap_time": 80, "performance_drop": 0.03},
                {"name": "Hard", "wear_rate": 0.6, "base_lap_time": 85, "performance_drop": 0.01}
            ],
            "race_distance": 10
        }"#,
    );
    let results = handle_strategies(&read_sim_pars(&path).unwrap(), true).unwrap();

    let out_dir = unique_temp_path("tyresim_export_out");
    std::fs::create_dir_all(&out_dir).unwrap();

    let txt_path = out_dir.join("last_run.txt");
    results.write_lap_and_total_times_to_file(&txt_path).unwrap();
    let txt = std::fs::read_to_string(&txt_path).unwrap();
    assert!(txt.contains("RESULT: Total race times"));

    let csv_path = out_dir.join("last_run.csv");
    results.write_csv(&csv_path).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "lap,Soft,Hard");
    assert_eq!(lines[1], "1,80.000,85.000");
    assert!(lines[11].starts_with("total,"));

    let json_path = out_dir.join("last_run.json");
    results.write_json(&json_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["Soft"]["lap_times"].as_array().unwrap().len(), 10);
    assert!(json["Hard"]["total_time"].as_f64().unwrap() > 850.0);
}

#[test]
fn empty_compound_list_fails_fast() {
    let path = write_parfile("tyresim_empty.json", r#"{"race_distance": 50}"#);
    let sim_pars = read_sim_pars(&path).unwrap();
    assert!(handle_strategies(&sim_pars, false).is_err());
}

#[test]
fn shipped_dry_race_file_matches_built_in_defaults() {
    let path: PathBuf = [
        env!("CARGO_MANIFEST_DIR"),
        "..",
        "input",
        "parameters",
        "dry_race.json",
    ]
    .iter()
    .collect();

    let sim_pars = read_sim_pars(&path).unwrap();
    assert_eq!(sim_pars, tyresim::pre::read_sim_pars::SimPars::default());
}

#[test]
fn temp_paths_are_unique_per_process() {
    let path = unique_temp_path("tyresim_export_out");
    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(
        file_name,
        format!("{}_tyresim_export_out", std::process::id())
    );
}
