//! Integration tests for ising-output.

use ising_core::{Lattice, ParameterSet, checkerboard};
use ising_sim::{Observables, Trajectory};
use tempfile::TempDir;

use crate::ResultRecord;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn params(temperature: f64) -> ParameterSet {
    ParameterSet::builder(temperature).size(4).steps(3).burn_in(1).seed(5).build().unwrap()
}

fn ok_record(temperature: f64) -> ResultRecord {
    let run = Trajectory {
        energies:       vec![-32.0, -28.0, -32.0],
        magnetizations: vec![16.0, 14.0, -16.0],
    };
    let obs = Observables::from_trajectory(&run, temperature, 0).unwrap();
    ResultRecord::success(params(temperature), checkerboard(4).unwrap(), run, obs, 0.25, "worker-0")
}

fn failed_record(temperature: f64) -> ResultRecord {
    ResultRecord::failure(params(temperature), "lattice shape mismatch", 0.0, "worker-1")
}

// ── Per-task artifacts ────────────────────────────────────────────────────────

#[cfg(test)]
mod artifact_tests {
    use super::*;
    use crate::artifacts::{data_path, lattice_path, params_path};
    use crate::{OutputError, load_task_artifacts, save_task_artifacts};

    #[test]
    fn files_created_with_prefix() {
        let dir = tmp();
        let rec = ok_record(1.5);
        let path = save_task_artifacts(
            dir.path(), "ising_T1.500", &rec.parameters,
            rec.lattice.as_ref().unwrap(), &rec.energies, &rec.magnetizations,
        )
        .unwrap();
        assert!(path.is_absolute());
        assert!(lattice_path(dir.path(), "ising_T1.500").is_file());
        assert!(data_path(dir.path(), "ising_T1.500").is_file());
        assert!(params_path(dir.path(), "ising_T1.500").is_file());
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = tmp();
        let initial = Lattice::from_rows(3, &[vec![1, -1, 1], vec![1, 1, -1], vec![-1, -1, -1]]).unwrap();
        let parameters = ParameterSet::builder(2.269)
            .size(3)
            .steps(4)
            .burn_in(2)
            .initial(initial)
            .persist_to(dir.path())
            .seed(17)
            .build()
            .unwrap();
        let lattice = Lattice::from_rows(3, &[vec![-1, -1, 1], vec![1, 1, 1], vec![-1, 1, -1]]).unwrap();
        let energies = vec![-6.0, -2.0, 2.0, -10.0];
        let magnetizations = vec![1.0, -3.0, 3.0, 1.0];

        save_task_artifacts(dir.path(), "run", &parameters, &lattice, &energies, &magnetizations).unwrap();
        let back = load_task_artifacts(dir.path(), "run").unwrap();

        assert_eq!(back.lattice, lattice);
        assert_eq!(back.energies, energies);
        assert_eq!(back.magnetizations, magnetizations);
        assert_eq!(back.parameters, parameters);
    }

    #[test]
    fn missing_artifacts_are_not_found() {
        let dir = tmp();
        assert!(matches!(
            load_task_artifacts(dir.path(), "nothing"),
            Err(OutputError::NotFound(_)),
        ));
    }

    #[test]
    fn params_json_uses_nested_rows() {
        let dir = tmp();
        let parameters = ParameterSet::builder(1.0)
            .size(2)
            .initial(Lattice::from_rows(2, &[vec![1, -1], vec![-1, 1]]).unwrap())
            .build()
            .unwrap();
        let lattice = Lattice::uniform(2, 1).unwrap();
        save_task_artifacts(dir.path(), "p", &parameters, &lattice, &[], &[]).unwrap();

        let text = std::fs::read_to_string(params_path(dir.path(), "p")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["initial_state"], serde_json::json!([[1, -1], [-1, 1]]));
        assert_eq!(json["temperature"], serde_json::json!(1.0));
        assert_eq!(json["size"], serde_json::json!(2));
    }
}

// ── Parameter set serialized form ─────────────────────────────────────────────

#[cfg(test)]
mod parameter_json_tests {
    use ising_core::{IsingError, ParameterSet};

    fn parse(text: &str) -> Result<ParameterSet, serde_json::Error> {
        serde_json::from_str(text)
    }

    fn message(text: &str) -> String {
        parse(text).unwrap_err().to_string()
    }

    #[test]
    fn minimal_record_gets_defaults() {
        let p = parse(r#"{ "temperature": 2.5 }"#).unwrap();
        assert_eq!(p.size(), 100);
        assert_eq!(p.steps(), 1000);
        assert_eq!(p.burn_in(), 100);
        assert!(p.persist().is_none());
    }

    #[test]
    fn save_flag_uses_default_directory_and_prefix() {
        let p = parse(r#"{ "temperature": 2.0, "save_results": true }"#).unwrap();
        let persist = p.persist().unwrap();
        assert_eq!(persist.directory, std::path::PathBuf::from("results"));
        assert_eq!(persist.prefix, "ising_T2.000");
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(message(r#"{ "temperature": 2.0, "colour": "red" }"#).contains("colour"));
    }

    #[test]
    fn negative_counts_rejected() {
        let expected = IsingError::invalid("steps must be >= 0, got -5").to_string();
        assert!(message(r#"{ "temperature": 2.0, "steps": -5 }"#).contains(&expected));
        assert!(message(r#"{ "temperature": 2.0, "burn_in": -1 }"#).contains("burn_in"));
    }

    #[test]
    fn non_positive_temperature_rejected() {
        assert!(message(r#"{ "temperature": 0.0 }"#).contains("temperature"));
    }

    #[test]
    fn wrong_shaped_initial_state_rejected() {
        let expected = IsingError::ShapeMismatch { expected: 3, rows: 2, cols: 2 }.to_string();
        let text = r#"{ "temperature": 1.0, "size": 3, "initial_state": [[1, 1], [1, 1]] }"#;
        assert!(message(text).contains(&expected));
    }

    #[test]
    fn round_trip() {
        let p = ParameterSet::builder(1.75).size(5).steps(9).seed(3).prefix("x").build().unwrap();
        let text = serde_json::to_string(&p).unwrap();
        assert_eq!(parse(&text).unwrap(), p);
    }
}

// ── Batch snapshots ───────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;
    use crate::{BatchSink, JsonBatchWriter, OutputError, batch_file_name, load_batches};

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(batch_file_name(1), "batch_0001.json");
        assert_eq!(batch_file_name(42), "batch_0042.json");
    }

    #[test]
    fn load_sorts_by_temperature_across_batches() {
        let dir = tmp();
        let mut w = JsonBatchWriter::new(dir.path()).unwrap();
        w.write_batch(1, &[ok_record(3.0), ok_record(1.0)]).unwrap();
        w.write_batch(2, &[failed_record(2.0)]).unwrap();
        w.finish().unwrap();
        assert_eq!(w.written().len(), 2);
        assert!(dir.path().join("batch_0002.json").is_file());

        let records = load_batches(dir.path()).unwrap();
        let temps: Vec<f64> = records.iter().map(ResultRecord::temperature).collect();
        assert_eq!(temps, [1.0, 2.0, 3.0]);
        assert!(!records[1].success);
        assert_eq!(records[1].error.as_deref(), Some("lattice shape mismatch"));
        assert_eq!(records[0], ok_record(1.0));
    }

    #[test]
    fn lattice_stored_as_nested_rows() {
        let dir = tmp();
        let mut w = JsonBatchWriter::new(dir.path()).unwrap();
        w.write_batch(1, &[ok_record(1.0)]).unwrap();

        let text = std::fs::read_to_string(dir.path().join("batch_0001.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json[0]["lattice"][1], serde_json::json!([-1, 1, -1, 1]));
        assert_eq!(json[0]["observables"]["mean_magnetization"], serde_json::json!(46.0 / 3.0));
        assert_eq!(json[0]["worker"], "worker-0");
    }

    #[test]
    fn missing_directory_is_not_found() {
        let dir = tmp();
        let missing = dir.path().join("nope");
        assert!(matches!(load_batches(&missing), Err(OutputError::NotFound(p)) if p == missing));
    }

    #[test]
    fn directory_without_batches_is_not_found() {
        let dir = tmp();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        assert!(matches!(load_batches(dir.path()), Err(OutputError::NotFound(_))));
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use chrono::Utc;

    use super::*;
    use crate::{SUMMARY_CSV_FILE, SweepMetadata, SweepSummary, write_summary_csv};

    fn summary() -> SweepSummary {
        SweepSummary {
            temperatures:         vec![1.0, 2.0],
            magnetizations:       vec![15.5, 9.0],
            magnetization_stds:   vec![0.5, 3.0],
            energies:             vec![-31.0, -20.0],
            energy_stds:          vec![1.0, 4.0],
            specific_heats:       vec![1.0, 4.0],
            susceptibilities:     vec![0.25, 2.0],
            energy_slopes:        vec![11.0, 11.0],
            magnetization_slopes: vec![-6.5, -6.5],
            metadata: Some(SweepMetadata {
                t_critical: ising_core::T_CRITICAL,
                num_points: 2,
                batch_size: 1,
                size:       4,
                steps:      3,
                burn_in:    1,
                timestamp:  Utc::now(),
            }),
        }
    }

    #[test]
    fn json_round_trip() {
        let dir = tmp();
        let s = summary();
        let path = s.write_json(dir.path()).unwrap();
        assert!(path.ends_with("phase_transition_analysis.json"));
        assert_eq!(SweepSummary::read_json(&path).unwrap(), s);
    }

    #[test]
    fn metadata_omitted_when_absent() {
        let mut s = summary();
        s.metadata = None;
        let text = serde_json::to_string(&s).unwrap();
        assert!(!text.contains("metadata"));
        let back: SweepSummary = serde_json::from_str(&text).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let text = serde_json::to_string(&summary()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let ts = json["metadata"]["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn csv_one_row_per_temperature() {
        let dir = tmp();
        write_summary_csv(dir.path(), &summary()).unwrap();

        let mut rdr = ::csv::Reader::from_path(dir.path().join(SUMMARY_CSV_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, crate::csv::SUMMARY_CSV_HEADER);

        let rows: Vec<::csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "2");
        assert_eq!(&rows[1][1], "-20");
        assert_eq!(&rows[0][8], "-6.5");
    }

    #[test]
    fn csv_blank_slopes_when_absent() {
        let dir = tmp();
        let mut s = summary();
        s.energy_slopes.clear();
        s.magnetization_slopes.clear();
        write_summary_csv(dir.path(), &s).unwrap();

        let mut rdr = ::csv::Reader::from_path(dir.path().join(SUMMARY_CSV_FILE)).unwrap();
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(&row[7], "");
    }
}
