//! Recording wrapper around the run controller for batch/headless use
//!
//! The interactive front end keeps only the latest generation's trace;
//! this recorder keeps the rolling history and can dump it to CSV for
//! offline inspection, one row per individual per generation.

use std::fs::create_dir_all;
use std::path::Path;

use crate::controller::{RunController, RunSnapshot};
use crate::trace::TrialRecord;
use crate::{ConfigError, DEConfig};

/// Failures while persisting a recorded run.
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create output directory: {0}")]
    OutputDir(std::io::Error),

    #[error("failed to write trace csv: {0}")]
    Csv(#[from] csv::Error),
}

const CSV_HEADER: [&str; 26] = [
    "generation",
    "index",
    "prev_x",
    "prev_y",
    "prev_fitness",
    "a_index",
    "b_index",
    "c_index",
    "a_x",
    "a_y",
    "b_x",
    "b_y",
    "c_x",
    "c_y",
    "mutant_x",
    "mutant_y",
    "source_x",
    "source_y",
    "j_rand",
    "trial_x",
    "trial_y",
    "trial_fitness",
    "accepted",
    "new_x",
    "new_y",
    "fitness_after",
];

/// Accumulates generation-tagged trace records.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    records: Vec<(usize, TrialRecord)>,
    generations: usize,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one generation's trace under its counter value.
    pub fn record_generation(&mut self, generation: usize, trace: &[TrialRecord]) {
        self.records.extend(trace.iter().map(|r| (generation, r.clone())));
        self.generations += 1;
    }

    pub fn num_generations(&self) -> usize {
        self.generations
    }

    pub fn records(&self) -> &[(usize, TrialRecord)] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.generations = 0;
    }

    /// Write all recorded rows to `<output_dir>/<label>.csv` and return
    /// the file path.
    pub fn save_to_csv(&self, label: &str, output_dir: &str) -> Result<String, RecorderError> {
        create_dir_all(output_dir).map_err(RecorderError::OutputDir)?;
        let path = format!("{}/{}.csv", output_dir, label);

        let mut wtr = csv::Writer::from_path(Path::new(&path))?;
        wtr.write_record(CSV_HEADER)?;
        for (generation, r) in &self.records {
            let fitness_after = if r.accepted { r.trial_fitness } else { r.prev_fitness };
            wtr.write_record([
                generation.to_string(),
                r.index.to_string(),
                format!("{:.16}", r.prev_x),
                format!("{:.16}", r.prev_y),
                format!("{:.16}", r.prev_fitness),
                r.a_index.to_string(),
                r.b_index.to_string(),
                r.c_index.to_string(),
                format!("{:.16}", r.a_x),
                format!("{:.16}", r.a_y),
                format!("{:.16}", r.b_x),
                format!("{:.16}", r.b_y),
                format!("{:.16}", r.c_x),
                format!("{:.16}", r.c_y),
                format!("{:.16}", r.mutant_x),
                format!("{:.16}", r.mutant_y),
                r.source_x.as_str().to_string(),
                r.source_y.as_str().to_string(),
                r.j_rand.as_str().to_string(),
                format!("{:.16}", r.trial_x),
                format!("{:.16}", r.trial_y),
                format!("{:.16}", r.trial_fitness),
                r.accepted.to_string(),
                format!("{:.16}", r.new_x),
                format!("{:.16}", r.new_y),
                format!("{:.16}", fitness_after),
            ])?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(path)
    }
}

/// Run `generations` manual steps headlessly, recording every trace,
/// and save the history to `<output_dir>/<label>.csv`.
///
/// Returns the final read-model snapshot and the CSV path. Wraparound
/// applies as in interactive runs: a step taken at the max-iterations
/// boundary restarts the experiment and contributes no trace rows.
pub fn run_recorded(
    label: &str,
    config: DEConfig,
    generations: usize,
    output_dir: &str,
) -> Result<(RunSnapshot, String), RecorderError> {
    let mut controller = RunController::new(config)?;
    let mut recorder = TraceRecorder::new();

    for _ in 0..generations {
        controller.step();
        recorder.record_generation(controller.iteration(), controller.trace());
    }

    let csv_path = recorder.save_to_csv(label, output_dir)?;
    Ok((controller.snapshot(), csv_path))
}
