use std::fs::File;

use anyhow::{Context, Result};
use rand::Rng;

use mertz_pipeline::{
    InterferogramBatch, SweepMode, TransformConfig, TransformPipeline, SWEEP_TOLERANCE,
};

/// Synthetic interferogram: a handful of damped cosines peaking at `zpd`,
/// with a little measurement noise on top.
fn synthetic_row(len: usize, zpd: usize, rng: &mut impl Rng) -> Vec<f64> {
    let bands = [(0.25, 1.0), (0.4, 0.6), (0.11, 0.3)];
    (0..len)
        .map(|i| {
            let x = i as f64 - zpd as f64;
            let signal: f64 = bands
                .iter()
                .map(|&(freq, amp)| amp * (freq * x).cos() * (-x.abs() / 180.0).exp())
                .sum();
            signal + rng.gen_range(-0.01..0.01)
        })
        .collect()
}

fn load_config() -> Result<TransformConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("cannot open {path}"))?;
            serde_json::from_reader(file).with_context(|| format!("cannot parse {path}"))
        }
        None => Ok(TransformConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = load_config()?;

    let mut rng = rand::thread_rng();
    let rows: Vec<Vec<f64>> = (0..4).map(|_| synthetic_row(2048, 1024, &mut rng)).collect();
    let batch = InterferogramBatch::from_rows(&rows)?;

    let first = batch.row(0).to_vec();
    let mode = mertz_pipeline::determine_sweeps(&first, SWEEP_TOLERANCE)?;
    println!(
        "{} {} interferogram(s), {} points each",
        batch.num_rows(),
        mode,
        batch.samples_per_row()
    );
    if mode == SweepMode::ForwardBackward {
        println!("sweep pairs will be averaged after independent transforms");
    }

    let output = TransformPipeline::new(config).run(&batch)?;
    let axis = &output.wavenumbers;
    println!(
        "{} spectra over {} wavenumbers ({:.2} to {:.2} cm^-1)",
        output.num_spectra(),
        axis.len(),
        axis.first().copied().unwrap_or(0.0),
        axis.last().copied().unwrap_or(0.0)
    );
    for warning in &output.warnings {
        println!("warning: {warning}");
    }
    Ok(())
}
