use ndarray::{s, Array1, Array2};

use crate::batch::{InterferogramBatch, SpectrumBatch, TransformWarning};
use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::fft::rfft_wavenumbers;
use crate::sweep::{determine_sweeps, SweepMode, SWEEP_TOLERANCE};
use crate::transform::transform_row;
use crate::zerofill::zero_filled_len;

/// Batch driver: classifies the sweep mode once, transforms every row in
/// input order, and applies the optional output band limit.
///
/// A run is atomic: any fatal row error aborts the whole batch and no
/// partial spectra are returned.
pub struct TransformPipeline {
    config: TransformConfig,
}

impl TransformPipeline {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn run(&self, batch: &InterferogramBatch) -> Result<SpectrumBatch, TransformError> {
        batch.validate()?;
        if batch.is_empty() {
            return Ok(SpectrumBatch::empty());
        }

        // Sweep mode is decided from the first row and applied to the whole
        // batch; rows are never reclassified individually, so a run is not a
        // plain map over rows.
        let first = batch.row(0).to_vec();
        let mode = determine_sweeps(&first, SWEEP_TOLERANCE).map_err(|e| e.for_row(0))?;

        let unit_len = match mode {
            SweepMode::Single => batch.samples_per_row(),
            SweepMode::ForwardBackward => batch.samples_per_row() / 2,
        };
        // The axis depends only on the shared row length and dx. Computed
        // once here, read-only for the rest of the run.
        let wavenumbers = rfft_wavenumbers(
            zero_filled_len(unit_len, self.config.zero_fill_factor),
            self.config.dx,
        );

        let mut warnings = Vec::new();
        let mut flat = Vec::with_capacity(batch.num_rows() * wavenumbers.len());
        for (index, row) in batch.samples.outer_iter().enumerate() {
            let row = row.to_vec();
            let spectrum = transform_row(&row, mode, &wavenumbers, &self.config)
                .map_err(|e| e.for_row(index))?;
            if spectrum.resolution_clamped {
                if warnings.is_empty() {
                    log::warn!(
                        "phase resolution limit too low, using the entire interferogram"
                    );
                }
                warnings.push(TransformWarning::PhaseResolutionTooLow { row: index });
            }
            flat.extend(spectrum.values.iter());
        }
        let spectra = Array2::from_shape_vec((batch.num_rows(), wavenumbers.len()), flat)
            .expect("each row produced one axis-length spectrum");

        let (wavenumbers, spectra) = if self.config.limit_output {
            limit_band(wavenumbers, spectra, self.config.sorted_output_band())
        } else {
            (wavenumbers, spectra)
        };

        Ok(SpectrumBatch {
            wavenumbers,
            spectra,
            warnings,
        })
    }
}

/// Slice the axis and every spectrum row to the `[low, high)` band, located
/// on the ascending axis by binary search.
fn limit_band(
    axis: Array1<f64>,
    spectra: Array2<f64>,
    (low, high): (f64, f64),
) -> (Array1<f64>, Array2<f64>) {
    let slice = axis.as_slice().expect("axis is contiguous");
    let start = slice.partition_point(|&v| v < low);
    let end = slice.partition_point(|&v| v < high);
    (
        axis.slice(s![start..end]).to_owned(),
        spectra.slice(s![.., start..end]).to_owned(),
    )
}
