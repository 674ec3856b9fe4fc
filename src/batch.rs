use std::fmt;

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::TransformError;

/// One batch of raw interferograms: rows are observations, columns are
/// samples. Equal row length is guaranteed by the 2D container.
#[derive(Clone, Debug)]
pub struct InterferogramBatch {
    pub samples: Array2<f64>,
}

impl InterferogramBatch {
    pub fn new(samples: Array2<f64>) -> Self {
        Self { samples }
    }

    /// Build a batch from per-row vectors. All rows must share one length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, TransformError> {
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        for row in rows {
            if row.len() != n_cols {
                return Err(TransformError::RaggedRows {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let samples = Array2::from_shape_vec((rows.len(), n_cols), flat)
            .expect("row-major data matches its own shape");
        Ok(Self { samples })
    }

    pub fn num_rows(&self) -> usize {
        self.samples.nrows()
    }

    pub fn samples_per_row(&self) -> usize {
        self.samples.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.samples.row(index)
    }

    /// A batch with rows but no samples cannot be transformed.
    pub fn validate(&self) -> Result<(), TransformError> {
        if !self.is_empty() && self.samples_per_row() == 0 {
            return Err(TransformError::EmptySignal);
        }
        Ok(())
    }
}

/// Non-fatal conditions of a run; collected and returned, never thrown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformWarning {
    /// The requested phase resolution exceeds what the interferogram can
    /// provide; the full double-sided range was used instead.
    PhaseResolutionTooLow { row: usize },
}

impl fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformWarning::PhaseResolutionTooLow { row } => write!(
                f,
                "row {row}: phase resolution limit too low, using the entire interferogram"
            ),
        }
    }
}

/// Result of one pipeline run: a shared wavenumber axis, one spectrum row
/// per logical observation, and any warnings gathered along the way.
#[derive(Clone, Debug)]
pub struct SpectrumBatch {
    pub wavenumbers: Array1<f64>,
    pub spectra: Array2<f64>,
    pub warnings: Vec<TransformWarning>,
}

impl SpectrumBatch {
    pub fn empty() -> Self {
        Self {
            wavenumbers: Array1::zeros(0),
            spectra: Array2::zeros((0, 0)),
            warnings: Vec::new(),
        }
    }

    pub fn num_spectra(&self) -> usize {
        self.spectra.nrows()
    }
}
