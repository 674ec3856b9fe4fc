use thiserror::Error;

/// Fatal errors raised while transforming an interferogram batch.
///
/// Every variant aborts the whole run; non-fatal conditions travel as
/// [`crate::TransformWarning`] values instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("empty signal, cannot locate the zero path difference")]
    EmptySignal,
    #[error("apodization window size mismatch: signal {signal}, window {window}")]
    SizeMismatch { signal: usize, window: usize },
    #[error("zero filling moved the centerburst: zpd {original}, new zpd {recomputed}")]
    ZpdDrift { original: usize, recomputed: usize },
    #[error("cannot split {len} points into two equal sweeps")]
    OddLength { len: usize },
    #[error("zero-filled length yields {actual} bins but the wavenumber axis has {expected}")]
    AxisMismatch { expected: usize, actual: usize },
    #[error("row length mismatch: expected {expected}, got {actual}")]
    RaggedRows { expected: usize, actual: usize },
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<TransformError>,
    },
}

impl TransformError {
    /// Tag an error with the batch row it occurred on.
    pub(crate) fn for_row(self, row: usize) -> Self {
        TransformError::Row {
            row,
            source: Box::new(self),
        }
    }
}
