use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::peak::peak_search;

/// How many samples the centerburst may sit away from its expected position
/// before two positions stop counting as "the same". Forward and backward
/// sweep bursts never line up exactly.
pub const SWEEP_TOLERANCE: usize = 25;

/// Acquisition mode of an interferogram row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepMode {
    /// One scan per row.
    Single,
    /// Two scans per row, forward then backward, averaged after transform.
    ForwardBackward,
}

impl fmt::Display for SweepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepMode::Single => write!(f, "Single"),
            SweepMode::ForwardBackward => write!(f, "Forward-Backward"),
        }
    }
}

/// Classify a row as single-sweep or forward-backward double-sweep from the
/// symmetry of its centerburst positions.
///
/// Only the first row of a batch is inspected; the whole batch is assumed to
/// have been collected the same way.
pub fn determine_sweeps(row: &[f64], tolerance: usize) -> Result<SweepMode, TransformError> {
    let zpd = peak_search(row)?;
    let middle = row.len() / 2;
    if zpd.abs_diff(middle) <= tolerance {
        // Burst near the middle: single symmetric sweep.
        return Ok(SweepMode::Single);
    }
    let (forward, backward) = match split_sweeps(row) {
        Ok(halves) => halves,
        // Odd number of points cannot hold two sweeps; probably single.
        Err(TransformError::OddLength { .. }) => return Ok(SweepMode::Single),
        Err(other) => return Err(other),
    };
    let zpd1 = peak_search(forward)?;
    let backward: Vec<f64> = backward.iter().rev().copied().collect();
    let zpd2 = peak_search(&backward)?;
    if zpd1.abs_diff(zpd2) <= tolerance {
        Ok(SweepMode::ForwardBackward)
    } else {
        // Asymmetric single sweep.
        Ok(SweepMode::Single)
    }
}

/// Split a double-sweep row into its forward and (still unreversed) backward
/// halves.
pub fn split_sweeps(row: &[f64]) -> Result<(&[f64], &[f64]), TransformError> {
    if row.len() % 2 != 0 {
        return Err(TransformError::OddLength { len: row.len() });
    }
    Ok(row.split_at(row.len() / 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burst_at(len: usize, peak: usize) -> Vec<f64> {
        let mut row = vec![0.1; len];
        row[peak] = 4.0;
        row
    }

    #[test]
    fn centered_burst_is_single() {
        let row = burst_at(256, 128);
        assert_eq!(
            determine_sweeps(&row, SWEEP_TOLERANCE).unwrap(),
            SweepMode::Single
        );
    }

    #[test]
    fn burst_within_tolerance_of_middle_is_single() {
        let row = burst_at(256, 128 + SWEEP_TOLERANCE);
        assert_eq!(
            determine_sweeps(&row, SWEEP_TOLERANCE).unwrap(),
            SweepMode::Single
        );
    }

    #[test]
    fn mirrored_halves_are_forward_backward() {
        // Forward sweep with an early burst, then the same sweep reversed.
        let half = burst_at(128, 10);
        let mut row = half.clone();
        row.extend(half.iter().rev());
        assert_eq!(
            determine_sweeps(&row, SWEEP_TOLERANCE).unwrap(),
            SweepMode::ForwardBackward
        );
    }

    #[test]
    fn asymmetric_single_sweep_stays_single() {
        // Early burst, but the second half peaks somewhere unrelated.
        let mut row = burst_at(256, 10);
        row[200] = 3.9;
        assert_eq!(
            determine_sweeps(&row, SWEEP_TOLERANCE).unwrap(),
            SweepMode::Single
        );
    }

    #[test]
    fn odd_length_with_offcenter_burst_falls_back_to_single() {
        let row = burst_at(257, 10);
        assert_eq!(
            determine_sweeps(&row, SWEEP_TOLERANCE).unwrap(),
            SweepMode::Single
        );
    }

    #[test]
    fn split_rejects_odd_length() {
        assert_eq!(
            split_sweeps(&[1.0, 2.0, 3.0]).unwrap_err(),
            TransformError::OddLength { len: 3 }
        );
    }

    #[test]
    fn mode_labels() {
        assert_eq!(SweepMode::Single.to_string(), "Single");
        assert_eq!(SweepMode::ForwardBackward.to_string(), "Forward-Backward");
    }
}
