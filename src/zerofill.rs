use crate::error::TransformError;
use crate::peak::peak_search;

/// Zero-fill an interferogram for FFT efficiency and denser spectral sampling.
///
/// Zeros are appended at the end only, so the centerburst keeps its index.
/// A factor of 0 pads just up to the next power of two.
pub fn zero_fill(signal: &[f64], zff_factor: usize) -> Vec<f64> {
    let padded_len = zero_filled_len(signal.len(), zff_factor);
    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(signal);
    out.resize(padded_len, 0.0);
    out
}

/// Length of [`zero_fill`]'s output for a given input length, without
/// touching any data. The padded length is `next_pow2(len) * (factor + 1)`.
pub fn zero_filled_len(len: usize, zff_factor: usize) -> usize {
    let n2 = len.next_power_of_two();
    len + (n2 - len) + n2 * zff_factor
}

/// Confirm zero filling left the centerburst where it was. A moved peak
/// means a flat-topped or otherwise pathological signal and the row cannot
/// be rotated consistently.
pub fn verify_zpd_stable(filled: &[f64], zpd: usize) -> Result<(), TransformError> {
    let recomputed = peak_search(filled)?;
    if recomputed != zpd {
        return Err(TransformError::ZpdDrift {
            original: zpd,
            recomputed,
        });
    }
    Ok(())
}
