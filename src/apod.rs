use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Apodization function applied around the centerburst before the FFT.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApodizationKind {
    /// No windowing, as collected.
    Boxcar,
    /// Blackman-Harris 3-term.
    BlackmanHarris3,
    /// Blackman-Harris 4-term.
    BlackmanHarris4,
    /// Blackman-Nuttall, built over the full signal rather than per wing.
    BlackmanNuttall,
}

impl Default for ApodizationKind {
    fn default() -> Self {
        ApodizationKind::BlackmanHarris3
    }
}

/// Window an interferogram asymmetrically around its centerburst.
///
/// The wings on either side of `zpd` get their own window halves so an
/// off-center burst is still tapered down to the signal edges.
pub fn apodize(
    signal: &[f64],
    zpd: usize,
    kind: ApodizationKind,
) -> Result<Vec<f64>, TransformError> {
    let window = build_window(signal.len(), zpd, kind);
    if window.len() != signal.len() {
        return Err(TransformError::SizeMismatch {
            signal: signal.len(),
            window: window.len(),
        });
    }
    Ok(signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect())
}

fn build_window(len: usize, zpd: usize, kind: ApodizationKind) -> Vec<f64> {
    // Wing sizes around the centerburst, zpd corrected from 0-based index.
    let wing_n = zpd + 1;
    let wing_p = len - (zpd + 1);
    match kind {
        ApodizationKind::Boxcar => vec![1.0; len],
        ApodizationKind::BlackmanHarris3 => {
            // Coefficients from W. Herres and J. Gronholz,
            // "Understanding FT-IR Data Processing".
            two_wing_window(wing_n, wing_p, [0.42323, 0.49755, 0.07922, 0.0])
        }
        ApodizationKind::BlackmanHarris4 => {
            two_wing_window(wing_n, wing_p, [0.35875, 0.48829, 0.14128, 0.01168])
        }
        ApodizationKind::BlackmanNuttall => {
            // Single window over the whole signal, sized by the shorter wing.
            // Not wing-split, so strongly asymmetric interferograms are
            // windowed off-center; kept as-is.
            let delta = wing_n.min(wing_p);
            let denom = 2.0 * delta as f64 - 1.0;
            (0..len)
                .map(|x| {
                    let x = x as f64;
                    0.3635819 - 0.4891775 * (2.0 * PI * x / denom).cos()
                        + 0.1365995 * (4.0 * PI * x / denom).cos()
                        - 0.0106411 * (6.0 * PI * x / denom).cos()
                })
                .collect()
        }
    }
}

/// Build the two cosine-sum wings independently, each over its own length,
/// and concatenate with the negative wing reversed.
fn two_wing_window(wing_n: usize, wing_p: usize, coeffs: [f64; 4]) -> Vec<f64> {
    let mut window = cosine_sum_wing(wing_n, coeffs);
    window.reverse();
    window.extend(cosine_sum_wing(wing_p, coeffs));
    window
}

fn cosine_sum_wing(wing: usize, [a0, a1, a2, a3]: [f64; 4]) -> Vec<f64> {
    (0..wing)
        .map(|n| {
            let phase = PI * n as f64 / wing as f64;
            a0 + a1 * phase.cos() + a2 * (2.0 * phase).cos() + a3 * (3.0 * phase).cos()
        })
        .collect()
}
