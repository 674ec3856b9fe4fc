use ndarray::Array1;

use crate::apod::apodize;
use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::fft::{real_fft, rfft_wavenumbers, rotate_at};
use crate::peak::peak_search;
use crate::zerofill::{verify_zpd_stable, zero_fill};

/// Phase spectrum of one row, interpolated onto the full wavenumber axis.
#[derive(Clone, Debug)]
pub struct PhaseSpectrum {
    pub values: Array1<f64>,
    /// The requested phase resolution exceeded what the row can provide and
    /// the full double-sided range was used instead.
    pub resolution_clamped: bool,
}

/// Estimate the phase spectrum of an interferogram row.
///
/// A small double-sided window around the centerburst is transformed on its
/// own, its phase angle taken per bin, and the low-resolution result
/// interpolated onto `wavenumbers`.
pub fn compute_phase(
    row: &[f64],
    wavenumbers: &Array1<f64>,
    config: &TransformConfig,
) -> Result<PhaseSpectrum, TransformError> {
    let zpd = peak_search(row)?;
    // Largest double-sided half-width available around the burst.
    let delta = zpd.min(row.len() - 1 - zpd);

    let (half_width, resolution_clamped) = if config.phase_res_limit {
        let requested = (1.0 / (config.dx * config.phase_resolution)).trunc() as i64 - 1;
        if requested > delta as i64 {
            (delta as i64, true)
        } else {
            (requested, false)
        }
    } else {
        (delta as i64, false)
    };
    if half_width <= 0 {
        // Degenerate window: burst at the signal edge, or a resolution
        // request coarser than a single datapoint.
        return Err(TransformError::EmptySignal);
    }
    let half_width = half_width as usize;

    // Double-sided sample, transformed exactly like a full sweep.
    let sample = &row[zpd - half_width..zpd + half_width];
    let sample_zpd = peak_search(sample)?;
    let apodized = apodize(sample, sample_zpd, config.apodization)?;
    let filled = zero_fill(&apodized, config.zero_fill_factor);
    verify_zpd_stable(&filled, sample_zpd)?;

    let rotated = rotate_at(&filled, sample_zpd);
    let spectrum = real_fft(&rotated);
    let sampled_axis = rfft_wavenumbers(filled.len(), config.dx);
    let sampled_phase: Vec<f64> = spectrum.iter().map(|c| c.im.atan2(c.re)).collect();

    let values = interp_clamped(
        wavenumbers.as_slice().expect("axis is contiguous"),
        sampled_axis.as_slice().expect("axis is contiguous"),
        &sampled_phase,
    );
    Ok(PhaseSpectrum {
        values: Array1::from(values),
        resolution_clamped,
    })
}

/// Linear interpolation of `(xp, fp)` onto `x`, with `xp` ascending.
/// Outside the sampled range the nearest edge value is held.
fn interp_clamped(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    debug_assert_eq!(xp.len(), fp.len());
    x.iter()
        .map(|&xi| {
            if xi <= xp[0] {
                return fp[0];
            }
            if xi >= xp[xp.len() - 1] {
                return fp[fp.len() - 1];
            }
            let j = xp.partition_point(|&v| v < xi);
            let t = (xi - xp[j - 1]) / (xp[j] - xp[j - 1]);
            fp[j - 1] + t * (fp[j] - fp[j - 1])
        })
        .collect()
}
