use ndarray::Array1;

use crate::apod::apodize;
use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::fft::{real_fft, rotate_at};
use crate::peak::peak_search;
use crate::phase::compute_phase;
use crate::sweep::{split_sweeps, SweepMode};
use crate::zerofill::{verify_zpd_stable, zero_fill};

/// Phase-corrected spectrum of one logical observation.
#[derive(Clone, Debug)]
pub struct SweepSpectrum {
    pub values: Array1<f64>,
    /// Carried up from phase estimation; the driver turns it into a warning.
    pub resolution_clamped: bool,
}

/// Transform a single interferogram sweep into a phase-corrected spectrum.
///
/// `wavenumbers` is the axis computed once per run by the driver; the row's
/// zero-filled length must agree with it.
pub fn transform_sweep(
    row: &[f64],
    wavenumbers: &Array1<f64>,
    config: &TransformConfig,
) -> Result<SweepSpectrum, TransformError> {
    let zpd = peak_search(row)?;
    let apodized = apodize(row, zpd, config.apodization)?;
    let filled = zero_fill(&apodized, config.zero_fill_factor);
    verify_zpd_stable(&filled, zpd)?;

    let bins = filled.len() / 2 + 1;
    if bins != wavenumbers.len() {
        return Err(TransformError::AxisMismatch {
            expected: wavenumbers.len(),
            actual: bins,
        });
    }

    let phase = compute_phase(row, wavenumbers, config)?;

    // Rotate the centerburst to the edges and transform.
    let rotated = rotate_at(&filled, zpd);
    let spectrum = real_fft(&rotated);

    // Mertz correction: project each bin onto its estimated phase angle.
    let values = Array1::from_iter(
        spectrum
            .iter()
            .zip(phase.values.iter())
            .map(|(c, &p)| p.cos() * c.re + p.sin() * c.im),
    );
    Ok(SweepSpectrum {
        values,
        resolution_clamped: phase.resolution_clamped,
    })
}

/// Transform one batch row according to the sweep mode determined for the
/// run. A forward-backward row is split, each sweep transformed on its own,
/// and the two spectra averaged.
pub fn transform_row(
    row: &[f64],
    mode: SweepMode,
    wavenumbers: &Array1<f64>,
    config: &TransformConfig,
) -> Result<SweepSpectrum, TransformError> {
    match mode {
        SweepMode::Single => transform_sweep(row, wavenumbers, config),
        SweepMode::ForwardBackward => {
            let (forward, backward) = split_sweeps(row)?;
            let backward: Vec<f64> = backward.iter().rev().copied().collect();
            let fwd = transform_sweep(forward, wavenumbers, config)?;
            let back = transform_sweep(&backward, wavenumbers, config)?;
            Ok(SweepSpectrum {
                values: (&fwd.values + &back.values) / 2.0,
                resolution_clamped: fwd.resolution_clamped || back.resolution_clamped,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::ApodizationKind;
    use crate::fft::rfft_wavenumbers;
    use crate::zerofill::zero_filled_len;

    fn boxcar_config() -> TransformConfig {
        TransformConfig {
            dx: 1.0,
            apodization: ApodizationKind::Boxcar,
            zero_fill_factor: 0,
            phase_res_limit: false,
            phase_resolution: 32.0,
            limit_output: false,
            out_limit_low: 0.0,
            out_limit_high: 0.0,
        }
    }

    fn axis_for(row_len: usize, config: &TransformConfig) -> Array1<f64> {
        rfft_wavenumbers(zero_filled_len(row_len, config.zero_fill_factor), config.dx)
    }

    fn centerburst_row(len: usize, zpd: usize) -> Vec<f64> {
        // Damped cosine packet peaking at zpd.
        (0..len)
            .map(|i| {
                let x = i as f64 - zpd as f64;
                (0.35 * x).cos() * (-x.abs() / 14.0).exp() + 0.02
            })
            .collect()
    }

    #[test]
    fn delta_interferogram_yields_flat_unit_spectrum() {
        let mut row = vec![0.0; 64];
        row[30] = 1.0;
        let config = boxcar_config();
        let axis = axis_for(row.len(), &config);
        let spectrum = transform_sweep(&row, &axis, &config).unwrap();
        assert_eq!(spectrum.values.len(), axis.len());
        for &v in spectrum.values.iter() {
            assert!((v - 1.0).abs() < 1e-9, "bin {v} should be 1");
        }
    }

    #[test]
    fn zpd_preservation_holds_for_every_kind_and_factor() {
        let row = centerburst_row(200, 90);
        let zpd = peak_search(&row).unwrap();
        for kind in [
            ApodizationKind::Boxcar,
            ApodizationKind::BlackmanHarris3,
            ApodizationKind::BlackmanHarris4,
            ApodizationKind::BlackmanNuttall,
        ] {
            for factor in 0..3 {
                let apodized = apodize(&row, zpd, kind).unwrap();
                let filled = zero_fill(&apodized, factor);
                assert_eq!(peak_search(&filled).unwrap(), zpd, "{kind:?} factor {factor}");
            }
        }
    }

    #[test]
    fn pathological_signal_reports_zpd_drift() {
        // An all-negative row zero-fills into a new global maximum.
        let row = vec![-1.0; 100];
        let config = boxcar_config();
        let axis = axis_for(row.len(), &config);
        let err = transform_sweep(&row, &axis, &config).unwrap_err();
        assert_eq!(
            err,
            TransformError::ZpdDrift {
                original: 0,
                recomputed: 100
            }
        );
    }

    #[test]
    fn wrong_axis_length_is_rejected() {
        let mut row = vec![0.0; 64];
        row[30] = 1.0;
        let config = boxcar_config();
        let axis = rfft_wavenumbers(32, config.dx);
        let err = transform_sweep(&row, &axis, &config).unwrap_err();
        assert_eq!(
            err,
            TransformError::AxisMismatch {
                expected: 17,
                actual: 33
            }
        );
    }

    #[test]
    fn double_sweep_of_identical_halves_equals_single_sweep() {
        let half = centerburst_row(128, 20);
        let mut row = half.clone();
        row.extend(half.iter().rev());

        let config = boxcar_config();
        let axis = axis_for(half.len(), &config);
        let single = transform_sweep(&half, &axis, &config).unwrap();
        let double = transform_row(&row, SweepMode::ForwardBackward, &axis, &config).unwrap();
        assert_eq!(single.values.len(), double.values.len());
        for (s, d) in single.values.iter().zip(double.values.iter()) {
            assert!((s - d).abs() < 1e-9);
        }
    }

    #[test]
    fn odd_length_double_sweep_row_is_fatal() {
        let row = vec![0.5; 129];
        let config = boxcar_config();
        let axis = axis_for(64, &config);
        let err = transform_row(&row, SweepMode::ForwardBackward, &axis, &config).unwrap_err();
        assert_eq!(err, TransformError::OddLength { len: 129 });
    }
}
