use serde::{Deserialize, Serialize};

use crate::apod::ApodizationKind;

/// Wavenumber of the HeNe reference laser (cm^-1) used when the datapoint
/// spacing is derived from laser fringes instead of entered directly.
pub const HENE_LASER_WAVENUMBER: f64 = 15797.337544;

/// Datapoint spacing for an interferogram sampled at every laser fringe
/// zero crossing: `dx = 1 / (2 * laser_wavenumber)`.
pub fn laser_reference_dx(laser_wavenumber: f64) -> f64 {
    1.0 / laser_wavenumber / 2.0
}

/// All knobs of one pipeline run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Datapoint spacing (cm).
    pub dx: f64,
    /// Apodization function applied around the centerburst.
    pub apodization: ApodizationKind,
    /// Zero-filling factor: padded length is `next_pow2 * (factor + 1)`.
    pub zero_fill_factor: usize,
    /// Cap the resolution of the phase spectrum.
    pub phase_res_limit: bool,
    /// Phase resolution cap (cm^-1), used only when `phase_res_limit` is on.
    pub phase_resolution: f64,
    /// Slice the output to a wavenumber band.
    pub limit_output: bool,
    /// Output band bounds (cm^-1); order does not matter, the pipeline sorts.
    pub out_limit_low: f64,
    pub out_limit_high: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            // HeNe-referenced sampling is the common acquisition setup.
            dx: laser_reference_dx(HENE_LASER_WAVENUMBER),
            apodization: ApodizationKind::BlackmanHarris3,
            zero_fill_factor: 1,
            phase_res_limit: true,
            phase_resolution: 32.0,
            limit_output: true,
            // Mid-infrared fingerprint region.
            out_limit_low: 400.0,
            out_limit_high: 4000.0,
        }
    }
}

impl TransformConfig {
    /// Config with `dx` taken from a laser reference instead of a direct value.
    pub fn with_laser_reference(laser_wavenumber: f64) -> Self {
        Self {
            dx: laser_reference_dx(laser_wavenumber),
            ..Self::default()
        }
    }

    /// Output band as `(low, high)` regardless of the order the bounds were
    /// entered in.
    pub fn sorted_output_band(&self) -> (f64, f64) {
        if self.out_limit_low <= self.out_limit_high {
            (self.out_limit_low, self.out_limit_high)
        } else {
            (self.out_limit_high, self.out_limit_low)
        }
    }
}
