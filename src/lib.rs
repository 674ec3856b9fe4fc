//! Interferogram to spectrum transform pipeline.
//!
//! Turns raw interferograms (single- or forward-backward double-sweep) into
//! phase-corrected frequency spectra: sweep detection, apodization, zero
//! filling, Mertz phase correction, FFT and optional output band limiting.

pub mod apod;
pub mod batch;
pub mod config;
pub mod error;
pub mod fft;
pub mod peak;
pub mod phase;
pub mod pipeline;
pub mod sweep;
pub mod transform;
pub mod zerofill;

pub use apod::{apodize, ApodizationKind};
pub use batch::{InterferogramBatch, SpectrumBatch, TransformWarning};
pub use config::{laser_reference_dx, TransformConfig, HENE_LASER_WAVENUMBER};
pub use error::TransformError;
pub use fft::{real_fft, rfft_wavenumbers, rotate_at};
pub use peak::peak_search;
pub use phase::{compute_phase, PhaseSpectrum};
pub use pipeline::TransformPipeline;
pub use sweep::{determine_sweeps, split_sweeps, SweepMode, SWEEP_TOLERANCE};
pub use transform::{transform_row, transform_sweep, SweepSpectrum};
pub use zerofill::{verify_zpd_stable, zero_fill, zero_filled_len};
