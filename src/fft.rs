use ndarray::Array1;
use rustfft::{num_complex::Complex64, FftPlanner};

/// Forward FFT of a real signal, keeping the non-negative-frequency half.
///
/// Returns `n/2 + 1` bins; the remaining bins of a real-input transform are
/// their mirror and carry no extra information.
pub fn real_fft(signal: &[f64]) -> Vec<Complex64> {
    let n = signal.len();
    let mut buffer: Vec<Complex64> = signal.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);
    buffer.truncate(n / 2 + 1);
    buffer
}

/// Wavenumber axis matching [`real_fft`] output: `k / (n * dx)` for
/// `k = 0..=n/2`, strictly ascending.
pub fn rfft_wavenumbers(n: usize, dx: f64) -> Array1<f64> {
    let scale = 1.0 / (n as f64 * dx);
    Array1::from_iter((0..=n / 2).map(|k| k as f64 * scale))
}

/// Rotate a zero-filled interferogram so the centerburst sits at index 0
/// and the signal wraps around the end.
pub fn rotate_at(signal: &[f64], zpd: usize) -> Vec<f64> {
    let mut rotated = Vec::with_capacity(signal.len());
    rotated.extend_from_slice(&signal[zpd..]);
    rotated.extend_from_slice(&signal[..zpd]);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_fft_bin_count_and_dc() {
        let signal = vec![1.0; 16];
        let spectrum = real_fft(&signal);
        assert_eq!(spectrum.len(), 9);
        // DC bin carries the plain sum for a constant signal.
        assert!((spectrum[0].re - 16.0).abs() < 1e-9);
        assert!(spectrum[0].im.abs() < 1e-9);
        for bin in &spectrum[1..] {
            assert!(bin.norm() < 1e-9);
        }
    }

    #[test]
    fn real_fft_locates_a_pure_cosine() {
        let n = 64;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * 5.0 * i as f64 / n as f64).cos())
            .collect();
        let spectrum = real_fft(&signal);
        let peak = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 5);
    }

    #[test]
    fn wavenumber_axis_is_strictly_ascending() {
        let axis = rfft_wavenumbers(256, 0.5);
        assert_eq!(axis.len(), 129);
        assert_eq!(axis[0], 0.0);
        for pair in axis.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        // Last bin is the Nyquist wavenumber 1/(2*dx).
        assert!((axis[128] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn odd_length_axis_has_floor_half_plus_one_points() {
        assert_eq!(rfft_wavenumbers(15, 1.0).len(), 8);
        assert_eq!(rfft_wavenumbers(16, 1.0).len(), 9);
    }

    #[test]
    fn rotation_moves_centerburst_to_front() {
        let signal = [0.0, 1.0, 9.0, 2.0, 0.5];
        assert_eq!(rotate_at(&signal, 2), vec![9.0, 2.0, 0.5, 0.0, 1.0]);
        assert_eq!(rotate_at(&signal, 0), signal.to_vec());
    }
}
