//! Shared test fixtures for the Apsis workspace.
//!
//! Byte-exact two-line element sets used across crate tests, plus the
//! published reference state for the algorithm's canonical verification
//! object at t = 0. All lines carry valid checksums.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Sun-synchronous near-Earth object (catalog 30967).
pub const LEO_LINE1: &str =
    "1 30967U 99025BBH 23137.66391166  .00001555  00000-0  41268-3 0    18";
pub const LEO_LINE2: &str =
    "2 30967  98.7547  35.5966 0112285 206.6100 152.9301 14.46525639853782";

/// Geosynchronous object (catalog 48808); its 24-hour resonance exercises
/// the deep-space integrator scratch.
pub const GEO_LINE1: &str =
    "1 48808U 21047A   23086.46230110 -.00000330  00000-0  00000-0 0  5890";
pub const GEO_LINE2: &str =
    "2 48808   0.2330 283.2669 0003886 229.5666 331.3824  1.00276212  6769";

/// The canonical verification object (catalog 5, Vanguard-era).
pub const VERIF_LINE1: &str =
    "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753";
pub const VERIF_LINE2: &str =
    "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";

/// Published position for the verification object at t = 0, kilometres.
pub const VERIF_POSITION_T0_KM: [f64; 3] = [7022.465_292_66, -1400.082_967_55, 0.039_951_55];

/// Published velocity for the verification object at t = 0, km/s.
pub const VERIF_VELOCITY_T0_KM_S: [f64; 3] = [1.893_841_015, 6.405_893_759, 4.534_807_250];

/// Assert two 3-vectors agree within `tol` on every component.
pub fn assert_vec3_close(actual: [f64; 3], expected: [f64; 3], tol: f64) {
    for axis in 0..3 {
        let diff = (actual[axis] - expected[axis]).abs();
        assert!(
            diff <= tol,
            "component {axis}: {} vs {} (|diff| = {diff}, tol = {tol})",
            actual[axis],
            expected[axis],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Guard against accidental edits: every fixture line must stay at the
    /// fixed-width record length with a valid modulo-10 checksum.
    #[test]
    fn fixture_lines_have_valid_checksums() {
        for line in [
            LEO_LINE1, LEO_LINE2, GEO_LINE1, GEO_LINE2, VERIF_LINE1, VERIF_LINE2,
        ] {
            assert_eq!(line.len(), 69, "line length drifted: {line}");
            let mut sum = 0u32;
            for byte in line.bytes().take(68) {
                match byte {
                    b'0'..=b'9' => sum += u32::from(byte - b'0'),
                    b'-' => sum += 1,
                    _ => {}
                }
            }
            let expected = u32::from(line.as_bytes()[68] - b'0');
            assert_eq!(sum % 10, expected, "checksum mismatch: {line}");
        }
    }
}
