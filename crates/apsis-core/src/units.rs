//! Kilometre-to-metre conversion at the service boundary.
//!
//! The model's native outputs are kilometres and kilometres per second;
//! the service reports SI metres. The conversion lives in exactly one
//! place so the single-shot, handle, and batch paths cannot drift apart.

use crate::state::StateVector;

/// Metres per kilometre.
pub const M_PER_KM: f64 = 1000.0;

/// Scale a model-native (km, km/s) state into SI metres.
pub fn state_to_si(position_km: [f64; 3], velocity_km_s: [f64; 3]) -> StateVector {
    StateVector {
        position_m: position_km.map(|c| c * M_PER_KM),
        velocity_m_s: velocity_km_s.map(|c| c * M_PER_KM),
    }
}
