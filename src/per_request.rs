//! Per-request energy.

/// `energy / requests`, or `None` when either the energy is missing or no
/// requests were served.
pub fn per_request(energy: Option<f64>, requests: u64) -> Option<f64> {
    match (energy, requests) {
        (Some(energy), n) if n > 0 => Some(energy / n as f64),
        _ => None,
    }
}
