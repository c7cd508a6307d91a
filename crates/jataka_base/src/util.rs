//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // A tiny negative remainder rounds up to a full turn.
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward angular distance from `from` to `to`, in [0, 360).
///
/// Both inputs must already be reduced. A negative raw difference is
/// lifted by one full turn.
pub fn forward_separation(from: f64, to: f64) -> f64 {
    let diff = to - from;
    if diff < 0.0 { diff + 360.0 } else { diff }
}

/// True when `deg` is finite and inside [0, 360).
pub fn is_reduced(deg: f64) -> bool {
    deg.is_finite() && (0.0..360.0).contains(&deg)
}
