/// Relative tolerance used when comparing coordinates for equality.
///
/// Two coordinates are equal when they differ by at most `EPS * max(1, |a|, |b|)`.
pub const EPS: f64 = 1e-9;
