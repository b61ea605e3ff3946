/// Clamp into `[0, 1]`, mapping NaN to `0`.
#[inline]
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Linear blend that returns `a` and `b` exactly at `t = 0` and `t = 1`.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Tolerance used when comparing time offsets that went through unit conversions.
pub(crate) const TIME_EPSILON: f64 = 1e-9;

#[inline]
pub(crate) fn approx_le(a: f64, b: f64) -> bool {
    a <= b + TIME_EPSILON
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
