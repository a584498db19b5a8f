use ndarray::Array2;

use crate::core::processing::filters::saturate_u8;

/// Slack added before truncation so the maximum lands on 255 despite
/// floating-point error in `range * (255 / range)`.
const TRUNCATE_SLACK: f64 = 1e-9;

/// Min/max of a plane, ignoring NaN. `None` for empty or all-NaN planes.
pub fn min_max(plane: &Array2<f64>) -> Option<(f64, f64)> {
    plane
        .iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Linearly rescale `plane` so its minimum maps to 0 and its maximum to 255,
/// then quantize by truncation. A constant plane has no range and maps to 0.
pub fn normalize_min_max_u8(plane: &Array2<f64>) -> Array2<u8> {
    let Some((lo, hi)) = min_max(plane) else {
        return Array2::zeros(plane.dim());
    };
    let range = hi - lo;
    let scale = if range > f64::EPSILON { 255.0 / range } else { 0.0 };
    plane.mapv(|v| saturate_u8(((v - lo) * scale + TRUNCATE_SLACK).floor()))
}
