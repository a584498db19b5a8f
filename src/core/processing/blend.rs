use ndarray::{Array2, Zip};

use crate::core::processing::filters::saturate_u8;
use crate::error::{Error, Result};

/// Weight applied to both the low-pass and the high-pass plane.
pub const BLEND_WEIGHT: f64 = 0.5;

/// Per-pixel `alpha * a + beta * b`, rounded half to even and saturated to 8-bit.
pub fn add_weighted(a: &Array2<u8>, alpha: f64, b: &Array2<u8>, beta: f64) -> Result<Array2<u8>> {
    if a.dim() != b.dim() {
        return Err(Error::DimensionMismatch {
            low: a.dim(),
            high: b.dim(),
        });
    }
    let mut out = Array2::<u8>::zeros(a.dim());
    Zip::from(&mut out).and(a).and(b).for_each(|o, &x, &y| {
        *o = saturate_u8(alpha * f64::from(x) + beta * f64::from(y));
    });
    Ok(out)
}

/// Equal-weight blend of a low-pass and a normalized high-pass plane.
pub fn blend_hybrid(low: &Array2<u8>, high: &Array2<u8>) -> Result<Array2<u8>> {
    add_weighted(low, BLEND_WEIGHT, high, BLEND_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_planes_blend_to_their_mean() {
        let low = Array2::<u8>::from_elem((4, 6), 100);
        let high = Array2::<u8>::from_elem((4, 6), 200);
        let out = blend_hybrid(&low, &high).unwrap();
        assert!(out.iter().all(|&v| v == 150));
    }

    #[test]
    fn half_steps_round_to_even() {
        let low = ndarray::array![[101u8, 103]];
        let high = ndarray::array![[200u8, 200]];
        let out = blend_hybrid(&low, &high).unwrap();
        assert_eq!(out, ndarray::array![[150u8, 152]]);
    }

    #[test]
    fn weights_saturate() {
        let a = Array2::<u8>::from_elem((1, 1), 250);
        let out = add_weighted(&a, 1.0, &a, 1.0).unwrap();
        assert_eq!(out[[0, 0]], 255);
    }

    #[test]
    fn mismatched_planes_are_rejected() {
        let low = Array2::<u8>::zeros((2, 3));
        let high = Array2::<u8>::zeros((3, 2));
        assert!(matches!(
            blend_hybrid(&low, &high),
            Err(Error::DimensionMismatch {
                low: (2, 3),
                high: (3, 2)
            })
        ));
    }
}
