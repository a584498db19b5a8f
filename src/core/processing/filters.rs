//! Linear filters on single-channel planes: Gaussian low-pass and Laplacian
//! high-pass. Both are evaluated as separable correlations with reflect-101
//! borders (`gfedcb|abcdefgh|gfedcba`).
use ndarray::{Array2, Axis};
use tracing::debug;

use crate::core::params::KernelSize;

/// Map an out-of-range index back into `0..len` by mirroring about the edge
/// pixels without repeating them.
fn reflect_101(mut index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    loop {
        if index < 0 {
            index = -index;
        } else if index > last {
            index = 2 * last - index;
        } else {
            return index as usize;
        }
    }
}

/// Correlate every lane of `src` along `axis` with `kernel` (odd length, centered).
fn correlate_axis(src: &Array2<f64>, kernel: &[f64], axis: Axis) -> Array2<f64> {
    let radius = (kernel.len() / 2) as isize;
    let mut out = Array2::<f64>::zeros(src.dim());
    for (src_lane, mut out_lane) in src.lanes(axis).into_iter().zip(out.lanes_mut(axis)) {
        let len = src_lane.len();
        for i in 0..len {
            let mut acc = 0.0;
            for (k, &w) in kernel.iter().enumerate() {
                let j = reflect_101(i as isize + k as isize - radius, len);
                acc += w * src_lane[j];
            }
            out_lane[i] = acc;
        }
    }
    out
}

/// Apply `kx` along rows (horizontal) then `ky` along columns (vertical).
pub fn correlate_separable(src: &Array2<f64>, kx: &[f64], ky: &[f64]) -> Array2<f64> {
    let horizontal = correlate_axis(src, kx, Axis(1));
    correlate_axis(&horizontal, ky, Axis(0))
}

/// Normalized 1-D Gaussian taps `exp(-(i - c)^2 / (2 sigma^2))`.
///
/// A sigma so small that `2 sigma^2` underflows yields the identity kernel.
pub fn gaussian_kernel(size: usize, sigma: f64) -> Vec<f64> {
    let center = (size as f64 - 1.0) / 2.0;
    let denom = 2.0 * sigma * sigma;
    if denom <= 0.0 {
        let mut taps = vec![0.0; size];
        if size > 0 {
            taps[size / 2] = 1.0;
        }
        return taps;
    }
    let mut taps: Vec<f64> = (0..size)
        .map(|i| {
            let d = i as f64 - center;
            (-(d * d) / denom).exp()
        })
        .collect();
    let sum: f64 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

fn poly_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Binomial smoothing taps of length `n` (rows of Pascal's triangle).
fn binomial(n: usize) -> Vec<f64> {
    let mut taps = vec![1.0];
    for _ in 1..n {
        taps = poly_mul(&taps, &[1.0, 1.0]);
    }
    taps
}

/// Second-derivative and smoothing taps for a Laplacian of aperture `ksize`.
///
/// `ksize == 1` is the 3x3 cross `[[0,1,0],[1,-4,1],[0,1,0]]`; larger apertures
/// pair a second-derivative kernel with binomial smoothing on the other axis,
/// e.g. `ksize == 3` gives `[[2,0,2],[0,-8,0],[2,0,2]]`.
pub fn laplacian_kernels(ksize: usize) -> (Vec<f64>, Vec<f64>) {
    if ksize <= 1 {
        return (vec![1.0, -2.0, 1.0], vec![0.0, 1.0, 0.0]);
    }
    let mut deriv = binomial(ksize - 2);
    for _ in 0..2 {
        deriv = poly_mul(&deriv, &[1.0, -1.0]);
    }
    (deriv, binomial(ksize))
}

fn to_f64(plane: &Array2<u8>) -> Array2<f64> {
    plane.mapv(f64::from)
}

/// Round half to even and saturate into the 8-bit range.
pub fn saturate_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Gaussian low-pass of an 8-bit plane; same sigma on both axes.
pub fn gaussian_blur_u8(plane: &Array2<u8>, kernel: KernelSize, sigma: f64) -> Array2<u8> {
    let kx = gaussian_kernel(kernel.width as usize, sigma);
    let ky = if kernel.height == kernel.width {
        kx.clone()
    } else {
        gaussian_kernel(kernel.height as usize, sigma)
    };
    debug!(
        "Gaussian blur: kernel={}, sigma={}, plane={:?}",
        kernel,
        sigma,
        plane.dim()
    );
    correlate_separable(&to_f64(plane), &kx, &ky).mapv(saturate_u8)
}

/// Laplacian of an 8-bit plane in f64, keeping negative and overshooting responses.
pub fn laplacian_f64(plane: &Array2<u8>, ksize: u32) -> Array2<f64> {
    let (deriv, smooth) = laplacian_kernels(ksize as usize);
    debug!("Laplacian: ksize={}, plane={:?}", ksize, plane.dim());
    let src = to_f64(plane);
    let dxx = correlate_separable(&src, &deriv, &smooth);
    let dyy = correlate_separable(&src, &smooth, &deriv);
    dxx + dyy
}
