use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest Laplacian aperture accepted (Sobel-style kernels beyond this are not supported).
pub const MAX_LAPLACIAN_KSIZE: u32 = 31;

/// Gaussian kernel extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSize {
    pub width: u32,
    pub height: u32,
}

impl KernelSize {
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

impl std::fmt::Display for KernelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Filter parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Gaussian low-pass kernel size; both sides positive and odd
    pub gaussian_kernel: KernelSize,
    /// Gaussian standard deviation, used for both axes
    pub sigma: f64,
    /// Laplacian aperture; positive, odd and at most 31
    pub laplacian_ksize: u32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            gaussian_kernel: KernelSize::square(31),
            sigma: 15.0,
            laplacian_ksize: 3,
        }
    }
}

fn check_odd_positive(field: &'static str, value: u32) -> Result<()> {
    if value == 0 || value % 2 == 0 {
        return Err(Error::configuration(
            field,
            format!("must be a positive odd integer, got {}", value),
        ));
    }
    Ok(())
}

impl FilterParams {
    /// Reject parameters the filters cannot honor.
    pub fn validate(&self) -> Result<()> {
        check_odd_positive("gaussian_kernel.width", self.gaussian_kernel.width)?;
        check_odd_positive("gaussian_kernel.height", self.gaussian_kernel.height)?;
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(Error::configuration(
                "sigma",
                format!("must be a positive finite number, got {}", self.sigma),
            ));
        }
        check_odd_positive("laplacian_ksize", self.laplacian_ksize)?;
        if self.laplacian_ksize > MAX_LAPLACIAN_KSIZE {
            return Err(Error::configuration(
                "laplacian_ksize",
                format!(
                    "must not exceed {}, got {}",
                    MAX_LAPLACIAN_KSIZE, self.laplacian_ksize
                ),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: FilterParams = serde_json::from_str(json)?;
        Ok(params)
    }

    /// Load a JSON preset. Missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults_are_valid() {
        let params = FilterParams::default();
        assert_eq!(params.gaussian_kernel, KernelSize::square(31));
        assert_eq!(params.sigma, 15.0);
        assert_eq!(params.laplacian_ksize, 3);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn even_kernel_is_rejected() {
        let params = FilterParams {
            gaussian_kernel: KernelSize {
                width: 31,
                height: 30,
            },
            ..FilterParams::default()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("gaussian_kernel.height"));
    }

    #[test]
    fn non_positive_sigma_is_rejected() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = FilterParams {
                sigma,
                ..FilterParams::default()
            };
            assert!(matches!(
                params.validate(),
                Err(Error::Configuration { field: "sigma", .. })
            ));
        }
    }

    #[test]
    fn laplacian_ksize_bounds() {
        for ksize in [0, 2, 33] {
            let params = FilterParams {
                laplacian_ksize: ksize,
                ..FilterParams::default()
            };
            assert!(params.validate().is_err(), "ksize {} accepted", ksize);
        }
        let params = FilterParams {
            laplacian_ksize: 1,
            ..FilterParams::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_preset_keeps_defaults() {
        let params = FilterParams::from_json_str(r#"{ "sigma": 4.5 }"#).unwrap();
        assert_eq!(params.sigma, 4.5);
        assert_eq!(params.gaussian_kernel, KernelSize::square(31));
        assert_eq!(params.laplacian_ksize, 3);
    }

    #[test]
    fn preset_survives_json() {
        let params = FilterParams {
            gaussian_kernel: KernelSize {
                width: 9,
                height: 5,
            },
            sigma: 2.0,
            laplacian_ksize: 5,
        };
        let json = params.to_json_string().unwrap();
        assert_eq!(FilterParams::from_json_str(&json).unwrap(), params);
    }

    #[test]
    fn malformed_preset_is_a_configuration_error() {
        let err = FilterParams::from_json_str("{ sigma: }").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
