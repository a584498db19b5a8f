use thiserror::Error;

use hybrid_image::KernelSize;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid kernel size: {value}. Expected WIDTHxHEIGHT or a single size, e.g. 31x31")]
    InvalidKernelSize { value: String },
}

/// Parse `31x31`, `31X15` or `31` into a kernel size. Parity is checked later
/// with the rest of the filter parameters.
pub fn parse_kernel_size(value: &str) -> Result<KernelSize, AppError> {
    let invalid = || AppError::InvalidKernelSize {
        value: value.to_string(),
    };
    let parse = |s: &str| s.trim().parse::<u32>().map_err(|_| invalid());

    match value.split_once(['x', 'X']) {
        Some((w, h)) => Ok(KernelSize {
            width: parse(w)?,
            height: parse(h)?,
        }),
        None => Ok(KernelSize::square(parse(value)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kernel_forms() {
        assert_eq!(parse_kernel_size("31x31").unwrap(), KernelSize::square(31));
        assert_eq!(
            parse_kernel_size("9X5").unwrap(),
            KernelSize {
                width: 9,
                height: 5
            }
        );
        assert_eq!(parse_kernel_size("7").unwrap(), KernelSize::square(7));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "x", "3x", "ax3", "-3x3", "3x3x3"] {
            assert!(parse_kernel_size(bad).is_err(), "{bad:?} accepted");
        }
    }
}
