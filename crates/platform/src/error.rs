//! Driver status codes shared by every platform contract.
//!
//! The vendor drivers report a signed status word (`esp_err_t`). Contracts in
//! this crate surface it as [`DriverError`] so the coordinator can match on
//! the common cases without knowing the numeric values.

/// `ESP_OK`.
pub const STATUS_OK: i32 = 0;
/// `ESP_ERR_NO_MEM`.
pub const STATUS_NO_MEM: i32 = 0x101;
/// `ESP_ERR_INVALID_ARG`.
pub const STATUS_INVALID_ARG: i32 = 0x102;
/// `ESP_ERR_INVALID_STATE`.
pub const STATUS_INVALID_STATE: i32 = 0x103;
/// `ESP_ERR_NOT_FOUND`.
pub const STATUS_NOT_FOUND: i32 = 0x105;
/// `ESP_ERR_TIMEOUT`.
pub const STATUS_TIMEOUT: i32 = 0x107;

/// Error reported by a vendor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// The driver rejected an argument (bad pin, bad size, ...).
    InvalidArg,
    /// The resource is in the wrong state (e.g. bus already initialised).
    InvalidState,
    /// The driver could not allocate memory or a DMA channel.
    NoMemory,
    /// The requested device or resource does not exist.
    NotFound,
    /// The operation timed out.
    Timeout,
    /// Any other non-zero status word.
    Code(i32),
}

impl DriverError {
    /// Convert a raw status word into a `Result`.
    ///
    /// `0` is success; every other value maps to the matching variant, or
    /// [`DriverError::Code`] when it has no dedicated one.
    pub const fn check(status: i32) -> Result<(), Self> {
        match status {
            STATUS_OK => Ok(()),
            STATUS_NO_MEM => Err(Self::NoMemory),
            STATUS_INVALID_ARG => Err(Self::InvalidArg),
            STATUS_INVALID_STATE => Err(Self::InvalidState),
            STATUS_NOT_FOUND => Err(Self::NotFound),
            STATUS_TIMEOUT => Err(Self::Timeout),
            other => Err(Self::Code(other)),
        }
    }

    /// The raw status word for this error.
    pub const fn code(self) -> i32 {
        match self {
            Self::InvalidArg => STATUS_INVALID_ARG,
            Self::InvalidState => STATUS_INVALID_STATE,
            Self::NoMemory => STATUS_NO_MEM,
            Self::NotFound => STATUS_NOT_FOUND,
            Self::Timeout => STATUS_TIMEOUT,
            Self::Code(code) => code,
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for DriverError {}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArg => write!(f, "invalid argument"),
            Self::InvalidState => write!(f, "invalid state"),
            Self::NoMemory => write!(f, "out of memory"),
            Self::NotFound => write!(f, "not found"),
            Self::Timeout => write!(f, "operation timed out"),
            Self::Code(code) => write!(f, "driver error 0x{code:x}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ok() {
        assert_eq!(DriverError::check(0), Ok(()));
    }

    #[test]
    fn test_check_maps_known_codes() {
        assert_eq!(DriverError::check(0x103), Err(DriverError::InvalidState));
        assert_eq!(DriverError::check(0x102), Err(DriverError::InvalidArg));
        assert_eq!(DriverError::check(0x101), Err(DriverError::NoMemory));
        assert_eq!(DriverError::check(-1), Err(DriverError::Code(-1)));
    }

    #[test]
    fn test_code_is_inverse_of_check() {
        for err in [
            DriverError::InvalidArg,
            DriverError::InvalidState,
            DriverError::NoMemory,
            DriverError::NotFound,
            DriverError::Timeout,
            DriverError::Code(0x4242),
        ] {
            assert_eq!(DriverError::check(err.code()), Err(err));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DriverError::InvalidState.to_string(), "invalid state");
        assert_eq!(DriverError::Code(0x4242).to_string(), "driver error 0x4242");
    }
}
