//! Error types for the DP83TC81x PHY driver
//!
//! Errors are organized by domain so callers can tell the failure surfaces apart:
//! - [`ConfigError`]: Identification and configuration failures
//! - [`IoError`]: Management bus (MDIO) transport failures
//! - [`DiagError`]: Cable diagnostic failures reported by the hardware
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by every driver entry point. The driver never retries or recovers
//! locally; errors are surfaced verbatim to the caller.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and identification errors
///
/// These errors occur while probing a device or validating host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// PHY identifier does not belong to a supported chip
    UnsupportedPhyId,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::UnsupportedPhyId => "unsupported PHY identifier",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Management bus errors
///
/// Returned by [`MdioBus`](crate::hal::mdio::MdioBus) implementations and
/// propagated unchanged through every register sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Bus operation timed out
    Timeout,
    /// Bus transaction failed (no response, NAK, controller fault)
    BusError,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "operation timed out",
            IoError::BusError => "MDIO bus error",
        }
    }
}

// =============================================================================
// Diagnostic Errors
// =============================================================================

/// Cable diagnostic errors
///
/// Distinct from a decoded cable fault: a `DiagError` means the measurement
/// itself failed, not that the cable is damaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagError {
    /// TDR hardware reported a failed measurement
    TdrFailed,
}

impl core::fmt::Display for DiagError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DiagError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiagError::TdrFailed => "TDR measurement failed",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match phy.cable_test_get_status(&mut mdio, &mut reporter) {
///     Ok(false) => { /* keep polling */ }
///     Ok(true) => { /* results delivered to reporter */ }
///     Err(Error::Diag(DiagError::TdrFailed)) => { /* measurement failed */ }
///     Err(Error::Io(e)) => { /* bus failure */ }
///     Err(_) => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Bus I/O error
    Io(IoError),
    /// Cable diagnostic error
    Diag(DiagError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
            Error::Diag(e) => write!(f, "diag: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

impl From<DiagError> for Error {
    fn from(e: DiagError) -> Self {
        Error::Diag(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
