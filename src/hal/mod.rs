//! Hardware Abstraction Layer
//!
//! - [`mdio`]: MDIO bus trait, IEEE 802.3 register definitions and MMD
//!   indirect access
//!
//! The bus transport itself is supplied by the host; delays use
//! `embedded_hal::delay::DelayNs` directly.

pub mod mdio;

pub use mdio::MdioBus;
