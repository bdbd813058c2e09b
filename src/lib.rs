//! TI DP83TC81x PHY Driver
//!
//! A `no_std`, `no_alloc` driver for the TI DP83TC812, DP83TC813 and
//! DP83TC814 100BASE-T1 single-pair Ethernet PHYs.
//!
//! # Architecture
//!
//! 1. **HAL Layer** ([`hal`]): the [`MdioBus`] trait supplied by the host,
//!    plus MMD (Clause 45 over Clause 22) indirect access
//! 2. **Generic PHY Layer** ([`phy::generic`]): the [`PhyDriver`] lifecycle
//!    trait and IEEE 802.3 / BASE-T1 helpers
//! 3. **Chip Driver** ([`phy::dp83tc81x`]): strap-driven bring-up, interface
//!    and interrupt configuration, TDR cable diagnostics, signal quality
//!
//! All bus access is blocking. Delays go through
//! `embedded_hal::delay::DelayNs`.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and bring-up logging
//! - `critical-section`: Enable the ISR-safe [`sync::SharedPhy`] wrapper
//!
//! # Example
//!
//! ```ignore
//! use ph_dp83tc81x::{Dp83tc81x, PhyConfig, PhyDriver, PhyInterface};
//!
//! // Host-supplied MDIO transport and delay
//! let mut mdio = /* your MdioBus implementation */;
//! let mut delay = /* your DelayNs implementation */;
//!
//! let config = PhyConfig::new()
//!     .with_interface(PhyInterface::RgmiiId)
//!     .with_interrupts(true);
//!
//! let phy_id = Dp83tc81x::read_phy_id(&mut mdio, 0)?;
//! let mut phy = Dp83tc81x::probe(0, phy_id, config, &mut mdio, &mut delay)?;
//!
//! phy.config_aneg(&mut mdio)?;
//!
//! loop {
//!     phy.read_status(&mut mdio)?;
//!     if phy.link_settings().link {
//!         break;
//!     }
//! }
//!
//! // Cable diagnostics
//! phy.cable_test_start(&mut mdio, &mut delay)?;
//! while !phy.cable_test_get_status(&mut mdio, &mut reporter)? {}
//! ```

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports
)]

// =============================================================================
// Modules
// =============================================================================

pub mod config;
pub mod error;
pub mod hal;
pub mod phy;

#[cfg(feature = "critical-section")]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{
    DEFAULT_RGMII_DELAY_PS, Duplex, MasterSlave, MasterSlaveState, PhyConfig, PhyInterface, Speed,
};
pub use error::{ConfigError, ConfigResult, DiagError, Error, IoError, Result};
pub use hal::mdio::MdioBus;

// Re-export PHY types
pub use phy::{
    CableFault, CablePair, CableResultCode, CableTestReporter, CableTestState, ChipVariant,
    Dp83tc81x, InterruptStatus, LinkSettings, LinkStatus, PhyCapabilities, PhyDriver,
};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedPhy;
