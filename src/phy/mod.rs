//! Ethernet PHY Drivers
//!
//! The PHY layer talks to the chip only through the [`MdioBus`] trait, so
//! it is independent of the MAC and can be tested with a mock bus.
//!
//! - [`generic`]: link bookkeeping, the [`PhyDriver`] trait and the shared
//!   IEEE 802.3 / BASE-T1 helpers
//! - [`dp83tc81x`]: TI DP83TC812/813/814 100BASE-T1 driver
//!
//! [`MdioBus`]: crate::hal::mdio::MdioBus

pub mod dp83tc81x;
pub mod generic;

pub use dp83tc81x::{
    CableFault, CableTestState, ChipVariant, Dp83tc81x, InitStage, InterruptStatus, Straps,
    scan_bus,
};
pub use generic::{
    CablePair, CableResultCode, CableTestReporter, LinkSettings, LinkStatus, PhyCapabilities,
    PhyDriver,
};
