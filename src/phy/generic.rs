//! Generic PHY Building Blocks
//!
//! Link bookkeeping shared by all PHY drivers, helpers for the standard
//! IEEE 802.3 Clause 22 registers and the BASE-T1 PMA/PMD control register,
//! and the interface through which cable test results leave the driver.

use embedded_hal::delay::DelayNs;

use crate::config::{Duplex, MasterSlave, MasterSlaveState, Speed};
use crate::error::Result;
use crate::hal::mdio::MdioBus;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
///
/// Contains the negotiated or configured link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 100 Mbps Full Duplex
    pub const fn fast_full() -> Self {
        Self::new(Speed::Mbps100, Duplex::Full)
    }
}

// =============================================================================
// PHY Capabilities
// =============================================================================

/// PHY hardware capabilities
///
/// Indicates what link modes the PHY chip supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyCapabilities {
    /// Supports 100BASE-T1 Full Duplex
    pub base_t1_100_fd: bool,
    /// Supports 100BASE-TX Full Duplex
    pub speed_100_fd: bool,
    /// Supports 100BASE-TX Half Duplex
    pub speed_100_hd: bool,
    /// Supports 10BASE-T Full Duplex
    pub speed_10_fd: bool,
    /// Supports 10BASE-T Half Duplex
    pub speed_10_hd: bool,
    /// Supports auto-negotiation
    pub auto_negotiation: bool,
}

// =============================================================================
// Link Settings
// =============================================================================

/// Link parameters owned by the host link layer
///
/// The driver writes the forced parameters during bring-up and refreshes
/// `link`, `status` and `master_slave` from [`ieee802_3::read_status`] and
/// [`base_t1::read_master_slave`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkSettings {
    /// Autonegotiation in effect
    pub autoneg: bool,
    /// Configured or resolved speed/duplex
    pub status: LinkStatus,
    /// Supported link modes
    pub supported: PhyCapabilities,
    /// Link is up
    pub link: bool,
    /// Resolved master/slave role
    pub master_slave: MasterSlaveState,
}

impl Default for LinkStatus {
    fn default() -> Self {
        Self::fast_full()
    }
}

// =============================================================================
// Cable Test Reporting
// =============================================================================

/// Conductor pair a cable test result refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CablePair {
    /// Pair A (the only pair on single-pair Ethernet)
    A,
    /// Pair B
    B,
    /// Pair C
    C,
    /// Pair D
    D,
}

/// Cable test result code delivered to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CableResultCode {
    /// Pair is fine
    Ok,
    /// Pair is open
    Open,
    /// Pair is shorted within itself
    SameShort,
    /// Result could not be classified
    Unspecified,
}

/// Receiver for cable test results
///
/// Implemented by the host's reporting layer. Results are pushed, not
/// returned, so a driver can report several pairs from one poll.
pub trait CableTestReporter {
    /// Report the result code for a pair
    fn result(&mut self, pair: CablePair, code: CableResultCode);

    /// Report the estimated distance to a fault on a pair
    fn fault_length(&mut self, pair: CablePair, length: u32);
}

impl<R: CableTestReporter + ?Sized> CableTestReporter for &mut R {
    fn result(&mut self, pair: CablePair, code: CableResultCode) {
        (**self).result(pair, code);
    }

    fn fault_length(&mut self, pair: CablePair, length: u32) {
        (**self).fault_length(pair, length);
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Lifecycle hooks of a PHY driver
///
/// The host link layer calls these in order: `config_init` once after
/// probe, then `config_aneg` / `config_intr` as its configuration changes,
/// then `read_status` on every poll. Entry points are serialized by the
/// caller.
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Bring the chip up and configure the host interface
    fn config_init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()>;

    /// Reset the chip without re-running the bring-up program
    fn soft_reset<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()>;

    /// Apply the configured master/slave role and link mode
    fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Enable or disable the interrupt sources the driver handles
    fn config_intr<M: MdioBus>(&mut self, mdio: &mut M, enabled: bool) -> Result<()>;

    /// Refresh the cached link settings from the hardware
    fn read_status<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Cached link settings
    fn link_settings(&self) -> &LinkSettings;

    /// Power the PHY down
    fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::suspend(mdio, self.address())
    }

    /// Power the PHY back up
    fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::resume(mdio, self.address())
    }
}

// =============================================================================
// IEEE 802.3 Clause 22 Helpers
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::hal::mdio::{anlpar, bmcr, bmsr, phy_reg};

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }

    /// Read the current link state
    ///
    /// BMSR.LINK_STATUS latches low, so the first read only clears a stale
    /// link-down event.
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        mdio.read(phy_addr, phy_reg::BMSR)?;
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Read BMSR and check AN complete bit
    pub fn is_an_complete<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::AN_COMPLETE) != 0)
    }

    /// Enable auto-negotiation and restart
    pub fn enable_auto_negotiation<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(
            phy_addr,
            phy_reg::BMCR,
            (bmcr_val | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !bmcr::ISOLATE,
        )
    }

    /// Force speed and duplex with auto-negotiation disabled
    ///
    /// Loopback, isolate and power-down are kept; every other BMCR bit is
    /// replaced by the encoded speed and duplex.
    pub fn force_link<M: MdioBus>(mdio: &mut M, phy_addr: u8, status: LinkStatus) -> Result<()> {
        let mut bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;

        bmcr_val &= bmcr::LOOPBACK | bmcr::ISOLATE | bmcr::POWER_DOWN;

        if matches!(status.speed, Speed::Mbps100) {
            bmcr_val |= bmcr::SPEED_100;
        }
        if matches!(status.duplex, Duplex::Full) {
            bmcr_val |= bmcr::DUPLEX_FULL;
        }

        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val)
    }

    /// Get link status from BMCR (when AN is disabled)
    pub fn link_status_from_bmcr<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<LinkStatus> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;

        let speed = if (bmcr_val & bmcr::SPEED_100) != 0 {
            Speed::Mbps100
        } else {
            Speed::Mbps10
        };

        let duplex = if (bmcr_val & bmcr::DUPLEX_FULL) != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };

        Ok(LinkStatus::new(speed, duplex))
    }

    /// Resolve the best common mode from the link partner abilities
    pub fn link_status_from_partner<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
    ) -> Result<Option<LinkStatus>> {
        let anlpar_val = mdio.read(phy_addr, phy_reg::ANLPAR)?;

        let status = if anlpar_val & anlpar::CAN_100_FD != 0 {
            LinkStatus::new(Speed::Mbps100, Duplex::Full)
        } else if anlpar_val & anlpar::CAN_100_HD != 0 {
            LinkStatus::new(Speed::Mbps100, Duplex::Half)
        } else if anlpar_val & anlpar::CAN_10_FD != 0 {
            LinkStatus::new(Speed::Mbps10, Duplex::Full)
        } else if anlpar_val & anlpar::CAN_10_HD != 0 {
            LinkStatus::new(Speed::Mbps10, Duplex::Half)
        } else {
            return Ok(None);
        };

        Ok(Some(status))
    }

    /// Refresh link state, speed and duplex
    ///
    /// With autonegotiation in effect the result is taken from the link
    /// partner once negotiation completes; otherwise from BMCR.
    pub fn read_status<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
        settings: &mut LinkSettings,
    ) -> Result<()> {
        settings.link = is_link_up(mdio, phy_addr)?;

        if settings.autoneg {
            if is_an_complete(mdio, phy_addr)? {
                if let Some(status) = link_status_from_partner(mdio, phy_addr)? {
                    settings.status = status;
                }
            }
            return Ok(());
        }

        settings.status = link_status_from_bmcr(mdio, phy_addr)?;
        Ok(())
    }

    /// Power the PHY down (BMCR.POWER_DOWN)
    pub fn suspend<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val | bmcr::POWER_DOWN)
    }

    /// Power the PHY back up
    pub fn resume<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val & !bmcr::POWER_DOWN)
    }
}

// =============================================================================
// BASE-T1 PMA/PMD Helpers
// =============================================================================

/// Master/slave handling through the BASE-T1 PMA/PMD control register
pub mod base_t1 {
    use super::*;
    use crate::hal::mdio::{mmd, mmd_modify_changed, mmd_read};

    /// BASE-T1 PMA/PMD control register (MMD 1)
    pub const PMA_PMD_BT1_CTRL: u16 = 0x0834;
    /// Master/slave configuration bit (set = master)
    pub const CFG_MST: u16 = 1 << 14;

    /// Apply the requested master/slave role
    ///
    /// Returns `true` when the control register changed. `Unknown` and
    /// `Unsupported` leave the strap-selected role alone.
    pub fn setup_master_slave<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
        request: MasterSlave,
    ) -> Result<bool> {
        let ctl = match request {
            MasterSlave::PreferredMaster | MasterSlave::ForcedMaster => CFG_MST,
            MasterSlave::PreferredSlave | MasterSlave::ForcedSlave => 0,
            MasterSlave::Unknown | MasterSlave::Unsupported => return Ok(false),
        };

        mmd_modify_changed(mdio, phy_addr, mmd::PMAPMD, PMA_PMD_BT1_CTRL, CFG_MST, ctl)
    }

    /// Read the configured master/slave role
    pub fn read_master_slave<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<MasterSlaveState> {
        let ctl = mmd_read(mdio, phy_addr, mmd::PMAPMD, PMA_PMD_BT1_CTRL)?;
        if ctl & CFG_MST != 0 {
            Ok(MasterSlaveState::Master)
        } else {
            Ok(MasterSlaveState::Slave)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
