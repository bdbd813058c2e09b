//! MDIO (Management Data Input/Output) HAL
//!
//! The driver never touches the bus controller directly. Hosts supply a
//! [`MdioBus`] implementation for plain Clause 22 register access; the
//! extended (MMD) address spaces the DP83TC81x needs are reached through
//! the IEEE 802.3 Annex 22D indirect access registers built on top of it.

use crate::error::{ConfigError, Result};

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends, allowing
/// the PHY driver to work with any MAC's management interface.
/// Implementations are expected to block until the transaction finishes.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

/// Validate a PHY address before it is used on the bus
pub fn check_phy_addr(phy_addr: u8) -> Result<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(ConfigError::InvalidPhyAddress.into());
    }
    Ok(())
}

// =============================================================================
// PHY Register Definitions (IEEE 802.3 standard registers)
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 5;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 13;
    /// MMD Access Data Register
    pub const MMD_DATA: u8 = 14;
}

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select (100 Mbps if set)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
}

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Link status (latched low)
    pub const LINK_STATUS: u16 = 1 << 2;
}

/// ANLPAR (Auto-Negotiation Link Partner Ability Register) bits
pub mod anlpar {
    /// 100BASE-TX full duplex
    pub const CAN_100_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex
    pub const CAN_100_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex
    pub const CAN_10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex
    pub const CAN_10_HD: u16 = 1 << 5;
    /// IEEE 802.3 selector value
    pub const SELECTOR_802_3: u16 = 0x0001;
}

// =============================================================================
// MMD (Clause 45 over Clause 22) Access
// =============================================================================

/// MMD device addresses used by the driver
pub mod mmd {
    /// PMA/PMD device
    pub const PMAPMD: u8 = 0x01;
    /// Vendor specific device 2 (TI "MMD1F" shared register space)
    pub const VEND2: u8 = 0x1F;
}

/// MMD Access Control Register function field
pub mod mmd_ctrl {
    /// Function: address
    pub const FUNC_ADDR: u16 = 0x0000;
    /// Function: data, no post increment
    pub const FUNC_DATA: u16 = 0x4000;
    /// Device address mask (bits 4:0)
    pub const DEVAD_MASK: u16 = 0x001F;
}

/// Latch an MMD register address through the indirect access registers
fn mmd_select<M: MdioBus>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<()> {
    let devad = devad as u16 & mmd_ctrl::DEVAD_MASK;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_ADDR | devad)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_DATA | devad)
}

/// Read a register in an MMD address space
pub fn mmd_read<M: MdioBus>(mdio: &mut M, phy_addr: u8, devad: u8, reg: u16) -> Result<u16> {
    mmd_select(mdio, phy_addr, devad, reg)?;
    mdio.read(phy_addr, phy_reg::MMD_DATA)
}

/// Write a register in an MMD address space
pub fn mmd_write<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    value: u16,
) -> Result<()> {
    mmd_select(mdio, phy_addr, devad, reg)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, value)
}

/// Read-modify-write an MMD register, reporting whether the value changed
///
/// Bits in `mask` are cleared, then `set` is OR-ed in. The write is skipped
/// when the register already holds the new value.
pub fn mmd_modify_changed<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    mask: u16,
    set: u16,
) -> Result<bool> {
    let old = mmd_read(mdio, phy_addr, devad, reg)?;
    let new = (old & !mask) | set;
    if new == old {
        return Ok(false);
    }
    mmd_write(mdio, phy_addr, devad, reg, new)?;
    Ok(true)
}

/// Set bits in an MMD register (read-modify-write)
pub fn mmd_set_bits<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    devad: u8,
    reg: u16,
    bits: u16,
) -> Result<()> {
    mmd_modify_changed(mdio, phy_addr, devad, reg, 0, bits).map(|_| ())
}

// =============================================================================
// Unit Tests
// =============================================================================
