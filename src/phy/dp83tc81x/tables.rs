//! Vendor register programs
//!
//! Calibrated write sequences for bring-up and TDR. Entries are applied in
//! declaration order; the leading and trailing `0x001F`/`0x0523` writes open
//! and close configuration access, so a program must never be truncated or
//! reordered.

use crate::error::Result;
use crate::hal::mdio::{MdioBus, mmd, mmd_write};

/// One entry of a register program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterWrite {
    /// MMD address space
    pub mmd: u8,
    /// Register offset
    pub reg: u16,
    /// Value to write
    pub value: u16,
}

const fn vend(reg: u16, value: u16) -> RegisterWrite {
    RegisterWrite {
        mmd: mmd::VEND2,
        reg,
        value,
    }
}

const fn pma(reg: u16, value: u16) -> RegisterWrite {
    RegisterWrite {
        mmd: mmd::PMAPMD,
        reg,
        value,
    }
}

/// Bring-up program for a master-strapped PHY
pub static MASTER_INIT: &[RegisterWrite] = &[
    vend(0x001F, 0x8000),
    vend(0x0523, 0x0001),
    pma(0x0834, 0xC001),
    vend(0x081C, 0x0FE2),
    vend(0x0872, 0x0300),
    vend(0x0879, 0x0F00),
    vend(0x0806, 0x2952),
    vend(0x0807, 0x3361),
    vend(0x0808, 0x3D7B),
    vend(0x083E, 0x045F),
    vend(0x0834, 0x8000),
    vend(0x0862, 0x00E8),
    vend(0x0896, 0x32CB),
    vend(0x003E, 0x0009),
    vend(0x001F, 0x4000),
    vend(0x0523, 0x0000),
];

/// Bring-up program for a slave-strapped PHY
pub static SLAVE_INIT: &[RegisterWrite] = &[
    vend(0x001F, 0x8000),
    vend(0x0523, 0x0001),
    pma(0x0834, 0x8001),
    vend(0x0873, 0x0821),
    vend(0x0896, 0x22FF),
    vend(0x089E, 0x0000),
    vend(0x001F, 0x4000),
    vend(0x0523, 0x0000),
];

/// TDR pre-configuration: pulse enables, timing parameters, relock
pub static TDR_CONFIG: &[RegisterWrite] = &[
    vend(0x0523, 0x0001),
    vend(0x0827, 0x4800),
    vend(0x0301, 0x1701),
    vend(0x0303, 0x023D),
    vend(0x0305, 0x0015),
    vend(0x0306, 0x001A),
    vend(0x001F, 0x4000),
    vend(0x0523, 0x0000),
    vend(0x001F, 0x0000),
];

/// Select the bring-up program for a role
///
/// Every supported variant shares the same two programs.
pub fn role_program(is_master: bool) -> &'static [RegisterWrite] {
    if is_master { MASTER_INIT } else { SLAVE_INIT }
}

/// Apply a program in order, stopping at the first failed write
pub fn write_program<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    program: &[RegisterWrite],
) -> Result<()> {
    for entry in program {
        mmd_write(mdio, phy_addr, entry.mmd, entry.reg, entry.value)?;
    }
    Ok(())
}
