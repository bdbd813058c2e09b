//! Chip bring-up
//!
//! Hard reset, forced 100BASE-T1 link parameters, role configuration,
//! the role's vendor program, autonomous mode and a closing soft reset.
//! Steps run strictly in order and the first bus failure aborts the
//! sequence without rolling back what already landed.

use embedded_hal::delay::DelayNs;

use crate::config::PhyConfig;
use crate::error::Result;
use crate::hal::mdio::{MdioBus, mmd, mmd_set_bits, mmd_write};
use crate::phy::generic::{LinkSettings, LinkStatus, base_t1};

use super::regs::{autonomous, pma_role, reg};
use super::reset::{ResetKind, reset};
use super::straps::Straps;
use super::tables::{role_program, write_program};

/// Wait between enabling autonomous mode and the closing soft reset
pub const AUTONOMOUS_SETTLE_MS: u32 = 10;

/// Last bring-up step that completed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStage {
    /// Nothing has run yet
    #[default]
    NotStarted,
    /// Hard reset issued and settled
    Reset,
    /// Role configuration word written (or its failure tolerated)
    RoleSelect,
    /// Role program applied
    ProgramApplied,
    /// Autonomous mode enabled
    AutonomousEnabled,
    /// Post-configuration wait elapsed
    Settled,
    /// Closing soft reset done; the chip is up
    SoftResetDone,
}

impl InitStage {
    /// Bring-up ran to completion
    pub const fn is_complete(self) -> bool {
        matches!(self, InitStage::SoftResetDone)
    }
}

/// Role configuration word for the BASE-T1 control register
pub const fn role_word(is_master: bool) -> u16 {
    if is_master {
        pma_role::MASTER
    } else {
        pma_role::SLAVE
    }
}

/// Run the bring-up sequence
///
/// `stage` tracks progress so a caller can tell how far a failed bring-up
/// got. `link` receives the forced link parameters.
pub fn chip_init<M: MdioBus, D: DelayNs>(
    mdio: &mut M,
    phy_addr: u8,
    straps: &Straps,
    config: &PhyConfig,
    link: &mut LinkSettings,
    delay: &mut D,
    stage: &mut InitStage,
) -> Result<()> {
    *stage = InitStage::NotStarted;

    reset(mdio, phy_addr, ResetKind::Hard, delay)?;
    *stage = InitStage::Reset;

    link.autoneg = false;
    link.status = LinkStatus::fast_full();
    link.supported.base_t1_100_fd = true;

    let is_master = straps.is_master();
    match mmd_write(
        mdio,
        phy_addr,
        mmd::PMAPMD,
        base_t1::PMA_PMD_BT1_CTRL,
        role_word(is_master),
    ) {
        Ok(()) => {}
        Err(e) if config.strict_role_write => return Err(e),
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("role configuration write failed, continuing: {}", _e);
        }
    }
    *stage = InitStage::RoleSelect;

    let program = role_program(is_master);

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "applying {} program ({} writes)",
        if is_master { "master" } else { "slave" },
        program.len()
    );

    write_program(mdio, phy_addr, program)?;
    *stage = InitStage::ProgramApplied;

    mmd_set_bits(mdio, phy_addr, mmd::VEND2, reg::AUTONOMOUS_CTRL, autonomous::ENABLE)?;
    *stage = InitStage::AutonomousEnabled;

    delay.delay_ms(AUTONOMOUS_SETTLE_MS);
    *stage = InitStage::Settled;

    reset(mdio, phy_addr, ResetKind::Soft, delay)?;
    *stage = InitStage::SoftResetDone;

    Ok(())
}
