//! Host interface configuration

use crate::config::{PhyConfig, PhyInterface};
use crate::error::Result;
use crate::hal::mdio::{MdioBus, mmd, mmd_read, mmd_set_bits, mmd_write};

use super::regs::{reg, rgmii_id, sgmii};

/// RGMII internal delay bits for the given delays (enabled iff > 0)
pub const fn rgmii_delay_mask(rx_delay_ps: i32, tx_delay_ps: i32) -> u16 {
    let mut mask = 0;
    if rx_delay_ps > 0 {
        mask |= rgmii_id::RX_CLK_SHIFT;
    }
    if tx_delay_ps > 0 {
        mask |= rgmii_id::TX_CLK_SHIFT;
    }
    mask
}

/// Enable the RGMII clock shifts requested by `config`
///
/// Nothing is written when neither delay is enabled.
pub fn config_rgmii_delay<M: MdioBus>(mdio: &mut M, phy_addr: u8, config: &PhyConfig) -> Result<()> {
    let mask = rgmii_delay_mask(config.rx_delay_ps(), config.tx_delay_ps());
    if mask == 0 {
        return Ok(());
    }
    mmd_set_bits(mdio, phy_addr, mmd::PMAPMD, reg::RGMII_ID_CTRL, mask)
}

/// Write the fixed SGMII configuration word
///
/// The preceding read is only logged; its failure does not stop the write.
pub fn config_sgmii<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
    let _current = mmd_read(mdio, phy_addr, mmd::VEND2, reg::SGMII_CTRL);

    #[cfg(feature = "defmt")]
    match _current {
        Ok(v) => defmt::debug!("SGMII control was {:#x}", v),
        Err(e) => defmt::debug!("SGMII control read failed: {}", e),
    }

    mmd_write(mdio, phy_addr, mmd::VEND2, reg::SGMII_CTRL, sgmii::CONFIG_VAL)
}

/// Configure the host interface selected in `config`
///
/// MII and RMII need no setup.
pub fn config_interface<M: MdioBus>(mdio: &mut M, phy_addr: u8, config: &PhyConfig) -> Result<()> {
    match config.interface {
        iface if iface.is_rgmii() => config_rgmii_delay(mdio, phy_addr, config),
        PhyInterface::Sgmii => config_sgmii(mdio, phy_addr),
        _ => Ok(()),
    }
}
