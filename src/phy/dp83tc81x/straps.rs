//! Strap decoding
//!
//! Board wiring is sampled into the strap register at hardware reset. The
//! driver only needs two facts from it: the BASE-T1 role and whether the
//! RGMII interface was strapped in.

use crate::error::Result;
use crate::hal::mdio::{MdioBus, mmd, mmd_read};

use super::regs::{reg, strap};

/// Role and interface facts latched from the strap pins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Straps {
    is_master: bool,
    is_rgmii: bool,
}

impl Straps {
    /// Decode a raw strap register value
    pub const fn from_raw(raw: u16) -> Self {
        Self {
            is_master: raw & strap::MASTER_MODE != 0,
            is_rgmii: raw & strap::RGMII_EN != 0,
        }
    }

    /// Re-read the strap register
    ///
    /// Both fields are replaced from the current hardware value. On a bus
    /// error they keep whatever they held before.
    pub fn read<M: MdioBus>(&mut self, mdio: &mut M, phy_addr: u8) -> Result<()> {
        let raw = mmd_read(mdio, phy_addr, mmd::VEND2, reg::STRAP)?;
        *self = Self::from_raw(raw);
        Ok(())
    }

    /// PHY is strapped as BASE-T1 master
    pub const fn is_master(&self) -> bool {
        self.is_master
    }

    /// PHY is strapped for RGMII
    pub const fn is_rgmii(&self) -> bool {
        self.is_rgmii
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, IoError};
    use crate::test_utils::MockMdioBus;

    #[test]
    fn decodes_master_and_rgmii_bits() {
        let straps = Straps::from_raw(strap::MASTER_MODE | strap::RGMII_EN);
        assert!(straps.is_master());
        assert!(straps.is_rgmii());

        let straps = Straps::from_raw(strap::RGMII_EN);
        assert!(!straps.is_master());
        assert!(straps.is_rgmii());
    }

    #[test]
    fn read_overwrites_previous_values() {
        let mut mdio = MockMdioBus::new();
        mdio.set_mmd_register(0, mmd::VEND2, reg::STRAP, strap::MASTER_MODE | strap::RGMII_EN);

        let mut straps = Straps::default();
        straps.read(&mut mdio, 0).unwrap();
        assert!(straps.is_master() && straps.is_rgmii());

        // Straps re-sampled as slave/non-RGMII: both flags must drop
        mdio.set_mmd_register(0, mmd::VEND2, reg::STRAP, 0);
        straps.read(&mut mdio, 0).unwrap();
        assert!(!straps.is_master());
        assert!(!straps.is_rgmii());
    }

    #[test]
    fn read_failure_keeps_prior_values() {
        let mut mdio = MockMdioBus::new();
        mdio.set_mmd_register(0, mmd::VEND2, reg::STRAP, strap::MASTER_MODE);

        let mut straps = Straps::default();
        straps.read(&mut mdio, 0).unwrap();

        mdio.fail_mmd_read(mmd::VEND2, reg::STRAP);
        assert_eq!(straps.read(&mut mdio, 0), Err(Error::Io(IoError::BusError)));
        assert!(straps.is_master());
        assert!(!straps.is_rgmii());
    }

    #[test]
    fn unrelated_bits_are_ignored() {
        let straps = Straps::from_raw(!(strap::MASTER_MODE | strap::RGMII_EN));
        assert_eq!(straps, Straps::default());
    }
}
