//! Interrupt configuration and acknowledge
//!
//! Interrupt sources are spread over three Clause 22 registers. The low
//! byte of each holds the enable bits, the high byte the matching pending
//! flags, which clear on read.

use crate::error::Result;
use crate::hal::mdio::MdioBus;

use super::regs::{INT_STATUS_SHIFT, int_reg, int_stat1, int_stat2, int_stat3};

/// Sources enabled in group 1
pub const INT_STAT1_EVENTS: u16 =
    int_stat1::ESD_EVENT | int_stat1::LINK_STAT | int_stat1::ENERGY_DET | int_stat1::LINK_QUAL;

/// Sources enabled in group 2
pub const INT_STAT2_EVENTS: u16 = int_stat2::SLEEP_MODE
    | int_stat2::OVERTEMP
    | int_stat2::OVERVOLTAGE
    | int_stat2::UNDERVOLTAGE;

/// Sources enabled in group 3
pub const INT_STAT3_EVENTS: u16 =
    int_stat3::LPS | int_stat3::WAKE_REQ | int_stat3::NO_FRAME | int_stat3::POR_DONE;

const GROUPS: [(u8, u16); 3] = [
    (int_reg::INT_STAT1, INT_STAT1_EVENTS),
    (int_reg::INT_STAT2, INT_STAT2_EVENTS),
    (int_reg::INT_STAT3, INT_STAT3_EVENTS),
];

/// Enable or disable the handled interrupt sources
///
/// Enabling ORs the handled sources into whatever is already enabled.
/// Disabling clears all three registers outright. Either way the first
/// failure aborts the remaining groups.
pub fn config_intr<M: MdioBus>(mdio: &mut M, phy_addr: u8, enabled: bool) -> Result<()> {
    for (reg_addr, events) in GROUPS {
        if enabled {
            let current = mdio.read(phy_addr, reg_addr)?;
            mdio.write(phy_addr, reg_addr, current | events)?;
        } else {
            mdio.write(phy_addr, reg_addr, 0)?;
        }
    }
    Ok(())
}

/// Pending interrupt flags captured by [`ack_interrupt`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// Raw value of each status group as read
    pub raw: [u16; 3],
}

impl InterruptStatus {
    /// Build from the three raw register values
    pub const fn from_raw(stat1: u16, stat2: u16, stat3: u16) -> Self {
        Self {
            raw: [stat1, stat2, stat3],
        }
    }

    const fn pending(&self, group: usize, enable_bit: u16) -> bool {
        self.raw[group] & (enable_bit << INT_STATUS_SHIFT) != 0
    }

    /// Any handled source is pending
    pub const fn any(&self) -> bool {
        self.pending(0, INT_STAT1_EVENTS)
            || self.pending(1, INT_STAT2_EVENTS)
            || self.pending(2, INT_STAT3_EVENTS)
    }

    /// ESD event
    pub const fn esd_event(&self) -> bool {
        self.pending(0, int_stat1::ESD_EVENT)
    }

    /// Link status changed
    pub const fn link_changed(&self) -> bool {
        self.pending(0, int_stat1::LINK_STAT)
    }

    /// Energy detected on the line
    pub const fn energy_detect(&self) -> bool {
        self.pending(0, int_stat1::ENERGY_DET)
    }

    /// Link quality indication
    pub const fn link_quality(&self) -> bool {
        self.pending(0, int_stat1::LINK_QUAL)
    }

    /// Sleep mode changed
    pub const fn sleep_mode(&self) -> bool {
        self.pending(1, int_stat2::SLEEP_MODE)
    }

    /// Over-temperature
    pub const fn overtemp(&self) -> bool {
        self.pending(1, int_stat2::OVERTEMP)
    }

    /// Supply over-voltage
    pub const fn overvoltage(&self) -> bool {
        self.pending(1, int_stat2::OVERVOLTAGE)
    }

    /// Supply under-voltage
    pub const fn undervoltage(&self) -> bool {
        self.pending(1, int_stat2::UNDERVOLTAGE)
    }

    /// Low-power sleep
    pub const fn low_power_sleep(&self) -> bool {
        self.pending(2, int_stat3::LPS)
    }

    /// Wake request
    pub const fn wake_request(&self) -> bool {
        self.pending(2, int_stat3::WAKE_REQ)
    }

    /// No frame detected
    pub const fn no_frame(&self) -> bool {
        self.pending(2, int_stat3::NO_FRAME)
    }

    /// Power-on reset done
    pub const fn por_done(&self) -> bool {
        self.pending(2, int_stat3::POR_DONE)
    }
}

/// Read (and thereby clear) all three status groups
pub fn ack_interrupt<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<InterruptStatus> {
    let stat1 = mdio.read(phy_addr, int_reg::INT_STAT1)?;
    let stat2 = mdio.read(phy_addr, int_reg::INT_STAT2)?;
    let stat3 = mdio.read(phy_addr, int_reg::INT_STAT3)?;
    Ok(InterruptStatus::from_raw(stat1, stat2, stat3))
}
