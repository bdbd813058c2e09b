//! Reset control
//!
//! Both reset flavours go through the vendor reset control register and
//! are followed by a fixed settle time before the PHY may be accessed
//! again. The bit does not need to be polled.

use embedded_hal::delay::DelayNs;

use crate::error::Result;
use crate::hal::mdio::{MdioBus, mmd, mmd_write};

use super::regs::{reg, reset_ctrl};

/// Settle time after either reset, in milliseconds
pub const RESET_SETTLE_MS: u32 = 100;

/// Reset flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetKind {
    /// Full chip reset; straps are re-sampled
    Hard,
    /// Restart with the current register contents
    Soft,
}

impl ResetKind {
    /// Command bit for the reset control register
    pub const fn command(self) -> u16 {
        match self {
            ResetKind::Hard => reset_ctrl::HW_RESET,
            ResetKind::Soft => reset_ctrl::SW_RESET,
        }
    }
}

/// Issue a reset and wait for the PHY to settle
///
/// The wait only happens once the command write succeeded. A hard reset
/// re-samples the straps; callers must re-read them if they care.
pub fn reset<M: MdioBus, D: DelayNs>(
    mdio: &mut M,
    phy_addr: u8,
    kind: ResetKind,
    delay: &mut D,
) -> Result<()> {
    mmd_write(mdio, phy_addr, mmd::VEND2, reg::RESET_CTRL, kind.command())?;
    delay.delay_ms(RESET_SETTLE_MS);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::std_instead_of_alloc)]
mod tests {
    extern crate std;

    use super::*;
    use crate::error::{Error, IoError};
    use crate::test_utils::{MockDelay, MockMdioBus};
    use std::vec;

    #[test]
    fn hard_reset_writes_bit_15_and_waits() {
        let mut mdio = MockMdioBus::new();
        let mut delay = MockDelay::new();

        reset(&mut mdio, 0, ResetKind::Hard, &mut delay).unwrap();

        assert_eq!(mdio.get_mmd_writes(), vec![(mmd::VEND2, reg::RESET_CTRL, 0x8000)]);
        assert_eq!(delay.calls_ms(), vec![100]);
    }

    #[test]
    fn soft_reset_writes_bit_14() {
        let mut mdio = MockMdioBus::new();
        let mut delay = MockDelay::new();

        reset(&mut mdio, 0, ResetKind::Soft, &mut delay).unwrap();

        assert_eq!(mdio.get_mmd_writes(), vec![(mmd::VEND2, reg::RESET_CTRL, 0x4000)]);
        assert_eq!(delay.total_ms(), 100);
    }

    #[test]
    fn failed_write_skips_settle_time() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_mmd_write(mmd::VEND2, reg::RESET_CTRL);
        let mut delay = MockDelay::new();

        let result = reset(&mut mdio, 0, ResetKind::Hard, &mut delay);

        assert_eq!(result, Err(Error::Io(IoError::BusError)));
        assert_eq!(delay.total_ms(), 0);
    }
}
