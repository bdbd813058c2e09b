//! TI DP83TC81x 100BASE-T1 PHY Driver
//!
//! Driver for the DP83TC812, DP83TC813 and DP83TC814 single-pair Ethernet
//! transceivers.
//!
//! # Features
//!
//! - Strap-driven master/slave bring-up with the vendor register programs
//! - RGMII internal delay and SGMII configuration
//! - Interrupt enable/disable and acknowledge
//! - TDR cable diagnostics (open/short with distance)
//! - Signal quality indicator
//!
//! # Bring-up
//!
//! The role comes from the strap pins, not from software. [`Dp83tc81x::probe`]
//! reads the straps, identifies the variant and runs the role's bring-up
//! program; all three variants share the same two programs.
//!
//! # Example
//!
//! ```ignore
//! use ph_dp83tc81x::{Dp83tc81x, PhyConfig, PhyDriver, PhyInterface};
//!
//! let config = PhyConfig::new().with_interface(PhyInterface::RgmiiId);
//! let phy_id = Dp83tc81x::read_phy_id(&mut mdio, 0)?;
//! let mut phy = Dp83tc81x::probe(0, phy_id, config, &mut mdio, &mut delay)?;
//!
//! phy.config_aneg(&mut mdio)?;
//! phy.read_status(&mut mdio)?;
//! if phy.link_settings().link {
//!     // ...
//! }
//! ```

pub mod init;
pub mod interface;
pub mod interrupt;
pub mod regs;
pub mod reset;
pub mod straps;
pub mod tables;

use embedded_hal::delay::DelayNs;

use crate::config::{MasterSlaveState, PhyConfig, PhyInterface};
use crate::error::{ConfigError, ConfigResult, Result};
use crate::hal::mdio::{MAX_PHY_ADDR, MdioBus, check_phy_addr, mmd, mmd_read};
use crate::phy::generic::{CableTestReporter, LinkSettings, PhyDriver, base_t1, ieee802_3};

pub use cable_test::{CableFault, CableTest, CableTestState, TdrStatus};
pub use init::InitStage;
pub use interrupt::InterruptStatus;
pub use reset::ResetKind;
pub use straps::Straps;

use regs::{phy_id, reg, sqi};

// =============================================================================
// Chip Variants
// =============================================================================

/// Supported silicon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipVariant {
    /// DP83TC812
    Dp83tc812,
    /// DP83TC813
    Dp83tc813,
    /// DP83TC814
    Dp83tc814,
}

impl ChipVariant {
    /// Map a PHY identifier to a variant
    pub const fn identify(id: u32) -> ConfigResult<Self> {
        match id {
            phy_id::DP83TC812 => Ok(ChipVariant::Dp83tc812),
            phy_id::DP83TC813 => Ok(ChipVariant::Dp83tc813),
            phy_id::DP83TC814 => Ok(ChipVariant::Dp83tc814),
            _ => Err(ConfigError::UnsupportedPhyId),
        }
    }

    /// PHY identifier of this variant
    pub const fn phy_id(self) -> u32 {
        match self {
            ChipVariant::Dp83tc812 => phy_id::DP83TC812,
            ChipVariant::Dp83tc813 => phy_id::DP83TC813,
            ChipVariant::Dp83tc814 => phy_id::DP83TC814,
        }
    }

    /// Part name
    pub const fn name(self) -> &'static str {
        match self {
            ChipVariant::Dp83tc812 => "TI DP83TC812CS2.0",
            ChipVariant::Dp83tc813 => "TI DP83TC813CS2.0",
            ChipVariant::Dp83tc814 => "TI DP83TC814CS2.0",
        }
    }
}

// =============================================================================
// Device Context
// =============================================================================

/// DP83TC81x PHY driver
#[derive(Debug, Clone)]
pub struct Dp83tc81x {
    /// PHY address on the MDIO bus (0-31)
    addr: u8,
    variant: ChipVariant,
    straps: Straps,
    config: PhyConfig,
    link: LinkSettings,
    init_stage: InitStage,
    cable_test: CableTest,
}

impl Dp83tc81x {
    /// Attach to a PHY and bring it up
    ///
    /// Reads the straps, identifies the variant from `phy_id` and runs
    /// [`PhyDriver::config_init`]. Interrupts are enabled afterwards when
    /// `config.interrupts` asks for them.
    pub fn probe<M: MdioBus, D: DelayNs>(
        addr: u8,
        phy_id: u32,
        config: PhyConfig,
        mdio: &mut M,
        delay: &mut D,
    ) -> Result<Self> {
        check_phy_addr(addr)?;

        let mut straps = Straps::default();
        straps.read(mdio, addr)?;

        let variant = ChipVariant::identify(phy_id)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "{} at {}: {} strap, rgmii={}",
            variant.name(),
            addr,
            if straps.is_master() { "master" } else { "slave" },
            straps.is_rgmii()
        );

        let mut phy = Self {
            addr,
            variant,
            straps,
            config,
            link: LinkSettings::default(),
            init_stage: InitStage::NotStarted,
            cable_test: CableTest::new(),
        };

        phy.config_init(mdio, delay)?;

        if phy.config.interrupts {
            phy.config_intr(mdio, true)?;
        }

        Ok(phy)
    }

    /// Read the PHY identifier at `addr`
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, addr: u8) -> Result<u32> {
        check_phy_addr(addr)?;
        ieee802_3::read_phy_id(mdio, addr)
    }

    /// Identified silicon
    pub const fn variant(&self) -> ChipVariant {
        self.variant
    }

    /// Last strap values read
    pub const fn straps(&self) -> Straps {
        self.straps
    }

    /// Strapped as BASE-T1 master
    pub const fn is_master(&self) -> bool {
        self.straps.is_master()
    }

    /// Strapped for RGMII
    pub const fn is_rgmii(&self) -> bool {
        self.straps.is_rgmii()
    }

    /// Host configuration in effect
    pub const fn config(&self) -> &PhyConfig {
        &self.config
    }

    /// Replace the host configuration
    ///
    /// Takes effect on the next `config_aneg`, `config_intr` or
    /// `config_init` call.
    pub fn set_config(&mut self, config: PhyConfig) {
        self.config = config;
    }

    /// How far the last bring-up got
    pub const fn init_stage(&self) -> InitStage {
        self.init_stage
    }

    /// Progress of the current cable test
    pub const fn cable_test_state(&self) -> CableTestState {
        self.cable_test.state()
    }

    /// Re-read the strap register
    pub fn read_straps<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.straps.read(mdio, self.addr)
    }

    /// Signal quality indicator, `0..=7`
    pub fn get_sqi<M: MdioBus>(&self, mdio: &mut M) -> Result<u8> {
        let raw = mmd_read(mdio, self.addr, mmd::VEND2, reg::SQI)?;
        Ok(((raw >> sqi::SHIFT) & sqi::MASK) as u8)
    }

    /// Highest value [`get_sqi`](Self::get_sqi) can return
    pub const fn get_sqi_max(&self) -> u8 {
        sqi::MAX
    }

    /// Start a TDR cable test
    pub fn cable_test_start<M: MdioBus, D: DelayNs>(
        &mut self,
        mdio: &mut M,
        delay: &mut D,
    ) -> Result<()> {
        self.cable_test.start(mdio, self.addr, delay)
    }

    /// Poll the running cable test
    ///
    /// `Ok(true)` once the result has been delivered to `reporter`.
    pub fn cable_test_get_status<M: MdioBus, R: CableTestReporter>(
        &mut self,
        mdio: &mut M,
        reporter: &mut R,
    ) -> Result<bool> {
        self.cable_test.poll(mdio, self.addr, reporter)
    }

    /// Read and clear pending interrupts
    pub fn ack_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<InterruptStatus> {
        interrupt::ack_interrupt(mdio, self.addr)
    }
}

impl PhyDriver for Dp83tc81x {
    fn address(&self) -> u8 {
        self.addr
    }

    fn config_init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        init::chip_init(
            mdio,
            self.addr,
            &self.straps,
            &self.config,
            &mut self.link,
            delay,
            &mut self.init_stage,
        )?;

        interface::config_interface(mdio, self.addr, &self.config)?;

        #[cfg(feature = "defmt")]
        defmt::info!("{} bring-up complete", self.variant.name());

        Ok(())
    }

    /// Hard reset, then re-read the straps
    ///
    /// The bring-up program is not re-applied.
    fn soft_reset<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        reset::reset(mdio, self.addr, ResetKind::Hard, delay)?;
        self.straps.read(mdio, self.addr)
    }

    fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        if self.config.interface == PhyInterface::Sgmii {
            interface::config_sgmii(mdio, self.addr)?;
        }

        let _changed = base_t1::setup_master_slave(mdio, self.addr, self.config.master_slave)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("master/slave setup changed={}", _changed);

        self.link.autoneg = self.config.autoneg;
        if self.link.autoneg {
            ieee802_3::enable_auto_negotiation(mdio, self.addr)
        } else {
            ieee802_3::force_link(mdio, self.addr, self.link.status)
        }
    }

    fn config_intr<M: MdioBus>(&mut self, mdio: &mut M, enabled: bool) -> Result<()> {
        interrupt::config_intr(mdio, self.addr, enabled)
    }

    /// Refresh link state, then the BASE-T1 role
    ///
    /// A failed role read does not fail the call; the role becomes unknown.
    fn read_status<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::read_status(mdio, self.addr, &mut self.link)?;

        match base_t1::read_master_slave(mdio, self.addr) {
            Ok(state) => self.link.master_slave = state,
            Err(_e) => {
                self.link.master_slave = MasterSlaveState::Unknown;

                #[cfg(feature = "defmt")]
                defmt::debug!("master/slave status read failed: {}", _e);
            }
        }

        Ok(())
    }

    fn link_settings(&self) -> &LinkSettings {
        &self.link
    }
}

// =============================================================================
// Bus Scan
// =============================================================================

/// Scan the MDIO bus for DP83TC81x PHYs
///
/// Returns the variant found at each address. Addresses that fail to answer
/// are reported as empty.
pub fn scan_bus<M: MdioBus>(mdio: &mut M) -> [Option<ChipVariant>; 32] {
    let mut found = [None; 32];

    for addr in 0..=MAX_PHY_ADDR {
        if let Ok(id) = ieee802_3::read_phy_id(mdio, addr) {
            found[addr as usize] = ChipVariant::identify(id).ok();
        }
    }

    found
}
