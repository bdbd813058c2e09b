//! Configuration types for the DP83TC81x PHY driver
//!
//! [`PhyConfig`] carries everything the host link layer decides on behalf of
//! the PHY: which MAC interface is wired up, the RGMII internal delays, and
//! the administrative autonegotiation / master-slave / interrupt settings.
//! The driver only reads it.

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// MAC-side interface mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// Media Independent Interface
    Mii,
    /// Reduced Media Independent Interface
    Rmii,
    /// RGMII, delays supplied by the PCB or the MAC
    #[default]
    Rgmii,
    /// RGMII with PHY internal delay on both RX and TX clocks
    RgmiiId,
    /// RGMII with PHY internal delay on the RX clock only
    RgmiiRxid,
    /// RGMII with PHY internal delay on the TX clock only
    RgmiiTxid,
    /// Serial Gigabit Media Independent Interface
    Sgmii,
}

impl PhyInterface {
    /// Whether this is one of the RGMII modes
    pub const fn is_rgmii(self) -> bool {
        matches!(
            self,
            Self::Rgmii | Self::RgmiiId | Self::RgmiiRxid | Self::RgmiiTxid
        )
    }

    /// Whether the mode asks the PHY to delay the RX clock
    pub const fn wants_rx_delay(self) -> bool {
        matches!(self, Self::RgmiiId | Self::RgmiiRxid)
    }

    /// Whether the mode asks the PHY to delay the TX clock
    pub const fn wants_tx_delay(self) -> bool {
        matches!(self, Self::RgmiiId | Self::RgmiiTxid)
    }
}

/// Requested BASE-T1 master/slave role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MasterSlave {
    /// No preference; keep whatever the straps selected
    #[default]
    Unknown,
    /// Prefer master
    PreferredMaster,
    /// Prefer slave
    PreferredSlave,
    /// Force master
    ForcedMaster,
    /// Force slave
    ForcedSlave,
    /// Role selection not supported
    Unsupported,
}

/// Resolved BASE-T1 master/slave role reported by the PHY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MasterSlaveState {
    /// Not yet read
    #[default]
    Unknown,
    /// Configured as master
    Master,
    /// Configured as slave
    Slave,
}

/// Default RGMII internal delay applied when the interface mode requests
/// one and no explicit value is configured
pub const DEFAULT_RGMII_DELAY_PS: i32 = 2000;

/// Host-supplied PHY configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyConfig {
    /// MAC-side interface mode
    pub interface: PhyInterface,
    /// Explicit RX clock internal delay in picoseconds (`<= 0` disables)
    pub rx_internal_delay_ps: Option<i32>,
    /// Explicit TX clock internal delay in picoseconds (`<= 0` disables)
    pub tx_internal_delay_ps: Option<i32>,
    /// Administrative autonegotiation setting
    pub autoneg: bool,
    /// Requested master/slave role
    pub master_slave: MasterSlave,
    /// Whether PHY interrupts are wanted
    pub interrupts: bool,
    /// Propagate a failed role-configuration write during bring-up
    ///
    /// Off by default: the vendor sequence ignores the outcome of that
    /// single write and carries on with the register program.
    pub strict_role_write: bool,
}

impl Default for PhyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PhyConfig {
    /// Create a configuration with default values (plain RGMII, no delays)
    pub const fn new() -> Self {
        Self {
            interface: PhyInterface::Rgmii,
            rx_internal_delay_ps: None,
            tx_internal_delay_ps: None,
            autoneg: false,
            master_slave: MasterSlave::Unknown,
            interrupts: false,
            strict_role_write: false,
        }
    }

    /// Set the MAC-side interface mode
    #[must_use]
    pub const fn with_interface(mut self, interface: PhyInterface) -> Self {
        self.interface = interface;
        self
    }

    /// Set explicit RX/TX internal clock delays in picoseconds
    #[must_use]
    pub const fn with_internal_delays(mut self, rx_ps: i32, tx_ps: i32) -> Self {
        self.rx_internal_delay_ps = Some(rx_ps);
        self.tx_internal_delay_ps = Some(tx_ps);
        self
    }

    /// Enable or disable autonegotiation
    #[must_use]
    pub const fn with_autoneg(mut self, enabled: bool) -> Self {
        self.autoneg = enabled;
        self
    }

    /// Set the requested master/slave role
    #[must_use]
    pub const fn with_master_slave(mut self, master_slave: MasterSlave) -> Self {
        self.master_slave = master_slave;
        self
    }

    /// Enable or disable PHY interrupts
    #[must_use]
    pub const fn with_interrupts(mut self, enabled: bool) -> Self {
        self.interrupts = enabled;
        self
    }

    /// Propagate (instead of ignore) a failed role-configuration write
    #[must_use]
    pub const fn with_strict_role_write(mut self, strict: bool) -> Self {
        self.strict_role_write = strict;
        self
    }

    /// Effective RX internal delay in picoseconds
    pub const fn rx_delay_ps(&self) -> i32 {
        match self.rx_internal_delay_ps {
            Some(ps) => ps,
            None if self.interface.wants_rx_delay() => DEFAULT_RGMII_DELAY_PS,
            None => 0,
        }
    }

    /// Effective TX internal delay in picoseconds
    pub const fn tx_delay_ps(&self) -> i32 {
        match self.tx_internal_delay_ps {
            Some(ps) => ps,
            None if self.interface.wants_tx_delay() => DEFAULT_RGMII_DELAY_PS,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgmii_family_detection() {
        assert!(PhyInterface::Rgmii.is_rgmii());
        assert!(PhyInterface::RgmiiId.is_rgmii());
        assert!(PhyInterface::RgmiiRxid.is_rgmii());
        assert!(PhyInterface::RgmiiTxid.is_rgmii());
        assert!(!PhyInterface::Sgmii.is_rgmii());
        assert!(!PhyInterface::Rmii.is_rgmii());
    }

    #[test]
    fn delays_default_to_disabled_for_plain_rgmii() {
        let config = PhyConfig::new();
        assert_eq!(config.rx_delay_ps(), 0);
        assert_eq!(config.tx_delay_ps(), 0);
    }

    #[test]
    fn rgmii_id_modes_imply_default_delay() {
        let rxid = PhyConfig::new().with_interface(PhyInterface::RgmiiRxid);
        assert_eq!(rxid.rx_delay_ps(), DEFAULT_RGMII_DELAY_PS);
        assert_eq!(rxid.tx_delay_ps(), 0);

        let id = PhyConfig::new().with_interface(PhyInterface::RgmiiId);
        assert_eq!(id.rx_delay_ps(), DEFAULT_RGMII_DELAY_PS);
        assert_eq!(id.tx_delay_ps(), DEFAULT_RGMII_DELAY_PS);
    }

    #[test]
    fn explicit_delays_override_interface_defaults() {
        let config = PhyConfig::new()
            .with_interface(PhyInterface::RgmiiId)
            .with_internal_delays(0, 1500);
        assert_eq!(config.rx_delay_ps(), 0);
        assert_eq!(config.tx_delay_ps(), 1500);
    }

    #[test]
    fn builder_sets_flags() {
        let config = PhyConfig::new()
            .with_autoneg(true)
            .with_interrupts(true)
            .with_master_slave(MasterSlave::ForcedSlave)
            .with_strict_role_write(true);

        assert!(config.autoneg);
        assert!(config.interrupts);
        assert!(config.strict_role_write);
        assert_eq!(config.master_slave, MasterSlave::ForcedSlave);
    }
}
