//! DP83TC81x Register Definitions
//!
//! Register addresses and bit fields for the TI DP83TC812/813/814
//! 100BASE-T1 PHYs.
//!
//! # Address Spaces
//!
//! - Clause 22 registers 0-31: standard registers plus the interrupt
//!   status groups
//! - MMD 0x1F (vendor): reset control, straps, TDR, SGMII, DSP
//! - MMD 0x01 (PMA/PMD): BASE-T1 control and the RGMII delay register as
//!   addressed by the vendor bring-up sequence

// =============================================================================
// PHY Identifiers
// =============================================================================

/// PHY identifier constants (`PHYIDR1 << 16 | PHYIDR2`)
pub mod phy_id {
    /// DP83TC812
    pub const DP83TC812: u32 = 0x2000_A271;
    /// DP83TC813
    pub const DP83TC813: u32 = 0x2000_A211;
    /// DP83TC814
    pub const DP83TC814: u32 = 0x2000_A261;
}

// =============================================================================
// Register Addresses
// =============================================================================

/// Clause 22 interrupt status registers
pub mod int_reg {
    /// Interrupt status group 1
    pub const INT_STAT1: u8 = 0x12;
    /// Interrupt status group 2
    pub const INT_STAT2: u8 = 0x13;
    /// Interrupt status group 3
    pub const INT_STAT3: u8 = 0x18;
}

/// Vendor (MMD 0x1F) register addresses
pub mod reg {
    /// TDR control register (start, done, fail)
    pub const TDR_CTRL: u16 = 0x001E;
    /// Reset control register
    pub const RESET_CTRL: u16 = 0x001F;
    /// Autonomous mode control
    pub const AUTONOMOUS_CTRL: u16 = 0x018B;
    /// TDR result register
    pub const TDR_RESULT: u16 = 0x0310;
    /// Strap latch-in register
    pub const STRAP: u16 = 0x045D;
    /// RGMII internal delay control (accessed through MMD 1)
    pub const RGMII_ID_CTRL: u16 = 0x0602;
    /// SGMII control
    pub const SGMII_CTRL: u16 = 0x0608;
    /// DSP register holding the signal quality indicator
    pub const SQI: u16 = 0x0871;
}

// =============================================================================
// Bit Fields
// =============================================================================

/// Reset control register bits
pub mod reset_ctrl {
    /// Hardware reset (re-samples straps)
    pub const HW_RESET: u16 = 1 << 15;
    /// Software reset (restarts the PHY with current register values)
    pub const SW_RESET: u16 = 1 << 14;
}

/// Strap register bits
pub mod strap {
    /// Master mode strapped
    pub const MASTER_MODE: u16 = 1 << 9;
    /// RGMII interface strapped
    pub const RGMII_EN: u16 = 1 << 7;
}

/// Role configuration words for the BASE-T1 PMA/PMD control register
pub mod pma_role {
    /// Master configuration
    pub const MASTER: u16 = 0xC001;
    /// Slave configuration
    pub const SLAVE: u16 = 0x8001;
}

/// Autonomous mode control bits
pub mod autonomous {
    /// Link up without host intervention after reset
    pub const ENABLE: u16 = 1 << 6;
}

/// RGMII internal delay control bits
pub mod rgmii_id {
    /// Shift the RX clock
    pub const RX_CLK_SHIFT: u16 = 1 << 1;
    /// Shift the TX clock
    pub const TX_CLK_SHIFT: u16 = 1 << 0;
}

/// SGMII control value
pub mod sgmii {
    /// Configuration word written for SGMII operation
    pub const CONFIG_VAL: u16 = 0x027B;
}

/// TDR control register bits
pub mod tdr_ctrl {
    /// Start a TDR measurement
    pub const START: u16 = 1 << 15;
    /// Measurement finished
    pub const DONE: u16 = 1 << 1;
    /// Measurement failed
    pub const FAIL: u16 = 1 << 0;
}

/// TDR result register bits
pub mod tdr_result {
    /// Reflection peak detected
    pub const PEAK_DETECT: u16 = 1 << 7;
    /// Peak polarity (set = open, clear = short)
    pub const PEAK_SIGN: u16 = 1 << 6;
    /// Peak location
    pub const LENGTH_MASK: u16 = 0x3F;
    /// Distance units per length step
    pub const LENGTH_SCALE: u32 = 100;
}

/// Signal quality indicator field
pub mod sqi {
    /// Field position
    pub const SHIFT: u16 = 1;
    /// Field mask after shifting
    pub const MASK: u16 = 0x7;
    /// Highest reportable value
    pub const MAX: u8 = 7;
}

/// Interrupt status group 1 enable bits
///
/// Each event's pending flag sits 8 bits above its enable bit.
pub mod int_stat1 {
    /// Master/slave training done
    pub const MS_TRAIN_DONE: u16 = 1 << 2;
    /// ESD event
    pub const ESD_EVENT: u16 = 1 << 3;
    /// Link status change
    pub const LINK_STAT: u16 = 1 << 5;
    /// Energy detected
    pub const ENERGY_DET: u16 = 1 << 6;
    /// Link quality
    pub const LINK_QUAL: u16 = 1 << 7;
}

/// Interrupt status group 2 enable bits
pub mod int_stat2 {
    /// Jabber
    pub const JABBER: u16 = 1 << 0;
    /// Sleep mode change
    pub const SLEEP_MODE: u16 = 1 << 2;
    /// Over-temperature
    pub const OVERTEMP: u16 = 1 << 3;
    /// Over-voltage
    pub const OVERVOLTAGE: u16 = 1 << 6;
    /// Under-voltage
    pub const UNDERVOLTAGE: u16 = 1 << 7;
}

/// Interrupt status group 3 enable bits
pub mod int_stat3 {
    /// Low-power sleep
    pub const LPS: u16 = 1 << 0;
    /// Wake request
    pub const WAKE_REQ: u16 = 1 << 2;
    /// No frame detected
    pub const NO_FRAME: u16 = 1 << 3;
    /// Power-on reset done
    pub const POR_DONE: u16 = 1 << 4;
}

/// Offset from an interrupt enable bit to its pending flag
pub const INT_STATUS_SHIFT: u16 = 8;
