//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::vec::Vec;

use crate::error::{IoError, Result};
use crate::hal::mdio::{MdioBus, mmd_ctrl, phy_reg};
use crate::phy::generic::{CablePair, CableResultCode, CableTestReporter};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Indirect MMD access latch, one per PHY address
#[derive(Debug, Default, Clone, Copy)]
struct MmdLatch {
    devad: u8,
    reg: u16,
    data_mode: bool,
}

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Clause 22 registers live in a plain map. Accesses through the MMD
/// control/data registers (13/14) are decoded the way a Clause 22 PHY
/// decodes them, so the MMD register file and an ordered log of MMD
/// writes can be inspected directly.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.set_mmd_register(0, 0x1F, 0x045D, 1 << 9); // master strap
///
/// let phy = Dp83tc81x::probe(0, DP83TC812_PHY_ID, PhyConfig::new(), &mut mdio, &mut delay)?;
/// assert!(phy.is_master());
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Clause 22 register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// MMD register values: (phy_addr, devad, reg) -> value
    mmd_registers: RefCell<HashMap<(u8, u8, u16), u16>>,
    /// Indirect access state per PHY address
    latches: RefCell<HashMap<u8, MmdLatch>>,
    /// Record of Clause 22 writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Record of MMD writes: (devad, reg, value)
    mmd_write_log: RefCell<Vec<(u8, u16, u16)>>,
    /// Record of MMD reads: (devad, reg)
    mmd_read_log: RefCell<Vec<(u8, u16)>>,
    /// Clause 22 registers whose reads fail
    failing_reads: RefCell<HashSet<u8>>,
    /// Clause 22 registers whose writes fail
    failing_writes: RefCell<HashSet<u8>>,
    /// MMD registers whose reads fail
    failing_mmd_reads: RefCell<HashSet<(u8, u16)>>,
    /// MMD registers whose writes fail
    failing_mmd_writes: RefCell<HashSet<(u8, u16)>>,
    /// MMD registers whose next write fails, then recovers
    failing_mmd_writes_once: RefCell<HashSet<(u8, u16)>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a Clause 22 register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a Clause 22 register
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Set an MMD register value
    pub fn set_mmd_register(&self, phy_addr: u8, devad: u8, reg: u16, value: u16) {
        self.mmd_registers
            .borrow_mut()
            .insert((phy_addr, devad, reg), value);
    }

    /// Get the current value of an MMD register
    pub fn get_mmd_register(&self, phy_addr: u8, devad: u8, reg: u16) -> Option<u16> {
        self.mmd_registers
            .borrow()
            .get(&(phy_addr, devad, reg))
            .copied()
    }

    /// Get all Clause 22 writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Get all MMD writes that have been made, in order
    pub fn get_mmd_writes(&self) -> Vec<(u8, u16, u16)> {
        self.mmd_write_log.borrow().clone()
    }

    /// Get all MMD reads that have been made, in order
    pub fn get_mmd_reads(&self) -> Vec<(u8, u16)> {
        self.mmd_read_log.borrow().clone()
    }

    /// Clear the write and read logs
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
        self.mmd_write_log.borrow_mut().clear();
        self.mmd_read_log.borrow_mut().clear();
    }

    /// Make reads of a Clause 22 register fail
    pub fn fail_read(&self, reg_addr: u8) {
        self.failing_reads.borrow_mut().insert(reg_addr);
    }

    /// Make writes to a Clause 22 register fail
    pub fn fail_write(&self, reg_addr: u8) {
        self.failing_writes.borrow_mut().insert(reg_addr);
    }

    /// Make reads of an MMD register fail
    pub fn fail_mmd_read(&self, devad: u8, reg: u16) {
        self.failing_mmd_reads.borrow_mut().insert((devad, reg));
    }

    /// Make writes to an MMD register fail
    pub fn fail_mmd_write(&self, devad: u8, reg: u16) {
        self.failing_mmd_writes.borrow_mut().insert((devad, reg));
    }

    /// Make only the next write to an MMD register fail
    pub fn fail_mmd_write_once(&self, devad: u8, reg: u16) {
        self.failing_mmd_writes_once
            .borrow_mut()
            .insert((devad, reg));
    }

    /// Remove all injected failures
    pub fn clear_failures(&self) {
        self.failing_reads.borrow_mut().clear();
        self.failing_writes.borrow_mut().clear();
        self.failing_mmd_reads.borrow_mut().clear();
        self.failing_mmd_writes.borrow_mut().clear();
        self.failing_mmd_writes_once.borrow_mut().clear();
    }

    fn latch(&self, phy_addr: u8) -> MmdLatch {
        self.latches
            .borrow()
            .get(&phy_addr)
            .copied()
            .unwrap_or_default()
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        if self.failing_reads.borrow().contains(&reg_addr) {
            return Err(IoError::BusError.into());
        }

        let latch = self.latch(phy_addr);
        if reg_addr == phy_reg::MMD_DATA && latch.data_mode {
            if self
                .failing_mmd_reads
                .borrow()
                .contains(&(latch.devad, latch.reg))
            {
                return Err(IoError::BusError.into());
            }
            self.mmd_read_log
                .borrow_mut()
                .push((latch.devad, latch.reg));
            return Ok(self
                .get_mmd_register(phy_addr, latch.devad, latch.reg)
                .unwrap_or(0));
        }

        // Return from register map (default 0 if not set)
        Ok(self.get_register(phy_addr, reg_addr).unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        if self.failing_writes.borrow().contains(&reg_addr) {
            return Err(IoError::BusError.into());
        }

        let mut latch = self.latch(phy_addr);
        match reg_addr {
            phy_reg::MMD_CTRL => {
                latch.devad = (value & mmd_ctrl::DEVAD_MASK) as u8;
                latch.data_mode = value & mmd_ctrl::FUNC_DATA != 0;
            }
            phy_reg::MMD_DATA if latch.data_mode => {
                if self
                    .failing_mmd_writes
                    .borrow()
                    .contains(&(latch.devad, latch.reg))
                    || self
                        .failing_mmd_writes_once
                        .borrow_mut()
                        .remove(&(latch.devad, latch.reg))
                {
                    return Err(IoError::BusError.into());
                }
                self.mmd_write_log
                    .borrow_mut()
                    .push((latch.devad, latch.reg, value));
                self.set_mmd_register(phy_addr, latch.devad, latch.reg, value);
            }
            phy_reg::MMD_DATA => latch.reg = value,
            _ => {}
        }
        self.latches.borrow_mut().insert(phy_addr, latch);

        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));
        self.set_register(phy_addr, reg_addr, value);

        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
    /// Each delay request, in nanoseconds
    calls: RefCell<Vec<u64>>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        *self.total_ns.borrow() / 1_000_000
    }

    /// Get each requested delay in milliseconds, in call order
    pub fn calls_ms(&self) -> Vec<u64> {
        self.calls.borrow().iter().map(|ns| ns / 1_000_000).collect()
    }

    /// Reset the delay counter
    pub fn reset(&self) {
        *self.total_ns.borrow_mut() = 0;
        self.calls.borrow_mut().clear();
    }

    fn record(&self, ns: u64) {
        *self.total_ns.borrow_mut() += ns;
        self.calls.borrow_mut().push(ns);
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.record(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(ms as u64 * 1_000_000);
    }
}

// =============================================================================
// Recording Cable Test Reporter
// =============================================================================

/// A single report delivered to the cable test reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CableReport {
    /// Result code for a pair
    Result(CablePair, CableResultCode),
    /// Fault distance for a pair
    FaultLength(CablePair, u32),
}

/// Cable test reporter that records every call
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub reports: Vec<CableReport>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CableTestReporter for RecordingReporter {
    fn result(&mut self, pair: CablePair, code: CableResultCode) {
        self.reports.push(CableReport::Result(pair, code));
    }

    fn fault_length(&mut self, pair: CablePair, length: u32) {
        self.reports.push(CableReport::FaultLength(pair, length));
    }
}
