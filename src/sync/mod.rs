//! Synchronization Support
//!
//! - [`CriticalSectionCell`]: ISR-safe interior mutability
//! - [`SharedPhy`]: ISR-safe slot for a PHY driver, for hosts that handle
//!   the PHY interrupt line in an ISR and poll link state from a main loop
//!
//! Only built with the `critical-section` feature.
//!
//! # Example
//!
//! ```ignore
//! use ph_dp83tc81x::sync::SharedPhy;
//! use ph_dp83tc81x::Dp83tc81x;
//!
//! static PHY: SharedPhy<Dp83tc81x> = SharedPhy::new();
//!
//! #[interrupt]
//! fn GPIO_IRQ() {
//!     PHY.with(|phy| {
//!         if let Ok(status) = phy.ack_interrupt(&mut mdio) {
//!             // ...
//!         }
//!     });
//! }
//! ```

mod primitives;
mod shared;

pub use primitives::CriticalSectionCell;
pub use shared::SharedPhy;
