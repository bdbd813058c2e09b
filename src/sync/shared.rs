//! ISR-safe PHY wrapper using critical sections.

use super::primitives::CriticalSectionCell;

/// ISR-safe slot holding a PHY driver.
///
/// Starts empty so it can live in a `static`; the driver is installed once
/// probe has succeeded. All access goes through `critical_section::with()`,
/// disabling interrupts for the duration of the closure.
///
/// # Example
///
/// ```ignore
/// static PHY: SharedPhy<Dp83tc81x> = SharedPhy::new();
///
/// PHY.install(Dp83tc81x::probe(0, phy_id, config, &mut mdio, &mut delay)?);
///
/// #[interrupt]
/// fn PHY_IRQ() {
///     PHY.with(|phy| phy.ack_interrupt(&mut mdio));
/// }
/// ```
pub struct SharedPhy<P> {
    inner: CriticalSectionCell<Option<P>>,
}

impl<P> SharedPhy<P> {
    /// Create an empty slot (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(None),
        }
    }

    /// Store a driver, returning the one it replaces
    pub fn install(&self, phy: P) -> Option<P> {
        self.inner.with(|slot| slot.replace(phy))
    }

    /// Remove the driver
    pub fn take(&self) -> Option<P> {
        self.inner.with(Option::take)
    }

    /// Whether a driver is installed
    pub fn is_installed(&self) -> bool {
        self.inner.with(|slot| slot.is_some())
    }

    /// Execute a closure with exclusive access to the driver.
    ///
    /// Returns `None` when no driver is installed.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut P) -> R,
    {
        self.inner.with(|slot| slot.as_mut().map(f))
    }

    /// Like [`with`](Self::with), but also `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut P) -> R,
    {
        self.inner.try_with(|slot| slot.as_mut().map(f)).flatten()
    }
}

impl<P> Default for SharedPhy<P> {
    fn default() -> Self {
        Self::new()
    }
}
