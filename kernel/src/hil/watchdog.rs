// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interface for hardware watchdog timers.
//!
//! A watchdog resets the chip unless it is serviced within a configured
//! period. Boards arm it once during startup and then tickle it from the main
//! loop:
//!
//! ```ignore
//! watchdog.start(2_000_000)?;
//! loop {
//!     watchdog.tickle();
//!     // ...
//! }
//! ```

use crate::ErrorCode;

pub trait Watchdog {
    /// Enable the watchdog timer. `period_us` is the time in microseconds
    /// after which the watchdog fires if it is not serviced.
    ///
    /// Returns `INVAL` if the hardware cannot represent `period_us`; the
    /// watchdog configuration is left untouched in that case.
    fn start(&self, period_us: u32) -> Result<(), ErrorCode>;

    /// Disable the watchdog timer.
    ///
    /// Some hardware only accepts one configuration write after reset, so
    /// this may have no effect once `start` has been called.
    fn stop(&self);

    /// Service the watchdog to let the hardware know the application
    /// is still executing.
    fn tickle(&self);

    /// The currently programmed period in microseconds.
    fn period_us(&self) -> u32;
}
