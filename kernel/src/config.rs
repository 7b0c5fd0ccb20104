// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Data structure for storing compile-time configuration options.
//!
//! Options are fields of a `const` object rather than `#[cfg]` switches
//! sprinkled through the code. Every code path is therefore type-checked no
//! matter which options are enabled, and the compiler folds the disabled ones
//! away after constant propagation, so an `if CONFIG.x` costs nothing in the
//! final binary.
//!
//! Cargo features of the kernel crate are the only input. They are read here
//! and nowhere else.

/// Data structure holding compile-time configuration options.
///
/// To change the configuration, enable the matching kernel cargo feature from
/// the board crate.
pub struct Config {
    /// Whether watchdog drivers should report to the debug output.
    ///
    /// If enabled, drivers print a message when a watchdog is armed or
    /// stopped, and when a requested timeout cannot be represented by the
    /// hardware counter.
    pub trace_watchdog: bool,

    /// Whether watchdog drivers should convert the programmed counter back to
    /// microseconds with full precision.
    ///
    /// The vendor driver divides by the slow clock before scaling to
    /// microseconds, which truncates to whole seconds. That order is kept by
    /// default so readings match firmware built against the vendor code.
    /// When enabled, drivers multiply first and only fall back to the vendor
    /// order if the precise value does not fit in 32 bits.
    pub precise_watchdog_period: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined.
pub const CONFIG: Config = Config {
    trace_watchdog: cfg!(feature = "trace_watchdog"),
    precise_watchdog_period: cfg!(feature = "precise_watchdog_period"),
};
