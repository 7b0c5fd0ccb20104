// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use sam::wdt::{WatchdogKind, Wdt};

use crate::wdt::{RSWDT_BASE, WDT_BASE};

pub struct Sam4eDefaultPeripherals {
    pub wdt: Wdt,
    pub rswdt: Wdt,
}

impl Sam4eDefaultPeripherals {
    /// Both watchdogs are clocked from the same slow clock.
    pub const fn new(slow_clock_hz: u32) -> Self {
        Self {
            wdt: Wdt::new(WDT_BASE, WatchdogKind::Primary, slow_clock_hz),
            rswdt: Wdt::new(RSWDT_BASE, WatchdogKind::Reinforced, slow_clock_hz),
        }
    }
}
