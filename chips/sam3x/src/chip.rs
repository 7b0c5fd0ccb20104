// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use sam::wdt::{WatchdogKind, Wdt};

use crate::wdt::WDT_BASE;

pub struct Sam3xDefaultPeripherals {
    pub wdt: Wdt,
}

impl Sam3xDefaultPeripherals {
    pub const fn new(slow_clock_hz: u32) -> Self {
        Self {
            wdt: Wdt::new(WDT_BASE, WatchdogKind::Primary, slow_clock_hz),
        }
    }
}
