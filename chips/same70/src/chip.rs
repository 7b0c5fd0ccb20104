// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripherals of the SAM E70 with drivers in the `sam` crate.

use sam::wdt::{WatchdogKind, Wdt};

use crate::wdt::{RSWDT_BASE, WDT_BASE};

pub struct Same70DefaultPeripherals {
    pub wdt: Wdt,
    pub rswdt: Wdt,
}

impl Same70DefaultPeripherals {
    pub const fn new(slow_clock_hz: u32) -> Self {
        Self {
            wdt: Wdt::new(WDT_BASE, WatchdogKind::Primary, slow_clock_hz),
            rswdt: Wdt::new(RSWDT_BASE, WatchdogKind::Reinforced, slow_clock_hz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Same70DefaultPeripherals;
    use crate::{interrupts, wdt};
    use sam::wdt::WatchdogKind;

    #[test]
    fn watchdogs_map_to_system_controller() {
        let peripherals = Same70DefaultPeripherals::new(32_768);
        assert_eq!(peripherals.wdt.kind(), WatchdogKind::Primary);
        assert_eq!(peripherals.rswdt.kind(), WatchdogKind::Reinforced);
        assert_eq!(wdt::WDT_BASE.address(), 0x400E_1850);
        assert_eq!(wdt::RSWDT_BASE.address(), 0x400E_1900);
    }

    #[test]
    fn interrupt_numbers() {
        assert_eq!(interrupts::WDT, 4);
        assert_eq!(interrupts::RSWDT, 63);
    }
}
