// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Watchdog registers.

use kernel::utilities::StaticRef;
use sam::wdt::WdtRegisters;

pub const WDT_BASE: StaticRef<WdtRegisters> =
    unsafe { StaticRef::new(0x400E_1A50 as *const WdtRegisters) };

#[cfg(test)]
mod tests {
    use super::WDT_BASE;

    #[test]
    fn wdt_follows_rtt_in_system_controller() {
        assert_eq!(WDT_BASE.address(), 0x400E_1A50);
    }
}
