// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Watchdog registers.
//!
//! Both watchdogs sit in the system controller, the RSWDT after the GPBR
//! block.

use kernel::utilities::StaticRef;
use sam::wdt::WdtRegisters;

pub const WDT_BASE: StaticRef<WdtRegisters> =
    unsafe { StaticRef::new(0x400E_1850 as *const WdtRegisters) };

pub const RSWDT_BASE: StaticRef<WdtRegisters> =
    unsafe { StaticRef::new(0x400E_1900 as *const WdtRegisters) };

#[cfg(test)]
mod tests {
    use super::{RSWDT_BASE, WDT_BASE};

    #[test]
    fn base_addresses() {
        assert_eq!(WDT_BASE.address(), 0x400E_1850);
        assert_eq!(RSWDT_BASE.address(), 0x400E_1900);
    }
}
