// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Watchdog Timer (WDT) and Reinforced Safety Watchdog Timer (RSWDT).
//!
//! Both peripherals share one register layout. They differ in the key that
//! must accompany a restart, and on the RSWDT the `WDD` field is reserved and
//! must always be written as all ones.
//!
//! The mode register can only be written once after reset on these parts.
//! Writes after that are silently ignored by the hardware, which this driver
//! does not detect.

use core::fmt;

use kernel::config::CONFIG;
use kernel::debug;
use kernel::hil;
use kernel::utilities::registers::interfaces::{Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, FieldValue, LocalRegisterCopy, ReadOnly, ReadWrite,
    WriteOnly,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::timeout;

register_structs! {
    pub WdtRegisters {
        /// Control Register
        (0x00 => cr: WriteOnly<u32, CR::Register>),
        /// Mode Register
        (0x04 => mr: ReadWrite<u32, MR::Register>),
        /// Status Register
        (0x08 => sr: ReadOnly<u32, SR::Register>),
        (0x0C => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Password
        KEY OFFSET(24) NUMBITS(8) [
            /// Accepted by the WDT
            WDT_PASSWD = 0xA5,
            /// Accepted by the RSWDT
            RSWDT_PASSWD = 0xC4
        ],
        /// Watchdog Restart
        WDRSTT OFFSET(0) NUMBITS(1) []
    ],
    pub MR [
        /// Watchdog Idle Halt
        WDIDLEHLT OFFSET(29) NUMBITS(1) [],
        /// Watchdog Debug Halt
        WDDBGHLT OFFSET(28) NUMBITS(1) [],
        /// Watchdog Delta Value, `ALLONES` on the RSWDT
        WDD OFFSET(16) NUMBITS(12) [],
        /// Watchdog Disable
        WDDIS OFFSET(15) NUMBITS(1) [],
        /// Watchdog Reset Processor (not on SAM E70)
        WDRPROC OFFSET(14) NUMBITS(1) [],
        /// Watchdog Reset Enable
        WDRSTEN OFFSET(13) NUMBITS(1) [],
        /// Watchdog Fault Interrupt Enable
        WDFIEN OFFSET(12) NUMBITS(1) [],
        /// Watchdog Counter Value
        WDV OFFSET(0) NUMBITS(12) []
    ],
    pub SR [
        /// Watchdog Error
        WDERR OFFSET(1) NUMBITS(1) [],
        /// Watchdog Underflow
        WDUNF OFFSET(0) NUMBITS(1) []
    ]
];

/// Value the RSWDT requires in the `WDD` position of its mode register.
pub const RSWDT_ALLONES: u16 = 0xFFF;

/// Which of the two watchdog peripherals a driver instance controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchdogKind {
    /// The main watchdog, present on every supported chip.
    Primary,
    /// The reinforced safety watchdog found on SAM4E and SAM E70.
    Reinforced,
}

impl WatchdogKind {
    fn restart_key(self) -> FieldValue<u32, CR::Register> {
        match self {
            WatchdogKind::Primary => CR::KEY::WDT_PASSWD,
            WatchdogKind::Reinforced => CR::KEY::RSWDT_PASSWD,
        }
    }
}

/// Snapshot of the status register.
///
/// Both flags are cleared by the hardware when the register is read.
#[derive(Clone, Copy)]
pub struct WatchdogStatus(LocalRegisterCopy<u32, SR::Register>);

impl fmt::Debug for WatchdogStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("WatchdogStatus")
            .field("underflow", &self.underflow())
            .field("error", &self.error())
            .finish()
    }
}

impl WatchdogStatus {
    /// The counter reached zero since the last read.
    pub fn underflow(&self) -> bool {
        self.0.is_set(SR::WDUNF)
    }

    /// A restart was attempted outside the permitted window since the last
    /// read.
    pub fn error(&self) -> bool {
        self.0.is_set(SR::WDERR)
    }

    pub fn raw(&self) -> u32 {
        self.0.get()
    }
}

pub struct Wdt {
    registers: StaticRef<WdtRegisters>,
    kind: WatchdogKind,
    slow_clock_hz: u32,
}

impl Wdt {
    pub const fn new(base: StaticRef<WdtRegisters>, kind: WatchdogKind, slow_clock_hz: u32) -> Wdt {
        Wdt {
            registers: base,
            kind,
            slow_clock_hz,
        }
    }

    pub fn kind(&self) -> WatchdogKind {
        self.kind
    }

    /// Program the mode register in a single write.
    ///
    /// `counter` and `delta` are truncated to their 12-bit fields and combined
    /// with `mode`. Unless `mode` contains `WDDIS`, the watchdog starts
    /// counting down from `counter` immediately.
    ///
    /// The SAM E70 has no `WDRPROC` bit; `mode` must not contain it there.
    pub fn init(&self, mode: FieldValue<u32, MR::Register>, counter: u16, delta: u16) {
        self.registers
            .mr
            .write(mode + MR::WDV.val(counter.into()) + MR::WDD.val(delta.into()));
    }

    pub fn disable(&self) {
        self.registers.mr.write(MR::WDDIS::SET);
    }

    /// Reload the down-counter.
    pub fn restart(&self) {
        self.registers
            .cr
            .write(self.kind.restart_key() + CR::WDRSTT::SET);
    }

    /// Raw value of the status register.
    pub fn get_status(&self) -> u32 {
        self.registers.sr.get()
    }

    pub fn status(&self) -> WatchdogStatus {
        WatchdogStatus(self.registers.sr.extract())
    }

    /// Period currently programmed in the mode register, in microseconds.
    pub fn get_period_us(&self) -> u32 {
        let counter = self.registers.mr.read(MR::WDV);
        if CONFIG.precise_watchdog_period {
            if let Some(period) = timeout::precise_period_us(counter, self.slow_clock_hz) {
                return period;
            }
        }
        timeout::period_us(counter, self.slow_clock_hz)
    }

    pub fn is_enabled(&self) -> bool {
        !self.registers.mr.is_set(MR::WDDIS)
    }
}

impl hil::watchdog::Watchdog for Wdt {
    fn start(&self, period_us: u32) -> Result<(), ErrorCode> {
        let counter = match timeout::compute_counter_field(period_us, self.slow_clock_hz) {
            Ok(counter) => counter,
            Err(err) => {
                if CONFIG.trace_watchdog {
                    debug!(
                        "{:?}@{:#x}: period {}us not representable at {}Hz",
                        self.kind,
                        self.registers.address(),
                        period_us,
                        self.slow_clock_hz
                    );
                }
                return Err(err.into());
            }
        };

        let ticks = timeout::ticks(counter);
        // Setting the delta to the counter value leaves restarts unrestricted.
        let delta = match self.kind {
            WatchdogKind::Primary => ticks,
            WatchdogKind::Reinforced => RSWDT_ALLONES,
        };
        self.init(
            MR::WDRSTEN::SET + MR::WDDBGHLT::SET + MR::WDIDLEHLT::SET,
            ticks,
            delta,
        );
        self.restart();

        if CONFIG.trace_watchdog {
            debug!(
                "{:?}@{:#x}: armed, {} ticks",
                self.kind,
                self.registers.address(),
                ticks
            );
        }
        Ok(())
    }

    fn stop(&self) {
        self.disable();
        if CONFIG.trace_watchdog {
            debug!("{:?}@{:#x}: disabled", self.kind, self.registers.address());
        }
    }

    fn tickle(&self) {
        self.restart();
    }

    fn period_us(&self) -> u32 {
        self.get_period_us()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::cell::Cell;
    use kernel::hil::watchdog::Watchdog;
    use std::boxed::Box;
    use std::format;

    const SLCK_HZ: u32 = 32_768;

    /// RAM stand-in for the CR, MR and SR words of one peripheral.
    struct FakeWdt {
        words: &'static [Cell<u32>; 3],
    }

    impl FakeWdt {
        fn new() -> FakeWdt {
            FakeWdt {
                words: Box::leak(Box::new(<[Cell<u32>; 3]>::default())),
            }
        }

        fn driver(&self, kind: WatchdogKind) -> Wdt {
            self.driver_at(kind, SLCK_HZ)
        }

        fn driver_at(&self, kind: WatchdogKind, slow_clock_hz: u32) -> Wdt {
            let base = unsafe { StaticRef::new(self.words.as_ptr().cast::<WdtRegisters>()) };
            Wdt::new(base, kind, slow_clock_hz)
        }

        fn cr(&self) -> u32 {
            self.words[0].get()
        }

        fn mr(&self) -> u32 {
            self.words[1].get()
        }

        fn set_mr(&self, value: u32) {
            self.words[1].set(value);
        }

        fn set_sr(&self, value: u32) {
            self.words[2].set(value);
        }
    }

    #[test]
    fn restart_writes_wdt_key() {
        let fake = FakeWdt::new();
        fake.set_mr(0x1234_5678);
        fake.driver(WatchdogKind::Primary).restart();
        assert_eq!(fake.cr(), 0xA500_0001);
        assert_eq!(fake.mr(), 0x1234_5678);
    }

    #[test]
    fn restart_writes_rswdt_key() {
        let fake = FakeWdt::new();
        fake.driver(WatchdogKind::Reinforced).restart();
        assert_eq!(fake.cr(), 0xC400_0001);
    }

    #[test]
    fn disable_writes_only_wddis() {
        let fake = FakeWdt::new();
        fake.set_mr(0x3FFF_2FFF);
        let wdt = fake.driver(WatchdogKind::Primary);
        assert!(wdt.is_enabled());
        wdt.disable();
        assert_eq!(fake.mr(), 0x0000_8000);
        assert!(!wdt.is_enabled());
        assert_eq!(fake.cr(), 0);
    }

    #[test]
    fn init_packs_mode_counter_and_delta() {
        let fake = FakeWdt::new();
        fake.driver(WatchdogKind::Primary)
            .init(MR::WDRSTEN::SET + MR::WDDBGHLT::SET, 0x123, 0xABC);
        assert_eq!(fake.mr(), 0x1ABC_2123);
    }

    #[test]
    fn init_truncates_counter_and_delta() {
        let fake = FakeWdt::new();
        fake.driver(WatchdogKind::Primary)
            .init(MR::WDFIEN::SET, 0xF123, 0xFFFF);
        assert_eq!(fake.mr(), 0x0FFF_1123);
    }

    #[test]
    fn status_reports_hardware_flags() {
        let fake = FakeWdt::new();
        let wdt = fake.driver(WatchdogKind::Primary);

        assert_eq!(wdt.get_status(), 0);
        assert!(!wdt.status().underflow());
        assert!(!wdt.status().error());

        fake.set_sr(0b01);
        assert!(wdt.status().underflow());
        assert!(!wdt.status().error());

        fake.set_sr(0b11);
        assert_eq!(wdt.get_status(), 0b11);
        assert_eq!(wdt.status().raw(), 0b11);
        assert!(wdt.status().error());
    }

    #[test]
    fn status_debug_names_flags() {
        let fake = FakeWdt::new();
        let wdt = fake.driver(WatchdogKind::Primary);

        fake.set_sr(0b10);
        assert_eq!(
            format!("{:?}", wdt.status()),
            "WatchdogStatus { underflow: false, error: true }"
        );
    }

    #[test]
    fn period_reads_counter_field() {
        let fake = FakeWdt::new();
        let wdt = fake.driver(WatchdogKind::Primary);

        // Bits outside WDV must not leak into the period.
        fake.set_mr(0x3FFF_2FFF);
        let expected = if CONFIG.precise_watchdog_period {
            15_996_093
        } else {
            15_000_000
        };
        assert_eq!(wdt.get_period_us(), expected);

        fake.set_mr(0x0000_8000);
        assert_eq!(wdt.get_period_us(), 0);
    }

    #[test]
    fn period_saturates_when_it_does_not_fit() {
        let fake = FakeWdt::new();
        let wdt = fake.driver_at(WatchdogKind::Primary, 100);

        // 4095 ticks at 100 Hz is about 5242s. The exact value does not fit,
        // so both decoding orders end at the saturated vendor value.
        fake.set_mr(0x0000_0FFF);
        assert_eq!(timeout::precise_period_us(0xFFF, 100), None);
        assert_eq!(wdt.get_period_us(), u32::MAX);
        assert_eq!(Watchdog::period_us(&wdt), u32::MAX);
    }

    #[test]
    fn start_arms_primary_watchdog() {
        let fake = FakeWdt::new();
        let wdt = fake.driver(WatchdogKind::Primary);

        assert_eq!(wdt.start(2_000_000), Ok(()));
        // WDIDLEHLT | WDDBGHLT | WDD=512 | WDRSTEN | WDV=512
        assert_eq!(fake.mr(), 0x3200_2200);
        // Reserved on the SAM E70, so the HIL never sets it.
        assert!(!MR::WDRPROC.is_set(fake.mr()));
        assert_eq!(fake.cr(), 0xA500_0001);
        assert!(wdt.is_enabled());
        assert_eq!(Watchdog::period_us(&wdt), 2_000_000);
    }

    #[test]
    fn start_arms_reinforced_watchdog_with_allones() {
        let fake = FakeWdt::new();
        let wdt = fake.driver(WatchdogKind::Reinforced);

        assert_eq!(wdt.start(2_000_000), Ok(()));
        assert_eq!(fake.mr(), 0x3FFF_2200);
        assert_eq!(fake.cr(), 0xC400_0001);
    }

    #[test]
    fn start_out_of_range_leaves_hardware_untouched() {
        let fake = FakeWdt::new();
        fake.set_mr(0x0000_8000);
        let wdt = fake.driver(WatchdogKind::Primary);

        assert_eq!(wdt.start(1_000), Err(ErrorCode::INVAL));
        assert_eq!(wdt.start(16_000_000), Err(ErrorCode::INVAL));
        assert_eq!(fake.mr(), 0x0000_8000);
        assert_eq!(fake.cr(), 0);
        assert!(!wdt.is_enabled());
    }

    #[test]
    fn stop_and_tickle_map_to_register_writes() {
        let fake = FakeWdt::new();
        let wdt = fake.driver(WatchdogKind::Primary);

        wdt.tickle();
        assert_eq!(fake.cr(), 0xA500_0001);

        wdt.stop();
        assert_eq!(fake.mr(), 0x0000_8000);
    }
}
