// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Conversion between watchdog periods and the 12-bit `WDV` counter.
//!
//! The watchdog counter is clocked by SLCK / 128, so one tick lasts
//! `128 * 1_000_000 / slck_hz` microseconds (truncated), and the 12-bit
//! counter caps a period at 4095 ticks. At the nominal 32.768 kHz slow clock
//! that gives periods from 3906us to 15.995s.
//!
//! Requests are always rounded down to a whole number of ticks.

use kernel::utilities::registers::FieldValue;
use kernel::ErrorCode;

use crate::wdt::MR;

/// Fixed divider between the slow clock and the watchdog counter.
pub const SLCK_DIV: u32 = 128;

/// Largest value of the `WDV` counter.
pub const MAX_COUNT: u32 = 0xFFF;

const US_PER_S: u32 = 1_000_000;

/// The requested period cannot be represented by the watchdog counter at the
/// given slow clock frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange;

impl OutOfRange {
    /// Value the vendor driver returns in place of a counter field when a
    /// request is out of range. No valid field has bits above bit 11 set, so
    /// the two can never be confused.
    pub const RAW: u32 = 0xFFFF_FFFF;
}

impl From<OutOfRange> for ErrorCode {
    fn from(_: OutOfRange) -> Self {
        ErrorCode::INVAL
    }
}

/// Length of one counter tick in microseconds, the shortest period the
/// watchdog can be programmed with.
///
/// `None` if the clock is zero, or so fast that a tick truncates to 0us.
pub fn min_period_us(slow_clock_hz: u32) -> Option<u32> {
    match (SLCK_DIV * US_PER_S).checked_div(slow_clock_hz) {
        Some(0) | None => None,
        Some(tick) => Some(tick),
    }
}

/// Longest period the watchdog can be programmed with, in microseconds.
///
/// Computed in 64 bits: below roughly 123 Hz the bound no longer fits in a
/// `u32`.
pub fn max_period_us(slow_clock_hz: u32) -> Option<u64> {
    min_period_us(slow_clock_hz).map(|tick| u64::from(tick) * u64::from(MAX_COUNT))
}

/// Convert a period into the `WDV` field of the mode register.
///
/// The returned value is already shifted into place and can be combined with
/// other `MR` fields.
pub fn compute_counter_field(
    desired_period_us: u32,
    slow_clock_hz: u32,
) -> Result<FieldValue<u32, MR::Register>, OutOfRange> {
    let tick = min_period_us(slow_clock_hz).ok_or(OutOfRange)?;
    let max = u64::from(tick) * u64::from(MAX_COUNT);

    if desired_period_us < tick || u64::from(desired_period_us) > max {
        return Err(OutOfRange);
    }

    Ok(MR::WDV.val(desired_period_us / tick))
}

/// Like [`compute_counter_field`], but returns the raw register bits and
/// reports failure with [`OutOfRange::RAW`].
///
/// Only useful when handing the value to code that expects the vendor
/// encoding.
pub fn raw_counter_field(desired_period_us: u32, slow_clock_hz: u32) -> u32 {
    compute_counter_field(desired_period_us, slow_clock_hz).map_or(OutOfRange::RAW, u32::from)
}

/// Number of ticks encoded in a `WDV` field value.
pub fn ticks(field: FieldValue<u32, MR::Register>) -> u16 {
    MR::WDV.read(u32::from(field)) as u16
}

/// Period in microseconds of a counter value, computed in the same order as
/// the vendor driver.
///
/// The division by the clock happens before scaling to microseconds, so the
/// result is truncated to whole seconds. Returns 0 for a zero clock.
pub fn period_us(counter: u32, slow_clock_hz: u32) -> u32 {
    let counter = counter & MAX_COUNT;
    (counter * SLCK_DIV)
        .checked_div(slow_clock_hz)
        .map_or(0, |seconds| seconds.saturating_mul(US_PER_S))
}

/// Period in microseconds of a counter value, without the intermediate
/// truncation of [`period_us`].
///
/// `None` for a zero clock or if the period does not fit in a `u32`.
pub fn precise_period_us(counter: u32, slow_clock_hz: u32) -> Option<u32> {
    let counter = u64::from(counter & MAX_COUNT);
    let scaled = counter * u64::from(SLCK_DIV) * u64::from(US_PER_S);
    let period = scaled.checked_div(u64::from(slow_clock_hz))?;
    u32::try_from(period).ok()
}
