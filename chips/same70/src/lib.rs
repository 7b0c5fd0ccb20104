// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip support for the SAM E70 series.
//!
//! The watchdog mode register on this family has no `WDRPROC` bit; bit 14
//! must be written as zero.

#![no_std]
#![crate_name = "same70"]
#![crate_type = "rlib"]

pub mod chip;
pub mod interrupts;
pub mod wdt;
