// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip support for the SAM4S series.
//!
//! The SAM4S has a single watchdog; there is no reinforced safety watchdog
//! on this family.

#![no_std]
#![crate_name = "sam4s"]
#![crate_type = "rlib"]

pub mod chip;
pub mod interrupts;
pub mod wdt;
