// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Implementations for peripherals shared by the Microchip SAM3X, SAM4S,
//! SAM4E and SAM E70 families.
//!
//! Chip crates supply the base addresses; the register layouts and drivers
//! live here.

#![no_std]
#![crate_name = "sam"]
#![crate_type = "rlib"]

pub mod timeout;
pub mod wdt;
