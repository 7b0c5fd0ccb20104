// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip support for the SAM3X8E/SAM3X4E.

#![no_std]
#![crate_name = "sam3x"]
#![crate_type = "rlib"]

pub mod chip;
pub mod interrupts;
pub mod wdt;
