// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip support for the SAM4E series.

#![no_std]
#![crate_name = "sam4e"]
#![crate_type = "rlib"]

pub mod chip;
pub mod interrupts;
pub mod wdt;
