// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral identifiers, also the NVIC interrupt numbers.

pub const WDT: u32 = 4;
pub const RSWDT: u32 = 63;
