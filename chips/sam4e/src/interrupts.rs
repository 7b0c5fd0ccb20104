// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral identifiers, also the NVIC interrupt numbers.
//!
//! Only the sources used by drivers in this workspace are listed.

pub const WDT: u32 = 4;
