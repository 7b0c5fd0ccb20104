// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Core kernel support shared by the chip crates.
//!
//! The kernel crate holds the Hardware Interface Layer (HIL) traits, the
//! `StaticRef` wrapper used to reach memory-mapped peripherals, the standard
//! `ErrorCode`, the `debug!` output path and the compile-time configuration
//! object.
//!
//! Most `unsafe` code is in this crate.

#![no_std]
#![warn(unreachable_pub)]

pub mod config;
#[macro_use]
pub mod debug;
pub mod errorcode;
pub mod hil;
pub mod utilities;

pub use crate::errorcode::ErrorCode;
