// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Support for printing debug messages from the kernel and chip drivers.
//!
//! A board registers an output sink once during startup:
//!
//! ```ignore
//! unsafe {
//!     kernel::debug::set_debug_writer(&mut *addr_of_mut!(CONSOLE));
//! }
//! ```
//!
//! After that, any crate can print with the `debug!` macro:
//!
//! ```ignore
//! debug!("Watchdog armed, period {}us", period);
//! ```
//!
//! Each message is prefixed with the file and line it came from. Messages
//! printed before a writer is registered are dropped.

use core::fmt::{Arguments, Write};
use core::ptr::addr_of_mut;

/// A byte sink that debug output is written to.
///
/// This is usually a thin wrapper around a UART that writes synchronously.
pub trait IoWrite {
    /// Write `buf`, returning how many bytes were consumed.
    fn write(&mut self, buf: &[u8]) -> usize;
}

static mut DEBUG_WRITER: Option<&'static mut dyn IoWrite> = None;

/// Register the sink used by `debug!`.
///
/// # Safety
///
/// Must be called before any other context can print, typically once from
/// the board's reset handler. Replacing the writer while another context is
/// inside `debug!` is undefined behavior.
pub unsafe fn set_debug_writer(writer: &'static mut dyn IoWrite) {
    *addr_of_mut!(DEBUG_WRITER) = Some(writer);
}

/// Adapter giving an `IoWrite` the `core::fmt::Write` interface.
struct DebugWriterWrapper<'a> {
    writer: &'a mut dyn IoWrite,
}

impl Write for DebugWriterWrapper<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.writer.write(s.as_bytes());
        Ok(())
    }
}

/// Format one debug line into `writer`.
pub fn write_debug_line(
    writer: &mut dyn IoWrite,
    args: Arguments,
    file_line: &(&'static str, u32),
) {
    let mut wrapper = DebugWriterWrapper { writer };
    let (file, line) = *file_line;
    let _ = wrapper.write_fmt(format_args!("TOCK_DEBUG: {}:{}: ", file, line));
    let _ = wrapper.write_fmt(args);
    let _ = wrapper.write_str("\r\n");
}

/// Backend of the `debug!` macro.
pub fn debug_println(args: Arguments, file_line: &(&'static str, u32)) {
    // Debug output only ever happens from the single kernel thread.
    let writer = unsafe { (*addr_of_mut!(DEBUG_WRITER)).as_deref_mut() };
    if let Some(writer) = writer {
        write_debug_line(writer, args, file_line);
    }
}

/// In-kernel `println()` debugging.
#[macro_export]
macro_rules! debug {
    () => ({
        // Allow an empty debug!() to print the location when hit
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_println(format_args!("{}", $msg), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_println(format_args!($fmt, $($arg)+), {
            static _FILE_LINE: (&'static str, u32) = (file!(), line!());
            &_FILE_LINE
        })
    });
}
