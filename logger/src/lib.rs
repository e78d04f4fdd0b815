//! Simple crate to provide logging & printing utils
//!
//! Output goes to every backend enabled through Cargo features. With no backend enabled
//! everything written to [`Writer`] is discarded, which is what a board without a console
//! wants.

#![cfg_attr(not(feature = "host"), no_std)]

use core::fmt::Write;

#[cfg(all(feature = "serial", feature = "host"))]
compile_error!("Both 'serial' and 'host' logging options are enabled. Please choose only one");

// Port I/O faults in user mode, so the UART is only driven on bare metal
#[cfg(all(feature = "serial", target_arch = "x86_64", target_os = "none"))]
mod serial;

/// `true` when the crate was built with the `verbose` feature.
///
/// NOTE: The `verbose!` macro expands in the caller's crate, so it has to check this instead of a
/// `cfg` attribute.
pub const VERBOSE: bool = cfg!(feature = "verbose");

/// Empty struct to implement 'Write' on
pub struct Writer;

/// A macro to print to every enabled backend
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {{
        let _ = core::fmt::Write::write_fmt(&mut $crate::Writer, format_args!($($arg)*));
    }}
}

/// A macro to print to every enabled backend with a newline
#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($($arg:tt)*) => {{
        let _ = core::fmt::Write::write_fmt(&mut $crate::Writer, format_args!("{}\n", format_args!($($arg)*)));
    }}
}

/// A macro to print an info message
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::println!("-> INFO: {}", format_args!($($arg)*));
    }
}

/// A macro to print an error
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::println!("-> ERROR: {}", format_args!($($arg)*));
    }
}

/// A macro to print a warning
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::println!("-> WARNING: {}", format_args!($($arg)*));
    }
}

/// A macro to print only when built with the `verbose` feature
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::VERBOSE {
            $crate::println!("Verbose: {}", format_args!($($arg)*));
        }
    }
}

impl Writer {
    /// Initilize the backends that need it. Call this once before printing anything.
    ///
    /// The `host` backend needs no setup, so hosted programs can skip this.
    pub fn init() {
        #[cfg(all(feature = "serial", target_arch = "x86_64", target_os = "none"))]
        serial::SERIAL_WRITER.init();
    }
}

impl Write for Writer {
    #[allow(unused_variables)]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        #[cfg(all(feature = "serial", target_arch = "x86_64", target_os = "none"))]
        for byte in s.bytes() {
            serial::SERIAL_WRITER.write_byte_all(byte);
        }

        #[cfg(feature = "host")]
        {
            use std::io::Write as _;

            std::io::stdout()
                .lock()
                .write_all(s.as_bytes())
                .map_err(|_| core::fmt::Error)?;
        }

        Ok(())
    }
}
