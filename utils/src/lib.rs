//! Buffer, conversion and allocation helpers shared by the course projects

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod conv;
pub mod mem;
pub mod words;

/// Returns the maximum of two values (potentially) at compile time.
///
/// NOTE: This requires the 2 operands to be able to be evaluated at compile time.
#[macro_export]
macro_rules! const_max {
    ($a:expr, $b:expr) => {
        if $a > $b { $a } else { $b }
    };
}
