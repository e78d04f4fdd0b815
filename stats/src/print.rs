//! Console output of arrays and their statistics

use core::fmt::{self, Write};

use logger::{Writer, err, print, verbose};

use crate::{Statistics, check_array};

/// Values per printed row
const ROW_LEN: usize = 8;

/// Render `array` as `Array:` followed by rows of 8 right-aligned values
pub fn write_array(out: &mut impl Write, array: &[u8]) -> fmt::Result {
    writeln!(out, "Array:")?;

    for (i, value) in array.iter().enumerate() {
        write!(out, "{value:3}")?;
        if i + 1 < array.len() {
            out.write_str(", ")?;
        }
        if (i + 1) % ROW_LEN == 0 {
            out.write_char('\n')?;
        }
    }

    out.write_char('\n')
}

/// Print `array` in rows of 8
pub fn print_array(array: &[u8]) {
    if let Err(error) = check_array(array) {
        err!("{}", error);
        return;
    }

    verbose!("Printing array of size {}.", array.len());

    let _ = write_array(&mut Writer, array);
}

/// Print minimum, maximum, mean and median of `array`. Sorts `array`.
pub fn print_statistics(array: &mut [u8]) {
    match Statistics::compute(array) {
        Ok(stats) => print!("{}", stats),
        Err(error) => {
            err!("{}", error);
        }
    }
}
