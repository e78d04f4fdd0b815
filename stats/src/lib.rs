//! Basic statistics over a sample of unsigned bytes
//!
//! The `find_*` functions follow the firmware convention of logging the problem and returning `0`
//! when handed an empty array. The `try_*` functions return a [`StatsError`] instead and leave the
//! reporting to the caller.
//!
//! NOTE: The median sorts the array it is given.

#![cfg_attr(not(test), no_std)]

use core::fmt::{self, Display, Formatter};

use logger::err;

mod print;

pub use print::{print_array, print_statistics, write_array};

/// Possible errors while analyzing an array
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StatsError {
    /// Array has no elements
    EmptyArray,
}

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArray => write!(f, "Invalid array or size."),
        }
    }
}

/// The four summary values of an array
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Statistics {
    pub minimum: u8,
    pub maximum: u8,
    pub mean: u8,
    pub median: u8,
}

impl Statistics {
    /// Compute every statistic of `array`. Sorts `array` as a side effect of the median.
    pub fn compute(array: &mut [u8]) -> Result<Self, StatsError> {
        Ok(Self {
            minimum: try_minimum(array)?,
            maximum: try_maximum(array)?,
            mean: try_mean(array)?,
            median: try_median(array)?,
        })
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics: ")?;
        writeln!(f, "Minimum: {}", self.minimum)?;
        writeln!(f, "Maximum: {}", self.maximum)?;
        writeln!(f, "Mean: {}", self.mean)?;
        writeln!(f, "Median: {}", self.median)
    }
}

#[inline]
fn check_array(array: &[u8]) -> Result<(), StatsError> {
    if array.is_empty() {
        Err(StatsError::EmptyArray)
    } else {
        Ok(())
    }
}

/// Smallest element of `array`
pub fn try_minimum(array: &[u8]) -> Result<u8, StatsError> {
    array.iter().copied().min().ok_or(StatsError::EmptyArray)
}

/// Largest element of `array`
pub fn try_maximum(array: &[u8]) -> Result<u8, StatsError> {
    array.iter().copied().max().ok_or(StatsError::EmptyArray)
}

/// Integer mean of `array`, truncated toward zero
#[allow(clippy::cast_possible_truncation)]
pub fn try_mean(array: &[u8]) -> Result<u8, StatsError> {
    check_array(array)?;

    let sum: u64 = array.iter().copied().map(u64::from).sum();

    // The mean of bytes always fits in a byte
    Ok((sum / array.len() as u64) as u8)
}

/// Median of `array`. Sorts `array` first.
///
/// With an even number of elements this is the truncated average of the two middle ones.
#[allow(clippy::cast_possible_truncation)]
pub fn try_median(array: &mut [u8]) -> Result<u8, StatsError> {
    check_array(array)?;

    insertion_sort(array);

    let mid = array.len() / 2;
    if array.len() % 2 == 0 {
        Ok(((u16::from(array[mid - 1]) + u16::from(array[mid])) / 2) as u8)
    } else {
        Ok(array[mid])
    }
}

/// Stable, in place, ascending
fn insertion_sort(array: &mut [u8]) {
    for i in 1..array.len() {
        let key = array[i];
        let mut j = i;

        while j > 0 && array[j - 1] > key {
            array[j] = array[j - 1];
            j -= 1;
        }
        array[j] = key;
    }
}

/// Report `error` and fall back to the `0` sentinel
fn or_report(result: Result<u8, StatsError>) -> u8 {
    result.unwrap_or_else(|error| {
        err!("{}", error);
        0
    })
}

/// Smallest element of `array`, or `0` (logged) if it is empty
pub fn find_minimum(array: &[u8]) -> u8 {
    or_report(try_minimum(array))
}

/// Largest element of `array`, or `0` (logged) if it is empty
pub fn find_maximum(array: &[u8]) -> u8 {
    or_report(try_maximum(array))
}

/// Truncated mean of `array`, or `0` (logged) if it is empty
pub fn find_mean(array: &[u8]) -> u8 {
    or_report(try_mean(array))
}

/// Median of `array` (sorting it), or `0` (logged) if it is empty
pub fn find_median(array: &mut [u8]) -> u8 {
    or_report(try_median(array))
}

/// Sort `array` ascending in place with an insertion sort
pub fn sort_array(array: &mut [u8]) {
    if let Err(error) = check_array(array) {
        err!("{}", error);
        return;
    }

    insertion_sort(array);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        let array = [34, 201, 2, 190, 250, 8];
        assert_eq!(find_minimum(&array), 2);
        assert_eq!(find_maximum(&array), 250);

        assert_eq!(find_minimum(&[7]), 7);
        assert_eq!(find_maximum(&[7]), 7);
    }

    #[test]
    fn test_mean_truncates() {
        assert_eq!(find_mean(&[1, 2]), 1);
        assert_eq!(find_mean(&[255, 255, 255]), 255);
        assert_eq!(find_mean(&[10, 20, 31]), 20);
    }

    #[test]
    fn test_median_even() {
        let mut array = [4, 1, 3, 2];
        assert_eq!(find_median(&mut array), 2);
        assert_eq!(array, [1, 2, 3, 4]);

        let mut array = [255, 255];
        assert_eq!(find_median(&mut array), 255);
    }

    #[test]
    fn test_median_odd() {
        let mut array = [5, 1, 3];
        assert_eq!(find_median(&mut array), 3);
        assert_eq!(array, [1, 3, 5]);
    }

    #[test]
    fn test_sort() {
        let mut array = [9, 3, 3, 0, 255, 1, 9, 8];
        sort_array(&mut array);
        assert_eq!(array, [0, 1, 3, 3, 8, 9, 9, 255]);

        // Sorting again changes nothing
        sort_array(&mut array);
        assert_eq!(array, [0, 1, 3, 3, 8, 9, 9, 255]);
    }

    #[test]
    fn test_empty_array() {
        let mut empty: [u8; 0] = [];

        assert_eq!(find_minimum(&empty), 0);
        assert_eq!(find_maximum(&empty), 0);
        assert_eq!(find_mean(&empty), 0);
        assert_eq!(find_median(&mut empty), 0);
        sort_array(&mut empty);

        assert_eq!(try_mean(&empty), Err(StatsError::EmptyArray));
        assert_eq!(Statistics::compute(&mut empty), Err(StatsError::EmptyArray));
        assert_eq!(StatsError::EmptyArray.to_string(), "Invalid array or size.");
    }

    #[test]
    fn test_statistics_summary() {
        let mut array = [8, 2, 6, 4];
        let stats = Statistics::compute(&mut array).unwrap();

        assert_eq!(
            stats,
            Statistics {
                minimum: 2,
                maximum: 8,
                mean: 5,
                median: 5,
            }
        );
        assert_eq!(
            stats.to_string(),
            "Statistics: \nMinimum: 2\nMaximum: 8\nMean: 5\nMedian: 5\n"
        );
        assert_eq!(array, [2, 4, 6, 8]);
    }
}
