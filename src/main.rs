//! Runs the statistics routines over a fixed sample and prints the results

use logger::{Writer, println};
use stats::{print_array, print_statistics, sort_array};

/// Size of the data set
const SIZE: usize = 40;

/// The data set
const SAMPLE: [u8; SIZE] = [
    34, 201, 190, 154, 8, 194, 2, 6, //
    114, 88, 45, 76, 123, 87, 25, 23, //
    200, 122, 150, 90, 92, 87, 177, 244, //
    201, 6, 12, 60, 8, 2, 5, 67, //
    7, 87, 250, 230, 99, 3, 100, 90,
];

fn main() {
    Writer::init();

    let mut test = SAMPLE;

    println!("Verbose: Original array.");
    print_array(&test);
    print_statistics(&mut test);

    sort_array(&mut test);
    println!("Sorted Array:");
    print_array(&test);
}
