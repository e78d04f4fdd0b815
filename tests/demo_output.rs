use std::process::Command;

const VERBOSE_ARRAY_LINE: &str = "Verbose: Printing array of size 40.\n";

fn run_demo() -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_embkit"))
        .output()
        .expect("failed to run demo");

    (
        output.status.success(),
        String::from_utf8(output.stdout).expect("demo printed invalid utf-8"),
    )
}

/// Line printed before each array when built with `verbose`
fn verbose_prefix() -> &'static str {
    if cfg!(feature = "verbose") {
        VERBOSE_ARRAY_LINE
    } else {
        ""
    }
}

// Prints the sample, its statistics and the sorted sample, then exits 0.
#[test]
fn demo_prints_statistics_and_sorted_array() {
    let (ok, stdout) = run_demo();
    assert!(ok);

    let expected_stats = "Statistics: \nMinimum: 2\nMaximum: 250\nMean: 93\nMedian: 87\n";
    assert!(stdout.contains(expected_stats), "{stdout}");

    let opening = format!(
        "Verbose: Original array.\n{}Array:\n 34, 201, 190, 154,   8, 194,   2,   6, \n",
        verbose_prefix()
    );
    assert!(stdout.starts_with(&opening), "{stdout}");

    let sorted = stdout
        .split("Sorted Array:\n")
        .nth(1)
        .expect("no sorted array section");
    let sorted_opening = format!(
        "{}Array:\n  2,   2,   3,   5,   6,   6,   7,   8, \n",
        verbose_prefix()
    );
    assert!(sorted.starts_with(&sorted_opening), "{stdout}");
    assert!(sorted.ends_with("190, 194, 200, 201, 201, 230, 244, 250\n\n"));
}

// Both arrays get the size line only in verbose builds.
#[test]
fn demo_verbose_array_size_line() {
    let (ok, stdout) = run_demo();
    assert!(ok);

    let expected = if cfg!(feature = "verbose") { 2 } else { 0 };
    assert_eq!(stdout.matches(VERBOSE_ARRAY_LINE).count(), expected, "{stdout}");
}

#[test]
fn demo_logs_no_errors() {
    let (_, stdout) = run_demo();
    assert!(!stdout.contains("-> ERROR"));
}
