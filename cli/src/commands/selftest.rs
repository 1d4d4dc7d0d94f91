//! Self-Test Command
//!
//! Runs every variant's embedded test vectors and reports mismatches with
//! the expected and observed digests.

use std::process::ExitCode;

use harmonia::SelfTestFailure;

/// Run all three variants' self-tests; non-zero exit on any mismatch.
pub fn self_test() -> ExitCode {
    let suites: [(&str, fn() -> Result<(), SelfTestFailure>); 3] = [
        ("HARMONIA v2.2", harmonia::v2::self_test),
        ("HARMONIA-Fast", harmonia::fast::self_test),
        ("HARMONIA-NG", harmonia::ng::self_test),
    ];

    println!("Harmonia Self-Test");
    println!("============================================================");

    let mut failed = false;
    for (name, suite) in suites {
        match suite() {
            Ok(()) => println!("  [PASS] {name}"),
            Err(failure) => {
                println!("  [FAIL] {name}");
                eprintln!("         {failure}");
                failed = true;
            }
        }
    }

    println!("============================================================");
    println!("Result: {}", if failed { "FAIL" } else { "PASS" });

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
