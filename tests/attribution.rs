// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site attribution regression tests.
//!
//! The facade routes every level method through one internal emit step, and
//! both layers propagate the caller location.  These tests pin the visible
//! contract: the rendered record names the application's file and line, not
//! a line inside the facade.  If the facade's internal call depth is ever
//! refactored, this is the suite that catches a slipped frame.

use std::sync::Arc;
use teelog::{caller, Logger, MemorySink};

fn capture() -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Logger::with_sinks(vec![sink.clone()]), sink)
}

#[test]
fn info_reports_the_emitting_line() {
    let (logger, sink) = capture();

    let expected_line = line!() + 1;
    logger.info("attribution probe");

    let lines = sink.drain();
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].contains(&format!("attribution.rs:{} ", expected_line)),
        "expected call site attribution.rs:{} in {:?}",
        expected_line,
        lines[0]
    );
}

#[test]
fn each_level_attributes_its_own_call_site() {
    let (logger, sink) = capture();

    let warn_line = line!() + 1;
    logger.warn("warn probe");
    let error_line = line!() + 1;
    logger.error("error probe");

    let lines = sink.drain();
    assert!(lines[0].contains(&format!("attribution.rs:{} ", warn_line)));
    assert!(lines[1].contains(&format!("attribution.rs:{} ", error_line)));
}

#[test]
fn attribution_survives_an_application_wrapper() {
    // An application-side wrapper that opts into propagation is attributed
    // to *its* caller, same as the facade's own layers.
    #[track_caller]
    fn app_wrapper(logger: &Logger) {
        logger.info("wrapped probe");
    }

    let (logger, sink) = capture();
    let expected_line = line!() + 1;
    app_wrapper(&logger);

    let lines = sink.drain();
    assert!(
        lines[0].contains(&format!("attribution.rs:{} ", expected_line)),
        "got {:?}",
        lines[0]
    );
}

#[test]
fn here_names_the_true_call_site() {
    let expected_line = line!() + 1;
    let frame = caller::here(0);

    assert_eq!(
        frame.short_file, "attribution.rs",
        "skip 0 must name this test file, not a frame inside the resolver; got {:?}",
        frame
    );
    assert!(frame.file.ends_with("attribution.rs"), "got {:?}", frame);
    assert_eq!(frame.line, expected_line as i32, "got {:?}", frame);
    assert_eq!(
        frame.format_short(),
        format!("attribution.rs:{} {}", expected_line, frame.short_func)
    );
}
