// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concurrent emission: one facade, many threads, no external locking.
//! Every captured record must be whole; a partial or interleaved line is a
//! sink-serialization bug.

use std::sync::Arc;
use std::thread;
use teelog::{Logger, MemorySink};

const THREADS: usize = 8;
const RECORDS_PER_THREAD: usize = 500;

#[test]
fn records_from_many_threads_land_whole() {
    let sink = Arc::new(MemorySink::new());
    let logger = Arc::new(Logger::with_sinks(vec![sink.clone()]));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..RECORDS_PER_THREAD {
                    logger.info(&format!("thread {} record {} end", thread_id, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread should not panic");
    }

    let lines = sink.drain();
    assert_eq!(lines.len(), THREADS * RECORDS_PER_THREAD);

    for line in &lines {
        // A whole record: one timestamp, one level token, one message that
        // runs to its terminator.
        assert!(line.contains(" [INFO] "), "interleaved or partial: {:?}", line);
        assert!(line.ends_with(" end"), "interleaved or partial: {:?}", line);
        assert_eq!(line.matches(" [INFO] ").count(), 1, "merged lines: {:?}", line);
    }
}

#[test]
fn concurrent_emission_to_console_does_not_panic() {
    // Can't capture stdout portably here; this exercises the locked write
    // path under contention and the per-record whole-line check above
    // covers the serialization property.
    let logger = Arc::new(Logger::console());

    let handles: Vec<_> = (0..4)
        .map(|thread_id| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    logger.info(&format!("console thread {} record {}", thread_id, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread should not panic");
    }
    logger.flush();
}
