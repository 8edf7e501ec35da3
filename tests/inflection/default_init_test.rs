//! First use of the shared English vocabulary from many threads at once.
//!
//! Kept in its own test binary so nothing else builds the vocabulary first.

use nomen::inflection::default_vocabulary;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 16;

#[test]
fn test_concurrent_first_use_builds_one_instance() {
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let vocab = default_vocabulary();
                assert_eq!(vocab.pluralize("person"), "people");
                vocab as *const _ as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(addresses.len(), THREADS);
    assert!(addresses.iter().all(|a| *a == addresses[0]));
}
