#[cfg(target_os = "linux")]
mod linux {
    use crossbeam_channel::bounded;
    use pthread_tid::{cached_offset, current_tid, setup_offset, tid_for, tid_from};

    // Main thread calibrates once; every spawned thread's tid resolved through
    // that single offset must equal the tid the thread reported for itself at
    // startup.
    #[test]
    fn one_calibration_covers_all_threads() {
        let offset = setup_offset().expect("calibration should succeed on Linux");

        let (started_tx, started_rx) = bounded(3);
        let (done_tx, done_rx) = bounded::<()>(0);

        let mut workers = Vec::new();
        for _ in 0..3 {
            let started_tx = started_tx.clone();
            let done_rx = done_rx.clone();
            workers.push(std::thread::spawn(move || {
                let handle = unsafe { libc::pthread_self() };
                let tid = current_tid().expect("gettid in worker");
                started_tx.send((handle, tid)).expect("report startup");

                // Stay alive until the main thread has resolved everyone.
                let _ = done_rx.recv();
            }));
        }

        for _ in 0..3 {
            let (handle, self_reported) = started_rx.recv().expect("worker startup");
            let resolved = tid_from(handle, offset).expect("live thread should resolve");
            assert_eq!(
                resolved, self_reported,
                "resolved tid should match the worker's own gettid"
            );
        }

        drop(done_tx);
        for worker in workers {
            worker.join().unwrap();
        }
    }

    #[test]
    fn self_resolution_matches_kernel_query() {
        let offset = setup_offset().expect("calibration should succeed on Linux");
        let me = unsafe { libc::pthread_self() };
        assert_eq!(tid_from(me, offset), current_tid());
    }

    #[test]
    fn cached_offset_agrees_with_fresh_calibration() {
        assert_eq!(cached_offset(), setup_offset());
        assert_eq!(cached_offset(), cached_offset());
    }

    #[test]
    fn tid_for_resolves_through_the_cache() {
        let me = unsafe { libc::pthread_self() };
        assert_eq!(tid_for(me), current_tid());
    }

    #[test]
    fn concurrent_calibrations_agree() {
        let offsets: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(setup_offset))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect();

        let first = offsets[0];
        assert!(first.is_some());
        for offset in offsets {
            assert_eq!(offset, first);
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod fallback {
    use pthread_tid::{cached_offset, setup_offset};

    // No probing technique here: everything reports unavailable, never a
    // plausible-looking number.
    #[test]
    fn fails_closed() {
        assert!(setup_offset().is_none());
        assert!(cached_offset().is_none());
    }
}
