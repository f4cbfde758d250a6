use std::thread;
use std::time::Duration;

// cargo run -p test-threads --example basic_tids
#[cfg(unix)]
fn main() {
    use std::os::unix::thread::JoinHandleExt;

    let Some(offset) = pthread_tid::setup_offset() else {
        println!("tid resolution unavailable on this platform/libc");
        return;
    };
    println!("calibrated tid offset: {} bytes", offset.as_usize());

    let workers: Vec<_> = (0..3)
        .map(|i| {
            thread::spawn(move || {
                println!("[worker {i}] gettid says: {:?}", pthread_tid::current_tid());
                thread::sleep(Duration::from_millis(500));
            })
        })
        .collect();

    // Give the workers a moment to print their own view first.
    thread::sleep(Duration::from_millis(100));

    for (i, worker) in workers.iter().enumerate() {
        let tid = pthread_tid::tid_from(worker.as_pthread_t(), offset);
        println!("[main] worker {i} resolved tid: {:?}", tid);
    }

    for worker in workers {
        worker.join().unwrap();
    }

    println!("\nTid resolution example completed!");
}

#[cfg(not(unix))]
fn main() {
    println!("pthread handles are a unix thing; nothing to demo here");
}
