//! Resolve kernel thread ids (tids) from opaque `pthread_t` handles.
//!
//! Reporting the tid for a thread allows matching up instrumented application
//! threads with what is seen by external tools, like your favorite task
//! manager or a system-level profiler. Linux libc never wanted to expose a way
//! to go from a `pthread_t` to a tid, but the thread descriptor behind the
//! handle stores it; this crate discovers where, once per process, and reads
//! it on demand for any live thread.
//!
//! The whole mechanism is best effort by design: when the descriptor layout
//! cannot be verified, every operation reports `None` instead of guessing, and
//! on platforms without the probing technique both operations are free no-ops.
//!
//! ```
//! # #[cfg(target_os = "linux")]
//! # {
//! let offset = pthread_tid::setup_offset().expect("calibration succeeds on Linux");
//! let me = unsafe { libc::pthread_self() };
//! assert_eq!(pthread_tid::tid_from(me, offset), pthread_tid::current_tid());
//! # }
//! ```

mod probe;
mod tid;

pub use probe::{
    cached_offset, setup_offset, tid_for, tid_from, KernelTid, RawThreadHandle, TidOffset,
};
pub use tid::current_tid;
