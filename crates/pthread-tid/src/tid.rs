//! Current-thread kernel id query.

use crate::probe::KernelTid;

/// Return the kernel id of the calling thread, as external tools see it.
///
/// # Platform Support
///
/// - **Linux**: Uses `syscall(SYS_gettid)` to get the kernel thread ID
/// - **macOS**: Uses `pthread_threadid_np()` to get the system-wide thread ID
///
/// Returns `None` on other platforms and when the query fails.
#[inline]
pub fn current_tid() -> Option<KernelTid> {
    #[cfg(target_os = "linux")]
    {
        current_tid_linux()
    }

    #[cfg(target_os = "macos")]
    {
        current_tid_macos()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

#[cfg(target_os = "linux")]
#[inline]
fn current_tid_linux() -> Option<KernelTid> {
    // SAFETY: gettid has no preconditions for the current thread.
    let tid = unsafe { libc::syscall(libc::SYS_gettid) };
    (tid > 0).then_some(tid as KernelTid)
}

#[cfg(target_os = "macos")]
#[inline]
fn current_tid_macos() -> Option<KernelTid> {
    let mut tid: u64 = 0;
    // SAFETY: pthread_threadid_np accepts a null thread for "calling thread"
    // and a valid output pointer.
    let rc = unsafe { libc::pthread_threadid_np(0, &mut tid) };
    (rc == 0).then_some(tid as KernelTid)
}
