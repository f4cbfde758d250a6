//! `pthread_t` → kernel tid resolution.
//!
//! Calibrate once per process with [`setup_offset`], then resolve any live
//! thread's tid with [`tid_from`]. The calibrated offset depends only on the
//! loaded libc build, so it stays valid for the process lifetime;
//! [`cached_offset`] packages the once-per-process caching.

use std::sync::OnceLock;

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        #[path = "probe/probe_linux.rs"]
        mod imp;
    } else {
        #[path = "probe/probe_fallback.rs"]
        mod imp;
    }
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        /// Opaque platform thread handle, as handed out by the threading library.
        pub type RawThreadHandle = libc::pthread_t;
    } else {
        /// Opaque platform thread handle, as handed out by the threading library.
        pub type RawThreadHandle = usize;
    }
}

/// Kernel-assigned thread id, as reported by external system tools.
pub type KernelTid = i64;

/// Byte offset of the kernel-tid field inside the opaque thread descriptor.
///
/// Only produced by a successful [`setup_offset`] call, so holding one means
/// it was verified against the calling thread's own kernel tid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TidOffset(pub(crate) usize);

impl TidOffset {
    /// Raw byte offset, mostly useful for logging.
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// Calibrate the tid-field offset for this process.
///
/// Scans the calling thread's own descriptor for a field equal to the tid the
/// kernel reports for this thread, and returns the first matching offset.
/// Returns `None` when the technique does not apply: unsupported platform, an
/// unexpected `pthread_t` representation, a failed kernel query, or no match
/// within the scan window.
///
/// Idempotent and side-effect-free; concurrent calls from multiple threads are
/// harmless and every success returns the same offset. The result depends only
/// on the loaded libc, so cache it for the process lifetime (or use
/// [`cached_offset`]) rather than recalibrating per lookup. Do not persist it:
/// another process may load a libc with a different layout.
pub fn setup_offset() -> Option<TidOffset> {
    imp::setup_offset()
}

/// Read the kernel tid of `thread` using a previously calibrated offset.
///
/// Returns `None` once the thread has exited (glibc zeroes the descriptor
/// field on exit) or on platforms without the probing technique. The handle
/// must still be valid: resolving a handle whose thread has been joined or
/// reaped is as undefined as any other use of a dangling `pthread_t`.
pub fn tid_from(thread: RawThreadHandle, offset: TidOffset) -> Option<KernelTid> {
    imp::tid_from(thread, offset)
}

static CACHED_OFFSET: OnceLock<Option<TidOffset>> = OnceLock::new();

/// Process-wide calibrated offset, computed on first use.
///
/// A calibration race between first callers just calibrates redundantly and
/// publishes one of the (identical) results.
pub fn cached_offset() -> Option<TidOffset> {
    *CACHED_OFFSET.get_or_init(setup_offset)
}

/// [`tid_from`] using the process-wide [`cached_offset`].
pub fn tid_for(thread: RawThreadHandle) -> Option<KernelTid> {
    cached_offset().and_then(|offset| tid_from(thread, offset))
}
