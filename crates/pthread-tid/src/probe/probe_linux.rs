//! Linux thread-descriptor probing.
//!
//! On glibc and musl a `pthread_t` is a pointer to the thread descriptor
//! (`struct pthread`), and the descriptor stores the kernel tid a few hundred
//! bytes in. The exact offset is private to the libc build, so there is no
//! compile-time constant to use; instead the offset is discovered at runtime
//! by scanning the calling thread's own descriptor for a field equal to the
//! tid the kernel independently reports for this thread.

use super::{KernelTid, RawThreadHandle, TidOffset};
use crate::tid::current_tid;
use std::mem;

/// Upper bound of the calibration scan, in bytes from the descriptor base.
///
/// Generously past every observed tid offset (~720 bytes on x86-64 glibc,
/// under 128 on musl and recent aarch64 glibc) while staying inside glibc's
/// >2 KiB descriptor. Exceeding the window is a calibration failure, not an
/// error.
const MAX_PROBE_BYTES: usize = 1024;

/// Scan step. The tid is a naturally aligned `pid_t` field, so only aligned
/// candidates can be the real one.
const PROBE_STEP: usize = mem::size_of::<libc::pid_t>();

pub(crate) fn setup_offset() -> Option<TidOffset> {
    // The scan treats the handle as a descriptor pointer; bail out on any
    // libc where `pthread_t` is not pointer-sized.
    if mem::size_of::<RawThreadHandle>() != mem::size_of::<usize>() {
        return None;
    }

    let tid = current_tid()? as libc::pid_t;

    // SAFETY: pthread_self has no preconditions.
    let base = unsafe { libc::pthread_self() } as *const u8;

    let mut offset = 0;
    while offset + PROBE_STEP <= MAX_PROBE_BYTES {
        // SAFETY: `base` points at the calling thread's live descriptor,
        // which is larger than MAX_PROBE_BYTES on every supported libc, so
        // the read stays inside its allocation. read_unaligned in case some
        // libc build packs the field oddly.
        let candidate = unsafe { (base.add(offset) as *const libc::pid_t).read_unaligned() };
        if candidate == tid {
            // First match wins: a smaller offset is less likely to alias
            // unrelated data deeper in the descriptor. Heuristic, not proof.
            return Some(TidOffset(offset));
        }
        offset += PROBE_STEP;
    }

    None
}

pub(crate) fn tid_from(thread: RawThreadHandle, offset: TidOffset) -> Option<KernelTid> {
    // SAFETY: `offset` came out of a successful calibration, so it is inside
    // the descriptor; the caller guarantees `thread` has not been released.
    let tid = unsafe { ((thread as *const u8).add(offset.0) as *const libc::pid_t).read_unaligned() };

    // glibc zeroes the field when the thread exits (CLONE_CHILD_CLEARTID),
    // so a non-positive read means the thread is already gone.
    (tid > 0).then_some(tid as KernelTid)
}
