//! Fallback for platforms without descriptor probing: both operations always
//! report unavailable, so calling code is written once and stays correct
//! everywhere.

use super::{KernelTid, RawThreadHandle, TidOffset};

pub(crate) fn setup_offset() -> Option<TidOffset> {
    None
}

pub(crate) fn tid_from(_thread: RawThreadHandle, _offset: TidOffset) -> Option<KernelTid> {
    None
}
