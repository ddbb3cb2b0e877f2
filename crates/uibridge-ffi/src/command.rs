//! Record-array exports: `get_ui_command` and its paired release.
//!
//! The record layout is part of the external contract: the managed side
//! decodes the raw bytes, so field order, sizes, and alignment are fixed.

use uibridge_core::command::{ui_command_batch, UiCommand};

use crate::alloc;

/// One UI command as it crosses the boundary.
///
/// 16 bytes: a 64-bit signed integer at offset 0, a 64-bit float at offset
/// 8, natural alignment, no padding. Must match the managed-side decoder
/// byte for byte.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiCommandRecord {
    /// Integer payload.
    pub data: i64,
    /// Floating payload.
    pub f: f64,
}

impl From<UiCommand> for UiCommandRecord {
    fn from(cmd: UiCommand) -> Self {
        Self {
            data: cmd.data,
            f: cmd.fraction,
        }
    }
}

/// Produce a fresh batch of UI command records.
///
/// Allocates a contiguous array through the boundary allocator, fills
/// record *i* with `data = i` and `f = i + 0.1`, writes the record count to
/// `out_length`, and transfers ownership of the buffer to the caller.
///
/// The caller releases the buffer with [`free_ui_command`]. Each call
/// yields an independently owned buffer with no aliasing to prior calls.
///
/// Returns null without touching `out_length` if `out_length` is null.
/// Returns null with `*out_length = 0` if allocation fails.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn get_ui_command(out_length: *mut u32) -> *mut UiCommandRecord {
    ffi_guard!(std::ptr::null_mut(), {
        if out_length.is_null() {
            return std::ptr::null_mut();
        }

        let batch = ui_command_batch();
        let ptr = alloc::alloc_array::<UiCommandRecord>(batch.len());
        if ptr.is_null() {
            // SAFETY: out_length is non-null per the check above.
            unsafe { *out_length = 0 };
            return std::ptr::null_mut();
        }

        for (i, cmd) in batch.into_iter().enumerate() {
            // SAFETY: ptr points to batch.len() allocated, suitably aligned
            // record slots; i is in range.
            unsafe { ptr.add(i).write(UiCommandRecord::from(cmd)) };
        }

        // SAFETY: out_length is non-null per the check above.
        unsafe { *out_length = uibridge_core::UI_COMMAND_BATCH_LEN as u32 };
        ptr
    })
}

/// Release a buffer previously returned by [`get_ui_command`].
///
/// Null is a safe no-op. Passing a pointer that did not come from
/// [`get_ui_command`], or freeing the same buffer twice, is undefined
/// behavior — as is releasing the buffer with any allocator other than the
/// boundary pair documented in [`alloc`](crate::alloc).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn free_ui_command(ptr: *mut UiCommandRecord) {
    ffi_guard!((), {
        // SAFETY: ptr is null or a live buffer from get_ui_command, per the
        // caller contract above.
        unsafe { alloc::free_array(ptr) };
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uibridge_core::UI_COMMAND_BATCH_LEN;

    fn fetch() -> (*mut UiCommandRecord, u32) {
        let mut len: u32 = 0;
        let ptr = get_ui_command(&mut len);
        (ptr, len)
    }

    #[test]
    fn record_layout_is_fixed() {
        assert_eq!(std::mem::size_of::<UiCommandRecord>(), 16);
        assert_eq!(std::mem::align_of::<UiCommandRecord>(), 8);

        let rec = UiCommandRecord { data: 0, f: 0.0 };
        let base = &rec as *const UiCommandRecord as usize;
        assert_eq!(&rec.data as *const i64 as usize - base, 0);
        assert_eq!(&rec.f as *const f64 as usize - base, 8);
    }

    #[test]
    fn reports_count_ten_and_non_null_buffer() {
        let (ptr, len) = fetch();
        assert!(!ptr.is_null());
        assert_eq!(len, UI_COMMAND_BATCH_LEN as u32);
        free_ui_command(ptr);
    }

    #[test]
    #[allow(unsafe_code)]
    fn record_i_carries_i_and_i_plus_tenth() {
        let (ptr, len) = fetch();
        assert!(!ptr.is_null());
        // SAFETY: ptr points to len initialized records owned by this test.
        let records = unsafe { std::slice::from_raw_parts(ptr, len as usize) };
        for (i, rec) in records.iter().enumerate() {
            assert_eq!(rec.data, i as i64);
            assert!((rec.f - (i as f64 + 0.1)).abs() < 1e-9);
        }
        free_ui_command(ptr);
    }

    #[test]
    #[allow(unsafe_code)]
    fn consecutive_calls_yield_independent_buffers() {
        let (a, len_a) = fetch();
        let (b, len_b) = fetch();
        assert!(!a.is_null());
        assert!(!b.is_null());
        assert_ne!(a, b, "buffers must not alias");
        assert_eq!(len_a, len_b);

        // SAFETY: both pointers are live buffers of len records.
        let slice_a = unsafe { std::slice::from_raw_parts(a, len_a as usize) };
        let slice_b = unsafe { std::slice::from_raw_parts(b, len_b as usize) };
        assert_eq!(slice_a, slice_b, "contents are deterministic");

        free_ui_command(a);
        free_ui_command(b);
    }

    #[test]
    fn null_out_length_returns_null() {
        assert!(get_ui_command(std::ptr::null_mut()).is_null());
    }

    #[test]
    fn free_null_is_noop() {
        free_ui_command(std::ptr::null_mut());
    }

    #[test]
    fn record_alignment_fits_the_boundary_allocator() {
        assert!(std::mem::align_of::<UiCommandRecord>() <= crate::alloc::BOUNDARY_ALIGN);
    }
}
