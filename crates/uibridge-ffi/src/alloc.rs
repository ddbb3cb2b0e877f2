//! Boundary allocator: the heap pair shared with the managed caller.
//!
//! Memory that crosses the boundary must come from an allocator whose
//! release half the caller can also reach. Selection is resolved at build
//! time, two recognized targets:
//!
//! - Windows: the COM task allocator (`CoTaskMemAlloc`/`CoTaskMemFree`),
//!   the pair Dart's FFI helpers free with on that platform.
//! - Everywhere else: the C runtime heap (`malloc`/`free`).
//!
//! Nothing outside this module touches a platform allocator directly.
//! Freeing a boundary buffer with any other allocator is undefined behavior.

/// Alignment guaranteed by both recognized boundary allocators.
///
/// `malloc` returns memory aligned for any fundamental type (at least 8 on
/// supported targets); `CoTaskMemAlloc` guarantees 8. Types crossing the
/// boundary must not require more.
pub const BOUNDARY_ALIGN: usize = 8;

#[cfg(windows)]
#[allow(unsafe_code)]
mod sys {
    use std::ffi::c_void;

    mod com {
        use std::ffi::c_void;

        #[link(name = "ole32")]
        extern "system" {
            pub fn CoTaskMemAlloc(cb: usize) -> *mut c_void;
            pub fn CoTaskMemFree(pv: *mut c_void);
        }
    }

    pub fn alloc(size: usize) -> *mut u8 {
        // SAFETY: CoTaskMemAlloc has no preconditions; it returns null on
        // failure, which the caller checks.
        unsafe { com::CoTaskMemAlloc(size) as *mut u8 }
    }

    /// # Safety
    /// `ptr` must be null or a pointer obtained from [`alloc`] that has not
    /// already been freed.
    pub unsafe fn release(ptr: *mut u8) {
        // SAFETY: precondition forwarded to the caller; CoTaskMemFree
        // accepts null.
        unsafe { com::CoTaskMemFree(ptr as *mut c_void) };
    }
}

#[cfg(not(windows))]
#[allow(unsafe_code)]
mod sys {
    use std::ffi::c_void;

    mod libc {
        use std::ffi::c_void;

        extern "C" {
            pub fn malloc(size: usize) -> *mut c_void;
            pub fn free(ptr: *mut c_void);
        }
    }

    pub fn alloc(size: usize) -> *mut u8 {
        // SAFETY: malloc has no preconditions; it returns null on failure,
        // which the caller checks.
        unsafe { libc::malloc(size) as *mut u8 }
    }

    /// # Safety
    /// `ptr` must be null or a pointer obtained from [`alloc`] that has not
    /// already been freed.
    pub unsafe fn release(ptr: *mut u8) {
        // SAFETY: precondition forwarded to the caller; free accepts null.
        unsafe { libc::free(ptr as *mut c_void) };
    }
}

/// Allocate an uninitialized contiguous array of `len` values of `T` from
/// the boundary allocator.
///
/// Returns null if `len` is zero, the byte size overflows, or the allocator
/// fails. The returned memory is uninitialized; the caller writes every
/// element before handing the buffer across the boundary.
pub(crate) fn alloc_array<T>(len: usize) -> *mut T {
    debug_assert!(std::mem::align_of::<T>() <= BOUNDARY_ALIGN);
    let size = match std::mem::size_of::<T>().checked_mul(len) {
        Some(s) if s > 0 => s,
        _ => return std::ptr::null_mut(),
    };
    sys::alloc(size) as *mut T
}

/// Release a buffer previously returned by [`alloc_array`].
///
/// Null is a safe no-op (both underlying release primitives accept it).
///
/// # Safety
/// `ptr` must be null or a pointer obtained from [`alloc_array`] that has
/// not already been freed.
#[allow(unsafe_code)]
pub(crate) unsafe fn free_array<T>(ptr: *mut T) {
    // SAFETY: precondition forwarded to the caller.
    unsafe { sys::release(ptr as *mut u8) };
}
