//! C FFI surface of uibridge.
//!
//! Exposes a fixed set of C-linkage entry points for a managed UI runtime
//! (Dart/Flutter via `dart:ffi` is the motivating caller). This is the only
//! crate in the workspace that may contain `unsafe` code.
//!
//! Ownership contract: `get_ui_command` allocates through the boundary
//! allocator and transfers the buffer to the caller; the caller returns it
//! through `free_ui_command` (or the allocator's own release primitive, see
//! [`alloc`]). Everything else exchanges scalars by value.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

// Catch panics at the boundary: a panic must not unwind into the foreign
// caller. A caught panic yields the export's documented fallback value.
macro_rules! ffi_guard {
    ($fallback:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => $fallback,
        }
    };
}

pub mod alloc;
pub mod command;
pub mod scalar;

pub use command::{free_ui_command, get_ui_command, UiCommandRecord};
pub use scalar::{sum, sum_long_running, SUM_LONG_RUNNING_DELAY};
