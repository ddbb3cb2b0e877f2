//! Core operations for the uibridge native bridge surface.
//!
//! This is the leaf crate with zero dependencies. It holds the pure-Rust
//! semantics behind every exported symbol: the scalar sums and the
//! UI-command batch producer. The C boundary itself (repr(C) mirrors,
//! allocator, exports) lives in `uibridge-ffi`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod ops;

pub use command::{ui_command_batch, UiCommand, UI_COMMAND_BATCH_LEN};
pub use ops::{slow_sum, sum};
