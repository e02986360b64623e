//! Authoritative window state, focus stack, and bulk layout operations.
//!
//! See `spec.md` §4.1. Every mutator here is a single, self-contained state
//! transition: callers never observe a half-applied `setBounds`, `minimizeAll`, or
//! `tileWindows`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod model;
mod store;

pub use model::{
    LifecycleState, OpenWindowRequest, Rect, SizeConstraints, Window, WindowFlags, WindowId,
    WindowMeta,
};
pub use store::{
    TileMode, WindowStore, WindowStoreError, CASCADE_STEP, CASCADE_WRAP, FALLBACK_HEIGHT,
    FALLBACK_WIDTH,
};
