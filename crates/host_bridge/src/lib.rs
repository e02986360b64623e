//! postMessage RPC wire format, origin policing, and transport for communication
//! between the shell and sandboxed/federated apps.
//!
//! See `spec.md` §4.6. The wire format ([`BridgeMessage`]) and [`OriginRegistry`] are
//! pure and unit-tested natively; [`transport`] is the only part that touches the DOM,
//! split `wasm32`/native behind one stable function signature the same way
//! `platform_host_web::bridge::interop` splits its IndexedDB glue.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod message;
mod registry;
pub mod transport;

pub use message::{BridgeError, BridgeKind, BridgeMessage, BRIDGE_MARKER};
pub use registry::OriginRegistry;
