#![forbid(unsafe_code)]

//! Hash-location plumbing for Weft contexts.
//!
//! # Role in Weft
//! `weft-location` keeps a named state value consistent with one segment of
//! a URL-hash-style path. The path is a flat `key=value` list joined by `&`
//! (an ad-hoc query-string substitute living in the hash fragment), shared
//! by every context bound to the same [`History`] handle.
//!
//! # This crate provides
//! - [`deserialize_pathname`] / [`serialize_pathname`] for the path
//!   dictionary codec.
//! - [`History`], the injected navigation handle, and [`MemoryHistory`],
//!   the in-process implementation.
//! - [`ParamValue`] codecs plus the two sync operations,
//!   [`sync_state_with_location`] (one-shot, attach time) and
//!   [`sync_history_with_state`] (every change thereafter).
//!
//! # How it fits in the system
//! `weft-context` calls the sync operations from its attach/change
//! lifecycle; hosts construct one history handle per process and hand it to
//! each builder. Nothing here errors: sync is optional cosmetic behavior,
//! and every absent or malformed input is a documented silent no-op.

/// History handle trait and the in-memory implementation.
pub mod history;
/// Path dictionary (de)serialization.
pub mod path;
/// Value codecs and the two sync operations.
pub mod sync;

pub use history::{History, MemoryHistory};
pub use path::{deserialize_pathname, serialize_pathname};
pub use sync::{ParamValue, sync_history_with_state, sync_state_with_location};

// Handles returned by `History::on_change` are ordinary state subscriptions.
pub use weft_state::Subscription;
