#![forbid(unsafe_code)]

//! Shared state contexts for embeddable widgets.
//!
//! # Role in Weft
//! `weft-context` is the crate hosts actually use. Each builder assembles a
//! context — a bundle of observable values with optional hash-location sync
//! and optional set-event handlers:
//!
//! - [`AppContextBuilder`]: application-wide language and theme.
//! - [`WidgetContextBuilder`]: a per-widget theme and mount slot.
//! - [`SwitchButtonContextBuilder`]: a per-switch enabled flag.
//!
//! # Lifecycle
//!
//! `build()` only constructs; nothing touches the history handle until
//! [`attach`](AppContext::attach) is called. Attach performs, per
//! configured value: one seed read from the location, one normalizing
//! write back, then arms the standing subscription so every later setter
//! call writes the path again and fires the set-event handler. Contexts
//! without a URL parameter configured never read or write the path, and
//! contexts without a history handle sync nothing while still arming
//! their handlers.
//!
//! # Sharing
//!
//! Context handles are cheap clones over shared interior state, and all
//! contexts given the same [`History`] handle share one path dictionary:
//! each value owns exactly one `key=value` entry and leaves the rest
//! alone.

mod binding;

/// The application context: language and theme.
pub mod app;
/// The switch-button context: an enabled flag.
pub mod switch_button;
/// The widget context: a per-widget theme.
pub mod widget;

pub use app::{AppContext, AppContextBuilder, DEFAULT_LANGUAGE, DEFAULT_THEME};
pub use switch_button::{SwitchButtonContext, SwitchButtonContextBuilder};
pub use widget::{WidgetContext, WidgetContextBuilder};

// The collaborating handles, re-exported so hosts need only this crate.
pub use weft_location::{History, MemoryHistory};
pub use weft_state::{StateCell, Subscription};
