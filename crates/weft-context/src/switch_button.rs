#![forbid(unsafe_code)]

//! The switch-button context: an on/off flag.
//!
//! The enabled flag has an asymmetric location contract: only the literal
//! parameter text `true` seeds the flag on, so a shared link can hand out
//! a pre-enabled switch, but no link can force one off.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;
use weft_location::History;
use weft_state::Subscription;

use crate::binding::ValueBinding;

/// Builds a [`SwitchButtonContext`].
#[derive(Default)]
pub struct SwitchButtonContextBuilder {
    enabled: Option<bool>,
    enabled_url_param: Option<String>,
    on_enabled_set: Option<Rc<dyn Fn(&bool)>>,
    history: Option<Rc<dyn History>>,
}

impl SwitchButtonContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial flag value. Default: `false`.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// URL parameter to keep in sync with the flag. Omitting this disables
    /// location sync for this switch.
    pub fn enabled_url_param(mut self, param: impl Into<String>) -> Self {
        self.enabled_url_param = Some(param.into());
        self
    }

    /// Handler invoked once at attach and after every accepted change.
    pub fn on_enabled_set(mut self, handler: impl Fn(bool) + 'static) -> Self {
        self.on_enabled_set = Some(Rc::new(move |value: &bool| handler(*value)));
        self
    }

    /// Navigation handle to sync against.
    pub fn history(mut self, history: Rc<dyn History>) -> Self {
        self.history = Some(history);
        self
    }

    #[must_use]
    pub fn build(self) -> SwitchButtonContext {
        SwitchButtonContext {
            inner: Rc::new(SwitchButtonContextInner {
                enabled: ValueBinding::new(
                    self.enabled.unwrap_or_default(),
                    self.enabled_url_param,
                    self.on_enabled_set,
                ),
                history: self.history,
                subscriptions: RefCell::new(Vec::new()),
                attached: Cell::new(false),
            }),
        }
    }
}

impl std::fmt::Debug for SwitchButtonContextBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchButtonContextBuilder")
            .field("enabled", &self.enabled)
            .field("enabled_url_param", &self.enabled_url_param)
            .finish_non_exhaustive()
    }
}

struct SwitchButtonContextInner {
    enabled: ValueBinding<bool>,
    history: Option<Rc<dyn History>>,
    subscriptions: RefCell<Vec<Subscription>>,
    attached: Cell<bool>,
}

/// A single switch's enabled flag.
#[derive(Clone)]
pub struct SwitchButtonContext {
    inner: Rc<SwitchButtonContextInner>,
}

impl SwitchButtonContext {
    /// Current flag value.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.inner.enabled.cell.get()
    }

    /// Set the flag. Equal values are ignored.
    pub fn set_enabled(&self, enabled: bool) {
        self.inner.enabled.cell.set(enabled);
    }

    /// Watch flag changes. Dropping the guard unsubscribes.
    pub fn watch_enabled(&self, callback: impl Fn(bool) + 'static) -> Subscription {
        self.inner
            .enabled
            .cell
            .subscribe(move |value: &bool| callback(*value))
    }

    /// Run the attach sequence. A second call is a no-op.
    pub fn attach(&self) {
        if self.inner.attached.replace(true) {
            return;
        }
        let history = self.inner.history.as_ref();
        self.inner
            .subscriptions
            .borrow_mut()
            .push(self.inner.enabled.attach(history));
        debug!(
            enabled = self.inner.enabled.cell.get(),
            "switch button context attached"
        );
    }

    /// Whether [`attach`](Self::attach) has run.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.attached.get()
    }
}

impl std::fmt::Debug for SwitchButtonContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchButtonContext")
            .field("enabled", &self.inner.enabled)
            .field("attached", &self.inner.attached.get())
            .finish()
    }
}
