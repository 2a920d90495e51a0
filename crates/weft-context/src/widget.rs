#![forbid(unsafe_code)]

//! The widget context: one theme per embedded widget.
//!
//! Widgets are embedded into host pages individually; each carries its own
//! theme so two instances of the same widget can be skinned differently.
//! The optional container id names the host slot the widget mounts into —
//! plain data here, meaningful only to the embedding layer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;
use weft_location::History;
use weft_state::Subscription;

use crate::app::DEFAULT_THEME;
use crate::binding::ValueBinding;

/// Builds a [`WidgetContext`].
#[derive(Default)]
pub struct WidgetContextBuilder {
    theme: Option<String>,
    theme_url_param: Option<String>,
    on_theme_set: Option<Rc<dyn Fn(&String)>>,
    container_id: Option<String>,
    history: Option<Rc<dyn History>>,
}

impl WidgetContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial theme. Default: [`DEFAULT_THEME`].
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// URL parameter to keep in sync with the theme. Omitting this
    /// disables location sync for this widget.
    pub fn theme_url_param(mut self, param: impl Into<String>) -> Self {
        self.theme_url_param = Some(param.into());
        self
    }

    /// Handler invoked once at attach and after every accepted theme
    /// change.
    pub fn on_theme_set(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_theme_set = Some(Rc::new(move |value: &String| handler(value)));
        self
    }

    /// Host slot this widget mounts into.
    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }

    /// Navigation handle to sync against.
    pub fn history(mut self, history: Rc<dyn History>) -> Self {
        self.history = Some(history);
        self
    }

    #[must_use]
    pub fn build(self) -> WidgetContext {
        WidgetContext {
            inner: Rc::new(WidgetContextInner {
                theme: ValueBinding::new(
                    self.theme.unwrap_or_else(|| DEFAULT_THEME.to_owned()),
                    self.theme_url_param,
                    self.on_theme_set,
                ),
                container_id: self.container_id,
                history: self.history,
                subscriptions: RefCell::new(Vec::new()),
                attached: Cell::new(false),
            }),
        }
    }
}

impl std::fmt::Debug for WidgetContextBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetContextBuilder")
            .field("theme", &self.theme)
            .field("theme_url_param", &self.theme_url_param)
            .field("container_id", &self.container_id)
            .finish_non_exhaustive()
    }
}

struct WidgetContextInner {
    theme: ValueBinding<String>,
    container_id: Option<String>,
    history: Option<Rc<dyn History>>,
    subscriptions: RefCell<Vec<Subscription>>,
    attached: Cell<bool>,
}

/// Per-widget theme plus the host slot it mounts into.
#[derive(Clone)]
pub struct WidgetContext {
    inner: Rc<WidgetContextInner>,
}

impl WidgetContext {
    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> String {
        self.inner.theme.cell.get()
    }

    /// Set the theme. Equal values are ignored.
    pub fn set_theme(&self, theme: impl Into<String>) {
        self.inner.theme.cell.set(theme.into());
    }

    /// Watch theme changes. Dropping the guard unsubscribes.
    pub fn watch_theme(&self, callback: impl Fn(&str) + 'static) -> Subscription {
        self.inner
            .theme
            .cell
            .subscribe(move |value: &String| callback(value))
    }

    /// Host slot this widget mounts into, if one was configured.
    #[must_use]
    pub fn container_id(&self) -> Option<&str> {
        self.inner.container_id.as_deref()
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
            .push(self.inner.theme.attach(history));
        debug!(
            theme = %self.inner.theme.cell.get(),
            container_id = self.inner.container_id.as_deref(),
            "widget context attached"
        );
    }

    /// Whether [`attach`](Self::attach) has run.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.attached.get()
    }
}

impl std::fmt::Debug for WidgetContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetContext")
            .field("theme", &self.inner.theme)
            .field("container_id", &self.inner.container_id)
            .field("attached", &self.inner.attached.get())
            .finish()
    }
}
