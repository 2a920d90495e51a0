#![forbid(unsafe_code)]

//! The application context: language and theme, shared by every widget
//! under one host application.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;
use weft_location::History;
use weft_state::Subscription;

use crate::binding::ValueBinding;

/// Language used when the builder does not set one.
pub const DEFAULT_LANGUAGE: &str = "en";
/// Theme used when the builder does not set one.
pub const DEFAULT_THEME: &str = "default";

/// Builds an [`AppContext`].
///
/// ```
/// use std::rc::Rc;
/// use weft_context::{AppContextBuilder, History, MemoryHistory};
///
/// let history: Rc<dyn History> = Rc::new(MemoryHistory::new());
/// let app = AppContextBuilder::new()
///     .language("en")
///     .language_url_param("lang")
///     .theme("default")
///     .theme_url_param("theme")
///     .history(Rc::clone(&history))
///     .build();
/// app.attach();
/// app.set_theme("dark");
/// assert_eq!(history.current_path(), "lang=en&theme=dark");
/// ```
#[derive(Default)]
pub struct AppContextBuilder {
    language: Option<String>,
    language_url_param: Option<String>,
    on_language_set: Option<Rc<dyn Fn(&String)>>,
    theme: Option<String>,
    theme_url_param: Option<String>,
    on_theme_set: Option<Rc<dyn Fn(&String)>>,
    history: Option<Rc<dyn History>>,
}

impl AppContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial language. Default: [`DEFAULT_LANGUAGE`].
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// URL parameter to keep in sync with the language. Omitting this
    /// disables location sync for the language entirely.
    pub fn language_url_param(mut self, param: impl Into<String>) -> Self {
        self.language_url_param = Some(param.into());
        self
    }

    /// Handler invoked once at attach and after every accepted language
    /// change.
    pub fn on_language_set(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_language_set = Some(Rc::new(move |value: &String| handler(value)));
        self
    }

    /// Initial theme. Default: [`DEFAULT_THEME`].
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// URL parameter to keep in sync with the theme.
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

    /// Navigation handle to sync against. Without one the context still
    /// works; it just never touches any location.
    pub fn history(mut self, history: Rc<dyn History>) -> Self {
        self.history = Some(history);
        self
    }

    #[must_use]
    pub fn build(self) -> AppContext {
        AppContext {
            inner: Rc::new(AppContextInner {
                language: ValueBinding::new(
                    self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned()),
                    self.language_url_param,
                    self.on_language_set,
                ),
                theme: ValueBinding::new(
                    self.theme.unwrap_or_else(|| DEFAULT_THEME.to_owned()),
                    self.theme_url_param,
                    self.on_theme_set,
                ),
                history: self.history,
                subscriptions: RefCell::new(Vec::new()),
                attached: Cell::new(false),
            }),
        }
    }
}

impl std::fmt::Debug for AppContextBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContextBuilder")
            .field("language", &self.language)
            .field("language_url_param", &self.language_url_param)
            .field("theme", &self.theme)
            .field("theme_url_param", &self.theme_url_param)
            .finish_non_exhaustive()
    }
}

struct AppContextInner {
    language: ValueBinding<String>,
    theme: ValueBinding<String>,
    history: Option<Rc<dyn History>>,
    subscriptions: RefCell<Vec<Subscription>>,
    attached: Cell<bool>,
}

/// Application-wide language and theme.
///
/// Cloning shares the same state. See the crate docs for the
/// build/attach lifecycle.
#[derive(Clone)]
pub struct AppContext {
    inner: Rc<AppContextInner>,
}

impl AppContext {
    /// Current language.
    #[must_use]
    pub fn language(&self) -> String {
        self.inner.language.cell.get()
    }

    /// Set the language. Equal values are ignored.
    pub fn set_language(&self, language: impl Into<String>) {
        self.inner.language.cell.set(language.into());
    }

    /// Watch language changes. Dropping the guard unsubscribes.
    pub fn watch_language(&self, callback: impl Fn(&str) + 'static) -> Subscription {
        self.inner
            .language
            .cell
            .subscribe(move |value: &String| callback(value))
    }

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

    /// Run the attach sequence: seed both values from the location,
    /// normalize the location from the (possibly updated) values, then arm
    /// the standing write-back/handler subscriptions. A second call is a
    /// no-op.
    pub fn attach(&self) {
        if self.inner.attached.replace(true) {
            return;
        }
        let history = self.inner.history.as_ref();
        let mut subscriptions = self.inner.subscriptions.borrow_mut();
        subscriptions.push(self.inner.language.attach(history));
        subscriptions.push(self.inner.theme.attach(history));
        debug!(
            language = %self.inner.language.cell.get(),
            theme = %self.inner.theme.cell.get(),
            "app context attached"
        );
    }

    /// Whether [`attach`](Self::attach) has run.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.attached.get()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("language", &self.inner.language)
            .field("theme", &self.inner.theme)
            .field("attached", &self.inner.attached.get())
            .finish()
    }
}
