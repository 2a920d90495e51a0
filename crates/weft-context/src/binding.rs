#![forbid(unsafe_code)]

//! One bound value: cell + optional URL parameter + optional set handler.
//!
//! Every context is a handful of these. The attach sequence and the
//! standing change subscription live here so the three context kinds stay
//! thin wrappers instead of three copies of the same wiring.

use std::rc::Rc;

use weft_location::{History, ParamValue, sync_history_with_state, sync_state_with_location};
use weft_state::{StateCell, Subscription};

pub(crate) type Handler<T> = Rc<dyn Fn(&T)>;

pub(crate) struct ValueBinding<T: ParamValue> {
    pub(crate) cell: StateCell<T>,
    pub(crate) url_param: Option<String>,
    pub(crate) handler: Option<Handler<T>>,
}

impl<T: ParamValue> ValueBinding<T> {
    pub(crate) fn new(
        initial: T,
        url_param: Option<String>,
        handler: Option<Handler<T>>,
    ) -> Self {
        Self {
            cell: StateCell::new(initial),
            url_param,
            handler,
        }
    }

    /// Run the attach sequence for this value and arm its standing
    /// subscription. The returned guard must be kept alive by the context.
    ///
    /// Order matters: the location seed and the normalizing write-back run
    /// before the subscription exists, so neither echoes through it; the
    /// handler fires once with the post-seed value, then once per accepted
    /// change.
    pub(crate) fn attach(&self, history: Option<&Rc<dyn History>>) -> Subscription {
        if let Some(history) = history {
            sync_state_with_location(self.url_param.as_deref(), &self.cell, history.as_ref());
            sync_history_with_state(self.url_param.as_deref(), &self.cell, history.as_ref());
        }
        if let Some(handler) = &self.handler {
            self.cell.with(|value| handler(value));
        }

        let cell = self.cell.clone();
        let url_param = self.url_param.clone();
        let history = history.cloned();
        let handler = self.handler.clone();
        self.cell.subscribe(move |value| {
            if let Some(history) = &history {
                sync_history_with_state(url_param.as_deref(), &cell, history.as_ref());
            }
            if let Some(handler) = &handler {
                handler(value);
            }
        })
    }
}

impl<T: ParamValue + std::fmt::Debug> std::fmt::Debug for ValueBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueBinding")
            .field("cell", &self.cell)
            .field("url_param", &self.url_param)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}
