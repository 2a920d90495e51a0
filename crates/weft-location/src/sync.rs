#![forbid(unsafe_code)]

//! The two sync operations and the value codecs they go through.
//!
//! Sync is opt-in per value: every operation takes the bound URL parameter
//! name as an `Option` and no-ops cleanly when it is `None`. That contract
//! is what lets contexts carry unsynced values without ever touching the
//! path. Nothing in this module returns an error; missing, empty,
//! undecodable, and rejected parameter text all degrade to "leave state
//! alone".

use tracing::{debug, trace};
use weft_state::StateCell;

use crate::history::History;
use crate::path::{deserialize_pathname, serialize_pathname};

/// A value that can live in one hash-path parameter.
///
/// `encode` and `decode` work on plain text; percent-encoding of the
/// encoded form (and -decoding before `decode`) is applied by the sync
/// operations.
pub trait ParamValue: Clone + PartialEq + 'static {
    /// Plain-text form written into the path.
    fn encode(&self) -> String;

    /// Parse decoded parameter text. `None` means the text is rejected and
    /// the bound state keeps its current value.
    fn decode(text: &str) -> Option<Self>;
}

impl ParamValue for String {
    fn encode(&self) -> String {
        self.clone()
    }

    /// Any non-empty text is accepted verbatim.
    fn decode(text: &str) -> Option<Self> {
        if text.is_empty() {
            None
        } else {
            Some(text.to_owned())
        }
    }
}

impl ParamValue for bool {
    fn encode(&self) -> String {
        self.to_string()
    }

    /// Only the literal text `true` is accepted. Everything else,
    /// including `false`, is rejected, so a path can force a switch on
    /// but never force it off.
    fn decode(text: &str) -> Option<Self> {
        (text == "true").then_some(true)
    }
}

/// Seed a bound state value from the current location. Run once, at attach.
///
/// Reads the current path, looks up `param`, percent-decodes the raw text,
/// and pushes the decoded value into `state` only when the codec accepts
/// it. With `param` absent, or the parameter missing/empty/undecodable/
/// rejected, the state keeps its initial value.
pub fn sync_state_with_location<T: ParamValue>(
    param: Option<&str>,
    state: &StateCell<T>,
    history: &dyn History,
) {
    let Some(param) = param else { return };
    let dict = deserialize_pathname(&history.current_path());
    let Some(raw) = dict.get(param).filter(|raw| !raw.is_empty()) else {
        trace!(param, "url parameter absent, state keeps initial value");
        return;
    };
    let Ok(text) = urlencoding::decode(raw) else {
        trace!(param, "undecodable url parameter ignored");
        return;
    };
    if let Some(value) = T::decode(&text) {
        debug!(param, "state seeded from location");
        state.set(value);
    }
}

/// Push the current bound state value into the location. Run on every
/// change of the value (and once at attach, to normalize the path).
///
/// Re-reads the *current* path so sibling parameters survive, overwrites
/// only `param` with the percent-encoded current value, and replaces the
/// history entry in place. With `param` absent this is a complete no-op.
pub fn sync_history_with_state<T: ParamValue>(
    param: Option<&str>,
    state: &StateCell<T>,
    history: &dyn History,
) {
    let Some(param) = param else { return };
    let mut dict = deserialize_pathname(&history.current_path());
    let encoded = urlencoding::encode(&state.with(|value| value.encode())).into_owned();
    dict.insert(param.to_owned(), encoded);
    let path = serialize_pathname(&dict);
    debug!(param, %path, "history updated from state");
    history.replace(&path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;

    #[test]
    fn string_decode_rejects_empty_text() {
        assert_eq!(String::decode(""), None);
        assert_eq!(String::decode("en"), Some("en".to_owned()));
    }

    #[test]
    fn bool_decode_accepts_only_literal_true() {
        assert_eq!(bool::decode("true"), Some(true));
        assert_eq!(bool::decode("false"), None);
        assert_eq!(bool::decode("TRUE"), None);
        assert_eq!(bool::decode("1"), None);
    }

    #[test]
    fn without_param_name_nothing_is_read() {
        let history = MemoryHistory::with_path("lang=en");
        let state = StateCell::new("initial".to_owned());
        sync_state_with_location(None, &state, &history);
        assert_eq!(state.get(), "initial");
    }

    #[test]
    fn without_param_name_nothing_is_written() {
        let history = MemoryHistory::with_path("lang=en");
        let state = StateCell::new("dark".to_owned());
        sync_history_with_state(None, &state, &history);
        assert_eq!(history.current_path(), "lang=en");
    }

    #[test]
    fn configured_param_seeds_state() {
        let history = MemoryHistory::with_path("lang=en&theme=dark");
        let state = StateCell::new("default".to_owned());
        sync_state_with_location(Some("lang"), &state, &history);
        assert_eq!(state.get(), "en");
    }

    #[test]
    fn absent_param_leaves_initial_value() {
        let history = MemoryHistory::with_path("lang=en");
        let state = StateCell::new("default".to_owned());
        sync_state_with_location(Some("theme"), &state, &history);
        assert_eq!(state.get(), "default");
    }

    #[test]
    fn empty_param_value_leaves_initial_value() {
        let history = MemoryHistory::with_path("lang=");
        let state = StateCell::new("default".to_owned());
        sync_state_with_location(Some("lang"), &state, &history);
        assert_eq!(state.get(), "default");
    }

    #[test]
    fn percent_encoded_value_is_decoded() {
        let history = MemoryHistory::with_path("theme=high%20contrast");
        let state = StateCell::new("default".to_owned());
        sync_state_with_location(Some("theme"), &state, &history);
        assert_eq!(state.get(), "high contrast");
    }

    #[test]
    fn write_back_preserves_sibling_params() {
        let history = MemoryHistory::with_path("lang=en&theme=dark");
        let state = StateCell::new("light".to_owned());
        sync_history_with_state(Some("theme"), &state, &history);
        assert_eq!(history.current_path(), "lang=en&theme=light");
    }

    #[test]
    fn write_back_percent_encodes() {
        let history = MemoryHistory::new();
        let state = StateCell::new("high contrast".to_owned());
        sync_history_with_state(Some("theme"), &state, &history);
        assert_eq!(history.current_path(), "theme=high%20contrast");
    }

    #[test]
    fn bool_write_back_emits_literal_text() {
        let history = MemoryHistory::new();
        let state = StateCell::new(false);
        sync_history_with_state(Some("enabled"), &state, &history);
        assert_eq!(history.current_path(), "enabled=false");
    }

    #[test]
    fn enabled_false_in_path_does_not_enable() {
        let history = MemoryHistory::with_path("enabled=false");
        let state = StateCell::new(false);
        sync_state_with_location(Some("enabled"), &state, &history);
        assert!(!state.get());
    }

    #[test]
    fn enabled_true_in_path_enables() {
        let history = MemoryHistory::with_path("enabled=true");
        let state = StateCell::new(false);
        sync_state_with_location(Some("enabled"), &state, &history);
        assert!(state.get());
    }

    #[tracing_test::traced_test]
    #[test]
    fn seeding_emits_a_debug_event() {
        let history = MemoryHistory::with_path("lang=ru");
        let state = StateCell::new("en".to_owned());
        sync_state_with_location(Some("lang"), &state, &history);
        assert!(logs_contain("state seeded from location"));
    }
}
