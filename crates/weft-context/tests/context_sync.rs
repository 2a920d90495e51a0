//! Several contexts sharing one history handle, end to end.

use std::cell::RefCell;
use std::rc::Rc;

use weft_context::{
    AppContextBuilder, History, MemoryHistory, SwitchButtonContextBuilder, WidgetContextBuilder,
};
use weft_location::deserialize_pathname;

fn shared_history(path: &str) -> Rc<dyn History> {
    Rc::new(MemoryHistory::with_path(path))
}

#[test]
fn app_widget_and_switch_share_one_path() {
    let history = shared_history("");

    let app = AppContextBuilder::new()
        .language_url_param("lang")
        .theme_url_param("theme")
        .history(Rc::clone(&history))
        .build();
    let widget = WidgetContextBuilder::new()
        .theme("blue")
        .theme_url_param("wtheme")
        .history(Rc::clone(&history))
        .build();
    let switch = SwitchButtonContextBuilder::new()
        .enabled_url_param("enabled")
        .history(Rc::clone(&history))
        .build();

    app.attach();
    widget.attach();
    switch.attach();

    let dict = deserialize_pathname(&history.current_path());
    assert_eq!(dict.get("lang").map(String::as_str), Some("en"));
    assert_eq!(dict.get("theme").map(String::as_str), Some("default"));
    assert_eq!(dict.get("wtheme").map(String::as_str), Some("blue"));
    assert_eq!(dict.get("enabled").map(String::as_str), Some("false"));
}

#[test]
fn one_context_changing_leaves_sibling_entries_alone() {
    let history = shared_history("");

    let app = AppContextBuilder::new()
        .language_url_param("lang")
        .history(Rc::clone(&history))
        .build();
    let switch = SwitchButtonContextBuilder::new()
        .enabled_url_param("enabled")
        .history(Rc::clone(&history))
        .build();
    app.attach();
    switch.attach();

    app.set_language("ru");

    let dict = deserialize_pathname(&history.current_path());
    assert_eq!(dict.get("lang").map(String::as_str), Some("ru"));
    assert_eq!(dict.get("enabled").map(String::as_str), Some("false"));
}

#[test]
fn url_seeds_every_configured_context_at_attach() {
    let history = shared_history("enabled=true&lang=ru&wtheme=dark");

    let app = AppContextBuilder::new()
        .language_url_param("lang")
        .history(Rc::clone(&history))
        .build();
    let widget = WidgetContextBuilder::new()
        .theme_url_param("wtheme")
        .history(Rc::clone(&history))
        .build();
    let switch = SwitchButtonContextBuilder::new()
        .enabled_url_param("enabled")
        .history(Rc::clone(&history))
        .build();

    app.attach();
    widget.attach();
    switch.attach();

    assert_eq!(app.language(), "ru");
    assert_eq!(widget.theme(), "dark");
    assert!(switch.enabled());
}

#[test]
fn unsynced_contexts_never_touch_the_path() {
    let history = shared_history("lang=en");

    // Neither context configures a url param.
    let widget = WidgetContextBuilder::new()
        .theme("blue")
        .history(Rc::clone(&history))
        .build();
    let switch = SwitchButtonContextBuilder::new()
        .history(Rc::clone(&history))
        .build();
    widget.attach();
    switch.attach();
    widget.set_theme("dark");
    switch.set_enabled(true);

    assert_eq!(history.current_path(), "lang=en");
}

#[test]
fn repeated_changes_replace_the_entry_instead_of_growing_the_path() {
    let history = shared_history("");
    let app = AppContextBuilder::new()
        .theme_url_param("theme")
        .history(Rc::clone(&history))
        .build();
    app.attach();

    for theme in ["dark", "light", "dark", "solarized"] {
        app.set_theme(theme);
    }

    assert_eq!(history.current_path(), "theme=solarized");
}

#[test]
fn set_event_handlers_observe_seeded_and_changed_values() {
    let history = shared_history("lang=ru");
    let languages = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&languages);

    let app = AppContextBuilder::new()
        .language("en")
        .language_url_param("lang")
        .on_language_set(move |language| sink.borrow_mut().push(language.to_owned()))
        .history(Rc::clone(&history))
        .build();

    app.attach();
    app.set_language("fr");

    // Once with the post-seed value, then once per accepted change.
    assert_eq!(
        *languages.borrow(),
        vec!["ru".to_owned(), "fr".to_owned()]
    );
}

#[test]
fn percent_encoded_round_trip_through_a_context() {
    let history = shared_history("");
    let app = AppContextBuilder::new()
        .theme_url_param("theme")
        .history(Rc::clone(&history))
        .build();
    app.attach();
    app.set_theme("high contrast");
    assert_eq!(history.current_path(), "theme=high%20contrast");

    // A second application booting from that URL sees the decoded theme.
    let rebooted = AppContextBuilder::new()
        .theme_url_param("theme")
        .history(Rc::clone(&history))
        .build();
    rebooted.attach();
    assert_eq!(rebooted.theme(), "high contrast");
}
