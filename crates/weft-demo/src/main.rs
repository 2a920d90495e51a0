#![forbid(unsafe_code)]

//! Demo host: an app bar with language/theme switching, a few themed
//! widgets, and switch buttons, all synced into one in-memory hash path.
//!
//! Run with `RUST_LOG=debug` to watch the sync traffic.

use std::rc::Rc;

use tracing::{debug, info};
use weft_context::{
    AppContextBuilder, History, MemoryHistory, SwitchButtonContextBuilder, WidgetContextBuilder,
};
use weft_i18n::Catalog;
use weft_location::deserialize_pathname;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let catalog = Catalog::builtin();
    let history: Rc<dyn History> = Rc::new(MemoryHistory::new());

    let app = AppContextBuilder::new()
        .language("en")
        .language_url_param("lang")
        .on_language_set(|language| debug!(language, "language set event"))
        .theme("default")
        .theme_url_param("theme")
        .on_theme_set(|theme| debug!(theme, "theme set event"))
        .history(Rc::clone(&history))
        .build();

    let widget_language_switcher = WidgetContextBuilder::new()
        .container_id("language-switcher")
        .on_theme_set(|theme| debug!(theme, "theme set event for widget1"))
        .history(Rc::clone(&history))
        .build();

    let widget_current_language = WidgetContextBuilder::new()
        .container_id("current-language")
        .on_theme_set(|theme| debug!(theme, "theme set event for widget2"))
        .history(Rc::clone(&history))
        .build();

    let widget_switch_panel = WidgetContextBuilder::new()
        .container_id("widget-3")
        .theme_url_param("wtheme")
        .on_theme_set(|theme| debug!(theme, "theme set event for widget3"))
        .history(Rc::clone(&history))
        .build();

    let switch_button_1 = SwitchButtonContextBuilder::new()
        .enabled_url_param("enabled")
        .on_enabled_set(|enabled| debug!(enabled, "enabled set event for switch1"))
        .history(Rc::clone(&history))
        .build();

    let switch_button_2 = SwitchButtonContextBuilder::new()
        .on_enabled_set(|enabled| debug!(enabled, "enabled set event for switch2"))
        .build();

    app.attach();
    widget_language_switcher.attach();
    widget_current_language.attach();
    widget_switch_panel.attach();
    switch_button_1.attach();
    switch_button_2.attach();

    info!(path = %history.current_path(), "after attach");

    // Drive the API the way a host page would.
    widget_switch_panel.set_theme("blue");
    app.set_language("ru");
    app.set_theme("light");
    switch_button_1.set_enabled(true);
    switch_button_2.set_enabled(true);
    widget_switch_panel.set_theme("dark");

    info!(path = %history.current_path(), "after updates");
    info!(
        language = %app.language(),
        on = %catalog.translate("on", &app.language()),
        off = %catalog.translate("off", &app.language()),
        "switch labels"
    );

    let label = if switch_button_1.enabled() { "on" } else { "off" };
    info!(
        switch1 = %catalog.translate(label, &app.language()),
        "switch 1 renders as"
    );

    let dict = deserialize_pathname(&history.current_path());
    info!(?dict, "final path dictionary");
}
