//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::OWNER_NAME;
use crate::pages::home::HomePage;
use crate::state::contact::ContactForm;
use crate::state::theme::ThemeMode;
use crate::util::dark_mode::{BrowserThemeManager, browser_theme_manager};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Page-wide theme flag.
///
/// Components read the mode through [`ThemeContext::mode`]; only
/// [`ThemeContext::restore`] and [`ThemeContext::toggle`] change it, and both
/// go through the manager so storage and the `<html>` class stay in sync.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
    manager: StoredValue<BrowserThemeManager>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self {
            mode: RwSignal::new(ThemeMode::default()),
            manager: StoredValue::new(browser_theme_manager()),
        }
    }

    /// Current mode (tracked).
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Load the persisted preference. Call once per session.
    pub fn restore(&self) {
        let mut next = ThemeMode::default();
        self.manager.update_value(|m| next = m.restore());
        self.mode.set(next);
    }

    pub fn toggle(&self) {
        let mut next = ThemeMode::default();
        self.manager.update_value(|m| next = m.toggle());
        self.mode.set(next);
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Provides the theme and contact form contexts and mounts the single
/// home route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeContext::new();
    let contact = RwSignal::new(ContactForm::new());

    provide_context(theme);
    provide_context(contact);

    // Effects only run in the browser, after hydration.
    Effect::new(move || theme.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{OWNER_NAME} | Data Scientist & Full Stack Developer")/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
