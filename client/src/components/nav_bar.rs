//! Fixed top bar with section links and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only chrome that stays visible while scrolling; it is the main entry
//! point into `util::scroll` and the sole writer of the theme flag.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::content::{OWNER_NAME, Section};
use crate::state::theme::ThemeMode;
use crate::util::scroll::scroll_to_section;

/// Icon for the toggle: offers the mode you would switch to.
pub fn toggle_glyph(mode: ThemeMode) -> &'static str {
    if mode.is_dark() { "☀" } else { "☾" }
}

/// Top navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <div class="nav__brand">{OWNER_NAME}</div>
                <div class="nav__actions">
                    <div class="nav__links">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="nav__link"
                                        on:click=move |_| scroll_to_section(section.id())
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="nav__theme-toggle"
                        aria-label="Toggle dark mode"
                        title="Toggle dark mode"
                        on:click=move |_| theme.toggle()
                    >
                        {move || toggle_glyph(theme.mode())}
                    </button>
                </div>
            </div>
        </nav>
    }
}

