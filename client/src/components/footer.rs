//! Page footer.

use leptos::prelude::*;

use crate::content::{FOOTER_NOTICE, FOOTER_TAGLINE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{FOOTER_NOTICE}</p>
            <p class="footer__tagline">{FOOTER_TAGLINE}</p>
        </footer>
    }
}
