//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav class="site-footer__links">
                <a href="/">"Home"</a>
                <a href="/events">"Events"</a>
                <a href="/register">"Register"</a>
            </nav>
            <p class="site-footer__note">"Discover events near you."</p>
        </footer>
    }
}
