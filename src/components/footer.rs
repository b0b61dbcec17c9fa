//! Footer chrome shown under every screen.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__links">
                <a href="#">"Privacy Policy"</a>
                <span class="footer__dot">"\u{2022}"</span>
                <a href="#">"Trademarks"</a>
                <span class="footer__dot">"\u{2022}"</span>
                <a href="#">"Cookies"</a>
            </div>
            <div class="footer__note">
                <p>"\u{a9} 2025 ADAPT LIMS"</p>
                <p class="footer__fine">"For laboratory demonstration purposes only."</p>
            </div>
        </footer>
    }
}
