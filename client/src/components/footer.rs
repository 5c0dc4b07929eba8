//! Site footer with quick links and contact details.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__column">
                    <h3 class="site-footer__brand">"🦒 KenyaStay"</h3>
                    <p>
                        "Your gateway to the best hotels and restaurants across Kenya. "
                        "Discover, book, and experience Kenyan hospitality."
                    </p>
                </div>
                <div class="site-footer__column">
                    <h4>"Quick Links"</h4>
                    <a href="/hotels">"Hotels"</a>
                    <a href="/restaurants">"Restaurants"</a>
                    <a href="/stories">"Travel Stories"</a>
                </div>
                <div class="site-footer__column">
                    <h4>"Popular Destinations"</h4>
                    <span>"Nairobi"</span>
                    <span>"Mombasa"</span>
                    <span>"Maasai Mara"</span>
                    <span>"Diani Beach"</span>
                </div>
                <div class="site-footer__column">
                    <h4>"Contact Us"</h4>
                    <span>"📍 Nairobi, Kenya"</span>
                    <span>"📞 +254 700 000 000"</span>
                    <span>"✉ info@kenyastay.com"</span>
                </div>
            </div>
            <p class="site-footer__legal">"© 2024 KenyaStay. All rights reserved."</p>
        </footer>
    }
}
