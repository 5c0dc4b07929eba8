//! Site header with brand and primary navigation.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::shell::ShellState;

#[derive(Clone, Copy)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/hotels", label: "Hotels" },
    NavLink { href: "/restaurants", label: "Restaurants" },
    NavLink { href: "/stories", label: "Stories" },
];

/// Whether `href` is the current route. Home only matches exactly.
pub(crate) fn nav_link_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

#[component]
pub fn Header() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let pathname = use_location().pathname;

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                let href = link.href;
                view! {
                    <a
                        class="site-header__link"
                        class:site-header__link--active=move || nav_link_active(&pathname.get(), href)
                        href=href
                        on:click=move |_| shell.update(ShellState::close_menu)
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">
                    <span class="site-header__logo" aria-hidden="true">"🦒"</span>
                    "Kenya"<span class="site-header__brand-accent">"Stay"</span>
                </a>
                <nav class="site-header__nav">{links}</nav>
                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| shell.update(ShellState::toggle_menu)
                >
                    {move || if shell.get().menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || shell.get().menu_open>
                <nav class="site-header__mobile-nav">{links}</nav>
            </Show>
        </header>
    }
}
