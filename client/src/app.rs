//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::pages::{
    home::HomePage, hotels::HotelsPage, restaurants::RestaurantsPage, stories::StoriesPage,
};
use crate::state::shell::ShellState;

/// Root application component.
///
/// Provides the shell context and sets up client-side routing. Listing state
/// is page-scoped and is not provided here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(ShellState::default()));

    view! {
        <Title text="KenyaStay - Hotels & Restaurants in Kenya"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("hotels") view=HotelsPage/>
                    <Route path=StaticSegment("restaurants") view=RestaurantsPage/>
                    <Route path=StaticSegment("stories") view=StoriesPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
