//! Traveler stories page.

use catalog::data::STORIES;
use leptos::prelude::*;

use crate::components::story_card::StoryCard;

#[component]
pub fn StoriesPage() -> impl IntoView {
    view! {
        <div class="stories-page">
            <div class="stories-page__header">
                <h1>"Stories from Kenya"</h1>
                <p>
                    "Real experiences from travelers who have discovered the magic of Kenya. "
                    "Let their stories inspire your next adventure."
                </p>
            </div>
            <div class="stories-page__grid">
                {STORIES.iter().map(|story| view! { <StoryCard story=story/> }).collect_view()}
            </div>
            <section class="cta cta--gradient">
                <h2>"Share Your Kenya Story"</h2>
                <p>"Have you experienced the magic of Kenya? We'd love to hear about your adventure!"</p>
                // No submission flow exists yet; the button is decorative.
                <button type="button" class="btn btn--light">"Submit Your Story"</button>
            </section>
        </div>
    }
}
