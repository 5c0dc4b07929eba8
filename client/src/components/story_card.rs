//! Traveler story card.

use catalog::Story;
use leptos::prelude::*;

use crate::util::format::story_rating_label;

#[component]
pub fn StoryCard(story: &'static Story) -> impl IntoView {
    let badge = format!("story-badge {}", story.category.badge_class());
    view! {
        <article class="story-card">
            <div class="story-card__media">
                <img class="story-card__image" src=story.image alt=story.title loading="lazy"/>
                <span class=badge>{story.category.label()}</span>
            </div>
            <div class="story-card__body">
                <h3 class="story-card__title">{story.title}</h3>
                <p class="story-card__meta">
                    <span>"✍ " {story.author}</span>
                    <span>"📍 " {story.location}</span>
                    <span>"📅 " {story.formatted_date()}</span>
                </p>
                <p class="story-card__excerpt">{story.excerpt}</p>
                <p class="story-card__content">{story.content}</p>
                <div class="story-card__footer">
                    <span class="story-card__rating">"★ " {story_rating_label(story.rating)}</span>
                </div>
            </div>
        </article>
    }
}
