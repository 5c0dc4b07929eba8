//! Home-page search widget.
//!
//! Pressing Search only records the criteria to the console. Switching
//! between hotels and restaurants keeps everything already entered.

use catalog::search::KENYAN_CITIES;
use catalog::{PartySize, SearchCriteria, SearchKind};
use leptos::prelude::*;

use crate::util::browser;

#[component]
pub fn SearchSection() -> impl IntoView {
    let criteria = RwSignal::new(SearchCriteria::default());
    let kind = Memo::new(move |_| criteria.with(|c| c.kind));

    let on_search = move |_| criteria.with_untracked(|c| browser::log_info(&c.record()));

    let kind_button = move |target: SearchKind| {
        view! {
            <button
                class="search__kind"
                class:search__kind--active=move || kind.get() == target
                on:click=move |_| criteria.update(|c| c.kind = target)
            >
                {target.label()}
            </button>
        }
    };

    let city_options = KENYAN_CITIES
        .iter()
        .map(|city| view! { <option value=*city>{*city}</option> })
        .collect_view();

    let guest_options = PartySize::all()
        .map(|size| {
            view! {
                <option
                    value=size.get().to_string()
                    selected=move || criteria.with(|c| c.guests == size)
                >
                    {size.label()}
                </option>
            }
        })
        .collect_view();

    let check_in_input = move |input_type: &'static str| {
        view! {
            <input
                type=input_type
                prop:value=move || criteria.with(|c| c.check_in.clone())
                on:input=move |ev| criteria.update(|c| c.check_in = event_target_value(&ev))
            />
        }
    };

    view! {
        <section class="search">
            <div class="search__panel">
                <div class="search__kinds">
                    {kind_button(SearchKind::Hotels)}
                    {kind_button(SearchKind::Restaurants)}
                </div>
                <div class="search__form">
                    <label class="search__field">
                        <span>"Location"</span>
                        <select on:change=move |ev| {
                            criteria.update(|c| c.set_location(&event_target_value(&ev)));
                        }>
                            <option value="">"Select location"</option>
                            {city_options}
                        </select>
                    </label>
                    <Show
                        when=move || kind.get() == SearchKind::Hotels
                        fallback=move || {
                            view! {
                                <label class="search__field">
                                    <span>"Date & Time"</span>
                                    {check_in_input("datetime-local")}
                                </label>
                            }
                        }
                    >
                        <label class="search__field">
                            <span>"Check-in"</span>
                            {check_in_input("date")}
                        </label>
                        <label class="search__field">
                            <span>"Check-out"</span>
                            <input
                                type="date"
                                prop:value=move || criteria.with(|c| c.check_out.clone())
                                on:input=move |ev| criteria.update(|c| c.check_out = event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="search__field">
                        <span>{move || kind.get().party_label()}</span>
                        <select on:change=move |ev| {
                            if let Some(size) = PartySize::parse(&event_target_value(&ev)) {
                                criteria.update(|c| c.guests = size);
                            }
                        }>
                            {guest_options}
                        </select>
                    </label>
                    <div class="search__submit">
                        <button class="btn btn--primary btn--block" on:click=on_search>
                            "🔍 Search"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
