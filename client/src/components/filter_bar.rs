//! Row of category buttons above a listing grid.
//!
//! DESIGN
//! ======
//! The bar works on plain string keys so one component serves every filter
//! enum. Pages map the key back through `CatalogFilter::from_key`.

#[cfg(test)]
#[path = "filter_bar_test.rs"]
mod filter_bar_test;

use catalog::CatalogFilter;
use leptos::prelude::*;

/// `(key, label)` pairs for every option of `F`, in display order.
pub fn filter_options<T, F: CatalogFilter<T>>() -> Vec<(&'static str, &'static str)> {
    F::OPTIONS.iter().map(|f| (f.key(), f.label())).collect()
}

#[component]
pub fn FilterBar(
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] active: Signal<&'static str>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="filter-bar" role="group">
            {options
                .into_iter()
                .map(|(key, label)| {
                    view! {
                        <button
                            class="filter-bar__button"
                            class:filter-bar__button--active=move || active.get() == key
                            aria-pressed=move || (active.get() == key).to_string()
                            on:click=move |_| on_select.run(key)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
