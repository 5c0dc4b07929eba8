//! Booking dialog for one hotel stay or restaurant reservation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listing pages mount this dialog while an entry is selected and unmount it
//! on close, so the draft lives exactly as long as the dialog. Confirmation
//! is local: an alert plus a console line, then the dialog closes.

#[cfg(test)]
#[path = "booking_modal_test.rs"]
mod booking_modal_test;

use catalog::{BookedItem, BookingDraft, PartySize};
use leptos::prelude::*;

use crate::util::browser;
use crate::util::format::{dollars, nights_label};

/// Lower bound for the check-out input: the chosen check-in date, or today
/// until one is picked.
pub(crate) fn check_out_min(check_in: &str, today: Option<&str>) -> Option<String> {
    if check_in.is_empty() {
        today.map(str::to_owned)
    } else {
        Some(check_in.to_owned())
    }
}

/// Submit the draft, surfacing the outcome to the visitor. Returns whether
/// the dialog should close.
fn confirm(draft: &BookingDraft, item: &BookedItem) -> bool {
    match draft.submit(item) {
        Ok(confirmation) => {
            match serde_json::to_string(&confirmation) {
                Ok(json) => browser::log_info(&format!("booking confirmed: {json}")),
                Err(e) => browser::log_info(&format!("booking confirmed (unserializable: {e})")),
            }
            browser::alert(&confirmation.message);
            true
        }
        Err(e) => {
            browser::log_info(&format!("booking rejected: {e}"));
            false
        }
    }
}

#[component]
pub fn BookingModal(item: BookedItem, on_close: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(BookingDraft::default());
    let today = browser::today_iso();

    let on_backdrop = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if draft.with_untracked(|d| confirm(d, &item)) {
            on_close.run(());
        }
    };

    let check_out_bound = {
        let today = today.clone();
        move || draft.with(|d| check_out_min(&d.start, today.as_deref()))
    };

    let party_options = PartySize::all()
        .map(|size| {
            view! {
                <option
                    value=size.get().to_string()
                    selected=move || draft.with(|d| d.party_size == size)
                >
                    {size.label()}
                </option>
            }
        })
        .collect_view();

    let nightly_price = match item {
        BookedItem::Hotel(hotel) => Some(hotel.nightly_price),
        BookedItem::Restaurant(_) => None,
    };

    let summary = move || {
        draft.with(|d| d.summary(&item)).map(|summary| {
            view! {
                <section class="booking-summary">
                    <h4>"Booking Summary"</h4>
                    <div class="booking-summary__row">
                        <span>"Duration:"</span>
                        <span>{nights_label(summary.nights)}</span>
                    </div>
                    <div class="booking-summary__row">
                        <span>"Rate per night:"</span>
                        <span>{dollars(summary.nightly_rate)}</span>
                    </div>
                    <div class="booking-summary__row booking-summary__row--total">
                        <span>"Total:"</span>
                        <span>{dollars(summary.total)}</span>
                    </div>
                </section>
            }
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--booking"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>{item.title()}</h2>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="dialog__subject">
                    <h3>{item.name()}</h3>
                    <p>{item.location()}</p>
                    {nightly_price.map(|price| view! {
                        <p class="dialog__subject-price">{dollars(price)} "/night"</p>
                    })}
                </div>

                <form class="dialog__form" on:submit=on_submit>
                    <div class="dialog__grid dialog__grid--two">
                        <label class="dialog__field">
                            <span>"Full Name *"</span>
                            <input
                                type="text"
                                name="name"
                                required
                                placeholder="Enter your full name"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__field">
                            <span>"Email Address *"</span>
                            <input
                                type="email"
                                name="email"
                                required
                                placeholder="Enter your email"
                                prop:value=move || draft.with(|d| d.email.clone())
                                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="dialog__field">
                        <span>"Phone Number *"</span>
                        <input
                            type="tel"
                            name="phone"
                            required
                            placeholder="+254 700 123 456"
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                        />
                    </label>

                    <h3 class="dialog__section-title">"📅 Booking Details"</h3>
                    <div class="dialog__grid dialog__grid--three">
                        <label class="dialog__field">
                            <span>{item.start_label()} " *"</span>
                            <input
                                type=item.start_input_type()
                                name="start"
                                required
                                min=today.clone()
                                prop:value=move || draft.with(|d| d.start.clone())
                                on:input=move |ev| draft.update(|d| d.start = event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || item.requires_end_date()>
                            <label class="dialog__field">
                                <span>"Check-out Date *"</span>
                                <input
                                    type="date"
                                    name="end"
                                    required
                                    min=check_out_bound.clone()
                                    prop:value=move || draft.with(|d| d.end.clone())
                                    on:input=move |ev| draft.update(|d| d.end = event_target_value(&ev))
                                />
                            </label>
                        </Show>
                        <label class="dialog__field">
                            <span>"👥 " {item.party_label()} " *"</span>
                            <select
                                name="party_size"
                                on:change=move |ev| {
                                    if let Some(size) = PartySize::parse(&event_target_value(&ev)) {
                                        draft.update(|d| d.party_size = size);
                                    }
                                }
                            >
                                {party_options}
                            </select>
                        </label>
                    </div>

                    <label class="dialog__field">
                        <span>"Special Requests"</span>
                        <textarea
                            name="special_request"
                            rows="3"
                            placeholder=item.request_placeholder()
                            prop:value=move || draft.with(|d| d.special_request.clone())
                            on:input=move |ev| draft.update(|d| d.special_request = event_target_value(&ev))
                        ></textarea>
                    </label>

                    {summary}

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">{item.submit_label()}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
