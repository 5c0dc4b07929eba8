//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, listing cards, and the booking dialog.
//! Shared shell state comes from Leptos context; listing state is passed in
//! by the owning page.

pub mod booking_modal;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod hotel_card;
pub mod restaurant_card;
pub mod search_section;
pub mod story_card;
