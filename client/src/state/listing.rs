//! Per-page listing state: active filter, favorites, and the selected entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hotels and restaurants pages each own one `ListingState` inside an
//! `RwSignal` for the lifetime of the page view. Nothing is persisted; leaving
//! the page drops favorites and selection. The selected entry drives the
//! booking dialog, so at most one dialog can be open at a time.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::collections::HashSet;

use catalog::filter::{self, CatalogFilter};
use catalog::Listing;

/// Filter, favorites set, and dialog selection for one listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingState<F> {
    pub filter: F,
    /// Identifiers the viewer has hearted. Only ever holds catalog ids.
    pub favorites: HashSet<u32>,
    /// Entry whose booking dialog is open.
    pub selected: Option<u32>,
}

impl<F> ListingState<F> {
    /// Catalog entries accepted by the current filter, in catalog order.
    pub fn visible<'a, T>(&self, catalog: &'a [T]) -> Vec<&'a T>
    where
        F: CatalogFilter<T>,
    {
        filter::apply(catalog, self.filter)
    }

    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
    }

    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    /// Flip favorite membership for `id` and return the new membership.
    /// Identifiers absent from `catalog` are ignored.
    pub fn toggle_favorite<T: Listing>(&mut self, id: u32, catalog: &[T]) -> bool {
        if !catalog.iter().any(|item| item.id() == id) {
            return false;
        }
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    /// Open the booking dialog for `id`, replacing any open one. Returns
    /// `false` (and leaves the selection alone) for unknown identifiers.
    pub fn select<T: Listing>(&mut self, id: u32, catalog: &[T]) -> bool {
        if catalog.iter().any(|item| item.id() == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// The entry whose dialog is open, if any.
    pub fn selected_item<'a, T: Listing>(&self, catalog: &'a [T]) -> Option<&'a T> {
        let id = self.selected?;
        catalog.iter().find(|item| item.id() == id)
    }

    /// Close the dialog. Filter and favorites are untouched.
    pub fn close_dialog(&mut self) {
        self.selected = None;
    }
}
