//! Client-side state models.
//!
//! DESIGN
//! ======
//! State types are plain structs wrapped in `RwSignal` by the pages and
//! components that own them, so their transitions can be unit-tested without
//! a reactive runtime.

pub mod listing;
pub mod shell;
