//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates rendering details
//! to `components`.

pub mod home;
pub mod hotels;
pub mod restaurants;
pub mod stories;
