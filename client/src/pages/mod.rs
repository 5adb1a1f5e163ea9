//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has one route; `home` lays out every section and delegates
//! rendering details to `components`.

pub mod home;
