//! Client-side interaction state.
//!
//! DESIGN
//! ======
//! `theme` owns the page-wide light/dark flag and `contact` owns the contact
//! form and its submission lifecycle. Both are plain Rust models; `app` wraps
//! them in Leptos signals and provides them through context.

pub mod contact;
pub mod theme;
