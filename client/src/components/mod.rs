//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and section cards while reading/writing
//! shared state from Leptos context providers.

pub mod contact_form;
pub mod footer;
pub mod nav_bar;
pub mod project_card;
pub mod skill_card;
