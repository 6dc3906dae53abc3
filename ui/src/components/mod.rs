//! User Interface Components
//!
//! Reusable Dioxus components for the donation listing page:
//!
//! - **forms**: the donation listing form
//! - **display**: toast notifications and loading indicators
//! - **input**: text inputs, the date picker and inline field messages

pub mod display;
pub mod forms;
pub mod input;
