//! Reusable UI building blocks shared by every page of the clinic app.
//!
//! Each component lives in its own directory next to the stylesheet it
//! links, so pages only pay for the CSS of the components they render.

pub mod components;

pub use components::*;
