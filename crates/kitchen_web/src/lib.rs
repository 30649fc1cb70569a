//! Recipe browser for Grumpy Apa's Kitchen, rendered with Leptos in the browser.
//!
//! A native build (or one without the `web` feature) only carries
//! [`ui_model`]: nav links, page strings and class helpers, so they can be
//! tested on the host next to the `kitchen` core. Building for `wasm32` with
//! `--features web` adds [`start`], which reads the page's `data-*` overrides,
//! fetches the recipe document and mounts the app on `<body>`.

pub mod ui_model;

/// Stands in for [`start`] when there is no browser to mount into.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
