//! OrderStream admin UI view library.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos views for the OrderStream admin host. Every page is a static
//! presentational unit built on the shared [`components::page_shell`] frame
//! and rendered server-side in a single pass; there is no client state and
//! no hydration.

pub mod components;
pub mod pages;
