//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a zero-argument constructor that supplies its fixed
//! `(title, description)` pair to the shared shell. Pages carry no state
//! and accept no props from the host.

pub mod dashboard;
pub mod orders;
pub mod products;
