//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome shared by every admin page so the page
//! constructors stay trivial and consistent.

pub mod page_shell;
