//! Shared structural frame for admin pages.
//!
//! DESIGN
//! ======
//! One parameterized shell instead of three copies of the container markup:
//! each page supplies its `(title, description)` pair and nothing else.

use leptos::prelude::*;

/// Structural frame common to every admin page.
///
/// A pure function of its two inputs: full-height container, centered
/// width-capped content region with responsive horizontal padding, one
/// heading, one descriptive line. Empty strings render as empty elements;
/// rendering cannot fail.
#[component]
pub fn PageShell(title: String, description: String) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100">
            <div class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <div class="px-4 py-6 sm:px-0">
                    <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
                    <p class="mt-2 text-gray-600">{description}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "page_shell_test.rs"]
mod tests;
