//! Brand Header Pieces
//!
//! The logo block and back-link shared by the page headers.

use leptos::*;
use leptos_router::*;

/// Product logo and name
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            <div class="flex items-center justify-center w-10 h-10 bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg">
                <span class="text-white">"📶"</span>
            </div>
            <div>
                <h1 class="text-xl font-bold">"WiFi Marketing"</h1>
                <p class="text-sm opacity-60">"Dashboard Pro"</p>
            </div>
        </div>
    }
}

/// Back-to-home link used by the secondary screens
#[component]
pub fn BackHome() -> impl IntoView {
    view! {
        <A href="/" class="flex items-center space-x-2 text-sm opacity-70 hover:opacity-100 transition-opacity">
            <span>"←"</span>
            <span>"Back to Home"</span>
        </A>
    }
}
