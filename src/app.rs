//! App Root Component
//!
//! Routing, global providers, and the startup session restore.

use leptos::*;
use leptos_router::*;

use crate::api::auth;
use crate::components::Toast;
use crate::pages::{AuthPage, Dashboard, Landing};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    restore_session(state);

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Landing />
                <Route path="/auth" view=AuthPage />
                <Route path="/dashboard" view=Dashboard />
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// Pick up a persisted token and resolve it to a user, if still valid
fn restore_session(state: GlobalState) {
    spawn_local(async move {
        if let Some(token) = auth::stored_token() {
            match auth::current_user(&token).await {
                Ok(user) => {
                    state.user.set(Some(user));
                }
                Err(e) => {
                    // Stale or revoked token; start anonymous
                    auth::clear_token();
                    web_sys::console::warn_1(&format!("Session restore failed: {}", e).into());
                }
            }
        }
        state.session_checked.set(true);
    });
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-white flex flex-col items-center justify-center text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
