//! Global Application State
//!
//! Reactive state management using Leptos signals. Provided once at the
//! app root and read through `use_context` everywhere else.

use leptos::*;

use crate::analytics::DateRange;
use crate::state::campaigns::CampaignStore;

/// Signed-in identity as reported by the auth provider
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// An authenticated session returned by the provider
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current user, `None` while anonymous
    pub user: RwSignal<Option<User>>,
    /// True once the startup session restore has finished
    pub session_checked: RwSignal<bool>,
    /// In-memory campaign records
    pub campaigns: RwSignal<CampaignStore>,
    /// Reporting window for the overview tab
    pub date_range: RwSignal<DateRange>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let today = chrono::Local::now().date_naive();

    let state = GlobalState {
        user: create_rw_signal(None),
        session_checked: create_rw_signal(false),
        campaigns: create_rw_signal(CampaignStore::with_samples(today)),
        date_range: create_rw_signal(DateRange::default()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// What the dashboard route should render for the current session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session restore still running, keep the spinner up
    Pending,
    /// Anonymous visitor, send to the auth screen
    RedirectToAuth,
    /// Signed in, render the dashboard
    Allow,
}

/// Gate rule for the dashboard route. Pure so it stays testable off-DOM.
pub fn dashboard_gate(session_checked: bool, signed_in: bool) -> GateDecision {
    if !session_checked {
        GateDecision::Pending
    } else if !signed_in {
        GateDecision::RedirectToAuth
    } else {
        GateDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_waits_for_session_restore() {
        assert_eq!(dashboard_gate(false, false), GateDecision::Pending);
        assert_eq!(dashboard_gate(false, true), GateDecision::Pending);
    }

    #[test]
    fn gate_redirects_anonymous_sessions() {
        assert_eq!(dashboard_gate(true, false), GateDecision::RedirectToAuth);
    }

    #[test]
    fn gate_admits_signed_in_sessions() {
        assert_eq!(dashboard_gate(true, true), GateDecision::Allow);
    }
}
