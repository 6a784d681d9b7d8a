//! Auth Page
//!
//! Sign-in and sign-up forms in tabs, backed by the identity provider.
//! Form validation runs before any network call; the submit control is
//! disabled for the duration of the call and re-enabled on every
//! outcome.

use leptos::*;
use leptos_router::use_navigate;
use thiserror::Error;

use crate::api::auth;
use crate::components::{BackHome, Brand};
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    SignIn,
    SignUp,
}

/// Auth page with sign-in and sign-up tabs
#[component]
pub fn AuthPage() -> impl IntoView {
    let (tab, set_tab) = create_signal(AuthTab::SignIn);

    view! {
        <div class="min-h-screen bg-black text-white">
            <header class="border-b border-white/10">
                <div class="max-w-7xl mx-auto px-4 flex items-center justify-between h-16">
                    <BackHome />
                    <Brand />
                </div>
            </header>

            <main class="flex items-center justify-center px-4 pt-24 pb-12">
                <div class="w-full max-w-md bg-white/10 border border-white/20 rounded-xl p-6">
                    <div class="text-center mb-6">
                        <h2 class="text-2xl font-bold">"Welcome"</h2>
                        <p class="text-gray-300 text-sm mt-1">"Sign in to your account or create a new one"</p>
                    </div>

                    // Tab switcher
                    <div class="grid grid-cols-2 bg-white/10 rounded-lg p-1 mb-6">
                        <TabButton
                            label="Sign In"
                            current=tab
                            target=AuthTab::SignIn
                            on_select=move || set_tab.set(AuthTab::SignIn)
                        />
                        <TabButton
                            label="Sign Up"
                            current=tab
                            target=AuthTab::SignUp
                            on_select=move || set_tab.set(AuthTab::SignUp)
                        />
                    </div>

                    {move || match tab.get() {
                        AuthTab::SignIn => view! { <SignInForm /> }.into_view(),
                        AuthTab::SignUp => view! {
                            <SignUpForm on_created=move || set_tab.set(AuthTab::SignIn) />
                        }.into_view(),
                    }}
                </div>
            </main>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<AuthTab>,
    target: AuthTab,
    on_select: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| on_select()
            class=move || {
                let base = "py-2 rounded-md text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-white/20 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn SignInForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get();
        let password_value = password.get();

        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::sign_in(&email_value, &password_value).await {
                Ok(session) => {
                    state.user.set(Some(session.user));
                    state.show_success("Welcome back! You have successfully logged in.");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                }
            }
            // Re-enable the submit control on every outcome
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <Field
                label="Email"
                id="login-email"
                input_type="email"
                placeholder="Enter your email"
                value=email
                set_value=set_email
            />
            <Field
                label="Password"
                id="login-password"
                input_type="password"
                placeholder="Enter your password"
                value=password
                set_value=set_password
            />
            <SubmitButton submitting=submitting idle="Sign In" busy="Signing in..." />
        </form>
    }
}

#[component]
fn SignUpForm(on_created: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = SignupForm {
            full_name: full_name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };

        // No provider call until the form checks out
        if let Err(e) = validate_signup(&form) {
            state.show_error(&e.to_string());
            return;
        }

        set_submitting.set(true);

        let state = state.clone();
        let on_created = on_created.clone();
        spawn_local(async move {
            match auth::sign_up(&form.email, &form.password, &form.full_name).await {
                Ok(()) => {
                    state.show_success("Account created! Please check your email to confirm your account.");
                    set_full_name.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_confirm.set(String::new());
                    on_created();
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <Field
                label="Full Name"
                id="signup-name"
                input_type="text"
                placeholder="Enter your full name"
                value=full_name
                set_value=set_full_name
            />
            <Field
                label="Email"
                id="signup-email"
                input_type="email"
                placeholder="Enter your email"
                value=email
                set_value=set_email
            />
            <Field
                label="Password"
                id="signup-password"
                input_type="password"
                placeholder="Create a password"
                value=password
                set_value=set_password
            />
            <Field
                label="Confirm Password"
                id="signup-confirm"
                input_type="password"
                placeholder="Confirm your password"
                value=confirm
                set_value=set_confirm
            />
            <SubmitButton submitting=submitting idle="Create Account" busy="Creating account..." />
        </form>
    }
}

#[component]
fn Field(
    label: &'static str,
    id: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-300 mb-2">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-white/10 border border-white/20 rounded-lg px-4 py-3
                       placeholder:text-gray-400 focus:border-blue-500 focus:outline-none"
            />
        </div>
    }
}

#[component]
fn SubmitButton(
    submitting: ReadSignal<bool>,
    idle: &'static str,
    busy: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || submitting.get()
            class="w-full bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600
                   hover:to-purple-700 disabled:opacity-60 disabled:cursor-not-allowed rounded-lg
                   py-3 font-semibold transition-colors flex items-center justify-center space-x-2"
        >
            {move || if submitting.get() {
                view! {
                    <div class="loading-spinner w-4 h-4" />
                    <span>{busy}</span>
                }.into_view()
            } else {
                view! { <span>{idle}</span> }.into_view()
            }}
        </button>
    }
}

/// Sign-up form fields as entered
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Form problems caught before any provider call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Validate a sign-up form. Runs before any network request.
pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if form.email.trim().is_empty() {
        return Err(ValidationError::MissingField("Email"));
    }
    if form.password.is_empty() {
        return Err(ValidationError::MissingField("Password"));
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            full_name: "Cafe Owner".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn mismatched_passwords_fail_before_any_call() {
        let err = validate_signup(&form("owner@cafe.example", "secret", "secrets")).unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);
    }

    #[test]
    fn missing_email_is_rejected() {
        let err = validate_signup(&form("  ", "secret", "secret")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("Email"));
    }

    #[test]
    fn missing_password_is_rejected() {
        let err = validate_signup(&form("owner@cafe.example", "", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("Password"));
    }

    #[test]
    fn full_name_is_optional() {
        let mut ok = form("owner@cafe.example", "secret", "secret");
        ok.full_name = String::new();
        assert!(validate_signup(&ok).is_ok());
    }
}
