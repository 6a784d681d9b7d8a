//! Landing Page
//!
//! Public marketing page; the header adapts to the current session.

use leptos::*;
use leptos_router::*;

use crate::api::auth;
use crate::components::Brand;
use crate::state::global::GlobalState;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "📊",
        title: "Real-time Analytics",
        description: "Track visitor behavior, connection patterns, and conversion rates with beautiful, interactive dashboards.",
        gradient: "from-blue-500 to-cyan-500",
    },
    Feature {
        icon: "👥",
        title: "Lead Generation",
        description: "Convert WiFi users into leads with customizable landing pages and smart capture forms.",
        gradient: "from-purple-500 to-pink-500",
    },
    Feature {
        icon: "⚡",
        title: "Campaign Management",
        description: "Create and manage targeted marketing campaigns that reach users at the perfect moment.",
        gradient: "from-orange-500 to-red-500",
    },
    Feature {
        icon: "🛡",
        title: "Secure & Compliant",
        description: "Enterprise-grade security with GDPR compliance built-in. Your data is safe with us.",
        gradient: "from-green-500 to-emerald-500",
    },
    Feature {
        icon: "📶",
        title: "Easy Integration",
        description: "Works with any WiFi router or access point. Setup takes less than 5 minutes.",
        gradient: "from-indigo-500 to-blue-500",
    },
    Feature {
        icon: "✨",
        title: "AI Insights",
        description: "Get actionable recommendations powered by machine learning algorithms.",
        gradient: "from-pink-500 to-violet-500",
    },
];

const STATS: [(&str, &str); 4] = [
    ("10K+", "Active Users"),
    ("2.5M+", "WiFi Connections"),
    ("150K+", "Leads Generated"),
    ("99.9%", "Uptime"),
];

/// Marketing landing page
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-white">
            <Header />
            <Hero />
            <Features />
            <Stats />
            <CallToAction />

            <footer class="border-t border-white/10 py-12">
                <div class="max-w-7xl mx-auto px-4 flex flex-col md:flex-row justify-between items-center gap-4">
                    <span class="font-semibold">"📶 WiFi Marketing Pro"</span>
                    <span class="text-gray-400 text-sm">"© 2024 WiFi Marketing. All rights reserved."</span>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_signout = state.clone();
    let sign_out = move |_| {
        let state = state_for_signout.clone();
        spawn_local(async move {
            let token = auth::stored_token().unwrap_or_default();
            match auth::sign_out(&token).await {
                Ok(()) => state.user.set(None),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <header class="border-b border-white/10 backdrop-blur-sm">
            <div class="max-w-7xl mx-auto px-4 flex items-center justify-between h-16">
                <Brand />
                <div class="flex items-center space-x-4">
                    {move || {
                        match state.user.get() {
                            Some(user) => view! {
                                <span class="text-sm text-gray-300">"👤 " {user.email}</span>
                                <button
                                    on:click=sign_out.clone()
                                    class="text-sm text-gray-300 hover:text-white transition-colors"
                                >
                                    "Sign Out"
                                </button>
                                <A
                                    href="/dashboard"
                                    class="px-4 py-2 text-sm bg-gradient-to-r from-blue-500 to-purple-600
                                           hover:from-blue-600 hover:to-purple-700 rounded-lg"
                                >
                                    "Dashboard"
                                </A>
                            }.into_view(),
                            None => view! {
                                <A href="/auth" class="px-4 py-2 text-sm text-gray-300 hover:text-white transition-colors">
                                    "Sign In"
                                </A>
                                <A
                                    href="/auth"
                                    class="px-4 py-2 text-sm bg-gradient-to-r from-blue-500 to-purple-600
                                           hover:from-blue-600 hover:to-purple-700 rounded-lg"
                                >
                                    "Get Started"
                                </A>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="pt-20 pb-32 text-center">
            <div class="max-w-4xl mx-auto px-4">
                <span class="inline-block mb-6 px-3 py-1 text-xs bg-white/5 border border-white/10 rounded-full">
                    "✨ Now with AI-powered insights"
                </span>

                <h1 class="text-5xl md:text-7xl font-bold mb-8">
                    "Transform WiFi into "
                    <span class="bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                        "Marketing Gold"
                    </span>
                </h1>

                <p class="text-xl text-gray-300 mb-12 max-w-3xl mx-auto">
                    "Turn every WiFi connection into a lead. Track visitor behavior, create targeted \
                     campaigns, and grow your business with powerful analytics."
                </p>

                <A
                    href=move || {
                        if state.user.get().is_some() { "/dashboard".to_string() } else { "/auth".to_string() }
                    }
                    class="inline-block px-8 py-4 text-lg bg-gradient-to-r from-blue-500 to-purple-600
                           hover:from-blue-600 hover:to-purple-700 rounded-lg font-medium"
                >
                    {move || if state.user.get().is_some() { "Go to Dashboard" } else { "Start Free Trial" }}
                </A>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Everything you need to succeed"</h2>
                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        "Powerful features designed to turn your WiFi network into a customer acquisition machine."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.into_iter().map(|feature| view! {
                        <div class="bg-white/5 border border-white/10 rounded-xl p-6 hover:bg-white/10 transition-all duration-300">
                            <div class=format!(
                                "w-12 h-12 rounded-lg bg-gradient-to-r {} flex items-center justify-center mb-4",
                                feature.gradient
                            )>
                                <span class="text-xl">{feature.icon}</span>
                            </div>
                            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
                            <p class="text-gray-400">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-r from-blue-900/20 to-purple-900/20">
            <div class="max-w-7xl mx-auto px-4 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                {STATS.into_iter().map(|(number, label)| view! {
                    <div>
                        <div class="text-3xl md:text-4xl font-bold">{number}</div>
                        <div class="text-gray-400 mt-2">{label}</div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="py-20 text-center">
            <div class="max-w-4xl mx-auto px-4">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">"Ready to get started?"</h2>
                <p class="text-xl text-gray-400 mb-8">
                    "Join thousands of businesses already using WiFi Marketing to grow their customer base."
                </p>
                <A
                    href=move || {
                        if state.user.get().is_some() { "/dashboard".to_string() } else { "/auth".to_string() }
                    }
                    class="inline-block px-8 py-4 text-lg bg-gradient-to-r from-blue-500 to-purple-600
                           hover:from-blue-600 hover:to-purple-700 rounded-lg font-medium"
                >
                    "Enter Dashboard"
                </A>
            </div>
        </section>
    }
}
