//! Dashboard Page
//!
//! Authenticated view composing metrics, charts, and campaign
//! management. Anonymous visitors are redirected to the auth screen
//! once the startup session restore has settled.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::auth;
use crate::components::{
    BackHome, Brand, CampaignManager, ConversionChart, DateRangeFilter, Loading, MetricsCards,
    VisitorsChart,
};
use crate::state::global::{dashboard_gate, GateDecision, GlobalState};

#[derive(Clone, Copy, PartialEq)]
enum DashboardTab {
    Overview,
    Campaigns,
}

/// Dashboard page, gated on a signed-in session
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_gate = state.clone();
    let navigate = use_navigate();
    create_effect(move |_| {
        let decision = dashboard_gate(
            state_for_gate.session_checked.get(),
            state_for_gate.user.get().is_some(),
        );
        if decision == GateDecision::RedirectToAuth {
            navigate("/auth", Default::default());
        }
    });

    let state_for_view = state;
    view! {
        {move || {
            let decision = dashboard_gate(
                state_for_view.session_checked.get(),
                state_for_view.user.get().is_some(),
            );
            match decision {
                GateDecision::Allow => view! { <DashboardContent /> }.into_view(),
                _ => view! {
                    <div class="min-h-screen bg-slate-50 flex items-center justify-center">
                        <Loading />
                    </div>
                }.into_view(),
            }
        }}
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let (tab, set_tab) = create_signal(DashboardTab::Overview);

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-blue-50 to-cyan-50 text-slate-900">
            <DashboardHeader />

            <main class="max-w-7xl mx-auto px-4 py-8 space-y-6">
                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                    <div class="flex rounded-lg bg-slate-200/70 p-1">
                        <TabButton
                            label="Dashboard"
                            current=tab
                            target=DashboardTab::Overview
                            on_select=move || set_tab.set(DashboardTab::Overview)
                        />
                        <TabButton
                            label="Campaigns"
                            current=tab
                            target=DashboardTab::Campaigns
                            on_select=move || set_tab.set(DashboardTab::Campaigns)
                        />
                    </div>

                    // Range filter applies to the overview metrics only
                    {move || {
                        if tab.get() == DashboardTab::Overview {
                            view! { <DateRangeFilter /> }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>

                {move || match tab.get() {
                    DashboardTab::Overview => view! { <OverviewTab /> }.into_view(),
                    DashboardTab::Campaigns => view! { <CampaignManager /> }.into_view(),
                }}
            </main>
        </div>
    }
}

#[component]
fn DashboardHeader() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_signout = state.clone();
    let sign_out = move |_| {
        let state = state_for_signout.clone();
        spawn_local(async move {
            let token = auth::stored_token().unwrap_or_default();
            match auth::sign_out(&token).await {
                Ok(()) => {
                    state.user.set(None);
                }
                Err(e) => {
                    state.show_error(&format!("Failed to sign out: {}", e));
                }
            }
        });
    };

    view! {
        <header class="bg-white/80 backdrop-blur-sm border-b border-slate-200 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 flex items-center justify-between h-16">
                <div class="flex items-center space-x-4">
                    <BackHome />
                    <div class="h-6 w-px bg-slate-300" />
                    <Brand />
                </div>
                <div class="flex items-center space-x-4">
                    <span class="flex items-center space-x-2 text-xs px-2 py-1 bg-green-50
                                 text-green-700 border border-green-200 rounded-full">
                        <span class="w-2 h-2 bg-green-500 rounded-full animate-pulse" />
                        <span>"Online"</span>
                    </span>
                    {move || state.user.get().map(|user| view! {
                        <span class="text-sm text-slate-600">"👤 " {user.email}</span>
                    })}
                    <button
                        on:click=sign_out
                        class="px-3 py-2 text-sm border border-slate-300 hover:bg-slate-100
                               rounded-lg transition-colors"
                    >
                        "Sign Out"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<DashboardTab>,
    target: DashboardTab,
    on_select: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_select()
            class=move || {
                let base = "px-4 py-2 rounded-md text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-white shadow-sm text-slate-900", base)
                } else {
                    format!("{} text-slate-600 hover:text-slate-900", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <MetricsCards />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ChartCard
                    title="Visitors Over Time"
                    description="Daily visitor connections to your WiFi network"
                >
                    <VisitorsChart />
                </ChartCard>
                <ChartCard
                    title="Conversion Funnel"
                    description="From WiFi connection to lead conversion"
                >
                    <ConversionChart />
                </ChartCard>
            </div>

            <RecentActivity />
        </div>
    }
}

#[component]
fn ChartCard(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white/70 backdrop-blur-sm border border-slate-200 rounded-xl shadow-lg p-6">
            <h3 class="text-lg font-semibold text-slate-900">{title}</h3>
            <p class="text-sm text-slate-500 mb-4">{description}</p>
            {children()}
        </div>
    }
}

/// Kind of a recent-activity entry, mapped to its indicator dot
#[derive(Clone, Copy)]
enum ActivityKind {
    Success,
    Info,
    Warning,
}

impl ActivityKind {
    fn dot_class(self) -> &'static str {
        match self {
            ActivityKind::Success => "bg-green-500",
            ActivityKind::Info => "bg-blue-500",
            ActivityKind::Warning => "bg-yellow-500",
        }
    }
}

const RECENT_ACTIVITY: [(&str, &str, &str, ActivityKind); 4] = [
    ("2 min ago", "New lead captured", "Anonymous User #1234", ActivityKind::Success),
    ("5 min ago", "WiFi connection", "Anonymous User #1235", ActivityKind::Info),
    ("8 min ago", "Campaign click", "Anonymous User #1236", ActivityKind::Warning),
    ("12 min ago", "Email subscribed", "Anonymous User #1237", ActivityKind::Success),
];

#[component]
fn RecentActivity() -> impl IntoView {
    view! {
        <div class="bg-white/70 backdrop-blur-sm border border-slate-200 rounded-xl shadow-lg p-6">
            <h3 class="text-lg font-semibold text-slate-900">"Recent Activity"</h3>
            <p class="text-sm text-slate-500 mb-4">"Latest visitor interactions and conversions"</p>

            <div class="space-y-3">
                {RECENT_ACTIVITY.into_iter().map(|(time, action, visitor, kind)| view! {
                    <div class="flex items-center justify-between p-3 rounded-lg bg-slate-50
                                hover:bg-slate-100 transition-colors">
                        <div class="flex items-center space-x-3">
                            <div class=format!("w-2 h-2 rounded-full {}", kind.dot_class()) />
                            <div>
                                <p class="text-sm font-medium text-slate-900">{action}</p>
                                <p class="text-xs text-slate-500">{visitor}</p>
                            </div>
                        </div>
                        <span class="text-xs text-slate-400">{time}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
