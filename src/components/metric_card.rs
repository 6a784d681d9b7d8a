//! Metric Cards
//!
//! Summary stat cards across the top of the overview tab.

use leptos::*;

use crate::analytics::{format_count, MetricsSnapshot};
use crate::state::global::GlobalState;

/// Direction of the change badge on a stat card
#[derive(Clone, Copy, PartialEq)]
enum ChangeKind {
    Positive,
    Negative,
}

impl ChangeKind {
    fn badge_class(self) -> &'static str {
        match self {
            ChangeKind::Positive => "bg-green-100 text-green-700",
            ChangeKind::Negative => "bg-red-100 text-red-700",
        }
    }
}

struct CardDef {
    title: &'static str,
    value: String,
    description: &'static str,
    icon: &'static str,
    change: &'static str,
    change_kind: ChangeKind,
    gradient: &'static str,
}

/// Stat card grid, recomputed whenever the date range changes
#[component]
pub fn MetricsCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            {move || {
                let snapshot = MetricsSnapshot::for_range(state.date_range.get());
                card_defs(&snapshot).into_iter().map(|card| view! {
                    <StatCard card=card />
                }).collect_view()
            }}
        </div>
    }
}

fn card_defs(snapshot: &MetricsSnapshot) -> Vec<CardDef> {
    vec![
        CardDef {
            title: "Total Visitors",
            value: format_count(snapshot.visitors),
            description: "WiFi connections",
            icon: "👥",
            change: "+12.5%",
            change_kind: ChangeKind::Positive,
            gradient: "from-blue-500 to-cyan-500",
        },
        CardDef {
            title: "Conversions",
            value: format_count(snapshot.conversions),
            description: "Leads captured",
            icon: "📈",
            change: "+8.2%",
            change_kind: ChangeKind::Positive,
            gradient: "from-green-500 to-emerald-500",
        },
        CardDef {
            title: "Avg. Connection Time",
            value: format!("{}m", snapshot.avg_connection_min),
            description: "Per session",
            icon: "⏱",
            change: "+2.1%",
            change_kind: ChangeKind::Positive,
            gradient: "from-purple-500 to-pink-500",
        },
        CardDef {
            title: "Click Rate",
            value: format!("{:.1}%", snapshot.click_rate_pct),
            description: "Campaign engagement",
            icon: "📶",
            change: "-0.5%",
            change_kind: ChangeKind::Negative,
            gradient: "from-orange-500 to-red-500",
        },
    ]
}

#[component]
fn StatCard(card: CardDef) -> impl IntoView {
    view! {
        <div class="bg-white/70 backdrop-blur-sm border border-slate-200 rounded-xl shadow-lg hover:shadow-xl transition-all duration-300 p-5">
            <div class="flex items-center justify-between pb-2">
                <span class="text-sm font-medium text-slate-600">{card.title}</span>
                <div class=format!("p-2 rounded-lg bg-gradient-to-r {} text-white", card.gradient)>
                    <span>{card.icon}</span>
                </div>
            </div>
            <div class="text-2xl font-bold text-slate-900 mb-1">{card.value}</div>
            <div class="flex items-center justify-between">
                <span class="text-slate-500 text-sm">{card.description}</span>
                <span class=format!(
                    "text-xs font-medium px-2 py-1 rounded-full {}",
                    card.change_kind.badge_class()
                )>
                    {card.change}
                </span>
            </div>
        </div>
    }
}
