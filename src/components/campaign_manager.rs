//! Campaign Manager
//!
//! Campaign grid with a create dialog, shown on the campaigns tab.

use leptos::*;

use crate::analytics::format_count;
use crate::state::campaigns::{Campaign, CampaignDraft, CampaignType};
use crate::state::global::GlobalState;

/// Campaign management tab content
#[component]
pub fn CampaignManager() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (show_create, set_show_create) = create_signal(false);

    let campaigns = state.campaigns;

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-bold text-slate-900">"Campaign Management"</h2>
                    <p class="text-slate-600">"Create and manage your WiFi marketing campaigns"</p>
                </div>
                <button
                    on:click=move |_| set_show_create.set(true)
                    class="px-4 py-2 bg-gradient-to-r from-blue-600 to-cyan-600 hover:from-blue-700
                           hover:to-cyan-700 text-white rounded-lg font-medium transition-colors"
                >
                    "+ New Campaign"
                </button>
            </div>

            // Create dialog
            {move || {
                if show_create.get() {
                    view! {
                        <CreateCampaignModal on_close=move || set_show_create.set(false) />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Campaign grid
            {move || {
                let store = campaigns.get();
                if store.is_empty() {
                    view! {
                        <EmptyState on_create=move || set_show_create.set(true) />
                    }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {store.list().iter().cloned().map(|campaign| view! {
                                <CampaignCard campaign=campaign />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Single campaign card
#[component]
fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let rate = format!("{:.1}%", campaign.conversion_rate_pct());
    let created = campaign.created.format("%Y-%m-%d").to_string();

    view! {
        <div class="bg-white/70 backdrop-blur-sm border border-slate-200 rounded-xl shadow-lg
                    hover:shadow-xl transition-all duration-300 p-5">
            <div class="flex items-center justify-between pb-2">
                <div class="flex items-center space-x-2">
                    <span>{campaign.kind.icon()}</span>
                    <h3 class="text-lg font-semibold text-slate-900">{campaign.name.clone()}</h3>
                </div>
                <span class=format!(
                    "text-xs px-2 py-0.5 rounded-full border {}",
                    campaign.status.badge_class()
                )>
                    {campaign.status.label()}
                </span>
            </div>
            <p class="text-slate-600 text-sm mb-4">{campaign.description.clone()}</p>

            <div class="space-y-3">
                <StatRow label="Clicks" value=format_count(campaign.clicks) value_class="text-slate-900" />
                <StatRow label="Conversions" value=campaign.conversions.to_string() value_class="text-green-600" />
                <StatRow label="Conversion Rate" value=rate value_class="text-blue-600" />
                <div class="pt-2 border-t border-slate-200 text-xs text-slate-400">
                    "Created " {created}
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatRow(label: &'static str, value: String, value_class: &'static str) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center">
            <span class="text-sm text-slate-500">{label}</span>
            <span class=format!("font-semibold {}", value_class)>{value}</span>
        </div>
    }
}

/// Shown when the store has no campaigns
#[component]
fn EmptyState(on_create: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div class="text-center py-12 bg-white/70 backdrop-blur-sm border border-slate-200 rounded-xl">
            <div class="text-5xl mb-4">"📊"</div>
            <h3 class="text-lg font-semibold text-slate-900 mb-2">"No campaigns yet"</h3>
            <p class="text-slate-600 mb-4">"Create your first WiFi marketing campaign to get started."</p>
            <button
                on:click=move |_| on_create()
                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "+ Create Campaign"
            </button>
        </div>
    }
}

/// Create campaign dialog
#[component]
fn CreateCampaignModal(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (kind, set_kind) = create_signal(CampaignType::default());

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = CampaignDraft {
            name: name.get(),
            description: description.get(),
            kind: kind.get(),
        };
        let today = chrono::Local::now().date_naive();

        let mut created = Ok(0);
        state.campaigns.update(|store| created = store.create(draft, today));

        match created {
            Ok(_) => {
                state.show_success("Your new campaign has been created successfully.");
                on_close_for_submit();
            }
            Err(e) => {
                state.show_error(&e.to_string());
            }
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl p-6 w-full max-w-md mx-4 text-slate-900">
                <div class="flex items-center justify-between mb-2">
                    <h2 class="text-xl font-semibold">"Create New Campaign"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-slate-400 hover:text-slate-900"
                    >
                        "✕"
                    </button>
                </div>
                <p class="text-sm text-slate-500 mb-6">
                    "Design a new marketing campaign for your WiFi users."
                </p>

                <form on:submit=on_submit class="space-y-4">
                    // Name
                    <div>
                        <label class="block text-sm text-slate-600 mb-2">"Campaign Name"</label>
                        <input
                            type="text"
                            placeholder="Enter campaign name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full rounded-lg px-4 py-3 border border-slate-300
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    // Description
                    <div>
                        <label class="block text-sm text-slate-600 mb-2">"Description"</label>
                        <textarea
                            placeholder="Describe your campaign"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            class="w-full rounded-lg px-4 py-3 border border-slate-300
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    // Type
                    <div>
                        <label class="block text-sm text-slate-600 mb-2">"Campaign Type"</label>
                        <select
                            on:change=move |ev| {
                                if let Some(selected) = CampaignType::from_token(&event_target_value(&ev)) {
                                    set_kind.set(selected);
                                }
                            }
                            prop:value=move || kind.get().token().to_string()
                            class="w-full rounded-lg px-4 py-3 border border-slate-300
                                   focus:border-blue-500 focus:outline-none"
                        >
                            {CampaignType::ALL.into_iter().map(|option| view! {
                                <option value=option.token()>{option.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    // Buttons
                    <div class="flex justify-end space-x-2 pt-2">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="px-4 py-2 border border-slate-300 hover:bg-slate-100
                                   rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white
                                   rounded-lg font-medium transition-colors"
                        >
                            "Create Campaign"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
