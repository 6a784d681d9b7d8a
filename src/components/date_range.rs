//! Date Range Filter
//!
//! Three-button selector controlling the reporting window.

use leptos::*;

use crate::analytics::DateRange;
use crate::state::global::GlobalState;

/// Date range filter shown on the overview tab
#[component]
pub fn DateRangeFilter() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <span class="text-slate-500 text-sm">"📅"</span>
            <div class="flex rounded-lg bg-slate-100 p-1">
                {DateRange::ALL.into_iter().map(|range| view! {
                    <RangeButton range=range />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RangeButton(range: DateRange) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let current = state.date_range;
    let is_active = create_memo(move |_| current.get() == range);

    view! {
        <button
            on:click=move |_| current.set(range)
            class=move || {
                let base = "px-3 py-1 rounded-md text-xs font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-white shadow-sm text-slate-900", base)
                } else {
                    format!("{} text-slate-600 hover:text-slate-900", base)
                }
            }
        >
            {range.label()}
        </button>
    }
}
