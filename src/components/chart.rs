//! Charts
//!
//! Canvas-rendered visitors line chart and conversion funnel.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::analytics::{
    funnel_percent, visitor_series, SeededSampler, SeriesPoint, FUNNEL_STAGES,
};
use crate::state::global::GlobalState;

const VISITORS_COLOR: &str = "#3b82f6";
const CONVERSIONS_COLOR: &str = "#10b981";
const GRID_COLOR: &str = "#e2e8f0";
const AXIS_TEXT_COLOR: &str = "#64748b";

/// Daily visitors and conversions for the selected range
#[component]
pub fn VisitorsChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Resample whenever the range changes
    let series = create_memo(move |_| {
        let range = state.date_range.get();
        let today = chrono::Local::now().date_naive();
        let mut sampler = SeededSampler::from_clock();
        visitor_series(range, today, &mut sampler)
    });

    create_effect(move |_| {
        let points = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_visitors(&canvas, &points);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full h-64 md:h-80"
            />
            <div class="flex justify-center space-x-6 mt-3">
                <LegendDot color=VISITORS_COLOR label="Visitors" />
                <LegendDot color=CONVERSIONS_COLOR label="Conversions" />
            </div>
        </div>
    }
}

#[component]
fn LegendDot(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
            <span class="text-sm text-slate-600">{label}</span>
        </div>
    }
}

/// Funnel from connection to captured lead
#[component]
pub fn ConversionChart() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_funnel(&canvas);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="320"
            class="w-full h-64 md:h-80"
        />
    }
}

/// Shared plot geometry for a draw pass
struct ChartGeom {
    margin_left: f64,
    margin_top: f64,
    chart_width: f64,
    chart_height: f64,
    y_max: f64,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Draw the visitors line chart on canvas
fn draw_visitors(canvas: &HtmlCanvasElement, points: &[SeriesPoint]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        return;
    }

    let max_visitors = points.iter().map(|p| p.visitors).max().unwrap_or(0) as f64;
    let geom = ChartGeom {
        margin_left,
        margin_top,
        chart_width: width - margin_left - margin_right,
        chart_height: height - margin_top - margin_bottom,
        y_max: (max_visitors * 1.1).max(1.0),
    };

    draw_grid(&ctx, &geom, width);

    draw_series(&ctx, points, |p| p.visitors, VISITORS_COLOR, &geom);
    draw_series(&ctx, points, |p| p.conversions, CONVERSIONS_COLOR, &geom);

    // X-axis labels, thinned to at most six
    let step = (points.len() / 6).max(1);
    ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate().step_by(step) {
        let x = x_for(i, points.len(), &geom);
        let _ = ctx.fill_text(&point.label, x - 16.0, height - 12.0);
    }
}

/// Horizontal grid lines with y-axis labels
fn draw_grid(ctx: &CanvasRenderingContext2d, geom: &ChartGeom, width: f64) {
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=4 {
        let y = geom.margin_top + (i as f64 / 4.0) * geom.chart_height;

        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.begin_path();
        ctx.move_to(geom.margin_left, y);
        ctx.line_to(width - 20.0, y);
        ctx.stroke();

        let value = geom.y_max * (1.0 - i as f64 / 4.0);
        ctx.set_fill_style(&AXIS_TEXT_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 8.0, y + 4.0);
    }
}

fn x_for(index: usize, count: usize, geom: &ChartGeom) -> f64 {
    if count <= 1 {
        geom.margin_left + geom.chart_width / 2.0
    } else {
        geom.margin_left + index as f64 / (count - 1) as f64 * geom.chart_width
    }
}

fn y_for(value: u32, geom: &ChartGeom) -> f64 {
    geom.margin_top + (1.0 - value as f64 / geom.y_max) * geom.chart_height
}

fn draw_series(
    ctx: &CanvasRenderingContext2d,
    points: &[SeriesPoint],
    value: impl Fn(&SeriesPoint) -> u32,
    color: &str,
    geom: &ChartGeom,
) {
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, point) in points.iter().enumerate() {
        let x = x_for(i, points.len(), geom);
        let y = y_for(value(point), geom);

        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }

    ctx.stroke();

    ctx.set_fill_style(&color.into());
    for (i, point) in points.iter().enumerate() {
        let x = x_for(i, points.len(), geom);
        let y = y_for(value(point), geom);

        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

/// Draw the conversion funnel bar chart on canvas
fn draw_funnel(canvas: &HtmlCanvasElement) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 50.0;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let geom = ChartGeom {
        margin_left,
        margin_top,
        chart_width: width - margin_left - margin_right,
        chart_height: height - margin_top - margin_bottom,
        y_max: FUNNEL_STAGES[0].users as f64 * 1.1,
    };

    draw_grid(&ctx, &geom, width);

    let slot = geom.chart_width / FUNNEL_STAGES.len() as f64;
    let bar_width = slot * 0.6;

    ctx.set_font("11px sans-serif");
    for (i, stage) in FUNNEL_STAGES.iter().enumerate() {
        let x = geom.margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let bar_height = stage.users as f64 / geom.y_max * geom.chart_height;
        let y = geom.margin_top + geom.chart_height - bar_height;

        ctx.set_fill_style(&stage.color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#475569".into());
        let center = x + bar_width / 2.0;
        let _ = ctx.fill_text(&format!("{:.0}%", funnel_percent(stage)), center - 12.0, y - 6.0);
        let _ = ctx.fill_text(stage.label, center - 32.0, height - 18.0);
    }
}
