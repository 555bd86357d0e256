use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Local;

use crate::data::comparison::NODES;
use crate::helpers::compact;
use crate::models::views::*;
use crate::report::comparison::{find_node, node_option_label};
use crate::report::model::{Block, Callout, Card, Chart, Details, Section, Series, SeriesKind};
use crate::report::{self, Page, RenderError, Report};
use crate::routes::api::NodeQuery;
use crate::AppState;

fn render_template(tmpl: &impl Template) -> Response {
    match tmpl.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

fn generated_at() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn build_nav(active: Option<(Report, Page)>) -> Vec<NavGroup> {
    Report::ALL
        .into_iter()
        .map(|r| NavGroup {
            title: r.title().to_string(),
            url: format!("/ui/{}", r.id()),
            links: r
                .pages()
                .iter()
                .map(|&p| NavLink {
                    label: p.label().to_string(),
                    url: format!("/ui/{}/{}", r.id(), p.id()),
                    class: if active == Some((r, p)) {
                        "active".to_string()
                    } else {
                        String::new()
                    },
                })
                .collect(),
        })
        .collect()
}

// --- Index ---

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    title: String,
    cluster_name: String,
    subtitle: String,
    nav: Vec<NavGroup>,
    generated_at: String,
    default_url: String,
}

pub async fn handle_index(State(state): State<AppState>) -> Response {
    let default = state.config.default_report;
    let tmpl = IndexTemplate {
        title: "Reports".to_string(),
        cluster_name: state.config.cluster_name.clone(),
        subtitle: "Memory Optimization Reports".to_string(),
        nav: build_nav(None),
        generated_at: generated_at(),
        default_url: format!("/ui/{}/{}", default.id(), Page::Summary.id()),
    };

    render_template(&tmpl)
}

pub async fn handle_report(State(state): State<AppState>, Path(report): Path<String>) -> Response {
    match report.parse::<Report>() {
        Ok(r) => Redirect::to(&format!("/ui/{}/{}", r.id(), Page::Summary.id())).into_response(),
        Err(e) => render_error(&state, e),
    }
}

// --- Report pages ---

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate {
    title: String,
    cluster_name: String,
    subtitle: String,
    nav: Vec<NavGroup>,
    generated_at: String,
    report_title: String,
    heading: String,
    form_action: String,
    node_options: Vec<NodeOption>,
    sections: Vec<SectionView>,
}

pub async fn handle_page(
    State(state): State<AppState>,
    Path((report, page)): Path<(String, String)>,
    Query(query): Query<NodeQuery>,
) -> Response {
    let node = query.node.as_deref();
    let parsed = report
        .parse::<Report>()
        .and_then(|r| page.parse::<Page>().map(|p| (r, p)));
    let (r, p) = match parsed {
        Ok(v) => v,
        Err(e) => return render_error(&state, e),
    };

    let view = match report::render(r, p, node) {
        Ok(v) => v,
        Err(e) => return render_error(&state, e),
    };
    tracing::debug!("rendered {}/{}", r, p);

    let node_options = if p == Page::NodeDetail {
        build_node_options(node)
    } else {
        Vec::new()
    };

    let tmpl = PageTemplate {
        title: view.title.clone(),
        cluster_name: state.config.cluster_name.clone(),
        subtitle: r.subtitle().to_string(),
        nav: build_nav(Some((r, p))),
        generated_at: generated_at(),
        report_title: r.title().to_string(),
        heading: view.heading.clone(),
        form_action: format!("/ui/{}/{}", r.id(), p.id()),
        node_options,
        sections: view.sections.iter().map(build_section_view).collect(),
    };

    render_template(&tmpl)
}

fn build_node_options(selected: Option<&str>) -> Vec<NodeOption> {
    let current = find_node(selected).map(|n| n.name).unwrap_or_default();
    NODES
        .iter()
        .map(|n| NodeOption {
            id: n.short_id().to_string(),
            label: node_option_label(n),
            selected: if n.name == current {
                "selected".to_string()
            } else {
                String::new()
            },
        })
        .collect()
}

// --- Errors ---

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    title: String,
    cluster_name: String,
    subtitle: String,
    nav: Vec<NavGroup>,
    generated_at: String,
    message: String,
}

fn render_error(state: &AppState, err: RenderError) -> Response {
    tracing::warn!("rejected page request: {}", err);
    let tmpl = ErrorTemplate {
        title: "Not Found".to_string(),
        cluster_name: state.config.cluster_name.clone(),
        subtitle: String::new(),
        nav: build_nav(None),
        generated_at: generated_at(),
        message: err.to_string(),
    };
    match tmpl.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("template error: {}", e);
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
    }
}

// --- View Builders ---

fn build_section_view(section: &Section) -> SectionView {
    SectionView {
        title: section.title.clone(),
        blocks: section.blocks.iter().map(build_block_view).collect(),
    }
}

fn build_block_view(block: &Block) -> BlockView {
    match block {
        Block::Metrics { items } => BlockView::Metrics(items.clone()),
        Block::Chart(chart) => BlockView::Chart(build_chart_view(chart)),
        Block::Table(table) => BlockView::Table(table.clone()),
        Block::Callout(callout) => BlockView::Callout(build_callout_view(callout)),
        Block::Cards { items } => BlockView::Cards(items.iter().map(build_card_view).collect()),
        Block::Details(details) => BlockView::Details(build_details_view(details)),
        Block::Text { text } => BlockView::Text(text.clone()),
    }
}

fn build_card_view(card: &Card) -> CardView {
    CardView {
        class: card.tone.css_class().to_string(),
        heading: card.heading.clone(),
        lines: card.lines.clone(),
        emphasis: card.emphasis.clone().unwrap_or_default(),
    }
}

fn build_callout_view(callout: &Callout) -> CalloutView {
    CalloutView {
        class: callout.tone.css_class().to_string(),
        title: callout.title.clone(),
        paragraphs: callout.paragraphs.clone(),
        bullets: callout.bullets.clone(),
    }
}

fn build_details_view(details: &Details) -> DetailsView {
    DetailsView {
        summary: details.summary.clone(),
        intro: details.intro.clone(),
        code: details.code.clone().unwrap_or_default(),
        cards: details.cards.iter().map(build_card_view).collect(),
    }
}

fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max <= 0.0 { 1.0 } else { max * 1.1 }
}

fn pct_of(value: f64, max: f64) -> String {
    format!("{:.1}", (value / max * 100.0).clamp(0.0, 100.0))
}

/// Lays a chart out as rows of horizontal bars, one row per category (or per
/// point for scatter series). Secondary-axis series get their own scale.
fn build_chart_view(chart: &Chart) -> ChartView {
    let primary_max = axis_max(
        chart
            .series
            .iter()
            .filter(|s| !s.secondary_axis)
            .flat_map(|s| s.values.iter().copied())
            .chain(chart.thresholds.iter().map(|t| t.value)),
    );
    let secondary_max = axis_max(
        chart
            .series
            .iter()
            .filter(|s| s.secondary_axis)
            .flat_map(|s| s.values.iter().copied()),
    );

    let bar = |series: &Series, idx: usize, label: String| {
        let max = if series.secondary_axis { secondary_max } else { primary_max };
        let value = series.values.get(idx).copied().unwrap_or_default();
        BarView {
            series: series.name.clone(),
            label,
            width: pct_of(value, max),
            color: series.color_at(idx).to_string(),
            class: match series.kind {
                SeriesKind::Bar => "bar",
                SeriesKind::Line => "bar bar-line",
                SeriesKind::Scatter => "bar bar-point",
            }
            .to_string(),
        }
    };

    let mut rows: Vec<ChartRow> = chart
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| ChartRow {
            category: category.clone(),
            marker: String::new(),
            bars: chart
                .series
                .iter()
                .filter(|s| s.kind != SeriesKind::Scatter)
                .map(|s| bar(s, i, s.labels.get(i).cloned().unwrap_or_default()))
                .collect(),
        })
        .collect();

    for series in chart.series.iter().filter(|s| s.kind == SeriesKind::Scatter) {
        for (j, y) in series.values.iter().enumerate() {
            let x = series.x.get(j).copied().unwrap_or_default();
            rows.push(ChartRow {
                category: series.labels.get(j).cloned().unwrap_or_default(),
                marker: String::new(),
                bars: vec![bar(
                    series,
                    j,
                    format!("{}: {}, {}", chart.x_title, compact(x), compact(*y)),
                )],
            });
        }
    }

    for marker in &chart.markers {
        if let Some(row) = rows.iter_mut().find(|r| r.category.as_str() >= marker.at.as_str()) {
            row.marker = marker.label.clone();
        }
    }

    ChartView {
        title: chart.title.clone(),
        x_title: chart.x_title.clone(),
        y_title: chart.y_title.clone(),
        y2_title: chart.y2_title.clone(),
        legend: chart
            .series
            .iter()
            .map(|s| LegendItem {
                name: s.name.clone(),
                color: s.color_at(0).to_string(),
            })
            .collect(),
        rows,
        thresholds: chart
            .thresholds
            .iter()
            .map(|t| ThresholdView {
                label: t.label.clone(),
                left: pct_of(t.value, primary_max),
                color: t.color.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_and_thresholds_share_primary_scale() {
        let chart = Chart::new("t", "x", "y")
            .categories(["a", "b"])
            .series(Series::bars("s", vec![50.0, 100.0], vec!["50".into(), "100".into()]))
            .threshold(110.0, "limit", "red");
        let view = build_chart_view(&chart);
        // max = 110 * 1.1 = 121
        assert_eq!(view.rows[1].bars[0].width, "82.6");
        assert_eq!(view.thresholds[0].left, "90.9");
        assert_eq!(view.rows[0].bars[0].label, "50");
    }

    #[test]
    fn secondary_axis_scales_independently() {
        let chart = Chart::new("t", "x", "y")
            .categories(["a"])
            .series(Series::bars("gb", vec![1.0], vec![String::new()]))
            .series(Series::line("total", vec![100.0], vec![String::new()]).on_secondary_axis());
        let view = build_chart_view(&chart);
        assert_eq!(view.rows[0].bars[0].width, "90.9");
        assert_eq!(view.rows[0].bars[1].width, "90.9");
        assert_eq!(view.rows[0].bars[1].class, "bar bar-line");
    }

    #[test]
    fn scatter_points_become_rows() {
        let chart = Chart::new("t", "Usage", "Overcommit").series(Series::scatter(
            "old",
            vec![90.0, 83.0],
            vec![202.0, 198.0],
            vec!["Old-bm".into(), "Old-7r".into()],
        ));
        let view = build_chart_view(&chart);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].category, "Old-bm");
        assert_eq!(view.rows[0].bars[0].label, "Usage: 90, 202");
    }

    #[test]
    fn markers_attach_to_first_following_category() {
        let chart = Chart::new("t", "Date", "MB")
            .categories(["2024-06-23", "2024-06-30", "2024-07-07"])
            .series(Series::line("m", vec![1.0, 2.0, 3.0], Vec::new()))
            .marker("2024-07-01", "Optimization Start", "orange");
        let view = build_chart_view(&chart);
        assert_eq!(view.rows[1].marker, "");
        assert_eq!(view.rows[2].marker, "Optimization Start");
    }

    #[test]
    fn empty_chart_does_not_divide_by_zero() {
        let chart = Chart::new("t", "x", "y")
            .categories(["a"])
            .series(Series::bars("s", vec![0.0], vec![String::new()]));
        let view = build_chart_view(&chart);
        assert_eq!(view.rows[0].bars[0].width, "0.0");
    }

    #[test]
    fn node_options_mark_selection() {
        let opts = build_node_options(Some("vmss00007r"));
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[1].selected, "selected");
        assert_eq!(opts[0].selected, "");
        assert!(opts[1].label.contains("HIGH → NORMAL"));
    }

    #[test]
    fn nav_marks_active_page_only() {
        let nav = build_nav(Some((Report::Status, Page::NextSteps)));
        let active: Vec<&str> = nav
            .iter()
            .flat_map(|g| g.links.iter())
            .filter(|l| l.class == "active")
            .map(|l| l.url.as_str())
            .collect();
        assert_eq!(active, vec!["/ui/status/next-steps"]);
    }
}
