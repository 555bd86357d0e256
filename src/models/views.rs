// Pre-computed view structs for the HTML templates. Everything a template
// prints is already a string; templates only loop and branch.

use crate::report::model::{CodeSnippet, Metric, Table};

#[derive(Debug, Clone, Default)]
pub struct NavLink {
    pub label: String,
    pub url: String,
    pub class: String,
}

#[derive(Debug, Clone, Default)]
pub struct NavGroup {
    pub title: String,
    pub url: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, Default)]
pub struct NodeOption {
    pub id: String,
    pub label: String,
    /// `selected` or empty.
    pub selected: String,
}

#[derive(Debug, Clone, Default)]
pub struct SectionView {
    pub title: String,
    pub blocks: Vec<BlockView>,
}

#[derive(Debug, Clone)]
pub enum BlockView {
    Metrics(Vec<Metric>),
    Chart(ChartView),
    Table(Table),
    Callout(CalloutView),
    Cards(Vec<CardView>),
    Details(DetailsView),
    Text(String),
}

#[derive(Debug, Clone, Default)]
pub struct CardView {
    pub class: String,
    pub heading: String,
    pub lines: Vec<String>,
    pub emphasis: String,
}

#[derive(Debug, Clone, Default)]
pub struct CalloutView {
    pub class: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DetailsView {
    pub summary: String,
    pub intro: Vec<String>,
    pub code: CodeSnippet,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, Default)]
pub struct LegendItem {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct BarView {
    pub series: String,
    pub label: String,
    /// Percentage of the axis width, formatted for a CSS `width`.
    pub width: String,
    pub color: String,
    pub class: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChartRow {
    pub category: String,
    pub marker: String,
    pub bars: Vec<BarView>,
}

#[derive(Debug, Clone, Default)]
pub struct ThresholdView {
    pub label: String,
    pub left: String,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChartView {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub y2_title: String,
    pub legend: Vec<LegendItem>,
    pub rows: Vec<ChartRow>,
    pub thresholds: Vec<ThresholdView>,
}
