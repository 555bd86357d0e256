use serde::Serialize;

use crate::models::metrics::Tone;

/// A fully composed page: what the host draws for one page selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub report: String,
    pub page: String,
    pub title: String,
    pub heading: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Section {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Metrics { items: Vec<Metric> },
    Chart(Chart),
    Table(Table),
    Callout(Callout),
    Cards { items: Vec<Card> },
    Details(Details),
    Text { text: String },
}

impl Block {
    pub fn metrics(items: Vec<Metric>) -> Self {
        Block::Metrics { items }
    }

    pub fn cards(items: Vec<Card>) -> Self {
        Block::Cards { items }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Block::Text { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: String,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>, delta: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: delta.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Bar,
    Line,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    /// Numeric x positions; empty when the series follows the chart categories.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub x: Vec<f64>,
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    /// One colour for the whole series, or one per point.
    pub colors: Vec<String>,
    pub secondary_axis: bool,
}

impl Series {
    pub fn bars(name: impl Into<String>, values: Vec<f64>, labels: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: SeriesKind::Bar,
            x: Vec::new(),
            values,
            labels,
            colors: Vec::new(),
            secondary_axis: false,
        }
    }

    pub fn line(name: impl Into<String>, values: Vec<f64>, labels: Vec<String>) -> Self {
        Self {
            kind: SeriesKind::Line,
            ..Self::bars(name, values, labels)
        }
    }

    pub fn scatter(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>, labels: Vec<String>) -> Self {
        Self {
            kind: SeriesKind::Scatter,
            x,
            ..Self::bars(name, y, labels)
        }
    }

    pub fn color(mut self, color: &str) -> Self {
        self.colors = vec![color.to_string()];
        self
    }

    pub fn colors<'a>(mut self, colors: impl IntoIterator<Item = &'a str>) -> Self {
        self.colors = colors.into_iter().map(str::to_string).collect();
        self
    }

    pub fn on_secondary_axis(mut self) -> Self {
        self.secondary_axis = true;
        self
    }

    /// Colour of the point at `idx`, falling back to the series colour.
    pub fn color_at(&self, idx: usize) -> &str {
        match self.colors.len() {
            0 => "#1f77b4",
            1 => &self.colors[0],
            _ => self.colors.get(idx).map(String::as_str).unwrap_or("#1f77b4"),
        }
    }
}

/// Horizontal reference line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Threshold {
    pub value: f64,
    pub label: String,
    pub color: String,
}

/// Vertical marker at a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub at: String,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Chart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub y2_title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub thresholds: Vec<Threshold>,
    pub markers: Vec<Marker>,
}

impl Chart {
    pub fn new(title: impl Into<String>, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_title: x_title.into(),
            y_title: y_title.into(),
            ..Default::default()
        }
    }

    pub fn categories<S: Into<String>>(mut self, categories: impl IntoIterator<Item = S>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn threshold(mut self, value: f64, label: impl Into<String>, color: &str) -> Self {
        self.thresholds.push(Threshold {
            value,
            label: label.into(),
            color: color.to_string(),
        });
        self
    }

    pub fn marker(mut self, at: impl Into<String>, label: impl Into<String>, color: &str) -> Self {
        self.markers.push(Marker {
            at: at.into(),
            label: label.into(),
            color: color.to_string(),
        });
        self
    }

    pub fn secondary_axis(mut self, title: impl Into<String>) -> Self {
        self.y2_title = title.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    pub tone: Tone,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
}

impl Callout {
    pub fn new(tone: Tone, title: impl Into<String>) -> Self {
        Self {
            tone,
            title: title.into(),
            paragraphs: Vec::new(),
            bullets: Vec::new(),
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    pub fn bullets<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.bullets.extend(items.into_iter().map(Into::into));
        self
    }
}

/// Column card: heading, plain lines, and an optional emphasised closing line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub tone: Tone,
    pub heading: String,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<String>,
}

impl Card {
    pub fn new<S: Into<String>>(heading: impl Into<String>, lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            tone: Tone::Neutral,
            heading: heading.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            emphasis: None,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn emphasis(mut self, text: impl Into<String>) -> Self {
        self.emphasis = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct CodeSnippet {
    pub language: String,
    pub source: String,
}

impl CodeSnippet {
    pub fn new(language: &str, source: &str) -> Self {
        Self {
            language: language.to_string(),
            source: source.to_string(),
        }
    }
}

/// Collapsible block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Details {
    pub summary: String,
    pub intro: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeSnippet>,
    pub cards: Vec<Card>,
}

impl Details {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            intro: Vec::new(),
            code: None,
            cards: Vec::new(),
        }
    }

    pub fn intro(mut self, line: impl Into<String>) -> Self {
        self.intro.push(line.into());
        self
    }

    pub fn code(mut self, language: &str, source: &str) -> Self {
        self.code = Some(CodeSnippet::new(language, source));
        self
    }

    pub fn card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }
}

/// Collects every chart in a page, in order.
#[cfg(test)]
pub fn charts(view: &PageView) -> Vec<&Chart> {
    view.sections
        .iter()
        .flat_map(|s| s.blocks.iter())
        .filter_map(|b| match b {
            Block::Chart(c) => Some(c),
            _ => None,
        })
        .collect()
}
