//! Old vs current node comparison report.

use crate::data::comparison::{
    COMPONENT_SAVINGS, CURRENT_NODE_COLORS, NODES, OLD_NODE_COLORS, TIMELINE, TIMELINE_COLORS,
};
use crate::helpers::{compact, delta, percent_change, signed, signed_pct, tail};
use crate::models::metrics::{
    NodeComparison, NodeSnapshot, NodeStatus, Tone, MEMORY_CRITICAL_LINE, MEMORY_WARNING_LINE, NODE_BANDS,
    OVERCOMMIT_LIMIT_LINE,
};

use super::model::{Block, Callout, Card, Chart, Metric, Section, Series};
use super::{Page, RenderError};

const OLD: &str = "#ff6b6b";
const CURRENT: &str = "#4ecdc4";

pub fn render(page: Page, node: Option<&str>) -> Result<(String, Vec<Section>), RenderError> {
    let out = match page {
        Page::Summary => ("🚨 Executive Summary & Critical Findings".to_string(), summary()),
        Page::NodesOverview => ("📊 Critical Nodes Overview".to_string(), nodes_overview()),
        Page::NodeDetail => {
            let node = find_node(node)?;
            ("🔍 Node-by-Node Detailed Analysis".to_string(), node_detail(node))
        }
        Page::ActionPlan => ("📈 Action Plan & Timeline".to_string(), action_plan()),
        other => {
            return Err(RenderError::PageNotInReport {
                report: "comparison",
                page: other.id(),
            });
        }
    };
    Ok(out)
}

/// Looks a node up by short id or full name.
pub fn find_node(id: Option<&str>) -> Result<&'static NodeComparison, RenderError> {
    match id {
        None => Ok(&NODES[0]),
        Some(id) => NODES.iter().find(|n| n.matches(id)).ok_or_else(|| {
            let known: Vec<&str> = NODES.iter().map(|n| n.short_id()).collect();
            RenderError::UnknownNode(id.to_string(), known.join(", "))
        }),
    }
}

/// Selector entry, e.g. `… (90% → 68% CRITICAL → MEDIUM)`.
pub fn node_option_label(node: &NodeComparison) -> String {
    format!(
        "{} ({}% → {}% {} → {})",
        node.name,
        node.before.memory_pct,
        node.after.memory_pct,
        node.before.status.label(),
        node.after.status.label()
    )
}

/// Change figures for one node, current minus old.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDelta {
    pub memory_mi: i64,
    pub cpu_m: i64,
    pub overcommit_pct: i64,
    pub pods: i64,
    pub memory_change: Option<f64>,
    pub cpu_change: Option<f64>,
}

impl NodeDelta {
    pub fn of(node: &NodeComparison) -> Self {
        let (b, a) = (&node.before, &node.after);
        Self {
            memory_mi: delta(b.memory_mi, a.memory_mi),
            cpu_m: delta(b.cpu_m, a.cpu_m),
            overcommit_pct: delta(b.overcommit_pct, a.overcommit_pct),
            pods: delta(b.pods, a.pods),
            memory_change: percent_change(b.memory_mi, a.memory_mi),
            cpu_change: percent_change(b.cpu_m, a.cpu_m),
        }
    }
}

fn short_labels() -> Vec<String> {
    NODES.iter().map(|n| tail(n.name, 8).to_string()).collect()
}

fn count_nodes(pred: impl Fn(&NodeComparison) -> bool) -> usize {
    NODES.iter().filter(|&n| pred(n)).count()
}

fn pct_labels(values: impl Iterator<Item = u32>) -> Vec<String> {
    values.map(|v| format!("{}%", v)).collect()
}

fn summary() -> Vec<Section> {
    let headline = Section::default().with(Block::metrics(vec![
        Metric::new("Memory Reduction", "2.78GB", "⬇️ 24% Improvement"),
        Metric::new("Avg Overcommit", "136%", "⬇️ From 191%"),
        Metric::new("Critical Nodes", "0", "⬇️ From 3"),
        Metric::new("Pod Capacity", "+15", "📈 25% Increase"),
    ]));

    let components: Vec<&str> = COMPONENT_SAVINGS.iter().map(|c| c.component).collect();
    let usage = Chart::new("Old vs Current Memory Usage", "Components", "Memory (MB)")
        .categories(components.clone())
        .series(
            Series::bars(
                "Old State",
                COMPONENT_SAVINGS.iter().map(|c| c.before_mb as f64).collect(),
                COMPONENT_SAVINGS.iter().map(|c| c.before_mb.to_string()).collect(),
            )
            .color(OLD),
        )
        .series(
            Series::bars(
                "Current State",
                COMPONENT_SAVINGS.iter().map(|c| c.after_mb as f64).collect(),
                COMPONENT_SAVINGS.iter().map(|c| c.after_mb.to_string()).collect(),
            )
            .color(CURRENT),
        );
    let reduction = Chart::new("Reduction Potential by Component", "Components", "Reduction (%)")
        .categories(components)
        .series(
            Series::bars(
                "Reduction %",
                COMPONENT_SAVINGS.iter().map(|c| c.reduction_pct as f64).collect(),
                pct_labels(COMPONENT_SAVINGS.iter().map(|c| c.reduction_pct)),
            )
            .color("#45b7d1"),
        );

    let analysis = Section::new("📊 Memory Optimization Analysis")
        .with(Block::Chart(usage))
        .with(Block::Chart(reduction));

    let improvements = Section::new("🎯 Key Improvements Achieved").with(Block::cards(vec![
        Card::new(
            "Memory Optimization",
            ["Old Total: 31.6GB used", "Current Total: 23.2GB used"],
        )
        .emphasis("Reduction: 8.4GB (26%)"),
        Card::new(
            "Overcommitment Relief",
            ["Old Average: 191%", "Current Average: 136%"],
        )
        .emphasis("Improvement: 55% reduction"),
        Card::new(
            "Stability Enhancement",
            ["Critical nodes: 0 (was 3)", "OOM risk: Eliminated"],
        )
        .emphasis("Pod capacity: +25%"),
    ]));

    vec![headline, analysis, improvements]
}

fn nodes_overview() -> Vec<Section> {
    let labels = short_labels();

    let memory = Chart::new(
        "Node Memory Usage Comparison - Old vs Current",
        "Node (Last 8 chars)",
        "Memory Usage (%)",
    )
    .categories(labels.clone())
    .series(
        Series::bars(
            "Old State",
            NODES.iter().map(|n| n.before.memory_pct as f64).collect(),
            pct_labels(NODES.iter().map(|n| n.before.memory_pct)),
        )
        .colors(OLD_NODE_COLORS),
    )
    .series(
        Series::bars(
            "Current State",
            NODES.iter().map(|n| n.after.memory_pct as f64).collect(),
            pct_labels(NODES.iter().map(|n| n.after.memory_pct)),
        )
        .colors(CURRENT_NODE_COLORS),
    )
    .threshold(MEMORY_CRITICAL_LINE, "Critical Threshold (80%)", "red")
    .threshold(MEMORY_WARNING_LINE, "Warning Threshold (70%)", "orange");

    // Counts follow the literal status labels, not the banding legend.
    let old_stressed = count_nodes(|n| n.before.status != NodeStatus::Normal);
    let old_in_safe_range = count_nodes(|n| n.before.status == NodeStatus::Normal);
    let current_critical = count_nodes(|n| n.after.status == NodeStatus::Critical);
    let current_in_safe_range = count_nodes(|n| n.after.status == NodeStatus::Normal);

    let legend = Card::new("🚨 Critical Thresholds", NODE_BANDS.legend()).tone(Tone::Info);
    let old_card = Card::new(
        "Old Status",
        [
            format!("{} nodes in critical/high state", old_stressed),
            format!("{} nodes in safe range", old_in_safe_range),
        ],
    )
    .tone(Tone::Warning);
    let current_card = Card::new(
        "Current Status",
        [
            format!("{} nodes in critical state", current_critical),
            format!("{} nodes in safe range", current_in_safe_range),
        ],
    )
    .tone(Tone::Success)
    .emphasis("Major improvement achieved");

    let status = Section::new("🎯 Node Status Summary")
        .with(Block::Chart(memory))
        .with(Block::cards(vec![legend, old_card, current_card]));

    let overcommit = Chart::new("Overcommitment: Old vs Current", "Node", "Overcommit (%)")
        .categories(labels)
        .series(
            Series::bars(
                "Old Overcommit",
                NODES.iter().map(|n| n.before.overcommit_pct as f64).collect(),
                pct_labels(NODES.iter().map(|n| n.before.overcommit_pct)),
            )
            .color(OLD),
        )
        .series(
            Series::bars(
                "Current Overcommit",
                NODES.iter().map(|n| n.after.overcommit_pct as f64).collect(),
                pct_labels(NODES.iter().map(|n| n.after.overcommit_pct)),
            )
            .color(CURRENT),
        )
        .threshold(OVERCOMMIT_LIMIT_LINE, "100% Limit", "red");

    let scatter = Chart::new(
        "Memory Usage vs Overcommitment",
        "Memory Usage (%)",
        "Overcommit (%)",
    )
    .series(
        Series::scatter(
            "Old State",
            NODES.iter().map(|n| n.before.memory_pct as f64).collect(),
            NODES.iter().map(|n| n.before.overcommit_pct as f64).collect(),
            NODES.iter().map(|n| format!("Old-{}", tail(n.name, 2))).collect(),
        )
        .color(OLD),
    )
    .series(
        Series::scatter(
            "Current State",
            NODES.iter().map(|n| n.after.memory_pct as f64).collect(),
            NODES.iter().map(|n| n.after.overcommit_pct as f64).collect(),
            NODES.iter().map(|n| format!("Cur-{}", tail(n.name, 2))).collect(),
        )
        .color(CURRENT),
    )
    .threshold(OVERCOMMIT_LIMIT_LINE, "100% Limit", "red");

    let analysis = Section::new("⚠️ Memory Overcommitment Analysis")
        .with(Block::Chart(overcommit))
        .with(Block::Chart(scatter));

    vec![status, analysis]
}

fn node_detail(node: &NodeComparison) -> Vec<Section> {
    let (old, cur) = (&node.before, &node.after);
    let d = NodeDelta::of(node);
    let short = tail(node.name, 8);

    let header = Section::new(format!("🔍 Node: {}", node.name))
        .with(Block::text(format!(
            "Status Change: {} → {}",
            old.status.label(),
            cur.status.label()
        )))
        .with(Block::metrics(vec![
            Metric::new(
                "Memory Usage",
                format!("{}Mi", cur.memory_mi),
                format!("{}Mi", signed(d.memory_mi)),
            ),
            Metric::new(
                "CPU Usage",
                format!("{}m", cur.cpu_m),
                format!("{}m", signed(d.cpu_m)),
            ),
            Metric::new(
                "Overcommit",
                format!("{}%", cur.overcommit_pct),
                format!("{}%", signed(d.overcommit_pct)),
            ),
            Metric::new("Pod Count", cur.pods.to_string(), signed(d.pods)),
        ]));

    let snapshot_lines = |s: &NodeSnapshot| {
        vec![
            format!("Memory: {}Mi ({}%)", s.memory_mi, s.memory_pct),
            format!("CPU: {}m ({}%)", s.cpu_m, s.cpu_pct),
            format!("Pods: {}", s.pods),
            format!("Status: {} ({})", s.status.label(), s.priority.label()),
        ]
    };

    let changes = Card::new(
        "📊 Changes",
        [
            format!("Memory: {}Mi ({})", signed(d.memory_mi), signed_pct(d.memory_change)),
            format!("CPU: {}m ({})", signed(d.cpu_m), signed_pct(d.cpu_change)),
            format!("Pods: {}", signed(d.pods)),
        ],
    )
    .tone(Tone::Info)
    .emphasis("Status: ✅ Improved");

    let cards = Section::new(format!("📊 Node Analysis: {}", short)).with(Block::cards(vec![
        Card::new("📊 Old State", snapshot_lines(old)).tone(old.status.tone()),
        Card::new("📈 Current State", snapshot_lines(cur)).tone(cur.status.tone()),
        changes,
    ]));

    let metrics = ["Memory Allocation", "CPU Allocation", "Pod Density", "Overcommit Ratio"];
    let old_values = [old.memory_mi, old.cpu_m, old.pods, old.overcommit_pct];
    let cur_values = [cur.memory_mi, cur.cpu_m, cur.pods, cur.overcommit_pct];
    let matrix = Chart::new(
        format!("Calculation Matrix Changes - {}", short),
        "Metrics",
        "Values",
    )
    .categories(metrics)
    .series(
        Series::bars(
            "Old Values",
            old_values.iter().map(|&v| v as f64).collect(),
            old_values.iter().map(u32::to_string).collect(),
        )
        .color(OLD),
    )
    .series(
        Series::bars(
            "Current Values",
            cur_values.iter().map(|&v| v as f64).collect(),
            cur_values.iter().map(u32::to_string).collect(),
        )
        .color(CURRENT),
    );

    let matrix = Section::new("🧮 Calculation Matrix Changes").with(Block::Chart(matrix));

    vec![header, cards, matrix]
}

fn action_plan() -> Vec<Section> {
    let phases: Vec<&str> = TIMELINE.iter().map(|p| p.phase).collect();
    let timeline = Chart::new(
        "Memory Optimization Timeline - Completed Phases",
        "Implementation Phases",
        "Memory Reduction (GB)",
    )
    .secondary_axis("Cumulative Reduction (GB)")
    .categories(phases)
    .series(
        Series::bars(
            "Phase Reduction",
            TIMELINE.iter().map(|p| p.reduction_gb).collect(),
            TIMELINE
                .iter()
                .map(|p| format!("{}GB", compact(p.reduction_gb)))
                .collect(),
        )
        .colors(TIMELINE_COLORS),
    )
    .series(
        Series::line(
            "Cumulative Reduction",
            TIMELINE.iter().map(|p| p.cumulative_gb).collect(),
            TIMELINE
                .iter()
                .map(|p| format!("{}GB Total", compact(p.cumulative_gb)))
                .collect(),
        )
        .color("#9c27b0")
        .on_secondary_axis(),
    );

    let completed = TIMELINE.iter().filter(|p| p.completed).count();
    let done = Section::new("✅ Completed Optimizations")
        .with(Block::text(format!(
            "{} of {} phases completed",
            completed,
            TIMELINE.len()
        )))
        .with(Block::Chart(timeline));

    let results = Section::new("🎯 Final Results Summary")
        .with(Block::Callout(
            Callout::new(Tone::Success, "✅ Memory Optimization").bullets([
                "Total reduction: 8.4GB",
                "Per-node average: 2.8GB",
                "Efficiency gain: 26%",
            ]),
        ))
        .with(Block::Callout(
            Callout::new(Tone::Success, "✅ Stability Improvement").bullets([
                "Critical nodes: 0 (was 3)",
                "OOM events: Eliminated",
                "Pod capacity: +25%",
            ]),
        ))
        .with(Block::Callout(
            Callout::new(Tone::Success, "✅ Performance Gains").bullets([
                "Response time: +15%",
                "Throughput: +20%",
                "Resource efficiency: +30%",
            ]),
        ));

    vec![done, results]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::{charts, Block};

    #[test]
    fn vmss0000bm_detail_figures() {
        let node = find_node(Some("vmss0000bm")).unwrap();
        assert_eq!(node.before.memory_mi, 11342);
        assert_eq!(node.before.memory_pct, 90);
        assert_eq!(node.after.memory_mi, 8567);
        assert_eq!(node.after.memory_pct, 68);

        let d = NodeDelta::of(node);
        assert_eq!(d.memory_mi, -2775);
        assert_eq!(d.cpu_m, -114);
        assert_eq!(d.overcommit_pct, -57);
        assert_eq!(d.pods, 3);
        assert_eq!(signed_pct(d.memory_change), "-24.5%");
    }

    #[test]
    fn deltas_for_every_node() {
        let expected = [(-2775, -114, -57, 3), (-2812, -168, -60, 3), (-2797, -96, -49, 4)];
        for (node, (mem, cpu, oc, pods)) in NODES.iter().zip(expected) {
            let d = NodeDelta::of(node);
            assert_eq!((d.memory_mi, d.cpu_m, d.overcommit_pct, d.pods), (mem, cpu, oc, pods), "{}", node.name);
        }
    }

    #[test]
    fn node_lookup_accepts_full_name_and_defaults_to_first() {
        let full = find_node(Some("aks-easv4serina-28315746-vmss00004q")).unwrap();
        assert_eq!(full.short_id(), "vmss00004q");
        assert_eq!(find_node(None).unwrap().short_id(), "vmss0000bm");
    }

    #[test]
    fn unknown_node_is_an_error() {
        match find_node(Some("vmss9999zz")) {
            Err(RenderError::UnknownNode(id, known)) => {
                assert_eq!(id, "vmss9999zz");
                assert!(known.contains("vmss0000bm"));
            }
            other => panic!("expected UnknownNode, got {:?}", other),
        }
        assert!(render(Page::NodeDetail, Some("bm")).is_err());
    }

    #[test]
    fn detail_page_shows_memory_delta() {
        let (_, sections) = render(Page::NodeDetail, Some("vmss0000bm")).unwrap();
        assert_eq!(sections[0].title, "🔍 Node: aks-easv4serina-28315746-vmss0000bm");
        let metrics = sections[0]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Metrics { items } => Some(items),
                _ => None,
            })
            .unwrap();
        assert_eq!(metrics[0].value, "8567Mi");
        assert_eq!(metrics[0].delta, "-2775Mi");
        assert_eq!(metrics[3].delta, "+3");

        let changes = match &sections[1].blocks[0] {
            Block::Cards { items } => &items[2],
            other => panic!("unexpected block {:?}", other),
        };
        assert_eq!(changes.lines[0], "Memory: -2775Mi (-24.5%)");
    }

    #[test]
    fn option_label_matches_selector_text() {
        assert_eq!(
            node_option_label(&NODES[1]),
            "aks-easv4serina-28315746-vmss00007r (83% → 61% HIGH → NORMAL)"
        );
    }

    #[test]
    fn overview_counts_follow_status_labels() {
        let (_, sections) = render(Page::NodesOverview, None).unwrap();
        let cards = match &sections[0].blocks[1] {
            Block::Cards { items } => items,
            other => panic!("unexpected block {:?}", other),
        };
        assert_eq!(cards[1].lines, vec!["3 nodes in critical/high state", "0 nodes in safe range"]);
        assert_eq!(cards[2].lines, vec!["0 nodes in critical state", "2 nodes in safe range"]);
    }

    #[test]
    fn timeline_uses_secondary_axis_for_cumulative() {
        let (heading, sections) = render(Page::ActionPlan, None).unwrap();
        assert_eq!(heading, "📈 Action Plan & Timeline");
        let view = crate::report::PageView {
            report: String::new(),
            page: String::new(),
            title: String::new(),
            heading,
            sections,
        };
        let chart = charts(&view)[0];
        assert_eq!(chart.series[1].labels[3], "3.7GB Total");
        assert!(chart.series[1].secondary_axis);
        assert_eq!(chart.series[0].labels[1], "2GB");
    }
}
