use serde::Serialize;

// Typed rows for the literal report tables. Status fields are hardcoded per
// row; nothing here classifies a value into a status.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeStatus {
    Critical,
    High,
    Medium,
    Normal,
}

impl NodeStatus {
    pub fn label(self) -> &'static str {
        match self {
            NodeStatus::Critical => "CRITICAL",
            NodeStatus::High => "HIGH",
            NodeStatus::Medium => "MEDIUM",
            NodeStatus::Normal => "NORMAL",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            NodeStatus::Critical => Tone::Critical,
            NodeStatus::High | NodeStatus::Medium => Tone::Warning,
            NodeStatus::Normal => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    P0,
    P1,
    P2,
    P3,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Healthy,
    Moderate,
    Critical,
}

impl HealthStatus {
    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "HEALTHY",
            HealthStatus::Moderate => "MODERATE",
            HealthStatus::Critical => "CRITICAL",
        }
    }
}

/// How far an optimisation item has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressLevel {
    Done,
    Partial,
    Missing,
}

impl ProgressLevel {
    /// Bar height used by the implementation charts.
    pub fn score(self) -> f64 {
        match self {
            ProgressLevel::Done => 1.0,
            ProgressLevel::Partial => 0.5,
            ProgressLevel::Missing => 0.0,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ProgressLevel::Done => "#4caf50",
            ProgressLevel::Partial => "#ff9800",
            ProgressLevel::Missing => "#f44336",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub level: ProgressLevel,
    pub label: &'static str,
}

impl Progress {
    pub const fn new(level: ProgressLevel, label: &'static str) -> Self {
        Self { level, label }
    }

    pub fn display(&self) -> String {
        let mark = match self.level {
            ProgressLevel::Done => "✅",
            ProgressLevel::Partial => "⚠️",
            ProgressLevel::Missing => "❌",
        };
        format!("{} {}", mark, self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

/// Presentation tone shared by callouts, cards and status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Critical,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Neutral => "tone-neutral",
            Tone::Info => "tone-info",
            Tone::Success => "tone-success",
            Tone::Warning => "tone-warning",
            Tone::Critical => "tone-critical",
        }
    }
}

// --- Nodes ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub memory_pct: u32,
    pub memory_mi: u32,
    pub overcommit_pct: u32,
    pub cpu_pct: u32,
    pub cpu_m: u32,
    pub pods: u32,
    pub status: NodeStatus,
    pub priority: Priority,
}

/// One node with both snapshots carried side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeComparison {
    pub name: &'static str,
    pub before: NodeSnapshot,
    pub after: NodeSnapshot,
}

impl NodeComparison {
    /// Trailing part of the node name after the scale-set prefix, e.g. `vmss0000bm`.
    pub fn short_id(&self) -> &'static str {
        self.name.rsplit('-').next().unwrap_or(self.name)
    }

    pub fn matches(&self, id: &str) -> bool {
        self.name == id || self.short_id() == id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentSavings {
    pub component: &'static str,
    pub before_mb: u32,
    pub after_mb: u32,
    pub reduction_pct: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelinePhase {
    pub phase: &'static str,
    pub completed: bool,
    pub reduction_gb: f64,
    pub cumulative_gb: f64,
}

// --- Cluster status ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamespaceUsage {
    pub namespace: &'static str,
    pub cpu_pct: u32,
    pub memory_pct: u32,
    pub pods: u32,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimizationItem {
    pub component: &'static str,
    pub before: Progress,
    pub after: Progress,
    pub memory_impact_mb: u32,
    pub implemented: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeVerification {
    pub file_path: &'static str,
    pub optimization: &'static str,
    pub verified: bool,
    pub reduction: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub item: &'static str,
    pub priority: Urgency,
    pub impact: Urgency,
    pub effort: Urgency,
    pub timeline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceMetric {
    pub metric: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub improvement: &'static str,
    pub rating: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionItem {
    pub action: &'static str,
    pub priority: Urgency,
    pub timeline: &'static str,
    pub owner: &'static str,
    pub status: &'static str,
}

// --- Banding policies ---
//
// The two reports band memory usage differently. They are kept as separate
// policies and never merged.

/// Fixed chart reference lines.
pub const MEMORY_WARNING_LINE: f64 = 70.0;
pub const MEMORY_CRITICAL_LINE: f64 = 80.0;
pub const OVERCOMMIT_LIMIT_LINE: f64 = 100.0;

/// Node banding used by the comparison report legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeBands {
    pub critical_above: u32,
    pub high_from: u32,
    pub medium_from: u32,
}

pub const NODE_BANDS: NodeBands = NodeBands {
    critical_above: 80,
    high_from: 70,
    medium_from: 60,
};

impl NodeBands {
    pub fn legend(&self) -> Vec<String> {
        vec![
            format!("🔴 >{}%: Critical", self.critical_above),
            format!("🟠 {}-{}%: High", self.high_from, self.critical_above),
            format!("🟡 {}-{}%: Medium", self.medium_from, self.high_from),
            format!("🟢 <{}%: Normal", self.medium_from),
        ]
    }
}

/// Namespace banding used by the status report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBands {
    pub moderate_from: u32,
    pub critical_from: u32,
}

pub const HEALTH_BANDS: HealthBands = HealthBands {
    moderate_from: 70,
    critical_from: 80,
};

impl HealthBands {
    pub fn color_for(&self, memory_pct: u32) -> &'static str {
        if memory_pct < self.moderate_from {
            "#4caf50"
        } else if memory_pct < self.critical_from {
            "#ff9800"
        } else {
            "#f44336"
        }
    }

    pub fn legend(&self) -> Vec<String> {
        vec![
            format!("🟢 <{}%: Healthy", self.moderate_from),
            format!("🟡 {}-{}%: Moderate", self.moderate_from, self.critical_from),
            format!("🔴 >{}%: Critical", self.critical_from),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_is_trailing_segment() {
        let node = NodeComparison {
            name: "aks-pool-1234-vmss0000bm",
            before: sample(NodeStatus::Critical),
            after: sample(NodeStatus::Medium),
        };
        assert_eq!(node.short_id(), "vmss0000bm");
        assert!(node.matches("vmss0000bm"));
        assert!(node.matches("aks-pool-1234-vmss0000bm"));
        assert!(!node.matches("0000bm"));
    }

    #[test]
    fn health_bands_color_boundaries() {
        assert_eq!(HEALTH_BANDS.color_for(69), "#4caf50");
        assert_eq!(HEALTH_BANDS.color_for(70), "#ff9800");
        assert_eq!(HEALTH_BANDS.color_for(79), "#ff9800");
        assert_eq!(HEALTH_BANDS.color_for(80), "#f44336");
    }

    #[test]
    fn banding_policies_stay_distinct() {
        assert_eq!(NODE_BANDS.legend().len(), 4);
        assert_eq!(HEALTH_BANDS.legend().len(), 3);
        assert!(NODE_BANDS.legend()[2].contains("Medium"));
        assert!(HEALTH_BANDS.legend().iter().all(|l| !l.contains("Medium")));
    }

    #[test]
    fn progress_display_marks_level() {
        let p = Progress::new(ProgressLevel::Partial, "Basic");
        assert_eq!(p.display(), "⚠️ Basic");
        assert_eq!(p.level.score(), 0.5);
    }

    fn sample(status: NodeStatus) -> NodeSnapshot {
        NodeSnapshot {
            memory_pct: 50,
            memory_mi: 1000,
            overcommit_pct: 100,
            cpu_pct: 10,
            cpu_m: 100,
            pods: 5,
            status,
            priority: Priority::P3,
        }
    }
}
