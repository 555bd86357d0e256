//! Literal datasets behind both reports.

pub mod comparison;
pub mod snippets;
pub mod status;

#[cfg(test)]
mod tests {
    use super::comparison::*;
    use super::status::*;
    use crate::models::metrics::{HealthStatus, NodeStatus};

    #[test]
    fn node_memory_deltas_match_snapshots() {
        let deltas: Vec<i64> = NODES
            .iter()
            .map(|n| n.after.memory_mi as i64 - n.before.memory_mi as i64)
            .collect();
        assert_eq!(deltas, vec![-2775, -2812, -2797]);
    }

    #[test]
    fn per_node_colour_tables_align_with_nodes() {
        assert_eq!(OLD_NODE_COLORS.len(), NODES.len());
        assert_eq!(CURRENT_NODE_COLORS.len(), NODES.len());
        assert_eq!(TIMELINE_COLORS.len(), TIMELINE.len());
    }

    #[test]
    fn node_names_are_unique_by_short_id() {
        let mut ids: Vec<&str> = NODES.iter().map(|n| n.short_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids, vec!["vmss00004q", "vmss00007r", "vmss0000bm"]);
    }

    #[test]
    fn no_node_remains_critical_after_optimisation() {
        assert!(NODES.iter().all(|n| n.after.status != NodeStatus::Critical));
        assert_eq!(NODES[0].before.status, NodeStatus::Critical);
    }

    #[test]
    fn timeline_cumulative_is_running_sum() {
        let mut total = 0.0;
        for phase in TIMELINE.iter() {
            total += phase.reduction_gb;
            assert!((phase.cumulative_gb - total).abs() < 1e-9, "{}", phase.phase);
        }
    }

    #[test]
    fn namespace_pods_sum_to_cluster_total() {
        let pods: u32 = NAMESPACES.iter().map(|n| n.pods).sum();
        assert_eq!(pods, CLUSTER_POD_TOTAL);
    }

    #[test]
    fn namespace_health_labels_are_literal() {
        let moderate = NAMESPACES
            .iter()
            .filter(|n| n.status == HealthStatus::Moderate)
            .count();
        assert_eq!(moderate, 3);
        // cenomi sits above the moderate line but is labelled healthy
        let cenomi = NAMESPACES.iter().find(|n| n.namespace == "cenomi").unwrap();
        assert_eq!(cenomi.status, HealthStatus::Healthy);
        assert_eq!(cenomi.memory_pct, 74);
    }

    #[test]
    fn trend_phases_cover_a_year_of_weeks() {
        let weeks: usize = TREND_PHASES.iter().map(|(n, _, _)| n).sum();
        assert_eq!(weeks, 52);
    }
}
