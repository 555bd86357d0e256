pub mod comparison;
pub mod error;
pub mod model;
pub mod status;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use error::RenderError;
pub use model::PageView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Report {
    Comparison,
    Status,
}

impl Report {
    pub const ALL: [Report; 2] = [Report::Comparison, Report::Status];

    pub fn id(self) -> &'static str {
        match self {
            Report::Comparison => "comparison",
            Report::Status => "status",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Report::Comparison => "📊 Static Comparison Analysis",
            Report::Status => "🔍 Memory Optimization Analysis",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Report::Comparison => "Old vs Current State - Memory Optimization Impact",
            Report::Status => "Implementation Status Report",
        }
    }

    /// Pages in sidebar order.
    pub fn pages(self) -> &'static [Page] {
        match self {
            Report::Comparison => &[
                Page::Summary,
                Page::NodesOverview,
                Page::NodeDetail,
                Page::ActionPlan,
            ],
            Report::Status => &[
                Page::Summary,
                Page::InfraStatus,
                Page::ImplementationStatus,
                Page::CodeVerification,
                Page::Recommendations,
                Page::PerformanceImpact,
                Page::TechnicalDeepDive,
                Page::NextSteps,
            ],
        }
    }

    pub fn has_page(self, page: Page) -> bool {
        self.pages().contains(&page)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Report {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Report::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| RenderError::UnknownReport(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Summary,
    NodesOverview,
    NodeDetail,
    ActionPlan,
    InfraStatus,
    ImplementationStatus,
    CodeVerification,
    Recommendations,
    PerformanceImpact,
    TechnicalDeepDive,
    NextSteps,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Summary,
        Page::NodesOverview,
        Page::NodeDetail,
        Page::ActionPlan,
        Page::InfraStatus,
        Page::ImplementationStatus,
        Page::CodeVerification,
        Page::Recommendations,
        Page::PerformanceImpact,
        Page::TechnicalDeepDive,
        Page::NextSteps,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Summary => "summary",
            Page::NodesOverview => "nodes-overview",
            Page::NodeDetail => "node-detail",
            Page::ActionPlan => "action-plan",
            Page::InfraStatus => "infra-status",
            Page::ImplementationStatus => "implementation-status",
            Page::CodeVerification => "code-verification",
            Page::Recommendations => "recommendations",
            Page::PerformanceImpact => "performance-impact",
            Page::TechnicalDeepDive => "technical-deep-dive",
            Page::NextSteps => "next-steps",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Page::Summary => "🚨 Executive Summary",
            Page::NodesOverview => "📊 Critical Nodes Overview",
            Page::NodeDetail => "🔍 Node-by-Node Analysis",
            Page::ActionPlan => "📈 Action Plan & Timeline",
            Page::InfraStatus => "📊 Current Infrastructure Status",
            Page::ImplementationStatus => "🔍 Implementation Status Analysis",
            Page::CodeVerification => "💻 Code Optimization Verification",
            Page::Recommendations => "🚀 Remaining Recommendations",
            Page::PerformanceImpact => "📈 Performance Impact Analysis",
            Page::TechnicalDeepDive => "🔧 Technical Deep Dive",
            Page::NextSteps => "📋 Action Plan & Next Steps",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| RenderError::UnknownPage(s.to_string()))
    }
}

/// Renders one page of a report. `node` is only read by the node-detail page;
/// `None` selects the first node.
pub fn render(report: Report, page: Page, node: Option<&str>) -> Result<PageView, RenderError> {
    if !report.has_page(page) {
        return Err(RenderError::PageNotInReport {
            report: report.id(),
            page: page.id(),
        });
    }

    let (heading, sections) = match report {
        Report::Comparison => comparison::render(page, node)?,
        Report::Status => status::render(page)?,
    };

    Ok(PageView {
        report: report.id().to_string(),
        page: page.id().to_string(),
        title: page.label().to_string(),
        heading,
        sections,
    })
}

/// Parses string identifiers at the boundary, then renders.
pub fn render_by_id(report: &str, page: &str, node: Option<&str>) -> Result<PageView, RenderError> {
    let report: Report = report.parse()?;
    let page: Page = page.parse()?;
    render(report, page, node)
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub pages: Vec<PageEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageEntry {
    pub id: &'static str,
    pub label: &'static str,
}

pub fn catalog() -> Vec<ReportEntry> {
    Report::ALL
        .into_iter()
        .map(|r| ReportEntry {
            id: r.id(),
            title: r.title(),
            pages: r
                .pages()
                .iter()
                .map(|p| PageEntry {
                    id: p.id(),
                    label: p.label(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::model::charts;
    use super::*;

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(
            render_by_id("weekly", "summary", None),
            Err(RenderError::UnknownReport("weekly".to_string()))
        );
        assert_eq!(
            render_by_id("comparison", "overview", None),
            Err(RenderError::UnknownPage("overview".to_string()))
        );
        assert!(matches!(
            render_by_id("comparison", "Summary", None),
            Err(RenderError::UnknownPage(_))
        ));
    }

    #[test]
    fn pages_are_scoped_to_their_report() {
        assert_eq!(
            render(Report::Comparison, Page::InfraStatus, None),
            Err(RenderError::PageNotInReport {
                report: "comparison",
                page: "infra-status",
            })
        );
        assert!(render(Report::Status, Page::NodeDetail, None).is_err());
    }

    #[test]
    fn every_declared_page_renders() {
        for report in Report::ALL {
            for &page in report.pages() {
                let view = render(report, page, None)
                    .unwrap_or_else(|e| panic!("{}/{}: {}", report, page, e));
                assert_eq!(view.report, report.id());
                assert_eq!(view.page, page.id());
                assert!(!view.sections.is_empty(), "{}/{}", report, page);
            }
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        for report in Report::ALL {
            for &page in report.pages() {
                let a = render(report, page, Some("vmss00007r")).unwrap();
                let b = render(report, page, Some("vmss00007r")).unwrap();
                assert_eq!(a, b);
                assert_eq!(
                    serde_json::to_string(&a).unwrap(),
                    serde_json::to_string(&b).unwrap()
                );
            }
        }
    }

    #[test]
    fn page_ids_round_trip_through_parse() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>(), Ok(page));
        }
        for report in Report::ALL {
            assert_eq!(report.id().parse::<Report>(), Ok(report));
        }
    }

    #[test]
    fn memory_threshold_lines_are_fixed() {
        let views = [
            render(Report::Comparison, Page::NodesOverview, None).unwrap(),
            render(Report::Status, Page::InfraStatus, None).unwrap(),
        ];
        for view in &views {
            let memory = charts(view)
                .into_iter()
                .find(|c| c.y_title.starts_with("Memory Usage"))
                .unwrap();
            let lines: Vec<f64> = memory.thresholds.iter().map(|t| t.value).collect();
            assert_eq!(lines, vec![80.0, 70.0], "{}", view.page);
        }
    }

    #[test]
    fn overcommit_limit_line_is_fixed() {
        let view = render(Report::Comparison, Page::NodesOverview, None).unwrap();
        let overcommit: Vec<_> = charts(&view)
            .into_iter()
            .filter(|c| c.y_title == "Overcommit (%)")
            .collect();
        assert_eq!(overcommit.len(), 2);
        for chart in overcommit {
            assert_eq!(chart.thresholds.len(), 1);
            assert_eq!(chart.thresholds[0].value, 100.0);
        }
    }

    #[test]
    fn catalog_lists_both_reports() {
        let cat = catalog();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat[0].pages.len(), 4);
        assert_eq!(cat[1].pages.len(), 8);
        assert_eq!(cat[1].pages[7].id, "next-steps");
    }
}
