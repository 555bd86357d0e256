use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unknown report {0:?} (expected one of: comparison, status)")]
    UnknownReport(String),
    #[error("unknown page {0:?}")]
    UnknownPage(String),
    #[error("page {page:?} is not part of the {report} report")]
    PageNotInReport { report: &'static str, page: &'static str },
    #[error("unknown node {0:?} (expected one of: {1})")]
    UnknownNode(String, String),
}
