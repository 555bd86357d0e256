use serde::Deserialize;
use std::path::Path;

use crate::report::Report;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_cluster_name")]
    pub cluster_name: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(default = "default_report")]
    pub default_report: Report,
}

fn default_cluster_name() -> String {
    "Production Kubernetes Cluster".to_string()
}

fn default_listen_port() -> u16 {
    8501
}

fn default_report() -> Report {
    Report::Comparison
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster_name: default_cluster_name(),
            listen_port: default_listen_port(),
            default_report: default_report(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("reading config {}: {}", path.display(), e))?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let cfg: Config =
            serde_yaml::from_str(data).map_err(|e| format!("parsing config: {}", e))?;

        if cfg.listen_port == 0 {
            return Err("listen_port must be non-zero".into());
        }

        Ok(cfg)
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.listen_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = Config::parse("{}").unwrap();
        assert_eq!(cfg.listen_port, 8501);
        assert_eq!(cfg.default_report, Report::Comparison);
        assert_eq!(cfg.listen_addr(), "0.0.0.0:8501");
    }

    #[test]
    fn parses_all_keys() {
        let cfg = Config::parse(
            "cluster_name: staging\nlisten_port: 9090\ndefault_report: status\n",
        )
        .unwrap();
        assert_eq!(cfg.cluster_name, "staging");
        assert_eq!(cfg.listen_port, 9090);
        assert_eq!(cfg.default_report, Report::Status);
    }

    #[test]
    fn rejects_unknown_report_and_zero_port() {
        assert!(Config::parse("default_report: weekly\n").is_err());
        assert!(Config::parse("listen_port: 0\n").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load(Path::new("/nonexistent/opt-report.yaml")).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
