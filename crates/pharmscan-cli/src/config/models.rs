use pharmscan::engine::config::AnalysisConfig;
use std::path::PathBuf;

/// Fully resolved settings for one `analyze` run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub receptor_path: PathBuf,
    pub ligand_path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub core_config: AnalysisConfig,
}
