use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use pharmscan::engine::config::AnalysisConfigBuilder;
use std::path::Path;
use tracing::debug;

/// Resolves the analysis settings. Precedence: command-line flag, then `--set`,
/// then the config file, then built-in defaults.
pub fn build_config(args: &AnalyzeArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    ensure_input_exists(&args.receptor, "receptor")?;
    ensure_input_exists(&args.ligand, "ligand")?;

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let file_config = apply_set_values(file_config, &args.set_values)?;
    let pharmacophore_file = file_config.pharmacophore.unwrap_or_default();

    let pharmacophore_size = args
        .size
        .or(pharmacophore_file.size)
        .unwrap_or(defaults.pharmacophore_size);
    let top_n = args
        .top_n
        .or(pharmacophore_file.top_n)
        .unwrap_or(defaults.top_n);
    debug!(pharmacophore_size, top_n, "Resolved analysis settings.");

    let core_config = AnalysisConfigBuilder::new()
        .pharmacophore_size(pharmacophore_size)
        .top_n(top_n)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        receptor_path: args.receptor.clone(),
        ligand_path: args.ligand.clone(),
        report_path: args.output.clone(),
        core_config,
    })
}

fn ensure_input_exists(path: &Path, role: &str) -> Result<()> {
    if !path.is_file() {
        return Err(CliError::Argument(format!(
            "The {} file does not exist: {}",
            role,
            path.display()
        )));
    }
    Ok(())
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        let value_str = value_str.trim();
        let parse_count = || -> Result<usize> {
            value_str.parse().map_err(|_| {
                CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
            })
        };

        match key {
            "pharmacophore.size" => {
                config
                    .pharmacophore
                    .get_or_insert_with(Default::default)
                    .size = Some(parse_count()?);
            }
            "pharmacophore.top-n" => {
                config
                    .pharmacophore
                    .get_or_insert_with(Default::default)
                    .top_n = Some(parse_count()?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
