use crate::cli::AnalyzeArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crate::utils::summary;
use pharmscan::{
    core::io::{
        pdbqt::{PoseFile, ReceptorFile},
        report::write_csv_to_path,
        traits::StructureFile,
    },
    engine::progress::ProgressReporter,
    workflows,
};
use tracing::info;

pub fn run(args: AnalyzeArgs, quiet: bool) -> Result<()> {
    info!("Resolving configuration...");
    let app_config = build_config(&args)?;

    info!("Loading receptor from {:?}", &app_config.receptor_path);
    let receptor = ReceptorFile::read_from_path(&app_config.receptor_path).map_err(|e| {
        CliError::FileParsing {
            path: app_config.receptor_path.clone(),
            source: e.into(),
        }
    })?;

    info!("Loading ligand poses from {:?}", &app_config.ligand_path);
    let poses = PoseFile::read_from_path(&app_config.ligand_path).map_err(|e| {
        CliError::FileParsing {
            path: app_config.ligand_path.clone(),
            source: e.into(),
        }
    })?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core analysis workflow...");
    let result = workflows::analyze::run(&receptor, &poses, &app_config.core_config, &reporter)?;

    print!("{}", summary::render(&result));

    if let Some(report_path) = &app_config.report_path {
        write_csv_to_path(&result.pharmacophores, report_path)?;
        info!("Report written to {:?}", report_path);
        println!("\nReport written to: {}", report_path.display());
    }

    Ok(())
}
