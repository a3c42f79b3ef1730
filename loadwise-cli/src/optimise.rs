//! Optimise command implementation for the Loadwise CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use loadwise_core::{LoadOptimizer, LoadPlan, LoadPlanner, LoadRequest, PlanError};
use loadwise_solver_dp::BitmaskOptimizer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::fs::{create_utf8_file, file_is_file, open_utf8_file};
use crate::{ARG_OUTPUT, ARG_REQUEST, CliError, ENV_REQUEST};

/// CLI arguments for the `optimise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a single truck load. The request is a JSON-encoded \
                 LoadRequest holding the truck and its candidate orders. \
                 The chosen plan is printed as JSON, or written to the \
                 file named by --output.",
    about = "Choose the best-paying feasible load for a truck"
)]
#[ortho_config(prefix = "LOADWISE")]
pub(crate) struct OptimiseArgs {
    /// Path to a JSON file containing a LoadRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Write the plan to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output_path: Option<Utf8PathBuf>,
}

impl OptimiseArgs {
    pub(crate) fn into_config(self) -> Result<OptimiseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimiseConfig::try_from(merged)
    }
}

/// Resolved `optimise` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptimiseConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Destination file for the plan; standard output when absent.
    pub(crate) output_path: Option<Utf8PathBuf>,
}

impl OptimiseConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_REQUEST,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_REQUEST,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_REQUEST,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<OptimiseArgs> for OptimiseConfig {
    type Error = CliError;

    fn try_from(args: OptimiseArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        Ok(Self {
            request_path,
            output_path: args.output_path,
        })
    }
}

pub(crate) fn run_optimise(args: OptimiseArgs) -> Result<(), CliError> {
    let optimizer = BitmaskOptimizer::new();
    let config = resolve_optimise_config(args)?;
    let plan = execute_optimise(&config, &optimizer)?;
    match &config.output_path {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(CliError::WriteOutput)?;
            write_load_plan(&mut file, &plan)
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_load_plan(&mut stdout, &plan)
        }
    }
}

/// Resolve `args`, plan the request with `optimizer` and write the plan to
/// `writer`. `--output` is ignored here; callers choose the destination.
pub(crate) fn run_optimise_with(
    args: OptimiseArgs,
    optimizer: &dyn LoadOptimizer,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_optimise_config(args)?;
    let plan = execute_optimise(&config, optimizer)?;
    write_load_plan(writer, &plan)
}

fn resolve_optimise_config(args: OptimiseArgs) -> Result<OptimiseConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_optimise(
    config: &OptimiseConfig,
    optimizer: &dyn LoadOptimizer,
) -> Result<LoadPlan, CliError> {
    let request = load_load_request(&config.request_path)?;
    log::debug!(
        "planning truck {} with {} candidate orders from {}",
        request.truck.id,
        request.orders.len(),
        config.request_path
    );
    LoadPlanner::new(optimizer)
        .plan(&request)
        .map_err(|err| match err {
            PlanError::InvalidRequest(source) => CliError::InvalidLoadRequest {
                path: config.request_path.clone(),
                source,
            },
        })
}

/// Loads a JSON-encoded [`LoadRequest`] from disk.
pub(crate) fn load_load_request(path: &Utf8Path) -> Result<LoadRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenLoadRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseLoadRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_load_plan(writer: &mut dyn Write, plan: &LoadPlan) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(plan).map_err(CliError::SerialiseLoadPlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimiseConfig, CliError> {
    let merged = OptimiseArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimiseConfig::try_from(merged)
}
