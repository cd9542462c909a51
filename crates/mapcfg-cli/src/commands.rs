use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use mapcfg_model::{ParamSet, ValidationReport};
use mapcfg_spec::{default_spec, example_config, load_spec, load_user_params};
use mapcfg_validate::validate;

use crate::cli::{ParametersArgs, ValidateArgs};
use crate::report_file::write_report_json;
use crate::summary::{print_parameters, print_report};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let spec = load_spec_or_default(args.spec.as_deref())?;
    let params = load_user_params(&args.config)
        .with_context(|| format!("load configuration {}", args.config.display()))?;
    info!(
        config = %args.config.display(),
        parameter_count = params.len(),
        declared_count = spec.parameters.len(),
        "validating configuration"
    );

    let report = validate(&params, &spec);
    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        suggestions = report.suggestion_count(),
        "validation complete"
    );

    print_report(&params, &report);
    if let Some(path) = &args.report_file {
        let written = write_report_json(path, &report)
            .with_context(|| format!("write report {}", path.display()))?;
        println!("Report: {}", written.display());
    }
    Ok(report)
}

pub fn run_parameters(args: &ParametersArgs) -> Result<()> {
    let spec = load_spec_or_default(args.spec.as_deref())?;
    print_parameters(&spec);
    Ok(())
}

pub fn run_example() -> Result<()> {
    let example = example_config();
    let rendered = serde_json::to_string_pretty(&example).context("render example")?;
    println!("{rendered}");
    println!();
    println!("Save this to a file and validate it with:");
    println!("  mapcfg validate config.json");
    Ok(())
}

fn load_spec_or_default(path: Option<&Path>) -> Result<ParamSet> {
    match path {
        Some(path) => {
            load_spec(path).with_context(|| format!("load specification {}", path.display()))
        }
        None => Ok(default_spec()),
    }
}
