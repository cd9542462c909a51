use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;

use mapcfg_model::{ParamSet, UserParams};

use crate::error::{Result, SpecError};

/// The embedded default map-UI specification.
const DEFAULT_SPEC_YAML: &str = include_str!("../spec/map-ui.yaml");

/// Parse a YAML parameter specification.
///
/// Beyond YAML well-formedness this vets what the validation core assumes:
/// parameter names are unique and every declared pattern compiles. Authoring
/// errors fail here, before the core ever runs.
pub fn parse_spec(text: &str) -> Result<ParamSet> {
    let spec: ParamSet =
        serde_yaml::from_str(text).map_err(|source| SpecError::Spec { source })?;
    verify_spec(&spec)?;
    Ok(spec)
}

/// Read and parse a YAML parameter specification file.
pub fn load_spec(path: &Path) -> Result<ParamSet> {
    let text = std::fs::read_to_string(path).map_err(|source| SpecError::io(path, source))?;
    parse_spec(&text)
}

/// Parse a JSON user configuration. The top level must be an object.
pub fn parse_user_params(text: &str) -> Result<UserParams> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| SpecError::Config { source })?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(SpecError::ConfigNotAnObject),
    }
}

/// Read and parse a JSON user configuration file.
pub fn load_user_params(path: &Path) -> Result<UserParams> {
    let text = std::fs::read_to_string(path).map_err(|source| SpecError::io(path, source))?;
    parse_user_params(&text)
}

/// The default map-UI specification shipped with the crate.
pub fn default_spec() -> ParamSet {
    parse_spec(DEFAULT_SPEC_YAML).expect("embedded map-ui specification is valid")
}

fn verify_spec(spec: &ParamSet) -> Result<()> {
    let mut seen = BTreeSet::new();
    for param in &spec.parameters {
        if !seen.insert(param.name.as_str()) {
            return Err(SpecError::DuplicateParameter {
                name: param.name.clone(),
            });
        }
        if let Some(pattern) = param.pattern.as_deref()
            && let Err(error) = Regex::new(pattern)
        {
            return Err(SpecError::InvalidPattern {
                name: param.name.clone(),
                message: error.to_string(),
            });
        }
    }
    Ok(())
}
