use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid specification: {source}")]
    Spec {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {source}")]
    Config {
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration must be a JSON object at the top level")]
    ConfigNotAnObject,

    #[error("duplicate parameter name in specification: {name}")]
    DuplicateParameter { name: String },

    #[error("invalid pattern for parameter {name}: {message}")]
    InvalidPattern { name: String, message: String },
}

impl SpecError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecError>;
