use thiserror::Error;

/// Fatal: the course dataset could not be loaded, nothing else can run.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("course dataset '{0}' does not exist")]
    Missing(String),
    #[error("course dataset '{path}' is not readable: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("course dataset is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("course dataset must be a json array of courses")]
    NotAnArray,
    #[error("course #{index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("course #{index} is malformed: {reason}")]
    Malformed { index: usize, reason: String },
    #[error("course '{name}' is invalid: {reason}")]
    Invalid { name: String, reason: String },
}

/// Feature-disabling: only the dependent feature goes dark.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no places api key configured (set GOOGLE_PLACES_API_KEY)")]
    MissingApiKey,
    #[error("places http client could not be built: {0}")]
    HttpClient(String),
}

/// Soft: any external lookup failure. Always absorbed at the resolver boundary.
#[derive(Error, Debug, Clone)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("provider returned status {0}")]
    Status(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
