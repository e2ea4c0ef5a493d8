use thiserror::Error;

/// Boxed error returned by the injected collaborators (light pollution, cloud cover, ...).
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum SkycastError {
    #[error("Invalid value for {field}: {value} (expected {expected})")]
    Validation {
        field: &'static str,
        value: f64,
        expected: String,
    },

    #[error("Invalid event window: {0}")]
    InvalidEventWindow(String),

    #[error("{collaborator} provider unavailable: {source}")]
    CollaboratorUnavailable {
        collaborator: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("Historical series is empty, nothing to extrapolate from")]
    EmptyHistory,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown solar flare class: {0}")]
    UnknownFlareClass(String),

    #[error("Unknown geomagnetic storm scale: {0}")]
    UnknownStormScale(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unable to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Date outside the ephemeris validity interval: {0}")]
    OutsideEphemeris(String),

    #[error("Unknown planet: {0}")]
    UnknownPlanet(String),

    #[error("Kepler equation solver failed: {0}")]
    KeplerSolverFailed(#[from] roots::SearchError),
}

impl SkycastError {
    /// Build a [`SkycastError::Validation`] for a value outside a closed range.
    pub(crate) fn out_of_range(field: &'static str, value: f64, range: (f64, f64)) -> Self {
        SkycastError::Validation {
            field,
            value,
            expected: format!("a finite value in [{}, {}]", range.0, range.1),
        }
    }
}

impl PartialEq for SkycastError {
    fn eq(&self, other: &Self) -> bool {
        use SkycastError::*;
        match (self, other) {
            (
                Validation {
                    field: f1,
                    value: v1,
                    expected: e1,
                },
                Validation {
                    field: f2,
                    value: v2,
                    expected: e2,
                },
            ) => f1 == f2 && (v1 == v2 || (v1.is_nan() && v2.is_nan())) && e1 == e2,
            (InvalidEventWindow(a), InvalidEventWindow(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (UnknownFlareClass(a), UnknownFlareClass(b)) => a == b,
            (UnknownStormScale(a), UnknownStormScale(b)) => a == b,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,
            (OutsideEphemeris(a), OutsideEphemeris(b)) => a == b,
            (UnknownPlanet(a), UnknownPlanet(b)) => a == b,
            (KeplerSolverFailed(a), KeplerSolverFailed(b)) => a == b,

            // payloads are not comparable: same variant is enough
            (
                CollaboratorUnavailable {
                    collaborator: c1, ..
                },
                CollaboratorUnavailable {
                    collaborator: c2, ..
                },
            ) => c1 == c2,
            (ConfigParse(_), ConfigParse(_)) => true,
            (IoError(_), IoError(_)) => true,

            (EmptyHistory, EmptyHistory) => true,

            _ => false,
        }
    }
}
