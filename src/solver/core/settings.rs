use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings shared by every spanning tree solver.
///
/// Construct with [`SolverSettingsBuilder`], which validates fields on
/// `build()`, or take [`SolverSettings::default()`].

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverSettings {
    ///verbose printing during solve
    #[builder(default = "true")]
    pub verbose: bool,

    ///prefix written before station ids in reports (e.g. "S3-S7")
    #[builder(default = r#""S".to_string()"#)]
    pub station_prefix: String,
}

impl Default for SolverSettings {
    fn default() -> SolverSettings {
        SolverSettings {
            verbose: true,
            station_prefix: "S".to_string(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

impl SolverSettings {
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_station_prefix(&self.station_prefix)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SolverSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SolverSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl SolverSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref station_prefix) = self.station_prefix {
            validate_station_prefix(station_prefix)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

// a prefix ending in a digit would run into the station id
fn validate_station_prefix(prefix: &str) -> Result<(), SettingsError> {
    if prefix.is_empty() || prefix.chars().any(|c| c.is_ascii_digit()) {
        Err(SettingsError::BadFieldValue("station_prefix"))
    } else {
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = SolverSettingsBuilder::default().build().unwrap();
    assert_eq!(settings, SolverSettings::default());

    assert!(SolverSettingsBuilder::default()
        .station_prefix("E".to_string())
        .verbose(false)
        .build()
        .is_ok());

    // fail on empty or numeric prefixes
    assert!(SolverSettingsBuilder::default()
        .station_prefix(String::new())
        .build()
        .is_err());
    assert!(SolverSettingsBuilder::default()
        .station_prefix("S1".to_string())
        .build()
        .is_err());

    // directly construct a bad SolverSettings and manually check
    let settings = SolverSettings {
        station_prefix: "7".to_string(),
        ..SolverSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("station_prefix"))
    );
}
