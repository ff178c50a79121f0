//! Configuration for missingness analysis.
//!
//! Use [`MissingnessConfig::builder()`] for a validated configuration, or
//! [`MissingnessConfig::default()`] for the stock labels.

use serde::{Deserialize, Serialize};

/// What to do when a percentage would be computed over a zero denominator
/// (a table without rows or without columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EmptyInputPolicy {
    /// Report the percentage as 0.0
    #[default]
    Zero,
    /// Fail with [`crate::MissingnessError::EmptyInput`]
    Error,
}

/// Configuration for [`crate::Missingness`].
///
/// # Example
///
/// ```rust,ignore
/// use missingness::config::{MissingnessConfig, EmptyInputPolicy};
///
/// let config = MissingnessConfig::builder()
///     .true_string("NA")
///     .false_string("!NA")
///     .empty_input(EmptyInputPolicy::Error)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingnessConfig {
    /// Label written into the shadow matrix for missing cells.
    /// Default: "missing"
    pub true_string: String,

    /// Label written into the shadow matrix for present cells.
    /// Default: "not_missing"
    pub false_string: String,

    /// Suffix appended to column names in the shadow matrix.
    /// Default: "_na"
    pub shadow_suffix: String,

    /// Restrict the shadow matrix to columns with at least one missing value.
    /// Default: false
    pub only_missing: bool,

    /// Treat NaN in floating point columns as missing, not only nulls.
    /// Default: true
    pub nan_as_missing: bool,

    /// Policy for percentages over empty tables.
    /// Default: Zero
    pub empty_input: EmptyInputPolicy,
}

impl Default for MissingnessConfig {
    fn default() -> Self {
        Self {
            true_string: "missing".to_string(),
            false_string: "not_missing".to_string(),
            shadow_suffix: "_na".to_string(),
            only_missing: false,
            nan_as_missing: true,
            empty_input: EmptyInputPolicy::default(),
        }
    }
}

impl MissingnessConfig {
    /// Create a new configuration builder.
    pub fn builder() -> MissingnessConfigBuilder {
        MissingnessConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.true_string.is_empty() {
            return Err(ConfigValidationError::EmptyLabel("true_string".to_string()));
        }

        if self.false_string.is_empty() {
            return Err(ConfigValidationError::EmptyLabel("false_string".to_string()));
        }

        if self.true_string == self.false_string {
            return Err(ConfigValidationError::IndistinctLabels(
                self.true_string.clone(),
            ));
        }

        if self.shadow_suffix.is_empty() {
            return Err(ConfigValidationError::EmptySuffix);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Label '{0}' must not be empty")]
    EmptyLabel(String),

    #[error("Missing and present labels must differ (both are '{0}')")]
    IndistinctLabels(String),

    #[error("Shadow column suffix must not be empty")]
    EmptySuffix,
}

impl From<ConfigValidationError> for crate::MissingnessError {
    fn from(err: ConfigValidationError) -> Self {
        crate::MissingnessError::InvalidConfig(err.to_string())
    }
}

/// Builder for [`MissingnessConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct MissingnessConfigBuilder {
    true_string: Option<String>,
    false_string: Option<String>,
    shadow_suffix: Option<String>,
    only_missing: Option<bool>,
    nan_as_missing: Option<bool>,
    empty_input: Option<EmptyInputPolicy>,
}

impl MissingnessConfigBuilder {
    /// Set the shadow label for missing cells.
    pub fn true_string(mut self, label: impl Into<String>) -> Self {
        self.true_string = Some(label.into());
        self
    }

    /// Set the shadow label for present cells.
    pub fn false_string(mut self, label: impl Into<String>) -> Self {
        self.false_string = Some(label.into());
        self
    }

    /// Set the suffix used for shadow column names.
    pub fn shadow_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.shadow_suffix = Some(suffix.into());
        self
    }

    /// Only shadow columns that contain missing values.
    pub fn only_missing(mut self, only_missing: bool) -> Self {
        self.only_missing = Some(only_missing);
        self
    }

    /// Count NaN as missing in float columns.
    pub fn nan_as_missing(mut self, nan_as_missing: bool) -> Self {
        self.nan_as_missing = Some(nan_as_missing);
        self
    }

    /// Set the zero-denominator policy.
    pub fn empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = Some(policy);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `MissingnessConfig` or an error if validation fails.
    pub fn build(self) -> Result<MissingnessConfig, ConfigValidationError> {
        let defaults = MissingnessConfig::default();
        let config = MissingnessConfig {
            true_string: self.true_string.unwrap_or(defaults.true_string),
            false_string: self.false_string.unwrap_or(defaults.false_string),
            shadow_suffix: self.shadow_suffix.unwrap_or(defaults.shadow_suffix),
            only_missing: self.only_missing.unwrap_or(defaults.only_missing),
            nan_as_missing: self.nan_as_missing.unwrap_or(defaults.nan_as_missing),
            empty_input: self.empty_input.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
