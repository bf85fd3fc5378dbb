use thiserror::Error;

pub const DEFAULT_PHARMACOPHORE_SIZE: usize = 3;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value '{value}' for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Number of interactions (and distinct residues) per pharmacophore, `k`.
    pub pharmacophore_size: usize,
    /// Number of ranked pharmacophores to return.
    pub top_n: usize,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    pharmacophore_size: Option<usize>,
    top_n: Option<usize>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pharmacophore_size(mut self, k: usize) -> Self {
        self.pharmacophore_size = Some(k);
        self
    }
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let pharmacophore_size = validate_pharmacophore_size(
            self.pharmacophore_size
                .unwrap_or(DEFAULT_PHARMACOPHORE_SIZE),
        )?;
        let top_n = validate_top_n(self.top_n.ok_or(ConfigError::MissingParameter("top_n"))?)?;
        Ok(AnalysisConfig {
            pharmacophore_size,
            top_n,
        })
    }
}

pub fn validate_pharmacophore_size(k: usize) -> Result<usize, ConfigError> {
    positive("pharmacophore_size", k)
}

pub fn validate_top_n(n: usize) -> Result<usize, ConfigError> {
    positive("top_n", n)
}

fn positive(parameter: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            parameter,
            value: value.to_string(),
            reason: "must be a positive integer",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_uses_default_size_when_unset() {
        let config = AnalysisConfigBuilder::new().top_n(10).build().unwrap();
        assert_eq!(config.pharmacophore_size, DEFAULT_PHARMACOPHORE_SIZE);
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn build_accepts_explicit_values() {
        let config = AnalysisConfigBuilder::new()
            .pharmacophore_size(4)
            .top_n(2)
            .build()
            .unwrap();
        assert_eq!(
            config,
            AnalysisConfig {
                pharmacophore_size: 4,
                top_n: 2
            }
        );
    }

    #[test]
    fn build_requires_top_n() {
        let err = AnalysisConfigBuilder::new()
            .pharmacophore_size(3)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("top_n"));
    }

    #[test]
    fn build_rejects_zero_size() {
        let err = AnalysisConfigBuilder::new()
            .pharmacophore_size(0)
            .top_n(5)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                parameter: "pharmacophore_size",
                ..
            }
        ));
    }

    #[test]
    fn build_rejects_zero_top_n() {
        let err = AnalysisConfigBuilder::new().top_n(0).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                parameter: "top_n",
                ..
            }
        ));
    }
}
