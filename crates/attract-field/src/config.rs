//! Potential field configuration, validation, and error types.

use std::error::Error;
use std::fmt;

/// Default decay factor: each hop halves the potential.
pub const DEFAULT_FALLOFF: f64 = 0.5;

// ── UpdateStrategy ─────────────────────────────────────────────────

/// How a [`PotentialField`](crate::PotentialField) applies a new source set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// Diff against the current sources and repair only what changed.
    /// Falls back to a full recompute when the terrain revision moved.
    #[default]
    Incremental,
    /// Replace the source set and recompute the whole field every update.
    Recompute,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`FieldConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Falloff is not a finite value strictly between 0 and 1.
    InvalidFalloff {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFalloff { value } => {
                write!(f, "falloff must be in (0, 1), got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── FieldConfig ────────────────────────────────────────────────────

/// Configuration of one potential field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Per-hop decay factor in `(0, 1)`. Default: [`DEFAULT_FALLOFF`].
    pub falloff: f64,
    /// How source changes are applied. Default: incremental.
    pub strategy: UpdateStrategy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            falloff: DEFAULT_FALLOFF,
            strategy: UpdateStrategy::default(),
        }
    }
}

impl FieldConfig {
    /// Set the falloff.
    pub fn with_falloff(mut self, falloff: f64) -> Self {
        self.falloff = falloff;
        self
    }

    /// Set the update strategy.
    pub fn with_strategy(mut self, strategy: UpdateStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.falloff.is_finite() || self.falloff <= 0.0 || self.falloff >= 1.0 {
            return Err(ConfigError::InvalidFalloff {
                value: self.falloff,
            });
        }
        Ok(())
    }
}
