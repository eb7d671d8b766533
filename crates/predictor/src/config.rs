//! Predictor configuration.
//!
//! A [`PredictorConfig`] is supplied once, before any branch is predicted.
//! It can be built in code, deserialized from TOML, or assembled from CLI
//! flags; [`PredictorConfig::validate`] must accept it before tables are
//! allocated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest supported table index width. A 24-bit index is already a
/// 16M-entry table.
pub const MAX_TABLE_BITS: u32 = 24;

/// Largest supported saturating counter width.
pub const MAX_COUNTER_BITS: u32 = 8;

/// Largest perceptron table, counted in weights (rows x (history + bias)).
/// 4M `i32` weights is 16 MiB.
pub const MAX_PERCEPTRON_WEIGHTS: u64 = 1 << 22;

/// The predictor algorithm to instantiate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictorKind {
    /// Always predicts taken.
    Static,
    #[default]
    Gshare,
    Tournament,
    /// Perceptron over the global history.
    #[serde(alias = "perceptron")]
    Custom,
}

impl PredictorKind {
    pub const ALL: [PredictorKind; 4] = [
        PredictorKind::Static,
        PredictorKind::Gshare,
        PredictorKind::Tournament,
        PredictorKind::Custom,
    ];

    /// Human-readable name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            PredictorKind::Static => "Static",
            PredictorKind::Gshare => "Gshare",
            PredictorKind::Tournament => "Tournament",
            PredictorKind::Custom => "Custom",
        }
    }
}

impl fmt::Display for PredictorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredictorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(PredictorKind::Static),
            "gshare" => Ok(PredictorKind::Gshare),
            "tournament" => Ok(PredictorKind::Tournament),
            "custom" | "perceptron" => Ok(PredictorKind::Custom),
            _ => Err(ConfigError::UnknownKind(s.to_string())),
        }
    }
}

/// How the perceptron predictor selects a weight row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerceptronIndex {
    /// `(pc ^ ghr) & mask(ghistory_bits)`
    #[default]
    Hashed,
    /// `pc & mask(pc_index_bits)`
    Pc,
}

impl FromStr for PerceptronIndex {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hashed" => Ok(PerceptronIndex::Hashed),
            "pc" => Ok(PerceptronIndex::Pc),
            _ => Err(ConfigError::UnknownIndexMode(s.to_string())),
        }
    }
}

/// Configuration for a [`Predictor`](crate::bp::Predictor).
///
/// Fields not used by the selected kind are ignored and not validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub kind: PredictorKind,
    /// Global history width; also the gshare table index width.
    pub ghistory_bits: u32,
    /// Local history width (tournament only).
    pub lhistory_bits: u32,
    /// PC index width of the meta and local history tables.
    pub pc_index_bits: u32,
    /// Width of every saturating counter.
    pub counter_bits: u32,
    pub perceptron_index: PerceptronIndex,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            kind: PredictorKind::Gshare,
            ghistory_bits: 13,
            lhistory_bits: 11,
            pc_index_bits: 10,
            counter_bits: 2,
            perceptron_index: PerceptronIndex::Hashed,
        }
    }
}

impl PredictorConfig {
    /// Default widths with the given predictor kind.
    pub fn new(kind: PredictorKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Parses a TOML document and validates the result.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: PredictorConfig =
            toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every width the selected kind depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kind {
            PredictorKind::Static => Ok(()),
            PredictorKind::Gshare => {
                check_table_bits("ghistory_bits", self.ghistory_bits)?;
                check_counter_bits(self.counter_bits)
            }
            PredictorKind::Tournament => {
                check_table_bits("ghistory_bits", self.ghistory_bits)?;
                check_table_bits("lhistory_bits", self.lhistory_bits)?;
                check_table_bits("pc_index_bits", self.pc_index_bits)?;
                check_counter_bits(self.counter_bits)
            }
            PredictorKind::Custom => {
                check_table_bits("ghistory_bits", self.ghistory_bits)?;
                if self.perceptron_index == PerceptronIndex::Pc {
                    check_table_bits("pc_index_bits", self.pc_index_bits)?;
                }
                let weights = self.perceptron_weights();
                if weights > MAX_PERCEPTRON_WEIGHTS {
                    return Err(ConfigError::TableTooLarge {
                        weights,
                        max: MAX_PERCEPTRON_WEIGHTS,
                    });
                }
                Ok(())
            }
        }
    }

    /// Number of weights a perceptron predictor built from this config holds.
    pub fn perceptron_weights(&self) -> u64 {
        let table_bits = match self.perceptron_index {
            PerceptronIndex::Hashed => self.ghistory_bits,
            PerceptronIndex::Pc => self.pc_index_bits,
        };
        (1u64 << table_bits) * (self.ghistory_bits as u64 + 1)
    }

    /// One-line summary of the widths relevant to the selected kind.
    pub fn describe(&self) -> String {
        match self.kind {
            PredictorKind::Static => self.kind.to_string(),
            PredictorKind::Gshare => format!("{}:{}", self.kind, self.ghistory_bits),
            PredictorKind::Tournament => format!(
                "{}:{}:{}:{}",
                self.kind, self.ghistory_bits, self.lhistory_bits, self.pc_index_bits
            ),
            PredictorKind::Custom => match self.perceptron_index {
                PerceptronIndex::Hashed => format!("{}:{}", self.kind, self.ghistory_bits),
                PerceptronIndex::Pc => format!(
                    "{}:{}:pc{}",
                    self.kind, self.ghistory_bits, self.pc_index_bits
                ),
            },
        }
    }
}

fn check_table_bits(field: &'static str, bits: u32) -> Result<(), ConfigError> {
    if bits == 0 {
        return Err(ConfigError::ZeroWidth(field));
    }
    if bits > MAX_TABLE_BITS {
        return Err(ConfigError::WidthTooLarge {
            field,
            bits,
            max: MAX_TABLE_BITS,
        });
    }
    Ok(())
}

fn check_counter_bits(bits: u32) -> Result<(), ConfigError> {
    if bits == 0 {
        return Err(ConfigError::ZeroWidth("counter_bits"));
    }
    if bits > MAX_COUNTER_BITS {
        return Err(ConfigError::WidthTooLarge {
            field: "counter_bits",
            bits,
            max: MAX_COUNTER_BITS,
        });
    }
    Ok(())
}
