// src/models.rs
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Strength buckets, assigned from the composite score via fixed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    // Bucket thresholds: [0,20) [20,40) [40,60) [60,80) [80,100]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => Strength::VeryWeak,
            20..=39 => Strength::Weak,
            40..=59 => Strength::Medium,
            60..=79 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Result of analyzing a single password; immutable once produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordAnalysis {
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
    pub charset_size: u32,
    pub entropy: f64,
    pub repeated_chars: usize,
    pub sequences: Vec<String>,
    pub dictionary_words: Vec<String>,
    pub strength_score: u8,
    pub strength: Strength,
}

#[derive(Debug, Error)]
#[error("unknown attack model '{0}', expected one of: online, offline, gpu")]
pub struct ParseAttackModelError(pub String);

// Attacker assumptions, each mapping to a constant guesses-per-second rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AttackModel {
    /// Throttled online login attempts
    Online,
    /// Offline attack against a stolen hash
    Offline,
    /// Offline attack with GPU acceleration
    #[value(name = "gpu")]
    GpuAssisted,
}

impl AttackModel {
    pub const ALL: [AttackModel; 3] = [
        AttackModel::Online,
        AttackModel::Offline,
        AttackModel::GpuAssisted,
    ];

    pub fn guesses_per_second(&self) -> f64 {
        match self {
            AttackModel::Online => 1e3,
            AttackModel::Offline => 1e9,
            AttackModel::GpuAssisted => 1e11,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttackModel::Online => "Online (throttled)",
            AttackModel::Offline => "Offline (fast hash)",
            AttackModel::GpuAssisted => "GPU-assisted",
        }
    }
}

impl fmt::Display for AttackModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AttackModel {
    type Err = ParseAttackModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(AttackModel::Online),
            "offline" => Ok(AttackModel::Offline),
            "gpu" | "gpu_assisted" | "gpu-assisted" => Ok(AttackModel::GpuAssisted),
            other => Err(ParseAttackModelError(other.to_string())),
        }
    }
}

// Derived from entropy + attack model, recomputed on every change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrackTimeEstimate {
    pub seconds: f64,
    pub display: String,
}

// One point of the (length, entropy) chart history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    pub length: usize,
    pub entropy: f64,
}

// Everything a consumer needs to render one analysis pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    pub analysis: PasswordAnalysis,
    pub attack_model: AttackModel,
    pub crack_time: CrackTimeEstimate,
    pub suggestions: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
