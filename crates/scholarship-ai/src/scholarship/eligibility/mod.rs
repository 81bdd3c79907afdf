//! Deterministic provider eligibility rules layered next to the classifier output.

mod format;
mod programs;
mod rules;

pub use programs::{ProgramRule, Provider};
pub use rules::Criterion;

use super::domain::StudentProfile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display label derived from eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Low,
}

impl Confidence {
    pub const fn from_eligibility(eligible: bool) -> Self {
        if eligible {
            Self::High
        } else {
            Self::Low
        }
    }
}

/// Per-program evaluation result with the reasons behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub provider: Provider,
    pub name: String,
    pub description: String,
    pub eligible: bool,
    pub confidence: Confidence,
    pub reasons: Vec<String>,
}

/// Rejected custom program tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProgramTableError {
    #[error("more than one program configured for {}", .0.id())]
    DuplicateProvider(Provider),
    #[error("no program configured for {}", .0.id())]
    MissingProvider(Provider),
}

/// Stateless evaluator holding the program table.
#[derive(Debug, Clone)]
pub struct EligibilityRuleEngine {
    programs: Vec<ProgramRule>,
}

impl Default for EligibilityRuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl EligibilityRuleEngine {
    pub fn standard() -> Self {
        Self {
            programs: ProgramRule::standard(),
        }
    }

    /// Custom rule table; exactly one program per provider, kept in provider order.
    pub fn with_programs(mut programs: Vec<ProgramRule>) -> Result<Self, ProgramTableError> {
        programs.sort_by_key(|program| program.provider);

        for pair in programs.windows(2) {
            if pair[0].provider == pair[1].provider {
                return Err(ProgramTableError::DuplicateProvider(pair[0].provider));
            }
        }
        if let Some(missing) = Provider::ordered()
            .into_iter()
            .find(|provider| !programs.iter().any(|program| program.provider == *provider))
        {
            return Err(ProgramTableError::MissingProvider(missing));
        }

        Ok(Self { programs })
    }

    pub fn programs(&self) -> &[ProgramRule] {
        &self.programs
    }

    /// One recommendation per program, in provider order. Never fails.
    pub fn evaluate(&self, profile: &StudentProfile) -> Vec<Recommendation> {
        let recommendations: Vec<Recommendation> = self
            .programs
            .iter()
            .map(|program| program.assess(profile))
            .collect();

        debug!(
            eligible = recommendations.iter().filter(|rec| rec.eligible).count(),
            programs = recommendations.len(),
            "evaluated scholarship programs"
        );

        recommendations
    }
}
