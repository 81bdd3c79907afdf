use super::format;
use crate::scholarship::domain::{ProfileField, StudentProfile};
use serde::{Deserialize, Serialize};

/// A single threshold test, or a disjunction reported as one reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Criterion {
    AtLeast { field: ProfileField, threshold: f64 },
    AtMost { field: ProfileField, threshold: f64 },
    AnyOf { options: Vec<Criterion> },
}

/// Result of checking one criterion against a profile.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CriterionCheck {
    pub met: bool,
    pub reason: String,
}

impl Criterion {
    pub const fn at_least(field: ProfileField, threshold: f64) -> Self {
        Self::AtLeast { field, threshold }
    }

    pub const fn at_most(field: ProfileField, threshold: f64) -> Self {
        Self::AtMost { field, threshold }
    }

    pub fn any_of(options: Vec<Criterion>) -> Self {
        Self::AnyOf { options }
    }

    pub fn is_met(&self, profile: &StudentProfile) -> bool {
        match self {
            Self::AtLeast { field, threshold } => profile.value_of(*field) >= *threshold,
            Self::AtMost { field, threshold } => profile.value_of(*field) <= *threshold,
            Self::AnyOf { options } => options.iter().any(|option| option.is_met(profile)),
        }
    }

    pub(crate) fn check(&self, profile: &StudentProfile) -> CriterionCheck {
        let met = self.is_met(profile);
        let reason = match self {
            Self::AtLeast { field, threshold } => {
                let value = format::observed(*field, profile.value_of(*field), *threshold);
                let threshold = format::threshold(*field, *threshold);
                if met {
                    format!("{} {value} meets requirement (≥{threshold})", field.label())
                } else {
                    format!("{} {value} below requirement (need ≥{threshold})", field.label())
                }
            }
            Self::AtMost { field, threshold } => {
                let value = format::observed(*field, profile.value_of(*field), *threshold);
                let threshold = format::threshold(*field, *threshold);
                if met {
                    format!("{} {value} within limit (≤{threshold})", field.label())
                } else {
                    format!("{} {value} exceeds limit (need ≤{threshold})", field.label())
                }
            }
            Self::AnyOf { options } => {
                let clauses = options
                    .iter()
                    .map(Criterion::clause)
                    .collect::<Vec<_>>()
                    .join(" or ");
                let mut observed = Vec::new();
                for option in options {
                    option.collect_observed(profile, &mut observed);
                }
                let observed = observed.join(", ");
                if met {
                    format!("Meets either {clauses} ({observed})")
                } else {
                    format!("Need either {clauses} ({observed})")
                }
            }
        };

        CriterionCheck { met, reason }
    }

    fn clause(&self) -> String {
        match self {
            Self::AtLeast { field, threshold } => {
                format!("{} ≥{}", noun(*field), format::threshold(*field, *threshold))
            }
            Self::AtMost { field, threshold } => {
                format!("{} ≤{}", noun(*field), format::threshold(*field, *threshold))
            }
            Self::AnyOf { options } => {
                let inner = options
                    .iter()
                    .map(Criterion::clause)
                    .collect::<Vec<_>>()
                    .join(" or ");
                format!("({inner})")
            }
        }
    }

    fn collect_observed(&self, profile: &StudentProfile, out: &mut Vec<String>) {
        match self {
            Self::AtLeast { field, threshold } | Self::AtMost { field, threshold } => {
                let entry = format!(
                    "{} {}",
                    noun(*field),
                    format::observed(*field, profile.value_of(*field), *threshold)
                );
                if !out.contains(&entry) {
                    out.push(entry);
                }
            }
            Self::AnyOf { options } => {
                for option in options {
                    option.collect_observed(profile, out);
                }
            }
        }
    }
}

fn noun(field: ProfileField) -> String {
    match field {
        ProfileField::Cgpa => field.label().to_string(),
        other => other.label().to_lowercase(),
    }
}
