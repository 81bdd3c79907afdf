use super::rules::Criterion;
use super::{Confidence, Recommendation};
use crate::scholarship::domain::{ProfileField, StudentProfile};
use serde::{Deserialize, Serialize};

/// Scholarship providers with a fixed eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "PETRONAS")]
    Petronas,
    #[serde(rename = "MARA")]
    Mara,
    #[serde(rename = "Zakat")]
    Zakat,
    #[serde(rename = "YayasanUTP")]
    YayasanUtp,
}

impl Provider {
    pub const fn ordered() -> [Self; 4] {
        [Self::Petronas, Self::Mara, Self::Zakat, Self::YayasanUtp]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Petronas => "PETRONAS",
            Self::Mara => "MARA",
            Self::Zakat => "Zakat",
            Self::YayasanUtp => "YayasanUTP",
        }
    }
}

/// Named predicate over a profile plus the metadata copied into each recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramRule {
    pub provider: Provider,
    pub name: &'static str,
    pub description: &'static str,
    pub criteria: Vec<Criterion>,
}

impl ProgramRule {
    /// The four provider rules in canonical order.
    pub fn standard() -> Vec<Self> {
        vec![
            Self {
                provider: Provider::Petronas,
                name: "PETRONAS Education Sponsorship Programme",
                description: "Merit sponsorship for academically outstanding students with a strong leadership and community record.",
                criteria: vec![
                    Criterion::at_least(ProfileField::Cgpa, 3.5),
                    Criterion::at_least(ProfileField::CocurricularScore, 70.0),
                    Criterion::at_least(ProfileField::LeadershipPositions, 2.0),
                    Criterion::at_least(ProfileField::CommunityServiceHours, 50.0),
                ],
            },
            Self {
                provider: Provider::Mara,
                name: "MARA Education Sponsorship",
                description: "Sponsorship for students from low and middle income households with solid academic standing.",
                criteria: vec![
                    Criterion::at_most(ProfileField::FamilyIncome, 80000.0),
                    Criterion::at_least(ProfileField::Cgpa, 3.0),
                    Criterion::at_least(ProfileField::CocurricularScore, 50.0),
                ],
            },
            Self {
                provider: Provider::Zakat,
                name: "Zakat Education Assistance",
                description: "Need-based assistance for low income students who contribute to their community.",
                criteria: vec![
                    Criterion::at_most(ProfileField::FamilyIncome, 50000.0),
                    Criterion::at_least(ProfileField::Cgpa, 2.8),
                    Criterion::at_least(ProfileField::CommunityServiceHours, 30.0),
                ],
            },
            Self {
                provider: Provider::YayasanUtp,
                name: "Yayasan UTP Scholarship",
                description: "Foundation scholarship for strong academic performers with either financial need or an active co-curricular record.",
                criteria: vec![
                    Criterion::at_least(ProfileField::Cgpa, 3.2),
                    Criterion::any_of(vec![
                        Criterion::at_most(ProfileField::FamilyIncome, 100000.0),
                        Criterion::at_least(ProfileField::CocurricularScore, 60.0),
                    ]),
                    Criterion::at_least(ProfileField::YearOfStudy, 1.0),
                ],
            },
        ]
    }

    pub fn is_eligible(&self, profile: &StudentProfile) -> bool {
        self.criteria.iter().all(|criterion| criterion.is_met(profile))
    }

    /// Check every criterion (no short circuit) so all shortfalls are reported.
    pub fn assess(&self, profile: &StudentProfile) -> Recommendation {
        let checks: Vec<_> = self
            .criteria
            .iter()
            .map(|criterion| criterion.check(profile))
            .collect();
        let eligible = checks.iter().all(|check| check.met);
        let reasons = checks
            .into_iter()
            .filter(|check| check.met == eligible)
            .map(|check| check.reason)
            .collect();

        Recommendation {
            provider: self.provider,
            name: self.name.to_string(),
            description: self.description.to_string(),
            eligible,
            confidence: Confidence::from_eligibility(eligible),
            reasons,
        }
    }
}
