use serde::{Deserialize, Serialize};

/// The six numeric attributes describing one student.
///
/// Ranges are not enforced here; `year_of_study` is expected in 1..=4 and
/// `cgpa` in 2.0..=4.0, but the rule engine evaluates whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub year_of_study: i32,
    pub cgpa: f64,
    pub family_income: f64,
    pub cocurricular_score: f64,
    pub leadership_positions: u32,
    pub community_service_hours: f64,
}

impl StudentProfile {
    pub fn value_of(&self, field: ProfileField) -> f64 {
        match field {
            ProfileField::YearOfStudy => f64::from(self.year_of_study),
            ProfileField::Cgpa => self.cgpa,
            ProfileField::FamilyIncome => self.family_income,
            ProfileField::CocurricularScore => self.cocurricular_score,
            ProfileField::LeadershipPositions => f64::from(self.leadership_positions),
            ProfileField::CommunityServiceHours => self.community_service_hours,
        }
    }

    /// Classifier input in canonical feature order.
    pub fn features(&self) -> FeatureVector {
        FeatureVector(ProfileField::ordered().map(|field| self.value_of(field)))
    }
}

/// Profile attribute identifiers, shared by intake, the rules, and classifier inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    YearOfStudy,
    Cgpa,
    FamilyIncome,
    CocurricularScore,
    LeadershipPositions,
    CommunityServiceHours,
}

impl ProfileField {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::YearOfStudy,
            Self::Cgpa,
            Self::FamilyIncome,
            Self::CocurricularScore,
            Self::LeadershipPositions,
            Self::CommunityServiceHours,
        ]
    }

    /// Wire name used in JSON payloads, CSV headers, and `features.json`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::YearOfStudy => "year_of_study",
            Self::Cgpa => "cgpa",
            Self::FamilyIncome => "family_income",
            Self::CocurricularScore => "cocurricular_score",
            Self::LeadershipPositions => "leadership_positions",
            Self::CommunityServiceHours => "community_service_hours",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::YearOfStudy => "Year of study",
            Self::Cgpa => "CGPA",
            Self::FamilyIncome => "Family income",
            Self::CocurricularScore => "Co-curricular score",
            Self::LeadershipPositions => "Leadership positions",
            Self::CommunityServiceHours => "Community service hours",
        }
    }

    pub const fn is_whole_number(self) -> bool {
        matches!(self, Self::YearOfStudy | Self::LeadershipPositions)
    }
}

/// Dense feature row handed to classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector(pub [f64; 6]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Feature names in canonical order, as persisted alongside exported models.
pub fn feature_names() -> Vec<&'static str> {
    ProfileField::ordered().iter().map(|field| field.key()).collect()
}
