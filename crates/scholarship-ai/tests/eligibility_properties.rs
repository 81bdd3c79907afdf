//! Property checks for the provider rule table.

use proptest::prelude::*;
use scholarship_ai::scholarship::{
    Confidence, EligibilityRuleEngine, ProgramRule, Provider, StudentProfile,
};

fn petronas(p: &StudentProfile) -> bool {
    p.cgpa >= 3.5
        && p.cocurricular_score >= 70.0
        && p.leadership_positions >= 2
        && p.community_service_hours >= 50.0
}

fn mara(p: &StudentProfile) -> bool {
    p.family_income <= 80000.0 && p.cgpa >= 3.0 && p.cocurricular_score >= 50.0
}

fn zakat(p: &StudentProfile) -> bool {
    p.family_income <= 50000.0 && p.cgpa >= 2.8 && p.community_service_hours >= 30.0
}

fn yayasan(p: &StudentProfile) -> bool {
    p.cgpa >= 3.2
        && (p.family_income <= 100000.0 || p.cocurricular_score >= 60.0)
        && p.year_of_study >= 1
}

fn expected(provider: Provider, p: &StudentProfile) -> bool {
    match provider {
        Provider::Petronas => petronas(p),
        Provider::Mara => mara(p),
        Provider::Zakat => zakat(p),
        Provider::YayasanUtp => yayasan(p),
    }
}

fn criteria_count(provider: Provider) -> usize {
    match provider {
        Provider::Petronas => 4,
        Provider::Mara | Provider::Zakat | Provider::YayasanUtp => 3,
    }
}

fn failed_criteria(provider: Provider, p: &StudentProfile) -> usize {
    let checks: Vec<bool> = match provider {
        Provider::Petronas => vec![
            p.cgpa >= 3.5,
            p.cocurricular_score >= 70.0,
            p.leadership_positions >= 2,
            p.community_service_hours >= 50.0,
        ],
        Provider::Mara => vec![
            p.family_income <= 80000.0,
            p.cgpa >= 3.0,
            p.cocurricular_score >= 50.0,
        ],
        Provider::Zakat => vec![
            p.family_income <= 50000.0,
            p.cgpa >= 2.8,
            p.community_service_hours >= 30.0,
        ],
        Provider::YayasanUtp => vec![
            p.cgpa >= 3.2,
            p.family_income <= 100000.0 || p.cocurricular_score >= 60.0,
            p.year_of_study >= 1,
        ],
    };
    checks.into_iter().filter(|met| !met).count()
}

fn profile_strategy() -> impl Strategy<Value = StudentProfile> {
    (
        prop_oneof![1i32..=4, -1i32..=0],
        prop_oneof![2.0f64..=4.0, Just(2.8), Just(3.0), Just(3.2), Just(3.5)],
        prop_oneof![
            0.0f64..=150000.0,
            Just(50000.0),
            Just(80000.0),
            Just(100000.0),
            Just(100001.0),
        ],
        prop_oneof![0.0f64..=100.0, Just(50.0), Just(60.0), Just(70.0)],
        0u32..=5,
        prop_oneof![0.0f64..=200.0, Just(30.0), Just(50.0)],
    )
        .prop_map(
            |(year, cgpa, income, cocurricular, leadership, service)| StudentProfile {
                year_of_study: year,
                cgpa,
                family_income: income,
                cocurricular_score: cocurricular,
                leadership_positions: leadership,
                community_service_hours: service,
            },
        )
}

fn profile(
    year: i32,
    cgpa: f64,
    income: f64,
    cocurricular: f64,
    leadership: u32,
    service: f64,
) -> StudentProfile {
    StudentProfile {
        year_of_study: year,
        cgpa,
        family_income: income,
        cocurricular_score: cocurricular,
        leadership_positions: leadership,
        community_service_hours: service,
    }
}

fn eligibility_of(profile: &StudentProfile, provider: Provider) -> bool {
    EligibilityRuleEngine::standard()
        .evaluate(profile)
        .into_iter()
        .find(|rec| rec.provider == provider)
        .map(|rec| rec.eligible)
        .unwrap_or(false)
}

proptest! {
    #[test]
    fn verdicts_match_the_rule_table(p in profile_strategy()) {
        let recommendations = EligibilityRuleEngine::standard().evaluate(&p);

        prop_assert_eq!(recommendations.len(), 4);
        for (rec, provider) in recommendations.iter().zip(Provider::ordered()) {
            prop_assert_eq!(rec.provider, provider);
            prop_assert_eq!(rec.eligible, expected(provider, &p));
            prop_assert_eq!(rec.confidence, Confidence::from_eligibility(rec.eligible));
        }
    }

    #[test]
    fn reasons_cover_failed_or_all_criteria(p in profile_strategy()) {
        for rec in EligibilityRuleEngine::standard().evaluate(&p) {
            let want = if rec.eligible {
                criteria_count(rec.provider)
            } else {
                failed_criteria(rec.provider, &p)
            };
            prop_assert_eq!(rec.reasons.len(), want);
            prop_assert!(!rec.reasons.is_empty());
        }
    }

    #[test]
    fn program_predicates_agree_with_assessments(p in profile_strategy()) {
        for program in ProgramRule::standard() {
            prop_assert_eq!(program.is_eligible(&p), program.assess(&p).eligible);
        }
    }

    #[test]
    fn evaluation_is_repeatable(p in profile_strategy()) {
        let engine = EligibilityRuleEngine::standard();
        prop_assert_eq!(engine.evaluate(&p), engine.evaluate(&p));
    }
}

#[test]
fn petronas_boundary_profile_is_eligible() {
    assert!(eligibility_of(
        &profile(2, 3.5, 0.0, 70.0, 2, 50.0),
        Provider::Petronas
    ));
}

#[test]
fn petronas_rejects_cgpa_just_below_threshold() {
    assert!(!eligibility_of(
        &profile(2, 3.49, 0.0, 70.0, 2, 50.0),
        Provider::Petronas
    ));
}

#[test]
fn mara_income_limit_is_inclusive() {
    let at_limit = profile(1, 3.0, 80000.0, 50.0, 0, 0.0);
    let above = profile(1, 3.0, 80001.0, 50.0, 0, 0.0);

    assert!(eligibility_of(&at_limit, Provider::Mara));
    assert!(!eligibility_of(&above, Provider::Mara));
}

#[test]
fn zakat_boundary_profile_is_eligible() {
    assert!(eligibility_of(
        &profile(1, 2.8, 50000.0, 0.0, 0, 30.0),
        Provider::Zakat
    ));
}

#[test]
fn yayasan_needs_one_branch_of_the_disjunction() {
    let neither = profile(1, 3.2, 100001.0, 59.0, 0, 0.0);
    let cocurricular = profile(1, 3.2, 100001.0, 60.0, 0, 0.0);

    assert!(!eligibility_of(&neither, Provider::YayasanUtp));
    assert!(eligibility_of(&cocurricular, Provider::YayasanUtp));
}
