use crate::infra::load_service;
use clap::Args;
use scholarship_ai::config::{AppConfig, ArtifactConfig};
use scholarship_ai::error::AppError;
use scholarship_ai::scholarship::{
    DatasetStats, ModelResults, PredictionReport, Recommendation, ScholarshipServiceError,
    StudentProfile,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Year of study (1-4)
    #[arg(long)]
    pub(crate) year: i32,
    /// Cumulative GPA (2.0-4.0)
    #[arg(long)]
    pub(crate) cgpa: f64,
    /// Annual family income
    #[arg(long)]
    pub(crate) income: f64,
    /// Co-curricular score (0-100)
    #[arg(long)]
    pub(crate) cocurricular: f64,
    /// Number of leadership positions held
    #[arg(long)]
    pub(crate) leadership: u32,
    /// Community service hours
    #[arg(long)]
    pub(crate) service: f64,
    /// Emit the evaluation as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Override the configured model artifact directory
    #[arg(long)]
    pub(crate) model_dir: Option<PathBuf>,
}

impl EvaluateArgs {
    fn profile(&self) -> StudentProfile {
        StudentProfile {
            year_of_study: self.year,
            cgpa: self.cgpa,
            family_income: self.income,
            cocurricular_score: self.cocurricular,
            leadership_positions: self.leadership,
            community_service_hours: self.service,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the configured model artifact directory
    #[arg(long)]
    pub(crate) model_dir: Option<PathBuf>,
    /// Only run the provider rules, even if classifiers are available
    #[arg(long)]
    pub(crate) skip_predictions: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StatsArgs {
    /// Override the configured model artifact directory
    #[arg(long)]
    pub(crate) model_dir: Option<PathBuf>,
    /// Override the configured dataset CSV
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let artifacts = artifact_config(args.model_dir.clone(), None)?;
    let service = load_service(&artifacts)?;
    let profile = args.profile();

    let recommendations = service.recommend(&profile);
    let prediction = service.predict(&profile);

    if args.json {
        let payload = json!({
            "profile": profile,
            "prediction": prediction.as_ref().ok(),
            "recommendations": recommendations,
        });
        let rendered = serde_json::to_string_pretty(&payload).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_evaluation(&profile, &recommendations, &prediction));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let artifacts = artifact_config(args.model_dir, None)?;
    let service = load_service(&artifacts)?;

    println!("Scholarship eligibility demo");
    for (index, (name, profile)) in sample_applicants().iter().enumerate() {
        println!("\n{}. {}", index + 1, name);
        let recommendations = service.recommend(profile);
        let prediction = if args.skip_predictions {
            Err(ScholarshipServiceError::ModelsUnavailable)
        } else {
            service.predict(profile)
        };
        print!("{}", render_evaluation(profile, &recommendations, &prediction));
    }

    Ok(())
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let artifacts = artifact_config(args.model_dir, args.dataset)?;
    let service = load_service(&artifacts)?;

    match service.dataset_stats() {
        Ok(stats) => print!("{}", render_dataset_stats(&stats)),
        Err(ScholarshipServiceError::Artifact(err)) => return Err(err.into()),
        Err(err) => println!("Dataset: {err}"),
    }

    match service.model_results() {
        Ok(results) => print!("{}", render_model_results(&results)),
        Err(ScholarshipServiceError::Artifact(err)) => return Err(err.into()),
        Err(err) => println!("Model results: {err}"),
    }

    Ok(())
}

fn artifact_config(
    model_dir: Option<PathBuf>,
    dataset: Option<PathBuf>,
) -> Result<ArtifactConfig, AppError> {
    let mut artifacts = AppConfig::load()?.artifacts;
    if let Some(model_dir) = model_dir {
        artifacts.model_dir = model_dir;
    }
    if let Some(dataset) = dataset {
        artifacts.dataset_path = dataset;
    }
    Ok(artifacts)
}

fn sample_applicants() -> Vec<(&'static str, StudentProfile)> {
    let profile = |year, cgpa, income, cocurricular, leadership, service| StudentProfile {
        year_of_study: year,
        cgpa,
        family_income: income,
        cocurricular_score: cocurricular,
        leadership_positions: leadership,
        community_service_hours: service,
    };

    vec![
        (
            "High CGPA, low income",
            profile(2, 3.8, 30000.0, 60.0, 1, 50.0),
        ),
        (
            "Very high CGPA, upper income",
            profile(3, 3.9, 100000.0, 50.0, 0, 0.0),
        ),
        (
            "Low CGPA, high income",
            profile(2, 2.3, 120000.0, 40.0, 0, 10.0),
        ),
        (
            "Low income, moderate CGPA",
            profile(1, 2.8, 25000.0, 50.0, 0, 20.0),
        ),
        (
            "Well-rounded student",
            profile(3, 3.2, 60000.0, 85.0, 3, 50.0),
        ),
        (
            "Community service focus",
            profile(4, 3.0, 70000.0, 60.0, 1, 150.0),
        ),
        (
            "Average student",
            profile(2, 3.0, 60000.0, 50.0, 0, 30.0),
        ),
    ]
}

pub(crate) fn render_evaluation(
    profile: &StudentProfile,
    recommendations: &[Recommendation],
    prediction: &Result<PredictionReport, ScholarshipServiceError>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "   Profile: year {} | CGPA {:.2} | income {:.0} | co-curricular {:.0} | leadership {} | service {:.0}h\n",
        profile.year_of_study,
        profile.cgpa,
        profile.family_income,
        profile.cocurricular_score,
        profile.leadership_positions,
        profile.community_service_hours
    ));

    match prediction {
        Ok(report) => {
            let verdict = if report.prediction == 1 {
                "ELIGIBLE"
            } else {
                "NOT ELIGIBLE"
            };
            out.push_str(&format!(
                "   Classifier: {verdict} ({:.1}% via {})\n",
                report.probability.eligible * 100.0,
                report.model_used
            ));
            for (model, label) in &report.all_predictions {
                let eligible = report
                    .all_probabilities
                    .get(model)
                    .map(|probabilities| probabilities.eligible * 100.0)
                    .unwrap_or_default();
                out.push_str(&format!("     - {model}: {label} ({eligible:.1}%)\n"));
            }
        }
        Err(err) => {
            out.push_str(&format!("   Classifier: unavailable ({err})\n"));
        }
    }

    out.push_str("   Programs:\n");
    for rec in recommendations {
        let marker = if rec.eligible { "+" } else { "-" };
        out.push_str(&format!(
            "     {marker} {} [{:?}]\n",
            rec.provider.id(),
            rec.confidence
        ));
        for reason in &rec.reasons {
            out.push_str(&format!("         {reason}\n"));
        }
    }
    out
}

pub(crate) fn render_dataset_stats(stats: &DatasetStats) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Dataset: {} samples | {} eligible ({:.1}%) | {} not eligible\n",
        stats.total_samples,
        stats.eligible_count,
        stats.eligible_percentage,
        stats.not_eligible_count
    ));
    let features = &stats.features;
    for (name, summary) in [
        ("year_of_study", &features.year_of_study),
        ("cgpa", &features.cgpa),
        ("family_income", &features.family_income),
        ("cocurricular_score", &features.cocurricular_score),
    ] {
        out.push_str(&format!(
            "  - {name}: min {} | max {} | mean {:.2}\n",
            summary.min, summary.max, summary.mean
        ));
    }
    out
}

pub(crate) fn render_model_results(results: &ModelResults) -> String {
    let mut out = String::from("Model results:\n");
    for (name, metrics) in &results.0 {
        out.push_str(&format!(
            "  - {name}: accuracy {:.3} | precision {:.3} | recall {:.3} | f1 {:.3}\n",
            metrics.accuracy, metrics.precision, metrics.recall, metrics.f1_score
        ));
    }
    if let Some((best, metrics)) = results.best_by_f1() {
        out.push_str(&format!("Best by F1: {best} ({:.3})\n", metrics.f1_score));
    }
    out
}
