use serde::{Deserialize, Serialize};
use std::io::Read;

/// Summary of the labelled dataset the classifiers were trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_samples: usize,
    pub eligible_count: usize,
    pub not_eligible_count: usize,
    pub eligible_percentage: f64,
    pub features: DatasetFeatureStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetFeatureStats {
    pub year_of_study: FeatureSummary,
    pub cgpa: FeatureSummary,
    pub family_income: FeatureSummary,
    pub cocurricular_score: FeatureSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl DatasetStats {
    /// Stream a CSV export with a header row; unknown columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut total_samples = 0;
        let mut eligible_count = 0;
        let mut year_of_study = Accumulator::default();
        let mut cgpa = Accumulator::default();
        let mut family_income = Accumulator::default();
        let mut cocurricular_score = Accumulator::default();

        for record in csv_reader.deserialize::<DatasetRow>() {
            let row = record?;
            total_samples += 1;
            if row.eligible != 0 {
                eligible_count += 1;
            }
            year_of_study.push(row.year_of_study);
            cgpa.push(row.cgpa);
            family_income.push(row.family_income);
            cocurricular_score.push(row.cocurricular_score);
        }

        let eligible_percentage = if total_samples == 0 {
            0.0
        } else {
            eligible_count as f64 / total_samples as f64 * 100.0
        };

        Ok(Self {
            total_samples,
            eligible_count,
            not_eligible_count: total_samples - eligible_count,
            eligible_percentage,
            features: DatasetFeatureStats {
                year_of_study: year_of_study.summary(),
                cgpa: cgpa.summary(),
                family_income: family_income.summary(),
                cocurricular_score: cocurricular_score.summary(),
            },
        })
    }
}

#[derive(Debug, Deserialize)]
struct DatasetRow {
    year_of_study: f64,
    cgpa: f64,
    family_income: f64,
    cocurricular_score: f64,
    eligible: u8,
}

#[derive(Debug, Default)]
struct Accumulator {
    count: usize,
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
    }

    fn summary(&self) -> FeatureSummary {
        if self.count == 0 {
            return FeatureSummary::default();
        }

        FeatureSummary {
            min: self.min.unwrap_or_default(),
            max: self.max.unwrap_or_default(),
            mean: self.sum / self.count as f64,
        }
    }
}
