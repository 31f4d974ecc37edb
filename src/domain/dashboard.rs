// Dashboard domain model
use super::dataset::Dataset;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub cases_count: usize,
    pub suspects_count: usize,
    pub seizures_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub cases: Dataset,
    pub suspects: Dataset,
    pub seizures: Dataset,
}

impl Dashboard {
    /// Counts are always taken from the datasets themselves.
    pub fn new(cases: Dataset, suspects: Dataset, seizures: Dataset) -> Self {
        let summary = Summary {
            cases_count: cases.len(),
            suspects_count: suspects.len(),
            seizures_count: seizures.len(),
        };
        Self {
            summary,
            cases,
            suspects,
            seizures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset_with_rows(n: usize) -> Dataset {
        let mut dataset = Dataset::new(vec!["id".to_string()]);
        for i in 0..n {
            dataset.push_row(vec![i.to_string()]);
        }
        dataset
    }

    #[test]
    fn test_summary_matches_row_counts() {
        let dashboard = Dashboard::new(dataset_with_rows(3), dataset_with_rows(0), dataset_with_rows(7));

        assert_eq!(
            dashboard.summary,
            Summary {
                cases_count: 3,
                suspects_count: 0,
                seizures_count: 7,
            }
        );
    }

    #[test]
    fn test_json_shape() {
        let dashboard = Dashboard::new(dataset_with_rows(1), dataset_with_rows(0), dataset_with_rows(0));
        let value = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(value["summary"]["cases_count"], 1);
        assert_eq!(value["summary"]["suspects_count"], 0);
        assert_eq!(value["cases"][0]["id"], "0");
        assert_eq!(value["suspects"], serde_json::json!([]));
        assert_eq!(value["seizures"], serde_json::json!([]));
    }
}
