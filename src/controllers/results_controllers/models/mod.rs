use serde::{Deserialize, Serialize};

use crate::models::vote_models::Tally;

#[derive(Serialize)]
pub struct OptionResult {
    pub option: String,
    pub count: i64,
    pub percentage: String,
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub total: i64,
    pub results: Vec<OptionResult>,
}

impl From<Tally> for ResultsResponse {
    fn from(tally: Tally) -> Self {
        Self {
            total: tally.total,
            results: tally
                .entries
                .into_iter()
                .map(|entry| OptionResult {
                    option: entry.option,
                    count: entry.count,
                    percentage: entry.percentage,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct ResultsFlags {
    pub deleted: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vote_models::OptionCount;

    #[test]
    fn response_mirrors_the_tally() {
        let tally = Tally::from_counts(vec![
            OptionCount {
                option: "cats".to_string(),
                count: 2,
            },
            OptionCount {
                option: "dogs".to_string(),
                count: 1,
            },
        ]);

        let response = ResultsResponse::from(tally);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "total": 3,
                "results": [
                    {"option": "cats", "count": 2, "percentage": "66.67"},
                    {"option": "dogs", "count": 1, "percentage": "33.33"},
                ],
            })
        );
    }

    #[test]
    fn empty_tally_serializes_to_empty_results() {
        let response = ResultsResponse::from(Tally::from_counts(vec![]));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"total": 0, "results": []}));
    }
}
