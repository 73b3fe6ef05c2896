use crate::report::ScoredDataset;
use crate::scoring::constants::ReasonCode;
use crate::types::scoring::ReadinessStatus;
use serde_json::json;

pub fn to_sarif(
    datasets: &[ScoredDataset],
    gate: ReadinessStatus,
) -> Result<String, serde_json::Error> {
    let rules: Vec<_> = ReasonCode::ALL
        .iter()
        .map(|code| {
            json!({
                "id": code.as_str(),
                "properties": { "dimension": code.dimension().as_str() },
            })
        })
        .collect();

    let results: Vec<_> = datasets
        .iter()
        .flat_map(|dataset| {
            let level = if dataset.result.status < gate {
                "error"
            } else {
                "warning"
            };
            dataset.result.reasons.iter().map(move |reason| {
                json!({
                    "ruleId": reason.reason_code.as_str(),
                    "level": level,
                    "message": { "text": format!("{}: {}", dataset.full_name, reason.message) },
                    "properties": {
                        "dataset": dataset.full_name,
                        "pointsLost": reason.points_lost,
                    },
                })
            })
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "readiness",
                    "version": env!("CARGO_PKG_VERSION"),
                    "rules": rules
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{owned, scored};

    #[test]
    fn sarif_levels_follow_gate() {
        let datasets = [scored("warehouse.orders", owned())];

        let rendered =
            to_sarif(&datasets, ReadinessStatus::Internal).expect("sarif should serialize");
        let parsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("output should be valid json");
        let results = parsed["runs"][0]["results"]
            .as_array()
            .expect("results should be an array");
        assert!(!results.is_empty());
        assert!(results.iter().all(|result| result["level"] == "error"));
        assert_eq!(results[0]["ruleId"], "missing_description");

        let rendered =
            to_sarif(&datasets, ReadinessStatus::Draft).expect("sarif should serialize");
        assert!(!rendered.contains("\"error\""));
        assert!(rendered.contains("\"warning\""));
    }
}
