use crate::report::ScoredDataset;
use crate::types::dataset::{HistoryEntry, StoredDataset};
use crate::types::scoring::{Action, DimensionScore, Reason};

pub fn to_markdown(datasets: &[ScoredDataset]) -> String {
    let mut output = String::new();
    output.push_str("# Readiness Report\n\n");
    if datasets.is_empty() {
        output.push_str("- no datasets found\n");
        return output;
    }

    for dataset in datasets {
        let result = &dataset.result;
        output.push_str(&heading(&dataset.full_name, &dataset.display_name));
        output.push_str(&format!(
            "Score: {}/100 ({})\n\n",
            result.total_score, result.status
        ));
        push_dimensions(&mut output, &result.dimension_scores);
        push_reasons(&mut output, result.reasons.iter());
        push_actions(&mut output, result.actions.iter());
    }

    output
}

pub fn detail_to_markdown(stored: &StoredDataset, history: &[HistoryEntry]) -> String {
    let entity = &stored.entity;
    let mut output = heading(&entity.full_name, &entity.display_name);
    output.push_str(&format!(
        "Score: {}/100 ({})\n\n",
        entity.readiness_score, entity.readiness_status
    ));

    let fields = [
        ("Description", entity.description.as_deref()),
        ("Owner", entity.owner_name.as_deref()),
        ("Contact", entity.owner_contact.as_deref()),
        ("Intended use", entity.intended_use.as_deref()),
        ("Limitations", entity.limitations.as_deref()),
        ("Location", entity.location_type.as_deref()),
        ("Producing job", entity.producing_job.as_deref()),
    ];
    for (label, value) in fields {
        output.push_str(&format!("- {label}: {}\n", value.unwrap_or("-")));
    }
    if let Some(scored_at) = entity.last_scored_at {
        output.push_str(&format!("- Last scored: {}\n", scored_at.to_rfc3339()));
    }
    output.push('\n');

    push_dimensions(&mut output, &stored.dimension_scores);
    push_reasons(&mut output, stored.visible_reasons().into_iter());
    push_actions(&mut output, stored.visible_actions().into_iter());

    output.push_str("### Columns\n\n");
    if stored.columns.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for column in &stored.columns {
            let nullable = match column.nullable {
                Some(true) => "nullable",
                Some(false) => "not null",
                None => "nullability unknown",
            };
            output.push_str(&format!(
                "- `{}` ({nullable}): {}\n",
                column.name,
                column.description.as_deref().unwrap_or("-")
            ));
        }
        output.push('\n');
    }

    output.push_str("### History\n\n");
    if history.is_empty() {
        output.push_str("- none\n");
    } else {
        for entry in history {
            output.push_str(&format!(
                "- {} {} ({}, {})\n",
                entry.recorded_at.to_rfc3339(),
                entry.score,
                entry.status,
                entry.scoring_version
            ));
        }
    }

    output
}

fn heading(full_name: &str, display_name: &str) -> String {
    if display_name == full_name {
        format!("## {full_name}\n\n")
    } else {
        format!("## {display_name} (`{full_name}`)\n\n")
    }
}

fn push_dimensions(output: &mut String, dimensions: &[DimensionScore]) {
    output.push_str("| Dimension | Points | % | Measured |\n");
    output.push_str("|---|---|---|---|\n");
    for dimension in dimensions {
        output.push_str(&format!(
            "| {} | {}/{} | {:.0}% | {} |\n",
            dimension.dimension_key,
            dimension.points_awarded,
            dimension.max_points,
            dimension.percentage(),
            if dimension.measured { "yes" } else { "no" }
        ));
    }
    output.push('\n');
}

fn push_reasons<'a>(output: &mut String, reasons: impl Iterator<Item = &'a Reason>) {
    output.push_str("### Reasons\n\n");
    let mut any = false;
    for reason in reasons {
        any = true;
        output.push_str(&format!("- -{} {}\n", reason.points_lost, reason.message));
    }
    if !any {
        output.push_str("- none\n");
    }
    output.push('\n');
}

fn push_actions<'a>(output: &mut String, actions: impl Iterator<Item = &'a Action>) {
    output.push_str("### Actions\n\n");
    let mut any = false;
    for action in actions {
        any = true;
        output.push_str(&format!(
            "- +{} {}: {}\n",
            action.points_gain, action.title, action.description
        ));
    }
    if !any {
        output.push_str("- none\n");
    }
    output.push('\n');
}
