use super::{DimensionOutcome, Tally};
use crate::scoring::constants::{DimensionKey, ReasonCode};
use crate::types::metadata::MetadataRecord;

const OWNER_POINTS: u32 = 10;
const CONTACT_POINTS: u32 = 5;

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

pub fn score_ownership(metadata: &MetadataRecord) -> DimensionOutcome {
    let mut tally = Tally::new(DimensionKey::Ownership);
    // any non-empty value counts; whitespace is not trimmed here
    let has_owner = is_set(metadata.owner_name.as_deref());
    let has_contact = is_set(metadata.owner_contact.as_deref());

    if has_owner {
        tally.award(OWNER_POINTS);
    } else {
        tally.lose(
            ReasonCode::MissingOwner,
            OWNER_POINTS,
            "No owner assigned".to_string(),
            "Assign dataset owner",
            "Assign a clear owner responsible for this dataset".to_string(),
        );
    }

    if has_contact {
        tally.award(CONTACT_POINTS);
    } else if has_owner {
        // a missing owner already covers the missing contact
        tally.lose(
            ReasonCode::MissingContact,
            CONTACT_POINTS,
            "Owner contact/escalation channel not defined".to_string(),
            "Add owner contact information",
            "Add an escalation channel (chat, email, pager) for the owner".to_string(),
        );
    }

    tally.finish(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::constants::ActionKey;

    fn record(owner: Option<&str>, contact: Option<&str>) -> MetadataRecord {
        MetadataRecord {
            owner_name: owner.map(str::to_string),
            owner_contact: contact.map(str::to_string),
            ..MetadataRecord::default()
        }
    }

    #[test]
    fn owner_and_contact_earn_full_points() {
        let outcome = score_ownership(&record(Some("Data Team"), Some("#data-team")));
        assert_eq!(outcome.score.points_awarded, 15);
        assert!(outcome.reasons.is_empty());
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn missing_owner_does_not_also_flag_contact() {
        let outcome = score_ownership(&record(None, None));
        assert_eq!(outcome.score.points_awarded, 0);
        assert_eq!(outcome.reasons.len(), 1);
        assert_eq!(outcome.reasons[0].reason_code, ReasonCode::MissingOwner);
        assert_eq!(outcome.reasons[0].points_lost, 10);
        assert_eq!(outcome.actions[0].action_key, ActionKey::AssignOwner);
    }

    #[test]
    fn contact_without_owner_still_earns_contact_points() {
        let outcome = score_ownership(&record(None, Some("oncall@example.com")));
        assert_eq!(outcome.score.points_awarded, 5);
        assert_eq!(outcome.reasons.len(), 1);
    }

    #[test]
    fn owner_without_contact_flags_contact() {
        let outcome = score_ownership(&record(Some("Team"), Some("")));
        assert_eq!(outcome.score.points_awarded, 10);
        assert_eq!(outcome.reasons[0].reason_code, ReasonCode::MissingContact);
        assert_eq!(outcome.actions[0].action_key, ActionKey::AddOwnerContact);
        assert_eq!(outcome.actions[0].points_gain, 5);
        assert!(outcome.score.measured);
    }

    #[test]
    fn whitespace_owner_and_contact_count_as_present() {
        let outcome = score_ownership(&record(Some("  "), Some("c")));
        assert_eq!(outcome.score.points_awarded, 15);
        assert!(outcome.reasons.is_empty());
    }
}
