use super::{DimensionOutcome, Tally};
use crate::scoring::constants::{DimensionKey, ReasonCode};
use crate::types::metadata::{has_text, MetadataRecord};

const INTENDED_USE_POINTS: u32 = 5;
const LIMITATIONS_POINTS: u32 = 5;

pub fn score_operational(metadata: &MetadataRecord) -> DimensionOutcome {
    let mut tally = Tally::new(DimensionKey::Operational);

    if has_text(metadata.intended_use.as_deref()) {
        tally.award(INTENDED_USE_POINTS);
    } else {
        tally.lose(
            ReasonCode::MissingIntendedUse,
            INTENDED_USE_POINTS,
            "Intended use cases not defined".to_string(),
            "Define intended use cases",
            "Document the intended use cases and consumers for this dataset".to_string(),
        );
    }

    if has_text(metadata.limitations.as_deref()) {
        tally.award(LIMITATIONS_POINTS);
    } else {
        tally.lose(
            ReasonCode::MissingLimitations,
            LIMITATIONS_POINTS,
            "Known limitations not documented".to_string(),
            "Document known limitations",
            "Document any known limitations, caveats, or constraints for this dataset"
                .to_string(),
        );
    }

    tally.finish(true)
}
