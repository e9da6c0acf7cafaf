use crate::collection::{CollectionSummary, EnrichedCollectionSummary, RankLabels};
use crate::rank::RankFormatter;

pub fn rank_labels(summary: &CollectionSummary, ranks: &dyn RankFormatter) -> RankLabels {
    let min = summary.min_rank;
    let max = summary.max_rank;
    RankLabels {
        min_long: ranks.long(min),
        max_long: ranks.long(max),
        min_short: ranks.short(min),
        max_short: ranks.short(max),
    }
}

pub fn groom(
    rows: Vec<CollectionSummary>,
    ranks: &dyn RankFormatter,
) -> Vec<EnrichedCollectionSummary> {
    rows.into_iter()
        .map(|summary| {
            let labels = rank_labels(&summary, ranks);
            EnrichedCollectionSummary::from_parts(summary, labels)
        })
        .collect()
}

// Recomputes labels in place from each row's own rank values.
pub fn regroom(rows: &mut [EnrichedCollectionSummary], ranks: &dyn RankFormatter) {
    for row in rows.iter_mut() {
        let labels = rank_labels(row.summary(), ranks);
        row.set_labels(labels);
    }
}
