use crate::collection::{EnrichedCollectionSummary, PlayerRef};
use crate::display::Presentation;
use crate::rank::RankFormatter;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Preview(serde_json::Value),
    NameOwner {
        name: String,
        owner: PlayerRef,
        owner_rank: Option<String>,
    },
    Rating { value: f64, count: String },
}

impl Cell {
    pub fn plain(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Preview(payload) => match payload.get("id") {
                Some(id) => format!("#{}", id),
                None => String::new(),
            },
            Cell::NameOwner {
                name,
                owner,
                owner_rank: Some(rank),
            } => format!("{} ({} [{}])", name, owner.username, rank),
            Cell::NameOwner { name, owner, .. } => format!("{} ({})", name, owner.username),
            Cell::Rating { value, count } => format!("{} ({})", stars(*value), count),
        }
    }
}

fn stars(value: f64) -> String {
    let filled = value.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub enum ClassName {
    Static(&'static str),
    #[allow(dead_code)]
    PerRow(Box<dyn Fn(&EnrichedCollectionSummary) -> String + Send + Sync>),
}

impl ClassName {
    pub fn resolve(&self, row: &EnrichedCollectionSummary) -> String {
        match self {
            ClassName::Static(name) => name.to_string(),
            ClassName::PerRow(f) => f(row),
        }
    }
}

type Renderer = Box<dyn Fn(&EnrichedCollectionSummary) -> Cell + Send + Sync>;

pub struct ColumnDescriptor {
    pub header: String,
    pub class_name: ClassName,
    pub order_by: Option<Vec<String>>,
    render: Renderer,
}

impl ColumnDescriptor {
    fn new(
        header: String,
        class_name: &'static str,
        order_by: &[&str],
        render: impl Fn(&EnrichedCollectionSummary) -> Cell + Send + Sync + 'static,
    ) -> Self {
        ColumnDescriptor {
            header,
            class_name: ClassName::Static(class_name),
            order_by: if order_by.is_empty() {
                None
            } else {
                Some(order_by.iter().map(|key| key.to_string()).collect())
            },
            render: Box::new(render),
        }
    }

    pub fn sortable(&self) -> bool {
        self.order_by.is_some()
    }

    pub fn render(&self, row: &EnrichedCollectionSummary) -> Cell {
        (self.render)(row)
    }
}

impl std::fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("header", &self.header)
            .field("order_by", &self.order_by)
            .finish_non_exhaustive()
    }
}

pub fn owner_badge(owner: &PlayerRef, ranks: &dyn RankFormatter) -> Option<String> {
    if owner.professional {
        return Some("pro".to_string());
    }
    owner.ranking.map(|rank| ranks.short(rank))
}

pub fn difficulty(row: &EnrichedCollectionSummary) -> Cell {
    if row.min_rank_string() == row.max_rank_string() {
        Cell::Text(row.min_rank_string().to_string())
    } else {
        Cell::Text(format!("{}-{}", row.min_rank_short(), row.max_rank_short()))
    }
}

pub fn collection_columns(display: Arc<Presentation>) -> Vec<ColumnDescriptor> {
    let d = display;
    let (players, counts, ratings, views, solved, dates, privacy) = (
        d.clone(),
        d.clone(),
        d.clone(),
        d.clone(),
        d.clone(),
        d.clone(),
        d.clone(),
    );
    let private_label = privacy.tr("Private");
    let public_label = privacy.tr("Public");

    vec![
        ColumnDescriptor::new(String::new(), "icon", &[], |row| {
            Cell::Preview(row.summary().starting_puzzle.clone())
        }),
        ColumnDescriptor::new(d.tr("Collection"), "name", &["name"], move |row| {
            let owner = &row.summary().owner;
            Cell::NameOwner {
                name: row.summary().name.clone(),
                owner: owner.clone(),
                owner_rank: owner_badge(owner, players.ranks.as_ref()),
            }
        }),
        ColumnDescriptor::new(
            d.tr("Difficulty"),
            "difficulty center",
            &["min_rank", "max_rank"],
            difficulty,
        ),
        ColumnDescriptor::new(
            d.tr("Puzzles"),
            "puzzle-count center",
            &["-puzzle_count"],
            move |row| Cell::Text(counts.counts.format_count(row.summary().puzzle_count)),
        ),
        ColumnDescriptor::new(
            d.tr("Rating"),
            "rating",
            &["-rating", "-rating_count"],
            move |row| Cell::Rating {
                value: row.summary().rating,
                count: ratings.counts.format_count(row.summary().rating_count),
            },
        ),
        ColumnDescriptor::new(
            d.tr("Views"),
            "view-count right",
            &["-view_count"],
            move |row| Cell::Text(views.counts.format_count(row.summary().view_count)),
        ),
        ColumnDescriptor::new(
            d.tr("Solved"),
            "solved-count right",
            &["-solved_count"],
            move |row| Cell::Text(solved.counts.format_count(row.summary().solved_count)),
        ),
        ColumnDescriptor::new(
            d.tr("Created"),
            "date center",
            &["-created"],
            move |row| Cell::Text(dates.dates.format_date(&row.summary().created)),
        ),
        ColumnDescriptor::new(
            d.tr("Private"),
            "date center",
            &["-private"],
            move |row| {
                if row.summary().private {
                    Cell::Text(private_label.clone())
                } else {
                    Cell::Text(public_label.clone())
                }
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Catalog;
    use crate::groom::groom;
    use crate::rank::{OgsRanks, RankFormatter};
    use crate::tests::mocks::sample_summary;
    use std::collections::HashMap;

    fn enriched(min: f64, max: f64) -> EnrichedCollectionSummary {
        groom(vec![sample_summary(1, min, max)], &OgsRanks).remove(0)
    }

    fn columns() -> Vec<ColumnDescriptor> {
        collection_columns(Arc::new(Presentation::default()))
    }

    #[test]
    fn nine_columns_in_display_order() {
        let headers: Vec<String> = columns().iter().map(|c| c.header.clone()).collect();
        assert_eq!(
            headers,
            vec![
                "", "Collection", "Difficulty", "Puzzles", "Rating", "Views", "Solved",
                "Created", "Private"
            ]
        );
    }

    #[test]
    fn ordering_keys_per_column() {
        let keys: Vec<Option<Vec<String>>> = columns().into_iter().map(|c| c.order_by).collect();
        let expect = |k: &[&str]| Some(k.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        assert_eq!(keys[0], None);
        assert_eq!(keys[1], expect(&["name"]));
        assert_eq!(keys[2], expect(&["min_rank", "max_rank"]));
        assert_eq!(keys[3], expect(&["-puzzle_count"]));
        assert_eq!(keys[4], expect(&["-rating", "-rating_count"]));
        assert_eq!(keys[5], expect(&["-view_count"]));
        assert_eq!(keys[6], expect(&["-solved_count"]));
        assert_eq!(keys[7], expect(&["-created"]));
        assert_eq!(keys[8], expect(&["-private"]));
    }

    #[test]
    fn class_names_are_constant() {
        let row = enriched(3.0, 3.0);
        let classes: Vec<String> = columns().iter().map(|c| c.class_name.resolve(&row)).collect();
        assert_eq!(classes[0], "icon");
        assert_eq!(classes[2], "difficulty center");
        assert_eq!(classes[8], "date center");
    }

    #[test]
    fn equal_bounds_render_a_single_label() {
        for rank in [0.0, 10.0, 29.0, 30.0, 38.0] {
            match difficulty(&enriched(rank, rank)) {
                Cell::Text(text) => {
                    assert!(!text.contains('-'), "{}", text);
                    assert_eq!(text, OgsRanks.long(rank));
                }
                other => panic!("unexpected cell {:?}", other),
            }
        }
    }

    #[test]
    fn same_long_label_within_a_rank_is_not_a_range() {
        assert_eq!(difficulty(&enriched(10.1, 10.8)), Cell::Text("20 Kyu".to_string()));
    }

    #[test]
    fn differing_bounds_render_short_range() {
        assert_eq!(difficulty(&enriched(5.0, 31.0)), Cell::Text("25k-2d".to_string()));
    }

    #[test]
    fn privacy_labels_are_localized() {
        let mut entries = HashMap::new();
        entries.insert("Public".to_string(), "Öffentlich".to_string());
        let display = Presentation {
            translator: Box::new(Catalog::new(entries)),
            ..Presentation::default()
        };
        let cols = collection_columns(Arc::new(display));
        assert_eq!(cols[8].render(&enriched(1.0, 1.0)), Cell::Text("Öffentlich".to_string()));
    }

    #[test]
    fn owner_badge_shows_rank_or_pro() {
        let mut owner = sample_summary(1, 1.0, 1.0).owner;
        assert_eq!(owner_badge(&owner, &OgsRanks), Some("2d".to_string()));
        owner.professional = true;
        assert_eq!(owner_badge(&owner, &OgsRanks), Some("pro".to_string()));
        owner.professional = false;
        owner.ranking = None;
        assert_eq!(owner_badge(&owner, &OgsRanks), None);
        let cell = Cell::NameOwner {
            name: "Ladder".into(),
            owner,
            owner_rank: None,
        };
        assert_eq!(cell.plain(), "Ladder (sensei)");
    }

    #[test]
    fn plain_rendering() {
        let row = enriched(1.0, 1.0);
        let cols = columns();
        assert_eq!(cols[1].render(&row).plain(), "Sample 1 (sensei [2d])");
        assert_eq!(cols[0].render(&row).plain(), "#99");
        assert_eq!(
            Cell::Rating { value: 4.2, count: "1.5k".into() }.plain(),
            "★★★★☆ (1.5k)"
        );
    }
}
