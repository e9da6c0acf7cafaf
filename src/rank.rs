/// Turns a numeric rank into long ("5 Kyu") and short ("5k") labels.
pub trait RankFormatter: Send + Sync {
    fn long(&self, rank: f64) -> String;
    fn short(&self, rank: f64) -> String;
}

const PRO_OFFSET: f64 = 1000.0;
const PRO_BASE: i64 = 36;
const UNKNOWN_BELOW: f64 = -900.0;
const DAN_START: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grade {
    Kyu(i64),
    Dan(i64),
    Pro(i64),
    Unknown,
}

fn grade(rank: f64) -> Grade {
    if !rank.is_finite() || rank < UNKNOWN_BELOW {
        return Grade::Unknown;
    }
    if rank >= PRO_OFFSET {
        return Grade::Pro((rank - PRO_OFFSET).floor() as i64 - PRO_BASE);
    }
    let r = rank.floor() as i64;
    if r < DAN_START {
        Grade::Kyu(DAN_START - r)
    } else {
        Grade::Dan(r - DAN_START + 1)
    }
}

// 0 is 30 kyu, 30 is 1 dan, 1000 and up are professional.
#[derive(Debug, Clone, Copy, Default)]
pub struct OgsRanks;

impl RankFormatter for OgsRanks {
    fn long(&self, rank: f64) -> String {
        match grade(rank) {
            Grade::Kyu(n) => format!("{} Kyu", n),
            Grade::Dan(n) => format!("{} Dan", n),
            Grade::Pro(n) => format!("{} Pro", n),
            Grade::Unknown => "?".to_string(),
        }
    }

    fn short(&self, rank: f64) -> String {
        match grade(rank) {
            Grade::Kyu(n) => format!("{}k", n),
            Grade::Dan(n) => format!("{}d", n),
            Grade::Pro(n) => format!("{}p", n),
            Grade::Unknown => "?".to_string(),
        }
    }
}
