use crate::types::{Dir, Element};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Directional card strength. Holds 1..=10; 10 is written as "A" on cards and in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RankRepr", into = "RankRepr")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(10);

    /// Returns None outside 1..=10.
    #[inline]
    pub const fn new(value: u8) -> Option<Rank> {
        if value >= 1 && value <= 10 {
            Some(Rank(value))
        } else {
            None
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Rank::ACE {
            write!(f, "A")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RankRepr {
    Num(u8),
    Ace(String),
}

impl TryFrom<RankRepr> for Rank {
    type Error = String;

    fn try_from(repr: RankRepr) -> Result<Self, Self::Error> {
        match repr {
            RankRepr::Num(n) => Rank::new(n).ok_or_else(|| format!("rank {n} out of range 1..=10")),
            RankRepr::Ace(s) if s == "A" => Ok(Rank::ACE),
            RankRepr::Ace(s) => Err(format!("invalid rank '{s}', expected 1..=10 or \"A\"")),
        }
    }
}

impl From<Rank> for RankRepr {
    fn from(rank: Rank) -> Self {
        if rank == Rank::ACE {
            RankRepr::Ace("A".to_string())
        } else {
            RankRepr::Num(rank.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub level: u8,
    pub top: Rank,
    pub right: Rank,
    pub bottom: Rank,
    pub left: Rank,
    #[serde(default)]
    pub element: Option<Element>,
}

impl Card {
    /// Sides in [top, right, bottom, left] order.
    #[inline]
    pub fn sides(&self) -> [Rank; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    #[inline]
    pub fn rank(&self, dir: Dir) -> Rank {
        match dir {
            Dir::Up => self.top,
            Dir::Right => self.right,
            Dir::Down => self.bottom,
            Dir::Left => self.left,
        }
    }

    /// Sum of the four sides with "A" counted as 10.
    #[inline]
    pub fn total_rank(&self) -> u8 {
        self.sides().iter().map(|r| r.value()).sum()
    }
}

/// Card catalog. Cards are kept sorted by id; lookups by id binary-search.
#[derive(Debug, Default)]
pub struct CardsDb {
    cards: Vec<Card>,
    by_name: HashMap<String, usize>, // case-sensitive, value is a position in `cards`
}

impl CardsDb {
    #[inline]
    pub fn get(&self, id: u32) -> Option<&Card> {
        let pos = self.cards.binary_search_by_key(&id, |c| c.id).ok()?;
        self.cards.get(pos)
    }

    #[inline]
    pub fn by_name(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name).map(|&pos| &self.cards[pos])
    }

    /// Highest id in the catalog (0 when empty).
    #[inline]
    pub fn max_id(&self) -> u32 {
        self.cards.last().map_or(0, |c| c.id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in id order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards with `level <= max_level`, in id order.
    pub fn up_to_level(&self, max_level: u8) -> Vec<&Card> {
        self.iter().filter(|c| c.level <= max_level).collect()
    }
}

fn check_level(card: &Card) -> Result<(), String> {
    if (1..=10).contains(&card.level) {
        Ok(())
    } else {
        Err(format!(
            "Card id {} '{}' has level {}, expected 1..=10",
            card.id, card.name, card.level
        ))
    }
}

/// Build a catalog from JSON text. Rank ranges are enforced while deserializing;
/// levels, id uniqueness and name uniqueness are checked here.
pub fn parse_cards_json(data: &str) -> Result<CardsDb, String> {
    let mut cards: Vec<Card> =
        serde_json::from_str(data).map_err(|e| format!("Failed to parse JSON: {e}"))?;
    if cards.is_empty() {
        return Err("No cards in JSON".to_string());
    }
    cards.iter().try_for_each(check_level)?;

    cards.sort_by_key(|c| c.id);
    if let Some(pair) = cards.windows(2).find(|w| w[0].id == w[1].id) {
        return Err(format!(
            "Duplicate card id {} ('{}' and '{}')",
            pair[0].id, pair[0].name, pair[1].name
        ));
    }

    let mut by_name = HashMap::with_capacity(cards.len());
    for (pos, card) in cards.iter().enumerate() {
        if let Some(prev) = by_name.insert(card.name.clone(), pos) {
            return Err(format!(
                "Duplicate card name '{}' for ids {} and {}",
                card.name, cards[prev].id, card.id
            ));
        }
    }

    Ok(CardsDb { cards, by_name })
}

/// Load cards from a JSON file (runtime).
pub fn load_cards_from_json<P: AsRef<Path>>(path: P) -> Result<CardsDb, String> {
    let data =
        fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read JSON: {e}"))?;
    parse_cards_json(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_rejects_out_of_range() {
        assert!(Rank::new(0).is_none());
        assert!(Rank::new(11).is_none());
        assert_eq!(Rank::new(10), Some(Rank::ACE));
    }

    #[test]
    fn ace_serializes_as_letter() {
        let r = Rank::new(10).unwrap();
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"A\"");
        assert_eq!(serde_json::to_string(&Rank::new(7).unwrap()).unwrap(), "7");
        let back: Rank = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(back.value(), 10);
        let ten: Rank = serde_json::from_str("10").unwrap();
        assert_eq!(ten, Rank::ACE);
    }

    #[test]
    fn bad_rank_is_a_parse_error() {
        assert!(serde_json::from_str::<Rank>("0").is_err());
        assert!(serde_json::from_str::<Rank>("\"B\"").is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let json = r#"[
            {"id":1,"name":"Geezard","level":1,"top":1,"right":4,"bottom":5,"left":1},
            {"id":2,"name":"Geezard","level":1,"top":1,"right":4,"bottom":5,"left":1}
        ]"#;
        let err = parse_cards_json(json).unwrap_err();
        assert!(err.contains("Duplicate card name"), "{err}");
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"[
            {"id":4,"name":"Red Bat","level":1,"top":6,"right":1,"bottom":1,"left":2},
            {"id":4,"name":"Blobra","level":1,"top":2,"right":3,"bottom":1,"left":5}
        ]"#;
        let err = parse_cards_json(json).unwrap_err();
        assert!(err.contains("Duplicate card id 4"), "{err}");
    }

    #[test]
    fn bad_level_rejected() {
        let json = r#"[{"id":1,"name":"x","level":0,"top":1,"right":1,"bottom":1,"left":1}]"#;
        assert!(parse_cards_json(json).unwrap_err().contains("level 0"));
    }

    #[test]
    fn lookups_work_on_sparse_unsorted_ids() {
        let json = r#"[
            {"id":40,"name":"Odin","level":7,"top":8,"right":5,"bottom":3,"left":"A"},
            {"id":7,"name":"Gesper","level":1,"top":1,"right":5,"bottom":4,"left":1}
        ]"#;
        let db = parse_cards_json(json).unwrap();
        assert_eq!(db.max_id(), 40);
        assert_eq!(db.get(40).map(|c| c.name.as_str()), Some("Odin"));
        assert!(db.get(8).is_none());
        assert_eq!(db.by_name("Gesper").map(|c| c.id), Some(7));
        let ids: Vec<u32> = db.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![7, 40]);
    }

    #[test]
    fn level_filter_keeps_id_order() {
        let json = r#"[
            {"id":3,"name":"Ochu","level":3,"top":5,"right":6,"bottom":3,"left":3},
            {"id":1,"name":"Geezard","level":1,"top":1,"right":4,"bottom":5,"left":1},
            {"id":2,"name":"Griever","level":9,"top":9,"right":9,"bottom":9,"left":9,"element":null}
        ]"#;
        let db = parse_cards_json(json).unwrap();
        let ids: Vec<u32> = db.up_to_level(5).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(db.by_name("Griever").map(|c| c.total_rank()), Some(36));
    }
}
