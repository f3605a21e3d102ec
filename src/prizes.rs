//! Prize table
//!
//! Bucket index to prize, mirror-symmetric around the center slot. The
//! center is the common zero-value outcome; rarity and value only grow
//! toward the edges. The engine never reads this table, callers index it
//! with the landed bucket.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rarity ladder, most common first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrizeKind {
    NoPrize,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Jackpot,
}

impl PrizeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrizeKind::NoPrize => "No Prize",
            PrizeKind::Common => "Common",
            PrizeKind::Uncommon => "Uncommon",
            PrizeKind::Rare => "Rare",
            PrizeKind::Epic => "Epic",
            PrizeKind::Legendary => "Legendary",
            PrizeKind::Jackpot => "Jackpot",
        }
    }
}

/// One bucket's prize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    /// Unique id; mirrored slots may differ here only
    pub id: String,
    pub kind: PrizeKind,
    pub label: String,
    /// Raw value (points, percent off, ... as the game layer defines it)
    pub value: u32,
    /// Bucket fill color, 0xRRGGBB
    pub color: u32,
    /// Label color, 0xRRGGBB
    pub text_color: u32,
}

/// Broken prize table invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrizeTableError {
    Empty,
    /// Length must be odd so there is a single center slot
    EvenLength(usize),
    /// Slots `left` and `len - 1 - left` differ in kind or value
    Asymmetric { left: usize, right: usize },
    /// Center slot is not the zero-value `NoPrize`
    CenterNotEmpty(usize),
    /// Rarity or value drops moving outward at this index
    RarityInversion(usize),
}

impl fmt::Display for PrizeTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrizeTableError::Empty => write!(f, "prize table is empty"),
            PrizeTableError::EvenLength(len) => {
                write!(f, "prize table needs an odd length, got {len}")
            }
            PrizeTableError::Asymmetric { left, right } => {
                write!(f, "prize slots {left} and {right} are not mirrored")
            }
            PrizeTableError::CenterNotEmpty(index) => {
                write!(f, "center slot {index} must be a zero-value no-prize")
            }
            PrizeTableError::RarityInversion(index) => {
                write!(f, "prize at slot {index} is rarer than its outer neighbour")
            }
        }
    }
}

impl std::error::Error for PrizeTableError {}

/// Ordered, symmetric bucket prizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeTable {
    prizes: Vec<Prize>,
}

/// (kind, label, value, color, text color) from the edge inward
const REFERENCE_LADDER: [(PrizeKind, &str, u32, u32, u32); 7] = [
    (PrizeKind::Jackpot, "Grand Prize", 100, 0xFFD700, 0x1A1A1A),
    (PrizeKind::Legendary, "Free Meal", 50, 0xE040FB, 0xFFFFFF),
    (PrizeKind::Epic, "Free Drink", 25, 0x7C4DFF, 0xFFFFFF),
    (PrizeKind::Rare, "Free Side", 15, 0x2979FF, 0xFFFFFF),
    (PrizeKind::Uncommon, "10% Off", 10, 0x00BFA5, 0xFFFFFF),
    (PrizeKind::Common, "5% Off", 5, 0x66BB6A, 0x1A1A1A),
    (PrizeKind::NoPrize, "Try Again", 0, 0x546E7A, 0xFFFFFF),
];

impl Default for PrizeTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl PrizeTable {
    /// The 13-slot reference table
    pub fn reference() -> Self {
        let edge_to_center = REFERENCE_LADDER.len() - 1;
        let len = edge_to_center * 2 + 1;
        let center = edge_to_center;

        let prizes = (0..len)
            .map(|index| {
                let rung = center - index.abs_diff(center);
                let (kind, label, value, color, text_color) = REFERENCE_LADDER[rung];
                let side = match index.cmp(&center) {
                    std::cmp::Ordering::Less => "-left",
                    std::cmp::Ordering::Greater => "-right",
                    std::cmp::Ordering::Equal => "",
                };
                let slug = kind.as_str().to_lowercase().replace(' ', "-");
                Prize {
                    id: format!("{slug}{side}"),
                    kind,
                    label: label.to_string(),
                    value,
                    color,
                    text_color,
                }
            })
            .collect();

        Self { prizes }
    }

    /// Build a table, checking the symmetry and rarity invariants
    pub fn new(prizes: Vec<Prize>) -> Result<Self, PrizeTableError> {
        let table = Self { prizes };
        table.validate()?;
        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let table: PrizeTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), PrizeTableError> {
        let len = self.prizes.len();
        if len == 0 {
            return Err(PrizeTableError::Empty);
        }
        if len % 2 == 0 {
            return Err(PrizeTableError::EvenLength(len));
        }

        for left in 0..len / 2 {
            let right = len - 1 - left;
            let (a, b) = (&self.prizes[left], &self.prizes[right]);
            if a.kind != b.kind || a.value != b.value {
                return Err(PrizeTableError::Asymmetric { left, right });
            }
        }

        let center = self.center_index();
        let mid = &self.prizes[center];
        if mid.kind != PrizeKind::NoPrize || mid.value != 0 {
            return Err(PrizeTableError::CenterNotEmpty(center));
        }

        // Walk from center to the left edge; the right side mirrors it
        for index in (1..=center).rev() {
            let inner = &self.prizes[index];
            let outer = &self.prizes[index - 1];
            if outer.kind < inner.kind || outer.value < inner.value {
                return Err(PrizeTableError::RarityInversion(index));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn center_index(&self) -> usize {
        self.prizes.len() / 2
    }

    /// Prize for a landed bucket
    pub fn prize_for_bucket(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
