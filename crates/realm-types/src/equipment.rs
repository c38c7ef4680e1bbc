//! Equipment attribute derivation from oracle-supplied random words.
//!
//! Every roll reduces a 256-bit word modulo 1001 and maps the result onto
//! contiguous buckets. The last category and the last rarity tier are one
//! value wide (1 in 1001), an intentional extreme-rarity tail.

use primitive_types::U256;

use crate::error::RollError;

pub const RANDOM_WORDS_PER_EQUIPMENT: usize = 3;
pub const CATEGORY_ROLL_RANGE: u64 = 1_001;
pub const RARITY_ROLL_RANGE: u64 = 1_001;
pub const AFFIX_ROLL_RANGE: u64 = 1_001;
pub const CATEGORY_COUNT: u8 = 11;

const CATEGORY_BUCKET_WIDTH: u64 = 100;
const RARITY_WIDTHS: [u64; 6] = [500, 300, 140, 50, 10, 1];
const RARITY_MULTI: [u32; 6] = [10_000, 11_000, 13_000, 16_000, 20_000, 25_000];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum EquipmentCategory {
    Necklace = 0,
    Helmet = 1,
    Armor = 2,
    Gloves = 3,
    Boots = 4,
    Belt = 5,
    Earring = 6,
    Bracelet = 7,
    Sword = 8,
    Shield = 9,
    Relic = 10,
}

impl EquipmentCategory {
    const ALL: [Self; CATEGORY_COUNT as usize] = [
        Self::Necklace,
        Self::Helmet,
        Self::Armor,
        Self::Gloves,
        Self::Boots,
        Self::Belt,
        Self::Earring,
        Self::Bracelet,
        Self::Sword,
        Self::Shield,
        Self::Relic,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Necklace => "necklace",
            Self::Helmet => "helmet",
            Self::Armor => "armor",
            Self::Gloves => "gloves",
            Self::Boots => "boots",
            Self::Belt => "belt",
            Self::Earring => "earring",
            Self::Bracelet => "bracelet",
            Self::Sword => "sword",
            Self::Shield => "shield",
            Self::Relic => "relic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
}

impl Rarity {
    const ALL: [Self; 6] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
        Self::Mythic,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Mythic => "mythic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentAttributes {
    pub category: EquipmentCategory,
    pub rarity: Rarity,
    pub affixes: [bool; 2],
}

fn reduce(word: U256, range: u64) -> u64 {
    (word % U256::from(range)).low_u64()
}

pub fn roll_category(word: U256) -> EquipmentCategory {
    let roll = reduce(word, CATEGORY_ROLL_RANGE);
    let index = (roll / CATEGORY_BUCKET_WIDTH) as u8;
    EquipmentCategory::from_index(index).unwrap_or(EquipmentCategory::Relic)
}

pub fn roll_rarity(word: U256) -> Rarity {
    let roll = reduce(word, RARITY_ROLL_RANGE);
    let mut threshold = 0;
    for (tier, width) in Rarity::ALL.iter().zip(RARITY_WIDTHS) {
        threshold += width;
        if roll < threshold {
            return *tier;
        }
    }
    Rarity::Mythic
}

/// `< 500` sets flag 0 only, `< 1000` sets flag 1 only, `1000` sets both.
pub fn roll_affixes(word: U256) -> [bool; 2] {
    let roll = reduce(word, AFFIX_ROLL_RANGE);
    if roll < 500 {
        [true, false]
    } else if roll < 1_000 {
        [false, true]
    } else {
        [true, true]
    }
}

/// Derives category, rarity and affixes from exactly three random words.
pub fn derive_attributes(random_words: &[U256]) -> Result<EquipmentAttributes, RollError> {
    let [category, rarity, affixes] = random_words else {
        return Err(RollError::InvalidRandomWordsLength {
            expected: RANDOM_WORDS_PER_EQUIPMENT,
            actual: random_words.len(),
        });
    };
    Ok(EquipmentAttributes {
        category: roll_category(*category),
        rarity: roll_rarity(*rarity),
        affixes: roll_affixes(*affixes),
    })
}

/// Stat multiplier for a rarity tier, parts-per-10000.
pub fn rarity_multi(rarity: Rarity) -> u32 {
    RARITY_MULTI[rarity.index() as usize]
}
