//! Embedded word lists
//!
//! Curated vocabulary compiled into the binary.

// Include generated stopword list from build script
include!(concat!(env!("OUT_DIR"), "/stopwords.rs"));

/// Curated fill words by length, used when candidates run out
pub const FALLBACK_WORDS: &[(usize, &[&str])] = &[
    (3, &["AIR", "NPR", "WIN", "MAP", "ART"]),
    (4, &["CITY", "NEWS", "PARK", "VOTE", "FARM", "ROAD"]),
    (5, &["RIVER", "RADIO", "TRAIL", "BOARD", "MAYOR", "PIANO"]),
    (6, &["SCHOOL", "BRIDGE", "SEASON", "LEGACY"]),
    (7, &["COUNCIL", "HISTORY", "LIBRARY"]),
    (8, &["HOSPITAL", "ELECTION", "HARVESTS"]),
];

/// Words that read well as news-puzzle answers; ranked ahead of others
pub const NEWS_FRIENDLY: &[&str] = &[
    "BUDGET", "CITY", "COUNCIL", "COUNTY", "COURT", "ELECTION", "FARM", "HEALTH", "MAYOR",
    "NEWS", "PARK", "POLICE", "RADIO", "RIVER", "SCHOOL", "STATE", "STORM", "TRAIL", "VOTE",
    "VOTERS", "WATER", "WEATHER",
];

/// Generic short tokens never used as answers
pub const DENY_LIST: &[&str] = &[
    "THE", "AND", "NORTH", "SOUTH", "EAST", "WEST", "LEFT", "RIGHT", "ANY", "ONE", "TWO", "MRS",
];

/// Hand-written clues for the curated vocabulary
pub const CURATED_CLUES: &[(&str, &str)] = &[
    ("RIVER", "Flows through the region"),
    ("RADIO", "Public broadcasting medium"),
    ("CITY", "Urban area in the coverage zone"),
    ("NEWS", "What a newsroom reports"),
    ("PARK", "Green space"),
    ("AIR", "Radio waves travel through this"),
    ("NPR", "Public radio network"),
    ("WIN", "Victory"),
    ("MAP", "Atlas page"),
    ("ART", "Gallery offering"),
    ("VOTE", "Cast a ballot"),
    ("FARM", "Place with a barn and silo"),
    ("ROAD", "Street or highway"),
    ("TRAIL", "Path through the woods"),
    ("BOARD", "Group that meets to decide"),
    ("MAYOR", "City hall leader"),
    ("PIANO", "Instrument with 88 keys"),
    ("SCHOOL", "Where classes are held"),
    ("BRIDGE", "It spans a river"),
    ("SEASON", "Spring or fall, say"),
    ("LEGACY", "What one leaves behind"),
    ("COUNCIL", "Local governing body"),
    ("HISTORY", "It repeats, they say"),
    ("LIBRARY", "Place to borrow books"),
    ("HOSPITAL", "Place with an ER"),
    ("ELECTION", "Day at the polls"),
    ("HARVESTS", "Autumn gatherings on farms"),
];

/// Clue used when nothing better is known about an answer
pub const DEFAULT_CLUE: &str = "In today's coverage";

/// Stand-in for [`DEFAULT_CLUE`] when the answer appears in it
///
/// Shares no word with [`DEFAULT_CLUE`].
pub const ALTERNATE_CLUE: &str = "From the local headlines";
