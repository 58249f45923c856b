//! Challenge model built from the frozen completion table
//!
//! The table rows are flat (`EC<challenge>x<level>` in spreadsheet order).
//! [`build_challenges`] folds them into exactly [`CHALLENGE_COUNT`] challenges,
//! resolving ditto-marked TT values and inferring both split classifications
//! from the selected time studies.

use crate::data::RAW_COMPLETIONS;
use crate::error::{EcError, EcResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of Eternity Challenges; every id in `1..=CHALLENGE_COUNT` gets a challenge
pub const CHALLENGE_COUNT: u8 = 12;

/// Lowest time-study id kept by the extractor
pub const MIN_STUDY: u16 = 11;

/// Highest time-study id kept by the extractor
pub const MAX_STUDY: u16 = 234;

/// TT cell marker meaning "same as the row above"
pub const DITTO_MARK: &str = "\"";

/// Placeholder for completions without notes
pub const NO_NOTES: &str = "-";

//==============================================================================
// Raw table rows
//==============================================================================

/// One spreadsheet row as stored in the literal table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCompletion<'a> {
    /// `EC<challenge>x<level>`, e.g. `EC4x2`
    pub name: &'a str,
    pub notes: &'a str,
    /// IP required to unlock; display only
    pub ip_req: &'a str,
    /// Time theorems required; empty or [`DITTO_MARK`] repeats the previous row
    pub tt: &'a str,
    /// Visible time studies, in column order
    pub studies: &'a [u16],
}

//==============================================================================
// Split classifications
//==============================================================================

/// Which dimension path (studies 71/72/73) the build takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionSplit {
    Antimatter,
    Infinity,
    Time,
}

impl DimensionSplit {
    /// Short badge label
    pub fn label(self) -> &'static str {
        match self {
            DimensionSplit::Antimatter => "AM",
            DimensionSplit::Infinity => "Inf",
            DimensionSplit::Time => "Time",
        }
    }
}

impl fmt::Display for DimensionSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which pace path (studies 121/122/123) the build takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceSplit {
    Active,
    Passive,
    Idle,
}

impl PaceSplit {
    /// Short badge label
    pub fn label(self) -> &'static str {
        match self {
            PaceSplit::Active => "Active",
            PaceSplit::Passive => "Passive",
            PaceSplit::Idle => "Idle",
        }
    }
}

impl fmt::Display for PaceSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detect the dimension split; checked in order 71, 72, 73, defaulting to antimatter
pub fn detect_dimension_split(studies: &[u16]) -> DimensionSplit {
    const SENTINELS: [(u16, DimensionSplit); 3] = [
        (71, DimensionSplit::Antimatter),
        (72, DimensionSplit::Infinity),
        (73, DimensionSplit::Time),
    ];
    first_sentinel(studies, &SENTINELS).unwrap_or(DimensionSplit::Antimatter)
}

/// Detect the pace split; checked in order 121, 122, 123, defaulting to active
pub fn detect_pace_split(studies: &[u16]) -> PaceSplit {
    const SENTINELS: [(u16, PaceSplit); 3] = [
        (121, PaceSplit::Active),
        (122, PaceSplit::Passive),
        (123, PaceSplit::Idle),
    ];
    first_sentinel(studies, &SENTINELS).unwrap_or(PaceSplit::Active)
}

// Priority follows the sentinel order, not the order studies appear in.
fn first_sentinel<T: Copy>(studies: &[u16], sentinels: &[(u16, T)]) -> Option<T> {
    sentinels
        .iter()
        .find(|(id, _)| studies.contains(id))
        .map(|(_, split)| *split)
}

//==============================================================================
// Challenges
//==============================================================================

/// One completion level of a challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Completion level (1-5)
    pub level: u8,
    pub notes: String,
    pub ip_req: String,
    /// TT with ditto marks already resolved
    pub tt: String,
    pub dimension_split: DimensionSplit,
    pub pace_split: PaceSplit,
    pub studies: Vec<u16>,
}

/// An Eternity Challenge and its completions, ordered by level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Challenge id (1-12)
    pub id: u8,
    pub completions: Vec<Completion>,
}

impl Challenge {
    /// True when completions disagree on the dimension split
    pub fn has_dimension_variation(&self) -> bool {
        self.varies_by(|c| c.dimension_split)
    }

    /// True when completions disagree on the pace split
    pub fn has_pace_variation(&self) -> bool {
        self.varies_by(|c| c.pace_split)
    }

    fn varies_by<T: PartialEq>(&self, key: impl Fn(&Completion) -> T) -> bool {
        match self.completions.split_first() {
            Some((first, rest)) => {
                let first = key(first);
                rest.iter().any(|c| key(c) != first)
            }
            None => false,
        }
    }
}

//==============================================================================
// Completion names
//==============================================================================

/// Parser for `EC<challenge>x<level>` names.
///
/// Compile once and reuse for every row. Digits are ASCII only.
#[derive(Debug, Clone)]
pub struct CompletionNames {
    pattern: Regex,
}

impl CompletionNames {
    pub fn new() -> EcResult<Self> {
        let pattern = Regex::new(r"^EC([0-9]+)x([0-9]+)$")?;
        Ok(Self { pattern })
    }

    /// Whether `name` has the shape of a completion name, ids unchecked
    pub fn is_match(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Parse into `(challenge, level)`; the challenge must be in `1..=CHALLENGE_COUNT`
    pub fn parse(&self, name: &str) -> EcResult<(u8, u8)> {
        let caps = self
            .pattern
            .captures(name)
            .ok_or_else(|| EcError::InvalidName(name.to_string()))?;

        let challenge: u8 = caps[1]
            .parse()
            .map_err(|_| EcError::InvalidName(name.to_string()))?;
        let level: u8 = caps[2]
            .parse()
            .map_err(|_| EcError::InvalidName(format!("{} (level out of range)", name)))?;

        if !(1..=CHALLENGE_COUNT).contains(&challenge) {
            return Err(EcError::InvalidName(format!(
                "{} (challenge must be 1-{})",
                name, CHALLENGE_COUNT
            )));
        }

        Ok((challenge, level))
    }
}

/// Build all challenges from raw rows given in spreadsheet order.
///
/// TT ditto marks are resolved against the previous row in the order given,
/// before rows are grouped. Any malformed name fails the whole build.
pub fn build_challenges<'a, I>(rows: I) -> EcResult<Vec<Challenge>>
where
    I: IntoIterator<Item = RawCompletion<'a>>,
{
    let names = CompletionNames::new()?;
    let mut buckets: Vec<Vec<Completion>> = vec![Vec::new(); CHALLENGE_COUNT as usize];
    let mut last_tt = String::new();

    for raw in rows {
        let (challenge, level) = names.parse(raw.name)?;

        if !(raw.tt.is_empty() || raw.tt == DITTO_MARK) {
            last_tt = raw.tt.to_string();
        }

        buckets[usize::from(challenge - 1)].push(Completion {
            level,
            notes: raw.notes.to_string(),
            ip_req: raw.ip_req.to_string(),
            tt: last_tt.clone(),
            dimension_split: detect_dimension_split(raw.studies),
            pace_split: detect_pace_split(raw.studies),
            studies: raw.studies.to_vec(),
        });
    }

    let challenges = buckets
        .into_iter()
        .zip(1..=CHALLENGE_COUNT)
        .map(|(mut completions, id)| {
            completions.sort_by_key(|c| c.level);
            Challenge { id, completions }
        })
        .collect();

    Ok(challenges)
}

/// Build challenges from the compiled table.
///
/// Call once and pass the result around by reference.
pub fn challenges() -> EcResult<Vec<Challenge>> {
    build_challenges(RAW_COMPLETIONS.iter().copied())
}
