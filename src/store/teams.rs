//! Team board
//!
//! The team-tracking side of the app: two flat tables, `teams.csv` and
//! `matchups.csv`, saved and loaded together as one board. Unlike the
//! contact table there is no per-row identity; a save replaces the whole
//! board with whatever the caller sends.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::csv_file;
use super::error::StoreError;

/// Column order in teams.csv
pub const TEAMS_HEADER: [&str; 6] = ["TeamNumber", "Name", "Type1", "Type2", "DexNum", "Extra"];

/// Column order in matchups.csv
pub const MATCHUPS_HEADER: [&str; 8] = [
    "P1Dex", "P1Name", "P1Type1", "P1Type2", "P2Dex", "P2Name", "P2Type1", "P2Type2",
];

/// One roster entry; `team_number` says which side it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(rename = "TeamNumber")]
    pub team_number: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Type1")]
    pub type1: String,

    #[serde(rename = "Type2")]
    pub type2: String,

    #[serde(rename = "DexNum")]
    pub dex_num: String,

    #[serde(rename = "Extra")]
    pub extra: String,
}

/// One matchup row pairing a pick from each side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    #[serde(rename = "P1Dex")]
    pub p1_dex: String,

    #[serde(rename = "P1Name")]
    pub p1_name: String,

    #[serde(rename = "P1Type1")]
    pub p1_type1: String,

    #[serde(rename = "P1Type2")]
    pub p1_type2: String,

    #[serde(rename = "P2Dex")]
    pub p2_dex: String,

    #[serde(rename = "P2Name")]
    pub p2_name: String,

    #[serde(rename = "P2Type1")]
    pub p2_type1: String,

    #[serde(rename = "P2Type2")]
    pub p2_type2: String,
}

/// CSV-backed team board: the full roster plus its matchup grid
#[derive(Debug)]
pub struct TeamBoard {
    teams_path: PathBuf,
    matchups_path: PathBuf,
    teams: Vec<TeamMember>,
    matchups: Vec<Matchup>,
}

impl TeamBoard {
    /// Create an empty board bound to its two files, without touching disk
    pub fn new<P: AsRef<Path>>(teams_path: P, matchups_path: P) -> Self {
        Self {
            teams_path: teams_path.as_ref().to_path_buf(),
            matchups_path: matchups_path.as_ref().to_path_buf(),
            teams: Vec::new(),
            matchups: Vec::new(),
        }
    }

    /// Load both tables from disk, replacing the in-memory board
    ///
    /// Absent files are empty tables. On failure the board is left empty.
    pub fn load(&mut self) -> Result<(), StoreError> {
        self.teams.clear();
        self.matchups.clear();

        if self.teams_path.exists() {
            let rows = csv_file::read_rows(&self.teams_path, &TEAMS_HEADER)?;
            self.teams = rows
                .iter()
                .map(|row| TeamMember {
                    team_number: row.get(0).unwrap_or("").to_string(),
                    name: row.get(1).unwrap_or("").to_string(),
                    type1: row.get(2).unwrap_or("").to_string(),
                    type2: row.get(3).unwrap_or("").to_string(),
                    dex_num: row.get(4).unwrap_or("").to_string(),
                    extra: row.get(5).unwrap_or("").to_string(),
                })
                .collect();
        }

        if self.matchups_path.exists() {
            let rows = csv_file::read_rows(&self.matchups_path, &MATCHUPS_HEADER)?;
            self.matchups = rows
                .iter()
                .map(|row| Matchup {
                    p1_dex: row.get(0).unwrap_or("").to_string(),
                    p1_name: row.get(1).unwrap_or("").to_string(),
                    p1_type1: row.get(2).unwrap_or("").to_string(),
                    p1_type2: row.get(3).unwrap_or("").to_string(),
                    p2_dex: row.get(4).unwrap_or("").to_string(),
                    p2_name: row.get(5).unwrap_or("").to_string(),
                    p2_type1: row.get(6).unwrap_or("").to_string(),
                    p2_type2: row.get(7).unwrap_or("").to_string(),
                })
                .collect();
        }

        Ok(())
    }

    /// Replace the board with new contents and rewrite both files
    #[allow(dead_code)]
    pub fn save(&mut self, teams: Vec<TeamMember>, matchups: Vec<Matchup>) -> Result<(), StoreError> {
        csv_file::write_rows(
            &self.teams_path,
            &TEAMS_HEADER,
            teams.iter().map(|t| {
                vec![
                    t.team_number.clone(),
                    t.name.clone(),
                    t.type1.clone(),
                    t.type2.clone(),
                    t.dex_num.clone(),
                    t.extra.clone(),
                ]
            }),
        )?;

        csv_file::write_rows(
            &self.matchups_path,
            &MATCHUPS_HEADER,
            matchups.iter().map(|m| {
                vec![
                    m.p1_dex.clone(),
                    m.p1_name.clone(),
                    m.p1_type1.clone(),
                    m.p1_type2.clone(),
                    m.p2_dex.clone(),
                    m.p2_name.clone(),
                    m.p2_type1.clone(),
                    m.p2_type2.clone(),
                ]
            }),
        )?;

        self.teams = teams;
        self.matchups = matchups;
        Ok(())
    }

    /// Roster rows in saved order
    pub fn teams(&self) -> &[TeamMember] {
        &self.teams
    }

    /// Matchup rows in saved order
    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    /// Whether neither table has any rows
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.matchups.is_empty()
    }
}
