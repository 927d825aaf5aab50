//! Teams command - Render the saved team board

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::Path;

use crate::config;
use crate::store::TeamBoard;

/// Execute the teams command and return formatted output
pub fn execute(data_dir: &Path) -> Result<String> {
    let mut board = TeamBoard::new(config::teams_path(data_dir), config::matchups_path(data_dir));
    board
        .load()
        .with_context(|| format!("Failed to load team board from: {}", data_dir.display()))?;

    if board.is_empty() {
        return Ok("No saved teams found.".to_string());
    }

    let mut output = String::new();

    let mut roster = Table::new();
    roster
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    roster.set_header(vec![
        Cell::new("Team"),
        Cell::new("Name"),
        Cell::new("Type 1"),
        Cell::new("Type 2"),
        Cell::new("Dex"),
        Cell::new("Extra"),
    ]);
    for member in board.teams() {
        roster.add_row(vec![
            Cell::new(&member.team_number),
            Cell::new(&member.name),
            Cell::new(&member.type1),
            Cell::new(&member.type2),
            Cell::new(&member.dex_num),
            Cell::new(&member.extra),
        ]);
    }
    output.push_str(&format!("Teams ({}):\n{}\n", board.teams().len(), roster));

    if !board.matchups().is_empty() {
        let mut grid = Table::new();
        grid.load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);
        grid.set_header(vec![
            Cell::new("P1 Dex"),
            Cell::new("P1 Name"),
            Cell::new("P1 Types"),
            Cell::new("P2 Dex"),
            Cell::new("P2 Name"),
            Cell::new("P2 Types"),
        ]);
        for m in board.matchups() {
            grid.add_row(vec![
                Cell::new(&m.p1_dex),
                Cell::new(&m.p1_name),
                Cell::new(join_types(&m.p1_type1, &m.p1_type2)),
                Cell::new(&m.p2_dex),
                Cell::new(&m.p2_name),
                Cell::new(join_types(&m.p2_type1, &m.p2_type2)),
            ]);
        }
        output.push_str(&format!(
            "\nMatchups ({}):\n{}",
            board.matchups().len(),
            grid
        ));
    }

    Ok(output)
}

fn join_types(type1: &str, type2: &str) -> String {
    if type2.is_empty() {
        type1.to_string()
    } else {
        format!("{type1}/{type2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Matchup, TeamMember};
    use tempfile::tempdir;

    #[test]
    fn test_empty_board_message() {
        let tmp = tempdir().unwrap();
        let output = execute(tmp.path()).unwrap();
        assert_eq!(output, "No saved teams found.");
    }

    #[test]
    fn test_board_renders_both_tables() {
        let tmp = tempdir().unwrap();
        let mut board = TeamBoard::new(
            config::teams_path(tmp.path()),
            config::matchups_path(tmp.path()),
        );
        board
            .save(
                vec![TeamMember {
                    team_number: "1".to_string(),
                    name: "Charmander".to_string(),
                    type1: "Fire".to_string(),
                    type2: String::new(),
                    dex_num: "4".to_string(),
                    extra: String::new(),
                }],
                vec![Matchup {
                    p1_dex: "4".to_string(),
                    p1_name: "Charmander".to_string(),
                    p1_type1: "Fire".to_string(),
                    p1_type2: String::new(),
                    p2_dex: "7".to_string(),
                    p2_name: "Squirtle".to_string(),
                    p2_type1: "Water".to_string(),
                    p2_type2: String::new(),
                }],
            )
            .unwrap();

        let output = execute(tmp.path()).unwrap();
        assert!(output.contains("Teams (1):"));
        assert!(output.contains("Charmander"));
        assert!(output.contains("Matchups (1):"));
        assert!(output.contains("Squirtle"));
    }

    #[test]
    fn test_join_types() {
        assert_eq!(join_types("Fire", ""), "Fire");
        assert_eq!(join_types("Fire", "Flying"), "Fire/Flying");
    }
}
