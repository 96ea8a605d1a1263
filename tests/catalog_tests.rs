use anyhow::Result;

use matchday::catalog::{Catalog, LeagueEntry, TeamEntry, MAX_LEAGUES};
use matchday::errors::SelectionError;
use matchday::flags::GLOBE;

fn league_entry_json(id: u64, name: &str) -> String {
    format!(
        r#"{{
            "league": {{ "id": {id}, "name": "{name}" }},
            "country": {{ "name": "England", "code": "GB" }},
            "seasons": [ {{ "year": 2021 }}, {{ "year": 2019 }}, {{ "year": 2020 }} ]
        }}"#
    )
}

/// League entries map into records with the min/max season year range
#[test]
fn test_league_entry_mapping() -> Result<()> {
    let entry: LeagueEntry = serde_json::from_str(&league_entry_json(39, "Premier League"))?;
    let catalog = Catalog::from_entries(vec![entry]);

    let league = catalog.find_league_by_id(39).expect("league should exist");
    assert_eq!(league.name, "Premier League");
    assert_eq!(league.country, "England");
    assert_eq!(league.first_year, 2019);
    assert_eq!(league.last_year, 2021);
    assert_eq!(league.flag, "\u{1F1EC}\u{1F1E7}");
    Ok(())
}

/// International competitions under the World sentinel get the globe symbol
#[test]
fn test_world_league_gets_globe() -> Result<()> {
    let json = r#"{
        "league": { "id": 1, "name": "World Cup" },
        "country": { "name": "World", "code": null },
        "seasons": [ { "year": 2018 }, { "year": 2022 } ]
    }"#;
    let entry: LeagueEntry = serde_json::from_str(json)?;
    let catalog = Catalog::from_entries(vec![entry]);

    assert_eq!(catalog.find_league_by_id(1).unwrap().flag, GLOBE);
    Ok(())
}

/// Only the first ten API results are kept, in API order
#[test]
fn test_catalog_keeps_first_ten_leagues() -> Result<()> {
    let entries: Vec<LeagueEntry> = (1..=12)
        .map(|id| serde_json::from_str(&league_entry_json(id, &format!("League {id}"))))
        .collect::<std::result::Result<_, _>>()?;

    let catalog = Catalog::from_entries(entries);
    assert_eq!(catalog.leagues().len(), MAX_LEAGUES);
    assert_eq!(catalog.leagues()[0].id, 1);
    assert_eq!(catalog.leagues()[MAX_LEAGUES - 1].id, 10);
    assert!(catalog.find_league_by_id(11).is_err());
    Ok(())
}

/// Entries without seasons offer nothing to select and are skipped
#[test]
fn test_league_without_seasons_is_skipped() -> Result<()> {
    let json = r#"{
        "league": { "id": 7, "name": "Dormant League" },
        "country": { "name": "England", "code": "GB" },
        "seasons": []
    }"#;
    let entry: LeagueEntry = serde_json::from_str(json)?;
    let catalog = Catalog::from_entries(vec![entry]);

    assert!(catalog.is_empty());
    Ok(())
}

/// Lookup of an absent league id fails with NotFound
#[test]
fn test_find_league_by_id_not_found() {
    let catalog = Catalog::default();
    assert_eq!(
        catalog.find_league_by_id(39).err(),
        Some(SelectionError::LeagueNotFound(39))
    );
}

/// Team entries parse into id/name pairs
#[test]
fn test_team_entry_parsing() -> Result<()> {
    let json = r#"{ "team": { "id": 42, "name": "Arsenal" } }"#;
    let entry: TeamEntry = serde_json::from_str(json)?;
    assert_eq!(entry.team.id, 42);
    assert_eq!(entry.team.name, "Arsenal");
    Ok(())
}
