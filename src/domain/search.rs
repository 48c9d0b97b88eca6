use std::str::FromStr;

use serde::Serialize;

use super::player::Player;
use super::team::Team;

/// Which entity table a search hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Player,
    Team,
}

impl FromStr for EntityKind {
    type Err = String;

    /// Case-insensitive: "player", "PLAYER" and "Player" are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("player") {
            Ok(EntityKind::Player)
        } else if s.eq_ignore_ascii_case("team") {
            Ok(EntityKind::Team)
        } else {
            Err(format!(
                "Invalid type parameter: {}. Expected 'Player' or 'Team'.",
                s
            ))
        }
    }
}

/// One row in the merged search result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}

/// Matches players and teams against a free-text query and merges the hits
/// into one list sorted ascending by name.
///
/// Players match on "first last" display name, teams on team name, both as
/// case-insensitive unanchored substrings. The sort key is the name alone,
/// compared byte-wise (not locale-aware); the sort is stable, so hits with
/// equal names keep concatenation order, players before teams.
///
/// An empty or whitespace-only query is invalid input, distinct from a
/// valid query that happens to match nothing.
pub fn search_entities(
    query: &str,
    players: &[Player],
    teams: &[Team],
) -> Result<Vec<SearchHit>, String> {
    if query.trim().is_empty() {
        return Err("Query cannot be empty".to_string());
    }

    let needle = query.to_lowercase();

    let mut hits: Vec<SearchHit> = players
        .iter()
        .filter(|p| p.full_name().to_lowercase().contains(&needle))
        .map(|p| SearchHit {
            id: p.id(),
            name: p.full_name(),
            kind: EntityKind::Player,
        })
        .collect();

    hits.extend(
        teams
            .iter()
            .filter(|t| t.name().to_lowercase().contains(&needle))
            .map(|t| SearchHit {
                id: t.id(),
                name: t.name().to_string(),
                kind: EntityKind::Team,
            }),
    );

    hits.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(hits)
}

/// Roster entry inside a team detail projection.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub id: i64,
    pub name: String,
}

/// Detail projection for a player hit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub tries: i64,
    pub tackles: i64,
    pub carries: i64,
    pub team_name: Option<String>,
}

/// Detail projection for a team hit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetails {
    pub id: i64,
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub points: i64,
    pub players: Vec<RosterEntry>,
}

/// Builds the detail projection for a player, resolving the team name when
/// the reference is available.
pub fn player_details(player: &Player, team: Option<&Team>) -> PlayerDetails {
    PlayerDetails {
        id: player.id(),
        name: player.full_name(),
        position: player.position().to_string(),
        tries: player.tries(),
        tackles: player.tackles(),
        carries: player.carries(),
        team_name: team.map(|t| t.name().to_string()),
    }
}

/// Builds the detail projection for a team and its roster.
pub fn team_details(team: &Team, roster: &[Player]) -> TeamDetails {
    TeamDetails {
        id: team.id(),
        name: team.name().to_string(),
        wins: team.wins(),
        losses: team.losses(),
        draws: team.draws(),
        points: team.points(),
        players: roster
            .iter()
            .map(|p| RosterEntry {
                id: p.id(),
                name: p.full_name(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: i64, first: &str, last: &str) -> Player {
        Player::from_persistence(
            id,
            first.to_string(),
            last.to_string(),
            "Prop (8)".to_string(),
            1,
            2,
            3,
            1,
        )
    }

    fn team(id: i64, name: &str) -> Team {
        Team::from_persistence(id, name.to_string(), "Coach".to_string(), 0, 0, 0, 0, 0)
    }

    #[test]
    fn empty_query_is_invalid_input() {
        let result = search_entities("", &[], &[]);

        assert!(result.is_err());
    }

    #[test]
    fn whitespace_query_is_invalid_input() {
        let result = search_entities("   ", &[], &[]);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("empty"));
    }

    #[test]
    fn no_match_is_an_empty_success() {
        let players = vec![player(1, "Liam", "Tan")];
        let teams = vec![team(1, "Wolves")];

        let hits = search_entities("zzz", &players, &teams).unwrap();

        assert!(hits.is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let players = vec![player(1, "Liam", "Tan")];

        let lower = search_entities("tan", &players, &[]).unwrap();
        let upper = search_entities("TAN", &players, &[]).unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].name, "Liam Tan");
    }

    #[test]
    fn player_matches_across_name_boundary() {
        // Substring spans the space between first and last name.
        let players = vec![player(1, "Liam", "Tan")];

        let hits = search_entities("m ta", &players, &[]).unwrap();

        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn merged_hits_sort_ascending_by_name() {
        let players = vec![player(1, "Zara", "Marsh"), player(2, "Amy", "Ma")];
        let teams = vec![team(3, "Mid FC")];

        let hits = search_entities("m", &players, &teams).unwrap();

        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Amy Ma", "Mid FC", "Zara Marsh"]);
        assert_eq!(hits[1].kind, EntityKind::Team);
    }

    #[test]
    fn equal_names_keep_players_before_teams() {
        let players = vec![player(1, "Mid", "FC")];
        let teams = vec![team(2, "Mid FC")];

        let hits = search_entities("mid", &players, &teams).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kind, EntityKind::Player);
        assert_eq!(hits[1].kind, EntityKind::Team);
    }

    #[test]
    fn entity_kind_parses_case_insensitively() {
        assert_eq!("Player".parse::<EntityKind>().unwrap(), EntityKind::Player);
        assert_eq!("player".parse::<EntityKind>().unwrap(), EntityKind::Player);
        assert_eq!("TEAM".parse::<EntityKind>().unwrap(), EntityKind::Team);
        assert!("Coach".parse::<EntityKind>().is_err());
    }

    #[test]
    fn player_details_resolve_team_name() {
        let p = player(1, "Liam", "Tan");
        let t = team(1, "Wolves");

        let with_team = player_details(&p, Some(&t));
        let without_team = player_details(&p, None);

        assert_eq!(with_team.team_name.as_deref(), Some("Wolves"));
        assert!(without_team.team_name.is_none());
    }

    #[test]
    fn team_details_list_roster_names() {
        let t = team(1, "Wolves");
        let roster = vec![player(10, "Liam", "Tan"), player(11, "Amy", "A")];

        let details = team_details(&t, &roster);

        assert_eq!(details.players.len(), 2);
        assert_eq!(details.players[0].name, "Liam Tan");
        assert_eq!(details.players[1].id, 11);
    }
}
