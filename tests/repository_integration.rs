//! Repository integration tests
//!
//! Exercise the SQLite repository implementations directly against an
//! in-memory database: persistence round-trips, referential checks,
//! cascade and restrict behavior on team deletion.

use scrumleague_api::domain::matches::Match;
use scrumleague_api::domain::player::Player;
use scrumleague_api::domain::repositories::{
    MatchRepository, PlayerRepository, RepositoryError, TeamRepository, TeamsheetRepository,
};
use scrumleague_api::domain::team::Team;
use scrumleague_api::domain::teamsheet::{Teamsheet, TeamsheetPlayer};
use scrumleague_api::infrastructure::db;
use scrumleague_api::infrastructure::repositories::{
    SqliteMatchRepository, SqlitePlayerRepository, SqliteTeamRepository,
    SqliteTeamsheetRepository,
};
use sqlx::SqlitePool;

async fn setup_pool() -> SqlitePool {
    db::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

fn team(name: &str, games_played: i64) -> Team {
    Team::new(name.to_string(), "Coach".to_string(), 0, 0, 0, 0, games_played).unwrap()
}

fn player(team_id: i64, first: &str, last: &str, tries: i64) -> Player {
    Player::new(
        first.to_string(),
        last.to_string(),
        "Prop (8)".to_string(),
        tries,
        0,
        0,
        team_id,
    )
    .unwrap()
}

#[tokio::test]
async fn team_create_assigns_id_and_roundtrips() {
    let pool = setup_pool().await;
    let repo = SqliteTeamRepository::new(pool);

    let stored = repo.create(&team("Wolves", 7)).await.unwrap();
    assert!(stored.id() > 0);

    let found = repo.find_by_id(stored.id()).await.unwrap().unwrap();
    assert_eq!(found.name(), "Wolves");
    assert_eq!(found.games_played(), 7);

    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn team_update_replaces_all_fields() {
    let pool = setup_pool().await;
    let repo = SqliteTeamRepository::new(pool);

    let stored = repo.create(&team("Wolves", 0)).await.unwrap();
    let updated = Team::from_persistence(
        stored.id(),
        "Wolves RLFC".to_string(),
        "New Coach".to_string(),
        3,
        1,
        0,
        6,
        4,
    );
    repo.update(&updated).await.unwrap();

    let found = repo.find_by_id(stored.id()).await.unwrap().unwrap();
    assert_eq!(found.name(), "Wolves RLFC");
    assert_eq!(found.coach(), "New Coach");
    assert_eq!(found.points(), 6);
}

#[tokio::test]
async fn updating_missing_team_is_not_found() {
    let pool = setup_pool().await;
    let repo = SqliteTeamRepository::new(pool);

    let ghost = Team::from_persistence(
        9999,
        "Phantoms".to_string(),
        "Coach".to_string(),
        0,
        0,
        0,
        0,
        0,
    );
    let err = repo.update(&ghost).await.unwrap_err();

    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn find_with_players_returns_roster_in_stored_order() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let players = SqlitePlayerRepository::new(pool);

    let stored = teams.create(&team("Wolves", 2)).await.unwrap();
    players
        .create(&player(stored.id(), "Liam", "Tan", 5))
        .await
        .unwrap();
    players
        .create(&player(stored.id(), "Amy", "A", 3))
        .await
        .unwrap();

    let (found, roster) = teams.find_with_players(stored.id()).await.unwrap().unwrap();
    assert_eq!(found.id(), stored.id());
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].full_name(), "Liam Tan");
    assert_eq!(roster[1].full_name(), "Amy A");
}

#[tokio::test]
async fn player_create_rejects_missing_team() {
    let pool = setup_pool().await;
    let players = SqlitePlayerRepository::new(pool);

    let err = players
        .create(&player(999, "Liam", "Tan", 0))
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::InvalidReference(_)));
}

#[tokio::test]
async fn player_update_rejects_missing_team() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let players = SqlitePlayerRepository::new(pool);

    let stored_team = teams.create(&team("Wolves", 0)).await.unwrap();
    let stored = players
        .create(&player(stored_team.id(), "Liam", "Tan", 0))
        .await
        .unwrap();

    let moved = Player::from_persistence(
        stored.id(),
        "Liam".to_string(),
        "Tan".to_string(),
        "Prop (8)".to_string(),
        0,
        0,
        0,
        999,
    );
    let err = players.update(&moved).await.unwrap_err();

    assert!(matches!(err, RepositoryError::InvalidReference(_)));
}

#[tokio::test]
async fn player_find_with_team_joins_the_team() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let players = SqlitePlayerRepository::new(pool);

    let stored_team = teams.create(&team("Wolves", 10)).await.unwrap();
    let stored = players
        .create(&player(stored_team.id(), "Liam", "Tan", 5))
        .await
        .unwrap();

    let (found_player, found_team) = players.find_with_team(stored.id()).await.unwrap().unwrap();
    assert_eq!(found_player.tries(), 5);
    assert_eq!(found_team.games_played(), 10);

    assert!(players.find_with_team(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn player_find_all_resolves_team_names() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let players = SqlitePlayerRepository::new(pool);

    let stored_team = teams.create(&team("Wolves", 0)).await.unwrap();
    players
        .create(&player(stored_team.id(), "Liam", "Tan", 0))
        .await
        .unwrap();

    let all = players.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].1.as_deref(), Some("Wolves"));
}

#[tokio::test]
async fn deleting_team_cascades_to_players_and_teamsheets() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let players = SqlitePlayerRepository::new(pool.clone());
    let sheets = SqliteTeamsheetRepository::new(pool);

    let stored_team = teams.create(&team("Wolves", 0)).await.unwrap();
    let stored_player = players
        .create(&player(stored_team.id(), "Liam", "Tan", 0))
        .await
        .unwrap();
    let slot = TeamsheetPlayer::new(
        0,
        stored_team.id(),
        stored_player.id(),
        "Full Back (1)".to_string(),
    )
    .unwrap();
    let stored_sheet = sheets
        .create(&Teamsheet::new(stored_team.id(), vec![slot]))
        .await
        .unwrap();

    teams.delete(stored_team.id()).await.unwrap();

    assert!(players.find_by_id(stored_player.id()).await.unwrap().is_none());
    assert!(sheets.find_by_id(stored_sheet.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_team_referenced_by_match_is_restricted() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let matches = SqliteMatchRepository::new(pool);

    let home = teams.create(&team("Wolves", 0)).await.unwrap();
    let away = teams.create(&team("Tigers", 0)).await.unwrap();
    let fixture = Match::new("2024-11-15".to_string(), home.id(), away.id(), 12, 6).unwrap();
    let stored = matches.create(&fixture).await.unwrap();

    let err = teams.delete(away.id()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Restricted(_)));

    matches.delete(stored.id()).await.unwrap();
    teams.delete(away.id()).await.unwrap();
}

#[tokio::test]
async fn match_create_rejects_missing_team() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let matches = SqliteMatchRepository::new(pool);

    let home = teams.create(&team("Wolves", 0)).await.unwrap();
    let fixture = Match::new("2024-11-15".to_string(), home.id(), 999, 0, 0).unwrap();

    let err = matches.create(&fixture).await.unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidReference(_)));
}

#[tokio::test]
async fn match_roundtrip_preserves_scores_and_date() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let matches = SqliteMatchRepository::new(pool);

    let home = teams.create(&team("Wolves", 0)).await.unwrap();
    let away = teams.create(&team("Tigers", 0)).await.unwrap();
    let fixture = Match::new("2024-11-15".to_string(), home.id(), away.id(), 24, 12).unwrap();

    let stored = matches.create(&fixture).await.unwrap();
    let found = matches.find_by_id(stored.id()).await.unwrap().unwrap();

    assert_eq!(found.date(), "2024-11-15");
    assert_eq!(found.home_score(), 24);
    assert_eq!(found.away_score(), 12);
}

#[tokio::test]
async fn teamsheet_update_replaces_slot_list() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let players = SqlitePlayerRepository::new(pool.clone());
    let sheets = SqliteTeamsheetRepository::new(pool);

    let stored_team = teams.create(&team("Wolves", 0)).await.unwrap();
    let p1 = players
        .create(&player(stored_team.id(), "Liam", "Tan", 0))
        .await
        .unwrap();
    let p2 = players
        .create(&player(stored_team.id(), "Amy", "A", 0))
        .await
        .unwrap();

    let initial = Teamsheet::new(
        stored_team.id(),
        vec![
            TeamsheetPlayer::new(0, stored_team.id(), p1.id(), "Full Back (1)".to_string())
                .unwrap(),
            TeamsheetPlayer::new(0, stored_team.id(), p2.id(), "Hooker (9)".to_string()).unwrap(),
        ],
    );
    let stored_sheet = sheets.create(&initial).await.unwrap();
    assert_eq!(stored_sheet.players().len(), 2);

    let replacement = Teamsheet::from_persistence(
        stored_sheet.id(),
        stored_team.id(),
        vec![
            TeamsheetPlayer::new(0, stored_team.id(), p2.id(), "Interchange (14)".to_string())
                .unwrap(),
        ],
    );
    sheets.update(&replacement).await.unwrap();

    let found = sheets.find_by_id(stored_sheet.id()).await.unwrap().unwrap();
    assert_eq!(found.players().len(), 1);
    assert_eq!(found.players()[0].player_id(), p2.id());
    assert_eq!(found.players()[0].assigned_position(), "Interchange (14)");
}

#[tokio::test]
async fn teamsheet_find_all_groups_slots_by_sheet() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let players = SqlitePlayerRepository::new(pool.clone());
    let sheets = SqliteTeamsheetRepository::new(pool);

    let stored_team = teams.create(&team("Wolves", 0)).await.unwrap();
    let p1 = players
        .create(&player(stored_team.id(), "Liam", "Tan", 0))
        .await
        .unwrap();

    let with_slot = Teamsheet::new(
        stored_team.id(),
        vec![TeamsheetPlayer::new(0, stored_team.id(), p1.id(), "Prop (8)".to_string()).unwrap()],
    );
    sheets.create(&with_slot).await.unwrap();
    sheets
        .create(&Teamsheet::new(stored_team.id(), Vec::new()))
        .await
        .unwrap();

    let all = sheets.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].players().len(), 1);
    assert!(all[1].players().is_empty());
}

#[tokio::test]
async fn deleting_missing_rows_is_not_found() {
    let pool = setup_pool().await;
    let teams = SqliteTeamRepository::new(pool.clone());
    let players = SqlitePlayerRepository::new(pool.clone());
    let matches = SqliteMatchRepository::new(pool.clone());
    let sheets = SqliteTeamsheetRepository::new(pool);

    assert!(matches!(
        teams.delete(9999).await.unwrap_err(),
        RepositoryError::NotFound(_)
    ));
    assert!(matches!(
        players.delete(9999).await.unwrap_err(),
        RepositoryError::NotFound(_)
    ));
    assert!(matches!(
        matches.delete(9999).await.unwrap_err(),
        RepositoryError::NotFound(_)
    ));
    assert!(matches!(
        sheets.delete(9999).await.unwrap_err(),
        RepositoryError::NotFound(_)
    ));
}
