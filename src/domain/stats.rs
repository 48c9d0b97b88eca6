use serde::Serialize;

use super::player::Player;
use super::team::Team;

/// Ladder counters for a team, passed through from storage untouched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLadder {
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub points: i64,
    pub games_played: i64,
}

/// The roster's leading try scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTryScorer {
    pub id: i64,
    pub name: String,
    pub tries: i64,
}

/// Totals and per-game averages over a team's current roster.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterTotals {
    pub total_tries: i64,
    pub total_tackles: i64,
    pub total_carries: i64,
    pub average_tries: f64,
    pub average_tackles: f64,
    pub average_carries: f64,
    pub top_try_scorer: Option<TopTryScorer>,
}

/// Combined statistics view for one team.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsReport {
    pub team_stats: TeamLadder,
    pub player_stats: RosterTotals,
}

/// Statistics view for one player, with games played joined in from the
/// player's team.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsReport {
    pub games_played: i64,
    pub tries: i64,
    pub tackles: i64,
    pub carries: i64,
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the full statistics report for a team and its current roster.
///
/// Sums are taken over the roster as passed in; averages divide by the
/// team's games played, short-circuiting to exactly 0 when no games have
/// been played. The top try scorer is the first player in roster order
/// holding the maximum tries value, and is absent for an empty roster.
/// Pure function; fetch-fresh and recompute on every call.
pub fn team_stats_report(team: &Team, roster: &[Player]) -> TeamStatsReport {
    let total_tries: i64 = roster.iter().map(Player::tries).sum();
    let total_tackles: i64 = roster.iter().map(Player::tackles).sum();
    let total_carries: i64 = roster.iter().map(Player::carries).sum();

    let games_played = team.games_played();
    let per_game = |total: i64| {
        if games_played > 0 {
            round2(total as f64 / games_played as f64)
        } else {
            0.0
        }
    };

    // Strict "greater than" keeps the first player on ties.
    let mut top: Option<&Player> = None;
    for player in roster {
        if top.map_or(true, |best| player.tries() > best.tries()) {
            top = Some(player);
        }
    }

    TeamStatsReport {
        team_stats: TeamLadder {
            wins: team.wins(),
            losses: team.losses(),
            draws: team.draws(),
            points: team.points(),
            games_played,
        },
        player_stats: RosterTotals {
            total_tries,
            total_tackles,
            total_carries,
            average_tries: per_game(total_tries),
            average_tackles: per_game(total_tackles),
            average_carries: per_game(total_carries),
            top_try_scorer: top.map(|p| TopTryScorer {
                id: p.id(),
                name: p.full_name(),
                tries: p.tries(),
            }),
        },
    }
}

/// Computes the flat statistics view for one player joined with their team.
pub fn player_stats_report(player: &Player, team: &Team) -> PlayerStatsReport {
    PlayerStatsReport {
        games_played: team.games_played(),
        tries: player.tries(),
        tackles: player.tackles(),
        carries: player.carries(),
    }
}
