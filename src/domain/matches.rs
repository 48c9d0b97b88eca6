use serde::Serialize;

/// Outcome of a match, derived from the score line
///
/// Never stored; recomputed from the scores on every read so it can never
/// drift from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchResult {
    #[serde(rename = "Home Win")]
    HomeWin,
    #[serde(rename = "Away Win")]
    AwayWin,
    Draw,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::HomeWin => "Home Win",
            MatchResult::AwayWin => "Away Win",
            MatchResult::Draw => "Draw",
        }
    }
}

/// Match entity
///
/// A fixture between two teams. Both team references must resolve at write
/// time, and a team referenced here cannot be deleted. The date is a plain
/// string, not parsed or validated.
///
/// # Invariants
/// - Scores are non-negative
#[derive(Debug, Clone)]
pub struct Match {
    id: i64,
    date: String,
    home_team_id: i64,
    away_team_id: i64,
    home_score: i64,
    away_score: i64,
}

impl Match {
    /// Creates a new Match, validating business rules. The id is assigned
    /// by the store on insert; until then it is 0.
    pub fn new(
        date: String,
        home_team_id: i64,
        away_team_id: i64,
        home_score: i64,
        away_score: i64,
    ) -> Result<Self, String> {
        if home_score < 0 || away_score < 0 {
            return Err("Scores cannot be negative".to_string());
        }

        Ok(Self {
            id: 0,
            date,
            home_team_id,
            away_team_id,
            home_score,
            away_score,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn home_team_id(&self) -> i64 {
        self.home_team_id
    }

    pub fn away_team_id(&self) -> i64 {
        self.away_team_id
    }

    pub fn home_score(&self) -> i64 {
        self.home_score
    }

    pub fn away_score(&self) -> i64 {
        self.away_score
    }

    /// Derives the outcome from the score line.
    pub fn result(&self) -> MatchResult {
        if self.home_score > self.away_score {
            MatchResult::HomeWin
        } else if self.home_score < self.away_score {
            MatchResult::AwayWin
        } else {
            MatchResult::Draw
        }
    }

    /// Reconstructs a Match from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: i64,
        date: String,
        home_team_id: i64,
        away_team_id: i64,
        home_score: i64,
        away_score: i64,
    ) -> Self {
        Self {
            id,
            date,
            home_team_id,
            away_team_id,
            home_score,
            away_score,
        }
    }
}
