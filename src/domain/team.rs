/// Team aggregate root
///
/// A club competing in the league. Owns its Players and Teamsheets
/// (one-to-many by team id); the ladder counters (wins, losses, draws,
/// points, games played) are stored as-is and passed through to the
/// stats views without recomputation.
///
/// # Invariants
/// - Name cannot be empty
/// - All ladder counters are non-negative
#[derive(Debug, Clone)]
pub struct Team {
    id: i64,
    name: String,
    coach: String,
    wins: i64,
    losses: i64,
    draws: i64,
    points: i64,
    games_played: i64,
}

impl Team {
    /// Creates a new Team, validating business rules. The id is assigned
    /// by the store on insert; until then it is 0.
    pub fn new(
        name: String,
        coach: String,
        wins: i64,
        losses: i64,
        draws: i64,
        points: i64,
        games_played: i64,
    ) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        if wins < 0 || losses < 0 || draws < 0 || points < 0 || games_played < 0 {
            return Err("Team counters cannot be negative".to_string());
        }

        Ok(Self {
            id: 0,
            name,
            coach,
            wins,
            losses,
            draws,
            points,
            games_played,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coach(&self) -> &str {
        &self.coach
    }

    pub fn wins(&self) -> i64 {
        self.wins
    }

    pub fn losses(&self) -> i64 {
        self.losses
    }

    pub fn draws(&self) -> i64 {
        self.draws
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn games_played(&self) -> i64 {
        self.games_played
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses validation since the data was validated on the way in.
    /// Only to be used by repository implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: i64,
        name: String,
        coach: String,
        wins: i64,
        losses: i64,
        draws: i64,
        points: i64,
        games_played: i64,
    ) -> Self {
        Self {
            id,
            name,
            coach,
            wins,
            losses,
            draws,
            points,
            games_played,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_team_with_valid_fields() {
        let team = Team::new("Wolves".to_string(), "A. Coach".to_string(), 4, 2, 1, 9, 7);

        assert!(team.is_ok());
        let team = team.unwrap();
        assert_eq!(team.name(), "Wolves");
        assert_eq!(team.coach(), "A. Coach");
        assert_eq!(team.wins(), 4);
        assert_eq!(team.games_played(), 7);
        assert_eq!(team.id(), 0);
    }

    #[test]
    fn create_team_with_empty_name_fails() {
        let result = Team::new(String::new(), "Coach".to_string(), 0, 0, 0, 0, 0);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("name cannot be empty"));
    }

    #[test]
    fn create_team_with_whitespace_name_fails() {
        let result = Team::new("   ".to_string(), "Coach".to_string(), 0, 0, 0, 0, 0);

        assert!(result.is_err());
    }

    #[test]
    fn create_team_with_negative_counter_fails() {
        let result = Team::new("Wolves".to_string(), "Coach".to_string(), -1, 0, 0, 0, 0);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be negative"));
    }

    #[test]
    fn from_persistence_keeps_stored_id() {
        let team =
            Team::from_persistence(42, "Wolves".to_string(), "Coach".to_string(), 1, 0, 0, 2, 1);

        assert_eq!(team.id(), 42);
        assert_eq!(team.points(), 2);
    }
}
