/// Longest name or position label accepted, matching the column width the
/// original schema used.
const MAX_NAME_LEN: usize = 50;

/// Player entity
///
/// Belongs to exactly one Team by `team_id`; the reference must resolve at
/// write time. Season tallies (tries, tackles, carries) are stored counters,
/// summed by the stats aggregator at read time.
///
/// # Invariants
/// - First and last name are non-empty and at most 50 characters
/// - Position label is at most 50 characters (free-form otherwise)
/// - Tallies are non-negative
#[derive(Debug, Clone)]
pub struct Player {
    id: i64,
    first_name: String,
    last_name: String,
    position: String,
    tries: i64,
    tackles: i64,
    carries: i64,
    team_id: i64,
}

impl Player {
    /// Creates a new Player, validating business rules. The id is assigned
    /// by the store on insert; until then it is 0.
    pub fn new(
        first_name: String,
        last_name: String,
        position: String,
        tries: i64,
        tackles: i64,
        carries: i64,
        team_id: i64,
    ) -> Result<Self, String> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err("Player name cannot be empty".to_string());
        }

        if first_name.len() > MAX_NAME_LEN
            || last_name.len() > MAX_NAME_LEN
            || position.len() > MAX_NAME_LEN
        {
            return Err(format!(
                "Name and position are limited to {} characters",
                MAX_NAME_LEN
            ));
        }

        if tries < 0 || tackles < 0 || carries < 0 {
            return Err("Player tallies cannot be negative".to_string());
        }

        Ok(Self {
            id: 0,
            first_name,
            last_name,
            position,
            tries,
            tackles,
            carries,
            team_id,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Display name used by search and projections: "First Last" with a
    /// single space separator.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn tries(&self) -> i64 {
        self.tries
    }

    pub fn tackles(&self) -> i64 {
        self.tackles
    }

    pub fn carries(&self) -> i64 {
        self.carries
    }

    pub fn team_id(&self) -> i64 {
        self.team_id
    }

    /// Reconstructs a Player from persistence layer data
    ///
    /// Only to be used by repository implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: i64,
        first_name: String,
        last_name: String,
        position: String,
        tries: i64,
        tackles: i64,
        carries: i64,
        team_id: i64,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            position,
            tries,
            tackles,
            carries,
            team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_player() -> Result<Player, String> {
        Player::new(
            "Liam".to_string(),
            "Tan".to_string(),
            "Hooker (9)".to_string(),
            5,
            20,
            30,
            1,
        )
    }

    #[test]
    fn create_player_with_valid_fields() {
        let player = valid_player().unwrap();

        assert_eq!(player.full_name(), "Liam Tan");
        assert_eq!(player.tries(), 5);
        assert_eq!(player.team_id(), 1);
    }

    #[test]
    fn create_player_with_empty_name_fails() {
        let result = Player::new(
            "".to_string(),
            "Tan".to_string(),
            "Prop (8)".to_string(),
            0,
            0,
            0,
            1,
        );

        assert!(result.is_err());
    }

    #[test]
    fn create_player_with_overlong_name_fails() {
        let result = Player::new(
            "x".repeat(51),
            "Tan".to_string(),
            "Prop (8)".to_string(),
            0,
            0,
            0,
            1,
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("50 characters"));
    }

    #[test]
    fn create_player_with_negative_tally_fails() {
        let result = Player::new(
            "Liam".to_string(),
            "Tan".to_string(),
            "Prop (8)".to_string(),
            -1,
            0,
            0,
            1,
        );

        assert!(result.is_err());
    }

    #[test]
    fn full_name_uses_single_space() {
        let player = Player::from_persistence(
            7,
            "Zara".to_string(),
            "Z".to_string(),
            "Left Wing (5)".to_string(),
            0,
            0,
            0,
            1,
        );

        assert_eq!(player.full_name(), "Zara Z");
    }
}
