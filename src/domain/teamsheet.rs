/// The 17 positions a teamsheet slot can carry: 13 starting positions and
/// 4 interchange slots. Labels match what the match-day sheet prints.
pub const ASSIGNED_POSITIONS: [&str; 17] = [
    "Full Back (1)",
    "Right Wing (2)",
    "Right Centre (3)",
    "Left Centre (4)",
    "Left Wing (5)",
    "Stand Off (6)",
    "Scrum Half(7)",
    "Prop (8)",
    "Hooker (9)",
    "Prop (10)",
    "Second Row (11)",
    "Second Row (12)",
    "Loose Forward (13)",
    "Interchange (14)",
    "Interchange (15)",
    "Interchange (16)",
    "Interchange (17)",
];

/// One slot on a teamsheet, assigning a player to a position
///
/// Position-uniqueness within a sheet is a convention the UI maintains,
/// not a rule enforced here.
///
/// # Invariants
/// - `assigned_position` is one of the 17 known labels
#[derive(Debug, Clone)]
pub struct TeamsheetPlayer {
    id: i64,
    teamsheet_id: i64,
    team_id: i64,
    player_id: i64,
    assigned_position: String,
}

impl TeamsheetPlayer {
    pub fn new(
        teamsheet_id: i64,
        team_id: i64,
        player_id: i64,
        assigned_position: String,
    ) -> Result<Self, String> {
        if !ASSIGNED_POSITIONS.contains(&assigned_position.as_str()) {
            return Err(format!("Unknown position: {}", assigned_position));
        }

        Ok(Self {
            id: 0,
            teamsheet_id,
            team_id,
            player_id,
            assigned_position,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn teamsheet_id(&self) -> i64 {
        self.teamsheet_id
    }

    pub fn team_id(&self) -> i64 {
        self.team_id
    }

    pub fn player_id(&self) -> i64 {
        self.player_id
    }

    pub fn assigned_position(&self) -> &str {
        &self.assigned_position
    }

    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: i64,
        teamsheet_id: i64,
        team_id: i64,
        player_id: i64,
        assigned_position: String,
    ) -> Self {
        Self {
            id,
            teamsheet_id,
            team_id,
            player_id,
            assigned_position,
        }
    }
}

/// Teamsheet aggregate: a team's named line-up for a match day
///
/// Owns its slots; updates replace the whole slot list rather than patching
/// individual rows.
#[derive(Debug, Clone)]
pub struct Teamsheet {
    id: i64,
    team_id: i64,
    players: Vec<TeamsheetPlayer>,
}

impl Teamsheet {
    pub fn new(team_id: i64, players: Vec<TeamsheetPlayer>) -> Self {
        Self {
            id: 0,
            team_id,
            players,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn team_id(&self) -> i64 {
        self.team_id
    }

    pub fn players(&self) -> &[TeamsheetPlayer] {
        &self.players
    }

    /// Only to be used by repository implementations.
    pub fn from_persistence(id: i64, team_id: i64, players: Vec<TeamsheetPlayer>) -> Self {
        Self {
            id,
            team_id,
            players,
        }
    }
}
