use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssignmentError {
    ZeroTeamCount,
    ZeroCapacity,
}

/// A full partition of the input players: everyone lands in exactly one
/// team or in `overflow`. Holds copies of the names, so later roster
/// changes never alter an already computed assignment.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Assignment {
    pub teams: Vec<Vec<String>>,
    pub overflow: Vec<String>,
}

impl Assignment {
    pub fn num_placed(&self) -> usize { self.teams.iter().map(|team| team.len()).sum() }
    pub fn num_players(&self) -> usize { self.num_placed() + self.overflow.len() }
}

/// Splits `players` into `team_count` teams of at most `capacity_per_team`
/// players each, walking the input in order.
///
/// Round-robin with a capacity check: the running index advances for every
/// player, including the ones that overflow, so a full team is skipped
/// mid-cycle while the remaining teams keep receiving players in the same
/// pass. Overflow keeps the input order. Deterministic given the input
/// order; randomness comes from shuffling the input beforehand.
pub fn assign(
    players: &[String], team_count: usize, capacity_per_team: usize,
) -> Result<Assignment, AssignmentError> {
    if team_count == 0 {
        return Err(AssignmentError::ZeroTeamCount);
    }
    if capacity_per_team == 0 {
        return Err(AssignmentError::ZeroCapacity);
    }
    let mut teams = vec![Vec::new(); team_count];
    let mut overflow = Vec::new();
    for (i, player) in players.iter().enumerate() {
        let target = i % team_count;
        if teams[target].len() < capacity_per_team {
            teams[target].push(player.clone());
        } else {
            overflow.push(player.clone());
        }
    }
    Ok(Assignment { teams, overflow })
}
