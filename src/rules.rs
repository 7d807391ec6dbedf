use serde::{Deserialize, Serialize};
use strum::EnumIter;


pub const DEFAULT_TEAM_COUNT: usize = 2;
pub const DEFAULT_CAPACITY_PER_TEAM: usize = 4;

// Both settings have a hard floor of 1: modulo placement is undefined with
// zero teams, and a zero capacity would overflow everyone.
const MIN_SETTING_VALUE: usize = 1;

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, Serialize, Deserialize)]
pub enum SettingField {
    TeamCount,
    CapacityPerTeam,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Settings {
    team_count: usize,
    capacity_per_team: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            team_count: DEFAULT_TEAM_COUNT,
            capacity_per_team: DEFAULT_CAPACITY_PER_TEAM,
        }
    }
}

impl Settings {
    // Out-of-range values are clamped to the floor, never rejected.
    pub fn clamped(team_count: usize, capacity_per_team: usize) -> Self {
        Settings {
            team_count: team_count.max(MIN_SETTING_VALUE),
            capacity_per_team: capacity_per_team.max(MIN_SETTING_VALUE),
        }
    }

    pub fn team_count(&self) -> usize { self.team_count }
    pub fn capacity_per_team(&self) -> usize { self.capacity_per_team }
    pub fn max_places(&self) -> usize { self.team_count * self.capacity_per_team }

    pub fn get(&self, field: SettingField) -> usize {
        match field {
            SettingField::TeamCount => self.team_count,
            SettingField::CapacityPerTeam => self.capacity_per_team,
        }
    }

    pub fn increment(&mut self, field: SettingField) { *self.field_mut(field) += 1; }

    // Returns false when the field is already at the floor.
    pub fn decrement(&mut self, field: SettingField) -> bool {
        let value = self.field_mut(field);
        if *value <= MIN_SETTING_VALUE {
            return false;
        }
        *value -= 1;
        true
    }

    fn field_mut(&mut self, field: SettingField) -> &mut usize {
        match field {
            SettingField::TeamCount => &mut self.team_count,
            SettingField::CapacityPerTeam => &mut self.capacity_per_team,
        }
    }
}
