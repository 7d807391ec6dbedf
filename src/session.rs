use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::assign::{self, Assignment};
use crate::roster::{Roster, RosterError};
use crate::rules::{SettingField, Settings};
use crate::shuffle::permute;


// A one-player "shuffle" would be a no-op placement; require a real group.
pub const MIN_PLAYERS: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EditTarget {
    Players,
    Settings,
}

/// What the boundary should render. `Shuffled` means the latest assignment
/// corresponds to the current roster and settings; a stale assignment is
/// never reported here even if it is still held in memory.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum DisplayState {
    Empty,
    Ready,
    Shuffled,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShuffleError {
    NotEnoughPlayers,
    EditingInProgress,
}

// Rejections leave the session untouched: a duplicate or blank player name
// and a gated shuffle are no-ops, not failures.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionRejection {
    Roster(RosterError),
    Shuffle(ShuffleError),
    UnknownPlayer,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SessionAction {
    AddPlayer(String),
    RemovePlayer(String),
    Increment(SettingField),
    Decrement(SettingField),
    ToggleEdit(EditTarget),
    CloseEdit,
    Shuffle,
}

#[derive(Clone, Debug)]
pub struct Session {
    roster: Roster,
    settings: Settings,
    assignment: Option<Assignment>,
    // True iff `assignment` was computed for the current roster and settings.
    assignment_current: bool,
    edit_target: Option<EditTarget>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            roster: Roster::new(),
            settings: Settings::default(),
            assignment: None,
            assignment_current: false,
            edit_target: None,
        }
    }

    // Seeds from externally supplied input. Blank and duplicate names are
    // dropped silently, matching the add-player policy.
    pub fn with_seed<S: AsRef<str>>(players: &[S], settings: Settings) -> Self {
        let mut session = Session::new();
        session.settings = settings;
        for name in players {
            let _ = session.roster.add(name.as_ref());
        }
        session
    }

    pub fn roster(&self) -> &Roster { &self.roster }
    pub fn settings(&self) -> &Settings { &self.settings }
    pub fn edit_target(&self) -> Option<EditTarget> { self.edit_target }
    pub fn is_editing(&self) -> bool { self.edit_target.is_some() }

    pub fn display_state(&self) -> DisplayState {
        if self.roster.is_empty() {
            DisplayState::Empty
        } else if self.assignment_current {
            DisplayState::Shuffled
        } else {
            DisplayState::Ready
        }
    }

    /// The latest assignment, only while it corresponds to the current
    /// roster and settings.
    pub fn current_assignment(&self) -> Option<&Assignment> {
        if self.assignment_current { self.assignment.as_ref() } else { None }
    }

    pub fn can_shuffle(&self) -> bool { self.shuffle_gate().is_ok() }

    pub fn add_player(&mut self, name: &str) -> Result<(), RosterError> {
        self.roster.add(name)?;
        self.invalidate_assignment();
        Ok(())
    }

    // Returns whether the player was present.
    pub fn remove_player(&mut self, name: &str) -> bool {
        if !self.roster.remove(name) {
            return false;
        }
        if self.roster.is_empty() {
            self.assignment = None;
        }
        self.invalidate_assignment();
        true
    }

    pub fn increment(&mut self, field: SettingField) {
        self.settings.increment(field);
        self.invalidate_assignment();
    }

    // Decrementing a field already at its floor changes nothing and keeps
    // the current assignment valid.
    pub fn decrement(&mut self, field: SettingField) {
        if self.settings.decrement(field) {
            self.invalidate_assignment();
        }
    }

    // Edit targets are mutually exclusive: opening one closes the other.
    // Editing hides the assignment but does not invalidate its data.
    pub fn toggle_edit(&mut self, target: EditTarget) {
        self.edit_target = if self.edit_target == Some(target) { None } else { Some(target) };
    }

    pub fn close_edit(&mut self) { self.edit_target = None; }

    pub fn shuffle(&mut self, rng: &mut impl Rng) -> Result<&Assignment, ShuffleError> {
        self.shuffle_gate()?;
        let order = permute(self.roster.players(), rng);
        let assignment =
            assign::assign(&order, self.settings.team_count(), self.settings.capacity_per_team())
                .unwrap(); // settings are clamped to ≥ 1
        info!(
            "Shuffled {} players into {} teams ({} overflow)",
            self.roster.len(),
            self.settings.team_count(),
            assignment.overflow.len()
        );
        self.assignment = Some(assignment);
        self.assignment_current = true;
        Ok(self.assignment.as_ref().unwrap())
    }

    pub fn apply(
        &mut self, action: SessionAction, rng: &mut impl Rng,
    ) -> Result<(), ActionRejection> {
        use SessionAction::*;
        match action {
            AddPlayer(name) => self.add_player(&name).map_err(ActionRejection::Roster),
            RemovePlayer(name) => {
                if self.remove_player(&name) {
                    Ok(())
                } else {
                    Err(ActionRejection::UnknownPlayer)
                }
            }
            Increment(field) => {
                self.increment(field);
                Ok(())
            }
            Decrement(field) => {
                self.decrement(field);
                Ok(())
            }
            ToggleEdit(target) => {
                self.toggle_edit(target);
                Ok(())
            }
            CloseEdit => {
                self.close_edit();
                Ok(())
            }
            Shuffle => self.shuffle(rng).map(|_| ()).map_err(ActionRejection::Shuffle),
        }
    }

    fn shuffle_gate(&self) -> Result<(), ShuffleError> {
        if self.edit_target.is_some() {
            return Err(ShuffleError::EditingInProgress);
        }
        if self.roster.len() < MIN_PLAYERS {
            return Err(ShuffleError::NotEnoughPlayers);
        }
        Ok(())
    }

    fn invalidate_assignment(&mut self) { self.assignment_current = false; }
}
