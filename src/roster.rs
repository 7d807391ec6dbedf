use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RosterError {
    EmptyName,
    DuplicateName,
}

/// Ordered player list. Insertion order is the canonical order. Names are
/// unique (case-sensitive exact match) and stored trimmed.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    pub fn new() -> Self { Roster { players: Vec::new() } }

    pub fn players(&self) -> &[String] { &self.players }
    pub fn len(&self) -> usize { self.players.len() }
    pub fn is_empty(&self) -> bool { self.players.is_empty() }
    pub fn contains(&self, name: &str) -> bool { self.players.iter().any(|p| p == name) }

    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(name) {
            return Err(RosterError::DuplicateName);
        }
        self.players.push(name.to_owned());
        Ok(())
    }

    // Returns whether the player was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.players.iter().position(|p| p == name) {
            Some(idx) => {
                self.players.remove(idx);
                true
            }
            None => false,
        }
    }
}
