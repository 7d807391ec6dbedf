use console::Style;
use itertools::Itertools;
use strum::IntoEnumIterator;
use team_shuffle::assign::Assignment;
use team_shuffle::roster::Roster;
use team_shuffle::rules::{SettingField, Settings};
use team_shuffle::session::{DisplayState, EditTarget, Session};
use team_shuffle::share;


fn team_style(team_idx: usize) -> Style {
    const COLORS: [u8; 6] = [203, 75, 114, 221, 176, 80];
    Style::new().color256(COLORS[team_idx % COLORS.len()])
}

pub fn render_screen(
    session: &Session, input: &str, selected_player: usize, selected_setting: SettingField,
    link_copied: bool,
) -> String {
    let mut ret = format!("{}\n\n", Style::new().bold().underlined().apply_to("Team Shuffle"));
    match session.edit_target() {
        Some(EditTarget::Players) => {
            ret.push_str(&render_roster_editor(session.roster(), selected_player, input));
        }
        Some(EditTarget::Settings) => {
            ret.push_str(&render_settings_editor(session.settings(), selected_setting));
        }
        None => match session.display_state() {
            DisplayState::Empty => {
                let prompt = "No players yet. Press [p] and add some.";
                ret.push_str(&format!("{}\n", Style::new().dim().apply_to(prompt)));
            }
            DisplayState::Ready => ret.push_str(&render_ready(session)),
            DisplayState::Shuffled => {
                // `Shuffled` guarantees a current assignment.
                ret.push_str(&render_assignment(session.current_assignment().unwrap()));
            }
        },
    }
    ret.push('\n');
    if !session.roster().is_empty() && session.edit_target().is_none() {
        // Re-derived on every redraw, so it always matches the current state.
        let query = share::encode(session.roster(), session.settings());
        ret.push_str(&format!("{}\n", Style::new().dim().apply_to(format!("Share: ?{}", query))));
    }
    ret.push_str(&render_status_line(session, link_copied));
    ret
}

pub fn render_assignment(assignment: &Assignment) -> String {
    let mut ret = format!("{}\n", Style::new().bold().apply_to("Teams"));
    for (i, team) in assignment.teams.iter().enumerate() {
        let style = team_style(i);
        ret.push_str(&format!("  {}\n", style.apply_to(format!("Team {}:", i + 1))));
        for player in team {
            ret.push_str(&format!("    {} {}\n", style.apply_to("•"), player));
        }
    }
    ret.push_str(&format!("{}\n", Style::new().bold().apply_to("Next up")));
    if assignment.overflow.is_empty() {
        ret.push_str(&format!("  {}\n", Style::new().dim().apply_to("Nobody is waiting")));
    } else {
        ret.push_str(&format!("  {}\n", assignment.overflow.iter().join(", ")));
    }
    ret
}

fn render_ready(session: &Session) -> String {
    let mut ret = format!("Players ({}):\n", session.roster().len());
    for player in session.roster().players() {
        ret.push_str(&format!("  • {}\n", player));
    }
    let hint = if session.can_shuffle() {
        "Press [Enter] to draw teams."
    } else {
        "Add more players to draw teams."
    };
    ret.push_str(&format!("\n{}\n", Style::new().dim().apply_to(hint)));
    ret
}

pub fn render_roster_editor(roster: &Roster, selected: usize, input: &str) -> String {
    let mut ret = format!("{}\n", Style::new().bold().apply_to("Edit players"));
    if roster.is_empty() {
        ret.push_str(&format!("  {}\n", Style::new().dim().apply_to("(no players)")));
    }
    for (i, player) in roster.players().iter().enumerate() {
        let marker = if i == selected { ">" } else { " " };
        ret.push_str(&format!(" {} {}\n", marker, player));
    }
    // Simulated cursor: the real one is hidden while the TUI runs.
    ret.push_str(&format!("\nNew player: {}▂\n", input));
    ret
}

pub fn render_settings_editor(settings: &Settings, selected: SettingField) -> String {
    let mut ret = format!("{}\n", Style::new().bold().apply_to("Edit settings"));
    for field in SettingField::iter() {
        let marker = if field == selected { ">" } else { " " };
        ret.push_str(&format!(" {} {}: {}\n", marker, field_label(field), settings.get(field)));
    }
    ret
}

fn field_label(field: SettingField) -> &'static str {
    match field {
        SettingField::TeamCount => "Teams",
        SettingField::CapacityPerTeam => "Players per team",
    }
}

fn render_status_line(session: &Session, link_copied: bool) -> String {
    let hints = match session.edit_target() {
        Some(EditTarget::Players) => "[Enter] add  [Up/Down] select  [Del] remove  [Esc] done",
        Some(EditTarget::Settings) => "[Up/Down] field  [Left/Right] adjust  [Esc] done",
        None => "[Enter] shuffle  [p] players  [s] settings  [c] copy link  [q] quit",
    };
    let mut ret = format!("{}\n", Style::new().dim().apply_to(hints));
    if link_copied {
        ret.push_str(&format!("{}\n", Style::new().green().apply_to("Link copied!")));
    }
    ret
}
