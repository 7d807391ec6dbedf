use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, event as term_event, execute, terminal};
use log::warn;
use rand::Rng;
use scopeguard::defer;
use team_shuffle::rules::SettingField;
use team_shuffle::session::{EditTarget, Session};
use team_shuffle::share;

use crate::share_link;
use crate::tui;


const TICK_PERIOD: Duration = Duration::from_millis(100);
// How long the "link copied" notification stays on screen.
const COPIED_NOTIFICATION_DURATION: Duration = Duration::from_secs(2);

pub struct TuiConfig {
    pub share_link: Option<String>,
}

enum IncomingEvent {
    Terminal(term_event::Event),
    Tick,
}

// UI-only state; everything that outlives a redraw lives in `Session`.
struct UiState {
    input: String,
    selected_player: usize,
    selected_setting: SettingField,
    copied_at: Option<Instant>,
}

pub fn run(config: TuiConfig) -> io::Result<()> {
    let seed = config.share_link.as_deref().map(share_link::decode).unwrap_or_default();
    let mut session = Session::with_seed(&seed.players, seed.settings);
    let mut rng = rand::rng();

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
    defer! {
        execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show).unwrap();
        terminal::disable_raw_mode().unwrap();
    }

    let (tx, rx) = mpsc::channel();
    let tx_local = tx.clone();
    let tx_tick = tx;
    thread::spawn(move || {
        loop {
            let ev = term_event::read().unwrap();
            if tx_local.send(IncomingEvent::Terminal(ev)).is_err() {
                return;
            }
        }
    });
    thread::spawn(move || {
        loop {
            thread::sleep(TICK_PERIOD);
            if tx_tick.send(IncomingEvent::Tick).is_err() {
                return;
            }
        }
    });

    let mut ui = UiState {
        input: String::new(),
        selected_player: 0,
        selected_setting: SettingField::TeamCount,
        copied_at: None,
    };
    render(&mut stdout, &session, &ui)?;
    for event in rx {
        match event {
            IncomingEvent::Tick => {
                if ui.copied_at.is_some_and(|t| t.elapsed() >= COPIED_NOTIFICATION_DURATION) {
                    ui.copied_at = None;
                }
            }
            IncomingEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if !handle_key(key, &mut session, &mut rng, &mut ui) {
                    return Ok(());
                }
            }
            IncomingEvent::Terminal(_) => {}
        }
        render(&mut stdout, &session, &ui)?;
    }
    panic!("Unexpected end of events stream");
}

// Returns false when the user asked to quit.
fn handle_key(key: KeyEvent, session: &mut Session, rng: &mut impl Rng, ui: &mut UiState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match session.edit_target() {
        Some(EditTarget::Players) => handle_player_edit_key(key, session, ui),
        Some(EditTarget::Settings) => handle_settings_edit_key(key, session, ui),
        None => return handle_display_key(key, session, rng, ui),
    }
    true
}

fn handle_display_key(
    key: KeyEvent, session: &mut Session, rng: &mut impl Rng, ui: &mut UiState,
) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Char('p') => session.toggle_edit(EditTarget::Players),
        KeyCode::Char('s') => session.toggle_edit(EditTarget::Settings),
        KeyCode::Char('c') => copy_share_link(session, ui),
        KeyCode::Enter | KeyCode::Char('r') => {
            // Gated shuffles are no-ops; the hint line explains the gate.
            let _ = session.shuffle(rng);
        }
        _ => {}
    }
    true
}

fn handle_player_edit_key(key: KeyEvent, session: &mut Session, ui: &mut UiState) {
    match key.code {
        KeyCode::Esc => session.close_edit(),
        KeyCode::Enter => {
            // A rejected name stays in the input line.
            if session.add_player(&ui.input).is_ok() {
                ui.input.clear();
            }
        }
        KeyCode::Backspace => {
            ui.input.pop();
        }
        KeyCode::Up => ui.selected_player = ui.selected_player.saturating_sub(1),
        KeyCode::Down => {
            ui.selected_player =
                (ui.selected_player + 1).min(session.roster().len().saturating_sub(1));
        }
        KeyCode::Delete => {
            if let Some(name) = session.roster().players().get(ui.selected_player).cloned() {
                session.remove_player(&name);
                ui.selected_player =
                    ui.selected_player.min(session.roster().len().saturating_sub(1));
            }
        }
        KeyCode::Char(ch) => ui.input.push(ch),
        _ => {}
    }
}

fn handle_settings_edit_key(key: KeyEvent, session: &mut Session, ui: &mut UiState) {
    match key.code {
        KeyCode::Esc => session.close_edit(),
        KeyCode::Up | KeyCode::Down => {
            ui.selected_setting = match ui.selected_setting {
                SettingField::TeamCount => SettingField::CapacityPerTeam,
                SettingField::CapacityPerTeam => SettingField::TeamCount,
            };
        }
        KeyCode::Left | KeyCode::Char('-') => session.decrement(ui.selected_setting),
        KeyCode::Right | KeyCode::Char('+') => session.increment(ui.selected_setting),
        _ => {}
    }
}

fn copy_share_link(session: &Session, ui: &mut UiState) {
    let link = share::encode(session.roster(), session.settings());
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(link)) {
        Ok(()) => ui.copied_at = Some(Instant::now()),
        // The "copied" notification simply does not appear.
        Err(err) => warn!("Cannot copy share link: {}", err),
    }
}

fn render(stdout: &mut io::Stdout, session: &Session, ui: &UiState) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0), terminal::Clear(terminal::ClearType::FromCursorDown))?;
    let screen = tui::render_screen(
        session,
        &ui.input,
        ui.selected_player,
        ui.selected_setting,
        ui.copied_at.is_some(),
    );
    // Raw mode disables LF to CRLF translation.
    write!(stdout, "{}", screen.replace('\n', "\r\n"))?;
    stdout.flush()
}
