use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use eekit_core::error::NetworkError;

use crate::tui::app::{App, RC_FIELDS, Tab};

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+')
}

/// Applies one key press. Returns true when the user asked to quit.
pub fn handle_key(k: KeyEvent, app: &mut App) -> bool {
    if k.kind != KeyEventKind::Press {
        return false;
    }
    if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    if app.show_help {
        if matches!(k.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return false;
    }

    match k.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab => app.tab = app.tab.next(),
        KeyCode::BackTab => app.tab = app.tab.prev(),
        code => {
            app.status = None;
            match app.tab {
                Tab::Decoder => decoder_key(code, app),
                Tab::Network => network_key(code, app),
                Tab::Rc => rc_key(code, app),
            }
        }
    }
    false
}

fn decoder_key(code: KeyCode, app: &mut App) {
    let decoder = &mut app.decoder;
    match code {
        KeyCode::Up => decoder.selected = decoder.selected.saturating_sub(1),
        KeyCode::Down => decoder.selected = (decoder.selected + 1).min(3),
        KeyCode::Left => decoder.cycle(false),
        KeyCode::Right | KeyCode::Enter => decoder.cycle(true),
        _ => {}
    }
}

fn network_key(code: KeyCode, app: &mut App) {
    let network = &mut app.network;
    let last = network.list.len().saturating_sub(1);
    network.selected = network.selected.min(last);
    let id = network.list.entries()[network.selected].id;

    match code {
        KeyCode::Up => network.selected = network.selected.saturating_sub(1),
        KeyCode::Down => network.selected = (network.selected + 1).min(last),
        KeyCode::Char('m') => network.mode = network.mode.toggle(),
        KeyCode::Char('a') => {
            network.list.push();
            network.selected = network.list.len() - 1;
        }
        KeyCode::Char('d') | KeyCode::Delete => match network.list.remove(id) {
            Ok(_) => {
                network.selected = network.selected.min(network.list.len() - 1);
            }
            Err(NetworkError::LastEntry) => {
                app.status = Some("at least one resistor is required".to_string());
            }
            Err(err) => app.status = Some(err.to_string()),
        },
        KeyCode::Backspace => {
            if let Some(entry) = network.list.entry_mut(id) {
                entry.raw.pop();
            }
        }
        KeyCode::Char(c) if is_numeric_char(c) => {
            if let Some(entry) = network.list.entry_mut(id) {
                entry.raw.push(c);
            }
        }
        _ => {}
    }
}

fn rc_key(code: KeyCode, app: &mut App) {
    let rc = &mut app.rc;
    match code {
        KeyCode::Up => rc.selected = rc.selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Enter => rc.selected = (rc.selected + 1).min(RC_FIELDS.len() - 1),
        KeyCode::Backspace => {
            rc.fields[rc.selected].pop();
        }
        KeyCode::Char(c) if is_numeric_char(c) => rc.fields[rc.selected].push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eekit_core::{CircuitMode, ColorBand, estimate_rc};
    use rstest::rstest;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[rstest]
    #[case(KeyCode::Tab, Tab::Network)]
    #[case(KeyCode::BackTab, Tab::Rc)]
    fn test_tab_navigation(#[case] code: KeyCode, #[case] expected: Tab) {
        let mut app = App::new();
        press(&mut app, code);
        assert_eq!(app.tab, expected);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(press(&mut app, KeyCode::Char('q')));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(ctrl_c, &mut app));
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        assert!(!press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_decoder_cycles_role_choices() {
        let mut app = App::new();
        // multiplier band: Red -> Orange
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.decoder.spec.bands[2], ColorBand::Orange);
        assert_eq!(app.decoder.spec.resolve().resistance_label(), "10 kΩ");

        // tolerance band wraps from Brown back to None
        press(&mut app, KeyCode::Down);
        app.decoder.spec.bands[3] = ColorBand::Brown;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.decoder.spec.bands[3], ColorBand::None);
    }

    #[test]
    fn test_decoder_never_offers_invalid_digit() {
        let mut app = App::new();
        for _ in 0..20 {
            press(&mut app, KeyCode::Right);
            assert!(app.decoder.spec.bands[0].digit().is_some());
        }
    }

    #[test]
    fn test_network_editing() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "100x");
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "1000");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.network.list.raw_values(), vec!["100", "100"]);
        assert_eq!(app.network.list.equivalent(app.network.mode), 200.0);

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.network.mode, CircuitMode::Parallel);
        assert_eq!(app.network.list.equivalent(app.network.mode), 50.0);
    }

    #[test]
    fn test_network_edits_selected_entry() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "22");
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "33");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "0");
        assert_eq!(app.network.list.raw_values(), vec!["20", "33"]);
    }

    #[test]
    fn test_network_remove() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.network.list.len(), 1);
        assert!(app.status.is_some());

        type_str(&mut app, "10");
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "20");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.network.list.raw_values(), vec!["20"]);
        assert_eq!(app.network.selected, 0);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_rc_fields() {
        let mut app = App::new();
        press(&mut app, KeyCode::BackTab);
        type_str(&mut app, "1e-6");
        press(&mut app, KeyCode::Down);
        type_str(&mut app, "1000");
        press(&mut app, KeyCode::Down);
        type_str(&mut app, "5");
        press(&mut app, KeyCode::Down);
        type_str(&mut app, "2.5");

        let timing = estimate_rc(&app.rc.parameters());
        assert_eq!(timing.time_constant_label(), "1.000 ms");
        assert_eq!(timing.charge_label(), "693.147 µs");

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.rc.fields[2], "");
        assert_eq!(estimate_rc(&app.rc.parameters()).discharge_label(), "N/A");
    }
}
