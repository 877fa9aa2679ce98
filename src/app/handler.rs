//! Input handling: maps key/mouse events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::state::PreviewState;

/// Status-bar hint listing the bindings.
pub const KEY_HINT: &str = "↑↓/jk scroll · PgUp/PgDn page · Home/End · n night · d day · a auto · e email · r reduced motion · q quit";

/// Process a key event.
pub fn handle_key(state: &mut PreviewState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }
    if state.editing_email {
        handle_email_key(state, key);
        return;
    }

    let page_height = state.page.viewport().height;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => state.scroll_by(-state.scroll_step),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_by(state.scroll_step),
        KeyCode::PageUp => state.scroll_by(-page_height),
        KeyCode::PageDown | KeyCode::Char(' ') => state.scroll_by(page_height),
        KeyCode::Home | KeyCode::Char('g') => state.scroll_to(0.0),
        KeyCode::End | KeyCode::Char('G') => state.scroll_to(state.page.max_scroll()),
        KeyCode::Char('n') => {
            state.page.select_night(true);
            state.status_message = Some("Night selected; auto cycle paused".into());
        }
        KeyCode::Char('d') => {
            state.page.select_night(false);
            state.status_message = Some("Day selected; auto cycle paused".into());
        }
        KeyCode::Char('a') => {
            state.page.resume_day_night();
            state.status_message = Some("Day/night back on auto".into());
        }
        KeyCode::Char('e') => state.focus_newsletter(),
        KeyCode::Char('r') => {
            let reduced = !state.reduced_motion();
            state.page.set_reduced_motion(reduced);
            // Settle any in-flight ease so the page stops moving at once.
            if reduced {
                let target = state.scroll.target();
                state.scroll.jump(target);
                state.page.scroll_to(target);
            }
            tracing::info!(reduced, "reduced motion toggled");
            state.status_message = Some(format!(
                "Reduced motion {}",
                if reduced { "on" } else { "off" }
            ));
        }
        _ => {}
    }
}

/// Keys while the footer's email field has focus.
fn handle_email_key(state: &mut PreviewState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.editing_email = false;
            state.status_message = None;
        }
        KeyCode::Enter => state.submit_newsletter(),
        KeyCode::Backspace => state.page.newsletter_mut().backspace(),
        KeyCode::Char(c) => state.page.newsletter_mut().push(c),
        _ => {}
    }
}

/// Process a mouse event: the wheel scrolls the page.
pub fn handle_mouse(state: &mut PreviewState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll_by(-state.scroll_step),
        MouseEventKind::ScrollDown => state.scroll_by(state.scroll_step),
        _ => {}
    }
}
