//! Keyboard input handling and interactive loop.

use crossterm::event::KeyEvent;

use crate::domain::ports::TreeWidget;

use super::menu::{TreeAction, TreeMenu};
use super::render::render_help_bar;

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TreeAction::Activate),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Browse the tree until a node is clicked.
///
/// Returns the name of the clicked node, `None` if the user quit. The click
/// goes through [`TreeWidget::select_node`], so the caller sees it as a
/// `SelectNode` event when draining the widget.
pub fn run_interactive(
    menu: &mut TreeMenu,
    supports_unicode: bool,
) -> std::io::Result<Option<String>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    let render_ui = |stdout: &mut std::io::Stdout, menu: &TreeMenu| -> std::io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        print!("Classifications\r\n\r\n");
        for line in menu.render(supports_unicode).lines() {
            print!("{}\r\n", line);
        }
        print!("\r\n");
        for line in render_help_bar().lines() {
            print!("{}\r\n", line);
        }

        stdout.flush()?;
        Ok(())
    };

    execute!(stdout, cursor::Hide)?;
    render_ui(&mut stdout, menu)?;

    let result = loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key_to_action(key) {
                Some(TreeAction::Quit) => break None,
                Some(TreeAction::Activate) => {
                    menu.handle_action(TreeAction::Activate);
                    break menu.selected().map(|n| n.name.clone());
                }
                Some(action) => {
                    menu.handle_action(action);
                    render_ui(&mut stdout, menu)?;
                }
                None => {}
            }
        }
    };

    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    Ok(result)
}
