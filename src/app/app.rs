use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};

use crate::{
    app::{Dashboard, ui},
    models::DayCount,
};

const PAGE_STEP: u16 = 30;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyAction {
    None,
    Refresh,
    Quit,
}

pub struct App {
    dashboard: Dashboard,
    table_state: TableState,
    popup_message: Option<String>,
    error_popup: Option<String>,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            table_state: TableState::default(),
            popup_message: None,
            error_popup: None,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn table_state(&self) -> &TableState {
        &self.table_state
    }

    pub fn error_popup(&self) -> &Option<String> {
        &self.error_popup
    }

    fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.error_popup = None;
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.refresh(terminal).await?;

        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match self.handle_key(key.code) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Refresh => self.refresh(terminal).await?,
                    KeyAction::None => {}
                }
            }
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.dashboard,
                &mut self.table_state,
                &self.popup_message,
                &self.error_popup,
            )
        })?;
        Ok(())
    }

    /// Refetches the table, showing a loading popup while the request runs.
    pub async fn refresh<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.table_state.select(None);
        self.show_popup(&format!(
            "Fetching {} prices for the last {} days...",
            self.dashboard.symbol(),
            self.dashboard.days()
        ));
        self.draw(terminal)?;

        let result = self.dashboard.refresh().await;

        self.clear_popup();

        if let Err(e) = result {
            tracing::error!(error = ?e, "Failed to refresh prices");
            self.show_error_popup(&format!("Error fetching prices: {:?}", e));
        }

        Ok(())
    }

    /// Applies a key press to the app state and tells the caller what to do next.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyAction {
        if self.error_popup.is_some() {
            return match code {
                KeyCode::Char('q') => KeyAction::Quit,
                KeyCode::Enter | KeyCode::Esc => {
                    self.clear_error_popup();
                    KeyAction::None
                }
                _ => KeyAction::None,
            };
        }

        let days = self.dashboard.days();
        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::F(5) => KeyAction::Refresh,
            KeyCode::Esc => {
                self.table_state.select(None);
                KeyAction::None
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                self.change_days(days.decrease(1))
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
                self.change_days(days.increase(1))
            }
            KeyCode::PageDown => self.change_days(days.decrease(PAGE_STEP)),
            KeyCode::PageUp => self.change_days(days.increase(PAGE_STEP)),
            KeyCode::Home => self.change_days(DayCount::min()),
            KeyCode::End => self.change_days(DayCount::max()),
            KeyCode::Down => {
                let rows = self.dashboard.rows();
                if !rows.is_empty() {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i >= rows.len() - 1 {
                                0
                            } else {
                                i + 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
                KeyAction::None
            }
            KeyCode::Up => {
                let rows = self.dashboard.rows();
                if !rows.is_empty() {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i == 0 {
                                rows.len() - 1
                            } else {
                                i - 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    fn change_days(&mut self, days: DayCount) -> KeyAction {
        if self.dashboard.set_days(days) {
            KeyAction::Refresh
        } else {
            KeyAction::None
        }
    }
}
