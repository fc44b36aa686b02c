//! Event loop driving the panel

use crate::config::Config;
use crate::error::Result;
use crate::event::{Command, PanelEvent};
use crate::panel::PanelModel;
use crate::region::{TextArea, TextRegion};
use crossterm::event;
use ratatui::{backend::Backend, Frame, Terminal};
use std::time::{Duration, Instant};
use tracing::info;

/// How long to wait for input when no blink is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// The main application state
pub struct App<R: TextRegion = TextArea> {
    panel: PanelModel<R>,

    /// Delay between cursor blink ticks
    blink_interval: Duration,

    /// When the next blink tick is due, if one is scheduled
    next_blink: Option<Instant>,

    /// Whether the app should quit
    should_quit: bool,
}

impl App<TextArea> {
    pub fn new(config: &Config) -> Result<Self> {
        let panel = PanelModel::new(config)?;
        Ok(App::with_panel(panel, config.blink_interval))
    }
}

impl<R: TextRegion> App<R> {
    pub fn with_panel(mut panel: PanelModel<R>, blink_interval: Duration) -> Self {
        let commands = panel.init();
        let mut app = App {
            panel,
            blink_interval,
            next_blink: None,
            should_quit: false,
        };
        app.apply(commands);
        app
    }

    /// Run until the panel asks to quit
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!(panes = self.panel.len(), "event loop started");

        let size = terminal.size()?;
        self.handle(PanelEvent::Resize {
            width: size.width,
            height: size.height,
        });

        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(self.poll_timeout(Instant::now()))? {
                if let Some(panel_event) = PanelEvent::from_terminal(event::read()?) {
                    self.handle(panel_event);
                }
            }

            if self.blink_due(Instant::now()) {
                self.next_blink = None;
                self.handle(PanelEvent::Tick);
            }
        }

        info!("event loop ended");
        Ok(())
    }

    /// Dispatch one event and act on the commands it produced
    pub fn handle(&mut self, event: PanelEvent) {
        let commands = self.panel.dispatch(event);
        self.apply(commands);
    }

    fn apply(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Quit => self.should_quit = true,
                Command::Blink => self.next_blink = Some(Instant::now() + self.blink_interval),
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.panel.draw(frame);
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        match self.next_blink {
            Some(due) => due.saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }

    fn blink_due(&self, now: Instant) -> bool {
        self.next_blink.is_some_and(|due| now >= due)
    }

    pub fn panel(&self) -> &PanelModel<R> {
        &self.panel
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn blink_scheduled(&self) -> bool {
        self.next_blink.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(&Config::default()).unwrap()
    }

    #[test]
    fn blink_is_scheduled_at_start() {
        let app = app();
        assert!(app.blink_scheduled());
        assert!(!app.should_quit());
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle(PanelEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(app.should_quit());
        assert!(app.panel().is_quitting());
    }

    #[test]
    fn blink_deadline_drives_timeout() {
        let app = App::with_panel(
            PanelModel::new(&Config::default()).unwrap(),
            Duration::from_millis(500),
        );
        let now = Instant::now();
        assert!(app.poll_timeout(now) <= Duration::from_millis(500));
        assert!(!app.blink_due(now));
        assert!(app.blink_due(now + Duration::from_secs(1)));
    }

    #[test]
    fn draws_panes_and_help() {
        let mut app = app();
        app.handle(PanelEvent::Resize {
            width: 60,
            height: 12,
        });
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..60).map(|x| buffer[(x, y)].symbol().to_string()).collect()
        };
        assert!(row(0).starts_with('╭'));
        assert!(row(1).contains("Type something"));
        assert!(row(7).trim().is_empty());
        assert!(row(8).starts_with("ctrl+n next"));
    }
}
