//! The panel: a fixed row of text panes with one of them focused
//!
//! [`PanelModel`] owns every pane and is the only thing that changes their
//! state. Events come in through [`PanelModel::dispatch`], one at a time:
//!
//! - quit (Esc, Ctrl-C) blurs every pane and ends the session
//! - advance focus (Ctrl-N) blurs the focused pane and focuses the next one,
//!   wrapping to the first
//! - generate (Ctrl-Enter) is recognised and does nothing
//! - a resize records the viewport and re-lays out every pane, then falls
//!   through to the broadcast
//! - everything else is broadcast to every pane, focused or not
//!
//! A left click on a pane that is not focused moves focus there before the
//! click is broadcast.

use crate::compose;
use crate::config::{check_region_count, Config, HELP_HEIGHT};
use crate::error::Result;
use crate::event::{Command, PanelEvent};
use crate::help::{HelpBar, HelpRenderer};
use crate::keymap::{Action, KeyMap};
use crate::layout::{pane_rects, pane_size, PaneSize};
use crate::region::{TextArea, TextRegion};
use crate::theme::Theme;
use crate::zone::ZoneRegistry;
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::rc::Rc;
use tracing::{debug, trace};

/// Row of panes with exactly one focused
pub struct PanelModel<R: TextRegion = TextArea> {
    regions: Vec<R>,
    focus: usize,
    width: u16,
    height: u16,
    help_height: u16,
    keymap: KeyMap,
    zones: ZoneRegistry,
    help: Box<dyn HelpRenderer>,
    /// Commands produced while building the panel, handed out by `init`
    pending: Vec<Command>,
    quitting: bool,
}

impl PanelModel<TextArea> {
    /// Build a panel of [`TextArea`]s sharing one theme
    pub fn new(config: &Config) -> Result<Self> {
        check_region_count(config.panes)?;
        let theme = Rc::new(Theme::default());
        let regions = (0..config.panes)
            .map(|_| TextArea::new(Rc::clone(&theme)).with_placeholder(config.placeholder.as_str()))
            .collect();
        let panel = PanelModel::with_regions(regions, Box::new(HelpBar::new(theme)))?;
        Ok(panel.with_help_height(config.help_height))
    }
}

impl<R: TextRegion> PanelModel<R> {
    /// Build a panel around existing panes. The first pane is focused and
    /// the rest are blurred.
    pub fn with_regions(mut regions: Vec<R>, help: Box<dyn HelpRenderer>) -> Result<Self> {
        check_region_count(regions.len())?;

        for region in regions.iter_mut().skip(1) {
            region.blur();
        }
        let pending = regions[0].focus().into_iter().collect();

        debug!(panes = regions.len(), "panel created");
        Ok(PanelModel {
            regions,
            focus: 0,
            width: 0,
            height: 0,
            help_height: HELP_HEIGHT,
            keymap: KeyMap::new(),
            zones: ZoneRegistry::new(),
            help,
            pending,
            quitting: false,
        })
    }

    /// Rows reserved for the help bar
    pub fn with_help_height(mut self, help_height: u16) -> Self {
        self.help_height = help_height;
        self
    }

    /// Commands to run before the first event (the focused pane's blink)
    pub fn init(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    /// Handle one event and return the follow-up work it produced
    pub fn dispatch(&mut self, event: PanelEvent) -> Vec<Command> {
        if self.quitting {
            trace!(?event, "ignoring event after quit");
            return Vec::new();
        }

        let mut commands = Vec::new();
        match &event {
            PanelEvent::Key(key) => match self.keymap.resolve(key) {
                Some(Action::Quit) => return self.quit(),
                Some(Action::Next) => {
                    let next = (self.focus + 1) % self.regions.len();
                    self.move_focus(next, &mut commands);
                    return commands;
                }
                Some(Action::Generate) => {
                    debug!("generate requested");
                    return commands;
                }
                None => {}
            },
            PanelEvent::Resize { width, height } => {
                self.width = *width;
                self.height = *height;
                self.layout();
            }
            PanelEvent::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    if let Some(target) = self.zones.hit(mouse.column, mouse.row) {
                        if target != self.focus {
                            self.move_focus(target, &mut commands);
                        }
                    }
                }
            }
            PanelEvent::Tick | PanelEvent::Paste(_) => {}
        }

        self.broadcast(&event, &mut commands);
        commands
    }

    fn quit(&mut self) -> Vec<Command> {
        for region in &mut self.regions {
            region.blur();
        }
        self.quitting = true;
        debug!("quit requested");
        vec![Command::Quit]
    }

    fn move_focus(&mut self, target: usize, commands: &mut Vec<Command>) {
        self.regions[self.focus].blur();
        debug!(from = self.focus, to = target, "focus moved");
        self.focus = target;
        if let Some(command) = self.regions[self.focus].focus() {
            push_unique(commands, command);
        }
    }

    fn layout(&mut self) {
        let size = self.pane_size();
        debug!(
            width = self.width,
            height = self.height,
            pane_width = size.width,
            pane_height = size.height,
            "layout"
        );
        for region in &mut self.regions {
            region.set_width(size.width);
            region.set_height(size.height);
        }
        self.zones.clear();
        for (id, area) in pane_rects(size, self.regions.len()).into_iter().enumerate() {
            self.zones.mark(id, area);
        }
    }

    fn broadcast(&mut self, event: &PanelEvent, commands: &mut Vec<Command>) {
        trace!(?event, "broadcast");
        for region in &mut self.regions {
            if let Some(command) = region.handle_event(event) {
                push_unique(commands, command);
            }
        }
    }

    /// Compose the frame: panes left to right, a blank line, the help line
    pub fn render(&self) -> Text<'static> {
        let panes: Vec<Text<'static>> = self.regions.iter().map(TextRegion::render).collect();
        let help = self.help.short_help(&self.keymap.bindings());
        compose::frame(&panes, help)
    }

    /// Render the composed frame. Zones are not touched here; they follow
    /// the last layout.
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(Paragraph::new(self.render()), frame.area());
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// Last seen (width, height); zero until the first resize
    pub fn viewport(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Size every pane currently gets
    pub fn pane_size(&self) -> PaneSize {
        pane_size(self.width, self.height, self.regions.len(), self.help_height)
    }

    pub fn help_height(&self) -> u16 {
        self.help_height
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> &[R] {
        &self.regions
    }

    pub fn focused(&self) -> &R {
        &self.regions[self.focus]
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }
}

fn push_unique(commands: &mut Vec<Command>, command: Command) {
    if !commands.contains(&command) {
        commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn panel(panes: usize) -> PanelModel {
        PanelModel::new(&Config {
            panes,
            ..Config::default()
        })
        .unwrap()
    }

    fn ctrl(c: char) -> PanelEvent {
        PanelEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn first_pane_starts_focused() {
        let mut panel = panel(3);
        assert_eq!(panel.focus_index(), 0);
        assert!(panel.regions()[0].is_focused());
        assert!(!panel.regions()[1].is_focused());
        assert_eq!(panel.init(), vec![Command::Blink]);
        assert!(panel.init().is_empty());
    }

    #[test]
    fn panel_is_never_empty() {
        let panel = panel(1);
        assert!(!panel.is_empty());
        assert_eq!(panel.len(), 1);
    }

    #[test]
    fn rejects_bad_pane_counts() {
        for panes in [0, 7] {
            assert!(PanelModel::new(&Config {
                panes,
                ..Config::default()
            })
            .is_err());
        }
    }

    #[test]
    fn typing_reaches_only_the_focused_area() {
        let mut panel = panel(2);
        panel.dispatch(PanelEvent::Resize {
            width: 80,
            height: 24,
        });
        panel.dispatch(PanelEvent::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        panel.dispatch(ctrl('n'));
        panel.dispatch(PanelEvent::Key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)));

        assert_eq!(panel.regions()[0].value(), "x");
        assert_eq!(panel.regions()[1].value(), "y");
    }

    #[test]
    fn next_key_is_not_typed() {
        let mut panel = panel(1);
        let commands = panel.dispatch(ctrl('n'));
        assert_eq!(commands, vec![Command::Blink]);
        assert_eq!(panel.focus_index(), 0);
        assert!(panel.focused().is_focused());
        assert_eq!(panel.focused().value(), "");
    }

    #[test]
    fn resize_sets_zones() {
        let mut panel = panel(2);
        panel.dispatch(PanelEvent::Resize {
            width: 81,
            height: 24,
        });
        assert_eq!(panel.zones().len(), 2);
        assert_eq!(panel.zones().hit(45, 3), Some(1));
        assert_eq!(panel.zones().hit(80, 3), None);
    }

    #[test]
    fn drawing_leaves_zones_from_layout() {
        let mut panel = panel(2);
        panel.dispatch(PanelEvent::Resize {
            width: 60,
            height: 12,
        });
        let before = panel.zones().clone();

        let mut terminal = ratatui::Terminal::new(ratatui::backend::TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| panel.draw(f)).unwrap();

        for id in 0..panel.len() {
            assert_eq!(panel.zones().get(id), before.get(id));
        }
        assert_eq!(panel.zones().get(1), Some(ratatui::layout::Rect::new(30, 0, 30, 7)));
    }

    #[test]
    fn custom_help_height_shrinks_panes() {
        let mut panel = panel(2).with_help_height(2);
        panel.dispatch(PanelEvent::Resize {
            width: 80,
            height: 24,
        });
        assert_eq!(panel.help_height(), 2);
        assert_eq!(panel.pane_size().height, 22);
    }
}
