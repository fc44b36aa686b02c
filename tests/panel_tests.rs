// Integration tests for the panel state machine

use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::text::{Line, Text};

use panedit::compose::to_plain;
use panedit::event::{Command, PanelEvent};
use panedit::help::HelpBar;
use panedit::region::TextRegion;
use panedit::theme::Theme;
use panedit::PanelModel;

/// Pane that records what the panel asked of it
#[derive(Debug, Default)]
struct Recorder {
    width: u16,
    height: u16,
    focused: bool,
    focus_calls: usize,
    blur_calls: usize,
    /// Events received, with the size the pane had at that moment
    seen: Vec<(PanelEvent, u16, u16)>,
    text: String,
}

impl TextRegion for Recorder {
    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn focus(&mut self) -> Option<Command> {
        self.focused = true;
        self.focus_calls += 1;
        Some(Command::Blink)
    }

    fn blur(&mut self) {
        self.focused = false;
        self.blur_calls += 1;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_event(&mut self, event: &PanelEvent) -> Option<Command> {
        self.seen.push((event.clone(), self.width, self.height));
        if let PanelEvent::Key(KeyEvent {
            code: KeyCode::Char(c),
            ..
        }) = event
        {
            if self.focused {
                self.text.push(*c);
            }
        }
        None
    }

    fn render(&self) -> Text<'static> {
        let marker = if self.focused { "*" } else { "-" };
        Text::from(
            (0..self.height)
                .map(|_| Line::from(marker.repeat(self.width as usize)))
                .collect::<Vec<_>>(),
        )
    }

    fn value(&self) -> String {
        self.text.clone()
    }
}

fn panel(count: usize) -> PanelModel<Recorder> {
    let regions = (0..count).map(|_| Recorder::default()).collect();
    let help = HelpBar::new(Rc::new(Theme::default()));
    PanelModel::with_regions(regions, Box::new(help)).unwrap()
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> PanelEvent {
    PanelEvent::Key(KeyEvent::new(code, modifiers))
}

fn next() -> PanelEvent {
    key(KeyCode::Char('n'), KeyModifiers::CONTROL)
}

fn generate() -> PanelEvent {
    key(KeyCode::Enter, KeyModifiers::CONTROL)
}

fn resize(width: u16, height: u16) -> PanelEvent {
    PanelEvent::Resize { width, height }
}

fn click(column: u16, row: u16) -> PanelEvent {
    PanelEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn focused_count(panel: &PanelModel<Recorder>) -> usize {
    panel.regions().iter().filter(|r| r.is_focused()).count()
}

fn assert_single_focus(panel: &PanelModel<Recorder>) {
    assert_eq!(focused_count(panel), 1);
    assert!(panel.regions()[panel.focus_index()].is_focused());
}

#[test]
fn exactly_one_pane_is_focused_throughout() {
    let mut panel = panel(4);
    assert_single_focus(&panel);

    let events = vec![
        resize(80, 24),
        next(),
        key(KeyCode::Char('a'), KeyModifiers::NONE),
        PanelEvent::Tick,
        next(),
        generate(),
        PanelEvent::Paste("pasted".into()),
        click(5, 5),
        resize(40, 10),
        next(),
        click(39, 0),
    ];
    for event in events {
        panel.dispatch(event);
        assert_single_focus(&panel);
    }
}

#[test]
fn advancing_len_times_returns_to_start() {
    for count in 1..=6 {
        let mut panel = panel(count);
        let start = panel.focus_index();
        for step in 1..=count {
            panel.dispatch(next());
            assert_eq!(panel.focus_index(), step % count);
        }
        assert_eq!(panel.focus_index(), start);
    }
}

#[test]
fn advance_blurs_old_and_focuses_new() {
    let mut panel = panel(3);
    let commands = panel.dispatch(next());

    assert_eq!(commands, vec![Command::Blink]);
    assert_eq!(panel.focus_index(), 1);
    assert_eq!(panel.regions()[0].blur_calls, 1);
    assert_eq!(panel.regions()[1].focus_calls, 1);
    // the chord itself is not delivered to panes
    assert!(panel.regions().iter().all(|r| r.seen.is_empty()));
}

#[test]
fn single_pane_refocuses_itself() {
    let mut panel = panel(1);
    let before = panel.regions()[0].focus_calls;
    panel.dispatch(next());

    assert_eq!(panel.focus_index(), 0);
    assert!(panel.regions()[0].is_focused());
    assert_eq!(panel.regions()[0].blur_calls, 1);
    assert_eq!(panel.regions()[0].focus_calls, before + 1);
}

#[test]
fn layout_80x24_two_panes() {
    let mut panel = panel(2);
    panel.dispatch(resize(80, 24));
    for region in panel.regions() {
        assert_eq!((region.width(), region.height()), (40, 19));
    }
    assert_eq!(panel.viewport(), (80, 24));
}

#[test]
fn layout_truncates_odd_width() {
    let mut panel = panel(2);
    panel.dispatch(resize(81, 24));
    for region in panel.regions() {
        assert_eq!(region.width(), 40);
    }
}

#[test]
fn tiny_viewport_clamps_height_to_zero() {
    let mut panel = panel(3);
    panel.dispatch(resize(30, 2));
    for region in panel.regions() {
        assert_eq!((region.width(), region.height()), (10, 0));
    }
}

#[test]
fn viewport_is_zero_before_first_resize() {
    let panel = panel(2);
    assert_eq!(panel.viewport(), (0, 0));
    assert!(panel.regions().iter().all(|r| r.width() == 0 && r.height() == 0));
}

#[test]
fn quit_blurs_everything_and_ends_session() {
    for quit in [
        key(KeyCode::Esc, KeyModifiers::NONE),
        key(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut panel = panel(3);
        panel.dispatch(next());
        let commands = panel.dispatch(quit);

        assert_eq!(commands, vec![Command::Quit]);
        assert!(panel.is_quitting());
        assert_eq!(focused_count(&panel), 0);
        assert!(panel.regions().iter().all(|r| r.blur_calls >= 1));

        // nothing is delivered once the session is over
        assert!(panel.dispatch(next()).is_empty());
        panel.dispatch(key(KeyCode::Char('z'), KeyModifiers::NONE));
        assert!(panel.regions().iter().all(|r| r.text.is_empty()));
        assert_eq!(panel.focus_index(), 1);
    }
}

#[test]
fn generate_changes_nothing() {
    let mut panel = panel(3);
    panel.dispatch(resize(90, 30));
    panel.dispatch(key(KeyCode::Char('q'), KeyModifiers::NONE));
    let seen_before: Vec<usize> = panel.regions().iter().map(|r| r.seen.len()).collect();

    let commands = panel.dispatch(generate());

    assert!(commands.is_empty());
    assert_eq!(panel.focus_index(), 0);
    assert_eq!(panel.viewport(), (90, 30));
    let seen_after: Vec<usize> = panel.regions().iter().map(|r| r.seen.len()).collect();
    assert_eq!(seen_before, seen_after);
    assert_eq!(panel.regions()[0].value(), "q");
    for region in panel.regions() {
        assert_eq!((region.width(), region.height()), (30, 25));
    }
}

#[test]
fn resize_lays_out_before_broadcast() {
    let mut panel = panel(2);
    panel.dispatch(resize(100, 40));
    panel.dispatch(key(KeyCode::Char('x'), KeyModifiers::NONE));

    for region in panel.regions() {
        // the raw resize arrives after the pane was already sized
        assert_eq!(region.seen[0], (resize(100, 40), 50, 35));
        assert_eq!(region.seen[1].1, 50);
        assert_eq!(region.seen[1].2, 35);
    }
    assert_eq!(panel.regions()[0].value(), "x");
    assert_eq!(panel.regions()[1].value(), "");
}

#[test]
fn ordinary_events_reach_every_pane() {
    let mut panel = panel(3);
    panel.dispatch(PanelEvent::Tick);
    panel.dispatch(key(KeyCode::Left, KeyModifiers::NONE));
    for region in panel.regions() {
        assert_eq!(region.seen.len(), 2);
        assert_eq!(region.seen[0].0, PanelEvent::Tick);
    }
}

#[test]
fn click_moves_focus_then_broadcasts() {
    let mut panel = panel(3);
    panel.dispatch(resize(90, 20));

    let commands = panel.dispatch(click(65, 4));
    assert_eq!(commands, vec![Command::Blink]);
    assert_eq!(panel.focus_index(), 2);
    assert_single_focus(&panel);
    assert!(panel.regions().iter().all(|r| r.seen.len() == 2));

    // clicking the focused pane, or outside every pane, keeps focus
    panel.dispatch(click(61, 0));
    assert_eq!(panel.focus_index(), 2);
    panel.dispatch(click(10, 18));
    assert_eq!(panel.focus_index(), 2);
}

#[test]
fn render_has_one_block_per_pane_and_one_help_line() {
    for focus_steps in 0..3 {
        let mut panel = panel(3);
        panel.dispatch(resize(30, 8));
        for _ in 0..focus_steps {
            panel.dispatch(next());
        }
        let frame = to_plain(&panel.render());
        let rows: Vec<&str> = frame.split('\n').collect();

        // 3 pane rows, a blank line, the help line
        assert_eq!(rows.len(), 3 + 2);
        let mut expected = String::new();
        for i in 0..3 {
            expected.push_str(&if i == focus_steps { "*" } else { "-" }.repeat(10));
        }
        assert!(rows[..3].iter().all(|row| *row == expected));
        assert_eq!(rows[3], "");
        assert_eq!(rows[4], "ctrl+n next • ctrl+enter generate • esc quit");
    }
}

#[test]
fn construction_enforces_bounds() {
    let help = || Box::new(HelpBar::new(Rc::new(Theme::default())));

    let empty: Vec<Recorder> = Vec::new();
    assert!(PanelModel::with_regions(empty, help()).is_err());

    let seven: Vec<Recorder> = (0..7).map(|_| Recorder::default()).collect();
    assert!(PanelModel::with_regions(seven, help()).is_err());

    let six: Vec<Recorder> = (0..6).map(|_| Recorder::default()).collect();
    assert!(PanelModel::with_regions(six, help()).is_ok());
}
