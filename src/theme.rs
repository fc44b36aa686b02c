use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Styles applied to a pane in one focus state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionStyle {
    /// `None` draws a hidden border: the frame takes space but is blank
    pub border: Option<BorderType>,
    pub border_style: Style,
    pub text: Style,
    pub placeholder: Style,
    pub cursor_line: Style,
    pub line_number: Style,
    pub end_of_buffer: Style,
}

/// Visual theme shared by every pane. Built once and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub cursor: Style,
    pub focused: RegionStyle,
    pub blurred: RegionStyle,
    pub help_key: Style,
    pub help_desc: Style,
    pub help_separator: Style,
}

impl Theme {
    pub fn region(&self, focused: bool) -> &RegionStyle {
        if focused {
            &self.focused
        } else {
            &self.blurred
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        let end_of_buffer = Style::default().fg(Color::Indexed(235));
        let line_number = Style::default().fg(Color::Indexed(241));
        Theme {
            cursor: Style::default()
                .fg(Color::Indexed(212))
                .add_modifier(Modifier::REVERSED),
            focused: RegionStyle {
                border: Some(BorderType::Rounded),
                border_style: Style::default().fg(Color::Indexed(238)),
                text: Style::default(),
                placeholder: Style::default().fg(Color::Indexed(99)),
                cursor_line: Style::default()
                    .bg(Color::Indexed(57))
                    .fg(Color::Indexed(230)),
                line_number,
                end_of_buffer,
            },
            blurred: RegionStyle {
                border: None,
                border_style: Style::default(),
                text: Style::default(),
                placeholder: Style::default().fg(Color::Indexed(238)),
                cursor_line: Style::default(),
                line_number,
                end_of_buffer,
            },
            help_key: Style::default().fg(Color::Rgb(0x90, 0x90, 0x90)),
            help_desc: Style::default().fg(Color::Rgb(0xB2, 0xB2, 0xB2)),
            help_separator: Style::default().fg(Color::Rgb(0xDD, 0xDA, 0xDA)),
        }
    }
}
