//! Multi-line text pane with line numbers, placeholder and a blinking cursor

use super::TextRegion;
use crate::config::DEFAULT_PLACEHOLDER;
use crate::event::{Command, PanelEvent};
use crate::theme::{RegionStyle, Theme};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::BorderType;
use std::rc::Rc;
use unicode_width::UnicodeWidthChar;

/// Spaces inserted for a pasted tab
const TAB_WIDTH: usize = 4;

/// Drawn in place of a character too wide for the text column
const WIDE_SUBSTITUTE: char = '…';

/// An editable text pane
#[derive(Debug, Clone)]
pub struct TextArea {
    lines: Vec<Vec<char>>,
    row: usize,
    col: usize,
    /// Column to aim for when moving vertically through shorter lines
    preferred_col: Option<usize>,
    /// First visible visual row
    scroll: usize,
    width: u16,
    height: u16,
    focused: bool,
    cursor_visible: bool,
    show_line_numbers: bool,
    placeholder: String,
    theme: Rc<Theme>,
}

impl TextArea {
    /// Create an empty, blurred pane sharing `theme`
    pub fn new(theme: Rc<Theme>) -> Self {
        TextArea {
            lines: vec![Vec::new()],
            row: 0,
            col: 0,
            preferred_col: None,
            scroll: 0,
            width: 0,
            height: 0,
            focused: false,
            cursor_visible: false,
            show_line_numbers: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            theme,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Replace the contents and move the cursor to the end
    pub fn set_value(&mut self, value: &str) {
        self.lines = vec![Vec::new()];
        self.row = 0;
        self.col = 0;
        self.preferred_col = None;
        self.insert_str(value);
        self.keep_cursor_visible();
    }

    /// Cursor position as (line, column) in characters
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// First visible visual row
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    // ---- editing ---------------------------------------------------------

    fn insert_char(&mut self, ch: char) {
        match ch {
            '\n' => self.insert_newline(),
            '\t' => {
                for _ in 0..TAB_WIDTH {
                    self.insert_char(' ');
                }
            }
            c if c.is_control() => {}
            c => {
                self.lines[self.row].insert(self.col, c);
                self.col += 1;
            }
        }
        self.preferred_col = None;
    }

    fn insert_str(&mut self, value: &str) {
        for ch in value.chars().filter(|c| *c != '\r') {
            self.insert_char(ch);
        }
    }

    fn insert_newline(&mut self) {
        let rest = self.lines[self.row].split_off(self.col);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            self.lines[self.row].remove(self.col);
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.lines[self.row].len();
            self.lines[self.row].extend(line);
        }
        self.preferred_col = None;
    }

    fn delete(&mut self) {
        if self.col < self.lines[self.row].len() {
            self.lines[self.row].remove(self.col);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].extend(next);
        }
        self.preferred_col = None;
    }

    fn kill_to_end(&mut self) {
        self.lines[self.row].truncate(self.col);
        self.preferred_col = None;
    }

    // ---- movement --------------------------------------------------------

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.lines[self.row].len();
        }
        self.preferred_col = None;
    }

    fn move_right(&mut self) {
        if self.col < self.lines[self.row].len() {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
        self.preferred_col = None;
    }

    fn move_vertical(&mut self, up: bool) {
        let target = if up {
            match self.row.checked_sub(1) {
                Some(row) => row,
                None => return,
            }
        } else if self.row + 1 < self.lines.len() {
            self.row + 1
        } else {
            return;
        };
        let column = *self.preferred_col.get_or_insert(self.col);
        self.row = target;
        self.col = column.min(self.lines[target].len());
    }

    fn move_home(&mut self) {
        self.col = 0;
        self.preferred_col = None;
    }

    fn move_end(&mut self) {
        self.col = self.lines[self.row].len();
        self.preferred_col = None;
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('a') if ctrl => self.move_home(),
            KeyCode::Char('e') if ctrl => self.move_end(),
            KeyCode::Char('k') if ctrl => self.kill_to_end(),
            KeyCode::Char(_) if ctrl || alt => return,
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Enter if !ctrl && !alt => self.insert_char('\n'),
            KeyCode::Backspace if !ctrl && !alt => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_vertical(true),
            KeyCode::Down => self.move_vertical(false),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return,
        }
        self.cursor_visible = true;
        self.keep_cursor_visible();
    }

    // ---- geometry --------------------------------------------------------

    fn inner_height(&self) -> usize {
        self.height.saturating_sub(2) as usize
    }

    fn gutter_width(&self) -> usize {
        if !self.show_line_numbers {
            return 0;
        }
        let digits = self.lines.len().to_string().len().max(2);
        let gutter = digits + 2;
        // Drop the gutter rather than leave no room for text
        if (self.width.saturating_sub(2) as usize) <= gutter {
            0
        } else {
            gutter
        }
    }

    fn text_width(&self) -> usize {
        (self.width.saturating_sub(2) as usize).saturating_sub(self.gutter_width())
    }

    /// Visual row of the cursor counted from the top of the buffer
    fn cursor_visual_row(&self) -> usize {
        let width = self.text_width().max(1);
        let before: usize = self.lines[..self.row]
            .iter()
            .map(|line| wrap_line(line, width).len())
            .sum();
        let chunk = wrap_line(&self.lines[self.row], width)
            .iter()
            .position(|&(start, end)| (start..end).contains(&self.col))
            .unwrap_or(0);
        before + chunk
    }

    fn keep_cursor_visible(&mut self) {
        let visible = self.inner_height();
        if visible == 0 {
            self.scroll = 0;
            return;
        }
        let cursor = self.cursor_visual_row();
        if cursor < self.scroll {
            self.scroll = cursor;
        } else if cursor >= self.scroll + visible {
            self.scroll = cursor + 1 - visible;
        }
    }

    // ---- rendering -------------------------------------------------------

    fn style(&self) -> &RegionStyle {
        self.theme.region(self.focused)
    }

    fn border_row(&self, top: bool) -> Line<'static> {
        let style = self.style();
        let inner = self.width.saturating_sub(2) as usize;
        match style.border {
            Some(kind) => {
                let set = BorderType::border_symbols(kind);
                let (left, fill, right) = if top {
                    (set.top_left, set.horizontal_top, set.top_right)
                } else {
                    (set.bottom_left, set.horizontal_bottom, set.bottom_right)
                };
                let text = format!("{}{}{}", left, fill.repeat(inner), right);
                Line::from(Span::styled(text, style.border_style))
            }
            None => Line::from(" ".repeat(inner + 2)),
        }
    }

    fn side(&self, right: bool) -> Span<'static> {
        let style = self.style();
        match style.border {
            Some(kind) => {
                let set = BorderType::border_symbols(kind);
                let sym = if right {
                    set.vertical_right
                } else {
                    set.vertical_left
                };
                Span::styled(sym, style.border_style)
            }
            None => Span::raw(" "),
        }
    }

    fn gutter(&self, number: Option<usize>, style: Style) -> Option<Span<'static>> {
        let width = self.gutter_width();
        if width == 0 {
            return None;
        }
        let text = match number {
            Some(n) => format!(" {:>w$} ", n, w = width - 2),
            None => " ".repeat(width),
        };
        Some(Span::styled(text, style))
    }

    /// One buffer row segment, padded to the text width
    fn text_spans(
        &self,
        line: &[char],
        range: (usize, usize),
        on_cursor_line: bool,
    ) -> Vec<Span<'static>> {
        let style = self.style();
        let base = if on_cursor_line && self.focused {
            style.text.patch(style.cursor_line)
        } else {
            style.text
        };
        let draw_cursor = self.focused && self.cursor_visible && on_cursor_line;
        let limit = self.text_width().max(1);

        let mut spans = Vec::new();
        let mut run = String::new();
        let mut used = 0;
        for idx in range.0..range.1 {
            let ch = line.get(idx).map(|c| fit_cell(*c, limit));
            if draw_cursor && idx == self.col {
                if !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), base));
                }
                let cell = ch.unwrap_or(' ');
                used += char_width(cell);
                spans.push(Span::styled(cell.to_string(), base.patch(self.theme.cursor)));
            } else if let Some(c) = ch {
                used += char_width(c);
                run.push(c);
            }
        }
        let pad = self.text_width().saturating_sub(used);
        run.push_str(&" ".repeat(pad));
        spans.push(Span::styled(run, base));
        spans
    }

    fn placeholder_spans(&self) -> Vec<Span<'static>> {
        let style = self.style();
        let width = self.text_width();
        let mut text = String::new();
        let mut used = 0;
        for c in self.placeholder.chars() {
            let w = char_width(c);
            if used + w > width {
                break;
            }
            used += w;
            text.push(c);
        }
        let base = if self.focused {
            style.text.patch(style.cursor_line)
        } else {
            style.text
        };
        let mut spans = Vec::new();
        let mut chars = text.chars();
        if self.focused && self.cursor_visible {
            if let Some(first) = chars.next() {
                spans.push(Span::styled(
                    first.to_string(),
                    style.placeholder.patch(self.theme.cursor),
                ));
            }
        }
        let rest: String = chars.collect();
        if !rest.is_empty() {
            spans.push(Span::styled(rest, base.patch(style.placeholder)));
        }
        spans.push(Span::styled(" ".repeat(width.saturating_sub(used)), base));
        spans
    }

    fn content_rows(&self) -> Vec<Line<'static>> {
        let style = self.style();
        let visible = self.inner_height();
        let width = self.text_width();
        let mut rows = Vec::with_capacity(visible);

        if self.is_empty() {
            let mut spans = vec![self.side(false)];
            spans.extend(self.gutter(Some(1), style.line_number));
            spans.extend(self.placeholder_spans());
            spans.push(self.side(true));
            rows.push(Line::from(spans));
        } else if width > 0 {
            let mut visual = 0;
            'lines: for (idx, line) in self.lines.iter().enumerate() {
                for (chunk_idx, range) in wrap_line(line, width).into_iter().enumerate() {
                    if visual >= self.scroll + visible {
                        break 'lines;
                    }
                    if visual >= self.scroll {
                        let on_cursor = idx == self.row && (range.0..range.1).contains(&self.col);
                        let number = (chunk_idx == 0).then_some(idx + 1);
                        let mut spans = vec![self.side(false)];
                        spans.extend(self.gutter(number, style.line_number));
                        spans.extend(self.text_spans(line, range, on_cursor));
                        spans.push(self.side(true));
                        rows.push(Line::from(spans));
                    }
                    visual += 1;
                }
            }
        }

        while rows.len() < visible {
            let mut spans = vec![self.side(false)];
            spans.extend(self.gutter(None, style.end_of_buffer));
            spans.push(Span::styled(" ".repeat(width), style.end_of_buffer));
            spans.push(self.side(true));
            rows.push(Line::from(spans));
        }
        rows.truncate(visible);
        rows
    }
}

impl TextRegion for TextArea {
    fn set_width(&mut self, width: u16) {
        self.width = width;
        self.keep_cursor_visible();
    }

    fn set_height(&mut self, height: u16) {
        self.height = height;
        self.keep_cursor_visible();
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn focus(&mut self) -> Option<Command> {
        self.focused = true;
        self.cursor_visible = true;
        Some(Command::Blink)
    }

    fn blur(&mut self) {
        self.focused = false;
        self.cursor_visible = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_event(&mut self, event: &PanelEvent) -> Option<Command> {
        match event {
            PanelEvent::Key(key) if self.focused => {
                self.handle_key(key);
                None
            }
            PanelEvent::Paste(text) if self.focused => {
                self.insert_str(text);
                self.cursor_visible = true;
                self.keep_cursor_visible();
                None
            }
            PanelEvent::Tick if self.focused => {
                self.cursor_visible = !self.cursor_visible;
                Some(Command::Blink)
            }
            PanelEvent::Resize { .. } => {
                self.keep_cursor_visible();
                None
            }
            PanelEvent::Key(_) | PanelEvent::Paste(_) | PanelEvent::Tick | PanelEvent::Mouse(_) => {
                None
            }
        }
    }

    fn render(&self) -> Text<'static> {
        if self.width < 2 || self.height < 2 {
            let blank = " ".repeat(self.width as usize);
            return Text::from(
                (0..self.height)
                    .map(|_| Line::from(blank.clone()))
                    .collect::<Vec<_>>(),
            );
        }
        let width = self.width as usize;
        let mut rows = Vec::with_capacity(self.height as usize);
        rows.push(self.border_row(true));
        rows.extend(self.content_rows().into_iter().map(|row| fit_line(row, width)));
        rows.push(self.border_row(false));
        Text::from(rows)
    }

    fn value(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(1)
}

/// `c`, or [`WIDE_SUBSTITUTE`] when `c` cannot fit in a `width`-cell column
fn fit_cell(c: char, width: usize) -> char {
    if char_width(c) > width {
        WIDE_SUBSTITUTE
    } else {
        c
    }
}

/// Pad or cut `line` to exactly `width` cells
fn fit_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    let total = line.width();
    if total < width {
        line.spans.push(Span::raw(" ".repeat(width - total)));
        return line;
    }
    if total == width {
        return line;
    }

    let mut spans = Vec::with_capacity(line.spans.len());
    let mut used = 0;
    for span in line.spans {
        let span_width = span.width();
        if used + span_width <= width {
            used += span_width;
            spans.push(span);
            continue;
        }
        let mut text = String::new();
        for c in span.content.chars() {
            let w = char_width(c);
            if used + w > width {
                break;
            }
            used += w;
            text.push(c);
        }
        if !text.is_empty() {
            spans.push(Span::styled(text, span.style));
        }
        break;
    }
    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }
    Line::from(spans)
}

/// Split a line into visual rows no wider than `width`.
///
/// Ranges are over character indices and count one extra cell past the end of
/// the line where the cursor can sit, so the last range may end at
/// `line.len() + 1`.
fn wrap_line(line: &[char], width: usize) -> Vec<(usize, usize)> {
    let width = width.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for idx in 0..=line.len() {
        let w = line.get(idx).map_or(1, |c| char_width(fit_cell(*c, width)));
        if used + w > width && idx > start {
            chunks.push((start, idx));
            start = idx;
            used = 0;
        }
        used += w;
    }
    chunks.push((start, line.len() + 1));
    chunks
}
