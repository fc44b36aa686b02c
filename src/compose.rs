//! Frame composition: panes side by side, then the help line

use ratatui::text::{Line, Span, Text};

/// Join blocks left to right, aligned to the top edge.
///
/// Each block is padded to its own widest line so the next block starts at a
/// fixed column; shorter blocks are padded with blank rows.
pub fn join_horizontal(blocks: &[Text<'static>]) -> Text<'static> {
    let widths: Vec<usize> = blocks.iter().map(Text::width).collect();
    let rows = blocks.iter().map(|b| b.lines.len()).max().unwrap_or(0);

    let lines = (0..rows)
        .map(|row| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            for (block, &width) in blocks.iter().zip(&widths) {
                let used = match block.lines.get(row) {
                    Some(line) => {
                        spans.extend(line.spans.iter().cloned().map(|s| s.patch_style(line.style)));
                        line.width()
                    }
                    None => 0,
                };
                if width > used {
                    spans.push(Span::raw(" ".repeat(width - used)));
                }
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();
    Text::from(lines)
}

/// Full frame: joined panes, one blank line, then the help line
pub fn frame(panes: &[Text<'static>], help: Line<'static>) -> Text<'static> {
    let mut text = join_horizontal(panes);
    text.lines.push(Line::default());
    text.lines.push(help);
    text
}

/// Plain-text form of a frame, one `\n` between rows
pub fn to_plain(text: &Text) -> String {
    text.lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
