use super::styles;
use crate::app::{DetailContent, Pane, Session};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the detail pane (right side): the selected commit's full patch
/// followed by a ready-to-run cherry-pick command.
pub fn render(f: &mut Frame, area: Rect, session: &Session) {
    let border = if session.focus == Pane::Detail {
        styles::focused_border()
    } else {
        styles::unfocused_border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Commit Details (git show) ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(commit) = session.selected_commit() else {
        return;
    };

    let lines = match &session.detail {
        DetailContent::Loading => vec![Line::styled(
            "Loading...",
            Style::default().fg(styles::MUTED),
        )],
        DetailContent::Error(msg) => vec![Line::styled(msg.clone(), styles::error_style())],
        DetailContent::Patch(text) => {
            let mut lines: Vec<Line> = text.lines().map(patch_line).collect();
            lines.push(Line::default());
            lines.push(Line::styled(
                "--- Cherry-pick command ---",
                Style::default().fg(styles::CYAN),
            ));
            lines.push(Line::styled(
                format!("git cherry-pick {}", commit.hash),
                Style::default().fg(styles::GREEN),
            ));
            lines
        }
    };

    // The scroll offset stores no upper bound; clamp it to the content here
    let max_scroll = lines.len().saturating_sub(inner.height as usize);
    let offset = session.detail_scroll.min(max_scroll);

    let visible: Vec<Line> = lines.into_iter().skip(offset).collect();
    f.render_widget(Paragraph::new(visible), inner);
}

/// Style one verbatim patch line by its leading characters
fn patch_line(text: &str) -> Line<'_> {
    if text.starts_with("@@") {
        Line::styled(text, styles::hunk_header_style())
    } else if text.starts_with('+') && !text.starts_with("+++") {
        Line::styled(text, styles::add_style())
    } else if text.starts_with('-') && !text.starts_with("---") {
        Line::styled(text, styles::del_style())
    } else if text.starts_with("commit ") {
        Line::styled(text, Style::default().fg(styles::YELLOW))
    } else {
        Line::styled(text, Style::default().fg(styles::TEXT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_of(text: &str) -> Style {
        patch_line(text).style
    }

    #[test]
    fn added_and_removed_lines_are_colored() {
        assert_eq!(style_of("+new line"), styles::add_style());
        assert_eq!(style_of("-old line"), styles::del_style());
    }

    #[test]
    fn file_headers_are_not_diff_colored() {
        assert_ne!(style_of("+++ b/src/main.rs"), styles::add_style());
        assert_ne!(style_of("--- a/src/main.rs"), styles::del_style());
    }

    #[test]
    fn hunk_headers_use_hunk_style() {
        assert_eq!(style_of("@@ -1,4 +1,6 @@"), styles::hunk_header_style());
    }
}
