use super::styles;
use crate::app::{Pane, Session};
use crate::config::GtConfig;
use crate::git::CommitRecord;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the commit list pane (left side)
pub fn render(f: &mut Frame, area: Rect, session: &Session, config: &GtConfig) {
    let border = if session.focus == Pane::List {
        styles::focused_border()
    } else {
        styles::unfocused_border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" Commits ({}) ", session.commits.len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if session.is_empty() {
        let msg = Paragraph::new(Line::styled(
            "No missing commits — branches are reconciled.",
            Style::default().fg(styles::MUTED),
        ));
        f.render_widget(msg, inner);
        return;
    }

    let top = scroll_top(session.selected, inner.height as usize);
    let mut lines: Vec<Line> = Vec::new();
    for (i, commit) in session.commits.iter().enumerate().skip(top) {
        if i - top >= inner.height as usize {
            break;
        }
        let text = clip_columns(
            &row_text(commit, config.display.hash_length),
            session.list_scroll,
        );
        if i == session.selected {
            lines.push(Line::styled(text, styles::selected_style()));
        } else {
            lines.push(Line::styled(text, Style::default().fg(styles::TEXT)));
        }
    }
    f.render_widget(Paragraph::new(lines), inner);
}

/// One list row: hash prefix, subject, author, date. Never wrapped;
/// horizontal scrolling exposes the tail.
fn row_text(commit: &CommitRecord, hash_length: usize) -> String {
    let prefix = &commit.hash[..commit.hash.len().min(hash_length)];
    format!(
        "{} {} ({}, {})",
        prefix, commit.subject, commit.author, commit.date
    )
}

/// Drop the first `offset` columns (characters, not bytes)
fn clip_columns(text: &str, offset: usize) -> String {
    text.chars().skip(offset).collect()
}

/// First visible row so that the selected row stays on screen
fn scroll_top(selected: usize, height: usize) -> usize {
    if height == 0 {
        return selected;
    }
    selected.saturating_sub(height - 1)
}
