use super::styles;
use crate::app::Session;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const HINTS_LEFT: &str = "q:quit  ↑↓/jk:navigate  ←→/hl:scroll list";
const HINTS_RIGHT: &str = "Enter:focus patch  Esc:back  PgUp/PgDn/Space:page";

/// Render the title row plus key hints. On narrow terminals the hints
/// get a second row instead of being truncated.
pub fn render(f: &mut Frame, area: Rect, session: &Session) {
    let title = Line::from(vec![
        Span::styled("Missing commits: ", Style::default().fg(styles::BRIGHT)),
        Span::styled(format!("'{}'", session.branch_a), Style::default().fg(styles::YELLOW)),
        Span::styled(" -> ", Style::default().fg(styles::DIM)),
        Span::styled(format!("'{}'", session.branch_b), Style::default().fg(styles::YELLOW)),
        Span::styled(
            format!("  ({} commits)", session.commits.len()),
            Style::default().fg(styles::MUTED),
        ),
    ]);

    let mut lines = vec![title];
    if area.height > 2 {
        lines.push(Line::styled(HINTS_LEFT, styles::key_hint_style()));
        lines.push(Line::styled(HINTS_RIGHT, styles::key_hint_style()));
    } else {
        lines.push(Line::styled(
            format!("{}  {}", HINTS_LEFT, HINTS_RIGHT),
            styles::key_hint_style(),
        ));
    }

    f.render_widget(Paragraph::new(lines).style(styles::default_style()), area);
}
