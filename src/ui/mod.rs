mod commit_list;
mod detail_view;
mod header;
mod styles;

use crate::app::Session;
use crate::config::GtConfig;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

/// Below this width the header needs an extra row for the key hints
const NARROW_WIDTH: u16 = 100;

/// The list pane never shrinks below this, whatever the percentage says
const MIN_LIST_WIDTH: u16 = 30;

pub fn header_height(width: u16) -> u16 {
    if width < NARROW_WIDTH {
        3
    } else {
        2
    }
}

/// Visible line count of the detail pane body, used for page scrolling
pub fn detail_page_height(area: Rect) -> usize {
    // header rows plus the pane's top/bottom border
    let body = area
        .height
        .saturating_sub(header_height(area.width))
        .saturating_sub(2);
    body.max(1) as usize
}

fn list_width(area: Rect, config: &GtConfig) -> u16 {
    let pct = config.ui.list_percent_clamped();
    let w = (area.width as u32 * pct as u32 / 100) as u16;
    w.max(MIN_LIST_WIDTH.min(area.width))
}

/// Render the entire UI
pub fn draw(f: &mut Frame, session: &Session, config: &GtConfig) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height(f.area().width)),
            Constraint::Min(1),
        ])
        .split(f.area());

    header::render(f, outer[0], session);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(list_width(outer[1], config)),
            Constraint::Min(1),
        ])
        .split(outer[1]);

    commit_list::render(f, main[0], session, config);
    detail_view::render(f, main[1], session);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DetailContent, Session};
    use crate::git::CommitRecord;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn draw_renders_on_a_test_backend() {
        let commits = vec![CommitRecord {
            hash: "aaaa111122223333".to_string(),
            subject: "Fix bug".to_string(),
            author: "Ada".to_string(),
            date: "2024-01-15".to_string(),
        }];
        let mut session = Session::new("feature", "main", commits);
        session.detail = DetailContent::Patch("diff --git a/x b/x\n+added\n".to_string());

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| draw(f, &session, &GtConfig::default()))
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("feature"));
        assert!(rendered.contains("Fix bug"));
        assert!(rendered.contains("git cherry-pick aaaa111122223333"));
    }

    #[test]
    fn draw_renders_the_empty_state() {
        let session = Session::new("feature", "main", Vec::new());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| draw(f, &session, &GtConfig::default()))
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("No missing commits"));
    }

    #[test]
    fn header_grows_on_narrow_terminals() {
        assert_eq!(header_height(120), 2);
        assert_eq!(header_height(80), 3);
    }

    #[test]
    fn page_height_accounts_for_header_and_borders() {
        let area = Rect::new(0, 0, 120, 40);
        // 40 - 2 header rows - 2 border rows
        assert_eq!(detail_page_height(area), 36);
    }

    #[test]
    fn page_height_never_hits_zero() {
        let area = Rect::new(0, 0, 80, 3);
        assert_eq!(detail_page_height(area), 1);
    }

    #[test]
    fn list_width_enforces_minimum() {
        let config = GtConfig::default();
        let narrow = Rect::new(0, 0, 50, 24);
        assert_eq!(list_width(narrow, &config), 30);
        let wide = Rect::new(0, 0, 200, 24);
        assert_eq!(list_width(wide, &config), 100);
    }
}
