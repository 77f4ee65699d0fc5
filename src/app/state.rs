use crate::git::CommitRecord;

/// Columns moved per horizontal scroll step in the list pane
const LIST_HSCROLL_STEP: usize = 3;

// ── Enums ──

/// Which pane owns single-line navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    List,
    Detail,
}

/// Terminal-independent input events; key codes are mapped to these in main
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    PageUp,
    PageDown,
    Quit,
}

/// What the event loop must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Selection changed; fetch the selected commit's patch
    FetchPatch,
    Quit,
}

/// What the detail pane currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    Loading,
    Patch(String),
    /// A failed patch fetch degrades only this pane, never the session
    Error(String),
}

// ── Session State ──

/// State of one browsing session over a reconciled commit list.
///
/// Owned by the event loop; every mutation goes through `dispatch`.
/// An empty commit list is a terminal sub-state where only quit works.
pub struct Session {
    pub branch_a: String,
    pub branch_b: String,
    pub commits: Vec<CommitRecord>,

    /// Selected row, always within `[0, commits.len() - 1]` when non-empty
    pub selected: usize,

    /// Horizontal scroll of the list pane, in columns
    pub list_scroll: usize,

    /// Vertical scroll of the detail pane, in lines. Only the lower bound
    /// is kept here; the upper bound depends on content length and is
    /// applied at render time.
    pub detail_scroll: usize,

    pub focus: Pane,
    pub detail: DetailContent,
}

impl Session {
    pub fn new(branch_a: &str, branch_b: &str, commits: Vec<CommitRecord>) -> Self {
        Self {
            branch_a: branch_a.to_string(),
            branch_b: branch_b.to_string(),
            commits,
            selected: 0,
            list_scroll: 0,
            detail_scroll: 0,
            focus: Pane::List,
            detail: DetailContent::Loading,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn selected_commit(&self) -> Option<&CommitRecord> {
        self.commits.get(self.selected)
    }

    /// Apply one input event. `page_height` is the current detail viewport
    /// height in lines; `page_overlap` is how many lines a page scroll
    /// keeps visible from the previous page.
    pub fn dispatch(
        &mut self,
        event: SessionEvent,
        page_height: usize,
        page_overlap: usize,
    ) -> Effect {
        if event == SessionEvent::Quit {
            return Effect::Quit;
        }
        if self.is_empty() {
            // Terminal empty sub-state: navigation is a no-op
            return Effect::None;
        }

        let page_step = page_height.saturating_sub(page_overlap).max(1) as isize;

        match event {
            SessionEvent::Up => match self.focus {
                Pane::List => return self.move_selection(-1),
                Pane::Detail => self.scroll_detail(-1),
            },
            SessionEvent::Down => match self.focus {
                Pane::List => return self.move_selection(1),
                Pane::Detail => self.scroll_detail(1),
            },
            SessionEvent::Left => {
                if self.focus == Pane::List {
                    self.list_scroll = self.list_scroll.saturating_sub(LIST_HSCROLL_STEP);
                }
            }
            SessionEvent::Right => {
                if self.focus == Pane::List {
                    self.list_scroll = self.list_scroll.saturating_add(LIST_HSCROLL_STEP);
                }
            }
            SessionEvent::Enter => {
                if self.focus == Pane::List {
                    self.focus = Pane::Detail;
                }
            }
            SessionEvent::Escape => {
                if self.focus == Pane::Detail {
                    self.focus = Pane::List;
                }
            }
            // Page scrolling always targets the detail pane, whichever pane
            // has focus: the patch is the primary reading target
            SessionEvent::PageUp => self.scroll_detail(-page_step),
            SessionEvent::PageDown => self.scroll_detail(page_step),
            SessionEvent::Quit => unreachable!("handled above"),
        }
        Effect::None
    }

    fn move_selection(&mut self, delta: isize) -> Effect {
        let max = self.commits.len() - 1;
        let next = self.selected.saturating_add_signed(delta).min(max);
        if next == self.selected {
            return Effect::None;
        }
        self.selected = next;
        // Changing commits re-anchors the detail view at the top
        self.detail_scroll = 0;
        self.detail = DetailContent::Loading;
        Effect::FetchPatch
    }

    fn scroll_detail(&mut self, delta: isize) {
        self.detail_scroll = self.detail_scroll.saturating_add_signed(delta);
    }
}
