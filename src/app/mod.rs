mod state;

pub use state::{DetailContent, Effect, Pane, Session, SessionEvent};
