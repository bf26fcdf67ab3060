//! Community question board with AI-assisted answers.

pub mod engine;
pub mod view;

pub use engine::{Answer, BoardEngine, BoardTab, Question};
pub use view::BoardView;
