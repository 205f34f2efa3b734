//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Every component here is stateless: it receives its data as props (the
//! core `App`, a `Topic`, or nothing at all) and renders a reflection of
//! it. The authoritative screen and cursor live in `core::state`; no
//! component keeps its own copy between frames.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── front.rs      (welcome page)
//! ├── topic_bar.rs  (tab row with active-topic highlight)
//! ├── topic_view.rs (topic title + wrapped body)
//! ├── finish.rs     (closing page)
//! └── key_hints.rs  (bottom key/progress line)
//! ```

mod finish;
mod front;
mod key_hints;
mod topic_bar;
mod topic_view;

pub use finish::FinishPage;
pub use front::FrontPage;
pub use key_hints::KeyHints;
pub use topic_bar::TopicBar;
pub use topic_view::TopicView;
