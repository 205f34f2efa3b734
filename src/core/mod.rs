//! # Core Application Logic
//!
//! This module contains Primer's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (topics)     │
//!                    │  • State (screen+cursor)│
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The fixed topic list and its access contract
//! - [`state`]: The `App` struct — screen and cursor, with the transitions
//! - [`action`]: The `Action` enum and the `update()` reducer

pub mod action;
pub mod catalog;
pub mod state;
