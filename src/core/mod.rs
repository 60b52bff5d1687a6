//! # Core Application Logic
//!
//! koob's business logic. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • query/normalize/     │
//!                    │    filter pipeline      │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │  Catalog   │
//!          │  Adapter   │                │  (HTTP)    │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`query`], [`normalize`], [`filter`]: the search pipeline stages
//! - [`search`]: runs the pipeline against a catalog source

pub mod action;
pub mod book;
pub mod config;
pub mod filter;
pub mod normalize;
pub mod query;
pub mod search;
pub mod state;
