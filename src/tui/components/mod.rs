//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status line
//! - `BookCard`: one search result
//! - `LoadingOverlay`: spinner box shown while a search runs
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchForm`: the three criteria fields and the Search button
//! - `BookList`: scrollable result view (state in `BookListState`)
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `App`. Each file holds the component's state, events,
//! rendering and tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── search_form/     (Criteria fields + Search button)
//! ├── loading.rs       (Loading overlay)
//! ├── book_card.rs     (Single result renderer)
//! └── book_list.rs     (Scrollable result container)
//! ```

pub mod book_card;
pub mod book_list;
pub mod loading;
pub mod search_form;
mod title_bar;

pub use book_card::BookCard;
pub use book_list::{BookList, BookListState, ResultsEvent};
pub use loading::LoadingOverlay;
pub use search_form::{FormEvent, SearchForm};
pub use title_bar::TitleBar;
