//! # Catalog
//!
//! Everything that talks to the remote book catalog: the wire types the
//! volumes endpoint returns, the `VolumeSource` trait the rest of the app
//! depends on, and the Google Books implementation of it.

pub mod google_books;
pub mod source;
pub mod types;

pub use google_books::GoogleBooksSource;
pub use source::{FetchError, VolumeSource};
pub use types::{RawVolume, VolumeInfo, VolumesResponse};
