//! # loupe_lexicon
//!
//! Lexicon - The vocabulary of tags Loupe already knows.
//!
//! ## Name Origin
//!
//! A **lexicon** is the complete set of words a language recognises. Before
//! Loupe can call a tag "unknown" it has to know which tags are *known*:
//! built-in HTML and SVG elements, Vue's own components, Vue Router's
//! components, component libraries such as Vuetify, and whatever the user
//! adds on top.
//!
//! ## Usage
//!
//! ```
//! use loupe_lexicon::{IgnoreListConfig, IgnoreSet};
//!
//! let config = IgnoreListConfig {
//!     custom_tags: vec!["my-widget".to_string()],
//!     ..Default::default()
//! };
//! let ignore = IgnoreSet::resolve(&config).unwrap();
//!
//! assert!(ignore.contains("div"));
//! assert!(ignore.contains("RouterLink"));
//! assert!(ignore.contains("MyWidget"));
//! assert!(!ignore.contains("MissingCard"));
//! ```

mod error;
mod framework;
mod ignore;
mod tag;
pub mod vocab;

pub use error::{LexiconError, LexiconResult};
pub use framework::{read_tag_file, Framework, FrameworkDescriptor, FRAMEWORKS, TAGS_FILE_EXT};
pub use ignore::{IgnoreListConfig, IgnoreSet, IgnoreSource};
pub use tag::TagName;
