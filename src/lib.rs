//! Arabic RTL literal detection
//!
//! Finds string and template literals whose content contains Arabic script
//! so an editor can render them right-to-left.
//!
//! The core is three pure functions: [`is_target_script`],
//! [`extract_literals`] and [`scan`]. They never fail and keep no state
//! between calls. [`syntax`] adds a tree-sitter based extractor that skips
//! comments; [`highlighter`], [`style`] and [`config`] turn matches into
//! editor decorations.
//!
//! ```
//! let matches = arabic_rtl::scan(r#"print("مرحبا"); print("hello");"#);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].text, "مرحبا");
//! assert_eq!(matches[0].line, 0);
//! ```

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod highlighter;
pub mod literal;
pub mod scan;
pub mod script;
pub mod style;
pub mod syntax;
pub mod tracing;

// Re-export commonly used types
pub use config::HighlightConfig;
pub use highlighter::{Decorations, DocumentSnapshot, Highlighter};
pub use literal::{extract_literals, TextSpan};
pub use scan::{find_matches, scan, scan_with, Match, Strategy, StrategyKind};
pub use script::is_target_script;
pub use style::{DecorationConfig, DecorationStyle};
pub use syntax::{extract_literals_with, LanguageId};
