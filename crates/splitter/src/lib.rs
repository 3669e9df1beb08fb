//! # Source Splitter
//!
//! Decomposes a parsed source file into its structural units (imports,
//! literals, comments, functions, methods, classes, interfaces) and
//! re-emits each unit as a standalone file, plus an aggregator file that
//! rebuilds the original reference graph out of per-language
//! import/include statements.
//!
//! ## Architecture
//!
//! ```text
//! Source File
//!     │
//!     ├──> Language Detection (extension registry, fallback chain)
//!     │
//!     ├──> Tree-sitter Parsing → AST
//!     │
//!     ├──> Capability Pipeline
//!     │    ├─> Plain: imports, literals, comments
//!     │    ├─> Function: functions, subfunctions, literal refinement
//!     │    ├─> Class: classes, methods, literal refinement
//!     │    └─> Interface: interfaces
//!     │
//!     └──> File Splitter
//!          ├─> role aggregates (imports, literals)
//!          ├─> one file per function / class / interface
//!          └─> aggregator rewritten after every step
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use source_splitter::{FileSplitter, Layout, SourceUnit};
//!
//! let mut unit = SourceUnit::from_path("app.py")?;
//! unit.parse()?;
//! let outcome = FileSplitter::new(&unit, "out", Layout::Nested)?.split()?;
//! println!("wrote {} file(s)", outcome.written.len());
//! # Ok::<(), source_splitter::SplitError>(())
//! ```

mod batch;
mod classify;
mod error;
mod language;
mod partition;
mod pipeline;
mod splitter;
mod types;
mod unit;

pub use batch::{process_path, BatchSummary};
pub use error::{Result, SplitError};
pub use language::{Language, LanguageSpec};
pub use splitter::{FileSplitter, Layout, SplitOutcome};
pub use types::{Capability, UnitKind, UnitSpan};
pub use unit::SourceUnit;
