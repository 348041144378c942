//! Parser for **easel scripts**: one drawing command per line.
//!
//! The crate only depends on the painter types of `easel-engine`; it never
//! touches a canvas or the event loop.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`command`] | `Command`, `parse_line`, argument checks |
//! | [`error`] | `ParseError`, `ParseErrorKind` |
//! | [`parser`] | `Parser` with persistent drawing state, `parse_str` |
//!
//! # Commands
//!
//! | Command | Arguments | Effect |
//! |---------|-----------|--------|
//! | `white` / `green` | none | background fill |
//! | `bgrect` | `x0 y0 x1 y1` | black background rectangle |
//! | `figure` | `x y` | adds a T figure |
//! | `move` | `dx dy` | shifts every figure added so far |
//! | `reset` | none | clears fill, rectangle and figures |
//! | `update` | none | publishes what has been drawn |
//!
//! Numeric arguments are fractions of the canvas size in `[-1, 1]`.
//!
//! # Quick start
//!
//! ```rust
//! use easel_script::Parser;
//!
//! let mut parser = Parser::new();
//! let ops = parser.parse_str("white\nfigure 0.5 0.5\nupdate").unwrap();
//!
//! assert_eq!(ops.len(), 4);
//! assert!(ops[3].is_update());
//! assert_eq!(parser.state().figures().len(), 1);
//! ```

pub mod command;
pub mod error;
pub mod parser;

pub use command::Command;
pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse_str, Parser};
