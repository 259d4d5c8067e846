//! **mazetrace-core** — grid model and event log types.
//!
//! This crate provides the types shared by the search procedures and the
//! playback engine: [`Coord`] addresses, the [`CellKind`] vocabulary, the
//! owned [`Grid`] matrix, and the [`Event`] / [`EventBatch`] / [`EventLog`]
//! record of one search run.

pub mod cell;
pub mod error;
pub mod event;
pub mod geom;
pub mod grid;

pub use cell::CellKind;
pub use error::GridError;
pub use event::{EmptyBatch, Event, EventBatch, EventLog};
pub use geom::Coord;
pub use grid::Grid;
