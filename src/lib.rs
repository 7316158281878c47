//! trilist - Three-Type Heterogeneous List
//!
//! A `TriList<A, B, C>` stores an ordered mix of values of exactly three
//! distinct types and re-views them through per-type modifier pipelines
//! without ever touching the stored data.
//!
//! # Architecture
//!
//! - Storage: the tagged `Element` sequence, plus the compile-time `OneOf`
//!   membership proof every typed operation requires
//! - Modifiers: one shared, replaceable `P -> P` slot per payload type
//! - Views: lazy, restartable, type-filtered projections read through a slot
//! - Cursors: bidirectional positions over the whole sequence
//!
//! Views and cursors hold handles to the live slots, so a modifier installed
//! after they were created still applies when they are read.

pub mod cli;
pub mod config;
pub mod cursor;
pub mod error;
pub mod list;
pub mod modifier;
pub mod storage;
pub mod view;

pub use config::ListConfig;
pub use cursor::{Cursor, Iter};
pub use error::{Result, TriListError};
pub use list::TriList;
pub use modifier::{compose, identity, Modifier, ModifierSlot};
pub use storage::{Element, OneOf, Tag};
pub use view::{View, ViewIter};
