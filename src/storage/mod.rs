//! Tagged Storage
//!
//! The building blocks of the stored sequence:
//! - `Tag` / `Element`: the closed three-way tagged union
//! - `OneOf`: the compile-time "exactly one of the three" membership proof
//! - `Distinct`: the compile-time proof that the three payload types differ

mod element;
mod oneof;

pub use element::{Element, Tag};
pub use oneof::{Distinct, OneOf};
