//! Model Support
//!
//! Building blocks shared by every request, result and value object:
//! - `ValueHash` / `HashBuilder` - stable, hasher-independent field hashing
//! - `FieldList` - the `{Label: value,...}` textual form

mod field_list;
mod value_hash;

pub use field_list::{DisplayList, FieldList};
pub use value_hash::{HashBuilder, ValueHash};
