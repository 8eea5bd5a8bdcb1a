#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod macros;
mod playfield;
mod rule;
mod sequence;
mod sextet;
mod translate;
mod variant;

pub use self::playfield::*;
pub use self::rule::*;
pub use self::sequence::*;
pub use self::sextet::*;
pub use self::translate::*;
pub use self::variant::*;
