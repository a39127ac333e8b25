//! BVH motion-capture parsing core (engine-agnostic).
//!
//! Reads a textual BVH description — a skeleton hierarchy plus per-frame
//! channel samples — and resolves it into a [`BvhDocument`]: joint
//! topology, static offsets, per-joint channel layouts, and a flattened
//! frame-major sequence of per-joint rotation/translation transforms.
//!
//! The parser is a small backtracking combinator engine ([`Cursor`]) with a
//! hand-written recursive grammar on top; parsing and document construction
//! happen in a single pass. Scene-graph assembly, unit scaling, and writing
//! the format back out are left to consumers of the document.

pub mod cursor;
pub mod document;
pub mod error;
mod grammar;
pub mod loader;
pub mod number;
pub mod transform;

// Re-exports for consumers (adapters)
pub use cursor::Cursor;
pub use document::{BvhDocument, Channel, ChannelLayout};
pub use error::{BvhError, Result};
pub use loader::{parse_bvh, parse_bvh_file, parse_bvh_reader};
pub use transform::{JointTransform, IDENTITY_QUAT};
