//! Orchestrator: load the input, seed the document root, drive the grammar
//! end to end, and reduce the final cursor to a verdict.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::cursor::Cursor;
use crate::document::BvhDocument;
use crate::error::{BvhError, Result};
use crate::grammar::{self, WHITESPACE};

/// Parse a BVH document from an in-memory string.
///
/// The whole input is parsed in one synchronous pass; on success the
/// returned document is complete and never mutated again.
pub fn parse_bvh(input: &str) -> Result<BvhDocument> {
    let mut document = BvhDocument::default();
    // Joint 0 is the eventual root; the grammar fills in its name, offset
    // and channels.
    document.push_joint(String::new(), None);

    let mut root_name = "";
    let cursor = Cursor::new(input)
        .tag("HIERARCHY")
        .skip(WHITESPACE)
        .tag("ROOT")
        .skip(WHITESPACE);
    let cursor = grammar::joint_name(cursor, &mut root_name).skip(WHITESPACE);
    if !cursor.is_valid() {
        return Err(BvhError::Malformed);
    }
    document.joint_names[0] = root_name.to_string();

    let cursor = grammar::joint_subtree(cursor, 0, &mut document);
    if !cursor.is_valid() {
        return Err(BvhError::Malformed);
    }

    let cursor = grammar::motion(cursor, &mut document);
    if !cursor.is_valid() {
        return Err(BvhError::Malformed);
    }
    Ok(document)
}

/// Parse a BVH document from a readable stream.
///
/// The stream is read to the end before parsing begins; read and decode
/// failures surface as [`BvhError::Io`] without inspecting any content.
pub fn parse_bvh_reader(mut reader: impl Read) -> Result<BvhDocument> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_bvh(&contents)
}

/// Parse the BVH file at `path`.
pub fn parse_bvh_file(path: impl AsRef<Path>) -> Result<BvhDocument> {
    parse_bvh_reader(File::open(path)?)
}
