// ABOUTME: Byte-level catalog access: structural gate, incremental array parse, whole-document parse
// ABOUTME: Streams top-level array elements one at a time and stops reading on request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog reader
//!
//! The streaming path hands each element of a top-level JSON array to a
//! visitor as soon as it is parsed, holding only one record in memory. When
//! the visitor breaks, parsing stops and no further bytes are read. The
//! whole-document path loads the file and locates the record array inside a
//! wrapping object.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::ops::ControlFlow;
use std::path::Path;

use ate_core::errors::CatalogError;
use serde::de::{DeserializeSeed, SeqAccess, Visitor};
use serde_json::Value;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Preferred wrapper key for record arrays
const FOODS_KEY: &str = "foods";

/// Top-level structure of a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Document starts with `[`
    Array,
    /// Anything else, including an empty file
    Other,
}

/// How a streaming pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// Every element was visited
    Completed,
    /// The visitor stopped the scan early
    Halted,
}

/// Open the catalog for buffered reading
///
/// # Errors
///
/// Returns `CatalogError::Unavailable` when the file cannot be opened
pub fn open(path: &Path) -> Result<BufReader<File>, CatalogError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| CatalogError::unavailable(path, e))
}

/// Skip a UTF-8 byte order mark and leading whitespace, then report the shape
///
/// # Errors
///
/// Returns `CatalogError::Unavailable` when the file cannot be read
pub fn peek_shape(reader: &mut impl BufRead, path: &Path) -> Result<Shape, CatalogError> {
    let mut at_start = true;
    loop {
        let buffer = reader
            .fill_buf()
            .map_err(|e| CatalogError::unavailable(path, e))?;
        if buffer.is_empty() {
            return Ok(Shape::Other);
        }
        if at_start {
            at_start = false;
            if buffer.starts_with(UTF8_BOM) {
                reader.consume(UTF8_BOM.len());
                continue;
            }
        }
        if let Some(offset) = buffer.iter().position(|byte| !byte.is_ascii_whitespace()) {
            let first = buffer[offset];
            reader.consume(offset);
            return Ok(if first == b'[' { Shape::Array } else { Shape::Other });
        }
        let consumed = buffer.len();
        reader.consume(consumed);
    }
}

/// Parse a top-level array incrementally, handing each element to `visit`
///
/// The reader must be positioned at the opening `[` (see [`peek_shape`]).
///
/// # Errors
///
/// Returns `Unavailable` for I/O failures and `Malformed` for invalid JSON
pub fn stream_array<R, F>(reader: R, path: &Path, mut visit: F) -> Result<StreamEnd, CatalogError>
where
    R: std::io::Read,
    F: FnMut(Value) -> ControlFlow<()>,
{
    let mut halted = false;
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    let result = RecordSeq {
        visit: &mut visit,
        halted: &mut halted,
    }
    .deserialize(&mut deserializer);

    // Returning early leaves the array unterminated from the parser's point
    // of view, so a halted scan always reports an error here.
    if halted {
        return Ok(StreamEnd::Halted);
    }
    result
        .and_then(|()| deserializer.end())
        .map_err(|e| parse_error(path, &e))?;
    Ok(StreamEnd::Completed)
}

/// Read the whole document and return its record array
///
/// Accepts a top-level array, the `foods` array of a wrapping object, or the
/// first array-valued property of a wrapping object.
///
/// # Errors
///
/// Returns `Unavailable`, `Malformed`, or `NoRecordArray` when no array is found
pub fn read_records(path: &Path) -> Result<Vec<Value>, CatalogError> {
    let bytes = fs::read(path).map_err(|e| CatalogError::unavailable(path, e))?;
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    let document: Value = serde_json::from_slice(body).map_err(|e| parse_error(path, &e))?;
    locate_records(document).ok_or_else(|| CatalogError::NoRecordArray {
        path: path.to_path_buf(),
    })
}

fn locate_records(document: Value) -> Option<Vec<Value>> {
    match document {
        Value::Array(records) => Some(records),
        Value::Object(mut wrapper) => {
            // Taken in place: removing would reorder the remaining keys
            if let Some(Value::Array(records)) = wrapper.get_mut(FOODS_KEY) {
                return Some(std::mem::take(records));
            }
            wrapper.into_iter().find_map(|(_, value)| match value {
                Value::Array(records) => Some(records),
                _ => None,
            })
        }
        _ => None,
    }
}

fn parse_error(path: &Path, error: &serde_json::Error) -> CatalogError {
    if error.is_io() {
        CatalogError::unavailable(path, std::io::Error::other(error.to_string()))
    } else {
        CatalogError::malformed(path, error.to_string())
    }
}

struct RecordSeq<'a, F> {
    visit: &'a mut F,
    halted: &'a mut bool,
}

impl<'de, F> DeserializeSeed<'de> for RecordSeq<'_, F>
where
    F: FnMut(Value) -> ControlFlow<()>,
{
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, F> Visitor<'de> for RecordSeq<'_, F>
where
    F: FnMut(Value) -> ControlFlow<()>,
{
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of food records")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while let Some(record) = seq.next_element::<Value>()? {
            if (self.visit)(record).is_break() {
                *self.halted = true;
                return Ok(());
            }
        }
        Ok(())
    }
}
