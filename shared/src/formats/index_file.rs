//! Game list index format (.tax / .nec / .bvs)
//!
//! All three index files of a system share this layout. Only the strings in
//! the name blob differ, as chosen by a [`NameMapping`].
//!
//! # Layout
//! ```text
//! 0x00:          count u32
//! 0x04:          offsets (count * u32), one per sort rank, ascending rank
//! 0x04 + 4*count: name blob, NUL-terminated UTF-8 strings in listing order
//! ```
//!
//! All integers are little-endian. Offsets are relative to the start of the
//! name blob. Counts and offsets are assumed to fit in a u32; real ROM folders
//! hold at most a few thousand short names.

use std::io::Write;

use crate::error::{GamelistError, Result};
use crate::game_list::GameList;
use crate::mapping::NameMapping;

/// Index file header (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct IndexHeader {
    pub count: u32,
}

impl IndexHeader {
    pub const SIZE: usize = 4;

    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// Size of the offset table following the header
    pub fn table_size(&self) -> usize {
        self.count as usize * 4
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.count.to_le_bytes()
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            count: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        })
    }
}

/// Build the name blob and the blob offset of every sort rank in one pass.
///
/// Names are appended in listing order; `offsets[rank]` points at the name of
/// the entry with that rank.
fn build_name_blob(list: &GameList, mapping: NameMapping) -> (Vec<u8>, Vec<u32>) {
    let mut blob = Vec::new();
    let mut offsets = vec![0u32; list.len()];

    for (rank, entry) in list.by_listing_order() {
        offsets[rank] = blob.len() as u32;
        blob.extend_from_slice(mapping.apply(entry).as_bytes());
        blob.push(0);
    }

    (blob, offsets)
}

/// Encode a complete index file.
pub fn encode_index(list: &GameList, mapping: NameMapping) -> Vec<u8> {
    let (blob, offsets) = build_name_blob(list, mapping);
    let header = IndexHeader::new(list.len() as u32);

    let mut out = Vec::with_capacity(IndexHeader::SIZE + header.table_size() + blob.len());
    out.extend_from_slice(&header.to_bytes());
    for offset in offsets {
        out.extend_from_slice(&offset.to_le_bytes());
    }
    out.extend_from_slice(&blob);
    out
}

/// Write a complete index file
pub fn write_index<W: Write>(
    w: &mut W,
    list: &GameList,
    mapping: NameMapping,
) -> std::io::Result<()> {
    w.write_all(&encode_index(list, mapping))
}

/// Decode an index file into its names, in sort-rank order.
///
/// Only used to check what [`encode_index`] produced; existing stock indexes
/// are never interpreted.
pub fn decode_index(bytes: &[u8]) -> Result<Vec<String>> {
    let header = IndexHeader::from_bytes(bytes)
        .ok_or_else(|| GamelistError::Format(format!("too small ({} bytes)", bytes.len())))?;

    let blob_start = IndexHeader::SIZE + header.table_size();
    if bytes.len() < blob_start {
        return Err(GamelistError::Format(format!(
            "offset table for {} entries truncated ({} bytes)",
            header.count,
            bytes.len()
        )));
    }
    let table = &bytes[IndexHeader::SIZE..blob_start];
    let blob = &bytes[blob_start..];

    table
        .chunks_exact(4)
        .enumerate()
        .map(|(rank, raw)| {
            let offset = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as usize;
            let tail = blob.get(offset..).ok_or_else(|| {
                GamelistError::Format(format!("rank {rank} offset {offset} past end of names"))
            })?;
            let end = tail.iter().position(|&b| b == 0).ok_or_else(|| {
                GamelistError::Format(format!("rank {rank} name is not NUL-terminated"))
            })?;
            String::from_utf8(tail[..end].to_vec()).map_err(|_| {
                GamelistError::Format(format!("rank {rank} name is not valid UTF-8"))
            })
        })
        .collect()
}
