//! Reader for the fixed 128-byte tag block some audio files carry at their end.
//!
//! Layout (offsets within the block):
//!
//! | bytes      | field   |
//! |------------|---------|
//! | `[0,3)`    | `"TAG"` |
//! | `[3,33)`   | title   |
//! | `[33,63)`  | artist  |
//! | `[63,93)`  | album   |
//! | `[93,97)`  | year    |
//! | `[97,127)` | comment |
//! | `127`      | genre   |
//!
//! Text fields are fixed width and padded with spaces or NULs. Padding is
//! returned as-is.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

use crate::error::MetadataError;

pub const TAG_BLOCK_LEN: usize = 128;
const SIGNATURE: &[u8; 3] = b"TAG";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TagField {
    Title,
    Artist,
    Album,
    Year,
    Comment,
}

impl TagField {
    fn range(self) -> Range<usize> {
        match self {
            Self::Title => 3..33,
            Self::Artist => 33..63,
            Self::Album => 63..93,
            Self::Year => 93..97,
            Self::Comment => 97..127,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Year => "year",
            Self::Comment => "comment",
        }
    }

    pub const ALL: [TagField; 5] = [
        Self::Title,
        Self::Artist,
        Self::Album,
        Self::Year,
        Self::Comment,
    ];
}

impl FromStr for TagField {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(MetadataError::EmptyTag),
            "title" => Ok(Self::Title),
            "artist" => Ok(Self::Artist),
            "album" => Ok(Self::Album),
            "year" => Ok(Self::Year),
            "comment" => Ok(Self::Comment),
            other => Err(MetadataError::UnknownTag(other.to_string())),
        }
    }
}

/// A validated trailing tag block.
#[derive(Clone, Debug)]
pub struct TrailingTag {
    block: [u8; TAG_BLOCK_LEN],
}

impl TrailingTag {
    /// Read the last 128 bytes of `path` and check for the `TAG` signature.
    pub fn read(path: &Path) -> Result<Self, MetadataError> {
        let mut file = File::open(path)?;

        let len = file.metadata()?.len();
        if len < TAG_BLOCK_LEN as u64 {
            return Err(MetadataError::TooShort(len));
        }

        file.seek(SeekFrom::End(-(TAG_BLOCK_LEN as i64)))?;
        let mut block = [0u8; TAG_BLOCK_LEN];
        file.read_exact(&mut block)?;

        Self::from_block(block)
    }

    pub fn from_block(block: [u8; TAG_BLOCK_LEN]) -> Result<Self, MetadataError> {
        if &block[..3] != SIGNATURE {
            return Err(MetadataError::MissingSignature);
        }
        Ok(Self { block })
    }

    /// Raw bytes of `field`, padding included.
    pub fn field(&self, field: TagField) -> &[u8] {
        &self.block[field.range()]
    }

    /// `field` decoded as ISO-8859-1, one char per byte, padding included.
    pub fn text(&self, field: TagField) -> String {
        self.field(field).iter().map(|&b| char::from(b)).collect()
    }

    pub fn genre(&self) -> u8 {
        self.block[TAG_BLOCK_LEN - 1]
    }
}

#[cfg(test)]
pub(crate) mod tests;
