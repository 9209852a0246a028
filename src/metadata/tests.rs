use std::fs;
use std::path::{Path, PathBuf};

use super::*;

fn pad(s: &str, width: usize) -> Vec<u8> {
    let mut v = s.as_bytes().to_vec();
    v.resize(width, b' ');
    v
}

/// Build a 128-byte block: `TAG` + title/artist/album (30) + year (4) + comment (30) + genre.
pub(crate) fn tag_block(title: &str, artist: &str, album: &str, year: &str, comment: &str) -> Vec<u8> {
    let mut block = b"TAG".to_vec();
    block.extend(pad(title, 30));
    block.extend(pad(artist, 30));
    block.extend(pad(album, 30));
    block.extend(pad(year, 4));
    block.extend(pad(comment, 30));
    block.push(17);
    assert_eq!(block.len(), TAG_BLOCK_LEN);
    block
}

/// Write `audio` followed by a tag block into `dir/name`.
pub(crate) fn tagged_file(dir: &Path, name: &str, audio: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut bytes = audio.to_vec();
    bytes.extend(tag_block("Title", "Artist", "Album", "2024", "Comment"));
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn tag_field_parses_known_keys_only() {
    for field in TagField::ALL {
        assert_eq!(field.key().parse::<TagField>().unwrap(), field);
    }
    assert!(matches!("".parse::<TagField>(), Err(MetadataError::EmptyTag)));
    assert!(matches!(
        "Title".parse::<TagField>(),
        Err(MetadataError::UnknownTag(t)) if t == "Title"
    ));
    assert!(matches!(
        "genre".parse::<TagField>(),
        Err(MetadataError::UnknownTag(_))
    ));
}

#[test]
fn read_returns_padded_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = tagged_file(dir.path(), "a.mp3", &[0xAB; 300]);

    let tag = TrailingTag::read(&path).unwrap();
    assert_eq!(tag.text(TagField::Title), format!("{:<30}", "Title"));
    assert_eq!(tag.text(TagField::Artist), format!("{:<30}", "Artist"));
    assert_eq!(tag.text(TagField::Album), format!("{:<30}", "Album"));
    assert_eq!(tag.text(TagField::Year), "2024");
    assert_eq!(tag.text(TagField::Comment), format!("{:<30}", "Comment"));
    assert_eq!(tag.genre(), 17);
}

#[test]
fn read_accepts_file_that_is_exactly_one_block() {
    let dir = tempfile::tempdir().unwrap();
    let path = tagged_file(dir.path(), "tiny.mp3", &[]);
    let tag = TrailingTag::read(&path).unwrap();
    assert_eq!(tag.field(TagField::Year), b"2024");
}

#[test]
fn nul_padding_is_preserved() {
    let mut block = [0u8; TAG_BLOCK_LEN];
    block[..3].copy_from_slice(b"TAG");
    block[3..5].copy_from_slice(b"Hi");

    let tag = TrailingTag::from_block(block).unwrap();
    let title = tag.text(TagField::Title);
    assert_eq!(title.len(), 30);
    assert!(title.starts_with("Hi\0"));
}

#[test]
fn latin1_bytes_map_to_matching_code_points() {
    let mut block = [b' '; TAG_BLOCK_LEN];
    block[..3].copy_from_slice(b"TAG");
    block[33] = 0xE9;

    let tag = TrailingTag::from_block(block).unwrap();
    assert!(tag.text(TagField::Artist).starts_with('é'));
}

#[test]
fn short_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.mp3");
    fs::write(&path, b"TAG but far too short").unwrap();

    assert!(matches!(
        TrailingTag::read(&path),
        Err(MetadataError::TooShort(21))
    ));
}

#[test]
fn missing_signature_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.mp3");
    fs::write(&path, vec![b'x'; 512]).unwrap();

    assert!(matches!(
        TrailingTag::read(&path),
        Err(MetadataError::MissingSignature)
    ));
}

#[test]
fn signature_must_sit_at_end_offset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shifted.mp3");
    let mut bytes = tag_block("Title", "Artist", "Album", "2024", "Comment");
    bytes.extend([0u8; 10]);
    fs::write(&path, bytes).unwrap();

    assert!(matches!(
        TrailingTag::read(&path),
        Err(MetadataError::MissingSignature)
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        TrailingTag::read(&dir.path().join("nope.mp3")),
        Err(MetadataError::Io(_))
    ));
}
