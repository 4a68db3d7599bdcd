use super::consts::*;
use super::layout::{CAR_LAYOUT, Codec};
use crate::{CarIndex, CarRecord, EndRecord, HeadRecord};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("file is {len} bytes, too short for the 200-byte head record")]
    TruncatedHead { len: usize },
}

#[derive(Debug)]
pub struct DecodedFile {
    pub index: CarIndex,
    /// The file ended before a complete trailer record; `index.end` is zeros.
    pub trailer_missing: bool,
    /// Bytes after the last complete record that belong to no record.
    pub ignored_bytes: usize,
}

pub fn read_file(path: impl AsRef<Path>) -> Result<DecodedFile, DecodeError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading car index");
    let data = std::fs::read(path)?;
    decode_file(&data)
}

pub fn decode_file(data: &[u8]) -> Result<DecodedFile, DecodeError> {
    let Some((head, mut rest)) = data.split_first_chunk::<RECORD_SIZE>() else {
        return Err(DecodeError::TruncatedHead { len: data.len() });
    };
    let head = decode_head(head);

    // A car record never starts with a zero byte; the trailer always does.
    let mut cars = Vec::new();
    while let Some((block, tail)) = rest.split_first_chunk::<RECORD_SIZE>() {
        if block[0] == 0 {
            break;
        }
        cars.push(decode_car(block));
        rest = tail;
    }

    let (end, trailer_missing, ignored_bytes) = match rest.split_first_chunk::<RECORD_SIZE>() {
        Some((block, tail)) => (decode_trailer(block), false, tail.len()),
        None => (EndRecord::default(), true, rest.len()),
    };

    if trailer_missing {
        warn!(cars = cars.len(), "No trailer record, using an empty one");
    }
    if ignored_bytes > 0 {
        warn!(bytes = ignored_bytes, "Ignoring bytes after the last record");
    }
    debug!(cars = cars.len(), "Decoded car index");

    Ok(DecodedFile {
        index: CarIndex { head, cars, end },
        trailer_missing,
        ignored_bytes,
    })
}

pub fn decode_head(data: &[u8; RECORD_SIZE]) -> HeadRecord {
    HeadRecord(*data)
}

pub fn decode_trailer(data: &[u8; RECORD_SIZE]) -> EndRecord {
    EndRecord(*data)
}

pub fn decode_car(data: &[u8; RECORD_SIZE]) -> CarRecord {
    let mut record = CarRecord::default();
    for layout in &CAR_LAYOUT {
        let bytes = &data[layout.range()];
        match layout.codec {
            Codec::FixedText | Codec::InterleavedText => {
                if let Some(raw) = record.text_bytes_mut(layout.field) {
                    raw.copy_from_slice(bytes);
                }
            }
            Codec::Uint => record.load_number(layout.field, bytes),
        }
    }
    record.padding.copy_from_slice(&data[CAR_FIELDS_END..]);
    record
}
