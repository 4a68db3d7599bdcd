use super::consts::*;
use super::layout::{CAR_LAYOUT, Codec, write_uint};
use crate::{CarIndex, CarRecord, EndRecord, HeadRecord};
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn encode_file(index: &CarIndex) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(index.encoded_len())));
    writer.write(index)?;
    Ok(writer.into_inner().into_inner())
}

/// Rewrites the whole file at `path` with the encoded index.
pub fn write_file(path: impl AsRef<Path>, index: &CarIndex) -> Result<(), EncodeError> {
    let path = path.as_ref();
    debug!(path = %path.display(), cars = index.cars.len(), "Writing car index");
    let mut writer = Writer::new(BufWriter::new(File::create(path)?));
    writer.write(index)?;
    writer.into_inner().flush()?;
    Ok(())
}

pub struct Writer<W: Write> {
    writer: W,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Self { writer: inner }
    }

    pub fn write(&mut self, index: &CarIndex) -> Result<(), EncodeError> {
        self.writer.write_all(&encode_head(&index.head))?;
        for car in &index.cars {
            self.writer.write_all(&encode_car(car))?;
        }
        self.writer.write_all(&encode_trailer(&index.end))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub fn encode_head(head: &HeadRecord) -> [u8; RECORD_SIZE] {
    head.0
}

pub fn encode_trailer(end: &EndRecord) -> [u8; RECORD_SIZE] {
    end.0
}

pub fn encode_car(record: &CarRecord) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    for layout in &CAR_LAYOUT {
        let bytes = &mut buf[layout.range()];
        match layout.codec {
            Codec::FixedText | Codec::InterleavedText => {
                if let Some(raw) = record.text_bytes(layout.field) {
                    bytes.copy_from_slice(raw);
                }
            }
            Codec::Uint => {
                if let Some(value) = record.number(layout.field) {
                    write_uint(bytes, value);
                }
            }
        }
    }
    buf[CAR_FIELDS_END..].copy_from_slice(&record.padding);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use crate::def::decode_file;

    fn make_car(name_id: &str, full_name: &str) -> CarRecord {
        let mut car = CarRecord::default();
        car.set_text(Field::CarNameId, name_id).unwrap();
        car.set_text(Field::FullCarName, full_name).unwrap();
        car
    }

    fn make_index(cars: Vec<CarRecord>) -> CarIndex {
        let mut head = HeadRecord::default();
        head.0[0] = 0x42;
        head.0[RECORD_SIZE - 1] = 0x24;
        let mut end = EndRecord::default();
        end.0[1] = 0x99;
        CarIndex { head, cars, end }
    }

    #[test]
    fn encoding_round_trips() {
        let mut fiat = make_car("fiat_500", "FIAT 500");
        fiat.set_text(Field::DsCrashModel, "fiat_crash").unwrap();
        fiat.enum_b = 0x0102;
        fiat.zero_or_four = 4;
        fiat.zero_two = 2;
        fiat.steal_time_ms = 1500;
        fiat.seat_count = 4;
        fiat.unk_z = u32::MAX;
        let index = make_index(vec![fiat, make_car("ford", "FORD T")]);

        let encoded = encode_file(&index).unwrap();
        let decoded = decode_file(&encoded).unwrap();
        assert!(!decoded.trailer_missing);
        assert_eq!(decoded.index, index);
        assert_eq!(encode_file(&decoded.index).unwrap(), encoded);
    }

    #[test]
    fn encoding_has_fixed_length() {
        for count in [0, 1, 5] {
            let index = make_index((0..count).map(|i| make_car(&format!("car{i}"), "")).collect());
            let encoded = encode_file(&index).unwrap();
            assert_eq!(encoded.len(), RECORD_SIZE + RECORD_SIZE * count + RECORD_SIZE);
            assert_eq!(encoded.len(), index.encoded_len());
        }
    }

    #[test]
    fn encoding_places_numbers_little_endian() {
        let mut car = make_car("x", "");
        car.enum_a1 = 0x12345678;
        car.enum_b = 0xBEEF;
        car.zero_two = 0xAB;
        let buf = encode_car(&car);
        assert_eq!(&buf[ENUM_A1_OFFSET..ENUM_A1_OFFSET + 4], &[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(&buf[ENUM_B_OFFSET..ENUM_B_OFFSET + 2], &[0xEF, 0xBE]);
        assert_eq!(buf[ZERO_TWO_OFFSET], 0xAB);
    }

    #[test]
    fn encoding_pads_text_fields() {
        let buf = encode_car(&make_car("SG", "FIAT "));
        let mut name = [0u8; NAME_FIELD_SIZE];
        name[..2].copy_from_slice(b"SG");
        assert_eq!(&buf[CAR_NAME_ID_OFFSET..CAR_NAME_ID_OFFSET + NAME_FIELD_SIZE], &name);

        let mut full_name = [0u8; FULL_NAME_FIELD_SIZE];
        full_name[..10].copy_from_slice(&[0x46, 0, 0x49, 0, 0x41, 0, 0x54, 0, 0x20, 0]);
        assert_eq!(
            &buf[FULL_CAR_NAME_OFFSET..FULL_CAR_NAME_OFFSET + FULL_NAME_FIELD_SIZE],
            &full_name
        );
    }

    #[test]
    fn encoding_truncates_long_text() {
        let long = "A".repeat(40);
        let car = make_car(&long, &long);
        let decoded = crate::def::decode_car(&encode_car(&car));
        assert_eq!(decoded.text(Field::CarNameId).unwrap(), "A".repeat(31));
        assert_eq!(decoded.text(Field::FullCarName).unwrap(), "A".repeat(32));
    }

    #[test]
    fn unedited_records_keep_their_raw_bytes() {
        let mut data = [0x5Au8; RECORD_SIZE];
        // terminator inside each text field, garbage after it
        data[CAR_NAME_ID_OFFSET + 3] = 0;
        data[DS_CRASH_MODEL_OFFSET] = 0;
        data[FULL_CAR_NAME_OFFSET + 10] = 0;
        let car = crate::def::decode_car(&data);
        assert_eq!(car.text(Field::CarNameId).unwrap(), "ZZZ");
        assert_eq!(encode_car(&car), data);
    }
}
