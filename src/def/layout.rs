use super::consts::*;
use crate::Field;
use std::ops::Range;

/// How the bytes of a car field are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Zero-terminated, zero-padded Windows-1252 text.
    FixedText,
    /// ASCII text with one padding byte after every character.
    InterleavedText,
    /// Little-endian unsigned integer of the field's width (1, 2 or 4 bytes).
    Uint,
}

/// Position and codec of one field inside a car record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub field: Field,
    pub offset: usize,
    pub width: usize,
    pub codec: Codec,
}

impl FieldLayout {
    const fn new(field: Field, offset: usize, width: usize, codec: Codec) -> Self {
        Self {
            field,
            offset,
            width,
            codec,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.width
    }
}

/// Every car field in byte order. Both the decoder and the encoder walk this
/// table, so the two directions cannot disagree about where a field lives.
pub const CAR_LAYOUT: [FieldLayout; 16] = [
    FieldLayout::new(Field::CarNameId, CAR_NAME_ID_OFFSET, NAME_FIELD_SIZE, Codec::FixedText),
    FieldLayout::new(Field::DsCrashModel, DS_CRASH_MODEL_OFFSET, NAME_FIELD_SIZE, Codec::FixedText),
    FieldLayout::new(
        Field::DsShadowModel,
        DS_SHADOW_MODEL_OFFSET,
        NAME_FIELD_SIZE,
        Codec::FixedText,
    ),
    FieldLayout::new(
        Field::FullCarName,
        FULL_CAR_NAME_OFFSET,
        FULL_NAME_FIELD_SIZE,
        Codec::InterleavedText,
    ),
    FieldLayout::new(Field::EnumA1, ENUM_A1_OFFSET, 4, Codec::Uint),
    FieldLayout::new(Field::EnumA2, ENUM_A2_OFFSET, 4, Codec::Uint),
    FieldLayout::new(Field::EnumB, ENUM_B_OFFSET, 2, Codec::Uint),
    FieldLayout::new(Field::ZeroOrFour, ZERO_OR_FOUR_OFFSET, 1, Codec::Uint),
    FieldLayout::new(Field::ZeroTwo, ZERO_TWO_OFFSET, 1, Codec::Uint),
    FieldLayout::new(Field::EnumC, ENUM_C_OFFSET, 4, Codec::Uint),
    FieldLayout::new(Field::StealTimeMs, STEAL_TIME_MS_OFFSET, 4, Codec::Uint),
    FieldLayout::new(Field::Zero, ZERO_OFFSET, 4, Codec::Uint),
    FieldLayout::new(Field::UnkB, UNK_B_OFFSET, 4, Codec::Uint),
    FieldLayout::new(Field::SeatCount, SEAT_COUNT_OFFSET, 4, Codec::Uint),
    FieldLayout::new(Field::EnumD, ENUM_D_OFFSET, 4, Codec::Uint),
    FieldLayout::new(Field::UnkZ, UNK_Z_OFFSET, 4, Codec::Uint),
];

/// Layout entry for `field`. `Field` variants are declared in byte order, so
/// the discriminant is the table index.
pub fn layout_of(field: Field) -> &'static FieldLayout {
    &CAR_LAYOUT[field as usize]
}

pub(crate) fn read_uint(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .rev()
        .fold(0, |acc, &b| (acc << 8) | u32::from(b))
}

pub(crate) fn write_uint(bytes: &mut [u8], value: u32) {
    let width = bytes.len();
    bytes.copy_from_slice(&value.to_le_bytes()[..width]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_contiguous_and_fills_the_record() {
        let mut expected_offset = 0;
        for layout in &CAR_LAYOUT {
            assert_eq!(layout.offset, expected_offset, "{}", layout.field);
            expected_offset += layout.width;
        }
        assert_eq!(expected_offset, CAR_FIELDS_END);
        assert_eq!(CAR_FIELDS_END + CAR_PADDING_SIZE, RECORD_SIZE);
    }

    #[test]
    fn layout_follows_field_order() {
        for (index, field) in Field::ALL.iter().enumerate() {
            assert_eq!(CAR_LAYOUT[index].field, *field);
            assert_eq!(layout_of(*field).field, *field);
        }
    }

    #[test]
    fn uint_widths_fit_in_u32() {
        for layout in CAR_LAYOUT.iter().filter(|l| l.codec == Codec::Uint) {
            assert!(matches!(layout.width, 1 | 2 | 4), "{}", layout.field);
        }
    }

    #[test]
    fn uints_are_little_endian() {
        assert_eq!(read_uint(&[0x78, 0x56, 0x34, 0x12]), 0x12345678);
        assert_eq!(read_uint(&[0x34, 0x12]), 0x1234);
        assert_eq!(read_uint(&[0xFF]), 0xFF);

        let mut buf = [0u8; 2];
        write_uint(&mut buf, 0xBEEF);
        assert_eq!(buf, [0xEF, 0xBE]);
    }
}
