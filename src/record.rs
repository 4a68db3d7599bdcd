use crate::def::consts::*;
use crate::def::layout::read_uint;
use crate::text::{FixedText, InterleavedText};
use std::fmt;
use thiserror::Error;

/// The opaque record at the start of a car index file.
#[derive(Clone, PartialEq, Eq)]
pub struct HeadRecord(pub [u8; RECORD_SIZE]);

/// The opaque record at the end of a car index file.
#[derive(Clone, PartialEq, Eq)]
pub struct EndRecord(pub [u8; RECORD_SIZE]);

impl Default for HeadRecord {
    fn default() -> Self {
        Self([0u8; RECORD_SIZE])
    }
}

impl Default for EndRecord {
    fn default() -> Self {
        Self([0u8; RECORD_SIZE])
    }
}

impl fmt::Debug for HeadRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HeadRecord({:02x?}..)", &self.0[..8])
    }
}

impl fmt::Debug for EndRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EndRecord({:02x?}..)", &self.0[..8])
    }
}

/// The fields of a car record, declared in byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CarNameId,
    DsCrashModel,
    DsShadowModel,
    FullCarName,
    EnumA1,
    EnumA2,
    EnumB,
    ZeroOrFour,
    ZeroTwo,
    EnumC,
    StealTimeMs,
    Zero,
    UnkB,
    SeatCount,
    EnumD,
    UnkZ,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::CarNameId,
        Field::DsCrashModel,
        Field::DsShadowModel,
        Field::FullCarName,
        Field::EnumA1,
        Field::EnumA2,
        Field::EnumB,
        Field::ZeroOrFour,
        Field::ZeroTwo,
        Field::EnumC,
        Field::StealTimeMs,
        Field::Zero,
        Field::UnkB,
        Field::SeatCount,
        Field::EnumD,
        Field::UnkZ,
    ];

    /// Symbolic name, used as the key in label and enum files.
    pub fn name(self) -> &'static str {
        match self {
            Field::CarNameId => "carNameId",
            Field::DsCrashModel => "dsCrashModel",
            Field::DsShadowModel => "dsShadowModel",
            Field::FullCarName => "fullCarName",
            Field::EnumA1 => "enumA1",
            Field::EnumA2 => "enumA2",
            Field::EnumB => "enumB",
            Field::ZeroOrFour => "zeroOrFour",
            Field::ZeroTwo => "zeroTWO",
            Field::EnumC => "enumC",
            Field::StealTimeMs => "stealTimeMs",
            Field::Zero => "zero",
            Field::UnkB => "unkB",
            Field::SeatCount => "seatCount",
            Field::EnumD => "enumD",
            Field::UnkZ => "unkZ",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field}: cannot parse {text:?}")]
    Unparsable { field: Field, text: String },
    #[error("{field}: value {value} does not fit in {width} byte(s)")]
    OutOfRange {
        field: Field,
        value: u32,
        width: usize,
    },
    #[error("{field} is read-only")]
    ReadOnly { field: Field },
    #[error("{field} does not hold text")]
    NotText { field: Field },
    #[error("{field} does not hold a number")]
    NotNumeric { field: Field },
    /// A car name must not start with a zero byte: the car list ends there.
    #[error("{field} must not be empty")]
    EmptyName { field: Field },
}

/// One car definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarRecord {
    pub car_name_id: FixedText<NAME_FIELD_SIZE>,
    pub ds_crash_model: FixedText<NAME_FIELD_SIZE>,
    pub ds_shadow_model: FixedText<NAME_FIELD_SIZE>,
    pub full_car_name: InterleavedText<FULL_NAME_FIELD_SIZE>,
    pub enum_a1: u32,
    pub enum_a2: u32,
    pub enum_b: u16,
    pub zero_or_four: u8,
    pub zero_two: u8,
    pub enum_c: u32,
    pub steal_time_ms: u32,
    pub zero: u32,
    pub unk_b: u32,
    pub seat_count: u32,
    pub enum_d: u32,
    pub unk_z: u32,
    /// Bytes after the last declared field, kept as read.
    pub padding: [u8; CAR_PADDING_SIZE],
}

impl CarRecord {
    /// The record appended when a car is added: named `NewCar`, all else zero.
    pub fn new_car() -> Self {
        Self {
            car_name_id: FixedText::new("NewCar"),
            ..Self::default()
        }
    }

    /// Text of a text field, `None` for numeric fields.
    pub fn text(&self, field: Field) -> Option<String> {
        match field {
            Field::CarNameId => Some(self.car_name_id.text()),
            Field::DsCrashModel => Some(self.ds_crash_model.text()),
            Field::DsShadowModel => Some(self.ds_shadow_model.text()),
            Field::FullCarName => Some(self.full_car_name.text()),
            _ => None,
        }
    }

    /// Replaces the text of a text field. `carNameId` is refused when its
    /// first encoded byte would be zero.
    pub fn set_text(&mut self, field: Field, text: &str) -> Result<(), FieldError> {
        match field {
            Field::CarNameId => {
                let name = FixedText::new(text);
                if name.as_bytes()[0] == 0 {
                    return Err(FieldError::EmptyName { field });
                }
                self.car_name_id = name;
            }
            Field::DsCrashModel => self.ds_crash_model = FixedText::new(text),
            Field::DsShadowModel => self.ds_shadow_model = FixedText::new(text),
            Field::FullCarName => self.full_car_name = InterleavedText::new(text),
            _ => return Err(FieldError::NotText { field }),
        }
        Ok(())
    }

    /// Value of a numeric field widened to `u32`, `None` for text fields.
    pub fn number(&self, field: Field) -> Option<u32> {
        let value = match field {
            Field::EnumA1 => self.enum_a1,
            Field::EnumA2 => self.enum_a2,
            Field::EnumB => u32::from(self.enum_b),
            Field::ZeroOrFour => u32::from(self.zero_or_four),
            Field::ZeroTwo => u32::from(self.zero_two),
            Field::EnumC => self.enum_c,
            Field::StealTimeMs => self.steal_time_ms,
            Field::Zero => self.zero,
            Field::UnkB => self.unk_b,
            Field::SeatCount => self.seat_count,
            Field::EnumD => self.enum_d,
            Field::UnkZ => self.unk_z,
            Field::CarNameId | Field::DsCrashModel | Field::DsShadowModel | Field::FullCarName => {
                return None;
            }
        };
        Some(value)
    }

    /// Stores `value` into a numeric field. Values wider than the field are
    /// rejected and leave the record unchanged.
    pub fn set_number(&mut self, field: Field, value: u32) -> Result<(), FieldError> {
        match field {
            Field::EnumB => {
                self.enum_b = u16::try_from(value).map_err(|_| FieldError::OutOfRange {
                    field,
                    value,
                    width: 2,
                })?;
            }
            Field::ZeroOrFour | Field::ZeroTwo => {
                let byte = u8::try_from(value).map_err(|_| FieldError::OutOfRange {
                    field,
                    value,
                    width: 1,
                })?;
                if field == Field::ZeroOrFour {
                    self.zero_or_four = byte;
                } else {
                    self.zero_two = byte;
                }
            }
            _ => {
                *self
                    .wide_number_mut(field)
                    .ok_or(FieldError::NotNumeric { field })? = value;
            }
        }
        Ok(())
    }

    /// Fills a numeric field from exactly its width of little-endian bytes.
    pub(crate) fn load_number(&mut self, field: Field, bytes: &[u8]) {
        let value = read_uint(bytes);
        match field {
            Field::EnumB => self.enum_b = value as u16,
            Field::ZeroOrFour => self.zero_or_four = value as u8,
            Field::ZeroTwo => self.zero_two = value as u8,
            _ => {
                if let Some(slot) = self.wide_number_mut(field) {
                    *slot = value;
                }
            }
        }
    }

    fn wide_number_mut(&mut self, field: Field) -> Option<&mut u32> {
        Some(match field {
            Field::EnumA1 => &mut self.enum_a1,
            Field::EnumA2 => &mut self.enum_a2,
            Field::EnumC => &mut self.enum_c,
            Field::StealTimeMs => &mut self.steal_time_ms,
            Field::Zero => &mut self.zero,
            Field::UnkB => &mut self.unk_b,
            Field::SeatCount => &mut self.seat_count,
            Field::EnumD => &mut self.enum_d,
            Field::UnkZ => &mut self.unk_z,
            _ => return None,
        })
    }

    /// Raw bytes of a text field.
    pub(crate) fn text_bytes(&self, field: Field) -> Option<&[u8]> {
        match field {
            Field::CarNameId => Some(self.car_name_id.as_bytes()),
            Field::DsCrashModel => Some(self.ds_crash_model.as_bytes()),
            Field::DsShadowModel => Some(self.ds_shadow_model.as_bytes()),
            Field::FullCarName => Some(self.full_car_name.as_bytes()),
            _ => None,
        }
    }

    pub(crate) fn text_bytes_mut(&mut self, field: Field) -> Option<&mut [u8]> {
        match field {
            Field::CarNameId => Some(self.car_name_id.as_mut_bytes()),
            Field::DsCrashModel => Some(self.ds_crash_model.as_mut_bytes()),
            Field::DsShadowModel => Some(self.ds_shadow_model.as_mut_bytes()),
            Field::FullCarName => Some(self.full_car_name.as_mut_bytes()),
            _ => None,
        }
    }
}
