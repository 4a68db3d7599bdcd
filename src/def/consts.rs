pub const RECORD_SIZE: usize = 200;

pub const NAME_FIELD_SIZE: usize = 32;
pub const FULL_NAME_FIELD_SIZE: usize = 64;

pub const CAR_NAME_ID_OFFSET: usize = 0;
pub const DS_CRASH_MODEL_OFFSET: usize = 32;
pub const DS_SHADOW_MODEL_OFFSET: usize = 64;
pub const FULL_CAR_NAME_OFFSET: usize = 96;
pub const ENUM_A1_OFFSET: usize = 160;
pub const ENUM_A2_OFFSET: usize = 164;
pub const ENUM_B_OFFSET: usize = 168;
pub const ZERO_OR_FOUR_OFFSET: usize = 170;
pub const ZERO_TWO_OFFSET: usize = 171;
pub const ENUM_C_OFFSET: usize = 172;
pub const STEAL_TIME_MS_OFFSET: usize = 176;
pub const ZERO_OFFSET: usize = 180;
pub const UNK_B_OFFSET: usize = 184;
pub const SEAT_COUNT_OFFSET: usize = 188;
pub const ENUM_D_OFFSET: usize = 192;
pub const UNK_Z_OFFSET: usize = 196;

/// End of the last declared car field; the rest of the record is padding.
pub const CAR_FIELDS_END: usize = UNK_Z_OFFSET + 4;
pub const CAR_PADDING_SIZE: usize = RECORD_SIZE - CAR_FIELDS_END;
