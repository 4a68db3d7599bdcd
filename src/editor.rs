//! Conversion between car record fields and the text a front end shows.
//!
//! Reading a field never changes the record. Edits go through [apply] or
//! [commit]; an edit that cannot be converted leaves its field untouched.

use crate::tables::{Enums, Labels, Tables, parse_value};
use crate::{CarRecord, Field, FieldError};
use tracing::warn;

/// How a field is shown and edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Text,
    /// A choice among the entries of the named enum.
    Enum(&'static str),
    Decimal,
    /// Upper-case hexadecimal without prefix.
    Hex,
    /// Upper-case hexadecimal padded to `digits`; edits are refused.
    ReadOnlyHex { digits: usize },
}

pub fn presentation(field: Field) -> Presentation {
    match field {
        Field::CarNameId | Field::DsCrashModel | Field::DsShadowModel | Field::FullCarName => {
            Presentation::Text
        }
        Field::EnumA1
        | Field::EnumA2
        | Field::EnumB
        | Field::ZeroOrFour
        | Field::EnumC
        | Field::EnumD => Presentation::Enum(field.name()),
        Field::ZeroTwo => Presentation::ReadOnlyHex { digits: 2 },
        Field::Zero => Presentation::Hex,
        Field::StealTimeMs | Field::UnkB | Field::SeatCount | Field::UnkZ => Presentation::Decimal,
    }
}

/// Display name of `field`, falling back to its symbolic name.
pub fn label(labels: &Labels, field: Field) -> &str {
    labels
        .get(field.name())
        .or_else(|| legacy_label_key(field).and_then(|key| labels.get(key)))
        .unwrap_or(field.name())
}

/// Older label files key the full name as `FullCarName`.
fn legacy_label_key(field: Field) -> Option<&'static str> {
    (field == Field::FullCarName).then_some("FullCarName")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub value: u32,
}

/// Options for an enum field. Only built by [choices], which keeps
/// `options` non-empty and `selected` a valid index into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices {
    options: Vec<Choice>,
    selected: usize,
}

impl Choices {
    pub fn options(&self) -> &[Choice] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Choice {
        &self.options[self.selected]
    }
}

/// Options for a field of enum `enum_name` currently holding `current`.
///
/// With a definition the options are its entries in file order; the entry
/// matching `current` is selected, or the first entry when none matches.
/// Without a definition (or with an empty one) the only option is `current`
/// itself, labelled in hex.
pub fn choices(enums: &Enums, enum_name: &str, current: u32) -> Choices {
    match enums.get(enum_name).filter(|def| !def.is_empty()) {
        Some(def) => Choices {
            options: def
                .entries()
                .iter()
                .map(|(name, value)| Choice {
                    name: name.clone(),
                    value: *value,
                })
                .collect(),
            selected: def.position_of(current).unwrap_or(0),
        },
        None => Choices {
            options: vec![Choice {
                name: hex_literal(current),
                value: current,
            }],
            selected: 0,
        },
    }
}

fn hex_literal(value: u32) -> String {
    format!("0x{value:X}")
}

/// The text shown for `field`. Enum fields show their raw value in hex.
pub fn display(record: &CarRecord, field: Field) -> String {
    if let Some(text) = record.text(field) {
        return text;
    }
    let value = record.number(field).unwrap_or_default();
    match presentation(field) {
        Presentation::Enum(_) => hex_literal(value),
        Presentation::Hex => format!("{value:X}"),
        Presentation::ReadOnlyHex { digits } => format!("{value:0digits$X}"),
        Presentation::Decimal | Presentation::Text => value.to_string(),
    }
}

/// A new value for one field, as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Text typed into the field.
    Text(String),
    /// The value of a selected enum option.
    Choice(u32),
}

/// Applies one edit. On error the record is unchanged.
pub fn apply(record: &mut CarRecord, field: Field, edit: &Edit) -> Result<(), FieldError> {
    let value = match (presentation(field), edit) {
        (Presentation::ReadOnlyHex { .. }, _) => return Err(FieldError::ReadOnly { field }),
        (Presentation::Text, Edit::Text(text)) => return record.set_text(field, text),
        (Presentation::Text, Edit::Choice(_)) => return Err(FieldError::NotNumeric { field }),
        (_, Edit::Choice(value)) => *value,
        (Presentation::Enum(_), Edit::Text(text)) => parse(field, text, parse_value)?,
        (Presentation::Decimal, Edit::Text(text)) => parse(field, text, |s| s.parse().ok())?,
        (Presentation::Hex, Edit::Text(text)) => {
            parse(field, text, |s| u32::from_str_radix(s, 16).ok())?
        }
    };
    record.set_number(field, value)
}

fn parse(
    field: Field,
    text: &str,
    parser: impl Fn(&str) -> Option<u32>,
) -> Result<u32, FieldError> {
    parser(text.trim()).ok_or_else(|| FieldError::Unparsable {
        field,
        text: text.to_string(),
    })
}

/// Applies every edit that converts and returns the errors of those that
/// did not. Rejected edits keep the field's previous value.
pub fn commit(record: &mut CarRecord, edits: &[(Field, Edit)]) -> Vec<FieldError> {
    edits
        .iter()
        .filter_map(|(field, edit)| {
            let err = apply(record, *field, edit).err()?;
            warn!(field = field.name(), error = %err, "Edit rejected, keeping previous value");
            Some(err)
        })
        .collect()
}

/// How one field appears in an edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Text { text: String, read_only: bool },
    Choice(Choices),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: String,
    pub widget: Widget,
}

/// The edit form for `record`, one entry per field in layout order.
pub fn view(record: &CarRecord, tables: &Tables) -> Vec<FieldView> {
    Field::ALL
        .into_iter()
        .map(|field| {
            let widget = match presentation(field) {
                Presentation::Enum(name) => Widget::Choice(choices(
                    &tables.enums,
                    name,
                    record.number(field).unwrap_or_default(),
                )),
                presentation => Widget::Text {
                    text: display(record, field),
                    read_only: matches!(presentation, Presentation::ReadOnlyHex { .. }),
                },
            };
            FieldView {
                field,
                label: label(&tables.labels, field).to_string(),
                widget,
            }
        })
        .collect()
}
