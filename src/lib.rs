//! Reading, editing and writing of `carindex.def` car index files.
//!
//! [CarIndex] owns the decoded records, [def] holds the binary codec,
//! [tables] loads the label and enum text files, and [editor] converts
//! record fields to and from the text a front end shows.

pub mod def;
pub mod editor;
mod record;
pub mod tables;
mod text;

pub use record::{CarRecord, EndRecord, Field, FieldError, HeadRecord};
pub use text::{FixedText, InterleavedText};

use def::consts::RECORD_SIZE;
use def::{DecodeError, EncodeError};
use std::path::Path;

/// A decoded car index file: head record, cars in file order, trailer record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarIndex {
    pub head: HeadRecord,
    pub cars: Vec<CarRecord>,
    pub end: EndRecord,
}

impl CarIndex {
    /// Loads the file at `path`. A missing trailer is tolerated and replaced
    /// by a zero-filled one.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        Ok(def::read_file(path)?.index)
    }

    /// Rewrites the file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EncodeError> {
        def::write_file(path, self)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CarRecord> {
        self.cars.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CarRecord> {
        self.cars.get_mut(index)
    }

    /// Appends `car` and returns its index.
    pub fn push(&mut self, car: CarRecord) -> usize {
        self.cars.push(car);
        self.cars.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<CarRecord> {
        (index < self.cars.len()).then(|| self.cars.remove(index))
    }

    /// The index to select after a removal at `index`: the same position, or
    /// the new last car when the removed one was last.
    pub fn clamp_selection(&self, index: usize) -> Option<usize> {
        match self.cars.len() {
            0 => None,
            len => Some(index.min(len - 1)),
        }
    }

    /// `carNameId` of every car, in file order.
    pub fn car_names(&self) -> Vec<String> {
        self.cars.iter().map(|car| car.car_name_id.text()).collect()
    }

    /// Size in bytes of the encoded file.
    pub fn encoded_len(&self) -> usize {
        RECORD_SIZE * (self.cars.len() + 2)
    }
}
