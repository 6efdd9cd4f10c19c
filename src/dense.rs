use std::collections::BTreeSet;

use crate::ZipRange;

// A simple but slow and memory-hungry record of exactly
// which zip codes a bunch of ranges cover, for testing.
//
// Comparing two of these tells you whether two sets of ranges
// cover the same codes, regardless of how they are split up.
#[derive(Eq, PartialEq, Debug, Default)]
pub struct DenseZipSet {
    // Stores every covered code individually rather than as ranges.
    codes: BTreeSet<i32>,
}

impl DenseZipSet {
    pub fn new() -> DenseZipSet {
        DenseZipSet::default()
    }

    pub fn insert(&mut self, range: &ZipRange) {
        for zip in range.lower()..=range.upper() {
            self.codes.insert(zip);
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}

impl<'a> FromIterator<&'a ZipRange> for DenseZipSet {
    fn from_iter<T: IntoIterator<Item = &'a ZipRange>>(iter: T) -> Self {
        let mut dense = DenseZipSet::new();
        for range in iter {
            dense.insert(range);
        }
        dense
    }
}

#[test]
fn counts_overlapping_codes_once() {
    let ranges = [ZipRange::new(1, 5).unwrap(), ZipRange::new(4, 8).unwrap()];
    let dense: DenseZipSet = ranges.iter().collect();
    assert_eq!(dense.len(), 8);
}
