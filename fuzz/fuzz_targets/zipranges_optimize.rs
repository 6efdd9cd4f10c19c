#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use std::collections::BTreeSet;
use zipranges::{optimize, ZipRange, ZIP_MAX};

// Bounds are folded into a small band of codes so ranges overlap often.
#[derive(Clone, Debug, Arbitrary)]
struct Bounds(u16, u8);

impl Bounds {
    fn to_range(&self) -> ZipRange {
        let lower = i32::from(self.0) % 2000;
        let upper = (lower + i32::from(self.1)).min(ZIP_MAX);
        ZipRange::new(lower, upper).unwrap()
    }
}

fn covered(ranges: &[ZipRange]) -> BTreeSet<i32> {
    ranges
        .iter()
        .flat_map(|range| range.lower()..=range.upper())
        .collect()
}

fuzz_target!(|bounds: Vec<Bounds>| {
    let ranges: Vec<ZipRange> = bounds.iter().map(Bounds::to_range).collect();
    let merged = optimize(ranges.iter().copied()).unwrap();

    // Nothing left to merge.
    for pair in merged.windows(2) {
        if pair[0].upper() >= pair[1].lower() {
            panic!()
        }
    }

    assert_eq!(covered(&ranges), covered(&merged));
});
