/*!
[`ZipRange`] is a validated range of 5-digit US zip codes, and [`optimize`]
merges any collection of them into the smallest equivalent set.
Overlapping, nested, duplicated and touching ranges are coalesced into
a single range.


# Zip ranges

A `ZipRange` covers `lower..=upper`, where both bounds are zip codes
between `00000` and `99999` and `lower <= upper`. This is checked
whenever a range is built or one of its bounds is changed, so an invalid
range can never be observed. Rejections are reported as a [`ZipError`]
naming the offending value(s):

```rust
use zipranges::{ZipError, ZipRange};

assert_eq!(
    ZipRange::new(-25, 0).unwrap_err().to_string(),
    "-0025 is not a valid 5-digit zip code."
);
assert_eq!(
    ZipRange::new(97852, 93152),
    Err(ZipError::InvalidZipRange(97852, 93152))
);
```

Ranges are ordered by lower bound, then upper bound, and print as
`[lower,upper]` with both bounds zero-padded, e.g. `[00501,00544]`.


# Merging ranges

[`optimize`] sorts the ranges it is given, then merges each range into
the one before it whenever the earlier range reaches at least as far as
the later one starts. Two ranges that share a boundary code
(`[94200,94299]` and `[94299,94399]`) are merged; two ranges with no code
in common (`[94200,94299]` and `[94300,94399]`) are not.

```rust
use zipranges::{optimize, ZipRange};

let merged = optimize([
    ZipRange::new(94133, 94133)?,
    ZipRange::new(94200, 94299)?,
    ZipRange::new(94226, 94399)?,
])?;

assert_eq!(
    merged,
    vec![ZipRange::new(94133, 94133)?, ZipRange::new(94200, 94399)?]
);
# Ok::<(), zipranges::ZipError>(())
```

If your ranges are already sorted, [`Coalesce`] does the merging pass
lazily, without collecting or sorting.


## Crate features

By default this crate depends only on `thiserror` and the `log` facade.
It never installs a logger; rejected ranges are logged at `debug` level
and merges at `trace` level.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for `ZipRange`, as a two-element sequence
`[lower, upper]`. Deserializing validates the bounds.

You can enable the **serde1** feature in your _Cargo.toml_ file like so:

```toml
[dependencies]
zipranges = { version = "0.1", features = ["serde1"] }
```

You can similarly enable support for _quickcheck_ by enabling
the **quickcheck** feature.



[`ZipRange`]: crate::ZipRange
[`ZipError`]: crate::ZipError
[`optimize`]: crate::optimize
[`Coalesce`]: crate::operations::Coalesce

*/

pub mod error;
pub mod operations;
pub mod optimizer;
pub mod zip_range;

#[cfg(test)]
mod dense;

pub use error::{Result, ZipError};
pub use operations::Coalesce;
pub use optimizer::optimize;
pub use zip_range::{ZipRange, ZIP_MAX, ZIP_MIN};
