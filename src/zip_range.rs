use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::ops::RangeInclusive;

#[cfg(feature = "serde1")]
use serde::{
    de::{Error as _, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

#[cfg(feature = "quickcheck")]
use quickcheck::{Arbitrary, Gen};

use crate::error::{Result, ZipError};

/// Smallest valid 5-digit zip code (`00000`).
pub const ZIP_MIN: i32 = 0;
/// Largest valid 5-digit zip code (`99999`).
pub const ZIP_MAX: i32 = 99_999;

/// A range of 5-digit zip codes, bounded inclusively below and
/// above (`lower..=upper`).
///
/// Both bounds always lie within [`ZIP_MIN`]`..=`[`ZIP_MAX`], and
/// `lower <= upper`. Every way of building or changing a `ZipRange`
/// checks this, so a value you hold is always valid.
///
/// Ranges are ordered by their lower bound first, then by their upper
/// bound. Two ranges are equal only if both bounds match.
///
/// ```
/// use zipranges::{ZipError, ZipRange};
///
/// let range = ZipRange::new(94133, 94299)?;
/// assert_eq!(range.to_string(), "[94133,94299]");
///
/// assert_eq!(
///     ZipRange::new(94299, 94133),
///     Err(ZipError::InvalidZipRange(94299, 94133))
/// );
/// # Ok::<(), ZipError>(())
/// ```
// Field order gives the derived ordering: lower bound, then upper bound.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZipRange {
    lower: i32,
    upper: i32,
}

impl ZipRange {
    /// Makes a new `ZipRange` covering `lower..=upper`.
    ///
    /// # Errors
    ///
    /// Returns [`ZipError::InvalidZipCode`] for the first bound
    /// (lower, then upper) outside `00000..=99999`, or
    /// [`ZipError::InvalidZipRange`] if both are valid but reversed.
    pub fn new(lower: i32, upper: i32) -> Result<Self> {
        validate(lower, upper)?;
        Ok(ZipRange { lower, upper })
    }

    /// The lowest zip code in the range.
    pub fn lower(&self) -> i32 {
        self.lower
    }

    /// The highest zip code in the range.
    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// Moves the lower bound, keeping the current upper bound.
    ///
    /// The range is left untouched if the new bound is rejected.
    pub fn set_lower(&mut self, lower: i32) -> Result<()> {
        validate(lower, self.upper)?;
        self.lower = lower;
        Ok(())
    }

    /// Moves the upper bound, keeping the current lower bound.
    ///
    /// The range is left untouched if the new bound is rejected.
    pub fn set_upper(&mut self, upper: i32) -> Result<()> {
        validate(self.lower, upper)?;
        self.upper = upper;
        Ok(())
    }

    /// Returns a copy of this range with a different lower bound.
    pub fn with_lower(self, lower: i32) -> Result<Self> {
        ZipRange::new(lower, self.upper)
    }

    /// Returns a copy of this range with a different upper bound.
    pub fn with_upper(self, upper: i32) -> Result<Self> {
        ZipRange::new(self.lower, upper)
    }

    /// Compares by lower bound, then by upper bound.
    ///
    /// Same as [`Ord::cmp`].
    pub fn compare(&self, other: &ZipRange) -> Ordering {
        self.cmp(other)
    }

    /// Returns `true` if `zip` lies within the range.
    pub fn contains(&self, zip: i32) -> bool {
        zip >= self.lower && zip <= self.upper
    }

    /// Returns `true` if the two ranges overlap or share a boundary
    /// zip code, i.e. they can be merged into a single range.
    ///
    /// Ranges separated by a gap of even a single zip code
    /// (e.g. `[00001,00002]` and `[00003,00004]`) do not touch.
    pub fn touches(&self, other: &ZipRange) -> bool {
        use std::cmp::{max, min};
        // Less-than-or-equal-to, because both ends are included.
        max(self.lower, other.lower) <= min(self.upper, other.upper)
    }

    /// Number of zip codes covered by the range. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        // Bounds are validated, so this never underflows.
        (self.upper - self.lower) as u32 + 1
    }
}

fn validate(lower: i32, upper: i32) -> Result<()> {
    validate_zip(lower)?;
    validate_zip(upper)?;
    if lower > upper {
        log::debug!("rejected reversed zip range {lower}..={upper}");
        return Err(ZipError::InvalidZipRange(lower, upper));
    }
    Ok(())
}

fn validate_zip(zip: i32) -> Result<()> {
    if !(ZIP_MIN..=ZIP_MAX).contains(&zip) {
        log::debug!("rejected out-of-range zip code {zip}");
        return Err(ZipError::InvalidZipCode(zip));
    }
    Ok(())
}

impl Display for ZipRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:05},{:05}]", self.lower, self.upper)
    }
}

// Bounds are always valid, so the display form is unambiguous
// and much easier to read in assertion failures.
impl Debug for ZipRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl TryFrom<(i32, i32)> for ZipRange {
    type Error = ZipError;

    fn try_from((lower, upper): (i32, i32)) -> Result<Self> {
        ZipRange::new(lower, upper)
    }
}

impl TryFrom<RangeInclusive<i32>> for ZipRange {
    type Error = ZipError;

    fn try_from(range: RangeInclusive<i32>) -> Result<Self> {
        ZipRange::new(*range.start(), *range.end())
    }
}

impl From<ZipRange> for RangeInclusive<i32> {
    fn from(range: ZipRange) -> Self {
        range.lower..=range.upper
    }
}

#[cfg(feature = "serde1")]
impl Serialize for ZipRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.lower)?;
        tup.serialize_element(&self.upper)?;
        tup.end()
    }
}

#[cfg(feature = "serde1")]
impl<'de> Deserialize<'de> for ZipRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, ZipRangeVisitor)
    }
}

#[cfg(feature = "serde1")]
struct ZipRangeVisitor;

#[cfg(feature = "serde1")]
impl<'de> Visitor<'de> for ZipRangeVisitor {
    type Value = ZipRange;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("ZipRange")
    }

    fn visit_seq<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let lower = access
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(0, &self))?;
        let upper = access
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(1, &self))?;
        ZipRange::new(lower, upper).map_err(A::Error::custom)
    }
}

#[cfg(feature = "quickcheck")]
impl Arbitrary for ZipRange {
    fn arbitrary(g: &mut Gen) -> Self {
        let a = u32::arbitrary(g) % (ZIP_MAX as u32 + 1);
        let b = u32::arbitrary(g) % (ZIP_MAX as u32 + 1);
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        ZipRange {
            lower: lower as i32,
            upper: upper as i32,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let upper = self.upper;
        Box::new(
            (self.lower, self.upper)
                .shrink()
                .filter_map(move |(lower, _)| ZipRange::new(lower, upper).ok()),
        )
    }
}
