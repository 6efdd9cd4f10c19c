use crate::error::Result;
use crate::operations::Coalesce;
use crate::ZipRange;


/// Merges zip code ranges into the minimal sorted set of ranges covering
/// the same zip codes.
///
/// Ranges may be given in any order and may overlap, nest, repeat, or
/// share a boundary code; all of those are merged. Ranges separated by
/// a gap (even of a single code) are kept apart. The result is sorted
/// ascending and freshly allocated; the input is consumed, so a caller
/// that wants to keep its ranges can pass `ranges.iter().copied()`.
///
/// ```
/// use zipranges::{optimize, ZipRange};
///
/// let merged = optimize([
///     ZipRange::new(94188, 94299)?,
///     ZipRange::new(94226, 94316)?,
///     ZipRange::new(94133, 94133)?,
/// ])?;
/// assert_eq!(
///     merged,
///     vec![ZipRange::new(94133, 94133)?, ZipRange::new(94188, 94316)?]
/// );
/// # Ok::<(), zipranges::ZipError>(())
/// ```
///
/// # Errors
///
/// Merging only ever widens a range to an upper bound that is already
/// a valid zip code, so this does not fail in practice. Should widening
/// a range be rejected, that [`ZipError`](crate::ZipError) is returned
/// and no partial result is produced.
pub fn optimize<I>(ranges: I) -> Result<Vec<ZipRange>>
where
    I: IntoIterator<Item = ZipRange>,
{
    let mut sorted: Vec<ZipRange> = ranges.into_iter().collect();
    // Sorting first lets a single pass do all the merging.
    sorted.sort_unstable();

    let input_len = sorted.len();
    let merged = Coalesce::new(sorted).collect::<Result<Vec<_>>>()?;
    log::trace!("optimized {} zip ranges into {}", input_len, merged.len());
    Ok(merged)
}
