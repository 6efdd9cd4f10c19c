use core::iter::{FusedIterator, Peekable};

use crate::error::Result;
use crate::ZipRange;

/// Range which can absorb a following range if they touch.
trait RangeMerge: Sized {
    /// Merges the next range into this one, if they touch.
    ///
    /// Returns `Ok(false)` (leaving `self` as it was) when there is a gap
    /// between the two ranges.
    fn merge(&mut self, next: &Self) -> Result<bool>;
}

impl RangeMerge for ZipRange {
    fn merge(&mut self, next: &Self) -> Result<bool> {
        // Non-strict: ranges sharing a boundary code are merged.
        if self.upper() < next.lower() {
            return Ok(false);
        }

        if next.upper() > self.upper() {
            self.set_upper(next.upper())?;
        }

        Ok(true)
    }
}

/// Iterator that coalesces an iterator of sorted zip ranges.
///
/// Every range yielded is as wide as possible: any following ranges that
/// overlap it or share a boundary code with it have been merged into it.
/// Unsorted input is not detected, it simply produces fewer merges.
///
/// Widening a range goes through [`ZipRange::set_upper`], so each item is
/// a `Result`. After the first error the iterator yields nothing more.
pub struct Coalesce<I>
where
    I: Iterator<Item = ZipRange>,
{
    iter: Peekable<I>,
    failed: bool,
}

impl<I> Coalesce<I>
where
    I: Iterator<Item = ZipRange>,
{
    /// Create new Coalesce iterator.
    ///
    /// Requires that the iterator produces ranges in ascending order.
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iter.into_iter().peekable(),
            failed: false,
        }
    }
}

impl<I> Iterator for Coalesce<I>
where
    I: Iterator<Item = ZipRange>,
{
    type Item = Result<ZipRange>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut range = self.iter.next()?;

        // keep merging ranges as long as we can
        while let Some(next) = self.iter.peek() {
            match range.merge(next) {
                Ok(true) => {
                    log::trace!("merged {} into {}", next, range);
                    self.iter.next();
                }
                Ok(false) => break,
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }

        Some(Ok(range))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (lower.min(1), upper)
    }
}

impl<I> FusedIterator for Coalesce<I> where I: Iterator<Item = ZipRange> {}
