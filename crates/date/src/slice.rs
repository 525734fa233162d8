//! Ordered collections of dates and min/max helpers.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Returns the earliest of `dates`, or the zero date if there are none.
///
/// On ties the first occurrence wins.
pub fn min_date(dates: &[Date]) -> Date {
    let Some((&first, rest)) = dates.split_first() else {
        return Date::default();
    };
    rest.iter()
        .fold(first, |min, &d| if d.before(min) { d } else { min })
}

/// Returns the latest of `dates`, or the zero date if there are none.
///
/// On ties the first occurrence wins.
pub fn max_date(dates: &[Date]) -> Date {
    let Some((&first, rest)) = dates.split_first() else {
        return Date::default();
    };
    rest.iter()
        .fold(first, |max, &d| if d.after(max) { d } else { max })
}

/// A sequence of dates in insertion order. Duplicates are allowed.
///
/// Dereferences to the underlying `Vec<Date>`, so `len`, `swap`, indexing
/// and in-place sorting work as on any vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateSlice(Vec<Date>);

impl DateSlice {
    /// Returns an empty slice.
    pub fn new() -> Self {
        DateSlice(Vec::new())
    }

    /// Reports whether any element equals `date`.
    pub fn contains(&self, date: Date) -> bool {
        self.0.iter().any(|item| item.equal(date))
    }

    /// Returns the elements matching `pred`, in order.
    pub fn filter(&self, mut pred: impl FnMut(Date) -> bool) -> DateSlice {
        self.0.iter().copied().filter(|&d| pred(d)).collect()
    }

    /// Returns the first element matching `pred`, or the zero date.
    pub fn find(&self, mut pred: impl FnMut(Date) -> bool) -> Date {
        self.0
            .iter()
            .copied()
            .find(|&d| pred(d))
            .unwrap_or_default()
    }

    /// Reports whether any element matches `pred`, stopping at the first.
    pub fn some(&self, mut pred: impl FnMut(Date) -> bool) -> bool {
        self.0.iter().any(|&d| pred(d))
    }

    /// Returns the elements that are not the zero date.
    pub fn non_zero(&self) -> DateSlice {
        self.filter(|d| !d.is_zero())
    }

    /// Returns the earliest element, as [`min_date`].
    pub fn min(&self) -> Date {
        min_date(&self.0)
    }

    /// Returns the latest element, as [`max_date`].
    pub fn max(&self) -> Date {
        max_date(&self.0)
    }

    /// Reports whether the element at `i` is before the element at `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].before(self.0[j])
    }

    /// Sorts the elements chronologically, keeping equal dates in order.
    pub fn sort_chronologically(&mut self) {
        self.0.sort();
    }

    /// Returns the underlying vector.
    pub fn into_inner(self) -> Vec<Date> {
        self.0
    }
}

impl Deref for DateSlice {
    type Target = Vec<Date>;

    fn deref(&self) -> &Vec<Date> {
        &self.0
    }
}

impl DerefMut for DateSlice {
    fn deref_mut(&mut self) -> &mut Vec<Date> {
        &mut self.0
    }
}

impl From<Vec<Date>> for DateSlice {
    fn from(dates: Vec<Date>) -> Self {
        DateSlice(dates)
    }
}

impl FromIterator<Date> for DateSlice {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        DateSlice(iter.into_iter().collect())
    }
}

impl IntoIterator for DateSlice {
    type Item = Date;
    type IntoIter = std::vec::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DateSlice {
    type Item = &'a Date;
    type IntoIter = std::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
