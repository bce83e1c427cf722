//! Comparator contract for ranked values.
//!
//! A comparator returns a signed integer for a pair of values:
//! positive when `a` ranks strictly before `b`, negative when `a` ranks
//! strictly after `b`, and zero when the two are tied. Comparators are
//! untrusted callbacks and may fail, so every comparison yields a `Result`.

use alloc::vec::Vec;
use binrank_core::CompareError;
use core::cmp::Ordering;

/// Sort order for ranked values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Smallest value takes rank 1.
    Asc,
    /// Largest value takes rank 1.
    Desc,
}

impl Order {
    /// Converts a natural ordering of `a` against `b` into a comparator result.
    #[inline]
    pub fn apply(&self, ord: Ordering) -> i64 {
        let ord = match self {
            Order::Asc => ord,
            Order::Desc => ord.reverse(),
        };
        match ord {
            Ordering::Less => 1,
            Ordering::Equal => 0,
            Ordering::Greater => -1,
        }
    }
}

/// Trait for comparing the values held by a ranked index.
pub trait RankComparator<V> {
    /// Compares two values. See the module docs for the sign convention.
    fn compare(&self, a: &V, b: &V) -> Result<i64, CompareError>;

    /// Returns true if `a` and `b` are tied.
    fn ties(&self, a: &V, b: &V) -> Result<bool, CompareError> {
        Ok(self.compare(a, b)? == 0)
    }
}

impl<V, F> RankComparator<V> for F
where
    F: Fn(&V, &V) -> Result<i64, CompareError>,
{
    #[inline]
    fn compare(&self, a: &V, b: &V) -> Result<i64, CompareError> {
        self(a, b)
    }
}

/// A comparator for values that implement `Ord`. Never fails.
#[derive(Clone, Debug)]
pub struct OrdComparator {
    order: Order,
}

impl OrdComparator {
    /// Creates a new comparator with the given order.
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// Smallest value first.
    pub fn asc() -> Self {
        Self::new(Order::Asc)
    }

    /// Largest value first.
    pub fn desc() -> Self {
        Self::new(Order::Desc)
    }

    /// Returns the order of this comparator.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<V: Ord> RankComparator<V> for OrdComparator {
    #[inline]
    fn compare(&self, a: &V, b: &V) -> Result<i64, CompareError> {
        Ok(self.order.apply(a.cmp(b)))
    }
}

/// A comparator for multi-field values, e.g. `[score, level]`.
///
/// Fields are compared left to right with a per-field order. A value with
/// fewer fields is considered incomplete and fails the comparison.
#[derive(Clone, Debug)]
pub struct FieldsComparator {
    orders: Vec<Order>,
}

impl FieldsComparator {
    /// Creates a new fields comparator with the given per-field orders.
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Creates orders for n fields, all with the same order.
    pub fn create_orders(n: usize, order: Order) -> Vec<Order> {
        (0..n).map(|_| order).collect()
    }

    /// Returns the per-field orders.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl<K: Ord> RankComparator<Vec<K>> for FieldsComparator {
    fn compare(&self, a: &Vec<K>, b: &Vec<K>) -> Result<i64, CompareError> {
        for (i, order) in self.orders.iter().enumerate() {
            let (av, bv) = match (a.get(i), b.get(i)) {
                (Some(av), Some(bv)) => (av, bv),
                _ => {
                    return Err(CompareError::new(alloc::format!(
                        "value is missing field {}",
                        i
                    )))
                }
            };
            let ret = order.apply(av.cmp(bv));
            if ret != 0 {
                return Ok(ret);
            }
        }
        Ok(0)
    }
}
