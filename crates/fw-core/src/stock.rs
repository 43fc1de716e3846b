use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A bag of resource counts keyed by lowercased item name.
///
/// A `Stock` never stores a zero count: withdrawing the last unit removes the
/// entry, and depositing zero units leaves the bag untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stock {
    items: BTreeMap<String, u64>,
}

impl Stock {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Units of `item` held, or 0 if absent.
    pub fn count(&self, item: &str) -> u64 {
        self.items.get(&item.to_lowercase()).copied().unwrap_or(0)
    }

    /// Returns true if the bag holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.items.values().fold(0, |acc, n| acc.saturating_add(*n))
    }

    /// Iterate over `(item, count)` pairs sorted by item name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Add `quantity` units of `item`.
    pub fn deposit(&mut self, item: &str, quantity: u64) -> CoreResult<()> {
        if quantity == 0 {
            return Ok(());
        }
        let key = item.to_lowercase();
        let current = self.items.get(&key).copied().unwrap_or(0);
        let next = current
            .checked_add(quantity)
            .ok_or_else(|| CoreError::StockOverflow(key.clone()))?;
        self.items.insert(key, next);
        Ok(())
    }

    /// Remove `quantity` units of `item`, dropping the entry when it hits zero.
    pub fn withdraw(&mut self, item: &str, quantity: u64) -> CoreResult<()> {
        let key = item.to_lowercase();
        let available = self.items.get(&key).copied().unwrap_or(0);
        if available < quantity {
            return Err(CoreError::InsufficientStock {
                item: key,
                available,
                requested: quantity,
            });
        }
        let remaining = available - quantity;
        if remaining == 0 {
            self.items.remove(&key);
        } else {
            self.items.insert(key, remaining);
        }
        Ok(())
    }

    fn can_accept(&self, item: &str, quantity: u64) -> bool {
        self.count(item).checked_add(quantity).is_some()
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (item, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}: {count}")?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for Stock {
    /// Build a bag from pairs, merging case-variant keys and skipping zeros.
    /// Counts that would overflow saturate at `u64::MAX`.
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut stock = Stock::new();
        for (item, count) in iter {
            if count == 0 {
                continue;
            }
            let key = item.as_ref().to_lowercase();
            let entry = stock.items.entry(key).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        stock
    }
}

/// Move `quantity` units of `item` from one bag to the other.
///
/// Both sides are checked before either is touched, so on error neither bag
/// has changed.
pub fn transfer(from: &mut Stock, to: &mut Stock, item: &str, quantity: u64) -> CoreResult<()> {
    let available = from.count(item);
    if available < quantity {
        return Err(CoreError::InsufficientStock {
            item: item.to_lowercase(),
            available,
            requested: quantity,
        });
    }
    if !to.can_accept(item, quantity) {
        return Err(CoreError::StockOverflow(item.to_lowercase()));
    }
    from.withdraw(item, quantity)?;
    to.deposit(item, quantity)
}
