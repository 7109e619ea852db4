//! Storage bookkeeping for bulk goods.
//!
//! One container per good type, each bounded by `container_capacity`.
//! The number of active containers is bounded by how many container-sized
//! slots fit in `storage_capacity`. Current implementation is optimized for
//! synchronous, direct memory access; wrap the whole storage in a single lock
//! if it ever needs to be shared, since every operation is a check-then-act
//! sequence over the contents map.

use rust_decimal::Decimal;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::Error;

/// Bounded storage of per-good containers.
///
/// Generic over the good key; [`Good`](crate::Good) is the shipped default.
/// Quantities are [`Decimal`], so comparisons in callers and tests are exact.
#[derive(Debug, Clone)]
pub struct Storage<G> {
    container_capacity: Decimal,
    storage_capacity: Decimal,
    contents: HashMap<G, Decimal>,
}

impl<G: Eq + Hash> Storage<G> {
    /// Creates a storage with the given per-container and total capacities.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `container_capacity` is negative
    /// or `storage_capacity` is less than `container_capacity`.
    pub fn new(container_capacity: Decimal, storage_capacity: Decimal) -> Result<Self, Error> {
        if container_capacity < Decimal::ZERO {
            return Err(Error::InvalidArgument(
                "container capacity can't be negative",
            ));
        }
        if storage_capacity < container_capacity {
            return Err(Error::InvalidArgument(
                "storage capacity can't be less than the capacity of one container",
            ));
        }
        Ok(Self {
            container_capacity,
            storage_capacity,
            contents: HashMap::new(),
        })
    }

    pub fn container_capacity(&self) -> Decimal {
        self.container_capacity
    }

    pub fn storage_capacity(&self) -> Decimal {
        self.storage_capacity
    }

    /// Number of active containers, each counting for one capacity slot.
    pub fn container_count(&self) -> usize {
        self.contents.len()
    }

    /// Iterates over active containers and their quantities.
    pub fn iter(&self) -> impl Iterator<Item = (&G, Decimal)> {
        self.contents.iter().map(|(good, quantity)| (good, *quantity))
    }

    /// Deposits `amount` of a good, creating its container on first use.
    /// Returns the overflow remainder that did not fit into the container;
    /// a deposit into a full container caps at capacity and hands the whole
    /// surplus back.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `amount` is negative, and
    /// [`Error::CapacityExceeded`] if the good has no container yet and no
    /// capacity slot remains for a new one. Failed deposits leave the
    /// storage untouched.
    pub fn deposit(&mut self, good: G, amount: Decimal) -> Result<Decimal, Error> {
        check_amount(amount)?;
        let active = self.contents.len();
        match self.contents.entry(good) {
            Entry::Occupied(mut container) => {
                let free = self.container_capacity - *container.get();
                if amount <= free {
                    *container.get_mut() += amount;
                    Ok(Decimal::ZERO)
                } else {
                    *container.get_mut() = self.container_capacity;
                    Ok(amount - free)
                }
            }
            Entry::Vacant(slot) => {
                if Decimal::from(active + 1) * self.container_capacity > self.storage_capacity {
                    return Err(Error::CapacityExceeded);
                }
                slot.insert(amount.min(self.container_capacity));
                Ok((amount - self.container_capacity).max(Decimal::ZERO))
            }
        }
    }

    /// Withdraws up to `amount` of a good and returns how much actually came
    /// out. An absent container reads as empty and is not created.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `amount` is negative.
    pub fn withdraw(&mut self, good: &G, amount: Decimal) -> Result<Decimal, Error> {
        check_amount(amount)?;
        let Some(quantity) = self.contents.get_mut(good) else {
            return Ok(Decimal::ZERO);
        };
        let withdrawn = amount.min(*quantity);
        *quantity -= withdrawn;
        Ok(withdrawn)
    }

    /// Removes the container for a good if it holds nothing.
    /// Returns true iff the container was empty or absent; an absent
    /// container counts as empty and nothing is mutated for it.
    pub fn remove_container(&mut self, good: &G) -> bool {
        match self.contents.get(good) {
            Some(quantity) if !quantity.is_zero() => false,
            Some(_) => {
                self.contents.remove(good);
                true
            }
            None => true,
        }
    }

    /// Current quantity of a good, zero if it has no container.
    pub fn amount(&self, good: &G) -> Decimal {
        self.contents.get(good).copied().unwrap_or(Decimal::ZERO)
    }

    /// Free space left in the good's container. For an absent container this
    /// is the full container capacity.
    pub fn free_space(&self, good: &G) -> Decimal {
        self.container_capacity - self.amount(good)
    }
}

impl<G> fmt::Display for Storage<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Storage(container_capacity = {}, storage_capacity = {})",
            self.container_capacity, self.storage_capacity
        )
    }
}

fn check_amount(amount: Decimal) -> Result<(), Error> {
    if amount < Decimal::ZERO {
        return Err(Error::InvalidArgument("amount can't be negative"));
    }
    Ok(())
}
