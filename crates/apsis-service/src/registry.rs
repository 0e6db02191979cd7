//! Satellite handle registry.
//!
//! Maps opaque [`SatelliteId`]s to registered satellites. An id carries a
//! slot index and a generation counter, so a released id turns stale
//! instead of dangling: lookups miss, a second release misses the same
//! way, and the backing satellite is dropped exactly once. Slots are
//! recycled through a free list; a slot whose generation counter would
//! wrap back to zero is retired permanently, so an id from a previous
//! epoch can never resurrect onto new data.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use apsis_propagator::Satellite;

/// Opaque handle to a registered satellite.
///
/// Encodes slot index (upper 32 bits) and generation (lower 32 bits).
/// Plain data: copying an id does not extend the satellite's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SatelliteId(u64);

impl SatelliteId {
    fn encode(slot: u32, generation: u32) -> Self {
        Self((u64::from(slot) << 32) | u64::from(generation))
    }

    fn slot(self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn generation(self) -> u32 {
        self.0 as u32
    }

    /// The raw id value, for embedding in host-side handle types.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Rebuild an id from [`as_u64`](Self::as_u64) output.
    ///
    /// An arbitrary value is safe: at worst it misses on lookup.
    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SatelliteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

struct Slot {
    generation: u32,
    entry: Option<Arc<Satellite>>,
}

#[derive(Default)]
struct Table {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

/// Shared-mutable registry of live satellites.
///
/// One mutex guards the slot table; every operation holds it only for the
/// table walk. Entries are `Arc`s cloned out under the lock and used
/// outside it, so propagation never runs while the table is held.
#[derive(Default)]
pub struct SatelliteRegistry {
    table: Mutex<Table>,
}

impl SatelliteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        // No caller code runs under the lock, so a poisoned table is
        // still structurally sound; recover it rather than failing every
        // subsequent operation.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a satellite and return its fresh, unique id.
    pub fn insert(&self, satellite: Arc<Satellite>) -> SatelliteId {
        let mut table = self.lock();
        if let Some(slot_index) = table.free.pop() {
            let slot = &mut table.slots[slot_index as usize];
            slot.entry = Some(satellite);
            SatelliteId::encode(slot_index, slot.generation)
        } else {
            let slot_index = table.slots.len() as u32;
            table.slots.push(Slot {
                generation: 0,
                entry: Some(satellite),
            });
            SatelliteId::encode(slot_index, 0)
        }
    }

    /// Fetch the satellite behind an id.
    ///
    /// Stale generations and never-issued ids miss identically.
    pub fn get(&self, id: SatelliteId) -> Option<Arc<Satellite>> {
        let table = self.lock();
        let slot = table.slots.get(id.slot() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.entry.clone()
    }

    /// Release an id, returning the satellite it owned.
    ///
    /// The generation bumps so the released id goes stale, and the slot
    /// joins the free list — unless the bump wrapped to zero, in which
    /// case the slot is retired for good (an epoch-zero id must never
    /// match again). A second release of the same id returns `None`.
    pub fn remove(&self, id: SatelliteId) -> Option<Arc<Satellite>> {
        let mut table = self.lock();
        let slot = table.slots.get_mut(id.slot() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;
        if generation != 0 {
            table.free.push(id.slot());
        }
        Some(entry)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.lock()
            .slots
            .iter()
            .filter(|slot| slot.entry.is_some())
            .count()
    }

    /// Whether the registry holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    fn force_generation(&self, slot_index: u32, generation: u32) {
        self.lock().slots[slot_index as usize].generation = generation;
    }
}
