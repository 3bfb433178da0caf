//! The process-global string table backing [`super::Symbol`].
//!
//! Interning is two-way: a concurrent map from string to index for the
//! intern side, and a growable vector of leaked `'static` string slices
//! for the lookup side. Strings are never evicted — the front-end is a
//! short-lived process over a single source buffer, so unbounded growth
//! is bounded in practice by source size.

use dashmap::DashMap;
use std::sync::{OnceLock, RwLock};

/// Global interner, lazily initialized on first use.
static INTERNER: OnceLock<Interner> = OnceLock::new();

fn interner() -> &'static Interner {
    INTERNER.get_or_init(Interner::new)
}

struct Interner {
    /// string -> index, for `intern`.
    names: DashMap<&'static str, u32, std::hash::BuildHasherDefault<rustc_hash::FxHasher>>,
    /// index -> string, for `resolve`. Guarded separately since it only
    /// ever grows by push and is read far more often than written.
    strings: RwLock<Vec<&'static str>>,
}

impl Interner {
    fn new() -> Self {
        Self {
            names: DashMap::with_hasher(std::hash::BuildHasherDefault::<rustc_hash::FxHasher>::default()),
            strings: RwLock::new(Vec::new()),
        }
    }

    fn intern(&self, s: &str) -> u32 {
        if let Some(id) = self.names.get(s) {
            return *id;
        }
        // Leak the string once so both maps can hold a `'static` slice;
        // acceptable since symbols live for the process's lifetime. The
        // leak happens before the atomic upsert below, so a losing
        // concurrent racer leaks a throwaway copy rather than handing out
        // a second id for the same text - `names.entry` (a single
        // shard-locked critical section, mirroring the grounding source's
        // `self.map.entry(hash)`) is what actually decides who wins.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        match self.names.entry(leaked) {
            dashmap::mapref::entry::Entry::Occupied(entry) => *entry.get(),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                let mut strings = self.strings.write().unwrap();
                let id = strings.len() as u32;
                strings.push(leaked);
                entry.insert(id);
                id
            }
        }
    }

    fn resolve(&self, id: u32) -> &'static str {
        self.strings.read().unwrap()[id as usize]
    }
}

pub(super) fn intern(s: &str) -> u32 {
    interner().intern(s)
}

pub(super) fn resolve(id: u32) -> &'static str {
    interner().resolve(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_string_interns_to_same_id() {
        let a = intern("duplicate_test_symbol");
        let b = intern("duplicate_test_symbol");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_strings_get_distinct_ids() {
        let a = intern("distinct_symbol_a");
        let b = intern("distinct_symbol_b");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let id = intern("round_trip_symbol");
        assert_eq!(resolve(id), "round_trip_symbol");
    }

    #[test]
    fn concurrent_interning_of_a_new_string_never_hands_out_two_ids() {
        use std::sync::Barrier;
        use std::thread;

        let threads = 16;
        let barrier = std::sync::Arc::new(Barrier::new(threads));
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    intern("concurrently_interned_symbol")
                })
            })
            .collect();

        let ids: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let first = ids[0];
        assert!(
            ids.iter().all(|id| *id == first),
            "concurrent intern() calls for the same new string returned distinct ids: {ids:?}"
        );
    }
}
