//! Property tests for the sparse set index and the storage built on it.
//!
//! Operation sequences are generated from fixed ChaCha seeds so failures are
//! reproducible. Every step is checked against a simple model.

use std::collections::HashMap;
use std::collections::HashSet;

use ember_core::{ComponentStorage, Entity, Position, SparseSet, SparseSetError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEEDS: [u64; 4] = [1, 7, 0xE3BE, 0xDEAD_BEEF];

#[derive(Clone, Copy, Debug)]
enum Op {
    Insert(Entity),
    Remove(Entity),
    Clear,
}

fn random_op(rng: &mut ChaCha8Rng, universe: u32) -> Op {
    // Occasionally step past the universe to exercise range errors.
    let entity = Entity::new(rng.gen_range(0..universe + 2));
    match rng.gen_range(0..100) {
        0 => Op::Clear,
        1..=54 => Op::Insert(entity),
        _ => Op::Remove(entity),
    }
}

#[test]
fn invariants_hold_under_random_sequences() {
    for seed in SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let capacity = rng.gen_range(1..64u32);
        let mut set = SparseSet::new(capacity as usize);
        let mut model: HashSet<Entity> = HashSet::new();

        for step in 0..5_000 {
            let op = random_op(&mut rng, capacity);
            let in_range = |e: Entity| e.id() < capacity;

            match op {
                Op::Insert(e) => {
                    let result = set.insert(e);
                    if model.contains(&e) {
                        assert_eq!(result, Err(SparseSetError::DuplicateMember(e)));
                    } else if model.len() == capacity as usize {
                        assert_eq!(
                            result,
                            Err(SparseSetError::CapacityExceeded {
                                capacity: capacity as usize
                            })
                        );
                    } else if !in_range(e) {
                        assert!(matches!(result, Err(SparseSetError::OutOfRange { .. })));
                    } else {
                        let slot = result.unwrap();
                        assert_eq!(slot, model.len());
                        assert_eq!(set.slot_of(e), Ok(slot));
                        model.insert(e);
                    }
                }
                Op::Remove(e) => {
                    let result = set.remove(e);
                    if !in_range(e) {
                        assert!(matches!(result, Err(SparseSetError::OutOfRange { .. })));
                    } else if model.is_empty() {
                        assert_eq!(result, Err(SparseSetError::Underflow));
                    } else if !model.contains(&e) {
                        assert_eq!(result, Err(SparseSetError::NotAMember(e)));
                    } else {
                        let removal = result.unwrap();
                        assert_eq!(removal.removed, e);
                        assert_eq!(removal.tail_slot, model.len() - 1);
                        if !removal.is_tail() {
                            assert_eq!(set.slot_of(removal.moved), Ok(removal.freed_slot));
                        }
                        model.remove(&e);
                    }
                }
                Op::Clear => {
                    set.clear();
                    model.clear();
                }
            }

            if let Err(msg) = set.check_invariants() {
                panic!("seed {seed} step {step} after {op:?}: {msg}");
            }
            assert_eq!(set.len(), model.len());
            for id in 0..capacity + 2 {
                let e = Entity::new(id);
                assert_eq!(set.contains(e), model.contains(&e), "seed {seed} step {step} {e}");
            }
        }
    }
}

#[test]
fn insert_then_lookup_roundtrip() {
    let mut set = SparseSet::new(128);
    for id in (0..128).rev() {
        let e = Entity::new(id);
        let slot = set.insert(e).unwrap();
        assert!(set.contains(e));
        assert_eq!(set.slot_of(e), Ok(slot));
    }
}

#[test]
fn removal_moves_tail_into_freed_slot() {
    let (a, b, c) = (Entity::new(10), Entity::new(20), Entity::new(30));
    let mut set = SparseSet::new(32);
    for e in [a, b, c] {
        set.insert(e).unwrap();
    }

    let removal = set.remove(a).unwrap();
    assert_eq!(removal.moved, c);
    assert_eq!(removal.freed_slot, 0);
    assert!(!set.contains(a));
    assert!(set.contains(b));
    assert!(set.contains(c));
    assert_eq!(set.slot_of(c), Ok(0));
    assert_eq!(set.len(), 2);
}

#[test]
fn removing_last_element_reports_itself() {
    let (a, b) = (Entity::new(0), Entity::new(1));
    let mut set = SparseSet::new(2);
    set.insert(a).unwrap();
    set.insert(b).unwrap();

    let removal = set.remove(b).unwrap();
    assert_eq!(removal.moved, b);
    assert_eq!(removal.freed_slot, 1);
    assert_eq!(set.len(), 1);
    assert!(set.contains(a));
}

#[test]
fn clear_forgets_members() {
    let mut set = SparseSet::new(16);
    set.clear();
    assert!(set.is_empty());

    let live: Vec<_> = (3..9).map(Entity::new).collect();
    for &e in &live {
        set.insert(e).unwrap();
    }
    set.clear();
    for &e in &live {
        assert!(!set.contains(e));
    }
    assert_eq!(set.insert(live[4]), Ok(0));
}

#[test]
fn full_set_rejects_next_insert() {
    const N: u32 = 100;
    let mut set = SparseSet::new(N as usize);
    for id in 0..N {
        set.insert(Entity::new(id)).unwrap();
    }
    assert_eq!(
        set.insert(Entity::new(N)),
        Err(SparseSetError::CapacityExceeded { capacity: N as usize })
    );
    assert_eq!(set.len(), N as usize);
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut set = SparseSet::new(4);
    let e = Entity::new(2);
    set.insert(e).unwrap();
    assert_eq!(set.insert(e), Err(SparseSetError::DuplicateMember(e)));

    set.remove(e).unwrap();
    assert_eq!(set.insert(e), Ok(0));
}

#[test]
fn stale_sparse_entry_is_not_membership() {
    let mut set = SparseSet::new(8);
    let (gone, reuser) = (Entity::new(5), Entity::new(6));

    assert_eq!(set.insert(gone), Ok(0));
    set.remove(gone).unwrap();
    assert_eq!(set.insert(reuser), Ok(0));

    assert!(!set.contains(gone));
    assert_eq!(set.slot_of(gone), Err(SparseSetError::NotAMember(gone)));
    assert_eq!(set.remove(gone), Err(SparseSetError::NotAMember(gone)));
    assert!(set.contains(reuser));
}

#[test]
fn storage_payloads_follow_their_entities() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    let capacity = 256u32;
    let mut storage: ComponentStorage<Position> = ComponentStorage::new(capacity as usize);
    let mut model: HashMap<Entity, f32> = HashMap::new();

    for _ in 0..10_000 {
        let e = Entity::new(rng.gen_range(0..capacity));
        if rng.gen_bool(0.6) {
            let x: f32 = rng.gen_range(-1000.0..1000.0);
            if storage.insert(e, Position::new(x, 0.0, 0.0)).is_ok() {
                model.insert(e, x);
            }
        } else if let Ok(pos) = storage.remove(e) {
            assert_eq!(model.remove(&e), Some(pos.x));
        }
    }

    assert_eq!(storage.len(), model.len());
    for (entity, pos) in storage.iter() {
        assert_eq!(model.get(&entity), Some(&pos.x));
    }
}
