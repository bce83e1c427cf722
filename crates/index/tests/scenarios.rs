//! End-to-end scenarios for the ranked index.

use binrank_index::{
    CompareError, Error, FieldsComparator, Key, Order, OrdComparator, RankBuilder, RankedIndex,
};
use std::cell::Cell;
use std::collections::HashSet;

/// Comparator that ties every pair of values.
fn all_tied(_: &i64, _: &i64) -> Result<i64, CompareError> {
    Ok(0)
}

#[test]
fn test_tie_disambiguation() {
    let mut index = RankedIndex::new("ties", all_tied);
    for key in [10, 20, 30] {
        index.update_item(key, 0).unwrap();
    }

    let dump = index.dump_from_left();
    assert_eq!(dump.len(), 3);
    let unique: HashSet<Key> = dump.iter().copied().collect();
    assert_eq!(unique, HashSet::from([10, 20, 30]));

    let ranks: Vec<usize> = [10, 20, 30]
        .iter()
        .map(|&key| index.rank_from_left(key).unwrap().unwrap())
        .collect();
    let distinct: HashSet<usize> = ranks.iter().copied().collect();
    assert_eq!(distinct, HashSet::from([1, 2, 3]));

    // Stable across repeated queries.
    for (&key, &rank) in [10, 20, 30].iter().zip(&ranks) {
        assert_eq!(index.rank_from_left(key).unwrap(), Some(rank));
        assert_eq!(dump[rank - 1], key);
    }
}

#[test]
fn test_tie_run_in_the_middle() {
    let mut index = RankedIndex::new("mixed", OrdComparator::desc());
    index.update_item(1, 900).unwrap();
    for key in 100..120 {
        index.update_item(key, 500).unwrap();
    }
    index.update_item(2, 100).unwrap();

    assert_eq!(index.rank_from_left(1).unwrap(), Some(1));
    assert_eq!(index.rank_from_right(2).unwrap(), Some(1));
    for key in 100..120 {
        let rank = index.rank_from_left(key).unwrap().unwrap();
        assert!((2..=21).contains(&rank), "key {} ranked {}", key, rank);
        assert_eq!(index.item_from_left(rank), Some((&500, key)));
    }
    assert!(index.stats().tie_steps() > 0);
    index.validate().unwrap();
}

#[test]
fn test_growth_scenario() {
    let mut index = RankBuilder::new("growth")
        .capacity(1)
        .unwrap()
        .comparator(OrdComparator::asc())
        .build()
        .unwrap();

    let values = [(5, 50), (1, 10), (4, 40), (2, 20), (3, 30)];
    for (key, value) in values {
        index.update_item(key, value).unwrap();
    }

    assert_eq!(index.capacity(), 8);
    assert_eq!(index.stats().growths(), 3);
    assert_eq!(index.dump_from_left(), vec![1, 2, 3, 4, 5]);
    for (key, value) in values {
        assert_eq!(index.item_by_key(key), Some(&value));
    }
}

#[test]
fn test_update_preserves_coherence() {
    let mut index = RankedIndex::new("coherence", OrdComparator::asc());
    index.update_item(1, 10).unwrap();
    index.update_item(2, 20).unwrap();
    index.update_item(7, 5).unwrap();
    let count = index.item_count();

    index.update_item(7, 15).unwrap();
    assert_eq!(index.item_count(), count);
    assert_eq!(index.item_by_key(7), Some(&15));
    assert_eq!(index.dump_from_left().iter().filter(|&&k| k == 7).count(), 1);
    assert_eq!(index.dump_from_left(), vec![1, 7, 2]);
}

#[test]
fn test_remove_then_absent() {
    let mut index = RankedIndex::new("remove", OrdComparator::asc());
    for key in 0..10 {
        index.update_item(key, key * 3).unwrap();
    }

    assert_eq!(index.remove_item(4).unwrap(), Some(5));
    assert_eq!(index.item_count(), 9);
    assert_eq!(index.rank_from_left(4).unwrap(), None);
    assert_eq!(index.rank_from_right(4).unwrap(), None);
    assert_eq!(index.item_by_key(4), None);
    assert_eq!(index.remove_item(4).unwrap(), None);
    assert_eq!(index.item_count(), 9);
}

#[test]
fn test_left_right_symmetry() {
    let mut index = RankedIndex::new("symmetry", OrdComparator::desc());
    for key in 0..25i64 {
        index.update_item(key, (key * 7) % 5).unwrap();
    }
    let count = index.item_count();
    for key in 0..25 {
        let left = index.rank_from_left(key).unwrap().unwrap();
        let right = index.rank_from_right(key).unwrap().unwrap();
        assert_eq!(left + right, count + 1);
        assert_eq!(index.item_from_right(right).map(|(_, k)| k), Some(key));
    }
}

#[test]
fn test_leaderboard_fields() {
    // Score descending, then level ascending.
    let cmp = FieldsComparator::new(vec![Order::Desc, Order::Asc]);
    let mut board = RankedIndex::new("season", cmp);
    board.update_item(1, vec![1500, 12]).unwrap();
    board.update_item(2, vec![1500, 9]).unwrap();
    board.update_item(3, vec![1800, 20]).unwrap();
    board.update_item(4, vec![900, 3]).unwrap();

    assert_eq!(board.dump_from_left(), vec![3, 2, 1, 4]);

    // Player 4 climbs to the top.
    assert_eq!(board.update_item(4, vec![2000, 4]).unwrap(), 1);
    assert_eq!(board.item_from_left(1), Some((&vec![2000, 4], 4)));
    assert_eq!(board.rank_from_left(3).unwrap(), Some(2));
}

#[test]
fn test_comparator_failure_reports_keys() {
    let fail = Cell::new(false);
    let cmp = |a: &i64, b: &i64| -> Result<i64, CompareError> {
        if fail.get() {
            return Err(CompareError::new("comparator offline").with_trace("score.rs:42"));
        }
        Ok(b.cmp(a) as i64)
    };
    let mut index = RankedIndex::new("faulty", cmp);
    index.update_item(1, 10).unwrap();
    index.update_item(2, 20).unwrap();

    fail.set(true);
    let err = index.update_item(3, 30).unwrap_err();
    match &err {
        Error::ComparatorFailure { key, source, .. } => {
            assert_eq!(*key, 3);
            assert_eq!(source.trace(), Some("score.rs:42"));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(err.to_string().contains("comparator offline"));
    // Key 1 sits where the search starts and needs no comparison.
    assert_eq!(index.rank_from_left(1).unwrap(), Some(1));
    assert!(index.rank_from_left(2).is_err());

    fail.set(false);
    assert_eq!(index.item_count(), 2);
    assert_eq!(index.item_by_key(3), None);
    index.validate().unwrap();
}

#[test]
fn test_inconsistent_comparator_is_fatal() {
    // Ties everything while `flip` is off, highest value first once it is on.
    let flip = Cell::new(false);
    let cmp = |a: &i64, b: &i64| -> Result<i64, CompareError> {
        if flip.get() {
            Ok(a.cmp(b) as i64)
        } else {
            Ok(0)
        }
    };
    let mut index = RankedIndex::new("drifting", cmp);
    for (key, value) in [(1, 30), (2, 20), (3, 10)] {
        index.update_item(key, value).unwrap();
    }

    flip.set(true);
    let mut fatal = false;
    for key in 1..=3 {
        match index.rank_from_left(key) {
            Ok(Some(rank)) => assert_eq!(index.dump_from_left()[rank - 1], key),
            Ok(None) => panic!("key {} vanished", key),
            Err(err) => {
                assert!(err.is_fatal());
                fatal = true;
            }
        }
    }
    assert!(fatal);
}

#[test]
fn test_display() {
    let mut index = RankedIndex::with_capacity("daily", OrdComparator::asc(), 4);
    index.update_item(1, 1).unwrap();
    assert_eq!(index.to_string(), "rank:daily,capacity:4,count:1");
}

#[test]
fn test_remove_fails_inside_tie_run() {
    // Ties every pair; once armed, the third call and later ones fail.
    let armed = Cell::new(false);
    let calls = Cell::new(0usize);
    let cmp = |_: &i64, _: &i64| -> Result<i64, CompareError> {
        if armed.get() {
            calls.set(calls.get() + 1);
            if calls.get() >= 3 {
                return Err(CompareError::new("scorer unavailable"));
            }
        }
        Ok(0)
    };
    let mut index = RankedIndex::new("tied", cmp);
    for key in 1..=9 {
        index.update_item(key, 0).unwrap();
    }
    let dump = index.dump_from_left();
    let count = index.item_count();
    let edge = dump[0];

    armed.set(true);
    let err = index.remove_item(edge).unwrap_err();
    assert!(matches!(err, Error::ComparatorFailure { key, .. } if key == edge));
    assert!(!err.is_fatal());

    armed.set(false);
    assert_eq!(index.dump_from_left(), dump);
    assert_eq!(index.item_count(), count);
    assert_eq!(index.item_by_key(edge), Some(&0));
    index.validate().unwrap();
}
