use std::sync::Arc;

use bedrock_types::ConcurrentSet;

#[test]
fn add_and_remove_report_membership_changes() {
    let set = ConcurrentSet::new();
    assert!(set.insert("a"));
    assert!(!set.insert("a"));
    assert!(set.contains(&"a"));
    assert!(set.remove(&"a"));
    assert!(!set.remove(&"a"));
    assert!(set.is_empty());
}

#[test]
fn concurrent_inserts_count_novelty_exactly_once() {
    let set = Arc::new(ConcurrentSet::new());

    let threads: Vec<_> = (0..4)
        .map(|_| {
            let set = set.clone();
            std::thread::spawn(move || {
                let mut fresh = 0usize;
                for value in 0..1000 {
                    if set.insert(value) {
                        fresh += 1;
                    }
                }
                fresh
            })
        })
        .collect();

    let total_fresh: usize = threads.into_iter().map(|t| t.join().unwrap()).sum();
    // Each of the 1000 values was new for exactly one thread.
    assert_eq!(total_fresh, 1000);
    assert_eq!(set.len(), 1000);
}

#[test]
fn iteration_survives_concurrent_mutation() {
    let set: Arc<ConcurrentSet<i32>> = Arc::new((0..512).collect());

    let mutator = {
        let set = set.clone();
        std::thread::spawn(move || {
            for value in 0..512 {
                set.remove(&value);
                set.insert(value + 1000);
            }
        })
    };

    // Weakly consistent: traversal observes some state, never fails.
    let mut seen = 0usize;
    for _ in 0..8 {
        seen = set.iter().count();
    }
    mutator.join().unwrap();
    assert!(seen <= 1024);
    assert_eq!(set.len(), 512);

    set.clear();
    assert!(set.is_empty());
}

#[test]
fn extend_adds_in_place() {
    let mut set: ConcurrentSet<char> = ['a', 'b'].into_iter().collect();
    set.extend(['b', 'c']);
    assert_eq!(set.len(), 3);
    let mut drained: Vec<char> = set.iter().collect();
    drained.sort_unstable();
    assert_eq!(drained, ['a', 'b', 'c']);
}
