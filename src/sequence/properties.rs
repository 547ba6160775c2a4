//! Property checks over arbitrary element lists.

use super::list::Sequence;

fn is_ascending(items: &[String]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}

fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items
}

quickcheck::quickcheck! {
    fn round_trip_through_array(items: Vec<String>) -> bool {
        let seq = Sequence::from_array(&items);
        Sequence::from_array(&seq.to_array()) == seq && seq.to_array() == items
    }

    fn double_reverse_restores(items: Vec<String>) -> bool {
        let original = Sequence::from_array(&items);
        let mut seq = original.clone();
        seq.reverse();
        seq.reverse();
        seq == original
    }

    fn reverse_mirrors_positions(items: Vec<String>) -> bool {
        let mut seq = Sequence::from_array(&items);
        seq.reverse();
        let n = items.len();
        (0..n).all(|i| seq.get(i).ok() == Some(items[n - 1 - i].as_str()))
    }

    fn length_tracks_reachable_nodes(front: Vec<String>, back: Vec<String>, pops: u8) -> bool {
        let mut seq = Sequence::new();
        for item in &front {
            seq.add_to_front(item.as_str());
        }
        for item in &back {
            seq.add_to_back(item.as_str());
        }
        let mut removed = 0;
        for _ in 0..pops {
            if seq.remove_front().is_ok() {
                removed += 1;
            }
        }
        let expected = front.len() + back.len() - removed;
        seq.len() == expected && seq.iter().count() == expected
    }

    fn split_halves_concatenate(items: Vec<String>) -> bool {
        let n = items.len();
        let mut front = Sequence::from_array(&items);
        let back = front.split();

        let mut joined = front.to_array();
        joined.extend(back.to_array());

        let front_ok = n <= 1 || front.len() == n.div_ceil(2);
        front_ok && front.len() + back.len() == n && joined == items
    }

    fn merge_of_sorted_inputs(a: Vec<String>, b: Vec<String>) -> bool {
        let (a, b) = (sorted(a), sorted(b));
        let mut left = Sequence::from_array(&a);
        let mut right = Sequence::from_array(&b);
        left.merge(&mut right);

        let merged = left.to_array();
        merged.len() == a.len() + b.len()
            && left.len() == merged.len()
            && is_ascending(&merged)
            && right.is_empty()
            && right.iter().next().is_none()
    }

    fn merge_sort_matches_std_sort(items: Vec<String>) -> bool {
        let mut seq = Sequence::from_array(&items);
        seq.merge_sort();
        seq.len() == items.len() && seq.to_array() == sorted(items)
    }

    fn merge_sort_is_idempotent(items: Vec<String>) -> bool {
        let mut seq = Sequence::from_array(&items);
        seq.merge_sort();
        let once = seq.clone();
        seq.merge_sort();
        seq == once
    }

    fn merge_sort_ignores_input_order(items: Vec<String>) -> bool {
        let mut forward = Sequence::from_array(&items);
        let mut backward = forward.clone();
        backward.reverse();
        forward.merge_sort();
        backward.merge_sort();
        forward == backward
    }

    fn append_all_copy_leaves_source(a: Vec<String>, b: Vec<String>) -> bool {
        let mut seq = Sequence::from_array(&a);
        let other = Sequence::from_array(&b);
        seq.append_all_copy(&other);

        let mut expected = a;
        expected.extend(b.iter().cloned());
        seq.to_array() == expected && seq.len() == expected.len() && other.to_array() == b
    }
}
