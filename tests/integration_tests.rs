//! Integration Tests
//!
//! End-to-end behaviour of `TriList`: ordering, per-type views, modifier
//! composition, isolation between types and live reads.

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use test_case::test_case;

use trilist::modifier::{negate, offset, scale};
use trilist::{Element, ListConfig, Tag, TriList};

type Mixed = TriList<i64, String, f64>;

/// Helper to build a list from a compact description
fn build(items: &[Element<i64, String, f64>]) -> Mixed {
    Mixed::from_elements(items.iter().cloned())
}

fn interleaved() -> Mixed {
    build(&[
        Element::Third(0.5),
        Element::First(10),
        Element::Second("a".to_string()),
        Element::First(20),
        Element::Third(1.5),
        Element::Second("b".to_string()),
        Element::First(30),
    ])
}

// === Ordering Tests ===

#[test_case(Tag::First, 3 ; "integers")]
#[test_case(Tag::Second, 2 ; "text")]
#[test_case(Tag::Third, 2 ; "reals")]
fn test_view_yields_exact_subsequence(tag: Tag, expected_len: usize) {
    let list = interleaved();
    match tag {
        Tag::First => assert_eq!(list.view::<i64, _>().to_vec(), vec![10, 20, 30]),
        Tag::Second => assert_eq!(
            list.view::<String, _>().to_vec(),
            vec!["a".to_string(), "b".to_string()]
        ),
        Tag::Third => assert_eq!(list.view::<f64, _>().to_vec(), vec![0.5, 1.5]),
    }
    assert_eq!(list.tags().filter(|t| *t == tag).count(), expected_len);
}

#[test]
fn test_views_partition_the_list() {
    let list = interleaved();
    let total = list.view::<i64, _>().count()
        + list.view::<String, _>().count()
        + list.view::<f64, _>().count();
    assert_eq!(total, list.len());
}

#[test]
fn test_pushes_interleave_in_order() {
    let mut list = Mixed::new();
    for i in 0..5_i64 {
        list.push(i);
        list.push(i as f64 * 0.5);
        if i % 2 == 0 {
            list.push(format!("s{}", i));
        }
    }
    assert_eq!(list.view::<i64, _>().to_vec(), vec![0, 1, 2, 3, 4]);
    assert_eq!(
        list.view::<String, _>().to_vec(),
        vec!["s0".to_string(), "s2".to_string(), "s4".to_string()]
    );
    assert_eq!(list.view::<f64, _>().to_vec(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
}

// === Modifier Tests ===

#[test]
fn test_reset_matches_fresh_list() {
    let list = interleaved();
    list.compose_front::<i64, _>(|x| x * 7);
    list.compose_front::<i64, _>(|x| x - 3);
    list.reset::<i64, _>();

    let mut fresh = Mixed::new();
    fresh.extend_values(vec![10_i64, 20, 30]);
    assert_eq!(list.view::<i64, _>().to_vec(), fresh.view::<i64, _>().to_vec());
}

#[test]
fn test_composition_order_is_outer_last() {
    let list = build(&[Element::First(5)]);
    let f = |x: i64| x + 2;
    let g = |x: i64| x * 3;
    list.compose_front::<i64, _>(f);
    list.compose_front::<i64, _>(g);

    assert_eq!(list.view::<i64, _>().first(), Some(g(f(5))));
    assert_ne!(list.view::<i64, _>().first(), Some(f(g(5))));
}

#[test]
fn test_numeric_helpers_compose() {
    let list = interleaved();
    list.compose_front::<f64, _>(scale(4.0));
    list.compose_front::<f64, _>(negate());
    list.compose_front::<i64, _>(offset(-10));

    let reals = list.view::<f64, _>().to_vec();
    assert_relative_eq!(reals[0], -2.0);
    assert_relative_eq!(reals[1], -6.0);
    assert_eq!(list.view::<i64, _>().to_vec(), vec![0, 10, 20]);
}

#[test]
fn test_cross_type_isolation() {
    let list = interleaved();
    let text_before = list.view::<String, _>().to_vec();
    let reals_before = list.view::<f64, _>().to_vec();

    list.compose_front::<i64, _>(|x| x * 1000);
    assert_eq!(list.view::<String, _>().to_vec(), text_before);
    assert_eq!(list.view::<f64, _>().to_vec(), reals_before);

    list.compose_front::<String, _>(|s| s.to_uppercase());
    list.reset::<i64, _>();
    assert_eq!(
        list.view::<String, _>().to_vec(),
        vec!["A".to_string(), "B".to_string()]
    );
    assert_eq!(list.view::<f64, _>().to_vec(), reals_before);
    assert_eq!(list.depth::<String, _>(), 1);
    assert_eq!(list.depth::<f64, _>(), 0);
}

// === Live Aliasing Tests ===

#[test]
fn test_view_created_before_compose_sees_it() {
    let list = interleaved();
    let ints = list.view::<i64, _>();
    list.compose_front::<i64, _>(|x| x + 1);
    assert_eq!(ints.to_vec(), vec![11, 21, 31]);

    list.reset::<i64, _>();
    assert_eq!(ints.iter().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[test]
fn test_cursor_created_before_compose_sees_it() {
    let list = interleaved();
    let mut cursor = list.begin();
    cursor.move_next().unwrap();
    assert_eq!(cursor.get().unwrap(), Element::First(10));

    list.compose_front::<i64, _>(|x| -x);
    assert_eq!(cursor.get().unwrap(), Element::First(-10));
}

#[test]
fn test_consuming_a_view_leaves_list_untouched() {
    let list = interleaved();
    list.compose_front::<i64, _>(|x| x * 2);
    let _ = list.view::<i64, _>().to_vec();
    let _ = list.view::<i64, _>().to_vec();

    list.reset::<i64, _>();
    assert_eq!(list.view::<i64, _>().to_vec(), vec![10, 20, 30]);
    assert_eq!(list.len(), 7);
}

// === Full Traversal Tests ===

#[test]
fn test_full_traversal_with_and_without_modifiers() {
    let mut list = Mixed::new();
    list.push(4_i64);
    list.push("mid".to_string());
    list.push(2.5_f64);

    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        vec![
            Element::First(4),
            Element::Second("mid".to_string()),
            Element::Third(2.5),
        ]
    );

    list.compose_front::<i64, _>(|x| x + 1);
    list.compose_front::<f64, _>(|x| x * 2.0);
    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        vec![
            Element::First(5),
            Element::Second("mid".to_string()),
            Element::Third(5.0),
        ]
    );
}

#[test]
fn test_traversal_backwards_from_end() {
    let list = interleaved();
    let mut cursor = list.end();
    let mut tags = Vec::new();
    while cursor != list.begin() {
        cursor.move_prev().unwrap();
        tags.push(cursor.tag().unwrap());
    }
    let mut forward: Vec<Tag> = list.tags().collect();
    forward.reverse();
    assert_eq!(tags, forward);
}

#[test]
fn test_concrete_scenario() {
    let mut list = Mixed::with_config(ListConfig::new().with_name("scenario"));
    list.push(1_i64);
    list.push("x".to_string());
    list.push(2.0_f64);
    list.push(3_i64);

    assert_eq!(list.view::<i64, _>().to_vec(), vec![1, 3]);
    list.compose_front::<i64, _>(|x| x + 1);
    assert_eq!(list.view::<i64, _>().to_vec(), vec![2, 4]);
    list.compose_front::<i64, _>(|x| x * 10);
    assert_eq!(list.view::<i64, _>().to_vec(), vec![20, 40]);
    list.reset::<i64, _>();
    assert_eq!(list.view::<i64, _>().to_vec(), vec![1, 3]);
}
