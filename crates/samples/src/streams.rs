//! Iterator demonstrations
//!
//! One iterator chain per function: creating an iterator from a list, an
//! array, loose elements or a builder, then map, filter, sort, distinct,
//! flatten, min/max, limit, collect into a set, count, find with fallback
//! and for_each. [`demonstrations`] renders each of them on its sample input.

use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::iter;

/// Iterate a borrowed list
pub fn from_list(list: &[String]) -> Vec<String> {
    list.iter().cloned().collect()
}

/// Iterate an owned array by value
pub fn from_array<T, const N: usize>(array: [T; N]) -> Vec<T> {
    array.into_iter().collect()
}

/// Iterate loose elements chained one at a time
pub fn from_elements<T>(first: T, second: T, third: T) -> Vec<T> {
    iter::once(first)
        .chain(iter::once(second))
        .chain(iter::once(third))
        .collect()
}

/// Build the items up front, then iterate what was built
pub fn from_builder<'a>(items: &[&'a str]) -> Vec<&'a str> {
    let mut builder = Vec::with_capacity(items.len());
    for item in items {
        builder.push(*item);
    }
    builder.into_iter().collect()
}

/// Visit every item with `for_each`, one output line per item
pub fn for_each_lines(items: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    items.iter().for_each(|item| lines.push(item.to_string()));
    lines
}

/// Map every item to upper case
pub fn uppercase(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_uppercase()).collect()
}

/// Keep only the items equal to `target`
pub fn filter_equal<'a>(items: &[&'a str], target: &str) -> Vec<&'a str> {
    items.iter().copied().filter(|s| *s == target).collect()
}

/// Items in ascending order
pub fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort();
    out
}

/// Items with duplicates removed, keeping the first occurrence
pub fn distinct<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Concatenate nested lists in order
pub fn flatten<T: Clone>(lists: &[Vec<T>]) -> Vec<T> {
    lists.iter().flatten().cloned().collect()
}

/// Smallest item, `None` when empty
pub fn min<T: Ord + Copy>(items: &[T]) -> Option<T> {
    items.iter().copied().min()
}

/// Largest item, `None` when empty
pub fn max<T: Ord + Copy>(items: &[T]) -> Option<T> {
    items.iter().copied().max()
}

/// At most the first `n` items
pub fn limit<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().take(n).cloned().collect()
}

/// Upper-cased items collected into a set; duplicates collapse
pub fn collect_uppercase_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_uppercase()).collect()
}

/// Number of items
pub fn count<T>(items: &[T]) -> usize {
    items.iter().count()
}

/// Any item, or `default` when there is none
pub fn find_any_or<'a>(items: &[&'a str], default: &'a str) -> &'a str {
    items.iter().copied().next().unwrap_or(default)
}

fn render<T: Debug>(value: T) -> String {
    format!("{:?}", value)
}

/// Every demonstration as `(name, rendered output)`
pub fn demonstrations() -> Vec<(&'static str, String)> {
    let abc = ["a", "b", "c"];
    let owned: Vec<String> = abc.iter().map(|s| s.to_string()).collect();
    vec![
        ("create_from_list", render(from_list(&owned))),
        ("create_from_array", render(from_array(abc))),
        ("create_from_elements", render(from_elements("a", "b", "c"))),
        ("create_from_builder", render(from_builder(&abc))),
        ("map", render(uppercase(&abc))),
        ("filter", render(filter_equal(&abc, "a"))),
        ("sorted", render(sorted(&["c", "b", "a"]))),
        ("distinct", render(distinct(&["a", "b", "a"]))),
        (
            "flat_map",
            render(flatten(&[
                vec!["a", "b", "c"],
                vec!["d", "e", "f"],
                vec!["g", "h", "i"],
            ])),
        ),
        ("min", render(min(&[1, 2, 3]))),
        ("max", render(max(&[1, 2, 3]))),
        ("limit", render(limit(&abc, 2))),
        ("collect", render(collect_uppercase_set(&["a", "b", "c", "a"]))),
        ("count", render(count(&abc))),
        ("find_any", render(find_any_or(&abc, "d"))),
        ("find_any_empty", render(find_any_or(&[], "d"))),
        ("for_each", render(for_each_lines(&abc))),
    ]
}
