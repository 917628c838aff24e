mod unique;

/// Returns the 0-indexed position of the item in the list, if it's found
fn item_pos(items: &[String], item: &str) -> Option<usize> {
    items.iter().position(|v| v == item)
}

/// Appends `value` to `seq` if it isn't present yet.
///
/// If `value` is already present, `seq` is returned as is. A missing sequence is treated as
/// empty, so the result is never `None`.
#[must_use]
pub fn add(seq: Option<Vec<String>>, value: &str) -> Vec<String> {
    let mut items = seq.unwrap_or_default();
    if item_pos(&items, value).is_none() {
        items.push(value.to_string());
    }
    items
}

/// Removes the first occurrence of `value` from `seq`, preserving the order of the remaining
/// items.
///
/// A missing sequence stays missing: `remove(None, v)` is `None`, not an empty list.
#[must_use]
pub fn remove(seq: Option<Vec<String>>, value: &str) -> Option<Vec<String>> {
    let mut items = seq?;
    if let Some(pos) = item_pos(&items, value) {
        items.remove(pos);
    }
    Some(items)
}

/// Returns `true` if `seq` contains `value`. Missing and empty sequences contain nothing.
#[must_use]
pub fn has(seq: Option<&[String]>, value: &str) -> bool {
    seq.is_some_and(|items| item_pos(items, value).is_some())
}

/// Returns the items of `seq` for which `keep` returns `true`, in their original order.
///
/// A missing sequence stays missing and `keep` isn't called.
#[must_use]
pub fn filter(
    seq: Option<Vec<String>>,
    mut keep: impl FnMut(&str) -> bool,
) -> Option<Vec<String>> {
    let mut items = seq?;
    items.retain(|v| keep(v.as_str()));
    Some(items)
}

/// Like `filter()`, but for predicates which can fail.
///
/// The first error returned by `keep` is returned unchanged and no further items are visited.
pub fn try_filter<E>(
    seq: Option<Vec<String>>,
    mut keep: impl FnMut(&str) -> Result<bool, E>,
) -> Result<Option<Vec<String>>, E> {
    let Some(items) = seq else {
        return Ok(None);
    };
    let mut res = Vec::with_capacity(items.len());
    for it in items {
        if keep(it.as_str())? {
            res.push(it);
        }
    }
    Ok(Some(res))
}


pub use unique::*;
