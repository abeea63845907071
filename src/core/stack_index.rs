/// Next frame index for a stack of `count` frames after moving `delta` frames.
///
/// The result is `clamp(current_index + delta, 0, count - 1)`: scrolling past
/// either end holds at the boundary instead of wrapping. Returns `None` only
/// for an empty stack.
#[must_use]
pub fn next_index(current_index: usize, count: usize, delta: i64) -> Option<usize> {
    let last = count.checked_sub(1)?;
    // i128 holds any usize + i64 sum, so huge deltas saturate instead of overflowing.
    let target = (current_index as i128 + i128::from(delta)).clamp(0, last as i128);
    Some(target as usize)
}
