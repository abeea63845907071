use slice_nav::api::{ScrollController, ScrollOutcome, SkipReason};
use slice_nav::viewport::{StackNavigation, StackViewportState};

fn stack_at(count: usize, index: usize) -> StackViewportState {
    StackViewportState::with_frame_count(count)
        .with_current_index(index)
        .expect("index in range")
}

#[test]
fn scroll_forward_moves_index_and_requests_render() {
    let controller = ScrollController::default();
    let mut stack = stack_at(10, 2);

    let outcome = controller
        .scroll(&mut stack, 3, None, false)
        .expect("stack scroll");

    assert_eq!(outcome, ScrollOutcome::Index { from: 2, to: 5 });
    assert_eq!(stack.current_image_index(), 5);
    assert_eq!(stack.current_image_id(), Some("frame-5"));
    assert_eq!(stack.render_requests(), 1);
}

#[test]
fn scroll_past_last_frame_saturates_without_wrapping() {
    let controller = ScrollController::default();
    let mut stack = stack_at(10, 9);

    let outcome = controller
        .scroll(&mut stack, 1, None, false)
        .expect("stack scroll");

    assert_eq!(outcome, ScrollOutcome::Unchanged);
    assert_eq!(stack.current_image_index(), 9);
    assert_eq!(stack.render_requests(), 0);
}

#[test]
fn large_backward_scroll_clamps_to_first_frame() {
    let controller = ScrollController::default();
    let mut stack = stack_at(10, 4);

    let outcome = controller
        .scroll(&mut stack, -50, None, false)
        .expect("stack scroll");

    assert_eq!(outcome, ScrollOutcome::Index { from: 4, to: 0 });
    assert_eq!(stack.current_image_index(), 0);
}

#[test]
fn inverted_scroll_matches_negated_delta() {
    let controller = ScrollController::default();
    let mut inverted = stack_at(10, 5);
    let mut negated = stack_at(10, 5);

    let a = controller
        .scroll(&mut inverted, 3, None, true)
        .expect("inverted scroll");
    let b = controller
        .scroll(&mut negated, -3, None, false)
        .expect("negated scroll");

    assert_eq!(a, b);
    assert_eq!(inverted, negated);
    assert_eq!(inverted.current_image_index(), 2);
}

#[test]
fn zero_delta_is_a_no_op_without_render() {
    let controller = ScrollController::default();
    let mut stack = stack_at(10, 5);
    let before = stack.clone();

    let outcome = controller
        .scroll(&mut stack, 0, None, true)
        .expect("stack scroll");

    assert_eq!(outcome, ScrollOutcome::Unchanged);
    assert_eq!(stack, before);
    assert_eq!(stack.render_requests(), 0);
}

#[test]
fn empty_stack_is_skipped() {
    let controller = ScrollController::default();
    let mut stack = StackViewportState::new(Vec::new());

    let outcome = controller
        .scroll(&mut stack, 1, None, false)
        .expect("stack scroll");

    assert_eq!(outcome, ScrollOutcome::Skipped(SkipReason::EmptyStack));
    assert_eq!(stack.render_requests(), 0);
}

#[test]
fn volume_selector_is_ignored_for_stacks() {
    let controller = ScrollController::default();
    let mut stack = stack_at(4, 0);

    let outcome = controller
        .scroll(&mut stack, 1, Some("ct"), false)
        .expect("stack scroll");

    assert_eq!(outcome, ScrollOutcome::Index { from: 0, to: 1 });
}

#[test]
fn with_current_index_rejects_out_of_range_start() {
    assert!(StackViewportState::with_frame_count(3).with_current_index(3).is_err());
}
