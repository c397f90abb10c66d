use super::*;

// =============================================================
// CarouselState
// =============================================================

#[test]
fn starts_on_first_slide() {
    let state = CarouselState::new(8);
    assert_eq!(state.index(), 0);
    assert!(state.is_first());
    assert!(!state.is_last());
}

#[test]
fn next_clamps_at_last_slide() {
    let mut state = CarouselState::new(3);
    for _ in 0..5 {
        state.next();
    }
    assert_eq!(state.index(), 2);
    assert!(state.is_last());
}

#[test]
fn prev_clamps_at_first_slide() {
    let mut state = CarouselState::new(3);
    state.next();
    state.prev();
    state.prev();
    assert_eq!(state.index(), 0);
}

#[test]
fn progress_counts_current_slide() {
    let mut state = CarouselState::new(4);
    assert!((state.progress() - 0.25).abs() < f64::EPSILON);
    for _ in 0..3 {
        state.next();
    }
    assert!((state.progress() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn empty_carousel_is_inert() {
    let mut state = CarouselState::new(0);
    assert!(state.is_last());
    state.next();
    state.prev();
    assert_eq!(state.index(), 0);
    assert!(state.progress().abs() < f64::EPSILON);
}

#[test]
fn length_follows_slide_list() {
    let slides = vec![
        view! { <div>"one"</div> }.into_any(),
        view! { <div>"two"</div> }.into_any(),
    ];
    let mut state = CarouselState::for_slides(&slides);
    assert!(!state.is_last());
    state.next();
    assert!(state.is_last());
    assert!((state.progress() - 1.0).abs() < f64::EPSILON);
}

// =============================================================
// swipe_direction
// =============================================================

#[test]
fn leftward_drag_advances() {
    assert_eq!(swipe_direction(300, 200), Some(SwipeDirection::Next));
}

#[test]
fn rightward_drag_goes_back() {
    assert_eq!(swipe_direction(100, 100 + SWIPE_THRESHOLD_PX), Some(SwipeDirection::Prev));
}

#[test]
fn short_drag_is_ignored() {
    assert_eq!(swipe_direction(100, 100 - SWIPE_THRESHOLD_PX + 1), None);
    assert_eq!(swipe_direction(100, 100), None);
}
