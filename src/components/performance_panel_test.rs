use super::bar_width;

#[test]
fn scores_map_straight_to_percent() {
    assert_eq!(bar_width(0), 0);
    assert_eq!(bar_width(85), 85);
    assert_eq!(bar_width(100), 100);
}

#[test]
fn overshoot_clamps_to_full_track() {
    assert_eq!(bar_width(120), 100);
}
