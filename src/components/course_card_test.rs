use super::*;

// =============================================================
// Progress clamping
// =============================================================

#[test]
fn progress_passes_through_in_range_values() {
    assert_eq!(progress_percent(0), 0);
    assert_eq!(progress_percent(60), 60);
    assert_eq!(progress_percent(100), 100);
}

#[test]
fn progress_clamps_out_of_range_values_to_full() {
    assert_eq!(progress_percent(101), 100);
    assert_eq!(progress_percent(255), 100);
}
