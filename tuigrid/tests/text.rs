use tuigrid::text::{display_width, pad_to_width, truncate_to_width};
use tuigrid::TextAlign;

#[test]
fn test_display_width_wide_chars() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate_to_width("abc", 10), "abc");
    assert_eq!(truncate_to_width("abc", 3), "abc");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    assert_eq!(truncate_to_width("abcdef", 1), "…");
    assert_eq!(truncate_to_width("abcdef", 0), "");
}

#[test]
fn test_truncate_respects_wide_chars() {
    // "日" is two cells; only one fits beside the ellipsis at width 3.
    assert_eq!(truncate_to_width("日本語", 3), "日…");
}

#[test]
fn test_pad_alignment() {
    assert_eq!(pad_to_width("ab", 5, TextAlign::Left), "ab   ");
    assert_eq!(pad_to_width("ab", 5, TextAlign::Right), "   ab");
    assert_eq!(pad_to_width("ab", 5, TextAlign::Center), " ab  ");
    assert_eq!(pad_to_width("abcdef", 4, TextAlign::Left), "abc…");
}
