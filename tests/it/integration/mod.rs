//! Integration tests
//!
//! End-to-end workflows through `GraphEditor`: pointer gestures from press
//! to release, and measurement batching across frames.

mod menu_and_click_tests;
