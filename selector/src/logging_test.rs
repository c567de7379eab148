#![cfg(not(feature = "browser"))]

use super::*;

#[test]
fn level_matches_build_profile() {
    let expected = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    assert_eq!(level(), expected);
}

#[test]
fn init_is_noop_but_callable() {
    init();
    init();
}
