//! Browser-coupled tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use oa_console::models::SessionProfile;
use oa_console::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_profile_round_trips_through_local_storage() {
    let profile = SessionProfile {
        username: "operator".to_string(),
        token: "tok-123".to_string(),
    };

    save_to_storage("test_session", &profile).expect("save should succeed");
    let loaded: SessionProfile = load_from_storage("test_session").expect("value should exist");
    assert_eq!(loaded, profile);

    remove_from_storage("test_session").expect("remove should succeed");
    assert!(load_from_storage::<SessionProfile>("test_session").is_none());
}
