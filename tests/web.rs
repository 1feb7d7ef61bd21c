#![cfg(target_arch = "wasm32")]

use mascot_physics::Mascot;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn version_is_exposed() {
    assert_eq!(mascot_physics::version(), env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen_test]
fn with_config_rejects_unknown_keys() {
    assert!(Mascot::with_config(0.0, 0.0, r#"{"mass": 2}"#.to_string()).is_err());
}

#[wasm_bindgen_test]
fn with_config_applies_patch() {
    let mascot = Mascot::with_config(0.0, 0.0, r#"{"gravity": 1.5}"#.to_string())
        .expect("valid config");
    assert!(mascot.config_json().contains("\"gravity\":1.5"));
}

#[wasm_bindgen_test]
fn update_config_surfaces_errors_to_js() {
    let mut mascot = Mascot::new(0.0, 0.0);
    assert!(mascot.update_config("{".to_string()).is_err());
    assert!(mascot.update_config(r#"{"friction": 0.9}"#.to_string()).is_ok());
}

#[wasm_bindgen_test]
fn drop_settles_under_wasm() {
    mascot_physics::init();
    let mut mascot = Mascot::new(100.0, 0.0);
    for _ in 0..600 {
        mascot.step(800.0, 600.0, 64.0, 64.0);
    }
    assert_eq!(mascot.y(), 536.0);
    assert!(mascot.is_at_rest(Some(1.0)));
}
