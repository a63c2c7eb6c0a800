#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use othello::Game;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).expect("field must exist")
}

#[wasm_bindgen_test]
fn wasm_ready_reports_true() {
    assert!(othello::wasm_ready());
}

#[wasm_bindgen_test]
fn fresh_game_state_crosses_the_boundary() {
    let game = Game::new();

    let state = game.state().expect("state must serialize");

    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(field(&state, "white_count").as_f64(), Some(2.0));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
    assert!(field(&state, "last_move").is_undefined());
    assert_eq!(field(&state, "message").as_string(), Some(String::new()));
}

#[wasm_bindgen_test]
fn opening_move_updates_the_serialized_state() {
    let mut game = Game::new();
    assert_eq!(game.preview_flips(19), vec![27]);

    game.attempt_move(19);
    let state = game.state().expect("state must serialize");

    assert_eq!(field(&state, "current_player").as_f64(), Some(2.0));
    assert_eq!(field(&state, "last_move").as_f64(), Some(19.0));
    assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));
    assert_eq!(field(&state, "white_count").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn rejected_move_surfaces_a_message_only() {
    let mut game = Game::new();
    game.attempt_move(0);

    let state = game.state().expect("state must serialize");

    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    let message = field(&state, "message").as_string().unwrap_or_default();
    assert!(message.contains("illegal move"));
}

#[wasm_bindgen_test]
fn score_and_result_serialize() {
    let game = Game::new();

    let score = game.score().expect("score must serialize");
    assert_eq!(field(&score, "black").as_f64(), Some(2.0));
    assert_eq!(field(&score, "white").as_f64(), Some(2.0));
    assert_eq!(field(&score, "empty").as_f64(), Some(60.0));

    let result = game.result().expect("result must serialize");
    assert!(result.is_undefined());
}

#[wasm_bindgen_test]
fn restart_resets_legal_moves() {
    let mut game = Game::new();
    game.attempt_move(19);
    game.restart();

    assert_eq!(game.legal_moves(), vec![19, 26, 37, 44]);
}
