//! Boing Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent};

    use boing_dodge::GameConfig;
    use boing_dodge::consts::MAX_FRAME_DT;
    use boing_dodge::input::{direction_for_key, direction_for_pad, is_arrow_key};
    use boing_dodge::sim::{self, Direction, GamePhase, GameState, InputState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        last_time: f64,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Boing Dodge starting...");

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, &config),
            input: InputState::default(),
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        // Layout has settled by now; measure real element bounds and place
        // everything before the first frame
        {
            let mut g = game.borrow_mut();
            sync_entity_sizes(&mut g.state);
            let arena = measure_arena();
            sim::reset(&mut g.state, arena);
            apply_positions(&g.state);
            update_hud(&g.state);
        }

        setup_input_handlers(game.clone());
        setup_reset_buttons(game.clone());
        setup_resize_handler(game.clone());

        request_animation_frame(game);

        log::info!("Boing Dodge running!");
    }

    fn document() -> Document {
        web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
    }

    fn element(id: &str) -> Option<HtmlElement> {
        document().get_element_by_id(id)?.dyn_into().ok()
    }

    /// Arena extents from the rendered play area
    fn measure_arena() -> Vec2 {
        let area = element("gameArea").expect("no #gameArea element");
        let rect = area.get_bounding_client_rect();
        Vec2::new(rect.width() as f32, rect.height() as f32)
    }

    fn measured_size(id: &str) -> Option<Vec2> {
        let rect = element(id)?.get_bounding_client_rect();
        Some(Vec2::new(rect.width() as f32, rect.height() as f32))
    }

    /// Re-read entity footprints from the DOM (handles late CSS sizing)
    fn sync_entity_sizes(state: &mut GameState) {
        match (measured_size("player"), measured_size("enemy")) {
            (Some(player), Some(enemy)) => sim::sync_sizes(state, player, enemy),
            _ => log::warn!("Missing #player/#enemy elements, keeping configured sizes"),
        }
    }

    /// Push entity positions into element styles
    fn apply_positions(state: &GameState) {
        if let Some(el) = element("player") {
            let style = el.style();
            let _ = style.set_property("left", &format!("{}px", state.player.pos.x));
            let _ = style.set_property("top", &format!("{}px", state.player.pos.y));
        }
        if let Some(el) = element("enemy") {
            let style = el.style();
            let _ = style.set_property("left", &format!("{}px", state.enemy.pos.x));
            let _ = style.set_property("top", &format!("{}px", state.enemy.pos.y));
        }
    }

    /// Update timer, status text, and the game-over overlay
    fn update_hud(state: &GameState) {
        let document = document();

        if let Some(el) = document.get_element_by_id("timeLabel") {
            el.set_text_content(Some(&state.elapsed_label()));
        }

        if let Some(el) = document.get_element_by_id("statusLabel") {
            el.set_text_content(Some(state.status_label()));
            let classes = el.class_list();
            match state.phase {
                GamePhase::Playing => {
                    let _ = classes.remove_1("hud__value--ng");
                    let _ = classes.add_1("hud__value--ok");
                }
                GamePhase::GameOver => {
                    let _ = classes.remove_1("hud__value--ok");
                    let _ = classes.add_1("hud__value--ng");
                }
            }
        }

        if let Some(overlay) = document.get_element_by_id("gameOverlay") {
            let classes = overlay.class_list();
            match state.phase {
                GamePhase::Playing => {
                    let _ = classes.remove_1("is-show");
                    let _ = overlay.set_attribute("aria-hidden", "true");
                }
                GamePhase::GameOver => {
                    let _ = classes.add_1("is-show");
                    let _ = overlay.set_attribute("aria-hidden", "false");
                }
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Frame-time ceiling keeps integration stable on slow frames;
            // the sim itself never clamps
            let dt = if g.last_time > 0.0 {
                (((time - g.last_time) / 1000.0) as f32).min(MAX_FRAME_DT)
            } else {
                0.0
            };
            g.last_time = time;

            let arena = measure_arena();
            let input = g.input;
            sim::update(&mut g.state, &input, arena, dt);

            apply_positions(&g.state);
            update_hud(&g.state);
        }

        request_animation_frame(game);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if let Some(dir) = direction_for_key(&key) {
                    game.borrow_mut().input.set_held(dir, true);
                    // Prevent page scroll on arrow keys
                    if is_arrow_key(&key) {
                        event.prevent_default();
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard release
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if let Some(dir) = direction_for_key(&key) {
                    game.borrow_mut().input.set_held(dir, false);
                    if is_arrow_key(&key) {
                        event.prevent_default();
                    }
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // On-screen pads (touch and mouse share press/release semantics)
        let pads = document()
            .query_selector_all(".pad")
            .expect("pad query failed");
        for i in 0..pads.length() {
            let Some(node) = pads.item(i) else { continue };
            let Ok(pad) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            let Some(dir) = pad
                .get_attribute("data-dir")
                .and_then(|d| direction_for_pad(&d))
            else {
                log::warn!("Pad element without a usable data-dir attribute");
                continue;
            };

            on_pad_event(&pad, "touchstart", game.clone(), dir, true, true);
            on_pad_event(&pad, "touchend", game.clone(), dir, false, true);
            on_pad_event(&pad, "touchcancel", game.clone(), dir, false, false);
            on_pad_event(&pad, "mousedown", game.clone(), dir, true, false);
            on_pad_event(&pad, "mouseup", game.clone(), dir, false, false);
            // A press dragged off the pad must not stick
            on_pad_event(&pad, "mouseleave", game.clone(), dir, false, false);
        }
    }

    fn on_pad_event(
        pad: &HtmlElement,
        event_name: &str,
        game: Rc<RefCell<Game>>,
        dir: Direction,
        held: bool,
        swallow: bool,
    ) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            if swallow {
                event.prevent_default();
            }
            game.borrow_mut().input.set_held(dir, held);
        });
        let _ = pad.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_reset_buttons(game: Rc<RefCell<Game>>) {
        for id in ["resetBtn", "overlayResetBtn"] {
            let Some(btn) = element(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                sync_entity_sizes(&mut g.state);
                let arena = measure_arena();
                sim::reset(&mut g.state, arena);
                apply_positions(&g.state);
                update_hud(&g.state);
                log::info!("Game reset");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            sync_entity_sizes(&mut g.state);
            let arena = measure_arena();
            sim::resize(&mut g.state, arena);
            apply_positions(&g.state);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use boing_dodge::GameConfig;
    use boing_dodge::sim::{self, GamePhase, GameState, InputState};
    use glam::Vec2;

    env_logger::init();
    log::info!("Boing Dodge (native) starting...");
    log::info!("Headless mode - run with `trunk serve` for the web version");

    let config = GameConfig::load();
    let arena = Vec2::new(400.0, 300.0);
    let mut state = GameState::new(0xB01D, &config);
    sim::reset(&mut state, arena);

    // Scripted session: sidestep away from the enemy along the bottom edge
    // until it connects
    let dt = 1.0 / 60.0;
    let mut input = InputState::default();
    for frame in 0..100_000u32 {
        let enemy_cx = state.enemy.pos.x + state.enemy.size.x * 0.5;
        let player_cx = state.player.pos.x + state.player.size.x * 0.5;
        input.left = enemy_cx > player_cx;
        input.right = !input.left;

        sim::update(&mut state, &input, arena, dt);
        if state.phase == GamePhase::GameOver {
            println!("Survived {} ({} frames)", state.elapsed_label(), frame + 1);
            return;
        }
    }
    println!("Still alive after {}", state.elapsed_label());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
