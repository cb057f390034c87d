//! Flappy Fury entry point
//!
//! Platform glue: the animation-frame scheduler, input handlers, DOM screens,
//! and the collaborators (audio, score display, best-score storage) the
//! simulation core emits events to.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use flappy_fury::audio::{AudioManager, Cue};
    use flappy_fury::consts::*;
    use flappy_fury::highscores::{BestScore, Medal};
    use flappy_fury::render::Renderer;
    use flappy_fury::settings::Settings;
    use flappy_fury::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        renderer: Renderer,
        audio: AudioManager,
        settings: Settings,
        best: BestScore,
        /// Whether the current run set a new best (game-over badge)
        new_best_this_run: bool,
    }

    impl Game {
        /// Update phase: one tick, then route core events to collaborators
        fn update(&mut self) {
            let input = self.input;
            tick(&mut self.state, &input);
            // One-shot flags are consumed by exactly one tick
            self.input = TickInput::default();
            self.drain_events();
        }

        /// Route the tick's cues to audio, score display, and persistence
        fn drain_events(&mut self) {
            let events: Vec<GameEvent> = self.state.events.drain(..).collect();
            for event in events {
                match event {
                    GameEvent::Flap => self.audio.play(Cue::Flap),
                    GameEvent::Scored(score) => {
                        set_text("score-display", &score.to_string());
                        self.audio.play(Cue::Score);
                    }
                    GameEvent::Hit => self.audio.play(Cue::Hit),
                    GameEvent::Died => {
                        self.audio.play(Cue::Die);
                        self.show_game_over();
                    }
                    GameEvent::Swoosh => self.audio.play(Cue::Swoosh),
                    GameEvent::NewBest(score) => {
                        // Write-through: persisted the moment it is exceeded
                        self.best.update(score);
                        self.best.save();
                        self.new_best_this_run = true;
                    }
                }
            }
        }

        /// Render phase: pure read of the snapshot
        fn render(&mut self) {
            let state = &self.state;
            self.renderer.draw(state);
        }

        /// Keep the DOM score display in sync with the phase
        fn update_hud(&self) {
            let visible = self.state.phase == GamePhase::Playing;
            set_class("score-display", if visible { "visible" } else { "" });
        }

        /// Populate and reveal the game-over screen
        fn show_game_over(&self) {
            set_text("final-score", &self.state.score.to_string());
            set_text("best-score", &self.state.best_score.to_string());

            let medal_class = match Medal::for_score(self.state.score) {
                Some(medal) => format!("medal {}", medal.as_str()),
                None => "medal".to_string(),
            };
            set_class("medal", &medal_class);
            set_class(
                "new-best",
                if self.new_best_this_run { "" } else { "hidden" },
            );

            show_screen(Some("game-over-screen"));
        }

        /// Arm a new run from the title or game-over screen
        fn start_run(&mut self) {
            let seed = js_sys::Date::now() as u64;
            self.new_best_this_run = false;
            self.state.start_new_game(seed);
            // Audio contexts stay suspended until a user gesture; the start
            // button is one
            self.audio.resume();
            set_text("score-display", "0");
            show_screen(None);
            self.drain_events();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Fury starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(GAME_WIDTH as u32);
        canvas.set_height(GAME_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .expect("not a 2d context");

        let settings = Settings::load();
        let best = BestScore::load();

        let mut audio = AudioManager::new();
        audio.set_muted(!settings.sound_enabled);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, best.score),
            input: TickInput::default(),
            renderer: Renderer::new(ctx),
            audio,
            settings,
            best,
            new_best_this_run: false,
        }));

        log::info!("Session initialized with seed {seed}");

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());

        show_screen(Some("title-screen"));

        request_animation_frame(game);

        log::info!("Flappy Fury running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard: Space or ArrowUp flaps
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.code().as_str() {
                    "Space" | "ArrowUp" => {
                        event.prevent_default();
                        game.borrow_mut().input.flap = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.flap = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.flap = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Start/replay buttons share the same action
        for id in ["start-btn", "play-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().start_run();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Sound toggle
        if let Some(btn) = document.get_element_by_id("sound-toggle") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                let enabled = g.settings.toggle_sound();
                g.settings.save();
                g.audio.set_muted(!enabled);
                set_text("sound-toggle", if enabled { "\u{1F50A}" } else { "\u{1F507}" });
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One scheduled frame: update, then render, never interleaved
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    // === DOM helpers ===

    fn set_text(id: &str, text: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(id: &str, class: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    /// Show one overlay screen (or none, during play)
    fn show_screen(screen_id: Option<&str>) {
        for id in ["title-screen", "game-over-screen"] {
            let class = if Some(id) == screen_id {
                "screen active"
            } else {
                "screen"
            };
            set_class(id, class);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_fury::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Flappy Fury (native) starting...");

    // Headless smoke run: arm a game, never flap, free-fall to the ground
    let mut state = GameState::new(42, 0);
    state.start_new_game(42);
    tick(&mut state, &TickInput { flap: true });
    while state.phase == GamePhase::Playing {
        tick(&mut state, &TickInput::default());
    }

    println!(
        "Headless run ended at tick {} with score {} - serve the web build for the playable game",
        state.time_ticks, state.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main; this satisfies the bin target
}
