//! Hex Birthday entry point
//!
//! On the web: wires the particle canvas, page triggers and the animation
//! loop. Natively: runs a short headless simulation and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use hex_birthday::platform::{BrowserTimers, timeout_ms};
    use hex_birthday::renderer::CanvasSurface;
    use hex_birthday::{Engine, EngineConfig, SpawnKind};

    /// Page instance holding the engine and its canvas
    struct Page {
        engine: Engine,
        surface: CanvasSurface,
    }

    type Timers = Rc<RefCell<BrowserTimers>>;

    /// Viewport size in CSS pixels
    fn viewport() -> (u32, u32) {
        let window = web_sys::window().expect("no window");
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w as u32, h as u32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hex Birthday starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("particleCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = EngineConfig::load(&canvas);
        let (width, height) = viewport();
        canvas.set_width(width);
        canvas.set_height(height);

        let Some(surface) = CanvasSurface::new(canvas) else {
            log::error!("Canvas 2D context unavailable - particles disabled");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let page = Rc::new(RefCell::new(Page {
            engine: Engine::new(config, seed),
            surface,
        }));

        // Interval firings land between frames on the same event loop
        let timers: Timers = {
            let page = page.clone();
            Rc::new(RefCell::new(BrowserTimers::new(move |kind| {
                page.borrow_mut().engine.on_interval(kind);
            })))
        };

        setup_resize(page.clone());
        setup_cake(page.clone(), timers.clone());
        setup_dismiss(page.clone(), timers.clone());
        setup_visibility(page.clone(), timers);
        schedule_welcome(page.clone());

        // Start animation loop
        request_animation_frame(page);

        log::info!("Hex Birthday running!");
    }

    fn setup_resize(page: Rc<RefCell<Page>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (w, h) = viewport();
            page.borrow_mut().surface.resize(w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Clicking the cake starts both continuous effects
    fn setup_cake(page: Rc<RefCell<Page>>, timers: Timers) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(cake) = document.get_element_by_id("hexCake") else {
            log::warn!("No #hexCake element - continuous effects unavailable");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut p = page.borrow_mut();
            let mut t = timers.borrow_mut();
            for kind in SpawnKind::ALL {
                p.engine.start_effect(kind, &mut *t);
            }
        });
        let _ = cake.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Double-click anywhere but the cake clears everything
    fn setup_dismiss(page: Rc<RefCell<Page>>, timers: Timers) {
        let document = web_sys::window().unwrap().document().unwrap();
        let cake: Option<web_sys::EventTarget> =
            document.get_element_by_id("hexCake").map(Into::into);

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            if cake.is_some() && event.target() == cake {
                return;
            }
            page.borrow_mut().engine.reset(&mut *timers.borrow_mut());
        });
        let _ = document
            .add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Hidden tab: stop everything. Visible again: start from a clean canvas.
    fn setup_visibility(page: Rc<RefCell<Page>>, timers: Timers) {
        let document = web_sys::window().unwrap().document().unwrap();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut p = page.borrow_mut();
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                p.engine.reset(&mut *timers.borrow_mut());
                log::info!("Effects stopped (tab hidden)");
            } else {
                p.engine.clear_particles();
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn schedule_welcome(page: Rc<RefCell<Page>>) {
        let window = web_sys::window().unwrap();
        let delay = page.borrow().engine.config().welcome.delay_ms;
        let Some(timeout) = timeout_ms(delay) else {
            log::warn!("Welcome delay {} ms out of range - burst skipped", delay);
            return;
        };
        // Frees itself after the single call
        let callback = Closure::once_into_js(move || {
            page.borrow_mut().engine.welcome();
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout,
        ) {
            log::warn!("Welcome burst not scheduled: {:?}", e);
        }
    }

    fn request_animation_frame(page: Rc<RefCell<Page>>) {
        let window = web_sys::window().unwrap();
        // One closure per frame, freed once it runs
        let callback = Closure::once_into_js(move |_time: f64| {
            animation_loop(page);
        });
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }

    fn animation_loop(page: Rc<RefCell<Page>>) {
        {
            let mut p = page.borrow_mut();
            let Page { engine, surface } = &mut *p;
            engine.frame(surface);
        }

        request_animation_frame(page);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hex Birthday (native) starting...");
    log::info!("Native mode renders headless - run with `trunk serve` for the web version");

    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulate ten seconds at 60 fps with the cake clicked after one second
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use hex_birthday::platform::ManualTimers;
    use hex_birthday::renderer::RecordingSurface;
    use hex_birthday::{Engine, EngineConfig, SpawnKind};

    let mut engine = Engine::new(EngineConfig::default(), 777);
    let mut timers = ManualTimers::new();
    let mut surface = RecordingSurface::new(1280.0, 720.0);

    engine.welcome();
    let mut peak = 0;
    for frame in 1..=600u32 {
        if frame == 60 {
            for kind in SpawnKind::ALL {
                engine.start_effect(kind, &mut timers);
            }
        }
        // 16.67 ms frames: 16, 17, 17, ...
        let step = if frame % 3 == 1 { 16 } else { 17 };
        for kind in timers.advance(step) {
            engine.on_interval(kind);
        }
        engine.frame(&mut surface);

        let population = engine.population();
        peak = peak.max(population.len());
        if frame % 60 == 0 {
            log::info!(
                "t={:>2}s particles={:>3} (confetti {:>3}, balloons {:>3}) queued={:>3} draws={}",
                frame / 60,
                population.len(),
                population.count(SpawnKind::Confetti),
                population.count(SpawnKind::Balloon),
                engine.throttle().len(),
                surface.fill_count()
            );
        }
    }

    engine.reset(&mut timers);
    println!(
        "Simulated {} frames, peak population {} / {}",
        engine.frames(),
        peak,
        engine.population().capacity()
    );
}
