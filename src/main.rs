//! Evasive Confirm entry point
//!
//! Web: wires DOM events to the widget and runs the animation loop.
//! Native: replays a scripted pointer session headlessly.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{MouseEvent, PointerEvent};

    use evasive_confirm::Settings;
    use evasive_confirm::platform::Dom;
    use evasive_confirm::sim::Widget;

    /// Widget instance plus the elements it draws into
    struct App {
        widget: Widget,
        dom: Dom,
    }

    impl App {
        /// Push queued widget effects to the page
        fn flush(&mut self) {
            for event in self.widget.drain_events() {
                self.dom.apply(&event);
            }
        }

        fn frame(&mut self, time: f64) {
            let pos = self.widget.frame(time);
            self.dom.render_position(pos);
            self.flush();
        }
    }

    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!(
            "Evasive Confirm starting ({} variant, seed {})",
            settings.variant.as_str(),
            seed
        );

        let dom = Dom::lookup(document)?;
        let viewport = dom.measure(&window);
        let mut widget = Widget::seeded(settings, viewport, seed);
        widget.start();
        let app = Rc::new(RefCell::new(App { widget, dom }));

        setup_pointer_handlers(app.clone())?;
        setup_buttons(app.clone());
        setup_resize(app.clone())?;

        request_animation_frame(app);
        Ok(())
    }

    fn setup_pointer_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let document = app.borrow().dom.document.clone();

        // Mouse move - dodge when close
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                a.widget.pointer_move(pointer, now());
                a.flush();
            });
            document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pointer down - teleport to the farthest corner
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut a = app.borrow_mut();
                let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                a.widget.pointer_down(pointer, now());
                a.flush();
            });
            document.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let (no_btn, retry_btn) = {
            let a = app.borrow();
            (a.dom.no_btn.clone(), a.dom.retry_btn.clone())
        };

        // No - the only reachable choice
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.widget.confirm(now());
                a.flush();
            });
            let _ = no_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Retry (resettable variants only)
        if let Some(btn) = retry_btn {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.widget.reset();
                a.flush();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut a = app.borrow_mut();
            let viewport = a.dom.measure(&window);
            a.widget.resize(viewport);
            let pos = a.widget.state.position.pos;
            a.dom.render_position(pos);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            animation_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animation_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Evasive Confirm (native) starting...");
    log::info!("Native mode runs a headless session - use `trunk serve` for the web version");

    headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Chase the Yes button for a few seconds, give up, press No, then retry
#[cfg(not(target_arch = "wasm32"))]
fn headless_session() {
    use evasive_confirm::Settings;
    use evasive_confirm::sim::{Viewport, Widget, WidgetEvent};
    use glam::Vec2;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or(0x5eed);
    let mut widget = Widget::seeded(settings, Viewport::default(), seed);
    widget.start();

    let mut time = 0.0;
    let report = |widget: &mut Widget| {
        for event in widget.drain_events() {
            match event {
                WidgetEvent::ConfettiReleased(burst) => {
                    println!("  confetti: {} pieces", burst.pieces.len())
                }
                other => println!("  {:?}", other),
            }
        }
    };

    // The pointer keeps aiming just left of the button's center
    for frame in 0..240 {
        time += FRAME_MS;
        widget.frame(time);
        let chase = widget.state.control_center() - Vec2::new(40.0, 0.0);
        if frame % 30 == 29 {
            widget.pointer_down(chase, time);
        } else {
            widget.pointer_move(chase, time);
        }
        report(&mut widget);
    }

    println!("Dodges counted: {}", widget.state.counter.count);
    widget.confirm(time);
    report(&mut widget);

    for _ in 0..60 {
        time += FRAME_MS;
        widget.frame(time);
        report(&mut widget);
    }

    widget.reset();
    report(&mut widget);

    match serde_json::to_string_pretty(&widget.state) {
        Ok(json) => println!("Final state:\n{}", json),
        Err(e) => log::error!("Failed to serialize state: {}", e),
    }
}
