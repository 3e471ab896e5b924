//! Orb Ring entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, PointerEvent};

    use orb_ring::SceneConfig;
    use orb_ring::net::emit_cursor;
    use orb_ring::platform::{CanvasRenderer, WebSocketTransport, now_ms};
    use orb_ring::renderer::Renderer;
    use orb_ring::sim::Scene;

    /// App instance holding all state
    struct App {
        scene: Scene,
        renderer: CanvasRenderer,
        transport: Option<WebSocketTransport>,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Match the canvas to the window and re-derive the ring radius
        fn fit_to_window(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            self.canvas.set_width(w as u32);
            self.canvas.set_height(h as u32);
            self.scene.resize(w as f32, h as f32);
        }

        fn render(&mut self, time: f64) {
            let frame = self.scene.frame(time);
            self.renderer.draw(&frame);
        }

        /// Local drag: echo the mark and broadcast it
        fn drag(&mut self, x: f32, y: f32) {
            let msg = self.scene.local_cursor(x, y);
            if let Some(transport) = self.transport.as_mut() {
                emit_cursor(transport, msg);
            }
        }
    }

    /// Relay endpoint on the page's own host
    fn relay_url() -> Option<String> {
        let location = web_sys::window()?.location();
        let host = location.host().ok()?;
        let scheme = match location.protocol().ok()?.as_str() {
            "https:" => "wss",
            _ => "ws",
        };
        Some(format!("{scheme}://{host}/ws"))
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Orb Ring starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let scene = Scene::new(SceneConfig::default(), 0.0, 0.0);
        let transport = match relay_url() {
            Some(url) => match WebSocketTransport::connect(&url, scene.sender()) {
                Ok(t) => Some(t),
                Err(e) => {
                    log::error!("Could not open relay socket {}: {:?}", url, e);
                    None
                }
            },
            None => None,
        };

        let app = Rc::new(RefCell::new(App {
            scene,
            renderer: CanvasRenderer::new(&canvas)?,
            transport,
            canvas: canvas.clone(),
        }));
        app.borrow_mut().fit_to_window();

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(app.clone());

        request_animation_frame(app);

        log::info!("Orb Ring running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Drag (any button held) broadcasts the cursor
        for kind in ["pointerdown", "pointermove"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if event.buttons() == 0 {
                    return;
                }
                app.borrow_mut()
                    .drag(event.offset_x() as f32, event.offset_y() as f32);
            });
            let _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().fit_to_window();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        // rAF time and performance.now() share an origin; read the clock so
        // scene time stays on one source
        app.borrow_mut().render(now_ms());
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
    log::info!("Orb Ring (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the canvas view");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted relay session driven at 60 fps without a window
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use orb_ring::SceneConfig;
    use orb_ring::net::WireMessage;
    use orb_ring::renderer::{Frame, Renderer};
    use orb_ring::sim::Scene;

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const SESSION_MS: f64 = 8000.0;

    /// Relay frames as they would arrive, keyed by arrival time
    const SCRIPT: &[(f64, &str)] = &[
        (0.0, r#"{"event":"updateUserCount","data":{"count":1}}"#),
        (1200.0, r#"{"event":"updateUserCount","data":{"count":3}}"#),
        (1400.0, r#"{"event":"updateUserCount","data":{"count":3}}"#),
        (2500.0, r#"{"event":"mouse","data":{"x":320.0,"y":200.0}}"#),
        (3100.0, r#"{"event":"updateUserCount","data":{"count":5}}"#),
        (3300.0, r#"{"event":"updateUserCount","data":{"count":6}}"#),
        (4000.0, r#"{"event":"updateUserCount","da"#),
        (5200.0, r#"{"event":"updateUserCount","data":{"count":2}}"#),
    ];

    /// Logs a line per second of frames
    #[derive(Default)]
    struct LogRenderer {
        frames: u64,
        last: Frame,
    }

    impl Renderer for LogRenderer {
        fn draw(&mut self, frame: &Frame) {
            self.frames += 1;
            if self.frames % 60 == 0 {
                let glowing = frame.orbs.iter().filter(|o| o.glow > 0.0).count();
                log::info!(
                    "frame {}: {} orbs ({} glowing), {} trail segments, {} cursors",
                    self.frames,
                    frame.orbs.len(),
                    glowing,
                    frame.trail.len(),
                    frame.cursors.len()
                );
            }
            self.last = frame.clone();
        }
    }

    pub fn run() {
        let mut scene = Scene::new(SceneConfig::default(), 1280.0, 720.0);
        let events = scene.sender();
        let mut renderer = LogRenderer::default();
        let mut script = SCRIPT.iter().peekable();

        let mut now = 0.0;
        while now <= SESSION_MS {
            while let Some((_, text)) = script.next_if(|(at, _)| *at <= now) {
                match WireMessage::decode(text) {
                    Ok(msg) => {
                        events.send(msg.into_event());
                    }
                    Err(e) => log::warn!("Dropping relay frame: {}", e),
                }
            }

            let frame = scene.frame(now);
            renderer.draw(&frame);
            now += FRAME_MS;
        }

        log::info!(
            "Session done: {} frames, {} participants",
            renderer.frames,
            scene.count()
        );
        match serde_json::to_string(&scene.orbs().iter().collect::<Vec<_>>()) {
            Ok(json) => log::info!("Final orbs: {}", json),
            Err(e) => log::warn!("Could not dump orbs: {}", e),
        }
        match serde_json::to_string(&renderer.last.orbs) {
            Ok(json) => log::debug!("Final draw list: {}", json),
            Err(e) => log::warn!("Could not dump draw list: {}", e),
        }
    }
}
