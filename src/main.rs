//! Particle Arena entry point
//!
//! Handles platform-specific initialization and drives one world step per
//! display frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use particle_arena::SimConfig;
    use particle_arena::renderer::{FrameBuilder, RenderState};
    use particle_arena::sim::{Arena, World};

    /// App instance holding all state
    struct App {
        world: World,
        render_state: Option<RenderState>,
        frame: FrameBuilder,
    }

    impl App {
        /// Step the world once, collecting draw states into the frame
        fn update(&mut self) {
            self.frame.clear();
            self.world.step_into(&mut self.frame);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.frame.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// Window size in CSS pixels (arena units) and device pixels (surface)
    fn window_size(window: &web_sys::Window) -> (Arena, u32, u32) {
        let css_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let css_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let dpr = window.device_pixel_ratio();
        (
            Arena::new(css_w as f32, css_h as f32),
            (css_w * dpr) as u32,
            (css_h * dpr) as u32,
        )
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Particle Arena starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or("no canvas")?
            .dyn_into()?;

        let (arena, width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let config = SimConfig::load();
        let seed = config.seed.unwrap_or(js_sys::Date::now() as u64);
        let world =
            World::new(config, arena, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let app = Rc::new(RefCell::new(App {
            world,
            render_state: None,
            frame: FrameBuilder::new(),
        }));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, arena)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, &canvas, app.clone());

        request_animation_frame(app);

        log::info!("Particle Arena running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) {
        // Mouse move - reference point for the highlight
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                app.borrow_mut().world.set_reference_point(point);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Resize - new arena bounds, bodies stay where they are
        {
            let app = app.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let (arena, width, height) = window_size(&window);
                canvas.set_width(width);
                canvas.set_height(height);

                let mut app = app.borrow_mut();
                app.world.resize(arena.width, arena.height);
                if let Some(ref mut render_state) = app.render_state {
                    render_state.resize(width, height, arena);
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - reset hook
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().world.reset();
            });
            let _ = window
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
        {
            let mut a = app.borrow_mut();
            a.update();
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_app::run().await {
        log::error!("Particle Arena failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Steps the headless native driver runs
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_STEPS: u64 = 600;

/// Steps between diagnostic log lines
#[cfg(not(target_arch = "wasm32"))]
const LOG_EVERY: u64 = 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use particle_arena::SimConfig;
    use particle_arena::consts::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH};
    use particle_arena::sim::{Arena, World};

    env_logger::init();
    log::info!("Particle Arena (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to see the arena");

    let config = SimConfig::load();
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let arena = Arena::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT);

    let mut world = match World::new(config, arena, seed) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Could not create world: {}", e);
            std::process::exit(1);
        }
    };

    // Circle the reference point around the arena center
    let center = glam::Vec2::new(arena.width / 2.0, arena.height / 2.0);
    for step in 0..HEADLESS_STEPS {
        let angle = step as f32 * 0.02;
        world.set_reference_point(center + glam::Vec2::new(angle.cos(), angle.sin()) * 150.0);
        world.step();

        if world.time_ticks % LOG_EVERY == 0 {
            let lit = world.bodies.iter().filter(|b| b.highlight > 0.0).count();
            log::info!(
                "tick {:>4}: energy {:.3}, momentum ({:.3}, {:.3}), {} lit",
                world.time_ticks,
                world.kinetic_energy(),
                world.momentum().x,
                world.momentum().y,
                lit
            );
        }
    }

    println!(
        "Ran {} steps with {} bodies (seed {}), final energy {:.3}",
        world.time_ticks,
        world.bodies.len(),
        world.seed,
        world.kinetic_energy()
    );
}
