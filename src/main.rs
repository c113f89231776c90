//! Terrascape - procedural terrain viewer
//!
//! Builds the scene once, then hands its buffers and per-frame transform to
//! the wgpu renderer.

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use terrascape::cli::Args;
use terrascape::heightmap::save_heightmap;
use terrascape::params::{CameraRig, DrawMode, RenderConfig};
use terrascape::rendering::RenderSystem;
use terrascape::scene::Scene;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Generated once, transform advanced per frame
    scene: Scene,

    // Configuration
    render_config: RenderConfig,
    draw_mode: DrawMode,
}

impl App {
    fn new(scene: Scene, render_config: RenderConfig) -> Self {
        Self {
            window: None,
            render_system: None,
            scene,
            draw_mode: render_config.draw_mode,
            render_config,
        }
    }

    /// Create window and renderer; errors end the event loop
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let window_attributes = Window::default_attributes()
            .with_title("Terrascape")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let size = window.inner_size();
        self.scene
            .set_aspect(size.width as f32 / size.height.max(1) as f32);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            self.scene.mesh(),
            self.scene.transform(),
            &self.render_config,
        ))?;

        log::info!("press W to cycle draw mode, ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
        Ok(())
    }

    /// Advance one frame, upload the transform and draw
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(ref mut render_system) = self.render_system else {
            return;
        };

        let transform = self.scene.advance();
        render_system.update_transform(transform);

        match render_system.render(self.draw_mode) {
            Ok(()) => {}
            // Surface went stale (resize, display change): reconfigure and retry next frame
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(render_system) = self.render_system.as_mut() {
            render_system.resize(width, height);
        }
        self.scene.set_aspect(width as f32 / height as f32);
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("graphics initialization failed: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::KeyW => {
                    self.draw_mode = self.draw_mode.next();
                    log::info!("draw mode: {:?}", self.draw_mode);
                }
                _ => {}
            },
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let render_config = args.render_config();

    // Configuration errors surface here, before any window exists
    let scene = Scene::build(
        args.seed(),
        args.grid_config(),
        &args.terrain_params(),
        CameraRig::default(),
        &render_config,
    )?;

    if let Some(path) = &args.heightmap {
        save_heightmap(
            scene.field(),
            args.heightmap_size,
            args.noise_scale,
            path,
        )?;
        return Ok(());
    }

    let mut app = App::new(scene, render_config);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
