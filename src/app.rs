use std::{sync::Arc, time::Instant};

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

use crate::{
    config::{AppConfig, WindowMode},
    error::{EngineError, EngineResult},
    gfx::{
        camera::{
            camera_controller::CameraController,
            camera_utils::CameraManager,
            view::{ProjectionParameters, View, ViewParameters},
        },
        rendering::render_engine::RenderEngine,
        scene::Scene,
    },
};

pub struct U3dApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Option<Scene>,
    last_frame: Instant,
    // first fatal error raised inside the event loop
    error: Option<EngineError>,
}

impl U3dApp {
    /// Validates `config` and creates the event loop.
    pub fn new(config: AppConfig) -> EngineResult<Self> {
        config.validate()?;
        let event_loop = EventLoop::new()?;

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                scene: None,
                last_frame: Instant::now(),
                error: None,
            },
        })
    }

    /// Run the application until the window closes (consumes self)
    pub fn run(mut self) -> EngineResult<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop.run_app(&mut self.app_state)?;

        match self.app_state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn window_attributes(&self, event_loop: &ActiveEventLoop) -> WindowAttributes {
        let window = &self.config.window;
        let attributes = WindowAttributes::default()
            .with_title(window.title.clone())
            .with_inner_size(LogicalSize::new(window.width, window.height));

        match window.mode {
            WindowMode::Windowed => attributes,
            WindowMode::Fullscreen { monitor } => {
                match event_loop.available_monitors().nth(monitor) {
                    Some(handle) => {
                        attributes.with_fullscreen(Some(Fullscreen::Borderless(Some(handle))))
                    }
                    None => {
                        log::warn!("Monitor {} not found, opening a window instead", monitor);
                        attributes
                    }
                }
            }
        }
    }

    fn build_scene(&self, width: u32, height: u32) -> Scene {
        let camera = &self.config.camera;
        let mut view = View::new(
            ProjectionParameters::new(camera.field_of_view, 1.0),
            ViewParameters::new(camera.position, camera.rotation),
        );
        view.resize_projection(width, height);
        let controller =
            CameraController::new(camera.move_speed, camera.rotate_speed, camera.fov_speed);

        let scene_config = &self.config.scene;
        let mut scene = Scene::new(CameraManager::new(view, controller));
        scene.add_cube(scene_config.cube_position);
        scene.add_cylinder(
            scene_config.cylinder_position,
            scene_config.cylinder_resolution,
        );
        scene.set_cube_spin(scene_config.cube_spin);
        scene
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> EngineResult<()> {
        let window = Arc::new(event_loop.create_window(self.window_attributes(event_loop))?);
        let (width, height) = window.inner_size().into();
        log::info!("Created window {}x{}", width, height);

        let renderer = pollster::block_on(RenderEngine::new(
            window.clone(),
            width,
            height,
            self.config.window.vsync,
        ))?;

        let mut scene = self.build_scene(width, height);
        scene.init_gpu_resources(renderer.device(), renderer.model_bind_group_layout());

        self.window = Some(window);
        self.render_engine = Some(renderer);
        self.scene = Some(scene);
        self.last_frame = Instant::now();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        log::error!("{}", err);
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(render_engine), Some(scene)) = (self.render_engine.as_mut(), self.scene.as_mut())
        else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                scene.camera_manager.process_keyboard_event(&event);
            }
            WindowEvent::Focused(false) => {
                scene.camera_manager.controller.release_all();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                // minimised; keep the last aspect ratio
                if width == 0 || height == 0 {
                    return;
                }
                scene.camera_manager.view.resize_projection(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                scene.update(dt);
                render_engine.update(scene.camera_manager.uniform());
                scene.sync_transforms(render_engine.queue());

                if let Err(err) = render_engine.render_frame(scene) {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}
