use std::time::Instant;

use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use folio_core::{
    client_to_ndc, model_matrix, nav_for_key, pack_instances, pointer_to_rotation, section,
    status_label, BackgroundParams, BackgroundUniforms, Camera, FolioConfig, KeyAction,
    ParticleInstance, SceneUniforms, Shape, SwipeTracker, VisualEvent, VisualEvents,
    VisualizationState, MAX_FRAME_DT_SEC, POINT_OPACITY, QUAD_VERTICES,
};
use glam::Vec2;

const ADDITIVE_BLENDING: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

struct GpuState<'w> {
    window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    bg_pipeline: wgpu::RenderPipeline,
    bg_uniform_buffer: wgpu::Buffer,
    bg_bind_group: wgpu::BindGroup,
    particle_pipeline: wgpu::RenderPipeline,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instances: Vec<ParticleInstance>,
    camera: Camera,
    background: BackgroundParams,
    point_size: f32,
}

fn uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window, cfg: &FolioConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        // Background: one fullscreen triangle, no vertex buffers.
        let bg_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("background_shader"),
            source: wgpu::ShaderSource::Wgsl(folio_core::BACKGROUND_WGSL.into()),
        });
        let bg_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("background_uniforms"),
            size: std::mem::size_of::<BackgroundUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bg_bgl = uniform_layout(&device, "background_bgl");
        let bg_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("background_bg"),
            layout: &bg_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: bg_uniform_buffer.as_entire_binding(),
            }],
        });
        let bg_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("background_pl"),
            bind_group_layouts: &[&bg_bgl],
            push_constant_ranges: &[],
        });
        let bg_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("background_pipeline"),
            layout: Some(&bg_layout),
            vertex: wgpu::VertexState {
                module: &bg_shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &bg_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // Particles: instanced billboards.
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle_shader"),
            source: wgpu::ShaderSource::Wgsl(folio_core::PARTICLES_WGSL.into()),
        });
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bgl = uniform_layout(&device, "scene_bgl");
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<ParticleInstance>() * cfg.particle_count) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let vertex_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-particle data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let aspect = config.width as f32 / config.height as f32;
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            bg_pipeline,
            bg_uniform_buffer,
            bg_bind_group,
            particle_pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            quad_vb,
            instance_vb,
            instances: Vec::with_capacity(cfg.particle_count),
            camera: Camera::for_viewport(aspect, cfg.camera_z),
            background: BackgroundParams::default(),
            point_size: cfg.point_size,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.camera.set_aspect(new_size.width, new_size.height);
    }

    fn render(&mut self, scene: &VisualizationState, elapsed: f32) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let bg = self
            .background
            .uniforms(self.config.width, self.config.height, elapsed);
        self.queue
            .write_buffer(&self.bg_uniform_buffer, 0, bytemuck::bytes_of(&bg));

        let uniforms = SceneUniforms::new(
            self.camera.view_matrix(),
            self.camera.projection_matrix(),
            model_matrix(scene.rotation()),
        );
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        pack_instances(
            scene.positions(),
            scene.colors(),
            self.point_size,
            POINT_OPACITY,
            &mut self.instances,
        );
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&self.instances));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.bg_pipeline);
            rpass.set_bind_group(0, &self.bg_bind_group, &[]);
            rpass.draw(0..3, 0..1);

            rpass.set_pipeline(&self.particle_pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..self.instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Everything the event loop mutates besides the GPU.
struct App {
    scene: VisualizationState,
    swipe: SwipeTracker,
    events: VisualEvents,
    started: Instant,
    last_frame: Instant,
    title: String,
}

impl App {
    fn new(scene: VisualizationState) -> Self {
        let now = Instant::now();
        Self {
            scene,
            swipe: SwipeTracker::default(),
            events: VisualEvents::new(),
            started: now,
            last_frame: now,
            title: String::new(),
        }
    }

    fn on_key(&mut self, key: &Key) {
        let name = match key {
            Key::Named(NamedKey::ArrowRight) => "ArrowRight",
            Key::Named(NamedKey::ArrowLeft) => "ArrowLeft",
            Key::Named(NamedKey::ArrowUp) => "ArrowUp",
            Key::Named(NamedKey::ArrowDown) => "ArrowDown",
            Key::Named(NamedKey::Space) => " ",
            Key::Character(c) => c.as_str(),
            _ => return,
        };
        match nav_for_key(name) {
            Some(KeyAction::Navigate(nav)) => {
                self.scene.navigate(nav);
            }
            Some(KeyAction::ToggleAutoAdvance) => {
                let on = self.scene.toggle_auto_advance();
                log::info!("auto-advance {}", if on { "enabled" } else { "disabled" });
            }
            None => {}
        }
    }

    fn on_touch(&mut self, touch: &Touch) {
        let at = Vec2::new(touch.location.x as f32, touch.location.y as f32);
        match touch.phase {
            TouchPhase::Started => self.swipe.begin(at),
            TouchPhase::Moved => {
                if let Some(nav) = self.swipe.moved(at) {
                    self.scene.navigate(nav);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => self.swipe.end(),
        }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_frame = now;

        self.events.clear();
        if let Err(e) = self.scene.tick(dt, &mut self.events) {
            log::error!("frame update failed: {e}");
        }
        for ev in &self.events {
            match *ev {
                VisualEvent::SectionChanged(i) => {
                    let content = section(Shape::from_index(i));
                    log::info!("section {} of {}: {}", i + 1, Shape::COUNT, content.title);
                    for line in content.lines {
                        log::debug!("  {line}");
                    }
                }
                VisualEvent::ShapeSettled(i) => {
                    log::debug!("{} settled", Shape::from_index(i));
                }
            }
        }
    }

    fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    fn refresh_title(&mut self, window: &Window) {
        let label = status_label(
            self.scene.current_shape(),
            self.scene.auto_advance(),
            false,
            self.scene.is_morphing(),
        );
        if label != self.title {
            window.set_title(&format!("particle folio - {label}"));
            self.title = label;
        }
    }
}

/// `FOLIO_PARTICLES=8000 FOLIO_AUTO=off ...` style overrides.
fn config_from_env() -> anyhow::Result<FolioConfig> {
    let cfg = FolioConfig::default().with_overrides(|key| {
        std::env::var(format!("FOLIO_{}", key.to_ascii_uppercase())).ok()
    })?;
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = config_from_env()?;
    log::info!(
        "starting: {} particles, auto-advance {}",
        cfg.particle_count,
        cfg.auto_advance
    );
    let mut app = App::new(VisualizationState::new(&cfg)?);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("particle folio")
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, &cfg))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let ndc = client_to_ndc(
                    position.x as f32,
                    position.y as f32,
                    state.config.width as f32,
                    state.config.height as f32,
                );
                app.scene.set_target_rotation(pointer_to_rotation(ndc));
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    elwt.exit();
                } else if !event.repeat {
                    app.on_key(&event.logical_key);
                }
            }
            WindowEvent::Touch(touch) => app.on_touch(&touch),
            _ => {}
        },
        Event::AboutToWait => {
            app.tick();
            app.refresh_title(state.window);
            match state.render(&app.scene, app.elapsed()) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("surface error: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
