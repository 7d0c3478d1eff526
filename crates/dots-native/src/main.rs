use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use dots_core::{
    Camera, FrameInput, PointUniforms, PointerLatch, RenderBuffers, SphereConfig,
    SphereSimulation, Viewport, AUTO_ROTATE_RAD_PER_SEC, BACKGROUND, POINTS_WGSL, SPRITE_CORNERS,
};
use glam::{Quat, Vec2};

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    corner_vb: wgpu::Buffer,
    position_vb: wgpu::Buffer,
    color_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    dot_count: u32,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, dot_count: usize) -> anyhow::Result<Self> {
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
        let format = surface_caps.formats[0];
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

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<PointUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let corner_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("corner_vb"),
            contents: bytemuck::cast_slice(&SPRITE_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        // 3 floats per dot, rewritten whenever the simulation marks the buffers dirty
        let per_dot_bytes = (std::mem::size_of::<f32>() * 3 * dot_count) as u64;
        let position_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("position_vb"),
            size: per_dot_bytes,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let color_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("color_vb"),
            size: per_dot_bytes,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
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
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: sprite corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: dot positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 3) as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                }],
            },
            // slot 2: dot colours
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 3) as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 2,
                }],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points_pipeline"),
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
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            corner_vb,
            position_vb,
            color_vb,
            bind_group,
            dot_count: dot_count as u32,
            width: size.width.max(1),
            height: size.height.max(1),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    fn upload(&self, buffers: &RenderBuffers) {
        self.queue
            .write_buffer(&self.position_vb, 0, bytemuck::cast_slice(buffers.positions()));
        self.queue
            .write_buffer(&self.color_vb, 0, bytemuck::cast_slice(buffers.colors()));
    }

    fn render(&mut self, uniforms: &PointUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

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
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: BACKGROUND[0],
                            g: BACKGROUND[1],
                            b: BACKGROUND[2],
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.corner_vb.slice(..));
            rpass.set_vertex_buffer(1, self.position_vb.slice(..));
            rpass.set_vertex_buffer(2, self.color_vb.slice(..));
            rpass.draw(0..6, 0..self.dot_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Simulation state driven from the event loop.
struct App {
    sim: SphereSimulation,
    buffers: RenderBuffers,
    latch: PointerLatch,
    start: Instant,
}

impl App {
    fn new(config: SphereConfig) -> anyhow::Result<Self> {
        let sim = SphereSimulation::new(config)?;
        let buffers = sim.geometry();
        Ok(Self {
            sim,
            buffers,
            latch: PointerLatch::default(),
            start: Instant::now(),
        })
    }

    fn frame(&mut self, gpu: &mut GpuState) -> Result<(), wgpu::SurfaceError> {
        let elapsed = self.start.elapsed();
        let viewport = gpu.viewport();
        let camera = Camera::looking_at_origin(viewport.aspect());
        let rotation = Quat::from_rotation_y(elapsed.as_secs_f32() * AUTO_ROTATE_RAD_PER_SEC);

        self.sim.step(
            &FrameInput {
                time_ms: elapsed.as_secs_f64() * 1000.0,
                cursor: self.latch.take(),
                rotation,
                camera: &camera,
                viewport,
            },
            &mut self.buffers,
        );
        if self.buffers.take_dirty() {
            gpu.upload(&self.buffers);
        }
        gpu.render(&PointUniforms::new(&camera, rotation))
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::KeyM => {
                self.sim.toggle_morph();
                true
            }
            KeyCode::Escape => false,
            _ => true,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = SphereConfig::default();
    let mut app = App::new(config)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("dotsphere (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, config.dot_count))?;
    // speed is measured in logical pixels; cursor positions arrive physical
    app.latch.set_scale(window.scale_factor() as f32);
    log::info!(
        "[native] surface {}x{} dots={}",
        state.width,
        state.height,
        config.dot_count
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                app.latch
                    .set(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => app.latch.clear(),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                app.latch.set_scale(scale_factor as f32);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if !app.handle_key(code) {
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => match app.frame(&mut state) {
            Ok(_) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[native] out of GPU memory");
                elwt.exit()
            }
            Err(e) => log::warn!("[native] frame skipped: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
