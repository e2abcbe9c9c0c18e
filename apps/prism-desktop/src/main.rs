use anyhow::Result;
use clap::Parser;
use prism_common::AppSize;
use prism_lifecycle::ShellConfig;
use prism_renderer::{AppRenderer, RendererHandle, SurfaceTarget};
use std::cell::RefCell;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prism-desktop", about = "Desktop demo application for the prism shell")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable vsync
    #[arg(long)]
    no_vsync: bool,

    /// Window title
    #[arg(long, default_value = "Prism Demo")]
    title: String,

    /// Keep running when Escape is pressed
    #[arg(long)]
    ignore_escape: bool,
}

struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

/// Minimal renderer: resolves its device when the shell hands over the
/// surface, then presents an animated clear color each frame.
struct ClearRenderer {
    title: String,
    vsync: bool,
    started: Instant,
    gpu: RefCell<Option<Gpu>>,
    gpu_name: RefCell<Option<String>>,
}

impl ClearRenderer {
    fn new(title: String, vsync: bool) -> Self {
        Self {
            title,
            vsync,
            started: Instant::now(),
            gpu: RefCell::new(None),
            gpu_name: RefCell::new(None),
        }
    }
}

impl AppRenderer for ClearRenderer {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn surface_created(&self, target: SurfaceTarget, frame: AppSize) {
        let SurfaceTarget::Window { instance, surface } = target else {
            tracing::warn!("no presentable target, staying headless");
            return;
        };

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("prism_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let size = frame.clamped_nonzero();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: if self.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let info = adapter.get_info();
        tracing::info!(
            "GPU initialized with {} backend on {}",
            info.backend.to_str(),
            info.name
        );
        *self.gpu_name.borrow_mut() = Some(info.name);

        *self.gpu.borrow_mut() = Some(Gpu {
            surface,
            device,
            queue,
            config,
        });
    }

    fn resized(&self, frame: AppSize) {
        if let Some(gpu) = self.gpu.borrow_mut().as_mut() {
            let size = frame.clamped_nonzero();
            gpu.config.width = size.width;
            gpu.config.height = size.height;
            gpu.surface.configure(&gpu.device, &gpu.config);
        }
    }

    fn draw(&self) {
        let mut gpu = self.gpu.borrow_mut();
        let Some(gpu) = gpu.as_mut() else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let t = self.started.elapsed().as_secs_f64();
        let clear = wgpu::Color {
            r: 0.1,
            g: 0.5 + 0.4 * t.sin(),
            b: 0.5 + 0.4 * (t * 0.7).cos(),
            a: 1.0,
        };

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("clear_encoder"),
            });
        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clear_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));

        output.present();
    }

    fn gpu_name(&self) -> Option<String> {
        self.gpu_name.borrow().clone()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("prism-desktop starting");

    let handle = RendererHandle::new(ClearRenderer::new(cli.title, !cli.no_vsync));
    prism_lifecycle::run(
        handle,
        ShellConfig {
            exit_on_escape: !cli.ignore_escape,
        },
    )?;

    Ok(())
}
