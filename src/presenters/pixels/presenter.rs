use log::{debug, error, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::adapters::pixel_format::copy_raster_to_rgba;
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::raster::Raster;
use crate::presenters::pixels::errors::PresentError;

/// Shows the raster in a fixed-size window until the user closes it.
///
/// The window's inner size is exactly the raster's size in physical pixels
/// and cannot be resized. The raster is copied into the surface once; every
/// redraw presents that same frame.
pub struct PixelsPresenter {}

impl FramePresenterPort for PixelsPresenter {
    type Error = PresentError;

    fn present(&self, raster: &Raster, title: &str) -> Result<(), Self::Error> {
        if raster.dimensions().is_empty() {
            warn!(
                "Not opening a window for an empty {}x{} raster",
                raster.width(),
                raster.height()
            );
            return Ok(());
        }

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(raster.width(), raster.height()))
            .with_resizable(false)
            .build(&event_loop)?;

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(raster.width(), raster.height(), surface_texture)?;

        copy_raster_to_rgba(raster, pixels.frame_mut())?;

        let mut render_error: Option<pixels::Error> = None;

        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run(|event, elwt| {
            let Event::WindowEvent { event, window_id } = event else {
                return;
            };
            if window_id != window.id() {
                return;
            }

            match event {
                WindowEvent::CloseRequested => {
                    debug!("Window closed");
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = pixels.render() {
                        error!("Render error: {}", err);
                        render_error = Some(err);
                        elwt.exit();
                    }
                }
                _ => {}
            }
        })?;

        match render_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl Default for PixelsPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelsPresenter {
    pub fn new() -> Self {
        Self {}
    }
}
