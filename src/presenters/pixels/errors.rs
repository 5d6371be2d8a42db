use std::error::Error;
use std::fmt;

use winit::error::{EventLoopError, OsError};

use crate::core::data::raster::RasterError;

#[derive(Debug)]
pub enum PresentError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Frame(RasterError),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop failed: {}", err),
            Self::Window(err) => write!(f, "cannot open window: {}", err),
            Self::Surface(err) => write!(f, "pixel surface failed: {}", err),
            Self::Frame(err) => write!(f, "cannot fill frame: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for PresentError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for PresentError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for PresentError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<RasterError> for PresentError {
    fn from(err: RasterError) -> Self {
        Self::Frame(err)
    }
}
