//! Device side of the screen capture tool: the render state of the test
//! scene, texture mode setup and capture sessions.
//!
//! Hardware access (key polling, the 3D engine, the display capture unit
//! and the SD card) lives behind [`FrameCapture`], [`VertexSink`] and
//! [`CaptureStorage`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod session;
pub mod state;
pub mod storage;
pub mod texture;

pub use session::{capture_name, CaptureError, CaptureName, CaptureSession, FrameCapture};
pub use state::{Action, RenderState};
#[cfg(feature = "std")]
pub use storage::DirStorage;
pub use storage::{CaptureStorage, MemoryStorage, StorageError};
pub use texture::{TextureMode, TextureSetup, VertexSink};
