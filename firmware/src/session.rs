use core::fmt::Write;

use dssc_protocol::{encode_record, PIXEL_COUNT};
use tracing::{debug, info, warn};

use crate::state::RenderState;
use crate::storage::{CaptureStorage, StorageError};

/// File name of one capture, `screencap-<n>.bin`
pub type CaptureName = heapless::String<26>;

/// Source of finished frames from the display capture unit
pub trait FrameCapture {
    /// Start a capture and block until the hardware has written the frame.
    ///
    /// The wait is bounded by the display's frame cadence; there is no
    /// timeout and no retry.
    fn acquire_frame(&mut self) -> &[u16; PIXEL_COUNT];
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("capture name too long")]
    NameOverflow,

    #[error("capture counter exhausted")]
    CounterExhausted,

    #[error("failed to store {name}: {source}")]
    Storage {
        name: CaptureName,
        #[source]
        source: StorageError,
    },
}

/// Format the file name for capture number `index`
pub fn capture_name(index: u32) -> Result<CaptureName, CaptureError> {
    let mut name = CaptureName::new();
    write!(name, "screencap-{index}.bin").map_err(|_| CaptureError::NameOverflow)?;
    Ok(name)
}

/// Takes screen captures and persists them under fresh names
pub struct CaptureSession<F, S> {
    frames: F,
    storage: S,
    count: u32,
}

impl<F: FrameCapture, S: CaptureStorage> CaptureSession<F, S> {
    pub fn new(frames: F, storage: S) -> Self {
        Self {
            frames,
            storage,
            count: 0,
        }
    }

    /// Number of capture names handed out so far, including failed writes
    pub fn captures_taken(&self) -> u32 {
        self.count
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Capture the current frame together with `state` and store it.
    ///
    /// The counter advances before the write, so a name is never reused
    /// even when storing fails. Once the counter cannot advance any more,
    /// every call fails with [`CaptureError::CounterExhausted`].
    pub fn capture(&mut self, state: &RenderState) -> Result<CaptureName, CaptureError> {
        let next = self
            .count
            .checked_add(1)
            .ok_or(CaptureError::CounterExhausted)?;
        let name = capture_name(self.count)?;

        debug!("waiting for capture unit");
        let pixels = self.frames.acquire_frame();
        self.count = next;

        let bytes = encode_record(&state.params(), pixels);
        if let Err(source) = self.storage.store(&name, &bytes) {
            warn!(%name, error = %source, "capture not saved");
            return Err(CaptureError::Storage { name, source });
        }

        info!(%name, size = bytes.len(), "capture saved");
        Ok(name)
    }
}
