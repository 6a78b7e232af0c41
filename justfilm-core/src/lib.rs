//! JustFilm is a photo-booth engine: timed capture sequencing plus photo-strip compositing.
//!
//! The engine is split into two cooperating components:
//!
//! 1. **Capture**: a [`CaptureSequencer`] drives a fixed four-photo loop, alternating a
//!    one-second countdown (3, 2, 1, 0) with a snapshot action against a pluggable
//!    [`FrameSource`]. Each snapshot is rasterized to a fixed 640x480 photo and PNG-encoded
//!    the moment it is taken.
//! 2. **Compose**: [`compose_strip`] joins the four photo decodes (all-or-nothing), stacks
//!    them into a 640x1920 vertical strip, stamps the selected [`FrameKind`] overlay on top,
//!    and hands back a [`StripImage`] ready to be exported as `JustFilm.png`.
//!
//! Data flows one way: capture produces an ordered snapshot list, compose consumes it plus a
//! frame selection. A [`BoothSession`] owns the state in between so nothing lives in globals.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Clock-free core**: the sequencer is a pure state machine advanced by `tick`; the
//!   caller owns the timer, so there is no schedule to leak on reset or completion.
//! - **No partial strips**: the frame overlay is only drawn once every photo decode has
//!   completed, and any failure aborts the compose before a file can be produced.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod capture;
mod compose;
mod export;
mod foundation;
mod session;

pub use assets::decode::decode_photo;
pub use assets::frames::{
    FrameKind, load_frame_overlay, render_builtin_overlay, write_builtin_overlays,
};
pub use capture::sequencer::{CaptureSequencer, SequencerState, TickEvent};
pub use capture::shutter::ShutterCue;
pub use capture::snapshot::{Snapshot, SnapshotMeta};
pub use capture::source::{FrameSource, SourceFrame, TestPatternSource};
pub use compose::strip::compose_strip;
pub use compose::surface::{StripImage, StripSurface};
pub use export::png::{STRIP_FILE_NAME, ensure_parent_dir, write_strip_png};
pub use foundation::error::{BoothError, BoothResult};
pub use foundation::geometry::{
    COUNTDOWN_START, PHOTO_COUNT, PHOTO_HEIGHT, PHOTO_WIDTH, SHUTTER_FLASH, STRIP_HEIGHT,
    STRIP_WIDTH, SlotIndex,
};
pub use session::booth::{BoothSession, SessionReport};
