//! Per-word study session: drawing-surface lifecycle and animation sequencing.

pub mod completion;
pub mod session;
pub mod sizing;
pub mod surface;

#[cfg(test)]
mod tests;

pub use completion::{Completion, Ticket, TicketKind};
pub use session::{Availability, SessionState, StudySession};
pub use sizing::{SizingPolicy, Tier};
pub use surface::{
    DrawingSurface, MountPoint, SurfaceError, SurfaceHandle, SurfaceOptions, SurfaceProvider,
};
