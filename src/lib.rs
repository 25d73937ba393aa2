#[macro_use]
extern crate log;

mod compat;
mod extensions;
mod gl_version;
mod os;
mod phase;
mod probe;
mod vendor;
mod version;

pub use compat::*;
pub use extensions::*;
pub use gl_version::*;
pub use os::*;
pub use phase::*;
pub use probe::*;
pub use vendor::*;
pub use version::*;

/** Re-export for the current version of Glow. */
pub use glow::Context;
