mod helpers;
mod state;
mod upscale;

pub use state::*;
