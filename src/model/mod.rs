mod perf;
mod player;
mod tournament;

pub use perf::*;
pub use player::*;
pub use tournament::*;
