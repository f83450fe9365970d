mod clock;
mod root;
mod state;

pub use clock::MountClock;
pub use root::App;
pub use state::{ChartData, ChartSource, Presentation, Section};
