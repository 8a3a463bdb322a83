pub mod gate;
pub mod nav;
pub mod palette;
pub mod reveal;
pub mod sections;

pub use gate::StopGate;
pub use nav::{link_class, MenuState, NavVariant};
pub use palette::{gradient_stops, resize_target, AnimationClock, ViewportSize};
pub use reveal::RevealSet;
pub use sections::{Section, SectionTracker, VerticalSpan};
