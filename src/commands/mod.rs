pub mod events;
pub mod lifecycle;
pub mod stream;

pub use events::*;
pub use lifecycle::*;
pub use stream::*;
