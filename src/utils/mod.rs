pub mod footer;
pub mod mailto;
pub mod scroll;
pub mod typewriter;
