pub mod images;
pub mod observer;
pub mod scroll;
pub mod typewriter;
