//! Timer loop that drives the tagline's `Typewriter` machine and mirrors its
//! progress into a yew state handle.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::UseStateHandle;

use crate::config;
use crate::utils::typewriter::Typewriter;

/// Starts the reveal after the fixed page-load pause, then advances one
/// character per interval until the machine reports done. Restartable only by
/// a reload; the loop is never cancelled.
pub fn run(tagline: UseStateHandle<String>, text: String) {
    spawn_local(async move {
        TimeoutFuture::new(config::TYPEWRITER_START_DELAY_MS).await;

        let mut machine = Typewriter::new(&text);
        machine.start();
        tagline.set(machine.revealed());

        while !machine.is_done() {
            TimeoutFuture::new(config::TYPEWRITER_CHAR_DELAY_MS).await;
            machine.tick();
            tagline.set(machine.revealed());
        }
    });
}
