//! Abnormal-death notification for panics.

use std::any::Any;

use crate::event::LifecycleEvent;
use crate::lifecycle::Listener;

/// Install a panic hook that records a death event before chaining to the
/// previously installed hook.
pub fn install_panic_hook(listener: Listener) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let event = LifecycleEvent::death_by_panic(panic_message(info.payload()));
        // Failure is logged by the recorder; the panic proceeds either way.
        let _ = listener.on_event(&event);
        previous(info);
    }));
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_text_is_extracted() {
        let static_payload: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(static_payload.as_ref()), "static");

        let owned_payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned_payload.as_ref()), "owned");

        let other_payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(other_payload.as_ref()), "unknown panic payload");
    }
}
