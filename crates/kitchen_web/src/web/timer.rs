use kitchen::debounce::{Debounce, Ticket};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Browser timeout backing the search debounce.
///
/// Owns the timeout handle and its callback. Scheduling clears the previous
/// timeout before arming a new one.
pub(super) struct DebounceTimer {
    debounce: Debounce<String>,
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl DebounceTimer {
    pub(super) fn new(delay_ms: u32) -> Self {
        Self {
            debounce: Debounce::new(delay_ms),
            handle: None,
            callback: None,
        }
    }

    /// Cancels any pending timeout and arms a fresh one for `query`.
    ///
    /// `on_fire` receives the ticket when the timeout elapses; pass it back to
    /// [`Self::fire`] to get the query (if it is still the latest one).
    pub(super) fn schedule(
        &mut self,
        query: String,
        on_fire: impl FnOnce(Ticket) + 'static,
    ) -> Result<(), String> {
        self.cancel();
        let ticket = self.debounce.schedule(query);

        let mut on_fire = Some(on_fire);
        let cb = Closure::wrap(Box::new(move || {
            if let Some(f) = on_fire.take() {
                f(ticket);
            }
        }) as Box<dyn FnMut()>);

        let window = web_sys::window().ok_or("no window")?;
        let delay = i32::try_from(self.debounce.delay_ms()).unwrap_or(i32::MAX);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay)
            .map_err(|_| "set_timeout() threw".to_string())?;

        self.handle = Some(id);
        // Replacing the previous closure is safe: its timeout was cleared above
        // or has already run.
        self.callback = Some(cb);
        Ok(())
    }

    pub(super) fn fire(&mut self, ticket: Ticket) -> Option<String> {
        let query = self.debounce.fire(ticket)?;
        self.handle = None;
        Some(query)
    }

    pub(super) fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(id);
            }
        }
        self.debounce.cancel();
    }
}
