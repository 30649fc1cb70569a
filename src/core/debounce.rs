/// Ticket handed out by [`Debounce::schedule`]; only the newest one can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks one pending deferred value where the last input wins.
///
/// The browser timer owns *when* the action runs; this owns *whether* it
/// still should. Every `schedule` supersedes the previous pending value, so a
/// stale timer callback that fires anyway gets `None` back.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay_ms: u32,
    generation: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some((self.generation, value));
        Ticket(self.generation)
    }

    /// Drops the pending value. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Takes the pending value if `ticket` is still the newest one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((generation, value)) if generation == ticket.0 => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }
}
