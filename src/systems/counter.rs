/// A threshold counter that hands back an action the first time its limit is reached.
///
/// The action is a plain value chosen by the owner of the counter; the counter never
/// runs anything itself. It fires at most once per arm cycle: [`DotCounter::set_limit`]
/// and [`DotCounter::reset`] rearm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotCounter<A> {
    count: u32,
    limit: u32,
    limit_reached: bool,
    on_limit: Option<A>,
}

impl<A: Copy> DotCounter<A> {
    pub fn new(limit: u32, on_limit: Option<A>) -> Self {
        Self {
            count: 0,
            limit,
            limit_reached: false,
            on_limit,
        }
    }

    /// Records one eaten dot.
    ///
    /// Returns the configured action on the first call that brings the count to or past
    /// the limit in this arm cycle, and `None` on every other call.
    pub fn dot_eaten(&mut self) -> Option<A> {
        self.count = self.count.saturating_add(1);
        if self.limit_reached || self.count < self.limit {
            return None;
        }
        self.limit_reached = true;
        self.on_limit
    }

    /// Sets a new limit and rearms the counter without touching the count.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
        self.limit_reached = false;
    }

    /// Zeroes the count and rearms the counter. The limit is kept.
    pub fn reset(&mut self) {
        self.count = 0;
        self.limit_reached = false;
    }

    pub fn set_action(&mut self, action: A) {
        self.on_limit = Some(action);
    }

    pub fn clear_action(&mut self) {
        self.on_limit = None;
    }

    /// Overwrites the count, keeping the arm state.
    pub fn force_count(&mut self, count: u32) {
        self.count = count;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn limit_reached(&self) -> bool {
        self.limit_reached
    }

    pub fn action(&self) -> Option<A> {
        self.on_limit
    }

    /// Returns true if the count already meets the limit, fired or not.
    pub fn is_satisfied(&self) -> bool {
        self.count >= self.limit
    }
}

impl<A: Copy> Default for DotCounter<A> {
    fn default() -> Self {
        Self::new(0, None)
    }
}
