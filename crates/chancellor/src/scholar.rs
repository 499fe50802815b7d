use blackboard::Blackboard;

use crate::ScholarError;

/// A behavior unit competing for the Chancellor's attention each tick.
///
/// `importance` is polled for every registered scholar on every tick, so it should be cheap and
/// must not mutate shared state. Only the winner's `execute` runs; it may write to the
/// blackboard and queue actions with [`Blackboard::add_action`].
pub trait Scholar: 'static {
    /// Name used in logs and errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Urgency for this tick. Only scores strictly greater than zero can win.
    fn importance(&self, blackboard: &Blackboard) -> Result<i32, ScholarError>;

    fn execute(&mut self, blackboard: &mut Blackboard) -> Result<(), ScholarError>;
}
