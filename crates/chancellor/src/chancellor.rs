use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use blackboard::{Blackboard, PendingAction};

use crate::{ChancellorError, Scholar};

type ScholarRef = Weak<RefCell<dyn Scholar>>;

/// Picks at most one [`Scholar`] per tick.
///
/// Scholars are held weakly: the collaborator that registered a scholar owns it, and a scholar
/// whose owner has dropped it simply stops being polled.
#[derive(Default)]
pub struct Chancellor {
    scholars: Vec<ScholarRef>,
    last_winner: Option<String>,
    last_best_score: i32,
}

impl Chancellor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `scholar` to the polling order. Registering a member again is a no-op.
    pub fn register_scholar<S: Scholar>(&mut self, scholar: &Rc<RefCell<S>>) {
        let scholar: Rc<RefCell<dyn Scholar>> = scholar.clone();
        self.register_dyn_scholar(&scholar);
    }

    /// [`register_scholar`](Self::register_scholar) for an already type-erased scholar.
    pub fn register_dyn_scholar(&mut self, scholar: &Rc<RefCell<dyn Scholar>>) {
        if self.position(Rc::as_ptr(scholar)).is_some() {
            return;
        }
        self.scholars.push(Rc::downgrade(scholar));
    }

    /// Removes `scholar`. Unknown scholars are ignored.
    pub fn unregister_scholar<S: Scholar>(&mut self, scholar: &Rc<RefCell<S>>) {
        self.remove_at(Rc::as_ptr(scholar));
    }

    pub fn unregister_dyn_scholar(&mut self, scholar: &Rc<RefCell<dyn Scholar>>) {
        self.remove_at(Rc::as_ptr(scholar));
    }

    pub fn contains_scholar<S: Scholar>(&self, scholar: &Rc<RefCell<S>>) -> bool {
        self.position(Rc::as_ptr(scholar)).is_some()
    }

    pub fn contains_dyn_scholar(&self, scholar: &Rc<RefCell<dyn Scholar>>) -> bool {
        self.position(Rc::as_ptr(scholar)).is_some()
    }

    fn remove_at<T: ?Sized>(&mut self, target: *const T) {
        if let Some(index) = self.position(target) {
            self.scholars.remove(index);
        }
    }

    fn position<T: ?Sized>(&self, target: *const T) -> Option<usize> {
        self.scholars
            .iter()
            .position(|s| std::ptr::addr_eq(s.as_ptr(), target))
    }

    /// Live registered scholars.
    pub fn len(&self) -> usize {
        self.scholars.iter().filter(|s| s.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.scholars.clear();
    }

    /// Name of the scholar executed by the most recent successful tick.
    pub fn last_winner(&self) -> Option<&str> {
        self.last_winner.as_deref()
    }

    /// Winning score of the most recent tick; `0` when nobody won.
    pub fn last_best_score(&self) -> i32 {
        self.last_best_score
    }

    fn prune_dropped(&mut self) {
        let before = self.scholars.len();
        self.scholars.retain(|s| s.strong_count() > 0);
        let dropped = before - self.scholars.len();
        if dropped > 0 {
            tracing::debug!(dropped, "pruned scholars released by their owners");
        }
    }

    /// Runs one selection pass and returns the actions queued on `blackboard`, in order.
    ///
    /// The highest strictly positive importance wins; equal scores keep the earlier scholar. If a
    /// scholar callback fails the tick is aborted and the error is returned. Selection never
    /// touches the action queue; a failed execute discards only the actions the winner queued.
    /// Registration is unaffected either way.
    pub fn run_tick(
        &mut self,
        blackboard: &mut Blackboard,
    ) -> Result<Vec<PendingAction>, ChancellorError> {
        self.prune_dropped();
        self.last_winner = None;
        self.last_best_score = 0;

        let mut best: Option<Rc<RefCell<dyn Scholar>>> = None;
        let mut best_score = 0;

        for scholar in self.scholars.iter().filter_map(Weak::upgrade) {
            let polled = scholar.borrow();
            let importance = match polled.importance(blackboard) {
                Ok(importance) => importance,
                Err(source) => {
                    let name = polled.name().to_owned();
                    return Err(ChancellorError::Importance {
                        scholar: name,
                        source,
                    });
                }
            };
            tracing::trace!(scholar = polled.name(), importance, "scholar polled");
            drop(polled);

            if importance > best_score {
                best_score = importance;
                best = Some(scholar);
            }
        }

        if let Some(winner) = best {
            let mut winner = winner.borrow_mut();
            let name = winner.name().to_owned();
            tracing::debug!(scholar = %name, importance = best_score, "executing scholar");

            let queued = blackboard.pending_actions();
            if let Err(source) = winner.execute(blackboard) {
                blackboard.truncate_actions(queued);
                return Err(ChancellorError::Execute {
                    scholar: name,
                    source,
                });
            }

            self.last_winner = Some(name);
            self.last_best_score = best_score;
        }

        let actions = blackboard.take_actions();
        tracing::trace!(actions = actions.len(), "tick finished");
        Ok(actions)
    }
}

impl fmt::Debug for Chancellor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chancellor")
            .field("scholars", &self.len())
            .field("last_winner", &self.last_winner)
            .field("last_best_score", &self.last_best_score)
            .finish()
    }
}
