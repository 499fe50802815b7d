use std::cell::RefCell;
use std::rc::Rc;

use blackboard::{Blackboard, BlackboardAsset};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Chancellor, ChancellorError, Scholar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Whether [`BlackboardController::update`] runs the Chancellor.
    ///
    /// Turning this off freezes decision-making while leaving the blackboard readable and
    /// writable.
    pub update_chancellor: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            update_chancellor: true,
        }
    }
}

/// Host-side driver owning one blackboard and one chancellor.
///
/// Call [`awake`](Self::awake) once with the authoring data, then [`update`](Self::update) once
/// per frame.
#[derive(Debug, Default)]
pub struct BlackboardController {
    config: ControllerConfig,
    blackboard: Blackboard,
    chancellor: Chancellor,
}

impl BlackboardController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            blackboard: Blackboard::new(),
            chancellor: Chancellor::new(),
        }
    }

    pub fn config(&self) -> ControllerConfig {
        self.config
    }

    pub fn set_update_chancellor(&mut self, enabled: bool) {
        self.config.update_chancellor = enabled;
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }

    pub fn chancellor(&self) -> &Chancellor {
        &self.chancellor
    }

    pub fn register_scholar<S: Scholar>(&mut self, scholar: &Rc<RefCell<S>>) {
        self.chancellor.register_scholar(scholar);
    }

    pub fn unregister_scholar<S: Scholar>(&mut self, scholar: &Rc<RefCell<S>>) {
        self.chancellor.unregister_scholar(scholar);
    }

    pub fn register_dyn_scholar(&mut self, scholar: &Rc<RefCell<dyn Scholar>>) {
        self.chancellor.register_dyn_scholar(scholar);
    }

    pub fn unregister_dyn_scholar(&mut self, scholar: &Rc<RefCell<dyn Scholar>>) {
        self.chancellor.unregister_dyn_scholar(scholar);
    }

    /// Seeds the blackboard from authoring data.
    pub fn awake(&mut self, asset: &BlackboardAsset) -> blackboard::Result<()> {
        asset.set_values_on_blackboard(&mut self.blackboard)
    }

    /// Runs one tick and then every action it returned, in order.
    ///
    /// Returns the number of actions run; `0` when the chancellor is paused.
    pub fn update(&mut self) -> Result<usize, ChancellorError> {
        if !self.config.update_chancellor {
            return Ok(0);
        }

        let actions = self.chancellor.run_tick(&mut self.blackboard)?;
        let count = actions.len();
        for action in actions {
            action();
        }
        Ok(count)
    }
}
