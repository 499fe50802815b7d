//! Priority-polling scheduler for blackboard-driven AI.
//!
//! Each tick the [`Chancellor`] asks every registered [`Scholar`] how important it is right now,
//! executes the single most important one, and hands back whatever actions it queued on the
//! [`Blackboard`](blackboard::Blackboard). Ties go to the scholar registered first.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod chancellor;
pub mod controller;
pub mod error;
pub mod scholar;

pub use chancellor::Chancellor;
pub use controller::{BlackboardController, ControllerConfig};
pub use error::{ChancellorError, ScholarError};
pub use scholar::Scholar;
