//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock) and
//! display formatting from session and page logic.

pub mod clock;
pub mod format;
pub mod in_flight;
pub mod storage;
