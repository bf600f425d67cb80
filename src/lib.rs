//! Elevator Simulation Library
//!
//! Dispatch and scheduling of elevator cars against pickup and drop-off
//! demand, runnable headless or with demand typed in at the console.

pub mod simulation;
