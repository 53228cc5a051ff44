//! Rollover speed limiting for articulated dump trucks.
//!
//! Every control cycle the [`RolloverGuard`] takes a [`MachineInputs`] snapshot (ground roll,
//! machine and payload weights, articulation) and derives:
//!
//! 1. the combined CG height ([`cg`]),
//! 2. the lateral acceleration the machine can take before rolling over ([`lateral`]),
//! 3. the turn radius from the articulation angle ([`turn`]),
//! 4. the speed that keeps the cornering acceleration under that limit ([`speed`]),
//!
//! then forces the speed to zero on a statically unstable slope and clamps it to the
//! configured maximum otherwise.
//!
//! # Examples
//!
//! ```
//! use cu_adt_rollover::{presets, MachineInputs, RolloverGuard};
//!
//! let guard = RolloverGuard::new(presets::adt_30t()).unwrap();
//! let limits = guard.cycle(&MachineInputs::new(0.0, 22_000.0, 28_000.0, 0.0));
//! assert!(!limits.statically_unstable);
//! assert_eq!(limits.speed_limit_kph, 50.0);
//! ```

pub mod cg;
pub mod error;
pub mod guard;
pub mod lateral;
pub mod params;
pub mod presets;
pub mod speed;
pub mod turn;
pub mod units;

pub use cu_adt_payloads::{MachineInputs, SpeedConstraint, StabilityLimits};
pub use error::{RolloverError, RolloverResult};
pub use guard::{validate_inputs, RolloverGuard};
pub use lateral::LateralLimit;
pub use params::MachineParameters;
pub use speed::SpeedLimit;
pub use turn::TurnRadius;
