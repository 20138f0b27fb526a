//! # pocketsky settings
//!
//! [`SkySettings`] is the small, `Copy` configuration object handed to the
//! [`EphemerisEngine`](crate::ephemeris::EphemerisEngine) and the
//! [`BoundaryIndex`](crate::boundary::BoundaryIndex) at construction time.
//! It is never mutated afterwards: both components are immutable once built.
//!
//! ```rust
//! use pocketsky::settings::SkySettings;
//!
//! let settings = SkySettings::default()
//!     .with_kepler_max_iterations(50)
//!     .with_boundary_epsilon_deg(1e-4);
//! assert_eq!(settings.kepler_max_iterations, 50);
//! ```

use crate::constants::{Degree, BOUNDARY_EPS_DEG, KEPLER_MAX_ITERATIONS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkySettings {
    /// Cap on Newton-Raphson iterations when solving Kepler's equation.
    pub kepler_max_iterations: usize,
    /// Slack (degrees) applied to box tests and to the unwrapped-RA range check.
    pub boundary_epsilon_deg: Degree,
}

impl Default for SkySettings {
    fn default() -> Self {
        Self {
            kepler_max_iterations: KEPLER_MAX_ITERATIONS,
            boundary_epsilon_deg: BOUNDARY_EPS_DEG,
        }
    }
}

impl SkySettings {
    pub fn with_kepler_max_iterations(mut self, iterations: usize) -> Self {
        self.kepler_max_iterations = iterations.max(1);
        self
    }

    pub fn with_boundary_epsilon_deg(mut self, eps: Degree) -> Self {
        self.boundary_epsilon_deg = eps.abs();
        self
    }
}
