//! Engine constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed lattice dimension along any axis
pub const MAX_LATTICE_DIMENSION: usize = 4_096;

// Entropy values are sums over the same weight table, so genuine ties are
// bit-identical; the epsilon only absorbs summation-order noise
/// Tolerance when collecting minimum-entropy ties
pub const ENTROPY_TIE_EPSILON: f64 = 1e-9;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default lattice width in cells
pub const DEFAULT_WIDTH: usize = 48;

/// Default lattice height in cells
pub const DEFAULT_HEIGHT: usize = 32;

// Output settings
/// Default output path for the demo CLI
pub const DEFAULT_OUTPUT: &str = "wavelattice.png";

/// Pixels rendered per lattice cell in exported images
pub const CELL_PIXEL_SIZE: usize = 8;
