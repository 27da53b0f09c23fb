/// Side length of every board.
pub const BOARD_SIZE: usize = 6;

/// Vessel lengths placed on each board, in placement order.
pub const FLEET: [usize; 6] = [3, 2, 2, 1, 1, 1];

/// Number of vessels in the fleet.
pub const FLEET_SIZE: usize = FLEET.len();

/// Total number of cells occupied by the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1;

/// Random placements tried for a single vessel before the board is discarded.
pub const PLACEMENT_ATTEMPTS: usize = 1000;
