//! Four-way camera controller
//!
//! The camera circles the player in 90° steps. Each facing places the eye
//! on one side of the player and the look-at point one unit past the player
//! on the opposite side, so the camera always looks back toward the player
//! from outside. Both points are derived from a single per-facing unit
//! offset to keep that relationship exact.

use crate::math::Point;

/// Distance from the player to the camera eye on the ground plane
pub const EYE_DISTANCE: f32 = 7.0;
/// Height of the camera eye
pub const EYE_HEIGHT: f32 = 6.0;
/// Distance from the player to the look-at point, opposite the eye
pub const LOOK_DISTANCE: f32 = 1.0;
/// Height of the look-at point
pub const LOOK_HEIGHT: f32 = 0.5;

/// One of four fixed viewing directions around the player.
///
/// North is the -z side of the grid. Turning right steps clockwise
/// (North, East, South, West) and wraps; turning left is the inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Camera on the -z side, looking toward +z
    North,
    /// Camera on the +x side, looking toward -x
    East,
    /// Camera on the +z side, looking toward -z
    South,
    /// Camera on the -x side, looking toward +x
    West,
}

impl Facing {
    /// Step one facing counter-clockwise
    pub fn turn_left(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::East => Facing::North,
            Facing::South => Facing::East,
            Facing::West => Facing::South,
        }
    }

    /// Step one facing clockwise
    pub fn turn_right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// Numeric state, 0-3
    pub fn index(self) -> u8 {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }

    /// Unit offset from the player toward the eye, on the XZ plane
    fn offset(self) -> (f32, f32) {
        match self {
            Facing::North => (0.0, -1.0),
            Facing::East => (1.0, 0.0),
            Facing::South => (0.0, 1.0),
            Facing::West => (-1.0, 0.0),
        }
    }

    /// Camera eye point for a player at `player`
    pub fn eye_point(self, player: Point) -> Point {
        let (dx, dz) = self.offset();
        Point::new(
            player.x + dx * EYE_DISTANCE,
            EYE_HEIGHT,
            player.z + dz * EYE_DISTANCE,
        )
    }

    /// Look-at point: one unit past the player, away from the eye
    pub fn look_at_point(self, player: Point) -> Point {
        let (dx, dz) = self.offset();
        Point::new(
            player.x - dx * LOOK_DISTANCE,
            LOOK_HEIGHT,
            player.z - dz * LOOK_DISTANCE,
        )
    }
}

impl Default for Facing {
    /// The demo starts looking from the east side
    fn default() -> Self {
        Facing::East
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    #[test]
    fn test_turn_right_cycles_through_all_states() {
        let mut facing = Facing::North;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(facing);
            facing = facing.turn_right();
        }
        assert_eq!(facing, Facing::North); // wrapped around
        assert_eq!(seen, ALL.to_vec());
    }

    #[test]
    fn test_turn_left_wraps_backward() {
        // Decrementing past state 0 must land on state 3
        assert_eq!(Facing::North.turn_left(), Facing::West);
        assert_eq!(Facing::North.turn_left().index(), 3);
    }

    #[test]
    fn test_turns_are_inverses() {
        for facing in ALL {
            assert_eq!(facing.turn_left().turn_right(), facing);
            assert_eq!(facing.turn_right().turn_left(), facing);
        }
    }

    #[test]
    fn test_index_stays_in_range() {
        // Any mix of turns keeps the state within 0-3
        let mut facing = Facing::default();
        for step in 0..12 {
            facing = if step % 3 == 0 {
                facing.turn_left()
            } else {
                facing.turn_right()
            };
            assert!(facing.index() < 4);
        }
    }

    #[test]
    fn test_eye_and_look_offsets_are_opposed() {
        // The one nontrivial geometric invariant: the eye offset and the
        // look offset lie on the same axis with opposite signs.
        let player = Point::new(3.5, 0.5, 2.5);
        for facing in ALL {
            let eye = facing.eye_point(player);
            let look = facing.look_at_point(player);
            let eye_dx = eye.x - player.x;
            let eye_dz = eye.z - player.z;
            let look_dx = look.x - player.x;
            let look_dz = look.z - player.z;

            // Same axis: the orthogonal components are zero on both points
            assert!((eye_dx * eye_dz).abs() < 0.001);
            assert!((look_dx * look_dz).abs() < 0.001);
            // Opposite signs, fixed magnitudes
            assert!((eye_dx + look_dx * EYE_DISTANCE).abs() < 0.001);
            assert!((eye_dz + look_dz * EYE_DISTANCE).abs() < 0.001);
        }
    }

    #[test]
    fn test_geometry_matches_reference_table() {
        let p = Point::new(10.0, 0.5, 20.0);

        let eye = Facing::North.eye_point(p);
        assert!((eye.x - 10.0).abs() < 0.001);
        assert!((eye.y - 6.0).abs() < 0.001);
        assert!((eye.z - 13.0).abs() < 0.001);
        let look = Facing::North.look_at_point(p);
        assert!((look.x - 10.0).abs() < 0.001);
        assert!((look.y - 0.5).abs() < 0.001);
        assert!((look.z - 21.0).abs() < 0.001);

        let eye = Facing::South.eye_point(p);
        assert!((eye.z - 27.0).abs() < 0.001);
        let look = Facing::South.look_at_point(p);
        assert!((look.z - 19.0).abs() < 0.001);

        let eye = Facing::West.eye_point(p);
        assert!((eye.x - 3.0).abs() < 0.001);
        let look = Facing::West.look_at_point(p);
        assert!((look.x - 11.0).abs() < 0.001);
    }

    #[test]
    fn test_worked_example_facing_east() {
        // Player from the "2 1 / 1 3" reference map
        let player = Point::new(1.5, 0.5, 0.5);
        let eye = Facing::East.eye_point(player);
        assert!((eye.x - 8.5).abs() < 0.001);
        assert!((eye.y - 6.0).abs() < 0.001);
        assert!((eye.z - 0.5).abs() < 0.001);
        let look = Facing::East.look_at_point(player);
        assert!((look.x - 0.5).abs() < 0.001);
        assert!((look.y - 0.5).abs() < 0.001);
        assert!((look.z - 0.5).abs() < 0.001);
    }
}
