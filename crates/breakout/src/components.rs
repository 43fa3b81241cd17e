//! Game-specific components
//!
//! Object types are marker components: the blueprint that built an entity
//! tags it so collision handling can tell a floor from a brick.

use scene_engine::prelude::*;

/// Player paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paddle;

impl Component for Paddle {
    const NAME: &'static str = "paddle";
}

/// Ball, remembering the paddle it rests on between launches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    /// Paddle the ball returns to on reset
    pub paddle: Entity,
}

impl Component for Ball {
    const NAME: &'static str = "ball";
}

/// Destructible brick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Brick {
    /// Grid row, counted from the top
    pub row: u32,
    /// Grid column, counted from the left
    pub column: u32,
}

impl Component for Brick {
    const NAME: &'static str = "brick";
}

/// Which boundary a wall forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// Left boundary (-X)
    Left,
    /// Right boundary (+X)
    Right,
    /// Top boundary (+Y)
    Roof,
}

/// Static playfield boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    /// Boundary this wall forms
    pub side: WallSide,
}

impl Component for Wall {
    const NAME: &'static str = "wall";
}

/// Ground below the paddle; touching it loses the ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Floor;

impl Component for Floor {
    const NAME: &'static str = "floor";
}

/// Scene light
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalLight;

impl Component for DirectionalLight {
    const NAME: &'static str = "directionallight";
}
