use std::time::Duration;

use crate::snake::{Direction, Point};

pub const GRID_SIZE: usize = 40;

pub const START_POSITION: Point = Point { x: 20, y: 20 };
pub const START_DIRECTION: Direction = Direction::Right;
pub const START_FOOD: Point = Point { x: 30, y: 20 };

pub const FOOD_POINTS: u32 = 10;
pub const BLINK_PERIOD: u32 = 20;

pub const NORMAL_TICK: Duration = Duration::from_millis(150);
pub const ACCELERATED_TICK: Duration = Duration::from_millis(70);
pub const POINTER_TICK: Duration = Duration::from_millis(75);
