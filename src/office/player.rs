//! Player avatar: tile-stepped movement with pixel interpolation.

use super::map::{self, Room};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Move(Direction),
    Interact,
}

impl Key {
    /// Map a `KeyboardEvent.key` value: arrows, WASD in either case, Space, Enter.
    pub fn from_key_name(name: &str) -> Option<Key> {
        Some(match name {
            "ArrowUp" | "w" | "W" => Key::Move(Direction::Up),
            "ArrowDown" | "s" | "S" => Key::Move(Direction::Down),
            "ArrowLeft" | "a" | "A" => Key::Move(Direction::Left),
            "ArrowRight" | "d" | "D" => Key::Move(Direction::Right),
            " " | "Enter" => Key::Interact,
            _ => return None,
        })
    }
}

/// Held-key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub interact: bool,
}

impl Input {
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Move(Direction::Up) => self.up = pressed,
            Key::Move(Direction::Down) => self.down = pressed,
            Key::Move(Direction::Left) => self.left = pressed,
            Key::Move(Direction::Right) => self.right = pressed,
            Key::Interact => self.interact = pressed,
        }
    }

    /// Requested direction, up > down > left > right.
    pub fn direction(&self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub tile_x: i32,
    pub tile_y: i32,
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub tile_size: f64,
    pub speed: f64,
    pub direction: Direction,
    pub moving: bool,
    pub input: Input,
    /// One-shot step queued by a click or tap.
    pending_step: Option<Direction>,
}

impl Player {
    pub fn new(tile_x: i32, tile_y: i32, tile_size: f64, speed: f64) -> Self {
        let x = f64::from(tile_x) * tile_size;
        let y = f64::from(tile_y) * tile_size;
        Self {
            tile_x,
            tile_y,
            x,
            y,
            target_x: x,
            target_y: y,
            tile_size,
            speed,
            direction: Direction::Down,
            moving: false,
            input: Input::default(),
            pending_step: None,
        }
    }

    /// Advance one frame. Returns the room under the player.
    pub fn update(&mut self) -> Option<&'static Room> {
        if !self.moving {
            let queued = self.pending_step.take();
            if let Some(dir) = self.input.direction().or(queued) {
                self.direction = dir;
                let (dx, dy) = dir.delta();
                let (nx, ny) = (self.tile_x + dx, self.tile_y + dy);
                if map::is_walkable(nx, ny) {
                    self.tile_x = nx;
                    self.tile_y = ny;
                    self.target_x = f64::from(nx) * self.tile_size;
                    self.target_y = f64::from(ny) * self.tile_size;
                    self.moving = true;
                }
            }
        }

        if self.moving {
            let dx = self.target_x - self.x;
            let dy = self.target_y - self.y;
            let dist = dx.hypot(dy);
            if dist < self.speed {
                self.x = self.target_x;
                self.y = self.target_y;
                self.moving = false;
            } else {
                self.x += dx / dist * self.speed;
                self.y += dy / dist * self.speed;
            }
        }

        map::room_at(self.tile_x, self.tile_y)
    }

    /// The room the player may open, i.e. any room except the reception.
    pub fn can_interact(&self) -> Option<&'static Room> {
        map::room_at(self.tile_x, self.tile_y).filter(|room| room.is_interactive())
    }

    /// Queue a single step toward `(tx, ty)` along the dominant axis.
    /// Ignored when the target tile itself is not walkable.
    pub fn step_toward(&mut self, tx: i32, ty: i32) -> Option<Direction> {
        if !map::is_walkable(tx, ty) {
            return None;
        }
        let dx = tx - self.tile_x;
        let dy = ty - self.tile_y;
        let dir = if dx.abs() > dy.abs() {
            if dx > 0 { Direction::Right } else { Direction::Left }
        } else if dy > 0 {
            Direction::Down
        } else if dy < 0 {
            Direction::Up
        } else {
            return None;
        };
        self.pending_step = Some(dir);
        Some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(p: &mut Player) {
        for _ in 0..64 {
            p.update();
            if !p.moving {
                break;
            }
        }
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("W"), Some(Key::Move(Direction::Up)));
        assert_eq!(Key::from_key_name("ArrowRight"), Some(Key::Move(Direction::Right)));
        assert_eq!(Key::from_key_name(" "), Some(Key::Interact));
        assert_eq!(Key::from_key_name("q"), None);
    }

    #[test]
    fn test_input_priority() {
        let input = Input { left: true, down: true, right: true, ..Default::default() };
        assert_eq!(input.direction(), Some(Direction::Down));
    }

    #[test]
    fn test_step_interpolates_then_snaps() {
        let mut p = Player::new(10, 8, 32.0, 3.0);
        p.input.right = true;
        p.update();
        assert!(p.moving);
        assert_eq!(p.tile_x, 11);
        assert_eq!(p.x, 323.0);
        p.input.right = false;
        settle(&mut p);
        assert_eq!((p.x, p.y), (352.0, 256.0));
        assert_eq!(p.direction, Direction::Right);
    }

    #[test]
    fn test_blocked_step_only_turns() {
        // (1, 1) has a wall above it
        let mut p = Player::new(1, 1, 32.0, 3.0);
        p.input.up = true;
        p.update();
        assert!(!p.moving);
        assert_eq!(p.direction, Direction::Up);
        assert_eq!((p.tile_x, p.tile_y), (1, 1));
    }

    #[test]
    fn test_step_toward_uses_dominant_axis() {
        let mut p = Player::new(10, 8, 32.0, 3.0);
        assert_eq!(p.step_toward(14, 7), Some(Direction::Right));
        p.update();
        assert_eq!(p.tile_x, 11);
        settle(&mut p);
        assert_eq!(p.step_toward(11, 6), Some(Direction::Up));
        assert_eq!(p.step_toward(0, 0), None);
        assert_eq!(p.step_toward(11, 8), None);
    }

    #[test]
    fn test_reception_is_not_interactive() {
        let p = Player::new(10, 8, 32.0, 3.0);
        assert!(p.can_interact().is_none());
        let p = Player::new(2, 2, 32.0, 3.0);
        assert_eq!(p.can_interact().map(|r| r.id), Some("office"));
    }
}
