//! Office floor plan: tile grid and room table.

pub const MAP_WIDTH: usize = 20;
pub const MAP_HEIGHT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tile {
    Empty = 0,
    Floor = 1,
    Wall = 2,
    Door = 3,
    Desk = 4,
    Chair = 5,
    Plant = 6,
    Bookshelf = 7,
    Computer = 8,
    Trophy = 9,
    Carpet = 10,
    Entrance = 11,
}

impl Tile {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Tile> {
        Some(match code {
            0 => Tile::Empty,
            1 => Tile::Floor,
            2 => Tile::Wall,
            3 => Tile::Door,
            4 => Tile::Desk,
            5 => Tile::Chair,
            6 => Tile::Plant,
            7 => Tile::Bookshelf,
            8 => Tile::Computer,
            9 => Tile::Trophy,
            10 => Tile::Carpet,
            11 => Tile::Entrance,
            _ => return None,
        })
    }

    /// Walls, furniture you cannot step on, and the void.
    pub const fn is_solid(self) -> bool {
        matches!(self, Tile::Wall | Tile::Desk | Tile::Bookshelf | Tile::Trophy | Tile::Empty)
    }
}

const F: Tile = Tile::Floor;
const W: Tile = Tile::Wall;
const D: Tile = Tile::Door;
const K: Tile = Tile::Desk;
const C: Tile = Tile::Chair;
const P: Tile = Tile::Plant;
const B: Tile = Tile::Bookshelf;
const M: Tile = Tile::Computer;
const T: Tile = Tile::Trophy;
const R: Tile = Tile::Carpet;
const E: Tile = Tile::Entrance;

#[rustfmt::skip]
pub static LAYOUT: [[Tile; MAP_WIDTH]; MAP_HEIGHT] = [
    [W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W],
    [W, F, F, F, F, W, F, F, F, F, W, F, F, F, F, F, F, F, F, W],
    [W, F, M, K, F, W, F, B, B, F, W, F, P, F, F, T, T, F, P, W],
    [W, F, C, F, F, D, F, F, F, F, D, F, F, F, F, F, F, F, F, W],
    [W, F, F, F, F, W, F, P, F, F, W, F, F, K, M, F, K, M, F, W],
    [W, W, W, D, W, W, W, W, D, W, W, W, W, W, W, D, W, W, W, W],
    [W, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, W],
    [W, F, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, F, W],
    [W, F, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, F, W],
    [W, F, F, F, F, F, F, F, E, E, E, E, F, F, F, F, F, F, F, W],
    [W, P, F, K, C, F, W, F, F, F, F, F, F, W, F, B, B, B, P, W],
    [W, F, F, M, F, F, D, F, F, P, P, F, F, D, F, F, F, F, F, W],
    [W, F, F, F, F, F, W, F, F, F, F, F, F, W, F, F, C, K, F, W],
    [W, F, P, F, P, F, W, F, F, F, F, F, F, W, F, F, F, M, F, W],
    [W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W],
];

/// Inclusive tile rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Bounds {
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub bounds: Bounds,
    pub doors: &'static [(i32, i32)],
    pub description: &'static str,
}

impl Room {
    /// Rooms that open a content modal when you interact inside them.
    pub fn is_interactive(&self) -> bool {
        self.id != "reception"
    }
}

const fn bounds(x1: i32, y1: i32, x2: i32, y2: i32) -> Bounds {
    Bounds { x1, y1, x2, y2 }
}

pub static ROOMS: [Room; 7] = [
    Room {
        id: "office",
        name: "Meu Escritório",
        icon: "💼",
        bounds: bounds(1, 1, 4, 4),
        doors: &[(5, 3)],
        description: "Sobre mim",
    },
    Room {
        id: "library",
        name: "Biblioteca",
        icon: "📚",
        bounds: bounds(6, 1, 9, 4),
        doors: &[(8, 5)],
        description: "Artigos Técnicos",
    },
    Room {
        id: "trophy",
        name: "Sala de Troféus",
        icon: "🏆",
        bounds: bounds(11, 1, 18, 4),
        doors: &[(10, 3)],
        description: "Experiência",
    },
    Room {
        id: "reception",
        name: "Recepção",
        icon: "🏠",
        bounds: bounds(1, 6, 18, 9),
        doors: &[],
        description: "Bem-vindo!",
    },
    Room {
        id: "projects",
        name: "Sala de Projetos",
        icon: "💻",
        bounds: bounds(1, 10, 5, 13),
        doors: &[(6, 11)],
        description: "Projetos Open Source",
    },
    Room {
        id: "meeting",
        name: "Sala de Reuniões",
        icon: "🤝",
        bounds: bounds(7, 10, 12, 13),
        doors: &[(13, 11)],
        description: "Contato",
    },
    Room {
        id: "skills",
        name: "Sala de Skills",
        icon: "⚡",
        bounds: bounds(14, 10, 18, 13),
        doors: &[(15, 5)],
        description: "Tecnologias",
    },
];

/// Tile at `(x, y)`; anything off the grid reads as a wall.
pub fn tile_at(x: i32, y: i32) -> Tile {
    if x < 0 || y < 0 {
        return Tile::Wall;
    }
    LAYOUT
        .get(y as usize)
        .and_then(|row| row.get(x as usize))
        .copied()
        .unwrap_or(Tile::Wall)
}

pub fn is_walkable(x: i32, y: i32) -> bool {
    !tile_at(x, y).is_solid()
}

pub fn room_at(x: i32, y: i32) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.bounds.contains(x, y))
}

pub fn room_by_id(id: &str) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.id == id)
}

/// First room with a door tile within one step (Manhattan) of `(x, y)`.
pub fn near_door(x: i32, y: i32) -> Option<&'static Room> {
    ROOMS.iter().find(|room| {
        room.doors
            .iter()
            .any(|&(dx, dy)| (x - dx).abs() + (y - dy).abs() <= 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_is_wall() {
        assert_eq!(tile_at(-1, 0), Tile::Wall);
        assert_eq!(tile_at(0, -1), Tile::Wall);
        assert_eq!(tile_at(20, 5), Tile::Wall);
        assert_eq!(tile_at(5, 15), Tile::Wall);
        assert!(!is_walkable(25, 25));
    }

    #[test]
    fn test_furniture_blocks_but_chairs_do_not() {
        assert_eq!(tile_at(3, 2), Tile::Desk);
        assert!(!is_walkable(3, 2));
        assert_eq!(tile_at(2, 3), Tile::Chair);
        assert!(is_walkable(2, 3));
        assert!(!is_walkable(7, 2)); // bookshelf
        assert!(!is_walkable(15, 2)); // trophy
        assert!(is_walkable(8, 9)); // entrance mat
    }

    #[test]
    fn test_doors_sit_on_walls_between_rooms() {
        for room in &ROOMS {
            for &(x, y) in room.doors {
                assert_eq!(tile_at(x, y), Tile::Door, "{} door at ({x},{y})", room.id);
            }
        }
    }

    #[test]
    fn test_room_lookup() {
        assert_eq!(room_at(10, 8).map(|r| r.id), Some("reception"));
        assert_eq!(room_at(2, 2).map(|r| r.id), Some("office"));
        assert_eq!(room_at(5, 3), None); // doorway
        assert_eq!(near_door(5, 2).map(|r| r.id), Some("office"));
        assert_eq!(near_door(15, 6).map(|r| r.id), Some("skills"));
        assert_eq!(near_door(10, 8), None);
    }

    #[test]
    fn test_reception_is_not_interactive() {
        assert!(!room_by_id("reception").unwrap().is_interactive());
        assert!(room_by_id("library").unwrap().is_interactive());
    }
}
