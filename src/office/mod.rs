//! Office explorer: a top-down pixel-art office where each room opens a
//! portfolio section.
//!
//! [`map`] holds the 20x15 floor plan and the room table, [`player`] the
//! tile-stepped avatar, [`game`] the session (location tracking, modal,
//! canvas fit) and [`render`] the canvas drawing. [`dom`] wires it all to
//! `game.html`.

pub mod dom;
pub mod game;
pub mod map;
pub mod player;
pub mod render;
pub mod rooms;

pub use game::{Frame, Game, Layout};
pub use map::{Room, Tile};
pub use player::{Direction, Input, Key, Player};
