//! Game session: player, current location, modal and canvas fit.

use super::map::{self, MAP_HEIGHT, MAP_WIDTH, Room};
use super::player::{Key, Player};
use super::rooms::{self, RoomContent};
use crate::config::GameConfig;

pub const SPAWN: (i32, i32) = (10, 8);

/// Map-to-canvas transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Layout {
    /// Fit the whole map inside the canvas at `fit_ratio` of the best scale, centered.
    pub fn fit(canvas_width: f64, canvas_height: f64, config: &GameConfig) -> Self {
        let map_w = MAP_WIDTH as f64 * config.tile_size;
        let map_h = MAP_HEIGHT as f64 * config.tile_size;
        let scale = (canvas_width / map_w).min(canvas_height / map_h) * config.fit_ratio;
        Self {
            canvas_width,
            canvas_height,
            scale,
            offset_x: (canvas_width - map_w * scale) / 2.0,
            offset_y: (canvas_height - map_h * scale) / 2.0,
        }
    }

    /// Tile under a canvas-space point.
    pub fn tile_at_point(&self, px: f64, py: f64, tile_size: f64) -> (i32, i32) {
        let size = tile_size * self.scale;
        (
            ((px - self.offset_x) / size).floor() as i32,
            ((py - self.offset_y) / size).floor() as i32,
        )
    }
}

/// What the binding has to reflect in the page after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// Set when the player walked into a different room.
    pub entered: Option<&'static Room>,
    /// Room offered by the interaction prompt, if any.
    pub prompt: Option<&'static Room>,
    /// Modal to open this frame.
    pub opened: Option<&'static RoomContent>,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    player: Option<Player>,
    current_room: Option<&'static str>,
    modal: Option<&'static str>,
    layout: Layout,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let layout = Layout::fit(
            MAP_WIDTH as f64 * config.tile_size,
            MAP_HEIGHT as f64 * config.tile_size,
            &config,
        );
        Self { config, player: None, current_room: None, modal: None, layout }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout = Layout::fit(width, height, &self.config);
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.player.is_some()
    }

    /// Spawn the player in the reception. A second call is a no-op.
    pub fn start(&mut self) -> bool {
        if self.player.is_some() {
            return false;
        }
        self.player = Some(Player::new(
            SPAWN.0,
            SPAWN.1,
            self.config.tile_size,
            self.config.player_speed,
        ));
        log::info!("office game started");
        true
    }

    pub fn key(&mut self, key: Key, pressed: bool) {
        if let Some(player) = self.player.as_mut() {
            player.input.set(key, pressed);
        }
    }

    /// Click / tap at canvas coordinates: queue one step toward that tile.
    pub fn click(&mut self, px: f64, py: f64) -> bool {
        if self.modal.is_some() {
            return false;
        }
        let (tx, ty) = self.layout.tile_at_point(px, py, self.config.tile_size);
        self.player.as_mut().and_then(|p| p.step_toward(tx, ty)).is_some()
    }

    pub fn modal(&self) -> Option<&'static str> {
        self.modal
    }

    pub fn open_modal(&mut self, room_id: &str) -> Option<&'static RoomContent> {
        let content = rooms::content_for(room_id)?;
        self.modal = map::room_by_id(room_id).map(|r| r.id);
        Some(content)
    }

    pub fn close_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }

    /// One game frame. Movement is frozen while a modal is open.
    pub fn tick(&mut self) -> Frame {
        let modal_open = self.modal.is_some();
        let Some(player) = self.player.as_mut() else {
            return Frame::default();
        };
        let mut frame = Frame::default();

        if !modal_open {
            if let Some(room) = player.update() {
                if self.current_room != Some(room.id) {
                    self.current_room = Some(room.id);
                    frame.entered = Some(room);
                }
            }
        }

        frame.prompt = player.can_interact();
        if let Some(room) = frame.prompt {
            if player.input.interact && !modal_open {
                player.input.interact = false;
                frame.opened = self.open_modal(room.id);
            }
        }
        frame
    }
}

pub fn prompt_text(room: &Room) -> String {
    format!("Pressione ESPAÇO: {}", room.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::office::player::Direction;

    #[test]
    fn test_layout_fits_and_centers() {
        let cfg = GameConfig::default();
        // map is 640x480
        let layout = Layout::fit(1280.0, 720.0, &cfg);
        assert!((layout.scale - 1.35).abs() < 1e-9);
        assert!((layout.offset_x - (1280.0 - 640.0 * 1.35) / 2.0).abs() < 1e-9);
        assert!((layout.offset_y - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_maps_through_scale_and_offset() {
        let mut game = Game::new(GameConfig::default());
        game.resize(1280.0, 720.0);
        game.start();
        let l = *game.layout();
        let tile = 32.0 * l.scale;
        // centre of tile (14, 8)
        let (px, py) = (l.offset_x + 14.5 * tile, l.offset_y + 8.5 * tile);
        assert_eq!(l.tile_at_point(px, py, 32.0), (14, 8));
        assert!(game.click(px, py));
        game.tick();
        assert_eq!(game.player().unwrap().tile_x, 11);
        assert_eq!(game.player().unwrap().direction, Direction::Right);
    }

    #[test]
    fn test_entering_room_reports_once() {
        let mut game = Game::new(GameConfig::default());
        game.start();
        assert_eq!(game.tick().entered.map(|r| r.id), Some("reception"));
        assert_eq!(game.tick().entered, None);
    }

    #[test]
    fn test_modal_pauses_movement_and_consumes_interact() {
        let mut game = Game::new(GameConfig::default());
        game.start();
        game.player = Some(Player::new(2, 3, 32.0, 3.0));
        game.key(Key::Interact, true);
        let frame = game.tick();
        assert_eq!(frame.opened.map(|c| c.title), Some("Sobre Mim"));
        assert_eq!(game.modal(), Some("office"));
        assert!(!game.player().unwrap().input.interact);

        game.key(Key::Move(Direction::Down), true);
        game.tick();
        assert_eq!(game.player().unwrap().tile_y, 3);

        assert!(game.close_modal());
        game.tick();
        assert_eq!(game.player().unwrap().tile_y, 4);
    }

    #[test]
    fn test_no_modal_in_reception() {
        let mut game = Game::new(GameConfig::default());
        game.start();
        game.key(Key::Interact, true);
        let frame = game.tick();
        assert!(frame.prompt.is_none());
        assert!(frame.opened.is_none());
    }
}
