//! Pixel-art sprites, room labels and the minimap, drawn on a 2D canvas.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::game::Layout;
use super::map::{LAYOUT, MAP_HEIGHT, MAP_WIDTH, ROOMS, Tile};
use super::player::{Direction, Player};

const BACKGROUND: &str = "#0a0a0f";
const FLOOR: &str = "#2d2d44";
const FLOOR_GRID: &str = "#252538";
const WALL: &str = "#1a1a2e";
const BRICK: &str = "#16213e";
const DOOR: &str = "#4fc3f7";
const WOOD: &str = "#5c4033";
const PLAYER_DOT: &str = "#ff5722";
const BOOK_COLORS: [&str; 5] = ["#e53935", "#1e88e5", "#43a047", "#fb8c00", "#8e24aa"];

fn rect(ctx: &CanvasRenderingContext2d, color: &str, x: f64, y: f64, w: f64, h: f64) {
    ctx.set_fill_style_str(color);
    ctx.fill_rect(x, y, w, h);
}

fn disc(ctx: &CanvasRenderingContext2d, color: &str, x: f64, y: f64, r: f64) {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, TAU).ok();
    ctx.fill();
}

fn floor(ctx: &CanvasRenderingContext2d, x: f64, y: f64, s: f64) {
    rect(ctx, FLOOR, x, y, s, s);
    ctx.set_stroke_style_str(FLOOR_GRID);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(x, y, s, s);
}

/// Draw one tile with its top-left corner at `(x, y)` in map pixels.
pub fn draw_tile(ctx: &CanvasRenderingContext2d, tile: Tile, x: f64, y: f64, s: f64) {
    let half = s / 2.0;
    match tile {
        Tile::Empty => {}
        Tile::Floor => floor(ctx, x, y, s),
        Tile::Wall => {
            rect(ctx, WALL, x, y, s, s);
            let b = half - 3.0;
            rect(ctx, BRICK, x + 2.0, y + 2.0, b, b);
            rect(ctx, BRICK, x + half + 1.0, y + half + 1.0, b, b);
            rect(ctx, BRICK, x + half + 1.0, y + 2.0, b, b);
            rect(ctx, BRICK, x + 2.0, y + half + 1.0, b, b);
        }
        Tile::Door => {
            floor(ctx, x, y, s);
            rect(ctx, DOOR, x + 4.0, y, s - 8.0, 4.0);
            rect(ctx, "rgba(79, 195, 247, 0.3)", x + 2.0, y + 4.0, s - 4.0, s - 4.0);
        }
        Tile::Desk => {
            floor(ctx, x, y, s);
            rect(ctx, WOOD, x + 2.0, y + 8.0, s - 4.0, s - 12.0);
            rect(ctx, "#3e2723", x + 4.0, y + s - 6.0, 4.0, 4.0);
            rect(ctx, "#3e2723", x + s - 8.0, y + s - 6.0, 4.0, 4.0);
        }
        Tile::Chair => {
            floor(ctx, x, y, s);
            rect(ctx, "#424242", x + 6.0, y + 10.0, s - 12.0, s - 14.0);
            rect(ctx, "#303030", x + 8.0, y + 4.0, s - 16.0, 8.0);
        }
        Tile::Plant => {
            floor(ctx, x, y, s);
            rect(ctx, "#8d6e63", x + 8.0, y + s - 10.0, s - 16.0, 8.0);
            disc(ctx, "#2e7d32", x + half, y + half - 2.0, 10.0);
            disc(ctx, "#388e3c", x + half - 4.0, y + half - 6.0, 6.0);
            disc(ctx, "#388e3c", x + half + 4.0, y + half - 4.0, 5.0);
        }
        Tile::Bookshelf => {
            floor(ctx, x, y, s);
            rect(ctx, WOOD, x + 2.0, y + 2.0, s - 4.0, s - 4.0);
            for (i, color) in BOOK_COLORS.iter().enumerate() {
                rect(ctx, color, x + 4.0 + i as f64 * 5.0, y + 4.0, 4.0, s - 10.0);
            }
        }
        Tile::Computer => {
            floor(ctx, x, y, s);
            rect(ctx, "#212121", x + 4.0, y + 4.0, s - 8.0, s - 14.0);
            rect(ctx, DOOR, x + 6.0, y + 6.0, s - 12.0, s - 20.0);
            rect(ctx, "#424242", x + half - 3.0, y + s - 10.0, 6.0, 4.0);
            rect(ctx, "#424242", x + half - 6.0, y + s - 6.0, 12.0, 2.0);
        }
        Tile::Trophy => {
            floor(ctx, x, y, s);
            rect(ctx, "#ffd700", x + 8.0, y + 6.0, s - 16.0, s - 16.0);
            rect(ctx, "#ffd700", x + 4.0, y + 8.0, 4.0, 8.0);
            rect(ctx, "#ffd700", x + s - 8.0, y + 8.0, 4.0, 8.0);
            rect(ctx, WOOD, x + 6.0, y + s - 8.0, s - 12.0, 6.0);
        }
        Tile::Carpet => {
            rect(ctx, "#3d3d5c", x, y, s, s);
            rect(ctx, "#4a4a6a", x + 4.0, y + 4.0, s - 8.0, s - 8.0);
        }
        Tile::Entrance => {
            floor(ctx, x, y, s);
            rect(ctx, "#7c4dff", x + 2.0, y + 2.0, s - 4.0, s - 4.0);
            rect(ctx, "#9575cd", x + 4.0, y + 4.0, s - 8.0, s - 8.0);
        }
    }
}

pub fn draw_player(ctx: &CanvasRenderingContext2d, player: &Player) {
    let (x, y, s) = (player.x, player.y, player.tile_size);

    ctx.set_fill_style_str("rgba(0, 0, 0, 0.3)");
    ctx.begin_path();
    ctx.ellipse(x + s / 2.0, y + s - 4.0, s / 3.0, s / 6.0, 0.0, 0.0, TAU).ok();
    ctx.fill();

    rect(ctx, "#4fc3f7", x + 8.0, y + 12.0, s - 16.0, s - 16.0);
    rect(ctx, "#ffcc80", x + 10.0, y + 4.0, s - 20.0, 10.0);

    ctx.set_fill_style_str("#212121");
    match player.direction {
        Direction::Down => {
            ctx.fill_rect(x + 12.0, y + 8.0, 3.0, 3.0);
            ctx.fill_rect(x + s - 15.0, y + 8.0, 3.0, 3.0);
        }
        Direction::Left => ctx.fill_rect(x + 10.0, y + 8.0, 3.0, 3.0),
        Direction::Right => ctx.fill_rect(x + s - 13.0, y + 8.0, 3.0, 3.0),
        Direction::Up => {}
    }

    rect(ctx, "#5d4037", x + 10.0, y + 2.0, s - 20.0, 4.0);
}

fn draw_room_label(ctx: &CanvasRenderingContext2d, text: &str, x: f64, y: f64) {
    ctx.set_font("10px \"Press Start 2P\"");
    let width = ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0);
    rect(ctx, "rgba(0, 0, 0, 0.7)", x - width / 2.0 - 6.0, y - 8.0, width + 12.0, 18.0);
    ctx.set_fill_style_str(DOOR);
    ctx.set_text_align("center");
    ctx.fill_text(text, x, y + 4.0).ok();
}

/// Full frame: background, tiles, room labels and the player, through `layout`.
pub fn draw_scene(
    ctx: &CanvasRenderingContext2d,
    layout: &Layout,
    tile_size: f64,
    player: Option<&Player>,
) {
    rect(ctx, BACKGROUND, 0.0, 0.0, layout.canvas_width, layout.canvas_height);

    ctx.save();
    ctx.translate(layout.offset_x, layout.offset_y).ok();
    ctx.scale(layout.scale, layout.scale).ok();

    for (ty, row) in LAYOUT.iter().enumerate() {
        for (tx, &tile) in row.iter().enumerate() {
            draw_tile(ctx, tile, tx as f64 * tile_size, ty as f64 * tile_size, tile_size);
        }
    }
    for room in &ROOMS {
        let b = room.bounds;
        let cx = f64::from(b.x1 + b.x2) / 2.0 * tile_size;
        let cy = f64::from(b.y1) * tile_size - 5.0;
        draw_room_label(ctx, room.name, cx, cy);
    }
    if let Some(player) = player {
        draw_player(ctx, player);
    }

    ctx.restore();
}

/// Minimap: walls, doors, other non-empty tiles and a dot for the player.
pub fn draw_minimap(
    ctx: &CanvasRenderingContext2d,
    player_tile: (i32, i32),
    width: f64,
    height: f64,
    tile_size: f64,
) {
    let scale = (width / (MAP_WIDTH as f64 * tile_size)).min(height / (MAP_HEIGHT as f64 * tile_size));
    let cell = tile_size * scale;
    ctx.clear_rect(0.0, 0.0, width, height);

    for (ty, row) in LAYOUT.iter().enumerate() {
        for (tx, &tile) in row.iter().enumerate() {
            let color = match tile {
                Tile::Empty => continue,
                Tile::Wall => WALL,
                Tile::Door => DOOR,
                _ => FLOOR,
            };
            rect(ctx, color, tx as f64 * cell, ty as f64 * cell, cell, cell);
        }
    }

    let (px, py) = player_tile;
    disc(
        ctx,
        PLAYER_DOT,
        f64::from(px) * cell + cell / 2.0,
        f64::from(py) * cell + cell / 2.0,
        4.0,
    );
}
