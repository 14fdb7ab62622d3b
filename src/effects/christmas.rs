//! Santa's sleigh and the Christmas scene schedule.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use web_sys::CanvasRenderingContext2d;

pub const START_Y: f64 = 80.0;
pub const ROW_HEIGHT: f64 = 120.0;
const CRUISE_SPEED: f64 = 3.0;
const BOB_AMPLITUDE: f64 = 15.0;
/// Distance past an edge before the sleigh turns around.
const TURN_MARGIN: f64 = 200.0;
const ENTRY_OFFSET: f64 = 150.0;
const SCALE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct Santa {
    pub x: f64,
    pub y: f64,
    pub row: u32,
    /// `-1.0` flying left, `1.0` flying right.
    pub direction: f64,
    pub speed: f64,
    pub time: f64,
    pub visible: bool,
}

impl Santa {
    pub fn new(width: f64) -> Self {
        Self {
            x: width + ENTRY_OFFSET,
            y: START_Y,
            row: 0,
            direction: -1.0,
            speed: CRUISE_SPEED,
            time: 0.0,
            visible: false,
        }
    }

    /// Back to the top row just past the right edge.
    pub fn reset(&mut self, width: f64) {
        self.x = width + ENTRY_OFFSET;
        self.y = START_Y;
        self.row = 0;
        self.direction = -1.0;
    }

    pub fn launch(&mut self, width: f64) {
        self.reset(width);
        self.visible = true;
    }

    fn row_y(row: u32) -> f64 {
        START_Y + f64::from(row) * ROW_HEIGHT
    }

    /// Fly one frame, zig-zagging down a row at each edge and wrapping to the
    /// top row when the next one would leave the viewport.
    pub fn update(&mut self, width: f64, height: f64) {
        if !self.visible {
            return;
        }
        self.time += 0.02;
        self.x += self.speed * self.direction;
        self.y = Self::row_y(self.row) + (self.time * 2.0).sin() * BOB_AMPLITUDE;

        let turn_at = if self.direction < 0.0 {
            (self.x < -TURN_MARGIN).then_some(-TURN_MARGIN)
        } else {
            (self.x > width + TURN_MARGIN).then_some(width + TURN_MARGIN)
        };
        if let Some(edge) = turn_at {
            self.row += 1;
            self.direction = -self.direction;
            if Self::row_y(self.row) > height - 100.0 {
                self.row = 0;
                self.x = edge;
            }
        }
    }

    /// Sleigh, reindeer and a trail of twinkling stars. `clock` drives the twinkle.
    pub fn draw(&self, ctx: &CanvasRenderingContext2d, clock: f64) {
        if !self.visible {
            return;
        }
        ctx.save();
        ctx.translate(self.x, self.y).ok();
        let flip = if self.direction > 0.0 { -SCALE } else { SCALE };
        ctx.scale(flip, SCALE).ok();

        draw_sleigh(ctx);
        draw_santa(ctx);
        draw_reindeer(ctx);

        for i in 0..5 {
            let i = f64::from(i);
            let star_x = 160.0 + i * 25.0 + (clock + i).sin() * 5.0;
            let star_y = 60.0 + (clock + i * 0.5).cos() * 10.0;
            ctx.set_fill_style_str(&format!("rgba(255, 215, 0, {})", 1.0 - i * 0.15));
            draw_star(ctx, star_x, star_y, 3.0 - i * 0.4);
        }

        ctx.restore();
    }
}

fn fill_ellipse(ctx: &CanvasRenderingContext2d, x: f64, y: f64, rx: f64, ry: f64, rotation: f64) {
    ctx.begin_path();
    ctx.ellipse(x, y, rx, ry, rotation, 0.0, TAU).ok();
    ctx.fill();
}

fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, TAU).ok();
    ctx.fill();
}

fn draw_sleigh(ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str("#8B0000");
    ctx.begin_path();
    ctx.move_to(0.0, 50.0);
    ctx.quadratic_curve_to(-20.0, 70.0, 0.0, 80.0);
    ctx.line_to(120.0, 80.0);
    ctx.quadratic_curve_to(150.0, 75.0, 140.0, 50.0);
    ctx.line_to(0.0, 50.0);
    ctx.fill();

    ctx.set_stroke_style_str("#FFD700");
    ctx.set_line_width(4.0);
    ctx.begin_path();
    ctx.move_to(-10.0, 85.0);
    ctx.quadratic_curve_to(60.0, 95.0, 150.0, 85.0);
    ctx.stroke();

    ctx.set_fill_style_str("#FFD700");
    ctx.fill_rect(5.0, 52.0, 130.0, 5.0);

    // gift bag
    ctx.set_fill_style_str("#DC143C");
    ctx.begin_path();
    ctx.move_to(100.0, 30.0);
    ctx.line_to(95.0, 55.0);
    ctx.line_to(130.0, 55.0);
    ctx.line_to(125.0, 30.0);
    ctx.close_path();
    ctx.fill();
    ctx.set_fill_style_str("#FFD700");
    ctx.fill_rect(105.0, 28.0, 15.0, 5.0);
}

fn draw_santa(ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str("#DC143C");
    fill_ellipse(ctx, 70.0, 35.0, 25.0, 30.0, 0.0);

    ctx.set_fill_style_str("#FFE4C4");
    fill_circle(ctx, 70.0, 5.0, 18.0);

    ctx.set_fill_style_str("#DC143C");
    ctx.begin_path();
    ctx.move_to(52.0, 5.0);
    ctx.line_to(70.0, -25.0);
    ctx.line_to(88.0, 5.0);
    ctx.fill();

    ctx.set_fill_style_str("#FFFFFF");
    fill_circle(ctx, 70.0, -25.0, 6.0);
    ctx.fill_rect(50.0, 0.0, 40.0, 8.0);

    // beard
    ctx.begin_path();
    ctx.move_to(55.0, 10.0);
    ctx.quadratic_curve_to(70.0, 35.0, 85.0, 10.0);
    ctx.quadratic_curve_to(70.0, 25.0, 55.0, 10.0);
    ctx.fill();

    ctx.set_fill_style_str("#000000");
    ctx.fill_rect(50.0, 35.0, 40.0, 8.0);
    ctx.set_fill_style_str("#FFD700");
    ctx.fill_rect(65.0, 33.0, 10.0, 12.0);
}

fn draw_reindeer(ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str("#8B4513");
    fill_ellipse(ctx, -60.0, 50.0, 20.0, 12.0, 0.0);
    fill_ellipse(ctx, -85.0, 40.0, 10.0, 8.0, -0.3);

    ctx.set_stroke_style_str("#8B4513");
    ctx.set_line_width(3.0);
    for (base, tip, fork, branch) in [
        ((-85.0, 32.0), (-95.0, 20.0), (-100.0, 25.0), (-90.0, 15.0)),
        ((-80.0, 32.0), (-70.0, 20.0), (-65.0, 25.0), (-75.0, 15.0)),
    ] {
        ctx.begin_path();
        ctx.move_to(base.0, base.1);
        ctx.line_to(tip.0, tip.1);
        ctx.line_to(fork.0, fork.1);
        ctx.move_to(tip.0, tip.1);
        ctx.line_to(branch.0, branch.1);
        ctx.stroke();
    }

    ctx.set_line_width(4.0);
    ctx.begin_path();
    ctx.move_to(-50.0, 58.0);
    ctx.line_to(-50.0, 75.0);
    ctx.move_to(-70.0, 58.0);
    ctx.line_to(-70.0, 75.0);
    ctx.stroke();

    ctx.set_fill_style_str("#FF0000");
    fill_circle(ctx, -95.0, 42.0, 4.0);

    // reins
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(-40.0, 50.0);
    ctx.line_to(0.0, 55.0);
    ctx.stroke();
}

fn draw_star(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, size: f64) {
    ctx.begin_path();
    for i in 0..5 {
        let angle = f64::from(i) * 4.0 * PI / 5.0 - FRAC_PI_2;
        let (x, y) = (cx + angle.cos() * size, cy + angle.sin() * size);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    ctx.fill();
}

// --- Schedule -------------------------------------------------------------

/// One step of the Christmas scene, in the order the page plays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    ShowBanner,
    ShowLights,
    StartSnow,
    LaunchSanta,
    /// Snow slows, Santa starts accelerating.
    BeginFadeOut,
    DimChrome,
    FadeCanvas,
    FinalSpeed,
    Cleanup,
}

pub const FADE_OUT_AT_MS: i32 = 30_000;
pub const ACCELERATE_EVERY_MS: i32 = 300;
pub const ACCELERATION: f64 = 0.15;

/// Milliseconds after page start at which each cue fires.
pub const SCHEDULE: [(i32, Cue); 9] = [
    (3_000, Cue::ShowBanner),
    (5_000, Cue::ShowLights),
    (6_000, Cue::StartSnow),
    (8_000, Cue::LaunchSanta),
    (FADE_OUT_AT_MS, Cue::BeginFadeOut),
    (FADE_OUT_AT_MS + 2_000, Cue::DimChrome),
    (FADE_OUT_AT_MS + 5_000, Cue::FadeCanvas),
    (FADE_OUT_AT_MS + 7_000, Cue::FinalSpeed),
    (FADE_OUT_AT_MS + 10_000, Cue::Cleanup),
];

impl Cue {
    /// Santa's speed from this cue on, if it changes it.
    pub fn santa_speed(self) -> Option<f64> {
        match self {
            Cue::BeginFadeOut => Some(4.0),
            Cue::DimChrome => Some(5.0),
            Cue::FadeCanvas => Some(7.0),
            Cue::FinalSpeed => Some(10.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_santa_does_not_move() {
        let mut santa = Santa::new(1000.0);
        santa.update(1000.0, 800.0);
        assert_eq!(santa.x, 1150.0);
    }

    #[test]
    fn test_santa_turns_down_a_row() {
        let mut santa = Santa::new(1000.0);
        santa.launch(1000.0);
        while santa.direction < 0.0 {
            santa.update(1000.0, 800.0);
        }
        assert_eq!(santa.row, 1);
        assert!(santa.x < -200.0);
        santa.update(1000.0, 800.0);
        assert!((santa.y - (START_Y + ROW_HEIGHT)).abs() <= 15.0);
    }

    #[test]
    fn test_santa_wraps_to_top_row() {
        let mut santa = Santa::new(1000.0);
        santa.launch(1000.0);
        // rows at 80, 200, 320; 440 > 450 - 100 wraps
        santa.row = 2;
        santa.x = -199.0;
        santa.update(1000.0, 450.0);
        assert_eq!(santa.row, 0);
        assert_eq!(santa.x, -200.0);
        assert_eq!(santa.direction, 1.0);
    }

    #[test]
    fn test_schedule_is_ordered() {
        assert!(SCHEDULE.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(SCHEDULE[0], (3_000, Cue::ShowBanner));
        assert_eq!(SCHEDULE[8], (40_000, Cue::Cleanup));
        let speeds: Vec<f64> = SCHEDULE.iter().filter_map(|(_, c)| c.santa_speed()).collect();
        assert_eq!(speeds, vec![4.0, 5.0, 7.0, 10.0]);
    }
}
