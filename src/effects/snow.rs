//! Christmas snowfall.

use std::f64::consts::TAU;

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

/// One flake per this many pixels of viewport width.
const PIXELS_PER_FLAKE: f64 = 25.0;
pub const INITIAL_FLAKES: usize = 2;
pub const GROW_INTERVAL_MS: i32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
    pub swing: f64,
    pub swing_speed: f64,
    pub angle: f64,
}

impl Snowflake {
    /// A new flake just above the top edge.
    pub fn new(rng: &mut impl Rng, width: f64) -> Self {
        Self {
            x: rng.r#gen::<f64>() * width,
            y: -rng.r#gen::<f64>() * 100.0,
            radius: rng.r#gen::<f64>() * 3.5 + 1.0,
            speed_x: rng.r#gen::<f64>() * 0.5 - 0.25,
            speed_y: rng.r#gen::<f64>() * 1.5 + 1.0,
            opacity: rng.r#gen::<f64>() * 0.5 + 0.2,
            swing: rng.r#gen::<f64>() * 1.5,
            swing_speed: rng.r#gen::<f64>() * 0.02 + 0.005,
            angle: rng.r#gen::<f64>() * TAU,
        }
    }

    pub fn update(&mut self, rng: &mut impl Rng, width: f64, height: f64) {
        self.angle += self.swing_speed;
        self.x += self.angle.cos() * self.swing + self.speed_x;
        self.y += self.speed_y;

        if self.y > height + 10.0 {
            self.y = -10.0;
            self.x = rng.r#gen::<f64>() * width;
        }
        if self.x > width + 10.0 {
            self.x = -10.0;
        }
        if self.x < -10.0 {
            self.x = width + 10.0;
        }
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d) {
        ctx.begin_path();
        ctx.arc(self.x, self.y, self.radius, 0.0, TAU).ok();
        let Ok(gradient) =
            ctx.create_radial_gradient(self.x, self.y, 0.0, self.x, self.y, self.radius * 2.0)
        else {
            return;
        };
        gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", self.opacity)).ok();
        gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)").ok();
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();
    }
}

/// Snow that starts thin and builds up to a density set by the viewport width.
#[derive(Debug, Clone, Default)]
pub struct Snowfall {
    pub width: f64,
    pub height: f64,
    pub flakes: Vec<Snowflake>,
    max: usize,
}

impl Snowfall {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, flakes: Vec::new(), max: 0 }
    }

    pub fn max_flakes(&self) -> usize {
        self.max
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Start the buildup: the cap is fixed from the width at this moment.
    pub fn begin(&mut self, rng: &mut impl Rng) {
        self.max = (self.width / PIXELS_PER_FLAKE).floor() as usize;
        for _ in 0..INITIAL_FLAKES {
            self.flakes.push(Snowflake::new(rng, self.width));
        }
    }

    /// Add one flake. Returns `false` once the cap is reached.
    pub fn grow(&mut self, rng: &mut impl Rng) -> bool {
        if self.flakes.len() >= self.max {
            return false;
        }
        self.flakes.push(Snowflake::new(rng, self.width));
        true
    }

    /// First fade-out phase: slower and fainter.
    pub fn slow_down(&mut self) {
        for flake in &mut self.flakes {
            flake.speed_y *= 0.2;
            flake.opacity *= 0.7;
        }
    }

    pub fn step(&mut self, rng: &mut impl Rng) {
        let (w, h) = (self.width, self.height);
        for flake in &mut self.flakes {
            flake.update(rng, w, h);
        }
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d) {
        for flake in &self.flakes {
            flake.draw(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_buildup_caps_at_width_over_25() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut snow = Snowfall::new(260.0, 600.0);
        snow.begin(&mut rng);
        assert_eq!(snow.flakes.len(), 2);
        assert_eq!(snow.max_flakes(), 10);
        let mut added = 0;
        while snow.grow(&mut rng) {
            added += 1;
        }
        assert_eq!(added, 8);
        assert_eq!(snow.flakes.len(), 10);
    }

    #[test]
    fn test_flakes_spawn_above_the_viewport() {
        let mut rng = SmallRng::seed_from_u64(4);
        for _ in 0..50 {
            let f = Snowflake::new(&mut rng, 800.0);
            assert!((-100.0..=0.0).contains(&f.y));
            assert!((1.0..4.5).contains(&f.radius));
            assert!((1.0..2.5).contains(&f.speed_y));
            assert!((0.2..0.7).contains(&f.opacity));
        }
    }

    #[test]
    fn test_flakes_wrap() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut f = Snowflake::new(&mut rng, 800.0);
        f.swing = 0.0;
        f.speed_x = 0.0;
        f.y = 612.0;
        f.update(&mut rng, 800.0, 600.0);
        assert_eq!(f.y, -10.0);

        f.x = 811.0;
        f.update(&mut rng, 800.0, 600.0);
        assert_eq!(f.x, -10.0);
    }

    #[test]
    fn test_slow_down() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut snow = Snowfall::new(800.0, 600.0);
        snow.begin(&mut rng);
        let before = snow.flakes[0].clone();
        snow.slow_down();
        assert!((snow.flakes[0].speed_y - before.speed_y * 0.2).abs() < 1e-12);
        assert!((snow.flakes[0].opacity - before.opacity * 0.7).abs() < 1e-12);
    }
}
