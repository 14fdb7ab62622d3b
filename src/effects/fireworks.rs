//! New Year fireworks.

use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_2, TAU};

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

pub const MAX_FIREWORKS: usize = 5;
pub const TRAIL_LENGTH: usize = 10;
const ROCKET_GRAVITY: f64 = 0.05;
const SPARK_GRAVITY: f64 = 0.03;
const SPAWN_CHANCE: f64 = 0.03;

#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub alpha: f64,
    pub size: f64,
    pub hue: f64,
}

#[derive(Debug, Clone)]
pub struct Firework {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub target_y: f64,
    pub hue: f64,
    pub brightness: f64,
    pub trail: VecDeque<(f64, f64)>,
    pub sparks: Vec<Spark>,
    pub exploded: bool,
}

impl Firework {
    /// A rocket leaving the bottom edge, aimed at the upper half.
    pub fn launch(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        let speed = rng.r#gen::<f64>() * 3.0 + 4.0;
        let angle = -FRAC_PI_2 + (rng.r#gen::<f64>() - 0.5) * 0.3;
        Self {
            x: rng.r#gen::<f64>() * width,
            y: height,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            target_y: rng.r#gen::<f64>() * height * 0.5 + 50.0,
            hue: rng.r#gen::<f64>() * 360.0,
            brightness: rng.r#gen::<f64>() * 20.0 + 50.0,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
            sparks: Vec::new(),
            exploded: false,
        }
    }

    fn explode(&mut self, rng: &mut impl Rng) {
        self.exploded = true;
        let count = rng.r#gen::<f64>() * 50.0 + 50.0;
        let mut i = 0.0;
        while i < count {
            let angle = TAU / count * i;
            let speed = rng.r#gen::<f64>() * 4.0 + 2.0;
            self.sparks.push(Spark {
                x: self.x,
                y: self.y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                alpha: 1.0,
                size: rng.r#gen::<f64>() * 3.0 + 1.0,
                hue: self.hue + rng.r#gen::<f64>() * 30.0 - 15.0,
            });
            i += 1.0;
        }
    }

    /// Advance one frame. A burnt-out firework relaunches in place.
    pub fn update(&mut self, rng: &mut impl Rng, width: f64, height: f64) {
        if !self.exploded {
            self.trail.push_back((self.x, self.y));
            if self.trail.len() > TRAIL_LENGTH {
                self.trail.pop_front();
            }
            self.x += self.vx;
            self.y += self.vy;
            self.vy += ROCKET_GRAVITY;
            if self.y <= self.target_y || self.vy >= 0.0 {
                self.explode(rng);
            }
            return;
        }

        for s in &mut self.sparks {
            s.x += s.vx;
            s.y += s.vy;
            s.vy += SPARK_GRAVITY;
            s.alpha -= 0.01;
            s.size *= 0.98;
        }
        self.sparks.retain(|s| s.alpha > 0.0);
        if self.sparks.is_empty() {
            *self = Self::launch(rng, width, height);
        }
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d) {
        if self.exploded {
            for s in &self.sparks {
                ctx.begin_path();
                ctx.arc(s.x, s.y, s.size, 0.0, TAU).ok();
                ctx.set_fill_style_str(&format!("hsla({}, 100%, 60%, {})", s.hue, s.alpha));
                ctx.fill();
            }
            return;
        }

        let len = self.trail.len() as f64;
        for (i, (x, y)) in self.trail.iter().enumerate() {
            ctx.begin_path();
            ctx.arc(*x, *y, 2.0, 0.0, TAU).ok();
            ctx.set_fill_style_str(&format!(
                "hsla({}, 100%, {}%, {})",
                self.hue,
                self.brightness,
                i as f64 / len
            ));
            ctx.fill();
        }
        ctx.begin_path();
        ctx.arc(self.x, self.y, 3.0, 0.0, TAU).ok();
        ctx.set_fill_style_str(&format!("hsl({}, 100%, {}%)", self.hue, self.brightness));
        ctx.fill();
    }
}

#[derive(Debug, Clone)]
pub struct FireworkShow {
    pub width: f64,
    pub height: f64,
    pub fireworks: Vec<Firework>,
}

impl FireworkShow {
    /// A full sky with rockets staggered vertically so they don't burst in sync.
    pub fn new(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        let fireworks = (0..MAX_FIREWORKS)
            .map(|_| {
                let mut fw = Firework::launch(rng, width, height);
                fw.y = rng.r#gen::<f64>() * height;
                fw
            })
            .collect();
        Self { width, height, fireworks }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn maybe_add(&mut self, rng: &mut impl Rng) {
        if self.fireworks.len() < MAX_FIREWORKS && rng.r#gen::<f64>() < SPAWN_CHANCE {
            self.fireworks.push(Firework::launch(rng, self.width, self.height));
        }
    }

    pub fn step(&mut self, rng: &mut impl Rng) {
        self.maybe_add(rng);
        let (w, h) = (self.width, self.height);
        for fw in &mut self.fireworks {
            fw.update(rng, w, h);
        }
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d) {
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for fw in &self.fireworks {
            fw.draw(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_show_starts_full() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut show = FireworkShow::new(&mut rng, 800.0, 600.0);
        assert_eq!(show.fireworks.len(), MAX_FIREWORKS);
        show.maybe_add(&mut rng);
        assert_eq!(show.fireworks.len(), MAX_FIREWORKS);
    }

    #[test]
    fn test_rocket_climbs_then_explodes() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut fw = Firework::launch(&mut rng, 800.0, 600.0);
        assert!(fw.vy < 0.0);
        assert!((50.0..=350.0).contains(&fw.target_y));
        let mut frames = 0;
        while !fw.exploded {
            fw.update(&mut rng, 800.0, 600.0);
            assert!(fw.trail.len() <= TRAIL_LENGTH);
            frames += 1;
            assert!(frames < 1000);
        }
        assert!((50..=100).contains(&fw.sparks.len()));
        assert!(fw.sparks.iter().all(|s| (fw.hue - 15.0..=fw.hue + 15.0).contains(&s.hue)));
    }

    #[test]
    fn test_sparks_fade_and_relaunch() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut fw = Firework::launch(&mut rng, 800.0, 600.0);
        while !fw.exploded {
            fw.update(&mut rng, 800.0, 600.0);
        }
        let size = fw.sparks[0].size;
        fw.update(&mut rng, 800.0, 600.0);
        assert!((fw.sparks[0].alpha - 0.99).abs() < 1e-9);
        assert!((fw.sparks[0].size - size * 0.98).abs() < 1e-9);

        // alpha reaches zero after about a hundred frames, then it relaunches
        let mut frames = 1;
        while fw.exploded {
            fw.update(&mut rng, 800.0, 600.0);
            frames += 1;
            assert!(frames <= 102);
        }
        assert!(frames >= 100);
        assert!(fw.sparks.is_empty());
        assert_eq!(fw.y, 600.0);
    }
}
