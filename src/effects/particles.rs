//! Background particle network.

use std::f64::consts::TAU;

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

use crate::config::ParticleConfig;

const PARTICLE_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    fn random(rng: &mut impl Rng, width: f64, height: f64, config: &ParticleConfig) -> Self {
        Self {
            x: rng.r#gen::<f64>() * width,
            y: rng.r#gen::<f64>() * height,
            vx: (rng.r#gen::<f64>() - 0.5) * config.speed,
            vy: (rng.r#gen::<f64>() - 0.5) * config.speed,
            size: rng.r#gen::<f64>() * config.size + 1.0,
            opacity: rng.r#gen::<f64>() * 0.5 + 0.3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
    pub pointer: Option<(f64, f64)>,
    config: ParticleConfig,
}

impl ParticleField {
    pub fn new(rng: &mut impl Rng, width: f64, height: f64, config: ParticleConfig) -> Self {
        let mut field = Self { width, height, particles: Vec::new(), pointer: None, config };
        field.reset(rng, width, height);
        field
    }

    /// Particle budget for a viewport: half on narrow screens.
    pub fn count_for(width: f64, config: &ParticleConfig) -> usize {
        if width < config.narrow_viewport { config.count / 2 } else { config.count }
    }

    pub fn reset(&mut self, rng: &mut impl Rng, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let count = Self::count_for(width, &self.config);
        self.particles = (0..count)
            .map(|_| Particle::random(rng, width, height, &self.config))
            .collect();
    }

    /// Drift, bounce off the edges and get pushed away from the pointer.
    pub fn step(&mut self) {
        let radius = self.config.mouse_radius;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
            if let Some((mx, my)) = self.pointer {
                let (dx, dy) = (p.x - mx, p.y - my);
                let dist = dx.hypot(dy);
                if dist < radius {
                    let force = (radius - dist) / radius;
                    p.x += dx * force * 0.02;
                    p.y += dy * force * 0.02;
                }
            }
        }
    }

    /// Pairs closer than the line distance, with the line opacity.
    pub fn connections(&self) -> Vec<(usize, usize, f64)> {
        let max = self.config.line_distance;
        let mut lines = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < max {
                    lines.push((i, j, 1.0 - dist / max));
                }
            }
        }
        lines
    }

    pub fn draw(&self, ctx: &CanvasRenderingContext2d) {
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        ctx.set_line_width(1.0);
        for (i, j, opacity) in self.connections() {
            let (a, b) = (&self.particles[i], &self.particles[j]);
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.set_stroke_style_str(&format!("rgba(59, 130, 246, {})", opacity * 0.2));
            ctx.stroke();
        }

        if let Some((mx, my)) = self.pointer {
            let radius = self.config.mouse_radius;
            ctx.set_line_width(1.5);
            for p in &self.particles {
                let dist = (p.x - mx).hypot(p.y - my);
                if dist < radius {
                    ctx.begin_path();
                    ctx.move_to(p.x, p.y);
                    ctx.line_to(mx, my);
                    ctx.set_stroke_style_str(&format!("rgba(139, 92, 246, {})", (1.0 - dist / radius) * 0.4));
                    ctx.stroke();
                }
            }
        }

        ctx.set_fill_style_str(PARTICLE_COLOR);
        for p in &self.particles {
            ctx.begin_path();
            ctx.arc(p.x, p.y, p.size, 0.0, TAU).ok();
            ctx.set_global_alpha(p.opacity);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_narrow_viewports_get_half() {
        let cfg = ParticleConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(ParticleField::new(&mut rng, 1280.0, 800.0, cfg.clone()).particles.len(), 80);
        assert_eq!(ParticleField::new(&mut rng, 767.0, 800.0, cfg).particles.len(), 40);
    }

    #[test]
    fn test_particles_stay_in_ranges() {
        let cfg = ParticleConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let field = ParticleField::new(&mut rng, 1000.0, 500.0, cfg);
        for p in &field.particles {
            assert!((0.0..=1000.0).contains(&p.x));
            assert!(p.vx.abs() <= 0.25);
            assert!((1.0..3.0).contains(&p.size));
            assert!((0.3..0.8).contains(&p.opacity));
        }
    }

    #[test]
    fn test_bounce_and_pointer_push() {
        let cfg = ParticleConfig::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut field = ParticleField::new(&mut rng, 100.0, 100.0, cfg);
        field.particles = vec![Particle { x: 100.0, y: 50.0, vx: 0.2, vy: 0.0, size: 1.0, opacity: 1.0 }];
        field.step();
        assert!(field.particles[0].vx < 0.0);

        field.particles = vec![Particle { x: 60.0, y: 50.0, vx: 0.0, vy: 0.0, size: 1.0, opacity: 1.0 }];
        field.pointer = Some((50.0, 50.0));
        field.step();
        assert!(field.particles[0].x > 60.0);
    }

    #[test]
    fn test_connections_fade_with_distance() {
        let cfg = ParticleConfig::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut field = ParticleField::new(&mut rng, 500.0, 500.0, cfg);
        let at = |x: f64| Particle { x, y: 0.0, vx: 0.0, vy: 0.0, size: 1.0, opacity: 1.0 };
        field.particles = vec![at(0.0), at(75.0), at(400.0)];
        let lines = field.connections();
        assert_eq!(lines.len(), 1);
        assert_eq!((lines[0].0, lines[0].1), (0, 1));
        assert!((lines[0].2 - 0.5).abs() < 1e-9);
    }
}
