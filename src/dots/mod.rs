//! Mouse-reactive dot-grid background
//!
//! A fixed grid of softly pulsing dots painted behind the page; dots near
//! the pointer grow brighter and larger with a quadratic falloff. The
//! renderer is an explicit struct owning its four pieces of state (dot
//! batch, spatial index, pointer position, surface size) with
//! mount/unmount lifecycle methods. Scheduling rides egui's repaint
//! request, so ticks stay frame-paced and stop as soon as the field is
//! unmounted.

mod grid;

use std::collections::HashSet;

use eframe::egui;

use grid::SpatialGrid;

/// Tuning knobs for the dot field. All distances are in logical points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotFieldConfig {
    /// Distance between grid points.
    pub spacing: f32,
    /// Resting opacity bounds; dots pulse inside this band.
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Resting dot radius.
    pub base_radius: f32,
    /// Pointer influence distance.
    pub interaction_radius: f32,
    /// Additive opacity bonus at zero pointer distance.
    pub opacity_boost: f32,
    /// Additive radius bonus at zero pointer distance.
    pub radius_boost: f32,
    /// Dot color; per-frame opacity replaces its alpha channel.
    pub color: egui::Color32,
}

impl Default for DotFieldConfig {
    fn default() -> Self {
        Self {
            spacing: 30.0,
            opacity_min: 0.3,
            opacity_max: 0.5,
            base_radius: 1.5,
            interaction_radius: 120.0,
            opacity_boost: 0.7,
            radius_boost: 2.0,
            color: egui::Color32::from_rgb(139, 92, 246),
        }
    }
}

impl DotFieldConfig {
    /// Bucket size for the spatial index, chosen so the pointer's
    /// influence circle overlaps a bounded, small number of buckets.
    pub fn cell_size(&self) -> f32 {
        (self.interaction_radius / 1.5).floor().max(50.0)
    }
}

/// One point in the field. Position is fixed at creation; opacity
/// oscillates towards a target that is re-rolled on every reversal.
#[derive(Clone, Debug, PartialEq)]
struct Dot {
    x: f32,
    y: f32,
    base_radius: f32,
    current_radius: f32,
    target_opacity: f32,
    current_opacity: f32,
    opacity_step: f32,
}

/// One dot as it should appear this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotDraw {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
}

/// The dot-field renderer.
///
/// Owns the batch, the spatial index, the last pointer position and the
/// surface size; nothing else mutates them. `resize` regenerates the
/// whole batch (no per-dot state survives), `tick` advances and paints
/// one frame and reschedules itself while mounted.
pub struct DotField {
    config: DotFieldConfig,
    dots: Vec<Dot>,
    grid: SpatialGrid,
    /// Surface-local pointer position, `None` after pointer-leave.
    pointer: Option<(f32, f32)>,
    width: f32,
    height: f32,
    /// Redraw scheduler handle; `None` means unmounted.
    scheduler: Option<egui::Context>,
    rng: XorShift32,
    // Per-frame scratch, reused across ticks
    active: HashSet<usize>,
    frame: Vec<DotDraw>,
}

impl DotField {
    pub fn new(config: DotFieldConfig) -> Self {
        Self::with_rng(config, XorShift32::from_entropy())
    }

    #[cfg(test)]
    fn with_seed(config: DotFieldConfig, seed: u32) -> Self {
        Self::with_rng(config, XorShift32::new(seed))
    }

    fn with_rng(config: DotFieldConfig, rng: XorShift32) -> Self {
        Self {
            grid: SpatialGrid::new(config.cell_size()),
            config,
            dots: Vec::new(),
            pointer: None,
            width: 0.0,
            height: 0.0,
            scheduler: None,
            rng,
            active: HashSet::new(),
            frame: Vec::new(),
        }
    }

    /// Bind the renderer to the host's redraw scheduler. Every tick from
    /// now on requests the next frame.
    pub fn mount(&mut self, scheduler: &egui::Context) {
        self.scheduler = Some(scheduler.clone());
    }

    /// Release the scheduler handle; no tick runs after this returns.
    pub fn unmount(&mut self) {
        self.scheduler = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.scheduler.is_some()
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Update the surface size and regenerate the batch and index.
    ///
    /// Idempotent for unchanged dimensions: the existing batch is kept
    /// as-is. Any in-flight pulsing simply continues against the new
    /// batch on the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;

        self.dots.clear();
        self.grid.clear();

        let spacing = self.config.spacing;
        let cols = (width / spacing).ceil() as usize;
        let rows = (height / spacing).ceil() as usize;
        self.dots.reserve(cols * rows);

        for i in 0..cols {
            for j in 0..rows {
                let x = i as f32 * spacing + spacing / 2.0;
                let y = j as f32 * spacing + spacing / 2.0;

                let index = self.dots.len();
                self.grid.insert(x, y, index);

                let opacity = self
                    .rng
                    .range(self.config.opacity_min, self.config.opacity_max);
                self.dots.push(Dot {
                    x,
                    y,
                    base_radius: self.config.base_radius,
                    current_radius: self.config.base_radius,
                    target_opacity: opacity,
                    current_opacity: opacity,
                    opacity_step: self.rng.range(0.002, 0.007),
                });
            }
        }
    }

    /// Record the pointer position in surface-local coordinates. Consumed
    /// by the next tick; no immediate redraw.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
    }

    /// Forget the pointer; all dots fall back to their resting look on
    /// the next tick.
    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
    }

    /// Advance and paint one frame, then request the next one.
    ///
    /// Unmounted: does nothing. Zero-area surface: skips the drawing but
    /// still reschedules, so the loop survives until real dimensions
    /// arrive.
    pub fn tick(&mut self, painter: &egui::Painter, origin: egui::Pos2) {
        let Some(scheduler) = self.scheduler.clone() else {
            return;
        };

        if self.width > 0.0 && self.height > 0.0 {
            self.step_frame();
            let [r, g, b, _] = self.config.color.to_array();
            for dot in &self.frame {
                painter.circle_filled(
                    origin + egui::vec2(dot.x, dot.y),
                    dot.radius,
                    egui::Color32::from_rgba_unmultiplied(r, g, b, (dot.opacity * 255.0) as u8),
                );
            }
        }

        scheduler.request_repaint();
    }

    /// Compute one frame of dot appearances into the scratch draw list.
    fn step_frame(&mut self) -> &[DotDraw] {
        let config = self.config;
        let radius_sq = config.interaction_radius * config.interaction_radius;

        self.active.clear();
        if let Some((px, py)) = self.pointer {
            self.grid
                .neighborhood(px, py, config.interaction_radius, &mut self.active);
        }

        self.frame.clear();
        for (index, dot) in self.dots.iter_mut().enumerate() {
            // Gentle pulsing: oscillate towards the target, reverse and
            // re-roll the target at the band edges.
            dot.current_opacity += dot.opacity_step;
            if dot.current_opacity >= dot.target_opacity
                || dot.current_opacity <= config.opacity_min
            {
                dot.opacity_step = -dot.opacity_step;
                dot.current_opacity = dot
                    .current_opacity
                    .clamp(config.opacity_min, config.opacity_max);
                dot.target_opacity = self.rng.range(config.opacity_min, config.opacity_max);
            }

            let mut factor = 0.0;
            if let Some((px, py)) = self.pointer {
                if self.active.contains(&index) {
                    let dx = dot.x - px;
                    let dy = dot.y - py;
                    let dist_sq = dx * dx + dy * dy;
                    if dist_sq < radius_sq {
                        // Quadratic falloff: 1 at the pointer, 0 at the boundary
                        let linear = (1.0 - dist_sq.sqrt() / config.interaction_radius).max(0.0);
                        factor = linear * linear;
                    }
                }
            }

            dot.current_radius = dot.base_radius + factor * config.radius_boost;
            self.frame.push(DotDraw {
                x: dot.x,
                y: dot.y,
                radius: dot.current_radius,
                opacity: (dot.current_opacity + factor * config.opacity_boost).min(1.0),
            });
        }

        &self.frame
    }
}

/// xorshift32 PRNG; one shared code path for native and web, and fixed
/// seeds in tests.
#[derive(Debug)]
struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0xDEAD_BEEF } else { seed },
        }
    }

    fn from_entropy() -> Self {
        let mut bytes = [0u8; 4];
        if getrandom::getrandom(&mut bytes).is_err() {
            bytes = 0xDEAD_BEEFu32.to_le_bytes();
        }
        Self::new(u32::from_le_bytes(bytes))
    }

    fn next_f32(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f32 * (1.0 / 16_777_216.0)
    }

    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_300() -> DotField {
        let mut field = DotField::with_seed(DotFieldConfig::default(), 42);
        field.resize(300.0, 300.0);
        field
    }

    #[test]
    fn resize_generates_grid_of_dots() {
        let field = field_300();
        // ceil(300/30) * ceil(300/30)
        assert_eq!(field.dot_count(), 100);

        // Every dot sits in exactly the bucket containing its position
        for (index, dot) in field.dots.iter().enumerate() {
            let key = field.grid.cell_of(dot.x, dot.y);
            let bucket = field.grid.bucket(key).expect("bucket for dot cell");
            assert_eq!(
                bucket.iter().filter(|&&i| i == index).count(),
                1,
                "dot {index} should appear once in its bucket"
            );
        }
    }

    #[test]
    fn resize_with_unchanged_dimensions_keeps_batch() {
        let mut field = field_300();
        let before = field.dots.clone();
        field.resize(300.0, 300.0);
        assert_eq!(field.dots, before);
    }

    #[test]
    fn resize_regenerates_on_new_dimensions() {
        let mut field = field_300();
        field.resize(150.0, 300.0);
        assert_eq!(field.dot_count(), 50);
    }

    #[test]
    fn resting_opacity_stays_in_band() {
        let mut field = field_300();
        field.on_pointer_leave();
        let (min, max) = (field.config.opacity_min, field.config.opacity_max);
        for _ in 0..1000 {
            field.step_frame();
            for (i, draw) in field.frame.iter().enumerate() {
                assert!(
                    draw.opacity >= min && draw.opacity <= max,
                    "dot {i} rested at {} outside [{min}, {max}]",
                    draw.opacity
                );
            }
        }
    }

    #[test]
    fn pointer_on_dot_applies_full_boost() {
        let mut field = field_300();
        let (x, y) = (field.dots[0].x, field.dots[0].y);
        field.on_pointer_move(x, y);
        field.step_frame();

        let draw = field.frame[0];
        let config = field.config;
        assert_eq!(draw.radius, config.base_radius + config.radius_boost);
        let expected = (field.dots[0].current_opacity + config.opacity_boost).min(1.0);
        assert_eq!(draw.opacity, expected);
    }

    #[test]
    fn pointer_beyond_interaction_radius_leaves_dot_at_rest() {
        let mut field = field_300();
        let (x, y) = (field.dots[0].x, field.dots[0].y);
        field.on_pointer_move(x + field.config.interaction_radius, y);
        field.step_frame();

        let draw = field.frame[0];
        assert_eq!(draw.radius, field.config.base_radius);
        assert_eq!(draw.opacity, field.dots[0].current_opacity);
    }

    #[test]
    fn pointer_leave_clears_all_interaction() {
        let mut field = field_300();
        field.on_pointer_move(150.0, 150.0);
        field.step_frame();
        assert!(field.frame.iter().any(|d| d.radius > field.config.base_radius));

        field.on_pointer_leave();
        field.step_frame();
        for draw in &field.frame {
            assert_eq!(draw.radius, field.config.base_radius);
        }
        assert!(field.active.is_empty());
    }

    #[test]
    fn active_set_bounds_the_neighbor_scan() {
        // Default config derives cell size max(50, floor(120 / 1.5)) = 80
        assert_eq!(DotFieldConfig::default().cell_size(), 80.0);

        let mut field = field_300();
        assert_eq!(field.dot_count(), 100);

        // On a surface much wider than the influence circle, the scanned
        // neighborhood must be a strict subset of the batch.
        field.resize(600.0, 600.0);
        field.on_pointer_move(300.0, 300.0);
        field.step_frame();
        assert!(!field.active.is_empty());
        assert!(field.active.len() < field.dot_count());
    }

    #[test]
    fn second_variant_constants_are_plain_config() {
        let config = DotFieldConfig {
            opacity_min: 0.1,
            opacity_max: 0.3,
            base_radius: 1.2,
            ..DotFieldConfig::default()
        };
        let mut field = DotField::with_seed(config, 9);
        field.resize(90.0, 90.0);
        for _ in 0..200 {
            field.step_frame();
            for draw in &field.frame {
                assert!(draw.opacity >= 0.1 && draw.opacity <= 0.3);
                assert_eq!(draw.radius, 1.2);
            }
        }
    }

    #[test]
    fn zero_area_surface_produces_no_draws() {
        let mut field = DotField::with_seed(DotFieldConfig::default(), 1);
        field.resize(0.0, 0.0);
        assert_eq!(field.dot_count(), 0);
        assert!(field.step_frame().is_empty());
    }

    #[test]
    fn unmount_stops_ticking() {
        let mut field = field_300();
        let ctx = egui::Context::default();
        field.mount(&ctx);
        assert!(field.is_mounted());

        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                field.tick(ui.painter(), egui::Pos2::ZERO);
            });
        });
        let after_mounted_tick: Vec<f32> =
            field.dots.iter().map(|d| d.current_opacity).collect();

        field.unmount();
        assert!(!field.is_mounted());

        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                field.tick(ui.painter(), egui::Pos2::ZERO);
            });
        });
        let after_unmounted_tick: Vec<f32> =
            field.dots.iter().map(|d| d.current_opacity).collect();

        // Ticking before unmount moved the opacities; after unmount the
        // batch must stay frozen.
        assert_eq!(after_mounted_tick, after_unmounted_tick);
    }

    #[test]
    fn pulsing_reverses_at_band_edges() {
        let mut field = DotField::with_seed(DotFieldConfig::default(), 3);
        field.resize(30.0, 30.0);
        assert_eq!(field.dot_count(), 1);

        let mut seen_rising = false;
        let mut seen_falling = false;
        for _ in 0..2000 {
            field.step_frame();
            if field.dots[0].opacity_step > 0.0 {
                seen_rising = true;
            } else {
                seen_falling = true;
            }
        }
        assert!(seen_rising && seen_falling);
    }
}
