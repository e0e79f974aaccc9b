use roundel_engine::coords::{Corner, RadiusSet, Rect, Vec2};
use roundel_engine::paint::Color;
use roundel_engine::render::ShapeInstance;
use roundel_engine::shape::{HitTestFlags, HitTester, Mode, RoundingUnit, ShapeConfig, ShapeParameters};
use roundel_engine::ShapeError;

use crate::event::{EventResult, UiEvent};
use crate::layout::{Pivot, fit_rect};
use crate::painter::Painter;
use crate::widget::Widget;

/// A rectangle with four independently rounded corners and an optional ring
/// border, drawn and hit-tested from the same [`ShapeParameters`] snapshot.
///
/// Radii and border thickness are stored normalized, so switching the
/// [`RoundingUnit`] never changes the look of the box. World-unit accessors
/// convert against the host rect recorded by [`set_rect`](Self::set_rect) or
/// by the last `on_event` (`UiScene::frame` routes a hover every frame). World
/// setters fail with [`ShapeError::NoLayout`] until that rect has a size.
///
/// # Example
/// ```rust,ignore
/// let mut card = RoundedBox::new()
///     .color(Color::from_straight(0.2, 0.5, 1.0, 1.0))
///     .hit_test_flags(HitTestFlags::BOTH)
///     .on_click(|| log::info!("card clicked"));
/// card.set_unit(RoundingUnit::World);
/// card.set_rect(Rect::new(0.0, 0.0, 200.0, 80.0));
/// card.set_corner_radius(Corner::TopLeft, 24.0)?;
/// ```
pub struct RoundedBox {
    radii: RadiusSet,
    border: f32,
    unit: RoundingUnit,
    mode: Mode,
    falloff: f32,
    hit: HitTester,
    pivot: Pivot,
    aspect: Option<f32>,
    color: Color,
    hover_color: Option<Color>,
    config: ShapeConfig,
    rect: Rect,
    on_click: Option<Box<dyn FnMut()>>,
}

impl RoundedBox {
    pub fn new() -> Self {
        Self {
            radii: RadiusSet::zero(),
            border: 0.0,
            unit: RoundingUnit::default(),
            mode: Mode::default(),
            falloff: 1.0,
            hit: HitTester::new(HitTestFlags::BOTH),
            pivot: Pivot::default(),
            aspect: None,
            color: Color::white(),
            hover_color: None,
            config: ShapeConfig::default(),
            rect: Rect::default(),
            on_click: None,
        }
    }

    // ── builders ──────────────────────────────────────────────────────────

    /// Callback invoked when a click lands inside the rounded shape.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Color used while the cursor is over the shape.
    pub fn hover_color(mut self, color: Color) -> Self {
        self.hover_color = Some(color);
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn hit_test_flags(mut self, flags: HitTestFlags) -> Self {
        self.hit = HitTester::new(flags);
        self
    }

    pub fn pivot(mut self, pivot: Pivot) -> Self {
        self.pivot = pivot;
        self
    }

    /// Keep the drawn rect at `width / height`; `None` stretches to the host.
    pub fn preserve_aspect(mut self, aspect: Option<f32>) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn config(mut self, config: ShapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Normalized radii for all four corners.
    pub fn radii(mut self, radii: RadiusSet) -> Result<Self, ShapeError> {
        for corner in Corner::ALL {
            check_normalized_radius(corner, radii.get(corner))?;
        }
        self.radii = radii;
        Ok(self)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn unit(&self) -> RoundingUnit {
        self.unit
    }

    /// Switches the unit used by the plain accessors. Stored values are kept.
    #[inline]
    pub fn set_unit(&mut self, unit: RoundingUnit) {
        self.unit = unit;
    }

    #[inline]
    pub fn shape_mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    #[inline]
    pub fn flags(&self) -> HitTestFlags {
        self.hit.flags
    }

    #[inline]
    pub fn set_hit_test_flags(&mut self, flags: HitTestFlags) {
        self.hit = HitTester::new(flags);
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn set_pivot(&mut self, pivot: Pivot) {
        self.pivot = pivot;
    }

    #[inline]
    pub fn set_preserve_aspect(&mut self, aspect: Option<f32>) {
        self.aspect = aspect;
    }

    /// Host rect used for world-unit conversions.
    #[inline]
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    #[inline]
    pub fn falloff(&self) -> f32 {
        self.falloff
    }

    /// Antialiasing band width in logical pixels.
    pub fn set_falloff(&mut self, falloff: f32) -> Result<(), ShapeError> {
        if !falloff.is_finite() || falloff < 0.0 {
            return Err(ShapeError::FalloffOutOfRange { value: falloff });
        }
        self.falloff = falloff;
        Ok(())
    }

    /// Corner radius in the current unit.
    #[inline]
    pub fn corner_radius(&self, corner: Corner) -> f32 {
        self.corner_radius_in(corner, self.unit)
    }

    pub fn corner_radius_in(&self, corner: Corner, unit: RoundingUnit) -> f32 {
        unit.from_normalized(self.radii.get(corner), self.shorter_side())
    }

    /// Sets a corner radius given in the current unit.
    #[inline]
    pub fn set_corner_radius(&mut self, corner: Corner, value: f32) -> Result<(), ShapeError> {
        self.set_corner_radius_in(corner, value, self.unit)
    }

    pub fn set_corner_radius_in(
        &mut self,
        corner: Corner,
        value: f32,
        unit: RoundingUnit,
    ) -> Result<(), ShapeError> {
        let normalized = match unit {
            RoundingUnit::Percentage => check_normalized_radius(corner, value)?,
            RoundingUnit::World => {
                check_length("corner radius", value)?;
                unit.to_normalized(value, self.layout_shorter_side("corner radius")?)
            }
        };
        self.radii.set(corner, normalized);
        Ok(())
    }

    /// Sets every corner to the same radius in the current unit.
    pub fn set_all_radii(&mut self, value: f32) -> Result<(), ShapeError> {
        for corner in Corner::ALL {
            self.set_corner_radius(corner, value)?;
        }
        Ok(())
    }

    /// Normalized radii as stored.
    #[inline]
    pub fn normalized_radii(&self) -> RadiusSet {
        self.radii
    }

    /// Border thickness in the current unit.
    #[inline]
    pub fn border_thickness(&self) -> f32 {
        self.border_thickness_in(self.unit)
    }

    pub fn border_thickness_in(&self, unit: RoundingUnit) -> f32 {
        unit.from_normalized(self.border, self.shorter_side())
    }

    #[inline]
    pub fn set_border_thickness(&mut self, value: f32) -> Result<(), ShapeError> {
        self.set_border_thickness_in(value, self.unit)
    }

    pub fn set_border_thickness_in(&mut self, value: f32, unit: RoundingUnit) -> Result<(), ShapeError> {
        self.border = match unit {
            RoundingUnit::Percentage => {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ShapeError::BorderOutOfRange { value });
                }
                value
            }
            RoundingUnit::World => {
                check_length("border thickness", value)?;
                unit.to_normalized(value, self.layout_shorter_side("border thickness")?)
            }
        };
        Ok(())
    }

    // ── snapshots ─────────────────────────────────────────────────────────

    /// Drawn rect inside `host` after pivot / aspect fitting.
    #[inline]
    pub fn layout_rect(&self, host: Rect) -> Rect {
        fit_rect(host, self.pivot, self.aspect)
    }

    /// Laid-out rect plus the parameter snapshot shared by paint and hit test.
    pub fn params(&self, host: Rect) -> (Rect, ShapeParameters) {
        let rect = self.layout_rect(host);
        let params = ShapeParameters::new(rect.size, &self.radii, self.border, self.falloff, self.mode, self.config);
        (rect, params)
    }

    /// Transport record for the GPU path.
    pub fn instance(&self, host: Rect) -> ShapeInstance {
        let (rect, params) = self.params(host);
        ShapeInstance::new(rect, &params, self.color)
    }

    /// Pointer test against the rounded shape. Without hit-test flags the
    /// whole host rect is clickable.
    pub fn hit_test(&self, host: Rect, pos: Vec2) -> bool {
        if !self.hit.flags.any() {
            return host.contains(pos);
        }
        let (rect, params) = self.params(host);
        self.hit.contains(&params, rect.to_local(pos))
    }

    #[inline]
    fn shorter_side(&self) -> f32 {
        self.layout_rect(self.rect).shorter_side()
    }

    fn layout_shorter_side(&self, what: &'static str) -> Result<f32, ShapeError> {
        let side = self.shorter_side();
        if side > 0.0 && side.is_finite() { Ok(side) } else { Err(ShapeError::NoLayout { what }) }
    }
}

impl Default for RoundedBox {
    fn default() -> Self {
        Self::new()
    }
}

fn check_normalized_radius(corner: Corner, value: f32) -> Result<f32, ShapeError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ShapeError::RadiusOutOfRange { corner, value })
    }
}

fn check_length(what: &'static str, value: f32) -> Result<(), ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::NegativeLength { what, value })
    }
}

impl Widget for RoundedBox {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let color = match self.hover_color {
            Some(hover) if self.hit_test(rect, painter.mouse_pos) => hover,
            _ => self.color,
        };
        let (drawn, params) = self.params(rect);
        painter.fill_rounded_box(drawn, params, color);
    }

    fn hit_test(&self, rect: Rect, pos: Vec2) -> bool {
        RoundedBox::hit_test(self, rect, pos)
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.rect = rect;
        if let UiEvent::Click { pos } = event {
            if RoundedBox::hit_test(self, rect, *pos) {
                log::trace!("rounded box clicked at ({}, {})", pos.x, pos.y);
                if let Some(f) = &mut self.on_click {
                    f();
                }
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}
