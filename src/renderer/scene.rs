//! Per-frame scene description and the render sink seam

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::hud::Readout;

/// Inset of the corner text from the canvas edges
pub const TEXT_MARGIN: f32 = 20.0;
/// Vertical step between final stats lines
pub const STATS_LINE_HEIGHT: f32 = 20.0;

/// Label drawn next to the scale bar
pub const SCALE_BAR_LABEL: &str = "1 meter";

/// The 1 meter reference bar: a horizontal stroke with end ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBar {
    pub start: Vec2,
    pub end: Vec2,
    /// Left-center anchor of the label
    pub label_anchor: Vec2,
}

impl Default for ScaleBar {
    fn default() -> Self {
        let start = SCALE_BAR_ORIGIN;
        let end = start + Vec2::new(PIXELS_PER_METER, 0.0);
        Self {
            start,
            end,
            label_anchor: end + Vec2::new(10.0, 0.0),
        }
    }
}

impl ScaleBar {
    /// Main stroke followed by the two end ticks
    pub fn segments(&self) -> [(Vec2, Vec2); 3] {
        let tick = Vec2::new(0.0, SCALE_BAR_TICK);
        [
            (self.start, self.end),
            (self.start - tick, self.start + tick),
            (self.end - tick, self.end + tick),
        ]
    }
}

/// Geometry for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub angle_degrees: f32,
    /// Block distance along the ramp (px)
    pub position: f32,
    pub scale_bar: ScaleBar,
}

impl Scene {
    pub fn build(angle_degrees: f32, position: f32) -> Self {
        Self {
            angle_degrees,
            position,
            scale_bar: ScaleBar::default(),
        }
    }

    pub fn ramp_corners(&self) -> [Vec2; 4] {
        shapes::oriented_rect_corners(
            RAMP_ORIGIN,
            self.angle_degrees,
            Vec2::ZERO,
            Vec2::new(TRACK_LENGTH, RAMP_THICKNESS),
        )
    }

    /// Block sits on top of the ramp surface, centered on `position`
    pub fn block_corners(&self) -> [Vec2; 4] {
        let half = BLOCK_SIZE / 2.0;
        shapes::oriented_rect_corners(
            RAMP_ORIGIN,
            self.angle_degrees,
            Vec2::new(self.position - half, -BLOCK_SIZE),
            Vec2::new(self.position + half, 0.0),
        )
    }

    pub fn block_center(&self) -> Vec2 {
        let [a, _, c, _] = self.block_corners();
        (a + c) / 2.0
    }

    /// Triangle list: ramp, block, then scale bar
    pub fn vertices(&self) -> Vec<Vertex> {
        let half = BLOCK_SIZE / 2.0;
        let mut vertices = shapes::oriented_rect(
            RAMP_ORIGIN,
            self.angle_degrees,
            Vec2::ZERO,
            Vec2::new(TRACK_LENGTH, RAMP_THICKNESS),
            colors::RAMP,
        );
        vertices.extend(shapes::oriented_rect(
            RAMP_ORIGIN,
            self.angle_degrees,
            Vec2::new(self.position - half, -BLOCK_SIZE),
            Vec2::new(self.position + half, 0.0),
            colors::BLOCK,
        ));
        for (a, b) in self.scale_bar.segments() {
            vertices.extend(shapes::line(a, b, 2.0, colors::SCALE_BAR));
        }
        vertices
    }
}

/// Which point of the text box `anchor` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    LeftCenter,
    RightTop,
    RightBottom,
}

/// A string placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub anchor: Vec2,
    pub align: TextAlign,
    pub size: f32,
    pub color: [f32; 4],
}

impl TextItem {
    fn new(
        text: impl Into<String>,
        anchor: Vec2,
        align: TextAlign,
        size: f32,
        color: [f32; 4],
    ) -> Self {
        Self {
            text: text.into(),
            anchor,
            align,
            size,
            color,
        }
    }
}

/// Everything the render loop hands to the presentation layer each refresh
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub scene: Scene,
    pub readout: Readout,
    /// Canvas text: scale bar label, status banner, time, final stats
    pub texts: Vec<TextItem>,
}

impl Frame {
    pub fn new(scene: Scene, readout: Readout) -> Self {
        let mut texts = vec![TextItem::new(
            SCALE_BAR_LABEL,
            scene.scale_bar.label_anchor,
            TextAlign::LeftCenter,
            14.0,
            colors::TEXT,
        )];

        if let Some(status) = readout.status {
            texts.push(TextItem::new(
                status.text(),
                Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
                TextAlign::Center,
                24.0,
                colors::TEXT,
            ));
        }

        let right = CANVAS_WIDTH - TEXT_MARGIN;
        texts.push(TextItem::new(
            readout.time_text(),
            Vec2::new(right, CANVAS_HEIGHT - TEXT_MARGIN),
            TextAlign::RightBottom,
            16.0,
            colors::TEXT,
        ));

        if let Some(stats) = readout.final_stats {
            for (i, line) in stats.lines().into_iter().enumerate() {
                texts.push(TextItem::new(
                    line,
                    Vec2::new(right, TEXT_MARGIN + i as f32 * STATS_LINE_HEIGHT),
                    TextAlign::RightTop,
                    14.0,
                    colors::FINAL_STATS,
                ));
            }
        }

        Self {
            clear_color: colors::BACKGROUND,
            scene,
            readout,
            texts,
        }
    }
}

/// Output side of the render loop (canvas, terminal, test recorder...)
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}
