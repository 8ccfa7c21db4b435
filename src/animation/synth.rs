use crate::animation::ease::{ease_out_quad, frame_progress};
use crate::foundation::core::PixelPos;
use crate::foundation::error::{LayerDepthError, LayerDepthResult};
use crate::foundation::math::lerp_i32;
use crate::layout::planner::SeparatedLayout;
use crate::render::composite::{DrawOrder, ShapeStyle, render_shapes};
use crate::render::frame::FrameRGBA;
use crate::scene::model::{Scene, Shape};

/// Frame counts of a transition video. Progress always follows [`ease_out_quad`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionOpts {
    /// Copies of the overlapping render at the start.
    pub hold_start: u32,
    /// Interpolated frames between the two layouts.
    pub transition_frames: u32,
    /// Copies of the separated render at the end.
    pub hold_end: u32,
}

impl Default for TransitionOpts {
    fn default() -> Self {
        Self::with_hold(5, 25)
    }
}

impl TransitionOpts {
    /// End hold is twice the start hold.
    pub fn with_hold(hold_start: u32, transition_frames: u32) -> Self {
        Self {
            hold_start,
            transition_frames,
            hold_end: hold_start * 2,
        }
    }

    /// `hold_start + transition_frames + hold_end`.
    pub fn total_frames(&self) -> usize {
        (self.hold_start + self.transition_frames + self.hold_end) as usize
    }

    /// Eased progress of transition frame `k`; 0 at the first, 1 at the last.
    pub fn progress(&self, k: u32) -> f64 {
        ease_out_quad(frame_progress(k, self.transition_frames))
    }

    /// Phase that sequence frame `index` belongs to.
    pub fn phase_of(&self, index: usize) -> Option<Phase> {
        let h1 = self.hold_start as usize;
        let a = self.transition_frames as usize;
        match index {
            i if i < h1 => Some(Phase::HoldStart),
            i if i < h1 + a => Some(Phase::Transition),
            i if i < self.total_frames() => Some(Phase::HoldEnd),
            _ => None,
        }
    }
}

/// The three strictly sequential segments of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Static overlapping view.
    HoldStart,
    /// Shapes moving from their scene positions to their slots.
    Transition,
    /// Static separated view.
    HoldEnd,
}

/// Ordered, in-memory frames of one transition.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    opts: TransitionOpts,
    frames: Vec<FrameRGBA>,
}

impl FrameSequence {
    /// All frames in playback order.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Options the sequence was built with.
    pub fn opts(&self) -> TransitionOpts {
        self.opts
    }

    /// Frames belonging to `phase`.
    pub fn phase(&self, phase: Phase) -> &[FrameRGBA] {
        let h1 = self.opts.hold_start as usize;
        let a = self.opts.transition_frames as usize;
        match phase {
            Phase::HoldStart => &self.frames[..h1],
            Phase::Transition => &self.frames[h1..h1 + a],
            Phase::HoldEnd => &self.frames[h1 + a..],
        }
    }
}

/// Shapes at eased progress `p`, in front-to-back order.
///
/// Every shape uses the same `p`, so motion is synchronized. Positions are truncated toward zero.
pub fn interpolate_shapes(scene: &Scene, layout: &SeparatedLayout, p: f64) -> Vec<Shape> {
    scene
        .front_to_back()
        .into_iter()
        .map(|shape| {
            let end = layout.target_for(shape.layer).unwrap_or(shape.pos);
            shape.moved_to(PixelPos::new(
                lerp_i32(shape.pos.x, end.x, p),
                lerp_i32(shape.pos.y, end.y, p),
            ))
        })
        .collect()
}

/// Build the full frame sequence: `hold_start` copies of `initial`, the eased transition,
/// then `hold_end` copies of `separated`.
///
/// Transition frames are fresh composites drawn front-to-back, matching the separated view.
#[tracing::instrument(skip_all, fields(shapes = scene.len(), frames = opts.total_frames()))]
pub fn synthesize_transition(
    initial: &FrameRGBA,
    separated: &FrameRGBA,
    scene: &Scene,
    layout: &SeparatedLayout,
    style: &ShapeStyle,
    opts: &TransitionOpts,
) -> LayerDepthResult<FrameSequence> {
    if initial.canvas() != separated.canvas() {
        return Err(LayerDepthError::render(format!(
            "endpoint renders differ in size: {}x{} vs {}x{}",
            initial.width, initial.height, separated.width, separated.height
        )));
    }
    let canvas = initial.canvas();

    let mut frames = Vec::with_capacity(opts.total_frames());
    frames.extend(std::iter::repeat_n(initial, opts.hold_start as usize).cloned());
    for k in 0..opts.transition_frames {
        let shapes = interpolate_shapes(scene, layout, opts.progress(k));
        frames.push(render_shapes(canvas, style, &shapes, DrawOrder::FrontToBack)?);
    }
    frames.extend(std::iter::repeat_n(separated, opts.hold_end as usize).cloned());

    tracing::debug!(frames = frames.len(), "synthesized transition");
    Ok(FrameSequence {
        opts: *opts,
        frames,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/synth.rs"]
mod tests;
