// src/animation/sequencer.rs
// The playback state machine.
//
// A Sequencer owns an ordered shape list and walks it against a wall
// clock: every frame it recomputes the elapsed time from the recorded
// start timestamp (no incremental state, so there is no drift), locates
// the shape that is currently drawing, and redraws the entire visible
// history behind it. The walk itself is a pure function so it can be
// exercised without a timer or a window.

use crate::draw::draw_shape;
use crate::models::Shape;
use crate::render::RenderSurface;

/// not started -> playing -> stopped; stopped is terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackState {
    NotStarted,
    Playing,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveShape {
    pub index: usize,
    pub progress: f32,
}

/// What one frame should draw: the first `completed` shapes in their
/// final state, then optionally the active shape at its local progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    pub completed: usize,
    pub active: Option<ActiveShape>,
    pub finished: bool,
}

/// Walk the shape list against an elapsed-time budget.
///
/// Each shape consumes `duration + wait_before + wait_after` from the
/// budget. Shapes whose budget is strictly exceeded are fully finished;
/// the first shape that still fits is active, with its progress clamped
/// to the drawable domain [0, 1]. Shapes past the active one have not
/// started and are not drawn. Exceeding the last shape's budget finishes
/// the playback.
pub fn locate_active(items: &[Shape], elapsed: f32) -> FramePlan {
    let mut remaining = elapsed;

    for (index, item) in items.iter().enumerate() {
        let total = item.total_time();
        if remaining > total {
            remaining -= total;
            if index == items.len() - 1 {
                return FramePlan {
                    completed: items.len(),
                    active: None,
                    finished: true,
                };
            }
            continue;
        }

        let progress = item.progress(remaining).clamp(0.0, 1.0);
        return FramePlan {
            completed: index,
            active: Some(ActiveShape { index, progress }),
            finished: false,
        };
    }

    // Empty playlist: nothing to draw, nothing to wait for.
    FramePlan {
        completed: 0,
        active: None,
        finished: true,
    }
}

pub struct Sequencer {
    items: Vec<Shape>,
    start_time: f32,
    state: PlaybackState,
}

impl Sequencer {
    pub fn new(items: Vec<Shape>) -> Self {
        Self {
            items,
            start_time: 0.0,
            state: PlaybackState::NotStarted,
        }
    }

    pub fn items(&self) -> &[Shape] {
        &self.items
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.state == PlaybackState::Stopped
    }

    /// Record the playback origin timestamp. Starting an already started
    /// sequencer is a no-op; a stopped one never resumes.
    pub fn start(&mut self, now: f32) {
        if self.state == PlaybackState::NotStarted {
            self.start_time = now;
            self.state = PlaybackState::Playing;
        }
    }

    /// Advance the state machine for one display-refresh callback.
    ///
    /// Returns the frame plan to draw, or None when there is nothing to
    /// draw yet (not started, or the clock has not moved past the start
    /// timestamp -- the first-frame guard). Once the plan comes back
    /// finished the sequencer transitions to Stopped; subsequent ticks
    /// keep returning the terminal plan without touching any state, so
    /// an immediate-mode host can keep the final image on screen.
    pub fn tick(&mut self, now: f32) -> Option<FramePlan> {
        match self.state {
            PlaybackState::NotStarted => None,
            PlaybackState::Stopped => Some(FramePlan {
                completed: self.items.len(),
                active: None,
                finished: true,
            }),
            PlaybackState::Playing => {
                let elapsed = now - self.start_time;
                if elapsed <= 0.0 {
                    return None;
                }

                let plan = locate_active(&self.items, elapsed);
                if plan.finished {
                    self.state = PlaybackState::Stopped;
                }
                Some(plan)
            }
        }
    }

    /// Issue the draw calls for one frame plan: clear the content
    /// surface, redraw every finished shape at exactly 1, then the
    /// active shape at its local progress.
    pub fn render<S: RenderSurface>(&self, plan: &FramePlan, surface: &mut S) {
        surface.clear();
        for item in &self.items[..plan.completed] {
            draw_shape(item, 1.0, surface);
        }
        if let Some(active) = plan.active {
            draw_shape(&self.items[active.index], active.progress, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineParams, Point, Shape, ShapeKind, StrokeStyle, Timing};
    use crate::render::{RecordingSurface, SurfaceOp};

    const EPS: f32 = 1e-5;

    fn line(duration: f32, wait_before: f32, wait_after: f32) -> Shape {
        Shape::new(
            Timing {
                duration,
                wait_before,
                wait_after,
            },
            StrokeStyle::default(),
            ShapeKind::Line(LineParams {
                start: Point::new(0.0, 0.0),
                end: Point::new(100.0, 0.0),
            }),
        )
    }

    fn progress_of(plan: &FramePlan) -> f32 {
        plan.active.expect("expected an active shape").progress
    }

    mod walk_tests {
        use super::*;

        #[test]
        fn test_two_shape_walkthrough() {
            let items = vec![line(100.0, 0.0, 0.0), line(100.0, 0.0, 0.0)];

            // Halfway through the first shape; second not drawn.
            let plan = locate_active(&items, 50.0);
            assert_eq!(plan.completed, 0);
            assert_eq!(plan.active.unwrap().index, 0);
            assert!((progress_of(&plan) - 0.5).abs() < EPS);
            assert!(!plan.finished);

            // First fully drawn, second halfway.
            let plan = locate_active(&items, 150.0);
            assert_eq!(plan.completed, 1);
            assert_eq!(plan.active.unwrap().index, 1);
            assert!((progress_of(&plan) - 0.5).abs() < EPS);
            assert!(!plan.finished);

            // Both complete; playback is finished.
            let plan = locate_active(&items, 250.0);
            assert_eq!(plan.completed, 2);
            assert!(plan.active.is_none());
            assert!(plan.finished);
        }

        #[test]
        fn test_wait_before_clamps_progress_to_zero() {
            let items = vec![line(100.0, 50.0, 0.0)];

            // Inside the pre-wait window the shape draws at progress 0.
            let plan = locate_active(&items, 25.0);
            assert_eq!(progress_of(&plan), 0.0);
        }

        #[test]
        fn test_wait_after_holds_shape_complete() {
            let items = vec![line(100.0, 0.0, 50.0), line(100.0, 0.0, 0.0)];

            // In the hold window: progress exceeds 1, clamped to exactly 1,
            // and the next shape has not started.
            let plan = locate_active(&items, 125.0);
            assert_eq!(plan.completed, 0);
            assert_eq!(progress_of(&plan), 1.0);
            assert!(!plan.finished);
        }

        #[test]
        fn test_budget_boundary_is_exclusive() {
            let items = vec![line(100.0, 0.0, 0.0), line(100.0, 0.0, 0.0)];

            // Exactly at a shape's total the shape is still active (held
            // at progress 1); only a strictly larger budget advances.
            let plan = locate_active(&items, 100.0);
            assert_eq!(plan.completed, 0);
            assert_eq!(progress_of(&plan), 1.0);
        }

        #[test]
        fn test_empty_playlist_finishes_immediately() {
            let plan = locate_active(&[], 10.0);
            assert_eq!(plan.completed, 0);
            assert!(plan.active.is_none());
            assert!(plan.finished);
        }

        #[test]
        fn test_walk_is_pure() {
            let items = vec![line(100.0, 10.0, 5.0), line(50.0, 0.0, 0.0)];
            let first = locate_active(&items, 87.5);
            let second = locate_active(&items, 87.5);
            assert_eq!(first, second);
        }
    }

    mod sequencer_tests {
        use super::*;

        #[test]
        fn test_lifecycle() {
            let mut seq = Sequencer::new(vec![line(100.0, 0.0, 0.0)]);
            assert_eq!(seq.state(), PlaybackState::NotStarted);
            assert!(seq.tick(5.0).is_none());

            seq.start(10.0);
            assert_eq!(seq.state(), PlaybackState::Playing);

            // First-frame guard: the clock has not advanced yet.
            assert!(seq.tick(10.0).is_none());
            assert_eq!(seq.state(), PlaybackState::Playing);

            let plan = seq.tick(60.0).unwrap();
            assert!((progress_of(&plan) - 0.5).abs() < EPS);

            let plan = seq.tick(200.0).unwrap();
            assert!(plan.finished);
            assert!(seq.is_stopped());
        }

        #[test]
        fn test_stopped_is_terminal() {
            let mut seq = Sequencer::new(vec![line(100.0, 0.0, 0.0)]);
            seq.start(0.0);
            let _ = seq.tick(150.0);
            assert!(seq.is_stopped());

            // Restarting has no effect and later ticks return the
            // terminal plan.
            seq.start(500.0);
            assert!(seq.is_stopped());
            let plan = seq.tick(501.0).unwrap();
            assert_eq!(plan.completed, 1);
            assert!(plan.finished);
        }

        #[test]
        fn test_render_clears_then_draws_history() {
            let seq = Sequencer::new(vec![line(100.0, 0.0, 0.0), line(100.0, 0.0, 0.0)]);
            let plan = locate_active(seq.items(), 150.0);

            let mut surface = RecordingSurface::new();
            seq.render(&plan, &mut surface);

            assert_eq!(surface.ops[0], SurfaceOp::Clear);
            // One stroke for the completed shape, one for the active one.
            assert_eq!(surface.stroke_count(), 2);

            // The completed shape is drawn at its full extent.
            assert_eq!(surface.ops[3], SurfaceOp::LineTo(Point::new(100.0, 0.0)));
        }

        #[test]
        fn test_render_skips_shapes_not_started() {
            let seq = Sequencer::new(vec![line(100.0, 0.0, 0.0), line(100.0, 0.0, 0.0)]);
            let plan = locate_active(seq.items(), 50.0);

            let mut surface = RecordingSurface::new();
            seq.render(&plan, &mut surface);
            assert_eq!(surface.stroke_count(), 1);
        }

        #[test]
        fn test_render_is_idempotent() {
            let seq = Sequencer::new(vec![line(100.0, 0.0, 0.0)]);
            let plan = locate_active(seq.items(), 40.0);

            let mut first = RecordingSurface::new();
            let mut second = RecordingSurface::new();
            seq.render(&plan, &mut first);
            seq.render(&plan, &mut second);
            assert_eq!(first.ops, second.ops);
        }
    }
}
