//! Year slider: bounded integer stepper with single and skip steps

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::Control;
use crate::error::{ControlError, Result};
use crate::surface::{RenderSurface, SurfaceHandle};

/// Step size used for skip transitions when none is configured
pub const DEFAULT_SKIP_STEP: u32 = 10;

const SKIP_DOWN_GLYPH: &str = "«";
const STEP_DOWN_GLYPH: &str = "‹";
const STEP_UP_GLYPH: &str = "›";
const SKIP_UP_GLYPH: &str = "»";

/// Enabled state of the four stepper affordances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepperFlags {
    pub can_step_down: bool,
    pub can_step_up: bool,
    pub can_skip_down: bool,
    pub can_skip_up: bool,
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    container: SurfaceHandle,
    skip_down: SurfaceHandle,
    step_down: SurfaceHandle,
    value: SurfaceHandle,
    step_up: SurfaceHandle,
    skip_up: SurfaceHandle,
}

/// Integer value stepped within `[min, max]`, by one or by `skip_step`.
///
/// The start value is taken as given, even outside the bounds. Every
/// transition is guarded: a guard failure leaves the value alone and does not
/// notify. A value inside `[min, max]` never leaves it. A value that starts
/// outside only moves toward the range, and a single step may leave it
/// still outside.
pub struct BoundedRangeStepper {
    value: i32,
    min: i32,
    max: i32,
    skip_step: u32,
    on_change: Box<dyn FnMut(i32) + Send>,
    binding: Option<Binding>,
}

impl BoundedRangeStepper {
    /// Create a stepper with the default skip step of 10
    pub fn new<F>(start: i32, min: i32, max: i32, on_change: F) -> Result<Self>
    where
        F: FnMut(i32) + Send + 'static,
    {
        Self::with_skip_step(start, min, max, on_change, DEFAULT_SKIP_STEP)
    }

    /// Create a stepper with a custom skip step.
    ///
    /// Fails when `min > max` or `skip_step` is zero.
    pub fn with_skip_step<F>(
        start: i32,
        min: i32,
        max: i32,
        on_change: F,
        skip_step: u32,
    ) -> Result<Self>
    where
        F: FnMut(i32) + Send + 'static,
    {
        if min > max {
            return Err(ControlError::InvertedBounds { min, max });
        }
        if skip_step == 0 {
            return Err(ControlError::InvalidSkipStep(skip_step));
        }
        if !(min..=max).contains(&start) {
            warn!(start, min, max, "Stepper starts outside its bounds; value is not clamped");
        }

        Ok(Self {
            value: start,
            min,
            max,
            skip_step,
            on_change: Box::new(on_change),
            binding: None,
        })
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn skip_step(&self) -> u32 {
        self.skip_step
    }

    /// Enabled state derived from the current value.
    ///
    /// Skip affordances share the single-step boundary test, so a skip stays
    /// enabled even when it can only move by one.
    pub fn flags(&self) -> StepperFlags {
        StepperFlags {
            can_step_down: self.value > self.min,
            can_step_up: self.value < self.max,
            can_skip_down: self.value > self.min,
            can_skip_up: self.value < self.max,
        }
    }

    pub fn step_down(&mut self) -> bool {
        if self.value <= self.min {
            trace!(value = self.value, "Step down rejected at lower bound");
            return false;
        }
        self.transition(self.value - 1)
    }

    pub fn step_up(&mut self) -> bool {
        if self.value >= self.max {
            trace!(value = self.value, "Step up rejected at upper bound");
            return false;
        }
        self.transition(self.value + 1)
    }

    /// Jump down by `skip_step`, clamped at `min`
    pub fn skip_down(&mut self) -> bool {
        let target = (i64::from(self.value) - i64::from(self.skip_step)).max(i64::from(self.min));
        if target >= i64::from(self.value) {
            trace!(value = self.value, "Skip down rejected at lower bound");
            return false;
        }
        // Clamped to min, so it fits
        self.transition(target as i32)
    }

    /// Jump up by `skip_step`, clamped at `max`
    pub fn skip_up(&mut self) -> bool {
        let target = (i64::from(self.value) + i64::from(self.skip_step)).min(i64::from(self.max));
        if target <= i64::from(self.value) {
            trace!(value = self.value, "Skip up rejected at upper bound");
            return false;
        }
        self.transition(target as i32)
    }

    fn transition(&mut self, target: i32) -> bool {
        let previous = self.value;
        self.value = target;
        debug!(previous, value = target, "Stepper changed");
        (self.on_change)(target);
        true
    }

    /// Refresh the displayed value and the four disabled flags
    pub fn refresh(&self, surface: &mut dyn RenderSurface) {
        let Some(binding) = self.binding else {
            return;
        };
        let flags = self.flags();
        surface.set_text(binding.value, &self.value.to_string());
        surface.set_disabled(binding.skip_down, !flags.can_skip_down);
        surface.set_disabled(binding.step_down, !flags.can_step_down);
        surface.set_disabled(binding.step_up, !flags.can_step_up);
        surface.set_disabled(binding.skip_up, !flags.can_skip_up);
    }

    /// Container created by the last [`Control::mount`], if any
    pub fn container(&self) -> Option<SurfaceHandle> {
        self.binding.map(|b| b.container)
    }
}

impl Control for BoundedRangeStepper {
    fn mount(&mut self, surface: &mut dyn RenderSurface) -> SurfaceHandle {
        let flags = self.flags();
        let container = surface.container();

        let skip_down = surface.clickable(SKIP_DOWN_GLYPH, !flags.can_skip_down);
        surface.set_hint(skip_down, &format!("Previous {} Years", self.skip_step));
        let step_down = surface.clickable(STEP_DOWN_GLYPH, !flags.can_step_down);
        surface.set_hint(step_down, "Previous Year");
        let value = surface.label(&self.value.to_string());
        let step_up = surface.clickable(STEP_UP_GLYPH, !flags.can_step_up);
        surface.set_hint(step_up, "Next Year");
        let skip_up = surface.clickable(SKIP_UP_GLYPH, !flags.can_skip_up);
        surface.set_hint(skip_up, &format!("Next {} Years", self.skip_step));

        surface.compose(container, &[skip_down, step_down, value, step_up, skip_up]);

        self.binding = Some(Binding {
            container,
            skip_down,
            step_down,
            value,
            step_up,
            skip_up,
        });
        container
    }

    fn handle_click(&mut self, surface: &mut dyn RenderSurface, handle: SurfaceHandle) -> bool {
        let Some(binding) = self.binding else {
            return false;
        };

        let moved = if handle == binding.skip_down {
            self.skip_down()
        } else if handle == binding.step_down {
            self.step_down()
        } else if handle == binding.step_up {
            self.step_up()
        } else if handle == binding.skip_up {
            self.skip_up()
        } else {
            return false;
        };

        if moved {
            self.refresh(surface);
        }
        moved
    }
}

impl fmt::Debug for BoundedRangeStepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedRangeStepper")
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("skip_step", &self.skip_step)
            .field("binding", &self.binding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceTree;
    use parking_lot::Mutex;
    use proptest::prelude::*;
    use std::sync::Arc;

    type Seen = Arc<Mutex<Vec<i32>>>;

    fn recording(start: i32, min: i32, max: i32, skip: u32) -> (BoundedRangeStepper, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let on_change = move |year| sink.lock().push(year);
        let stepper =
            BoundedRangeStepper::with_skip_step(start, min, max, on_change, skip).unwrap();
        (stepper, seen)
    }

    fn assert_flags_consistent(stepper: &BoundedRangeStepper) {
        let flags = stepper.flags();
        assert_eq!(flags.can_step_down, stepper.value() > stepper.min());
        assert_eq!(flags.can_step_up, stepper.value() < stepper.max());
        assert_eq!(flags.can_skip_down, flags.can_step_down);
        assert_eq!(flags.can_skip_up, flags.can_step_up);
    }

    #[test]
    fn test_skip_up_clamps_at_max() {
        let (mut stepper, seen) = recording(2015, 2010, 2020, 10);
        assert!(stepper.flags().can_step_down);
        assert!(stepper.flags().can_step_up);

        assert!(stepper.skip_up());
        assert_eq!(stepper.value(), 2020);
        assert!(!stepper.flags().can_step_up);

        assert!(!stepper.skip_up());
        assert_eq!(*seen.lock(), vec![2020]);
    }

    #[test]
    fn test_skip_from_near_max_never_overshoots() {
        let (mut stepper, seen) = recording(2017, 2010, 2020, 10);
        assert!(stepper.skip_up());
        assert_eq!(stepper.value(), 2020);
        assert!(!stepper.skip_up());
        assert_eq!(*seen.lock(), vec![2020]);
    }

    #[test]
    fn test_step_down_at_min_is_noop() {
        let (mut stepper, seen) = recording(2010, 2010, 2020, DEFAULT_SKIP_STEP);
        assert!(!stepper.flags().can_step_down);
        assert!(!stepper.flags().can_skip_down);
        assert!(!stepper.step_down());
        assert!(!stepper.skip_down());
        assert_eq!(stepper.value(), 2010);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_single_steps() {
        let (mut stepper, seen) = recording(2019, 2010, 2020, 10);
        assert!(stepper.step_up());
        assert!(!stepper.step_up());
        assert!(stepper.step_down());
        assert_eq!(*seen.lock(), vec![2020, 2019]);
    }

    #[test]
    fn test_skip_down_moves_full_step_when_room() {
        let (mut stepper, seen) = recording(2025, 1930, 2025, 10);
        assert!(stepper.skip_down());
        assert_eq!(stepper.value(), 2015);
        assert_eq!(*seen.lock(), vec![2015]);
    }

    #[test]
    fn test_skip_enabled_one_away_from_bound() {
        let (mut stepper, _) = recording(2011, 2010, 2020, 10);
        assert!(stepper.flags().can_skip_down);
        assert!(stepper.skip_down());
        assert_eq!(stepper.value(), 2010);
    }

    #[test]
    fn test_start_outside_bounds_is_not_clamped() {
        let (mut stepper, seen) = recording(2030, 2010, 2020, 10);
        assert_eq!(stepper.value(), 2030);
        assert!(stepper.flags().can_step_down);
        assert!(!stepper.flags().can_step_up);

        assert!(!stepper.step_up());
        assert!(stepper.skip_down());
        assert_eq!(stepper.value(), 2020);
        assert_eq!(*seen.lock(), vec![2020]);
    }

    #[test]
    fn test_start_below_min_only_moves_up() {
        let (mut stepper, seen) = recording(1900, 1930, 2025, 10);
        assert!(!stepper.flags().can_step_down);
        assert!(!stepper.flags().can_skip_down);
        assert!(stepper.flags().can_step_up);

        assert!(!stepper.step_down());
        assert!(!stepper.skip_down());
        assert_eq!(stepper.value(), 1900);

        // One step up is still below the range
        assert!(stepper.step_up());
        assert_eq!(stepper.value(), 1901);
        assert!(!stepper.flags().can_step_down);
        assert_eq!(*seen.lock(), vec![1901]);
    }

    #[test]
    fn test_degenerate_range() {
        let (mut stepper, seen) = recording(2000, 2000, 2000, 10);
        assert_eq!(
            stepper.flags(),
            StepperFlags {
                can_step_down: false,
                can_step_up: false,
                can_skip_down: false,
                can_skip_up: false,
            }
        );
        assert!(!stepper.step_up() && !stepper.skip_down());
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_invalid_construction_rejected() {
        assert_eq!(
            BoundedRangeStepper::new(2015, 2020, 2010, |_| {}).err(),
            Some(ControlError::InvertedBounds { min: 2020, max: 2010 })
        );
        assert_eq!(
            BoundedRangeStepper::with_skip_step(2015, 2010, 2020, |_| {}, 0).err(),
            Some(ControlError::InvalidSkipStep(0))
        );
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let (mut stepper, _) = recording(i32::MAX - 1, i32::MIN, i32::MAX, u32::MAX);
        assert!(stepper.skip_up());
        assert_eq!(stepper.value(), i32::MAX);
        assert!(stepper.skip_down());
        assert_eq!(stepper.value(), i32::MIN);
    }

    #[test]
    fn test_mount_layout_and_disabled_state() {
        let (mut stepper, _) = recording(2010, 2010, 2020, 10);
        let mut surface = SurfaceTree::new();
        let root = stepper.mount(&mut surface);
        assert_eq!(stepper.container(), Some(root));

        let nodes = surface.children(root).to_vec();
        assert_eq!(nodes.len(), 5);
        let texts: Vec<_> = nodes.iter().map(|n| surface.text(*n).unwrap()).collect();
        assert_eq!(texts, vec!["«", "‹", "2010", "›", "»"]);
        assert_eq!(surface.hint(nodes[0]), Some("Previous 10 Years"));
        assert_eq!(surface.hint(nodes[4]), Some("Next 10 Years"));

        assert!(surface.is_disabled(nodes[0]));
        assert!(surface.is_disabled(nodes[1]));
        assert!(!surface.is_disabled(nodes[3]));
        assert!(!surface.is_disabled(nodes[4]));

        // Disabled arrows never produce a click
        assert_eq!(surface.click(nodes[1]), None);
    }

    #[test]
    fn test_clicks_refresh_surface() {
        let (mut stepper, seen) = recording(2015, 2010, 2020, 10);
        let mut surface = SurfaceTree::new();
        let root = stepper.mount(&mut surface);
        let nodes = surface.children(root).to_vec();

        assert!(stepper.handle_click(&mut surface, nodes[4]));
        assert_eq!(surface.text(nodes[2]), Some("2020"));
        assert!(surface.is_disabled(nodes[3]));
        assert!(surface.is_disabled(nodes[4]));
        assert!(!surface.is_disabled(nodes[1]));

        // A direct call at the bound is still rejected
        assert!(!stepper.handle_click(&mut surface, nodes[4]));
        assert!(!stepper.handle_click(&mut surface, nodes[2]));
        assert_eq!(*seen.lock(), vec![2020]);
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        StepDown,
        StepUp,
        SkipDown,
        SkipUp,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::StepDown),
            Just(Op::StepUp),
            Just(Op::SkipDown),
            Just(Op::SkipUp),
        ]
    }

    proptest! {
        #[test]
        fn prop_value_stays_in_bounds(
            min in -50i32..50,
            span in 0i32..40,
            offset in 0i32..40,
            skip in 1u32..25,
            ops in prop::collection::vec(op(), 0..60),
        ) {
            let max = min + span;
            let start = min + offset.min(span);
            let (mut stepper, seen) = recording(start, min, max, skip);
            assert_flags_consistent(&stepper);

            let mut notifications = 0;
            for op in ops {
                let before = stepper.value();
                let flags = stepper.flags();
                let moved = match op {
                    Op::StepDown => stepper.step_down(),
                    Op::StepUp => stepper.step_up(),
                    Op::SkipDown => stepper.skip_down(),
                    Op::SkipUp => stepper.skip_up(),
                };
                let allowed = match op {
                    Op::StepDown => flags.can_step_down,
                    Op::StepUp => flags.can_step_up,
                    Op::SkipDown => flags.can_skip_down,
                    Op::SkipUp => flags.can_skip_up,
                };
                prop_assert_eq!(moved, allowed);
                prop_assert_eq!(moved, stepper.value() != before);
                if moved {
                    notifications += 1;
                    prop_assert_eq!(seen.lock().last().copied(), Some(stepper.value()));
                }
                prop_assert!(stepper.value() >= min && stepper.value() <= max);
                assert_flags_consistent(&stepper);
            }
            prop_assert_eq!(seen.lock().len(), notifications);
        }
    }
}
