use crate::{
    animation::ease::Ease,
    foundation::error::{FlipdeckError, FlipdeckResult},
};

/// Z-order assigned to the page elevated above the stack mid-transition.
const RAISED_Z: i32 = 9999;

/// Direction of an adjacent page flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlipDirection {
    /// Turning the current page away to reveal the next one.
    Forward,
    /// Turning the previous page back into view.
    Backward,
}

/// Runtime flags of one page panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    /// Page is (one of the) currently shown pages.
    pub active: bool,
    /// Page has been flipped past.
    pub turned: bool,
    /// Page is the one animating mid-transition.
    pub flipping: bool,
    /// Stacking order; initialized descending by index.
    pub z: i32,
}

/// The pending flip, resolved exactly once when it completes.
#[derive(Clone, Copy, Debug)]
struct FlipTransition {
    from: usize,
    to: usize,
    direction: FlipDirection,
    elapsed: u64,
    duration: u64,
    raised: usize,
    saved_z: i32,
}

/// Outcome reported by [`DeckState::go_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoTo {
    /// Request silently ignored: mid-flip, out of bounds, or target is
    /// already current.
    Ignored,
    /// Non-adjacent jump performed as an instantaneous re-sync; the target
    /// page's entry effects must run now.
    HardReset,
    /// Adjacent flip started; entry effects run when [`DeckState::tick`]
    /// reports the transition settled.
    FlipStarted(FlipDirection),
}

/// Emitted by [`DeckState::tick`] when a flip transition completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    /// The page that became current; its entry effects must run.
    pub page: usize,
}

/// Page-transition state machine.
///
/// Tracks the current page index, drives the flip animation between
/// adjacent pages and guards against re-entrant transitions. The pending
/// transition is held in a single `Option` handle and taken exactly once on
/// completion, so a transition can never settle twice.
#[derive(Clone, Debug)]
pub struct DeckState {
    pages: Vec<PageState>,
    current: usize,
    transition: Option<FlipTransition>,
    flip_ticks: u64,
    flip_ease: Ease,
}

impl DeckState {
    /// Build the state machine for `page_count` pages.
    ///
    /// Stacking order is initialized once, descending by index, and page 0
    /// starts active.
    pub fn new(page_count: usize, flip_ticks: u64, flip_ease: Ease) -> FlipdeckResult<Self> {
        if page_count == 0 {
            return Err(FlipdeckError::deck("deck must have at least one page"));
        }
        if flip_ticks == 0 {
            return Err(FlipdeckError::deck("flip duration must be at least one tick"));
        }
        let pages = (0..page_count)
            .map(|i| PageState {
                active: i == 0,
                turned: false,
                flipping: false,
                z: (page_count - i) as i32,
            })
            .collect();
        Ok(Self {
            pages,
            current: 0,
            transition: None,
            flip_ticks,
            flip_ease,
        })
    }

    /// Index of the current page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Flags of one page, if the index is in bounds.
    pub fn page(&self, index: usize) -> Option<&PageState> {
        self.pages.get(index)
    }

    /// Flags of every page, in index order.
    pub fn pages(&self) -> &[PageState] {
        &self.pages
    }

    /// True while a flip transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Request a transition to `target`.
    ///
    /// No-op while animating, out of bounds, or when `target` is current.
    /// Non-adjacent jumps hard-reset; adjacent steps start a flip.
    pub fn go_to(&mut self, target: i64) -> GoTo {
        if self.transition.is_some() {
            return GoTo::Ignored;
        }
        if target < 0 || target >= self.pages.len() as i64 {
            return GoTo::Ignored;
        }
        let target = target as usize;
        if target == self.current {
            return GoTo::Ignored;
        }

        if target.abs_diff(self.current) > 1 {
            self.hard_reset_to(target);
            return GoTo::HardReset;
        }

        let direction = if target > self.current {
            FlipDirection::Forward
        } else {
            FlipDirection::Backward
        };
        let (from, to) = (self.current, target);

        // Both pages show during the flip; flags settle on completion.
        self.pages[to].active = true;
        let raised = match direction {
            FlipDirection::Forward => from,
            FlipDirection::Backward => to,
        };
        let saved_z = self.pages[raised].z;
        self.pages[raised].z = RAISED_Z;
        self.pages[raised].flipping = true;
        if direction == FlipDirection::Backward {
            self.pages[to].turned = false;
        }

        self.transition = Some(FlipTransition {
            from,
            to,
            direction,
            elapsed: 0,
            duration: self.flip_ticks,
            raised,
            saved_z,
        });
        GoTo::FlipStarted(direction)
    }

    /// Request the next page.
    pub fn next(&mut self) -> GoTo {
        self.go_to(self.current as i64 + 1)
    }

    /// Request the previous page.
    pub fn prev(&mut self) -> GoTo {
        self.go_to(self.current as i64 - 1)
    }

    /// Instantaneous re-sync to `target`: cancels any in-flight flip,
    /// clears every page's transient flags and marks only `target` active.
    ///
    /// Out-of-bounds targets are ignored.
    pub fn hard_reset_to(&mut self, target: usize) {
        if target >= self.pages.len() {
            return;
        }
        if let Some(t) = self.transition.take() {
            self.pages[t.raised].z = t.saved_z;
        }
        for page in &mut self.pages {
            page.active = false;
            page.turned = false;
            page.flipping = false;
        }
        self.current = target;
        self.pages[target].active = true;
    }

    /// Advance the in-flight transition by one tick.
    ///
    /// Returns the settle event exactly once, on the tick the transition
    /// completes; the handle is consumed so it can never fire again.
    pub fn tick(&mut self) -> Option<Settled> {
        {
            let t = self.transition.as_mut()?;
            t.elapsed += 1;
            if t.elapsed < t.duration {
                return None;
            }
        }
        let t = self.transition.take()?;

        match t.direction {
            FlipDirection::Forward => {
                self.pages[t.from].active = false;
                self.pages[t.from].flipping = false;
                self.pages[t.from].turned = true;
            }
            FlipDirection::Backward => {
                self.pages[t.from].active = false;
                self.pages[t.to].flipping = false;
            }
        }
        self.pages[t.raised].z = t.saved_z;
        self.current = t.to;
        Some(Settled { page: t.to })
    }

    /// The flipping page and its eased half-turn progress, if animating.
    ///
    /// Forward flips run 0 to 1; backward flips start pre-positioned at the
    /// half-turn and run back to 0.
    pub fn flip_progress(&self) -> Option<(usize, f64)> {
        let t = self.transition.as_ref()?;
        let raw = t.elapsed as f64 / t.duration as f64;
        let eased = self.flip_ease.apply(raw);
        let progress = match t.direction {
            FlipDirection::Forward => eased,
            FlipDirection::Backward => 1.0 - eased,
        };
        Some((t.raised, progress))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/state.rs"]
mod tests;
