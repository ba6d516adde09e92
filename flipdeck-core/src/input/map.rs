use crate::foundation::core::Surface;

/// Keyboard keys the flipbook reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Key {
    /// Previous page.
    ArrowLeft,
    /// Next page.
    ArrowRight,
}

/// Logical user-facing controls, independent of the embedding markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Control {
    /// Seek + play the music and advance to the next page, as one action.
    Start,
    /// Hard reset to page 0.
    Restart,
    /// Manual firework-hearts burst.
    Burst,
    /// Play/pause the background music.
    MusicToggle,
    /// Next page.
    Next,
    /// Previous page.
    Prev,
}

/// An input event delivered by the embedding shell.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum InputEvent {
    /// A key press.
    Key(Key),
    /// A control activation (click on a button or action-tagged element).
    Control(Control),
    /// Click on a page's slide-tab handle.
    TabClick {
        /// Owning page index.
        page: usize,
    },
    /// Pointer pressed on a slide-tab handle.
    TabPointerDown {
        /// Owning page index.
        page: usize,
        /// Pointer x position in surface pixels.
        x: f64,
    },
    /// Pointer moved while dragging a slide-tab handle.
    TabPointerMove {
        /// Owning page index.
        page: usize,
        /// Pointer x position in surface pixels.
        x: f64,
    },
    /// Pointer released on a slide-tab handle.
    TabPointerUp {
        /// Owning page index.
        page: usize,
    },
    /// Pointer capture lost while dragging a slide-tab handle.
    TabPointerCancel {
        /// Owning page index.
        page: usize,
    },
    /// The drawing surface was resized.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

/// Engine command produced by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Advance to the next page.
    Next,
    /// Go back to the previous page.
    Prev,
    /// The combined start action.
    Start,
    /// Hard reset to page 0.
    Restart,
    /// Launch the firework-hearts display.
    BurstHearts,
    /// Flip the music play/pause state.
    ToggleMusic,
    /// Resync the drawing surface.
    Resize(Surface),
}

/// One scripted input, for replayable timelines.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptEvent {
    /// Tick at which the event fires.
    pub at_tick: u64,
    /// The event delivered at that tick.
    pub event: InputEvent,
}

#[derive(Clone, Copy, Debug, Default)]
struct TabState {
    open: bool,
    dragging: bool,
    start_x: f64,
}

/// Slide-out panel state per page, driven by click or pointer drag.
///
/// A drag past `+60` px opens the panel, past `-60` px closes it, and both
/// can latch within a single captured drag. Pages without a tab ignore
/// every tab event. The panels are independent of the page state machine.
#[derive(Clone, Debug)]
pub struct SlideTabs {
    tabs: Vec<Option<TabState>>,
}

impl SlideTabs {
    /// Horizontal drag distance that latches a panel open (and, negated,
    /// closed).
    pub const DRAG_THRESHOLD_PX: f64 = 60.0;

    /// One slot per page; `true` marks pages owning a tab.
    pub fn new(has_tab: &[bool]) -> Self {
        Self {
            tabs: has_tab
                .iter()
                .map(|&has| has.then(TabState::default))
                .collect(),
        }
    }

    /// True when the page's panel is open.
    pub fn is_open(&self, page: usize) -> bool {
        self.tabs
            .get(page)
            .and_then(|t| t.as_ref())
            .is_some_and(|t| t.open)
    }

    fn tab_mut(&mut self, page: usize) -> Option<&mut TabState> {
        self.tabs.get_mut(page)?.as_mut()
    }

    fn click(&mut self, page: usize) {
        if let Some(tab) = self.tab_mut(page) {
            tab.open = !tab.open;
        }
    }

    fn pointer_down(&mut self, page: usize, x: f64) {
        if let Some(tab) = self.tab_mut(page) {
            tab.dragging = true;
            tab.start_x = x;
        }
    }

    fn pointer_move(&mut self, page: usize, x: f64) {
        if let Some(tab) = self.tab_mut(page)
            && tab.dragging
        {
            let dx = x - tab.start_x;
            if dx > Self::DRAG_THRESHOLD_PX {
                tab.open = true;
            }
            if dx < -Self::DRAG_THRESHOLD_PX {
                tab.open = false;
            }
        }
    }

    fn pointer_end(&mut self, page: usize) {
        if let Some(tab) = self.tab_mut(page) {
            tab.dragging = false;
        }
    }
}

/// Maps input events to engine commands.
///
/// Slide-tab events are fully absorbed here (they never reach the page
/// state machine); everything else maps one-to-one.
#[derive(Clone, Debug)]
pub struct InputMap {
    tabs: SlideTabs,
}

impl InputMap {
    /// Input layer for a deck whose pages carry the given tab flags.
    pub fn new(has_tab: &[bool]) -> Self {
        Self {
            tabs: SlideTabs::new(has_tab),
        }
    }

    /// Slide-tab panel states.
    pub fn tabs(&self) -> &SlideTabs {
        &self.tabs
    }

    /// Translate one event; tab events update panel state and yield no
    /// command.
    pub fn map(&mut self, event: &InputEvent) -> Option<Command> {
        match *event {
            InputEvent::Key(Key::ArrowRight) => Some(Command::Next),
            InputEvent::Key(Key::ArrowLeft) => Some(Command::Prev),
            InputEvent::Control(control) => Some(match control {
                Control::Start => Command::Start,
                Control::Restart => Command::Restart,
                Control::Burst => Command::BurstHearts,
                Control::MusicToggle => Command::ToggleMusic,
                Control::Next => Command::Next,
                Control::Prev => Command::Prev,
            }),
            InputEvent::TabClick { page } => {
                self.tabs.click(page);
                None
            }
            InputEvent::TabPointerDown { page, x } => {
                self.tabs.pointer_down(page, x);
                None
            }
            InputEvent::TabPointerMove { page, x } => {
                self.tabs.pointer_move(page, x);
                None
            }
            InputEvent::TabPointerUp { page } | InputEvent::TabPointerCancel { page } => {
                self.tabs.pointer_end(page);
                None
            }
            InputEvent::Resize { width, height } => {
                Some(Command::Resize(Surface { width, height }))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/map.rs"]
mod tests;
