//! Preview panel state machine.

use pixelforge_core::Breakpoint;
use pixelforge_preview::RenderStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub is_open: bool,
    pub is_fullscreen: bool,
    pub breakpoint: Breakpoint,
    /// Bumped on every refresh so embedders can force a remount.
    pub refresh_counter: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    Open,
    Close,
    ToggleFullscreen,
    SetBreakpoint(Breakpoint),
    Refresh,
    CodeChanged,
    FrameworkChanged,
}

/// Work the panel must do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Resynthesize,
    Teardown,
    None,
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    state: ViewportState,
}

impl ViewportController {
    /// A closed viewport at the given breakpoint.
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            state: ViewportState {
                is_open: false,
                is_fullscreen: false,
                breakpoint,
                refresh_counter: 0,
            },
        }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Apply an event under the currently active render strategy.
    ///
    /// While closed only `Open` produces work; other events just update
    /// state.
    pub fn apply(&mut self, event: ViewportEvent, strategy: RenderStrategy) -> Effect {
        let state = &mut self.state;
        let effect = match event {
            ViewportEvent::Open if state.is_open => Effect::None,
            ViewportEvent::Open => {
                state.is_open = true;
                Effect::Resynthesize
            }
            ViewportEvent::Close if state.is_open => {
                state.is_open = false;
                Effect::Teardown
            }
            ViewportEvent::Close => Effect::None,
            ViewportEvent::ToggleFullscreen => {
                state.is_fullscreen = !state.is_fullscreen;
                Effect::None
            }
            ViewportEvent::SetBreakpoint(breakpoint) => {
                let changed = state.breakpoint != breakpoint;
                state.breakpoint = breakpoint;
                // a notice page has no width-dependent layout
                if changed && state.is_open && strategy.is_live() {
                    Effect::Resynthesize
                } else {
                    Effect::None
                }
            }
            ViewportEvent::Refresh => {
                state.refresh_counter += 1;
                if state.is_open {
                    Effect::Resynthesize
                } else {
                    Effect::None
                }
            }
            ViewportEvent::CodeChanged | ViewportEvent::FrameworkChanged if state.is_open => {
                Effect::Resynthesize
            }
            ViewportEvent::CodeChanged | ViewportEvent::FrameworkChanged => Effect::None,
        };

        tracing::trace!(?event, ?effect, %strategy, "viewport event");
        effect
    }
}
