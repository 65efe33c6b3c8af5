use pixelforge_core::{Breakpoint, Framework};
use pixelforge_preview::{Document, RenderRequest, Synthesis, classify, synthesize};

use crate::{
    MountOutcome, SandboxHost, Surface,
    viewport::{Effect, ViewportController, ViewportEvent, ViewportState},
};

/// The preview panel exposed to the application shell.
///
/// Ties the viewport state machine, synthesis and the sandbox host together.
/// Each operation returns the outcome of the mount it triggered, if any.
#[derive(Debug)]
pub struct PreviewPanel<S> {
    controller: ViewportController,
    host: SandboxHost<S>,
    code: String,
    framework: Framework,
    notice: Option<Document>,
    mounted: bool,
}

impl<S: Surface> PreviewPanel<S> {
    pub fn new(host: SandboxHost<S>, framework: Framework, breakpoint: Breakpoint) -> Self {
        Self {
            controller: ViewportController::new(breakpoint),
            host,
            code: String::new(),
            framework,
            notice: None,
            mounted: false,
        }
    }

    /// Store all inputs, open the panel and render.
    pub fn render_preview(
        &mut self,
        code: impl Into<String>,
        framework: Framework,
        breakpoint: Breakpoint,
    ) -> Option<MountOutcome> {
        self.code = code.into();
        self.framework = framework;

        let strategy = classify(framework);
        self.controller
            .apply(ViewportEvent::SetBreakpoint(breakpoint), strategy);
        if self.controller.state().is_open {
            self.resynthesize()
        } else {
            self.dispatch(ViewportEvent::Open)
        }
    }

    pub fn open(&mut self) -> Option<MountOutcome> {
        self.dispatch(ViewportEvent::Open)
    }

    pub fn close(&mut self) -> Option<MountOutcome> {
        self.dispatch(ViewportEvent::Close)
    }

    pub fn toggle_fullscreen(&mut self) -> Option<MountOutcome> {
        self.dispatch(ViewportEvent::ToggleFullscreen)
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) -> Option<MountOutcome> {
        self.dispatch(ViewportEvent::SetBreakpoint(breakpoint))
    }

    pub fn refresh(&mut self) -> Option<MountOutcome> {
        self.dispatch(ViewportEvent::Refresh)
    }

    pub fn set_code(&mut self, code: impl Into<String>) -> Option<MountOutcome> {
        self.code = code.into();
        self.dispatch(ViewportEvent::CodeChanged)
    }

    pub fn set_framework(&mut self, framework: Framework) -> Option<MountOutcome> {
        self.framework = framework;
        self.dispatch(ViewportEvent::FrameworkChanged)
    }

    pub fn state(&self) -> &ViewportState {
        self.controller.state()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    /// The explanatory page shown instead of a live preview, if any.
    ///
    /// While a notice is shown the surface holds no document.
    pub fn notice(&self) -> Option<&Document> {
        self.notice.as_ref()
    }

    pub fn host(&self) -> &SandboxHost<S> {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut SandboxHost<S> {
        &mut self.host
    }

    fn dispatch(&mut self, event: ViewportEvent) -> Option<MountOutcome> {
        match self.controller.apply(event, classify(self.framework)) {
            Effect::Resynthesize => self.resynthesize(),
            Effect::Teardown => {
                self.notice = None;
                self.unmount();
                None
            }
            Effect::None => None,
        }
    }

    fn resynthesize(&mut self) -> Option<MountOutcome> {
        let breakpoint = self.controller.state().breakpoint;
        let request = RenderRequest::new(&self.code, self.framework, breakpoint);
        match synthesize(&request) {
            Synthesis::Live(document) => {
                self.notice = None;
                let outcome = self.host.mount(&document, breakpoint.width());
                self.mounted |= outcome.is_mounted();
                Some(outcome)
            }
            Synthesis::Notice(document) => {
                // the previous live document must not keep running behind it
                self.unmount();
                self.notice = Some(document);
                None
            }
        }
    }

    fn unmount(&mut self) {
        if self.mounted {
            self.host.teardown();
            self.mounted = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use pixelforge_core::FrameWidth;

    use super::*;
    use crate::{MemorySurface, SandboxPolicy};

    fn panel() -> PreviewPanel<MemorySurface> {
        PreviewPanel::new(
            SandboxHost::with_surface(MemorySurface::new(), SandboxPolicy::preview()),
            Framework::ReactTailwind,
            Breakpoint::Desktop,
        )
    }

    fn surface(panel: &PreviewPanel<MemorySurface>) -> &MemorySurface {
        panel.host().surface().unwrap()
    }

    #[test]
    fn test_render_preview_opens_and_mounts() {
        let mut panel = panel();
        let outcome = panel.render_preview(
            "export default () => <p>hi</p>",
            Framework::ReactTailwind,
            Breakpoint::Tablet,
        );

        assert_eq!(outcome, Some(MountOutcome::Mounted));
        assert!(panel.state().is_open);
        assert_eq!(surface(&panel).open_count(), 1);
        assert_eq!(surface(&panel).frame().unwrap().width, FrameWidth::Pixels(768));
    }

    #[test]
    fn test_render_preview_while_open_mounts_once() {
        let mut panel = panel();
        panel.render_preview("<p>a</p>", Framework::HtmlTailwind, Breakpoint::Desktop);
        panel.render_preview("<p>b</p>", Framework::HtmlTailwind, Breakpoint::Mobile);

        assert_eq!(surface(&panel).open_count(), 2);
        assert!(surface(&panel).document().unwrap().contains("<p>b</p>"));
    }

    #[test]
    fn test_unsupported_never_touches_surface() {
        let mut panel = panel();
        let outcome = panel.render_preview("<view/>", Framework::WeChatMiniProgram, Breakpoint::Desktop);
        panel.set_breakpoint(Breakpoint::Mobile);
        panel.refresh();
        panel.set_code("<view>2</view>");

        assert_eq!(outcome, None);
        assert!(panel.notice().unwrap().as_str().contains("WeChat Developer Tools"));
        assert_eq!(surface(&panel).open_count(), 0);
    }

    #[test]
    fn test_breakpoint_remounts_same_document() {
        let mut panel = panel();
        panel.render_preview("<div>x</div>", Framework::HtmlTailwind, Breakpoint::Desktop);
        let before = surface(&panel).document().unwrap().to_string();

        let outcome = panel.set_breakpoint(Breakpoint::Mobile);

        assert_eq!(outcome, Some(MountOutcome::Mounted));
        assert_eq!(surface(&panel).document().unwrap(), before);
        assert_eq!(surface(&panel).frame().unwrap().width, FrameWidth::Pixels(375));
        assert_eq!(surface(&panel).open_count(), 2);
    }

    #[test]
    fn test_close_tears_down_and_ignores_changes() {
        let mut panel = panel();
        panel.render_preview("<p/>", Framework::HtmlTailwind, Breakpoint::Desktop);
        panel.close();

        assert_eq!(panel.set_code("<p>new</p>"), None);
        assert_eq!(surface(&panel).document(), None);
        assert_eq!(panel.code(), "<p>new</p>");

        assert_eq!(panel.open(), Some(MountOutcome::Mounted));
        assert!(surface(&panel).document().unwrap().contains("<p>new</p>"));
    }

    #[test]
    fn test_switching_to_unsupported_keeps_notice() {
        let mut panel = panel();
        panel.render_preview("<p/>", Framework::HtmlTailwind, Breakpoint::Desktop);
        assert!(panel.notice().is_none());

        assert_eq!(panel.set_framework(Framework::VueVant), None);
        assert!(panel.notice().unwrap().as_str().contains("Vue 3 + Vant"));

        panel.set_framework(Framework::Bootstrap);
        assert!(panel.notice().is_none());
    }

    #[test]
    fn test_switching_to_unsupported_unmounts_live_document() {
        let mut panel = panel();
        panel.render_preview(
            "export default () => <p>live</p>",
            Framework::ReactTailwind,
            Breakpoint::Desktop,
        );
        assert!(surface(&panel).document().is_some());

        panel.set_framework(Framework::ReactTaro);

        assert!(panel.notice().is_some());
        assert_eq!(surface(&panel).document(), None);
        assert_eq!(surface(&panel).open_count(), 1);
    }

    #[test]
    fn test_fullscreen_does_not_remount() {
        let mut panel = panel();
        panel.render_preview("<p/>", Framework::HtmlTailwind, Breakpoint::Desktop);
        assert_eq!(panel.toggle_fullscreen(), None);
        assert!(panel.state().is_fullscreen);
        assert_eq!(surface(&panel).open_count(), 1);
    }
}
