use crate::config::Variant;

use super::{chart::Chart, surface::Surface, tooltip::TooltipState};

/// Input events the rendered chart reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    /// Pointer entered the mark at `mark`; `page` is the pointer in page pixels.
    PointerEnter { mark: usize, page: (f64, f64) },
    /// Pointer left the mark at `mark`.
    PointerLeave { mark: usize },
    /// Viewport width changed.
    Resize { width: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind { PointerEnter, PointerLeave, Resize }

impl ChartEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ChartEvent::PointerEnter { .. } => EventKind::PointerEnter,
            ChartEvent::PointerLeave { .. } => EventKind::PointerLeave,
            ChartEvent::Resize { .. } => EventKind::Resize,
        }
    }
}

/// An event handler. Handlers only touch the context they are given.
pub type Handler = fn(&mut ChartContext<'_>, &ChartEvent);

/// Everything that changes after the initial render: the surface size, the
/// tooltip, and which mark is hovered. One context per rendered chart.
pub struct ChartContext<'a> {
    chart: &'a Chart,
    pub surface: Surface,
    pub tooltip: TooltipState,
    hovered: Option<usize>,
    handlers: Vec<(EventKind, Handler)>,
}

impl<'a> ChartContext<'a> {
    /// Create a context with the standard tooltip and resize handlers.
    pub fn new(chart: &'a Chart) -> Self {
        let config = chart.config();
        let mut context = Self {
            chart,
            surface: Surface::new(config.width, config.height, config.variant),
            tooltip: TooltipState::default(),
            hovered: None,
            handlers: Vec::new(),
        };
        context.register(EventKind::PointerEnter, show_tooltip);
        context.register(EventKind::PointerLeave, hide_tooltip);
        context.register(EventKind::Resize, resize_surface);
        context
    }

    /// Context with no handlers registered.
    pub fn bare(chart: &'a Chart) -> Self {
        let mut context = Self::new(chart);
        context.handlers.clear();
        context
    }

    #[inline] pub fn chart(&self) -> &'a Chart { self.chart }

    #[inline] pub fn hovered(&self) -> Option<usize> { self.hovered }

    /// Add a handler; handlers for the same kind run in registration order.
    pub fn register(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.push((kind, handler));
    }

    /// Run every handler registered for the event's kind. A leave for a mark
    /// other than the hovered one is stale and runs nothing.
    pub fn dispatch(&mut self, event: ChartEvent) {
        match event {
            ChartEvent::PointerEnter { mark, .. } => self.hovered = Some(mark),
            ChartEvent::PointerLeave { mark } => {
                if self.hovered != Some(mark) {
                    tracing::trace!(mark, hovered = ?self.hovered, "[events] ignoring stale pointer leave");
                    return
                }
                self.hovered = None;
            }
            ChartEvent::Resize { .. } => {}
        }
        let kind = event.kind();
        let handlers: Vec<Handler> = self.handlers.iter()
            .filter(|(k, _)| *k == kind)
            .map(|&(_, handler)| handler)
            .collect();
        for handler in handlers { handler(self, &event) }
    }

    /// Translate a raw pointer position (page pixels) into enter/leave events
    /// by hit-testing the marks.
    pub fn pointer_moved(&mut self, page: (f64, f64)) {
        let (x, y) = self.surface.to_logical(page.0, page.1);
        let target = self.chart.mark_at(x, y);
        if target == self.hovered { return }
        if let Some(mark) = self.hovered { self.dispatch(ChartEvent::PointerLeave { mark }) }
        if let Some(mark) = target { self.dispatch(ChartEvent::PointerEnter { mark, page }) }
    }
}

fn show_tooltip(context: &mut ChartContext<'_>, event: &ChartEvent) {
    let &ChartEvent::PointerEnter { mark, page } = event else { return };
    let chart = context.chart;
    let Some(record) = chart.record_for(mark) else {
        tracing::debug!(mark, "[events] hovered region has no education record; tooltip unchanged");
        return
    };
    let bounds = (context.surface.variant == Variant::Responsive).then(|| context.surface.displayed());
    context.tooltip.show(record, page, &chart.config().tooltip, bounds);
}

fn hide_tooltip(context: &mut ChartContext<'_>, event: &ChartEvent) {
    if !matches!(event, ChartEvent::PointerLeave { .. }) { return }
    let chart = context.chart;
    context.tooltip.hide(&chart.config().tooltip);
}

fn resize_surface(context: &mut ChartContext<'_>, event: &ChartEvent) {
    let &ChartEvent::Resize { width } = event else { return };
    context.surface.resize(width);
    tracing::trace!(width, displayed = ?context.surface.displayed(), "[events] resized");
}
