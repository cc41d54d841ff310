use crate::events::SessionEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLogEventKind {
    Connected,
    PriceTicked,
    BuyAccepted,
    SellAccepted,
    RoundReset,
    PayoutComposed,
    ActionIgnored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLogEvent {
    pub tick: u64,
    pub kind: RunLogEventKind,
}

impl RunLogEvent {
    pub fn new(tick: u64, kind: RunLogEventKind) -> Self {
        Self { tick, kind }
    }
}

pub trait RunLogWriter {
    fn write(&mut self, event: RunLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemoryRunLogWriter {
    events: Vec<RunLogEvent>,
}

impl InMemoryRunLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RunLogEvent] {
        &self.events
    }
}

impl RunLogWriter for InMemoryRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        self.events.push(event);
    }
}

pub fn record(writer: &mut dyn RunLogWriter, event: &SessionEvent) {
    let (tick, kind) = match *event {
        SessionEvent::Connected { .. } => (0, RunLogEventKind::Connected),
        SessionEvent::PriceTicked { tick, .. } => (tick, RunLogEventKind::PriceTicked),
        SessionEvent::Bought { tick, .. } => (tick, RunLogEventKind::BuyAccepted),
        SessionEvent::Sold { tick, .. } => (tick, RunLogEventKind::SellAccepted),
        SessionEvent::RoundReset { tick } => (tick, RunLogEventKind::RoundReset),
        SessionEvent::PayoutReady { tick, .. } => (tick, RunLogEventKind::PayoutComposed),
        SessionEvent::ActionIgnored { tick, .. } => (tick, RunLogEventKind::ActionIgnored),
    };

    writer.write(RunLogEvent::new(tick, kind));
}
