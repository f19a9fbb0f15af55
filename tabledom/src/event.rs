/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click on an element. The default action (checkbox toggle)
    /// has already been applied when listeners see it.
    Click { target: String, modifiers: Modifiers },
    /// A form control's value changed.
    Change { target: String },
    /// Application-level "trigger" event dispatched on the body,
    /// asking for the results region to be refreshed from `url`.
    Trigger { url: String },
}

/// Event discriminant used to register listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    Trigger,
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
            modifiers: Modifiers::new(),
        }
    }

    pub fn shift_click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
            modifiers: Modifiers::shift(),
        }
    }

    pub fn change(target: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::Change { .. } => EventKind::Change,
            Self::Trigger { .. } => EventKind::Trigger,
        }
    }

    /// The originating element. `None` for events dispatched on the body.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. } | Self::Change { target } => Some(target),
            Self::Trigger { .. } => None,
        }
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}
