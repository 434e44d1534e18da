//! Corner toasts. Several may be visible at once; each one runs its own
//! visible/exit timers and removing an already removed toast is a no-op.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification--info",
            NotificationKind::Success => "notification--success",
            NotificationKind::Error => "notification--error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn animation(&self) -> Option<&'static str> {
        match self.phase {
            ToastPhase::Visible => None,
            ToastPhase::Leaving => Some("animation: slideOutRight 0.3s ease-out forwards;"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationStack {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn count_of(&self, kind: NotificationKind) -> usize {
        self.toasts.iter().filter(|t| t.kind == kind).count()
    }

    /// Adds a toast and returns the id its timers should refer to.
    pub fn present(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Visible,
        });
        id
    }

    /// The visible window elapsed; start the exit animation.
    pub fn begin_exit(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }
}

pub const NOTIFICATION_STYLES: &str = r#"
        .notification {
            position: fixed;
            top: 100px;
            right: var(--space-20);
            background: var(--color-surface);
            color: var(--color-text);
            padding: var(--space-16) var(--space-20);
            border-radius: var(--radius-base);
            box-shadow: var(--shadow-lg);
            border-left: 4px solid var(--color-info);
            z-index: 1500;
            max-width: 300px;
            animation: slideInRight 0.3s ease-out;
        }
        .notification--success {
            border-left-color: var(--color-success);
        }
        .notification--error {
            border-left-color: var(--color-error);
        }
        @keyframes slideInRight {
            from { transform: translateX(100%); opacity: 0; }
            to { transform: translateX(0); opacity: 1; }
        }
        @keyframes slideOutRight {
            from { transform: translateX(0); opacity: 1; }
            to { transform: translateX(100%); opacity: 0; }
        }
    "#;
