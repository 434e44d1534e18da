use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::state::notification::{NotificationKind, NotificationStack, Toast, NOTIFICATION_STYLES};
use crate::utils::shared::StateHandle;

/// Shared through context so any component can raise a toast.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    stack: StateHandle<NotificationStack>,
    visible_ms: u32,
    exit_ms: u32,
}

impl Notifier {
    pub fn new(stack: StateHandle<NotificationStack>, config: &SiteConfig) -> Self {
        Self {
            stack,
            visible_ms: config.notification_visible_ms,
            exit_ms: config.notification_exit_ms,
        }
    }

    /// Shows a toast, then schedules its exit and removal. The timers are
    /// fire-and-forget; each one only touches the toast with its own id.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.stack.update(|stack| stack.present(message, kind));
        let stack = self.stack.clone();
        let exit_ms = self.exit_ms;
        Timeout::new(self.visible_ms, move || {
            stack.update(|s| s.begin_exit(id));
            Timeout::new(exit_ms, move || {
                if !stack.update(|s| s.remove(id)) {
                    log::debug!("Notification {} already removed", id);
                }
            })
            .forget();
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationsProps {
    pub toasts: Vec<Toast>,
}

#[function_component]
pub fn Notifications(props: &NotificationsProps) -> Html {
    html! {
        <>
            { for props.toasts.iter().map(|toast| html! {
                <ToastView key={toast.id} toast={toast.clone()} />
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Toast,
}

/// One toast next to its own style block; both unmount together.
#[function_component]
fn ToastView(props: &ToastViewProps) -> Html {
    let toast = &props.toast;
    html! {
        <>
            <style>{NOTIFICATION_STYLES}</style>
            <div class={classes!("notification", toast.kind.css_class())} style={toast.animation()}>
                {&toast.message}
            </div>
        </>
    }
}
