//! Toast overlay: a context-provided queue plus its rendering host.
//!
//! DESIGN
//! ======
//! Pages push `(kind, title, message)` into the queue and never touch the
//! DOM, so the submission and listing flows stay testable off the browser.
//! Each toast auto-dismisses after a fixed duration (hydrate only; native
//! tests dismiss explicitly).

use leptos::prelude::*;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(4);

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// CSS modifier for a toast kind.
#[must_use]
pub fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast--success",
        ToastKind::Error => "toast--error",
    }
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Ordered queue of visible toasts, shared through Leptos context.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, title: &str, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, title: title.to_owned(), message: message.to_owned() });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Push a toast onto the shared queue and schedule its auto-dismissal.
pub fn push_toast(queue: RwSignal<ToastQueue>, kind: ToastKind, title: &str, message: &str) {
    let mut id = 0;
    queue.update(|q| id = q.push(kind, title, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_DURATION).await;
        queue.update(|q| q.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed overlay rendering the queue; mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        view! {
                            <div class=format!("toast {}", kind_class(toast.kind)) role="status">
                                <span class="toast__title">{toast.title}</span>
                                <span class="toast__message">{toast.message}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
