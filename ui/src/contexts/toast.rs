//! Global one-shot notification channel for success/failure feedback on
//! write operations.

use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

const DEFAULT_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    /// Milliseconds until auto-dismiss; `None` keeps the toast until the
    /// user closes it.
    pub duration: Option<u32>,
}

impl Toast {
    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            duration: Some(DEFAULT_DURATION_MS),
        }
    }
}

/// Toasts in display order (oldest first).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

/// Handle for pushing notifications from event handlers and async blocks.
#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;
        self.context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            let context = self.context.clone();
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastKind::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastKind::Error));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

/// Access the toast channel. Must be called under a `ToastProvider`.
#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast called outside ToastProvider");
    ToastHandle { context }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducer_appends_and_removes_in_order() {
        let state = Rc::new(ToastState::default());
        let a = Toast::new("saved", ToastKind::Success);
        let b = Toast::new("failed", ToastKind::Error);
        let a_id = a.id;

        let state = state.reduce(ToastAction::Add(a));
        let state = state.reduce(ToastAction::Add(b));
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0].message, "saved");

        let state = state.reduce(ToastAction::Remove(a_id));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "failed");
    }
}
