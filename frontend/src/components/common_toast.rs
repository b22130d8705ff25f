use std::rc::Rc;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// Outcome of an admin action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// How long the toast stays up, in milliseconds. Errors get longer to be read.
    pub fn duration_ms(&self) -> u32 {
        match self {
            ToastKind::Success => 5000,
            ToastKind::Error => 8000,
        }
    }

    fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-600 border-green-700",
            ToastKind::Error => "bg-red-600 border-red-700",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        }
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

/// Toasts on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue(pub Vec<Toast>);

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.0.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => {
                let before = toasts.len();
                toasts.retain(|t| t.id != id);
                if toasts.len() == before {
                    return self;
                }
            }
        }
        Rc::new(Self(toasts))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    push: Callback<Toast>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit(Toast::new(message, ToastKind::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit(Toast::new(message, ToastKind::Error));
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer_eq(ToastQueue::default);

    let push = {
        let queue = queue.clone();
        Callback::from(move |toast: Toast| {
            let id = toast.id;
            let duration = toast.kind.duration_ms();
            queue.dispatch(ToastAction::Push(toast));

            let queue = queue.clone();
            Timeout::new(duration, move || queue.dispatch(ToastAction::Dismiss(id))).forget();
        })
    };

    let dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: Uuid| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={ToastContext { push }}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-[60] space-y-2">
                {for queue.0.iter().map(|toast| html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} on_dismiss={dismiss.clone()} />
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<Uuid>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!(
            "flex", "items-center", "gap-3", "p-4", "rounded-lg", "shadow-lg", "border-l-4",
            "text-white", "min-w-80", "max-w-md", props.toast.kind.classes()
        )}>
            <span class="text-lg font-bold">{props.toast.kind.icon()}</span>
            <p class="flex-1 text-sm font-medium">{&props.toast.message}</p>
            <button onclick={on_close} class="text-lg hover:text-gray-200">{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_errors_stay_longer() {
        assert_eq!(ToastKind::Success.duration_ms(), 5000);
        assert_eq!(ToastKind::Error.duration_ms(), 8000);
    }

    #[test]
    fn test_queue_push_and_dismiss() {
        let saved = Toast::new("Match added", ToastKind::Success);
        let failed = Toast::new("Action failed", ToastKind::Error);
        assert_ne!(saved.id, failed.id);

        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(saved.clone()))
            .reduce(ToastAction::Push(failed.clone()));
        assert_eq!(queue.0.len(), 2);

        let queue = queue.reduce(ToastAction::Dismiss(saved.id));
        assert_eq!(queue.0, vec![failed]);
    }

    #[test]
    fn test_dismissing_unknown_id_keeps_state() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(Toast::new("Saved", ToastKind::Success)));
        let same = Rc::clone(&queue).reduce(ToastAction::Dismiss(Uuid::new_v4()));
        assert!(Rc::ptr_eq(&queue, &same));
    }
}
