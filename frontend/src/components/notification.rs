use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum NotificationAction {
    Push(Notification),
    Dismiss(u32),
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    pub items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn apply(&self, action: NotificationAction) -> Self {
        let mut items = self.items.clone();
        match action {
            NotificationAction::Push(notification) => items.push(notification),
            NotificationAction::Dismiss(id) => items.retain(|n| n.id != id),
        }
        Self { items }
    }
}

impl Reducible for NotificationQueue {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Handle for raising toasts; each one dismisses itself after `duration_ms`
#[derive(Clone)]
pub struct Notifier {
    dispatch: Callback<NotificationAction>,
    next_id: Rc<Cell<u32>>,
    duration_ms: u32,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message.into());
    }

    fn notify(&self, kind: NotificationKind, message: String) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.dispatch
            .emit(NotificationAction::Push(Notification { id, kind, message }));

        let dispatch = self.dispatch.clone();
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            dispatch.emit(NotificationAction::Dismiss(id));
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self {
            dispatch: Callback::noop(),
            next_id: Rc::new(Cell::new(0)),
            duration_ms: 0,
        }
    }
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        self.dispatch == other.dispatch
            && Rc::ptr_eq(&self.next_id, &other.next_id)
            && self.duration_ms == other.duration_ms
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub duration_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let queue = use_reducer(NotificationQueue::default);

    let notifier = {
        let dispatcher = queue.dispatcher();
        let duration_ms = props.duration_ms;
        use_memo(duration_ms, move |duration_ms| Notifier {
            dispatch: Callback::from(move |action| dispatcher.dispatch(action)),
            next_id: Rc::new(Cell::new(0)),
            duration_ms: *duration_ms,
        })
    };

    let dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(NotificationAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            {props.children.clone()}
            <div class="toast-container">
                {for queue.items.iter().map(|notification| {
                    let id = notification.id;
                    let dismiss = dismiss.clone();
                    html! {
                        <div key={id} class={classes!("toast", notification.kind.css_class())} role="alert">
                            <span class="toast-message">{&notification.message}</span>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Fechar"
                                onclick={Callback::from(move |_: MouseEvent| dismiss.emit(id))}
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32, kind: NotificationKind, message: &str) -> Notification {
        Notification {
            id,
            kind,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_push_keeps_arrival_order() {
        let saved = toast(0, NotificationKind::Success, "Pessoa cadastrada com sucesso!");
        let failed = toast(1, NotificationKind::Error, "Erro ao deletar pessoa. Tente novamente.");
        let queue = NotificationQueue::default()
            .apply(NotificationAction::Push(saved))
            .apply(NotificationAction::Push(failed));

        let ids: Vec<u32> = queue.items.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        let queue = NotificationQueue::default()
            .apply(NotificationAction::Push(toast(0, NotificationKind::Success, "a")))
            .apply(NotificationAction::Push(toast(1, NotificationKind::Success, "b")))
            .apply(NotificationAction::Dismiss(0));

        assert_eq!(queue.items, vec![toast(1, NotificationKind::Success, "b")]);

        let unchanged = queue.apply(NotificationAction::Dismiss(42));
        assert_eq!(unchanged, queue);
    }
}
