use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn class(&self) -> &'static str {
        match self {
            ToastType::Success => "toast-success",
            ToastType::Error => "toast-error",
            ToastType::Info => "toast-info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration_ms: 4000,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl ToastContext {
    pub fn show(&self, message: impl Into<String>, toast_type: ToastType) {
        self.add_toast.emit(Toast::new(message, toast_type));
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let add_toast = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let id = toast.id;
            let duration = toast.duration_ms;
            toasts.dispatch(ToastListAction::Push(toast));

            let toasts = toasts.clone();
            Timeout::new(duration, move || toasts.dispatch(ToastListAction::Remove(id))).forget();
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| toasts.dispatch(ToastListAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: toasts.items.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context.clone()}>
            {props.children.clone()}
            <div class="toast-stack">
                {for context.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} on_close={context.remove_toast.clone()} />
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

/// Reducer-backed list so timers always remove from the latest state.
#[derive(Clone, Debug, Default, PartialEq)]
struct ToastList {
    items: Vec<Toast>,
}

enum ToastListAction {
    Push(Toast),
    Remove(Uuid),
}

impl Reducible for ToastList {
    type Action = ToastListAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastListAction::Push(toast) => items.push(toast),
            ToastListAction::Remove(id) => items.retain(|t| t.id != id),
        }
        std::rc::Rc::new(Self { items })
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_close: Callback<Uuid>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_close.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.toast_type.class())} role="status">
            <span class="toast-icon">{props.toast.toast_type.icon()}</span>
            <p class="toast-message">{&props.toast.message}</p>
            <button class="toast-close" onclick={on_close}>{"×"}</button>
        </div>
    }
}
