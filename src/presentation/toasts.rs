use crate::application::ErrorNotifier;
use crate::domain::error_classification::CaughtError;
use crate::global_state::{Toast, catalog, dismiss_toast, notifier_config, push_toast, toast_queue};
use futures::future::{AbortHandle, abortable};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static DISMISS_TIMERS: RefCell<HashMap<u32, AbortHandle>> = RefCell::new(HashMap::new());
}

/// Classify `error` with the installed catalog and show it as a toast
pub fn show_error(error: &CaughtError) -> u32 {
    let notification = ErrorNotifier::new(catalog()).notify(error);
    let id = push_toast(notification);

    let config = notifier_config().get_untracked();
    if config.auto_dismiss() {
        schedule_dismiss(id, config.toast_duration_ms);
    }
    id
}

/// Close a toast and cancel its pending timer
pub fn close_toast(id: u32) -> bool {
    if let Some(handle) = DISMISS_TIMERS.with(|timers| timers.borrow_mut().remove(&id)) {
        handle.abort();
    }
    dismiss_toast(id)
}

fn schedule_dismiss(id: u32, duration_ms: u32) {
    let (timer, handle) = abortable(TimeoutFuture::new(duration_ms));
    DISMISS_TIMERS.with(|timers| timers.borrow_mut().insert(id, handle));

    wasm_bindgen_futures::spawn_local(async move {
        if timer.await.is_ok() {
            DISMISS_TIMERS.with(|timers| timers.borrow_mut().remove(&id));
            dismiss_toast(id);
        }
    });
}

#[component]
pub fn ErrorToasts() -> impl IntoView {
    let queue = toast_queue();

    view! {
        <div class="toast-stack" role="region" aria-live="polite">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastCard toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let id = toast.id;
    let notification = toast.notification;
    let class = format!("toast toast-{}", notification.variant.as_ref());
    let category = notification.category.as_str();

    view! {
        <div class=class data-category=category>
            <strong class="toast-title">{notification.title}</strong>
            <p class="toast-description">{notification.description}</p>
            <button class="toast-close" aria-label="Close" on:click=move |_| {
                close_toast(id);
            }>
                "×"
            </button>
        </div>
    }
}
