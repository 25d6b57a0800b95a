use crate::application::{ErrorNotification, NotifierConfig};
use crate::domain::errors::{AppError, AppResult};
use crate::infrastructure::i18n::MessageCatalog;
use leptos::*;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Toast currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: ErrorNotification,
}

/// Ordered toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append and return the new id; evicts the oldest beyond `max_visible`.
    /// `max_visible == 0` means unbounded.
    pub fn push(&mut self, notification: ErrorNotification, max_visible: usize) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });

        if max_visible > 0 && self.toasts.len() > max_visible {
            let excess = self.toasts.len() - max_visible;
            self.toasts.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

pub struct Globals {
    pub toast_queue: RwSignal<ToastQueue>,
    pub notifier_config: RwSignal<NotifierConfig>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();
static CATALOG: OnceCell<MessageCatalog> = OnceCell::new();
static TOASTS_MOUNTED: AtomicBool = AtomicBool::new(false);

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        toast_queue: create_rw_signal(ToastQueue::new()),
        notifier_config: create_rw_signal(NotifierConfig::default()),
    })
}

crate::global_signals! {
    pub toast_queue => toast_queue: ToastQueue,
    pub notifier_config => notifier_config: NotifierConfig,
}

/// Install the catalog used by toasts; only the first call takes effect
pub fn install_catalog(catalog: MessageCatalog) -> bool {
    CATALOG.set(catalog).is_ok()
}

/// Layer `json` over the English catalog and install it.
///
/// Fails once any toast or description has already resolved messages,
/// since the catalog in use can no longer change.
pub fn install_catalog_overrides(json: &str) -> AppResult<()> {
    let overrides = MessageCatalog::from_json(json)?;
    if install_catalog(MessageCatalog::english().merge(overrides)) {
        Ok(())
    } else {
        Err(AppError::CatalogError(
            "message catalog already in use; overrides must be installed before the first notification"
                .to_string(),
        ))
    }
}

/// `true` for the first caller only; the toast stack is mounted once
pub fn claim_toast_mount() -> bool {
    !TOASTS_MOUNTED.swap(true, Ordering::SeqCst)
}

/// Installed catalog, English defaults otherwise
pub fn catalog() -> &'static MessageCatalog {
    CATALOG.get_or_init(MessageCatalog::english)
}

pub fn push_toast(notification: ErrorNotification) -> u32 {
    let max_visible = notifier_config().with_untracked(|config| config.max_visible);
    let mut id = 0;
    toast_queue().update(|queue| id = queue.push(notification, max_visible));
    id
}

pub fn dismiss_toast(id: u32) -> bool {
    let mut removed = false;
    toast_queue().update(|queue| removed = queue.dismiss(id));
    removed
}
