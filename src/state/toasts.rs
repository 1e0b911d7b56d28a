//! Toast notices shown by pages after API calls resolve.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Visual flavor of a notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

/// One notice in the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: uuid::Uuid,
    pub title: String,
    pub content: String,
    pub kind: ToastKind,
}

/// Shared notice queue, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toasts {
    pub items: Vec<Toast>,
}

impl Toasts {
    /// Append a notice and return its id for later dismissal.
    pub fn push(&mut self, title: &str, content: &str, kind: ToastKind) -> uuid::Uuid {
        let id = uuid::Uuid::new_v4();
        self.items.push(Toast {
            id,
            title: title.to_owned(),
            content: content.to_owned(),
            kind,
        });
        id
    }

    pub fn dismiss(&mut self, id: uuid::Uuid) {
        self.items.retain(|t| t.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
