use super::*;

#[test]
fn push_appends_newest_last() {
    let mut toasts = Toasts::default();
    toasts.push("First", "one", ToastKind::Info);
    toasts.push("Second", "two", ToastKind::Error);
    assert_eq!(toasts.items.len(), 2);
    assert_eq!(toasts.items[1].title, "Second");
    assert_eq!(toasts.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut toasts = Toasts::default();
    let first = toasts.push("First", "", ToastKind::Info);
    let second = toasts.push("Second", "", ToastKind::Success);
    toasts.dismiss(first);
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, second);
}

#[test]
fn clear_empties_the_stack() {
    let mut toasts = Toasts::default();
    toasts.push("First", "", ToastKind::Info);
    toasts.clear();
    assert!(toasts.items.is_empty());
}
