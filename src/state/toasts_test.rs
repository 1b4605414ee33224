use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut toasts = ToastState::default();
    let a = toasts.push(ToastLevel::Success, "one");
    let b = toasts.push(ToastLevel::Error, "two");
    assert!(b > a);
    assert_eq!(toasts.items.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut toasts = ToastState::default();
    let a = toasts.push(ToastLevel::Error, "stale");
    let b = toasts.push(ToastLevel::Success, "keep");
    toasts.dismiss(a);

    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, b);
}

#[test]
fn dismissing_unknown_id_is_a_no_op() {
    let mut toasts = ToastState::default();
    toasts.push(ToastLevel::Success, "only");
    toasts.dismiss(999);
    assert_eq!(toasts.items.len(), 1);
}
