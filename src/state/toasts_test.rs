use super::*;

#[test]
fn push_queues_a_toast_with_its_id() {
    let mut state = ToastsState::default();
    let id = state.push("Sucesso", "Evento criado com sucesso!", ToastVariant::Success);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].variant, ToastVariant::Success);
}

#[test]
fn pushing_beyond_the_limit_evicts_the_oldest() {
    let mut state = ToastsState::default();
    state.push("Primeiro", "a", ToastVariant::Success);
    let kept = state.push("Segundo", "b", ToastVariant::Destructive);
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert_eq!(state.toasts.last().map(|t| t.id), Some(kept));
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastsState::default();
    let id = state.push("Erro", "Falha ao criar evento", ToastVariant::Destructive);
    state.dismiss(id);
    assert!(state.toasts.is_empty());
}

#[test]
fn dismissing_unknown_ids_is_a_no_op() {
    let mut state = ToastsState::default();
    state.push("Sucesso", "ok", ToastVariant::Success);
    state.dismiss(Uuid::new_v4());
    assert_eq!(state.toasts.len(), 1);
}
