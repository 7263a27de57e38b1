use dioxus_logger::tracing::info;
use editor_types::WorkspaceAction;

/// Gates `handler` behind a tier check.
///
/// The returned closure normalizes each raw event, asks `is_accessible`, and
/// only then calls `handler`. A rejected value never reaches `handler`;
/// instead `dispatch` receives an upgrade prompt for `feature_name`.
pub fn tiered_decorator<E, C, H, P, D, N>(
    mut handler: H,
    is_accessible: P,
    feature_name: &'static str,
    mut dispatch: D,
    normalize: N,
) -> impl FnMut(E)
where
    H: FnMut(C),
    P: Fn(&C) -> bool,
    D: FnMut(WorkspaceAction),
    N: Fn(E) -> C,
{
    move |raw: E| {
        let value = normalize(raw);
        if is_accessible(&value) {
            handler(value);
        } else {
            info!("Blocked {} change outside the user's tier", feature_name);
            dispatch(WorkspaceAction::OpenUpgradeModal {
                feature_name: feature_name.to_string(),
            });
        }
    }
}
