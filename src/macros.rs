/// Accessors for the `RwSignal` fields of [`crate::global_state::Globals`].
///
/// `global_signals! { pub toast_queue => toast_queue: ToastQueue }` expands to
/// `pub fn toast_queue() -> RwSignal<ToastQueue>`, so toast code reaches the
/// shared queue and notifier settings without threading them through props.
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
