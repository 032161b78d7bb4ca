use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Returns a callback that navigates to a path after a delay. Scheduling again
/// replaces the pending timer; unmounting the calling view clears it.
pub(crate) fn use_delayed_redirect() -> impl Fn(&'static str, u32) + Clone + 'static {
    let timer = StoredValue::new_local(None::<Timeout>);
    let navigate = use_navigate();

    on_cleanup(move || {
        timer.try_set_value(None);
    });

    move |path, delay_ms| {
        let navigate = navigate.clone();
        timer.set_value(Some(Timeout::new(delay_ms, move || {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        })));
    }
}
