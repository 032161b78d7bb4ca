//! Sign-out sequencing. Leaving the guarded view has to happen before the
//! session disappears, otherwise the still-mounted guard sees an anonymous
//! visitor and toasts a redirect to the login page.

use crate::features::auth::guard::{Navigator, Scheduler};

/// Where a signed-out user ends up.
pub const SIGNED_OUT_PATH: &str = "/";

/// Navigates home, then clears the session once the navigation has settled.
///
/// The returned handle owns the pending clear; the caller has to keep it
/// alive (or detach it) until it fires.
pub fn sign_out<V, S>(navigator: &V, scheduler: &S, clear_session: Box<dyn FnOnce()>) -> S::Handle
where
    V: Navigator,
    S: Scheduler,
{
    navigator.navigate(SIGNED_OUT_PATH, false);
    scheduler.schedule(0, clear_session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    type Log = Rc<RefCell<Vec<String>>>;

    struct LoggingNavigator(Log);

    impl Navigator for LoggingNavigator {
        fn navigate(&self, path: &str, replace: bool) {
            self.0.borrow_mut().push(format!("navigate {path} replace={replace}"));
        }
    }

    #[derive(Default)]
    struct DeferredScheduler {
        tasks: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    }

    impl Scheduler for DeferredScheduler {
        type Handle = ();

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
            self.tasks.borrow_mut().push((delay_ms, task));
        }
    }

    fn clear_into(log: &Log) -> Box<dyn FnOnce()> {
        let log = Rc::clone(log);
        Box::new(move || log.borrow_mut().push("clear".to_string()))
    }

    #[test]
    fn navigates_before_clearing_the_session() {
        let log = Log::default();
        let scheduler = DeferredScheduler::default();

        sign_out(&LoggingNavigator(Rc::clone(&log)), &scheduler, clear_into(&log));

        assert_eq!(*log.borrow(), vec!["navigate / replace=false".to_string()]);

        let tasks: Vec<_> = scheduler.tasks.borrow_mut().drain(..).collect();
        assert_eq!(tasks.len(), 1);
        for (delay_ms, task) in tasks {
            assert_eq!(delay_ms, 0);
            task();
        }
        assert_eq!(
            *log.borrow(),
            vec!["navigate / replace=false".to_string(), "clear".to_string()]
        );
    }

    #[test]
    fn session_survives_until_the_deferred_clear_runs() {
        let log = Log::default();
        let scheduler = DeferredScheduler::default();

        sign_out(&LoggingNavigator(Rc::clone(&log)), &scheduler, clear_into(&log));

        assert!(!log.borrow().iter().any(|entry| entry == "clear"));
    }
}
