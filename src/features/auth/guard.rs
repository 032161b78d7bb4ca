//! Route authorization decisions.
//!
//! A guard evaluation reads the persisted session, compares its role with the
//! role a route requires and either lets the content render or produces a
//! redirect. Redirects run in two phases: the access notice is emitted
//! immediately, then navigation is queued on a [`Scheduler`] so the notice is
//! on screen before the view goes away. The queued navigation is tied to a
//! [`CancelToken`]; dropping the [`PendingRedirect`] (on teardown, or when a
//! newer evaluation supersedes it) cancels it.
//!
//! This is a UX gate only. The backend still authorizes every API call.

use crate::features::auth::session::{Session, SessionProvider};
use std::{cell::Cell, rc::Rc};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Notification attached to a denied evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessNotice {
    /// No usable session was found.
    LoginRequired,
    /// A session exists but its role does not match.
    Forbidden,
}

impl AccessNotice {
    pub fn message(self) -> &'static str {
        match self {
            AccessNotice::LoginRequired => "Vui lòng đăng nhập để tiếp tục",
            AccessNotice::Forbidden => "Bạn không có quyền truy cập",
        }
    }
}

/// Outcome of comparing a session with a route's required role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect {
        destination: &'static str,
        notice: AccessNotice,
    },
}

impl GuardDecision {
    pub fn should_redirect(&self) -> bool {
        matches!(self, GuardDecision::Redirect { .. })
    }

    pub fn destination(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Render => None,
            GuardDecision::Redirect { destination, .. } => Some(*destination),
        }
    }
}

/// Decides whether `session` may see a route that requires `required_role`.
///
/// Roles are compared with exact string equality; one role per route.
pub fn decide(session: Option<&Session>, required_role: &str) -> GuardDecision {
    match session {
        None => GuardDecision::Redirect {
            destination: LOGIN_PATH,
            notice: AccessNotice::LoginRequired,
        },
        Some(session) if session.role_name != required_role => GuardDecision::Redirect {
            destination: HOME_PATH,
            notice: AccessNotice::Forbidden,
        },
        Some(_) => GuardDecision::Render,
    }
}

/// Fire-and-forget sink for access notices.
pub trait Notifier {
    fn notify(&self, notice: AccessNotice);
}

/// Router seam used to perform redirects.
pub trait Navigator {
    fn navigate(&self, path: &str, replace: bool);
}

/// Runs a task after a delay. Dropping the returned handle may cancel the
/// task; guards additionally check their own [`CancelToken`].
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Shared flag flipped when a queued redirect must not run anymore.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A queued redirect. Cancelled when dropped.
pub struct PendingRedirect<H> {
    destination: &'static str,
    token: CancelToken,
    _handle: H,
}

impl<H> PendingRedirect<H> {
    pub fn destination(&self) -> &'static str {
        self.destination
    }
}

impl<H> Drop for PendingRedirect<H> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Result of one guard evaluation.
pub enum GuardOutcome<H> {
    Render,
    Redirect(PendingRedirect<H>),
}

impl<H> GuardOutcome<H> {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardOutcome::Render)
    }
}

/// Route guard wired to its collaborators.
pub struct RouteGuard<P, N, V, S> {
    sessions: P,
    notifier: N,
    navigator: V,
    scheduler: S,
    delay_ms: u32,
}

impl<P, N, V, S> RouteGuard<P, N, V, S>
where
    P: SessionProvider,
    N: Notifier,
    V: Navigator + Clone + 'static,
    S: Scheduler,
{
    pub fn new(sessions: P, notifier: N, navigator: V, scheduler: S, delay_ms: u32) -> Self {
        Self {
            sessions,
            notifier,
            navigator,
            scheduler,
            delay_ms,
        }
    }

    /// Evaluates access for `required_role`.
    ///
    /// A denied evaluation emits exactly one notice right away and queues at
    /// most one navigation, which only runs if the returned
    /// [`PendingRedirect`] is still alive when the scheduler fires.
    pub fn evaluate(&self, required_role: &str) -> GuardOutcome<S::Handle> {
        let session = self.sessions.load();
        match decide(session.as_ref(), required_role) {
            GuardDecision::Render => {
                tracing::debug!(required_role, "route access granted");
                GuardOutcome::Render
            }
            GuardDecision::Redirect {
                destination,
                notice,
            } => {
                tracing::info!(
                    required_role,
                    destination,
                    authenticated = session.is_some(),
                    "route access denied"
                );
                self.notifier.notify(notice);

                let token = CancelToken::new();
                let task_token = token.clone();
                let navigator = self.navigator.clone();
                let handle = self.scheduler.schedule(
                    self.delay_ms,
                    Box::new(move || {
                        if task_token.is_cancelled() {
                            tracing::debug!(destination, "skipping cancelled redirect");
                            return;
                        }
                        navigator.navigate(destination, true);
                    }),
                );

                GuardOutcome::Redirect(PendingRedirect {
                    destination,
                    token,
                    _handle: handle,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct RecordingNotifier(Rc<RefCell<Vec<AccessNotice>>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: AccessNotice) {
            self.0.borrow_mut().push(notice);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator(Rc<RefCell<Vec<(String, bool)>>>);

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str, replace: bool) {
            self.0.borrow_mut().push((path.to_string(), replace));
        }
    }

    /// Collects tasks so tests decide when "time passes".
    #[derive(Clone, Default)]
    struct ManualScheduler {
        tasks: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>,
    }

    impl ManualScheduler {
        fn run_all(&self) {
            let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
            for (_, task) in tasks {
                task();
            }
        }

        fn queued(&self) -> usize {
            self.tasks.borrow().len()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ();

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
            self.tasks.borrow_mut().push((delay_ms, task));
        }
    }

    #[derive(Clone)]
    struct FixedSession(Option<Session>);

    impl SessionProvider for FixedSession {
        fn load(&self) -> Option<Session> {
            self.0.clone()
        }
    }

    struct Harness {
        notices: RecordingNotifier,
        navigator: RecordingNavigator,
        scheduler: ManualScheduler,
        guard: RouteGuard<FixedSession, RecordingNotifier, RecordingNavigator, ManualScheduler>,
    }

    fn session(role: &str) -> Session {
        Session {
            id: 1,
            role_name: role.to_string(),
            username: Some("staff".to_string()),
            full_name: None,
            phone: None,
            department: None,
        }
    }

    fn harness(session: Option<Session>) -> Harness {
        let notices = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let scheduler = ManualScheduler::default();
        let guard = RouteGuard::new(
            FixedSession(session),
            notices.clone(),
            navigator.clone(),
            scheduler.clone(),
            100,
        );
        Harness {
            notices,
            navigator,
            scheduler,
            guard,
        }
    }

    #[test]
    fn decide_redirects_absent_session_to_login() {
        let decision = decide(None, "STAFF");
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                destination: "/login",
                notice: AccessNotice::LoginRequired,
            }
        );
        assert!(decision.should_redirect());
        assert_eq!(
            AccessNotice::LoginRequired.message(),
            "Vui lòng đăng nhập để tiếp tục"
        );
    }

    #[test]
    fn decide_redirects_wrong_role_home() {
        let admin = session("ADMIN");
        let decision = decide(Some(&admin), "STAFF");
        assert_eq!(decision.destination(), Some("/"));
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                destination: "/",
                notice: AccessNotice::Forbidden,
            }
        );
        assert_eq!(AccessNotice::Forbidden.message(), "Bạn không có quyền truy cập");
    }

    #[test]
    fn decide_renders_matching_role() {
        let staff = session("STAFF");
        let decision = decide(Some(&staff), "STAFF");
        assert_eq!(decision, GuardDecision::Render);
        assert!(!decision.should_redirect());
        assert_eq!(decision.destination(), None);
    }

    #[test]
    fn decide_compares_roles_exactly() {
        assert!(decide(Some(&session("staff")), "STAFF").should_redirect());
        assert!(decide(Some(&session("STAFF ")), "STAFF").should_redirect());
        assert!(decide(Some(&session("")), "STAFF").should_redirect());
    }

    #[test]
    fn absent_session_notifies_once_then_redirects_to_login() {
        let h = harness(None);
        let outcome = h.guard.evaluate("STAFF");

        assert!(!outcome.is_render());
        assert_eq!(*h.notices.0.borrow(), vec![AccessNotice::LoginRequired]);
        assert!(h.navigator.0.borrow().is_empty(), "navigation must be deferred");

        h.scheduler.run_all();
        assert_eq!(*h.navigator.0.borrow(), vec![("/login".to_string(), true)]);
        assert_eq!(h.notices.0.borrow().len(), 1);
        drop(outcome);
    }

    #[test]
    fn wrong_role_notifies_once_then_redirects_home() {
        let h = harness(Some(session("ADMIN")));
        let outcome = h.guard.evaluate("STAFF");

        match &outcome {
            GuardOutcome::Redirect(pending) => assert_eq!(pending.destination(), "/"),
            GuardOutcome::Render => panic!("expected redirect"),
        }
        assert_eq!(*h.notices.0.borrow(), vec![AccessNotice::Forbidden]);

        h.scheduler.run_all();
        assert_eq!(*h.navigator.0.borrow(), vec![("/".to_string(), true)]);
        drop(outcome);
    }

    #[test]
    fn matching_role_renders_without_side_effects() {
        let h = harness(Some(session("STAFF")));
        let outcome = h.guard.evaluate("STAFF");

        assert!(outcome.is_render());
        assert!(h.notices.0.borrow().is_empty());
        assert_eq!(h.scheduler.queued(), 0);
        h.scheduler.run_all();
        assert!(h.navigator.0.borrow().is_empty());
    }

    #[test]
    fn redirect_uses_configured_delay() {
        let h = harness(None);
        let _outcome = h.guard.evaluate("STAFF");
        assert_eq!(h.scheduler.tasks.borrow()[0].0, 100);
    }

    #[test]
    fn repeated_evaluation_yields_same_decision() {
        let h = harness(Some(session("ADMIN")));
        let first = h.guard.evaluate("STAFF");
        let second = h.guard.evaluate("STAFF");

        let destinations: Vec<_> = [&first, &second]
            .iter()
            .map(|outcome| match outcome {
                GuardOutcome::Redirect(pending) => Some(pending.destination()),
                GuardOutcome::Render => None,
            })
            .collect();
        assert_eq!(destinations, vec![Some("/"), Some("/")]);
        assert_eq!(
            *h.notices.0.borrow(),
            vec![AccessNotice::Forbidden, AccessNotice::Forbidden]
        );

        let allowed = harness(Some(session("STAFF")));
        assert!(allowed.guard.evaluate("STAFF").is_render());
        assert!(allowed.guard.evaluate("STAFF").is_render());
    }

    #[test]
    fn teardown_before_timer_fires_prevents_navigation() {
        let h = harness(None);
        let outcome = h.guard.evaluate("STAFF");
        assert_eq!(h.notices.0.borrow().len(), 1);

        drop(outcome);
        h.scheduler.run_all();

        assert!(h.navigator.0.borrow().is_empty());
    }

    #[test]
    fn newer_evaluation_supersedes_pending_redirect() {
        let h = harness(Some(session("SERVICE_STAFF")));
        let mut pending = Some(h.guard.evaluate("CASHIER_STAFF"));
        // Route change: the stale outcome is replaced, which drops it.
        drop(pending.replace(h.guard.evaluate("ADMIN")));

        h.scheduler.run_all();

        assert_eq!(h.notices.0.borrow().len(), 2);
        assert_eq!(*h.navigator.0.borrow(), vec![("/".to_string(), true)]);
        drop(pending);
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
