use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// Outcome of one logical request, as a single tagged state.
///
/// A hook instance is always in exactly one of these states, so a stale
/// error can never sit next to fresh data. `Idle` means nothing has been
/// dispatched yet; `Loading` spans exactly the in-flight window of the
/// latest dispatch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Issue tracker for overlapping dispatches on one hook instance.
///
/// Every dispatch gets a sequence number; a settlement is applied only if
/// it belongs to the latest issued dispatch. Re-dispatching before the
/// previous call resolves therefore supersedes it: the superseded call's
/// outcome is discarded no matter which HTTP response arrives last, making
/// the winner deterministic.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    /// Start a new dispatch, superseding any in-flight one. Returns the
    /// ticket to present at settlement.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether the settlement holding `ticket` is for the latest dispatch
    /// and should be applied to state.
    pub fn try_settle(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

/// Generic request hook return type: the current state plus the trigger.
pub struct RequestHandle<T> {
    pub state: RequestState<T>,
    pub send: Callback<()>,
}

impl<T> RequestHandle<T> {
    /// Render based on request state with contextual loading/error messages.
    ///
    /// This handles the common page pattern of three mutually exclusive
    /// views: a loading indicator (also shown for `Idle`, since pages
    /// dispatch on mount), an error message, or the populated view.
    ///
    /// # Arguments
    ///
    /// * `context` - Contextual string like "projects" or "expense report"
    /// * `render_fn` - Function to render when data is available
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T) -> Html,
    {
        match &self.state {
            RequestState::Idle | RequestState::Loading => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {}...", context)}
                    </p>
                </div>
            },
            RequestState::Failure(error) => html! {
                <div class="p-4 rounded-md bg-red-50 \
                           dark:bg-red-900/20 border \
                           border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading {}: {}", context, error)}
                    </p>
                </div>
            },
            RequestState::Success(data) => render_fn(data),
        }
    }
}

/// Generic request hook, bound to one operation for its lifetime.
///
/// No network activity happens at construction; each `send.emit(())`
/// dispatches exactly one call of `run`. State moves to `Loading` at
/// dispatch and settles to `Success`/`Failure` when the call resolves,
/// unless a newer dispatch has superseded it, in which case the settlement
/// is dropped.
///
/// # Example
///
/// ```rust,ignore
/// let profile = use_request(|| async move {
///     get_api_client().user_profile().await.map_err(|e| e.to_string())
/// });
/// // later: profile.send.emit(());
/// ```
#[hook]
pub fn use_request<T, F, Fut>(run: F) -> RequestHandle<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(RequestState::default);
    let sequencer = use_mut_ref(RequestSequencer::default);

    let send = {
        let state = state.clone();
        let run = Rc::new(run);

        Callback::from(move |_| {
            let state = state.clone();
            let sequencer = sequencer.clone();
            let run = run.clone();

            let ticket = sequencer.borrow_mut().begin();
            state.set(RequestState::Loading);

            yew::platform::spawn_local(async move {
                let outcome = run().await;
                if sequencer.borrow().try_settle(ticket) {
                    state.set(match outcome {
                        Ok(data) => RequestState::Success(data),
                        Err(error) => RequestState::Failure(error),
                    });
                }
            });
        })
    };

    RequestHandle {
        state: (*state).clone(),
        send,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Drives the sequencer + state pair the way the hook body does, without
    // needing a rendered component.
    struct Harness {
        sequencer: RequestSequencer,
        state: RequestState<&'static str>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                sequencer: RequestSequencer::default(),
                state: RequestState::default(),
            }
        }

        fn dispatch(&mut self) -> u64 {
            let ticket = self.sequencer.begin();
            self.state = RequestState::Loading;
            ticket
        }

        fn settle(&mut self, ticket: u64, outcome: Result<&'static str, &str>) {
            if self.sequencer.try_settle(ticket) {
                self.state = match outcome {
                    Ok(data) => RequestState::Success(data),
                    Err(error) => RequestState::Failure(error.to_string()),
                };
            }
        }
    }

    #[test]
    fn fresh_instance_is_idle() {
        let harness = Harness::new();
        assert!(harness.state.is_idle());
        assert_eq!(harness.state.data(), None);
        assert_eq!(harness.state.error(), None);
    }

    #[test]
    fn successful_call_passes_through_loading() {
        let mut harness = Harness::new();
        let ticket = harness.dispatch();
        assert!(harness.state.is_loading());
        harness.settle(ticket, Ok("body"));
        assert_eq!(harness.state.data(), Some(&"body"));
        assert!(!harness.state.is_loading());
    }

    #[test]
    fn failed_call_settles_to_failure_with_message() {
        let mut harness = Harness::new();
        let ticket = harness.dispatch();
        harness.settle(ticket, Err("Title required"));
        assert_eq!(harness.state.error(), Some("Title required"));
        assert_eq!(harness.state.data(), None);
    }

    #[test]
    fn success_replaces_prior_failure_wholesale() {
        let mut harness = Harness::new();
        let first = harness.dispatch();
        harness.settle(first, Err("boom"));
        let second = harness.dispatch();
        harness.settle(second, Ok("recovered"));
        // Single tagged state: no stale error can coexist with the data.
        assert_eq!(harness.state.data(), Some(&"recovered"));
        assert_eq!(harness.state.error(), None);
    }

    #[test]
    fn superseded_dispatch_settlement_is_discarded() {
        let mut harness = Harness::new();
        let first = harness.dispatch();
        let second = harness.dispatch();

        // First call settles late: ignored, still loading the second.
        harness.settle(first, Ok("stale"));
        assert!(harness.state.is_loading());

        harness.settle(second, Ok("fresh"));
        assert_eq!(harness.state.data(), Some(&"fresh"));
    }

    #[test]
    fn superseded_dispatch_is_discarded_regardless_of_arrival_order() {
        let mut harness = Harness::new();
        let first = harness.dispatch();
        let second = harness.dispatch();

        // Second (latest) settles before the first's response arrives.
        harness.settle(second, Ok("fresh"));
        harness.settle(first, Err("stale failure"));

        // The late stale failure must not clobber the applied result.
        assert_eq!(harness.state.data(), Some(&"fresh"));
        assert_eq!(harness.state.error(), None);
    }

    #[test]
    fn sequential_awaited_dispatches_are_idempotent() {
        let mut harness = Harness::new();
        for _ in 0..2 {
            let ticket = harness.dispatch();
            harness.settle(ticket, Ok("same"));
            assert_eq!(harness.state.data(), Some(&"same"));
        }
    }

    #[test]
    fn tickets_are_monotonic() {
        let mut sequencer = RequestSequencer::default();
        let a = sequencer.begin();
        let b = sequencer.begin();
        let c = sequencer.begin();
        assert!(a < b && b < c);
    }
}
