/// One-shot load state of an external source. No retries, no cancellation:
/// a source moves from `Pending` to exactly one of the other states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceState<T> {
    Pending,
    Ready(T),
    Failed,
}

impl<T> SourceState<T> {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SourceState::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            SourceState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Whether the scene may paint country shading yet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewReadiness {
    /// At least one source is still pending. The bare outline disc may be
    /// shown, country shading may not.
    Loading,
    /// Both sources resolved; a failed metric load counts as resolved
    /// because the fallback dataset stands in for it.
    Ready,
    /// Geography failed. Terminal: nothing will render.
    Unrenderable,
}

/// Join gate over the two independent loads. Geography failure is terminal
/// regardless of the metric outcome.
pub fn view_readiness<M, G>(
    metrics: &SourceState<M>,
    geography: &SourceState<G>,
) -> ViewReadiness {
    match geography {
        SourceState::Failed => ViewReadiness::Unrenderable,
        SourceState::Pending => ViewReadiness::Loading,
        SourceState::Ready(_) => {
            if metrics.is_resolved() {
                ViewReadiness::Ready
            } else {
                ViewReadiness::Loading
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SourceState, ViewReadiness, view_readiness};

    type S = SourceState<()>;

    #[test]
    fn both_pending_is_loading() {
        assert_eq!(view_readiness::<(), ()>(&S::Pending, &S::Pending), ViewReadiness::Loading);
    }

    #[test]
    fn metrics_failure_still_reaches_ready() {
        // The fallback dataset recovers a failed metric load.
        assert_eq!(
            view_readiness::<(), ()>(&S::Failed, &S::Ready(())),
            ViewReadiness::Ready
        );
    }

    #[test]
    fn geography_failure_is_terminal() {
        assert_eq!(
            view_readiness::<(), ()>(&S::Ready(()), &S::Failed),
            ViewReadiness::Unrenderable
        );
        assert_eq!(
            view_readiness::<(), ()>(&S::Pending, &S::Failed),
            ViewReadiness::Unrenderable
        );
    }

    #[test]
    fn geography_alone_is_not_enough() {
        assert_eq!(
            view_readiness::<(), ()>(&S::Pending, &S::Ready(())),
            ViewReadiness::Loading
        );
    }
}
