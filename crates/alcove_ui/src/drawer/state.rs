//! Reducer actions, notification effects, and transition logic for the drawer.
//!
//! The drawer runs in a hybrid controlled/uncontrolled mode: the caller may
//! supply an `open` input on every render, while the component owns the value
//! that actually decides visibility. [`DrawerState`] keeps both halves as an
//! explicit record so the reconciliation step is an ordinary function instead
//! of relying on framework re-render diffing.

/// Actions accepted by [`reduce_drawer`] to mutate [`DrawerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerAction {
    /// User-driven request to show the surface (trigger control activation).
    RequestOpen,
    /// User-driven request to hide the surface (dismiss control, backdrop
    /// click, or an escape gesture on the surface).
    RequestClose,
    /// Externally supplied `open` input observed during the current update
    /// cycle. Applied once per cycle by the component layer.
    SyncExternal(bool),
}

/// Notification effects emitted by [`reduce_drawer`] for the component layer
/// to deliver to caller callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEffect {
    /// Deliver the open notification.
    NotifyOpened,
    /// Deliver the close notification.
    NotifyClosed,
}

/// Visibility state owned by one mounted drawer instance.
///
/// `external_seen` records the external `open` input as of the last
/// reconciliation; `open` is the render-determining value. Between external
/// changes the two may diverge freely through user-driven requests. The state
/// is never shared across instances and is discarded on unmount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerState {
    external_seen: bool,
    open: bool,
}

impl DrawerState {
    /// Creates the state for a freshly mounted instance, seeded from the
    /// external `open` input at mount time.
    pub fn seeded(external: bool) -> Self {
        Self {
            external_seen: external,
            open: external,
        }
    }

    /// Whether the panel surface is currently visible.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::seeded(false)
    }
}

/// Applies one action to the drawer state and returns the notification
/// effects to deliver, in order.
///
/// Requests are level-triggered: a `RequestOpen` on an already-open drawer
/// still emits [`DrawerEffect::NotifyOpened`]. Reconciliation is the
/// opposite: `SyncExternal` overwrites `open` only when the input changed
/// since it was last seen, and never emits an effect. External updates are
/// authoritative at the moment they change; the child never writes back to
/// the caller's value.
///
/// Actions are applied in delivery order. Transitions cannot fail, so unlike
/// a windowing reducer there is no error channel here.
pub fn reduce_drawer(state: &mut DrawerState, action: DrawerAction) -> Vec<DrawerEffect> {
    match action {
        DrawerAction::RequestOpen => {
            state.open = true;
            vec![DrawerEffect::NotifyOpened]
        }
        DrawerAction::RequestClose => {
            state.open = false;
            vec![DrawerEffect::NotifyClosed]
        }
        DrawerAction::SyncExternal(external) => {
            if external != state.external_seen {
                state.external_seen = external;
                state.open = external;
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fold(state: &mut DrawerState, actions: &[DrawerAction]) -> Vec<DrawerEffect> {
        actions
            .iter()
            .flat_map(|action| reduce_drawer(state, *action))
            .collect()
    }

    #[test]
    fn request_sequence_last_call_wins() {
        let mut state = DrawerState::seeded(false);

        let effects = fold(
            &mut state,
            &[
                DrawerAction::RequestOpen,
                DrawerAction::RequestClose,
                DrawerAction::RequestOpen,
            ],
        );

        assert!(state.is_open());
        assert_eq!(
            effects,
            vec![
                DrawerEffect::NotifyOpened,
                DrawerEffect::NotifyClosed,
                DrawerEffect::NotifyOpened,
            ]
        );
    }

    #[test]
    fn repeated_open_is_idempotent_on_visibility_but_still_notifies() {
        let mut state = DrawerState::seeded(false);

        let first = reduce_drawer(&mut state, DrawerAction::RequestOpen);
        let second = reduce_drawer(&mut state, DrawerAction::RequestOpen);

        assert!(state.is_open());
        assert_eq!(first, vec![DrawerEffect::NotifyOpened]);
        assert_eq!(second, vec![DrawerEffect::NotifyOpened]);
    }

    #[test]
    fn repeated_close_still_notifies() {
        let mut state = DrawerState::seeded(false);

        let effects = fold(
            &mut state,
            &[DrawerAction::RequestClose, DrawerAction::RequestClose],
        );

        assert!(!state.is_open());
        assert_eq!(
            effects,
            vec![DrawerEffect::NotifyClosed, DrawerEffect::NotifyClosed]
        );
    }

    #[test]
    fn external_change_overrides_visibility_silently() {
        let mut state = DrawerState::seeded(false);

        let effects = reduce_drawer(&mut state, DrawerAction::SyncExternal(true));

        assert!(state.is_open());
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn external_close_after_seeding_open_is_silent() {
        let mut state = DrawerState::seeded(true);
        assert!(state.is_open());

        let effects = reduce_drawer(&mut state, DrawerAction::SyncExternal(false));

        assert!(!state.is_open());
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn unchanged_external_does_not_clobber_user_toggle() {
        let mut state = DrawerState::seeded(false);

        reduce_drawer(&mut state, DrawerAction::RequestOpen);
        // The mount-time value is re-delivered every cycle; it has not
        // changed, so the user's divergence survives.
        let effects = reduce_drawer(&mut state, DrawerAction::SyncExternal(false));

        assert!(state.is_open());
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn changed_external_wins_over_prior_user_toggle() {
        let mut state = DrawerState::seeded(true);

        reduce_drawer(&mut state, DrawerAction::RequestClose);
        assert!(!state.is_open());

        // false -> true is a genuine external change, so it is authoritative.
        reduce_drawer(&mut state, DrawerAction::SyncExternal(false));
        assert!(!state.is_open());
        reduce_drawer(&mut state, DrawerAction::SyncExternal(true));
        assert!(state.is_open());
    }

    #[test]
    fn same_cycle_delivery_order_decides_final_visibility() {
        let mut state = DrawerState::seeded(false);

        fold(
            &mut state,
            &[
                DrawerAction::SyncExternal(true),
                DrawerAction::RequestClose,
            ],
        );
        assert!(!state.is_open());

        let mut state = DrawerState::seeded(false);
        fold(
            &mut state,
            &[
                DrawerAction::RequestClose,
                DrawerAction::SyncExternal(true),
            ],
        );
        assert!(state.is_open());
    }

    #[test]
    fn both_states_are_reachable_as_initial_state() {
        assert!(!DrawerState::seeded(false).is_open());
        assert!(DrawerState::seeded(true).is_open());
        assert_eq!(DrawerState::default(), DrawerState::seeded(false));
    }
}
