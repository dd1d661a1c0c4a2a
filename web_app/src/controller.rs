//! Module with [`Controller`] connecting the reactive state with the backend.

use std::rc::Rc;

use leptos::{RwSignal, SignalUpdate as _, create_rw_signal};
use moties_engine::{Config, FetchTicket, HttpMotionApi, MotionApi as _, MotionView};
use wasm_bindgen_futures::spawn_local;

/// Owner of the [`MotionView`] signal and the backend client.
///
/// Every fetch is spawned and its result is applied to the signal when it arrives.
#[derive(Clone)]
pub struct Controller {
    /// Reactive view state.
    state: RwSignal<MotionView>,
    /// Backend client.
    api: Rc<HttpMotionApi>,
}

impl Controller {
    /// Construct new [`Controller`] with empty state.
    pub fn new(config: &Config) -> Self {
        Self {
            state: create_rw_signal(MotionView::new(config.recent_limit)),
            api: Rc::new(HttpMotionApi::from_config(config)),
        }
    }

    /// Get reactive view state.
    pub const fn state(&self) -> RwSignal<MotionView> {
        self.state
    }

    /// Fetch factions for the selection lists.
    pub fn load_factions(&self) {
        let state = self.state;
        let api = Rc::clone(&self.api);
        spawn_local(async move {
            let result = api.factions().await;
            state.update(|view| view.load_factions(result));
        });
    }

    /// Fetch motions for the current faction selections.
    pub fn apply_filter(&self) {
        self.fetch_with(MotionView::begin_fetch);
    }

    /// Reset all filters and fetch the default motions.
    pub fn clear_filters(&self) {
        self.fetch_with(MotionView::clear_filters);
    }

    /// Fetch votes of the motion with `motion_id`.
    pub fn fetch_votes(&self, motion_id: String) {
        let state = self.state;
        let api = Rc::clone(&self.api);
        spawn_local(async move {
            let result = api.motion_votes(&motion_id).await;
            state.update(|view| {
                view.attach_votes(&motion_id, result);
            });
        });
    }

    /// Start a fetch with `begin` and apply its result once it arrives.
    fn fetch_with(&self, begin: fn(&mut MotionView) -> FetchTicket) {
        let state = self.state;
        let Some(ticket) = state.try_update(begin) else {
            return;
        };

        let api = Rc::clone(&self.api);
        spawn_local(async move {
            let result = ticket.query().run(api.as_ref()).await;
            state.update(|view| {
                view.complete_fetch(ticket, result);
            });
        });
    }
}
