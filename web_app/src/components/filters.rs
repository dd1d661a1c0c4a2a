//! Module with [`FilterPanel`] component implementation.

use leptos::{
    CollectView as _, For, IntoView, RwSignal, SignalUpdate as _, SignalWith as _, component,
    event_target_value, view,
};
use moties_engine::{MotionView, VoteKind, data_model::Faction, present};

use crate::controller::Controller;

/// Sidebar with search input, faction vote selections and filter buttons.
#[component]
pub fn FilterPanel(controller: Controller) -> impl IntoView {
    let state = controller.state();
    let loading = move || state.with(MotionView::is_loading);
    let search_term = move || state.with(|view| view.filters().search_term().to_owned());

    let apply_controller = controller.clone();
    let on_apply = move |_event| apply_controller.apply_filter();
    let on_clear = move |_event| controller.clear_filters();

    view! {
        <aside class="card filter-panel">
            <h2>"Filters"</h2>
            <p class="description">"Filter moties op basis van stemgedrag"</p>

            <div class="form-item">
                <label for="search">"Zoeken"</label>
                <input type="search" id="search" placeholder="Zoek in titel, onderwerp..."
                    prop:value=search_term
                    on:input=move |event| {
                        let term = event_target_value(&event);
                        state.update(|view| view.set_search_term(term));
                    }/>
            </div>

            <hr/>
            <VoteChecklist state=state kind=VoteKind::For title="Partijen die VOOR stemden"/>
            <hr/>
            <VoteChecklist state=state kind=VoteKind::Against title="Partijen die TEGEN stemden"/>
            <hr/>

            <div class="form-item">
                <button type="button" class="button" disabled=loading on:click=on_apply>
                    {move || if loading() { "Laden..." } else { "Filter toepassen" }}
                </button>
                <button type="button" class="button button-outline" on:click=on_clear>
                    "Filters wissen"
                </button>
            </div>

            <ActiveFilters state=state/>
        </aside>
    }
}

/// Checkbox per faction toggling its selection for `kind`.
#[component]
fn VoteChecklist(state: RwSignal<MotionView>, kind: VoteKind, title: &'static str) -> impl IntoView {
    let prefix = match kind {
        VoteKind::For => "voor",
        VoteKind::Against => "tegen",
    };
    let factions = move || state.with(|view| view.factions().to_vec());

    view! {
        <fieldset class=format!("vote-checklist vote-checklist-{prefix}")>
            <legend>{title}</legend>
            <div class="scroll-area">
                <For
                    each=factions
                    key=|faction| faction.id.clone()
                    children=move |faction: Faction| {
                        let id = format!("{prefix}-{}", faction.id);
                        let label = present::faction_label(&faction);
                        let name = faction.name;
                        let checked_name = name.clone();
                        let checked = move || {
                            state.with(|view| view.filters().is_selected(&checked_name, kind))
                        };

                        view! {
                            <div class="checklist-item">
                                <input type="checkbox" id=id.clone() prop:checked=checked
                                    on:change=move |_event| state.update(|view| view.toggle(&name, kind))/>
                                <label for=id>{label}</label>
                            </div>
                        }
                    }
                />
            </div>
        </fieldset>
    }
}

/// Badges with currently selected factions.
#[component]
fn ActiveFilters(state: RwSignal<MotionView>) -> impl IntoView {
    let badges = move |kind: VoteKind, prefix: &'static str, class: &'static str| {
        state.with(|view| {
            view.filters()
                .selected(kind)
                .iter()
                .map(|faction| {
                    let text = format!("{prefix}: {faction}");
                    view! { <span class=format!("badge {class}")>{text}</span> }
                })
                .collect_view()
        })
    };

    move || {
        state
            .with(|view| view.filters().has_vote_selection())
            .then(|| {
                view! {
                    <div class="active-filters">
                        <span class="label">"Actieve filters:"</span>
                        <div class="badges">
                            {badges(VoteKind::For, "Voor", "badge-secondary")}
                            {badges(VoteKind::Against, "Tegen", "badge-destructive")}
                        </div>
                    </div>
                }
            })
    }
}
