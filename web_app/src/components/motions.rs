//! Module with [`MotionList`] component implementation.

use leptos::{
    CollectView as _, For, IntoView, SignalGet as _, SignalWith as _, View, component,
    create_memo, view,
};
use moties_engine::{MotionView, Status, data_model::Motion, present};

use crate::controller::Controller;

/// List of displayed motions with a header and a loading indicator.
#[component]
pub fn MotionList(controller: Controller) -> impl IntoView {
    let state = controller.state();
    let displayed = create_memo(move |_| state.with(|view| view.displayed().cloned().collect::<Vec<_>>()));
    let status = move || state.with(MotionView::status);

    let body = move || -> View {
        if status() == Status::Empty {
            return view! {
                <div class="card empty">
                    <p>"Geen moties gevonden met de huidige filters."</p>
                </div>
            }
            .into_view();
        }

        let controller = controller.clone();
        view! {
            <div class="motion-list">
                <For
                    each=move || displayed.get()
                    // Votes can be attached later, so the card has to be rebuilt then
                    key=|motion| (motion.id.clone(), motion.votes.is_some())
                    children=move |motion: Motion| {
                        view! { <MotionCard motion=motion controller=controller.clone()/> }
                    }
                />
            </div>
        }
        .into_view()
    };

    view! {
        <main class="motions">
            <div class="motions-header">
                <h2>"Moties (" {move || displayed.with(Vec::len)} ")"</h2>
                {move || (status() == Status::Loading).then(|| view! { <span class="loading">"Laden..."</span> })}
            </div>
            {body}
        </main>
    }
}

/// Card with all details of a single motion.
#[component]
fn MotionCard(motion: Motion, controller: Controller) -> impl IntoView {
    let title = present::title(&motion).to_owned();
    let date = present::submission_date(&motion).into_owned();

    let submitters = (!motion.submitters.is_empty()).then(|| {
        let badges = motion
            .submitters
            .iter()
            .map(|submitter| {
                view! { <span class="badge badge-secondary">{present::submitter_label(submitter)}</span> }
            })
            .collect_view();
        view! {
            <div class="section">
                <span class="label">"Indieners:"</span>
                <div class="badges">{badges}</div>
            </div>
        }
    });

    let appreciation = motion.cabinet_appreciation.as_ref().map(|appreciation| {
        let class = format!("badge badge-{}", present::appreciation_tone(appreciation).as_str());
        view! {
            <div class="section">
                <span class="label">"Kabinetsappreciatie:"</span>
                <span class=class>{appreciation.to_string()}</span>
            </div>
        }
    });

    let votes = match &motion.votes {
        Some(votes) if votes.is_empty() => None,
        Some(votes) => {
            let badges = votes
                .iter()
                .map(|(faction, outcome)| {
                    let class = format!("badge badge-{}", present::vote_tone(outcome).as_str());
                    let text = format!("{faction}: {outcome}");
                    view! { <span class=class>{text}</span> }
                })
                .collect_view();
            Some(
                view! {
                    <div class="section">
                        <span class="label">"Stemgedrag:"</span>
                        <div class="votes-grid">{badges}</div>
                    </div>
                }
                .into_view(),
            )
        }
        None => {
            let motion_id = motion.id.clone();
            Some(
                view! {
                    <button type="button" class="button button-outline button-small"
                        on:click=move |_event| controller.fetch_votes(motion_id.clone())>
                        "Stemgedrag ophalen"
                    </button>
                }
                .into_view(),
            )
        }
    };

    view! {
        <article class="card motion-card">
            <header class="motion-card-header">
                <div>
                    <h3>{title}</h3>
                    <p class="description">{motion.subject}</p>
                </div>
                <span class="badge badge-outline">{motion.number}</span>
            </header>
            <div class="details">
                <span>"Ingediend: " {date}</span>
                <span>"Status: " {motion.status}</span>
            </div>
            {submitters}
            {appreciation}
            {votes}
        </article>
    }
}
