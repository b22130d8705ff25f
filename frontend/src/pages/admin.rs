use std::future::Future;

use log::{debug, error};
use shared::error::ApiError;
use shared::models::{
    achievement::Achievement, fixture::Match, gallery::GalleryItem, player::Player, stats::ClubStats,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiContext;
use crate::auth::SessionContext;
use crate::components::common_toast::ToastContext;
use crate::hooks::use_is_mounted;
use crate::Route;

mod achievements;
mod gallery;
mod matches;
mod players;
mod stats;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum AdminTab {
    Matches,
    Players,
    Stats,
    Achievements,
    Gallery,
}

impl AdminTab {
    const ALL: [AdminTab; 5] = [
        AdminTab::Matches,
        AdminTab::Players,
        AdminTab::Stats,
        AdminTab::Achievements,
        AdminTab::Gallery,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Matches => "Matches",
            AdminTab::Players => "Players",
            AdminTab::Stats => "Club Stats",
            AdminTab::Achievements => "Achievements",
            AdminTab::Gallery => "Gallery",
        }
    }
}

/// Runs a mutation, toasts the result and asks for a reload on success.
pub(crate) fn run_mutation<F>(
    request: F,
    toasts: ToastContext,
    success: &'static str,
    on_changed: Callback<()>,
) where
    F: Future<Output = Result<(), ApiError>> + 'static,
{
    spawn_local(async move {
        match request.await {
            Ok(()) => {
                toasts.success(success);
                on_changed.emit(());
            }
            Err(e) => {
                error!("Admin action failed: {}", e);
                toasts.error(format!("Action failed: {}", e));
            }
        }
    });
}

/// Input handler writing the element's value into one field of `state`.
pub(crate) fn bind_input<T: Clone + 'static>(
    state: &UseStateHandle<T>,
    apply: fn(&mut T, String),
) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, input.value());
        state.set(next);
    })
}

pub(crate) fn bind_select<T: Clone + 'static>(
    state: &UseStateHandle<T>,
    apply: fn(&mut T, String),
) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, select.value());
        state.set(next);
    })
}

pub(crate) const FIELD_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded";
pub(crate) const PRIMARY_BUTTON: &str = "px-4 py-2 bg-blue-900 text-white rounded hover:bg-blue-800";
pub(crate) const DANGER_LINK: &str = "text-red-600 hover:underline";

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let api = use_context::<ApiContext>().expect("Api context not found");
    let navigator = use_navigator().expect("Admin rendered outside a router");
    let mounted = use_is_mounted();
    let current_tab = use_state(|| AdminTab::Matches);

    let revision = use_state(|| 0u32);
    let matches = use_state(Vec::<Match>::new);
    let players = use_state(Vec::<Player>::new);
    let club_stats = use_state(|| None::<ClubStats>);
    let achievements = use_state(Vec::<Achievement>::new);
    let gallery = use_state(Vec::<GalleryItem>::new);

    // Every collection is fetched again after each successful change
    {
        let matches = matches.clone();
        let players = players.clone();
        let club_stats = club_stats.clone();
        let achievements = achievements.clone();
        let gallery = gallery.clone();
        let api = api.api();
        use_effect_with(*revision, move |revision| {
            debug!("Loading admin collections (revision {})", revision);
            {
                let (api, mounted) = (api.clone(), mounted.clone());
                spawn_local(async move {
                    let result = api.list_matches().await;
                    if mounted.is_mounted() {
                        matches.set(result.unwrap_or_default());
                    }
                });
            }
            {
                let (api, mounted) = (api.clone(), mounted.clone());
                spawn_local(async move {
                    let result = api.list_players().await;
                    if mounted.is_mounted() {
                        players.set(result.unwrap_or_default());
                    }
                });
            }
            {
                let (api, mounted) = (api.clone(), mounted.clone());
                spawn_local(async move {
                    let result = api.get_stats().await;
                    if mounted.is_mounted() {
                        club_stats.set(result.ok().flatten());
                    }
                });
            }
            {
                let (api, mounted) = (api.clone(), mounted.clone());
                spawn_local(async move {
                    let result = api.list_achievements().await;
                    if mounted.is_mounted() {
                        achievements.set(result.unwrap_or_default());
                    }
                });
            }
            spawn_local(async move {
                let result = api.list_gallery().await;
                if mounted.is_mounted() {
                    gallery.set(result.unwrap_or_default());
                }
            });
            || ()
        });
    }

    let on_changed = {
        let revision = revision.clone();
        Callback::from(move |_: ()| revision.set(revision.wrapping_add(1)))
    };

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    let tabs = AdminTab::ALL.iter().map(|tab| {
        let current_tab = current_tab.clone();
        let tab = *tab;
        let active = *current_tab == tab;
        html! {
            <button
                onclick={Callback::from(move |_: MouseEvent| current_tab.set(tab))}
                class={classes!(
                    "px-4", "py-2", "rounded-t", "font-medium",
                    if active { "bg-white text-blue-900 shadow" } else { "text-gray-600 hover:text-blue-900" }
                )}
            >
                {tab.label()}
            </button>
        }
    });

    let content = match *current_tab {
        AdminTab::Matches => html! {
            <matches::MatchesTab matches={(*matches).clone()} on_changed={on_changed.clone()} />
        },
        AdminTab::Players => html! {
            <players::PlayersTab players={(*players).clone()} on_changed={on_changed.clone()} />
        },
        AdminTab::Stats => html! {
            <stats::StatsTab stats={(*club_stats).clone()} on_changed={on_changed.clone()} />
        },
        AdminTab::Achievements => html! {
            <achievements::AchievementsTab achievements={(*achievements).clone()} on_changed={on_changed.clone()} />
        },
        AdminTab::Gallery => html! {
            <gallery::GalleryTab items={(*gallery).clone()} on_changed={on_changed.clone()} />
        },
    };

    html! {
        <div class="min-h-screen bg-gray-100">
            <div class="bg-blue-900 text-white">
                <div class="max-w-7xl mx-auto px-4 py-6 flex justify-between items-center">
                    <div>
                        <h1 class="text-2xl font-bold">{"Admin Dashboard"}</h1>
                        if let Some(name) = session.state.username.clone() {
                            <p class="text-sm text-blue-200">{format!("Signed in as {}", name)}</p>
                        }
                    </div>
                    <button onclick={on_logout} class="px-4 py-2 bg-red-600 rounded hover:bg-red-700">{"Logout"}</button>
                </div>
            </div>
            <div class="max-w-7xl mx-auto px-4 py-6">
                <div class="flex flex-wrap gap-2 border-b border-gray-300 mb-6">
                    {for tabs}
                </div>
                <div class="bg-white rounded shadow p-6">
                    {content}
                </div>
            </div>
        </div>
    }
}
