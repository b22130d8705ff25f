use log::error;
use shared::fixtures::{prioritized, shows_default_hint, visible_matches, MatchQuery};
use shared::models::fixture::{Match, MatchStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::ApiContext;
use crate::components::common_modal::Modal;
use crate::hooks::use_is_mounted;

pub const DEFAULT_VIEW_HINT: &str =
    "Showing default view (2 upcoming, 2 recent). Use search or filters to find specific games.";

fn status_classes(status: MatchStatus) -> (&'static str, &'static str) {
    // (card border, badge)
    match status {
        MatchStatus::Live => ("border-red-500", "bg-red-100 text-red-700"),
        MatchStatus::Completed => ("border-emerald-500", "bg-emerald-100 text-emerald-700"),
        _ => ("border-blue-900", "bg-sky-100 text-sky-700"),
    }
}

#[derive(Properties, PartialEq)]
struct MatchCardProps {
    fixture: Match,
    on_watch: Callback<()>,
}

#[function_component(MatchCard)]
fn match_card(props: &MatchCardProps) -> Html {
    let m = &props.fixture;
    let (border, badge) = status_classes(m.status);
    let on_watch = {
        let on_watch = props.on_watch.clone();
        Callback::from(move |_: MouseEvent| on_watch.emit(()))
    };

    html! {
        <div class={classes!("flex", "flex-wrap", "items-center", "justify-between", "bg-white", "px-6", "py-4", "rounded-xl", "shadow", "border-l-4", border)}>
            <div>
                <h4 class="text-lg font-bold text-gray-900">{format!("Spartans vs {}", m.opponent)}</h4>
                <div class="flex items-center gap-2 text-sm text-gray-500">
                    <span>{"📅 "}{m.display_date()}</span>
                    <span>{"•"}</span>
                    <span>{"📍 "}{&m.venue}</span>
                </div>
                if m.has_result() {
                    <p class="text-sm font-semibold text-gray-700 mt-1">{m.result.clone().unwrap_or_default()}</p>
                }
            </div>
            <div class="flex items-center gap-3">
                if m.is_live() {
                    <button onclick={on_watch} class="flex items-center gap-1 px-3 py-1 bg-red-600 text-white rounded-full text-xs font-semibold shadow">
                        {"▶ WATCH"}
                    </button>
                }
                <span class={classes!("px-3", "py-1", "rounded-full", "text-sm", "font-bold", badge)}>
                    {m.status.as_str()}
                </span>
            </div>
        </div>
    }
}

#[function_component(MatchSection)]
pub fn match_section() -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let mounted = use_is_mounted();
    let matches = use_state(Vec::<Match>::new);
    let query = use_state(MatchQuery::default);
    let show_construction = use_state(|| false);

    {
        let matches = matches.clone();
        let api = api.api();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = api.list_matches().await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(list) => matches.set(prioritized(&list)),
                    Err(e) => {
                        error!("Error fetching matches: {}", e);
                        matches.set(Vec::new());
                    }
                }
            });
            || ()
        });
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(MatchQuery {
                search: input.value(),
                ..(*query).clone()
            });
        })
    };

    let on_status = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            query.set(MatchQuery {
                status: MatchStatus::parse(&select.value()),
                ..(*query).clone()
            });
        })
    };

    let open_construction = {
        let show_construction = show_construction.clone();
        Callback::from(move |_: ()| show_construction.set(true))
    };

    let close_construction = {
        let show_construction = show_construction.clone();
        Callback::from(move |_: ()| show_construction.set(false))
    };

    let visible = visible_matches(&matches, &query);
    let selected = query.status.map(|s| s.as_str()).unwrap_or("All");

    html! {
        <section class="container mx-auto px-4 py-16">
            <div class="flex flex-wrap gap-4 justify-between items-center mb-8">
                <div class="flex items-center gap-4">
                    <div class="w-1.5 h-8 bg-yellow-400 rounded"></div>
                    <h3 class="text-3xl font-extrabold uppercase tracking-wide text-blue-900">{"Match Fixtures"}</h3>
                </div>
                <div class="flex gap-3 items-center flex-wrap">
                    <input
                        type="text"
                        placeholder="Search..."
                        value={query.search.clone()}
                        oninput={on_search}
                        class="px-4 py-2 rounded-full border border-gray-300 text-sm min-w-[150px]"
                    />
                    <select onchange={on_status} class="px-4 py-2 rounded-full border border-gray-300 text-sm bg-white">
                        <option value="All" selected={selected == "All"}>{"All Statuses"}</option>
                        {for MatchStatus::SELECTABLE.iter().map(|status| html! {
                            <option value={status.as_str()} selected={selected == status.as_str()}>{status.as_str()}</option>
                        })}
                    </select>
                </div>
            </div>

            <div class="space-y-4">
                if visible.is_empty() {
                    <div class="text-center text-gray-500 py-8">{"No matches found matching your filters."}</div>
                } else {
                    {for visible.into_iter().map(|m| {
                        let id = m.id;
                        html! { <MatchCard key={id} fixture={m} on_watch={open_construction.clone()} /> }
                    })}
                }
            </div>

            if shows_default_hint(matches.len(), &query) {
                <div class="text-center text-sm text-gray-500 mt-6">{DEFAULT_VIEW_HINT}</div>
            }

            <Modal
                is_open={*show_construction}
                title="Under Construction"
                message="Live streaming is coming soon. Stay tuned!"
                on_close={close_construction}
                button_text="Close"
            />
        </section>
    }
}
