use log::error;
use shared::models::achievement::Achievement;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::api::ApiContext;
use crate::hooks::use_is_mounted;

/// Roughly one card.
const SCROLL_STEP: f64 = 300.0;

#[function_component(AchievementsCarousel)]
pub fn achievements_carousel() -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let mounted = use_is_mounted();
    let achievements = use_state(Vec::<Achievement>::new);
    let track = use_node_ref();

    {
        let achievements = achievements.clone();
        let api = api.api();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = api.list_achievements().await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(list) => achievements.set(list),
                    Err(e) => error!("Error fetching achievements: {}", e),
                }
            });
            || ()
        });
    }

    let scroll = |direction: f64| {
        let track = track.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(element) = track.cast::<Element>() {
                element.scroll_by_with_x_and_y(direction * SCROLL_STEP, 0.0);
            }
        })
    };

    html! {
        <div class="bg-gray-100 p-8 rounded-xl shadow-inner">
            <div class="flex items-center justify-between mb-6">
                <h4 class="flex items-center gap-2 text-blue-900 font-bold uppercase tracking-wider">
                    <span class="text-2xl">{"🏆"}</span>
                    {"Club Achievements"}
                </h4>
                <div class="flex gap-2">
                    <button onclick={scroll(-1.0)} class="p-2 rounded-full border bg-white">{"‹"}</button>
                    <button onclick={scroll(1.0)} class="p-2 rounded-full border bg-white">{"›"}</button>
                </div>
            </div>
            <div ref={track} class="flex gap-6 overflow-x-auto scroll-smooth pb-4">
                {for achievements.iter().map(|item| {
                    let (background, border) = item.kind.palette();
                    html! {
                        <div key={item.id}
                            class="min-w-[250px] bg-white rounded-xl shadow p-6"
                            style={format!("border-top: 4px solid {}", border)}
                        >
                            <div class="w-12 h-12 rounded-full flex items-center justify-center mb-4 text-2xl"
                                style={format!("background-color: {}", background)}
                            >
                                {item.kind.icon()}
                            </div>
                            <h5 class="font-bold text-gray-900">{&item.title}</h5>
                            <p class="text-sm text-gray-500">{&item.achievement_year}</p>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
