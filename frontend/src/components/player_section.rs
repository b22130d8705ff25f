use log::error;
use shared::models::player::Player;
use shared::roster::squad;
use shared::urls::resolve_image_url;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiContext;
use crate::config::Config;
use crate::hooks::use_is_mounted;

#[function_component(PlayerSection)]
pub fn player_section() -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let mounted = use_is_mounted();
    let players = use_state(Vec::<Player>::new);

    {
        let players = players.clone();
        let api = api.api();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = api.list_players().await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(list) => players.set(squad(&list)),
                    Err(e) => {
                        error!("Error fetching players: {}", e);
                        players.set(Vec::new());
                    }
                }
            });
            || ()
        });
    }

    let base_url = Config::api_base_url();

    html! {
        <section class="container mx-auto px-4 py-16">
            <h3 class="text-4xl font-extrabold text-blue-900 text-center mb-10 uppercase">{"Our Squad"}</h3>
            if players.is_empty() {
                <p class="text-center text-gray-500">{"No players found."}</p>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {for players.iter().map(|player| {
                        let image = resolve_image_url(&base_url, player.image_or_placeholder());
                        html! {
                            <div key={player.id} class="group h-80 [perspective:1000px]">
                                <div class="relative h-full w-full transition-transform duration-500 [transform-style:preserve-3d] group-hover:[transform:rotateY(180deg)]">
                                    <div class="absolute inset-0 bg-white rounded-xl shadow overflow-hidden [backface-visibility:hidden]">
                                        <img src={image} alt={player.name.clone()} class="h-56 w-full object-cover" />
                                        <div class="p-4 text-center">
                                            <h4 class="font-bold text-lg">{&player.name}</h4>
                                            <p class="text-sm text-blue-700">{&player.role}</p>
                                        </div>
                                    </div>
                                    <div class="absolute inset-0 bg-blue-900 text-white rounded-xl p-6 [transform:rotateY(180deg)] [backface-visibility:hidden]">
                                        <h4 class="font-bold text-lg mb-4">{&player.name}</h4>
                                        <dl class="space-y-2 text-sm">
                                            <div class="flex justify-between"><dt>{"Batting"}</dt><dd>{&player.batting_style}</dd></div>
                                            <div class="flex justify-between"><dt>{"Bowling"}</dt><dd>{&player.bowling_style}</dd></div>
                                            <div class="flex justify-between"><dt>{"Matches"}</dt><dd>{player.matches}</dd></div>
                                            <div class="flex justify-between"><dt>{"Runs"}</dt><dd>{player.runs}</dd></div>
                                            <div class="flex justify-between"><dt>{"Wickets"}</dt><dd>{player.wickets}</dd></div>
                                        </dl>
                                    </div>
                                </div>
                            </div>
                        }
                    })}
                </div>
            }
        </section>
    }
}
