use log::{error, warn};
use shared::models::stats::StatsHeadline;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::health::BACKEND_DOWN;
use crate::api::ApiContext;
use crate::hooks::use_is_mounted;

#[function_component(StatsBar)]
pub fn stats_bar() -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let mounted = use_is_mounted();
    let headline = use_state(StatsHeadline::fallback);
    let health = use_state(|| None::<String>);

    {
        let headline = headline.clone();
        let health = health.clone();
        let api = api.api();
        use_effect_with((), move |_| {
            let stats_api = api.clone();
            let stats_mounted = mounted.clone();
            spawn_local(async move {
                let result = stats_api.get_stats().await;
                if !stats_mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(Some(stats)) => headline.set(StatsHeadline::from(&stats)),
                    Ok(None) => warn!("No club stats stored yet, keeping defaults"),
                    Err(e) => error!("Failed to fetch stats: {}", e),
                }
            });
            spawn_local(async move {
                let text = api.health().await.unwrap_or_else(|e| {
                    warn!("Health check failed: {}", e);
                    BACKEND_DOWN.to_string()
                });
                if mounted.is_mounted() {
                    health.set(Some(text));
                }
            });
            || ()
        });
    }

    let stat = |value: &str, label: &str| {
        html! {
            <div class="text-center px-8">
                <div class="text-4xl font-extrabold">{value.to_string()}</div>
                <div class="text-sm uppercase tracking-wider text-blue-200">{label.to_string()}</div>
            </div>
        }
    };

    html! {
        <section class="bg-blue-800 text-white py-8">
            <div class="container mx-auto flex flex-wrap justify-center divide-x divide-blue-600">
                {stat(&headline.matches_won, "Matches Won")}
                {stat(&headline.active_players, "Active Players")}
                {stat(&headline.championships, "Championships")}
            </div>
            if let Some(text) = (*health).clone() {
                <p class="text-center text-xs text-blue-300 mt-4">{format!("Backend status: {}", text)}</p>
            }
        </section>
    }
}
