use shared::forms::StatsForm;
use shared::models::stats::ClubStats;
use yew::prelude::*;

use super::{bind_input, run_mutation, FIELD_CLASS, PRIMARY_BUTTON};
use crate::api::ApiContext;
use crate::components::common_modal::Modal;
use crate::components::common_toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct StatsTabProps {
    /// `None` until the backend has a stats row.
    pub stats: Option<ClubStats>,
    pub on_changed: Callback<()>,
}

#[function_component(StatsTab)]
pub fn stats_tab(props: &StatsTabProps) -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let is_editing = use_state(|| false);
    let form = use_state(StatsForm::default);
    let form_error = use_state(|| None::<String>);

    let open_editor = {
        let (is_editing, form, form_error) = (is_editing.clone(), form.clone(), form_error.clone());
        let current = props.stats.clone().unwrap_or_default();
        Callback::from(move |_: MouseEvent| {
            form.set(StatsForm::from_stats(&current));
            form_error.set(None);
            is_editing.set(true);
        })
    };

    let close_editor = {
        let is_editing = is_editing.clone();
        Callback::from(move |_: ()| is_editing.set(false))
    };

    let on_save = {
        let (is_editing, form, form_error) = (is_editing.clone(), form.clone(), form_error.clone());
        let (api, toasts, on_changed) = (api.api(), toasts.clone(), props.on_changed.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_payload() {
                Ok(stats) => {
                    let api = api.clone();
                    run_mutation(
                        async move { api.update_stats(&stats).await },
                        toasts.clone(),
                        "Club stats saved",
                        on_changed.clone(),
                    );
                    is_editing.set(false);
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        })
    };

    let tile = |label: &'static str, value: Option<u32>| {
        html! {
            <div class="p-4 rounded bg-blue-50 text-center">
                <div class="text-3xl font-bold text-blue-900">
                    {value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}
                </div>
                <div class="text-sm text-gray-600">{label}</div>
            </div>
        }
    };
    let stats = props.stats.as_ref();

    html! {
        <div>
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-xl font-bold">{"Club Stats"}</h2>
                <button onclick={open_editor} class={PRIMARY_BUTTON}>{"Edit Stats"}</button>
            </div>
            if stats.is_none() {
                <p class="text-gray-500 mb-4">{"No stats saved yet. The homepage shows its defaults."}</p>
            }
            <div class="grid grid-cols-3 gap-4">
                {tile("Matches Won", stats.map(|s| s.matches_won))}
                {tile("Active Players", stats.map(|s| s.active_players))}
                {tile("Championships", stats.map(|s| s.championships))}
            </div>

            <Modal is_open={*is_editing} title="Edit Club Stats" on_close={close_editor} button_text="Cancel" button_class="bg-gray-500">
                <form onsubmit={on_save} class="space-y-3">
                    <label class="block text-sm">{"Matches won"}
                        <input type="number" min="0" class={FIELD_CLASS} value={form.matches_won.clone()}
                            oninput={bind_input(&form, |f, v| f.matches_won = v)} />
                    </label>
                    <label class="block text-sm">{"Active players"}
                        <input type="number" min="0" class={FIELD_CLASS} value={form.active_players.clone()}
                            oninput={bind_input(&form, |f, v| f.active_players = v)} />
                    </label>
                    <label class="block text-sm">{"Championships"}
                        <input type="number" min="0" class={FIELD_CLASS} value={form.championships.clone()}
                            oninput={bind_input(&form, |f, v| f.championships = v)} />
                    </label>
                    if let Some(message) = (*form_error).clone() {
                        <p class="text-red-600 text-sm">{message}</p>
                    }
                    <button type="submit" class={PRIMARY_BUTTON}>{"Save"}</button>
                </form>
            </Modal>
        </div>
    }
}
