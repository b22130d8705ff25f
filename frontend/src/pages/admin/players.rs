use shared::forms::PlayerForm;
use shared::models::player::{Player, BATTING_STYLES, BOWLING_STYLES, PLAYER_ROLES};
use shared::roster::{filter_players, pending_count, PlayerTab};
use shared::urls::resolve_image_url;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{bind_input, bind_select, run_mutation, DANGER_LINK, FIELD_CLASS, PRIMARY_BUTTON};
use crate::api::{uploads, ApiContext};
use crate::components::common_modal::Modal;
use crate::components::common_toast::ToastContext;
use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct PlayersTabProps {
    pub players: Vec<Player>,
    pub on_changed: Callback<()>,
}

fn options(values: &[&'static str], selected: &str) -> Html {
    values
        .iter()
        .map(|value| html! { <option value={*value} selected={*value == selected}>{*value}</option> })
        .collect()
}

#[function_component(PlayersTab)]
pub fn players_tab(props: &PlayersTabProps) -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let tab = use_state(PlayerTab::default);
    let search = use_state(String::new);
    // None = closed, Some(None) = new player, Some(Some(id)) = editing
    let editing = use_state(|| None::<Option<i64>>);
    let form = use_state(PlayerForm::default);
    let form_error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<Player>);
    let image_ref = use_node_ref();

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let open_new = {
        let (editing, form, form_error) = (editing.clone(), form.clone(), form_error.clone());
        Callback::from(move |_: MouseEvent| {
            form.set(PlayerForm::default());
            form_error.set(None);
            editing.set(Some(None));
        })
    };

    let close_editor = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    let on_save = {
        let (editing, form, form_error) = (editing.clone(), form.clone(), form_error.clone());
        let (toasts, on_changed, image_ref) = (toasts.clone(), props.on_changed.clone(), image_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(id) = *editing else { return };
            let fields = match form.fields() {
                Ok(fields) => fields,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let image = image_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let success = if id.is_some() { "Player updated" } else { "Player added" };
            run_mutation(
                async move { uploads::save_player(id, &fields, image.as_ref()).await },
                toasts.clone(),
                success,
                on_changed.clone(),
            );
            editing.set(None);
        })
    };

    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let (api, toasts, on_changed) = (api.api(), toasts.clone(), props.on_changed.clone());
        Callback::from(move |_: ()| {
            if let Some(player) = (*pending_delete).clone() {
                let api = api.clone();
                run_mutation(
                    async move { api.delete_player(player.id).await },
                    toasts.clone(),
                    "Player removed",
                    on_changed.clone(),
                );
            }
            pending_delete.set(None);
        })
    };

    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    let pending = pending_count(&props.players);
    let tab_buttons = [PlayerTab::Active, PlayerTab::Pending].into_iter().map(|t| {
        let tab = tab.clone();
        let active = *tab == t;
        html! {
            <button
                onclick={Callback::from(move |_: MouseEvent| tab.set(t))}
                class={classes!("px-3", "py-1", "rounded", if active { "bg-blue-900 text-white" } else { "bg-gray-200" })}
            >
                {t.label()}
                if t == PlayerTab::Pending && pending > 0 {
                    <span class="ml-2 px-2 rounded-full bg-red-600 text-white text-xs">{pending}</span>
                }
            </button>
        }
    });

    let base_url = Config::api_base_url();
    let rows = filter_players(&props.players, *tab, &search).into_iter().map(|player| {
        let on_edit = {
            let (editing, form, form_error) = (editing.clone(), form.clone(), form_error.clone());
            let player = player.clone();
            Callback::from(move |_: MouseEvent| {
                form.set(PlayerForm::from_player(&player));
                form_error.set(None);
                editing.set(Some(Some(player.id)));
            })
        };
        let on_approve = {
            let (api, toasts, on_changed) = (api.api(), toasts.clone(), props.on_changed.clone());
            let id = player.id;
            Callback::from(move |_: MouseEvent| {
                let api = api.clone();
                run_mutation(
                    async move { api.approve_player(id).await },
                    toasts.clone(),
                    "Player approved",
                    on_changed.clone(),
                );
            })
        };
        let on_delete = {
            let pending_delete = pending_delete.clone();
            let player = player.clone();
            Callback::from(move |_: MouseEvent| pending_delete.set(Some(player.clone())))
        };
        html! {
            <tr key={player.id} class="border-b">
                <td class="py-2">
                    <img src={resolve_image_url(&base_url, player.image_or_placeholder())}
                        alt={player.name.clone()} class="w-10 h-10 rounded-full object-cover" />
                </td>
                <td>{&player.name}</td>
                <td>{&player.role}</td>
                <td>{format!("{} / {} / {}", player.matches, player.runs, player.wickets)}</td>
                <td class="space-x-3 text-right">
                    if player.is_pending() {
                        <button onclick={on_approve} class="text-green-700 hover:underline">{"Approve"}</button>
                    }
                    <button onclick={on_edit} class="text-blue-700 hover:underline">{"Edit"}</button>
                    <button onclick={on_delete} class={DANGER_LINK}>{"Delete"}</button>
                </td>
            </tr>
        }
    });

    let title = if matches!(*editing, Some(Some(_))) { "Edit Player" } else { "Add Player" };

    html! {
        <div>
            <div class="flex flex-wrap justify-between items-center gap-3 mb-4">
                <div class="flex gap-2">{for tab_buttons}</div>
                <input class="px-3 py-2 border border-gray-300 rounded" placeholder="Search by name"
                    value={(*search).clone()} oninput={on_search} />
                <button onclick={open_new} class={PRIMARY_BUTTON}>{"+ Add Player"}</button>
            </div>
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="border-b text-gray-500">
                        <th></th><th>{"Name"}</th><th>{"Role"}</th><th>{"M / R / W"}</th><th></th>
                    </tr>
                </thead>
                <tbody>{for rows}</tbody>
            </table>

            <Modal is_open={editing.is_some()} title={title} on_close={close_editor} button_text="Cancel" button_class="bg-gray-500">
                <form onsubmit={on_save} class="space-y-3">
                    <input class={FIELD_CLASS} placeholder="Name" value={form.name.clone()}
                        oninput={bind_input(&form, |f, v| f.name = v)} />
                    <select class={FIELD_CLASS} onchange={bind_select(&form, |f, v| f.role = v)}>
                        {options(&PLAYER_ROLES, &form.role)}
                    </select>
                    <select class={FIELD_CLASS} onchange={bind_select(&form, |f, v| f.batting_style = v)}>
                        {options(&BATTING_STYLES, &form.batting_style)}
                    </select>
                    <select class={FIELD_CLASS} onchange={bind_select(&form, |f, v| f.bowling_style = v)}>
                        {options(&BOWLING_STYLES, &form.bowling_style)}
                    </select>
                    <div class="flex gap-2">
                        <input type="number" min="0" class={FIELD_CLASS} placeholder="Matches" value={form.matches.clone()}
                            oninput={bind_input(&form, |f, v| f.matches = v)} />
                        <input type="number" min="0" class={FIELD_CLASS} placeholder="Runs" value={form.runs.clone()}
                            oninput={bind_input(&form, |f, v| f.runs = v)} />
                        <input type="number" min="0" class={FIELD_CLASS} placeholder="Wickets" value={form.wickets.clone()}
                            oninput={bind_input(&form, |f, v| f.wickets = v)} />
                    </div>
                    <input type="file" accept="image/*" ref={image_ref.clone()} class={FIELD_CLASS} />
                    if let Some(message) = (*form_error).clone() {
                        <p class="text-red-600 text-sm">{message}</p>
                    }
                    <button type="submit" class={PRIMARY_BUTTON}>{"Save"}</button>
                </form>
            </Modal>

            <Modal
                is_open={pending_delete.is_some()}
                title="Remove player"
                message={pending_delete.as_ref().map(|p| format!("Remove {} from the squad?", p.name)).unwrap_or_default()}
                on_close={cancel_delete}
                button_text="Cancel"
                button_class="bg-gray-500"
                secondary={Some((AttrValue::from("Delete"), confirm_delete))}
            />
        </div>
    }
}
