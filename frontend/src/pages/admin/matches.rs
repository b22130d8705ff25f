use shared::fixtures::admin_order;
use shared::forms::MatchForm;
use shared::models::fixture::{Match, MatchStatus};
use yew::prelude::*;

use super::{bind_input, bind_select, run_mutation, DANGER_LINK, FIELD_CLASS, PRIMARY_BUTTON};
use crate::api::ApiContext;
use crate::components::common_modal::Modal;
use crate::components::common_toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct MatchesTabProps {
    pub matches: Vec<Match>,
    pub on_changed: Callback<()>,
}

#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(i64),
}

#[function_component(MatchesTab)]
pub fn matches_tab(props: &MatchesTabProps) -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let editor = use_state(|| Editor::Closed);
    let form = use_state(MatchForm::default);
    let form_error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<Match>);

    let open_new = {
        let (editor, form, form_error) = (editor.clone(), form.clone(), form_error.clone());
        Callback::from(move |_: MouseEvent| {
            form.set(MatchForm::default());
            form_error.set(None);
            editor.set(Editor::New);
        })
    };

    let close_editor = {
        let editor = editor.clone();
        Callback::from(move |_: ()| editor.set(Editor::Closed))
    };

    let on_save = {
        let (editor, form, form_error) = (editor.clone(), form.clone(), form_error.clone());
        let (api, toasts, on_changed) = (api.api(), toasts.clone(), props.on_changed.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match form.to_payload() {
                Ok(payload) => payload,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            let api = api.clone();
            match *editor {
                Editor::Edit(id) => run_mutation(
                    async move { api.update_match(id, &payload).await.map(|_| ()) },
                    toasts.clone(),
                    "Match updated",
                    on_changed.clone(),
                ),
                _ => run_mutation(
                    async move { api.create_match(&payload).await.map(|_| ()) },
                    toasts.clone(),
                    "Match added",
                    on_changed.clone(),
                ),
            }
            editor.set(Editor::Closed);
        })
    };

    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let (api, toasts, on_changed) = (api.api(), toasts.clone(), props.on_changed.clone());
        Callback::from(move |_: ()| {
            if let Some(m) = (*pending_delete).clone() {
                let api = api.clone();
                run_mutation(
                    async move { api.delete_match(m.id).await },
                    toasts.clone(),
                    "Match deleted",
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

    let rows = admin_order(&props.matches).into_iter().map(|m| {
        let on_edit = {
            let (editor, form, form_error) = (editor.clone(), form.clone(), form_error.clone());
            let m = m.clone();
            Callback::from(move |_: MouseEvent| {
                form.set(MatchForm::from_match(&m));
                form_error.set(None);
                editor.set(Editor::Edit(m.id));
            })
        };
        let on_delete = {
            let pending_delete = pending_delete.clone();
            let m = m.clone();
            Callback::from(move |_: MouseEvent| pending_delete.set(Some(m.clone())))
        };
        html! {
            <tr key={m.id} class="border-b">
                <td class="py-2">{&m.opponent}</td>
                <td>{m.display_datetime()}</td>
                <td>{&m.venue}</td>
                <td>{m.status.as_str()}</td>
                <td>{m.result.clone().unwrap_or_default()}</td>
                <td class="space-x-3 text-right">
                    <button onclick={on_edit} class="text-blue-700 hover:underline">{"Edit"}</button>
                    <button onclick={on_delete} class={DANGER_LINK}>{"Delete"}</button>
                </td>
            </tr>
        }
    });

    let title = if *editor == Editor::New { "Add Match" } else { "Edit Match" };

    html! {
        <div>
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-xl font-bold">{"Matches"}</h2>
                <button onclick={open_new} class={PRIMARY_BUTTON}>{"+ Add Match"}</button>
            </div>
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="border-b text-gray-500">
                        <th class="py-2">{"Opponent"}</th><th>{"Date"}</th><th>{"Venue"}</th>
                        <th>{"Status"}</th><th>{"Result"}</th><th></th>
                    </tr>
                </thead>
                <tbody>{for rows}</tbody>
            </table>

            <Modal is_open={*editor != Editor::Closed} title={title} on_close={close_editor} button_text="Cancel" button_class="bg-gray-500">
                <form onsubmit={on_save} class="space-y-3">
                    <input class={FIELD_CLASS} placeholder="Opponent" value={form.opponent.clone()}
                        oninput={bind_input(&form, |f, v| f.opponent = v)} />
                    <div class="flex gap-2">
                        <input type="date" class={FIELD_CLASS} value={form.date.clone()}
                            oninput={bind_input(&form, |f, v| f.date = v)} />
                        <input type="time" class={FIELD_CLASS} value={form.time.clone()}
                            oninput={bind_input(&form, |f, v| f.time = v)} />
                    </div>
                    <input class={FIELD_CLASS} placeholder="Venue" value={form.venue.clone()}
                        oninput={bind_input(&form, |f, v| f.venue = v)} />
                    <select class={FIELD_CLASS}
                        onchange={bind_select(&form, |f, v| f.status = MatchStatus::parse(&v).unwrap_or_default())}>
                        {for MatchStatus::SELECTABLE.iter().map(|s| html! {
                            <option value={s.as_str()} selected={form.status == *s}>{s.as_str()}</option>
                        })}
                    </select>
                    <input class={FIELD_CLASS} placeholder="Result (VS until played)" value={form.result.clone()}
                        oninput={bind_input(&form, |f, v| f.result = v)} />
                    if let Some(message) = (*form_error).clone() {
                        <p class="text-red-600 text-sm">{message}</p>
                    }
                    <button type="submit" class={PRIMARY_BUTTON}>{"Save"}</button>
                </form>
            </Modal>

            <Modal
                is_open={pending_delete.is_some()}
                title="Delete match"
                message={pending_delete.as_ref().map(|m| format!("Delete the match against {}?", m.opponent)).unwrap_or_default()}
                on_close={cancel_delete}
                button_text="Cancel"
                button_class="bg-gray-500"
                secondary={Some((AttrValue::from("Delete"), confirm_delete))}
            />
        </div>
    }
}
