use shared::forms::AchievementForm;
use shared::models::achievement::{Achievement, AchievementKind};
use yew::prelude::*;

use super::{bind_input, bind_select, run_mutation, DANGER_LINK, FIELD_CLASS, PRIMARY_BUTTON};
use crate::api::ApiContext;
use crate::components::common_toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct AchievementsTabProps {
    pub achievements: Vec<Achievement>,
    pub on_changed: Callback<()>,
}

#[function_component(AchievementsTab)]
pub fn achievements_tab(props: &AchievementsTabProps) -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let form = use_state(AchievementForm::default);

    let on_add = {
        let form = form.clone();
        let (api, toasts, on_changed) = (api.api(), toasts.clone(), props.on_changed.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_payload() {
                Ok(achievement) => {
                    let api = api.clone();
                    run_mutation(
                        async move { api.create_achievement(&achievement).await },
                        toasts.clone(),
                        "Achievement added",
                        on_changed.clone(),
                    );
                    form.set(AchievementForm::default());
                }
                Err(err) => toasts.error(err.to_string()),
            }
        })
    };

    let rows = props.achievements.iter().map(|achievement| {
        let on_delete = {
            let (api, toasts, on_changed) = (api.api(), toasts.clone(), props.on_changed.clone());
            let id = achievement.id;
            Callback::from(move |_: MouseEvent| {
                let api = api.clone();
                run_mutation(
                    async move { api.delete_achievement(id).await },
                    toasts.clone(),
                    "Achievement deleted",
                    on_changed.clone(),
                );
            })
        };
        html! {
            <li key={achievement.id} class="flex justify-between items-center py-2 border-b">
                <span>
                    {format!("{} {} ({})", achievement.kind.icon(), achievement.title, achievement.achievement_year)}
                </span>
                <button onclick={on_delete} class={DANGER_LINK}>{"Delete"}</button>
            </li>
        }
    });

    html! {
        <div class="grid md:grid-cols-2 gap-8">
            <form onsubmit={on_add} class="space-y-3">
                <h2 class="text-xl font-bold">{"Add Achievement"}</h2>
                <input class={FIELD_CLASS} placeholder="Title" value={form.title.clone()}
                    oninput={bind_input(&form, |f, v| f.title = v)} />
                <input class={FIELD_CLASS} placeholder="Year" value={form.year.clone()}
                    oninput={bind_input(&form, |f, v| f.year = v)} />
                <select class={FIELD_CLASS} onchange={bind_select(&form, |f, v| f.kind = AchievementKind::from(v))}>
                    {for AchievementKind::ALL.iter().map(|kind| html! {
                        <option value={kind.code()} selected={form.kind == *kind}>
                            {format!("{} {}", kind.icon(), kind.code())}
                        </option>
                    })}
                </select>
                <button type="submit" class={PRIMARY_BUTTON}>{"Add"}</button>
            </form>
            <div>
                <h2 class="text-xl font-bold mb-2">{"Achievements"}</h2>
                if props.achievements.is_empty() {
                    <p class="text-gray-500">{"No achievements yet."}</p>
                } else {
                    <ul>{for rows}</ul>
                }
            </div>
        </div>
    }
}
