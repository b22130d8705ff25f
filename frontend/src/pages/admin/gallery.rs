use shared::forms::GalleryUploadForm;
use shared::gallery::{existing_categories, filter_gallery};
use shared::models::gallery::GalleryItem;
use shared::urls::resolve_image_url;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{bind_input, bind_select, run_mutation, DANGER_LINK, FIELD_CLASS, PRIMARY_BUTTON};
use crate::api::{uploads, ApiContext};
use crate::components::common_modal::Modal;
use crate::components::common_toast::ToastContext;
use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct GalleryTabProps {
    pub items: Vec<GalleryItem>,
    pub on_changed: Callback<()>,
}

#[function_component(GalleryTab)]
pub fn gallery_tab(props: &GalleryTabProps) -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let search = use_state(String::new);
    let is_uploading = use_state(|| false);
    let form = use_state(GalleryUploadForm::default);
    let file_ref = use_node_ref();

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let open_upload = {
        let (is_uploading, form) = (is_uploading.clone(), form.clone());
        Callback::from(move |_: MouseEvent| {
            form.set(GalleryUploadForm::default());
            is_uploading.set(true);
        })
    };

    let close_upload = {
        let is_uploading = is_uploading.clone();
        Callback::from(move |_: ()| is_uploading.set(false))
    };

    let on_upload = {
        let (is_uploading, form, file_ref) = (is_uploading.clone(), form.clone(), file_ref.clone());
        let (toasts, on_changed) = (toasts.clone(), props.on_changed.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let file = file_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let fields = match form.fields(file.is_some()) {
                Ok(fields) => fields,
                Err(err) => {
                    toasts.error(err.to_string());
                    return;
                }
            };
            let Some(file) = file else { return };
            run_mutation(
                async move { uploads::upload_gallery_image(&fields, &file).await },
                toasts.clone(),
                "Image uploaded",
                on_changed.clone(),
            );
            is_uploading.set(false);
        })
    };

    let base_url = Config::api_base_url();
    let rows = filter_gallery(&props.items, &search).into_iter().map(|item| {
        let on_delete = {
            let (api, toasts, on_changed) = (api.api(), toasts.clone(), props.on_changed.clone());
            let id = item.id;
            Callback::from(move |_: MouseEvent| {
                let api = api.clone();
                run_mutation(
                    async move { api.delete_gallery_item(id).await },
                    toasts.clone(),
                    "Image deleted",
                    on_changed.clone(),
                );
            })
        };
        let src = item
            .image_url
            .as_deref()
            .map(|url| resolve_image_url(&base_url, url))
            .unwrap_or_default();
        html! {
            <tr key={item.id} class="border-b">
                <td class="py-2"><img src={src} alt={item.caption().to_string()} class="w-16 h-12 object-cover rounded" /></td>
                <td>{item.category_or_default()}</td>
                <td>{item.sub_category_or_default()}</td>
                <td>{item.caption()}</td>
                <td class="text-right">
                    <button onclick={on_delete} class={DANGER_LINK}>{"Delete"}</button>
                </td>
            </tr>
        }
    });

    let categories = existing_categories(&props.items);

    html! {
        <div>
            <div class="flex flex-wrap justify-between items-center gap-3 mb-4">
                <h2 class="text-xl font-bold">{"Gallery"}</h2>
                <input class="px-3 py-2 border border-gray-300 rounded" placeholder="Search category, album or caption"
                    value={(*search).clone()} oninput={on_search} />
                <button onclick={open_upload} class={PRIMARY_BUTTON}>{"+ Upload Image"}</button>
            </div>
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="border-b text-gray-500">
                        <th></th><th>{"Category"}</th><th>{"Album"}</th><th>{"Caption"}</th><th></th>
                    </tr>
                </thead>
                <tbody>{for rows}</tbody>
            </table>

            <Modal is_open={*is_uploading} title="Upload Image" on_close={close_upload} button_text="Cancel" button_class="bg-gray-500">
                <form onsubmit={on_upload} class="space-y-3">
                    <select class={FIELD_CLASS} onchange={bind_select(&form, |f, v| f.category = v)}>
                        <option value="" selected={form.category.is_empty()}>{"Choose a category"}</option>
                        {for categories.iter().map(|category| html! {
                            <option value={category.clone()} selected={form.category == *category}>{category}</option>
                        })}
                    </select>
                    <input class={FIELD_CLASS} placeholder="...or type a new category" value={form.new_category.clone()}
                        oninput={bind_input(&form, |f, v| f.new_category = v)} />
                    <input class={FIELD_CLASS} placeholder="Album (optional)" value={form.sub_category.clone()}
                        oninput={bind_input(&form, |f, v| f.sub_category = v)} />
                    <input class={FIELD_CLASS} placeholder="Caption (optional)" value={form.caption.clone()}
                        oninput={bind_input(&form, |f, v| f.caption = v)} />
                    <input type="file" accept="image/*" ref={file_ref.clone()} class={FIELD_CLASS} />
                    <button type="submit" class={PRIMARY_BUTTON}>{"Upload"}</button>
                </form>
            </Modal>
        </div>
    }
}
