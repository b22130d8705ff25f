use std::rc::Rc;

use gloo::events::EventListener;
use log::{debug, error};
use shared::gallery::{group_images, Album, CategoryTree, GalleryImage, Lightbox};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::api::ApiContext;
use crate::config::Config;
use crate::hooks::use_is_mounted;

pub enum LightboxAction {
    Open(Vec<GalleryImage>, usize),
    Next,
    Prev,
    Close,
    Key(String),
}

/// Reducer wrapper so keyboard handlers can act without a state snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightboxState(pub Lightbox);

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut lightbox = self.0.clone();
        match action {
            LightboxAction::Open(images, index) => lightbox.open(images, index),
            LightboxAction::Next => lightbox.next(),
            LightboxAction::Prev => lightbox.prev(),
            LightboxAction::Close => lightbox.close(),
            LightboxAction::Key(key) => {
                if !lightbox.handle_key(&key) {
                    return self;
                }
            }
        }
        Rc::new(Self(lightbox))
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Folder {
    Closed,
    Category(String),
    Album { category: String, album: String },
}

#[function_component(MediaSection)]
pub fn media_section() -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let mounted = use_is_mounted();
    let tree = use_state(CategoryTree::default);
    let folder = use_state(|| Folder::Closed);
    let lightbox = use_reducer_eq(LightboxState::default);

    {
        let tree = tree.clone();
        let api = api.api();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = api.list_gallery().await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(items) => {
                        let grouped = group_images(&items, &Config::api_base_url());
                        debug!("Gallery has {} categories", grouped.categories.len());
                        tree.set(grouped);
                    }
                    Err(e) => error!("Error fetching gallery: {}", e),
                }
            });
            || ()
        });
    }

    // Keyboard navigation only while the viewer is open
    {
        let lightbox = lightbox.clone();
        use_effect_with(lightbox.0.is_open(), move |is_open| {
            let listener = if *is_open {
                web_sys::window().map(|window| {
                    EventListener::new(&window, "keydown", move |event| {
                        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                            lightbox.dispatch(LightboxAction::Key(event.key()));
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let open_folder = |target: Folder| {
        let folder = folder.clone();
        Callback::from(move |_: MouseEvent| folder.set(target.clone()))
    };

    let dispatch = |action: fn() -> LightboxAction| {
        let lightbox = lightbox.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            lightbox.dispatch(action());
        })
    };

    let categories = tree.categories.iter().map(|category| {
        html! {
            <div key={category.name.clone()}
                onclick={open_folder(Folder::Category(category.name.clone()))}
                class="relative h-64 rounded-xl overflow-hidden cursor-pointer group"
            >
                <img src={category.cover_image.clone()} alt={category.name.clone()}
                    class="w-full h-full object-cover transition-transform group-hover:scale-110" />
                <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent flex flex-col justify-end p-6">
                    <h4 class="text-2xl font-bold">{&category.name}</h4>
                    <span class="text-sm text-gray-300">{format!("{} Photos", category.image_count())}</span>
                </div>
            </div>
        }
    });

    let album_card = |album: &Album| {
        let cover = album.cover().map(|image| image.url.clone()).unwrap_or_default();
        let target = Folder::Album {
            category: album.category.clone(),
            album: album.name.clone(),
        };
        html! {
            <div key={album.name.clone()} onclick={open_folder(target)}
                class="relative h-48 rounded-lg overflow-hidden cursor-pointer">
                <img src={cover} alt={album.name.clone()} class="w-full h-full object-cover" />
                <div class="absolute bottom-0 inset-x-0 bg-black/60 p-3">
                    <span class="font-semibold">{&album.name}</span>
                    <span class="ml-2 text-xs text-gray-300">{album.len()}</span>
                </div>
            </div>
        }
    };

    let image_grid = |album: &Album| {
        html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {for album.images.iter().enumerate().map(|(index, image)| {
                    let lightbox = lightbox.clone();
                    let images = album.images.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        lightbox.dispatch(LightboxAction::Open(images.clone(), index));
                    });
                    html! {
                        <div key={index} {onclick} class="relative h-56 rounded-lg overflow-hidden cursor-pointer">
                            <img src={image.url.clone()} alt={image.caption.clone()} class="w-full h-full object-cover" />
                            if !image.caption.is_empty() {
                                <div class="absolute bottom-0 inset-x-0 bg-black/60 p-2 text-sm">{&image.caption}</div>
                            }
                        </div>
                    }
                })}
            </div>
        }
    };

    let folder_view = match &*folder {
        Folder::Closed => None,
        Folder::Category(name) => tree.category(name).map(|category| {
            (
                category.name.clone(),
                html! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for category.albums.iter().map(album_card)}
                    </div>
                },
                Folder::Closed,
            )
        }),
        Folder::Album { category, album } => tree.album(category, album).map(|found| {
            (
                format!("{} / {}", category, found.name),
                image_grid(found),
                Folder::Category(category.clone()),
            )
        }),
    };

    html! {
        <section class="py-24 bg-gray-900 text-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h3 class="text-5xl font-extrabold mb-4">{"Media Gallery 📷"}</h3>
                    <p class="text-gray-400 text-xl max-w-xl mx-auto">
                        {"Relive the best moments from our training camps, championship matches, and community events."}
                    </p>
                </div>
                if tree.is_empty() {
                    <p class="text-center text-gray-500">{"No photos yet."}</p>
                } else {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                        {for categories}
                    </div>
                }
            </div>

            if let Some((title, body, back)) = folder_view {
                <div class="fixed inset-0 z-[900] bg-gray-900/95 overflow-y-auto p-8">
                    <div class="max-w-6xl mx-auto">
                        <div class="flex justify-between items-center mb-8">
                            <h2 class="text-3xl font-bold">{title}</h2>
                            <button onclick={open_folder(back)} class="bg-white/10 rounded-full px-4 py-2">{"✕"}</button>
                        </div>
                        {body}
                    </div>
                </div>
            }

            if let Some(image) = lightbox.0.current() {
                <div onclick={dispatch(|| LightboxAction::Close)}
                    class="fixed inset-0 z-[1000] bg-black/95 flex items-center justify-center">
                    <button onclick={dispatch(|| LightboxAction::Close)} class="absolute top-5 right-5 text-3xl">{"✕"}</button>
                    <button onclick={dispatch(|| LightboxAction::Prev)} class="absolute left-5 bg-white/10 rounded-full p-4">{"‹"}</button>
                    <figure class="max-w-5xl text-center" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <img src={image.url.clone()} alt={image.caption.clone()} class="max-h-[80vh] mx-auto rounded" />
                        <figcaption class="mt-4 text-lg">{&image.caption}</figcaption>
                        <p class="text-sm text-gray-400">{lightbox.0.position_label()}</p>
                    </figure>
                    <button onclick={dispatch(|| LightboxAction::Next)} class="absolute right-5 bg-white/10 rounded-full p-4">{"›"}</button>
                </div>
            }
        </section>
    }
}
