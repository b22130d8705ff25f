use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiContext;
use crate::auth::{SessionContext, SessionProvider};
use crate::components::common_toast::ToastProvider;
use crate::components::footer::Footer;
use crate::components::nav::Nav;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages {
    pub mod admin;
    pub mod home;
    pub mod join;
    pub mod login;
    pub mod not_found;
}

use pages::{admin::AdminPage, home::Home, join::JoinPage, login::Login, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/admin")]
    Admin,
    #[at("/join")]
    Join,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    let api = use_state(ApiContext::http);

    html! {
        <ToastProvider>
            <SessionProvider>
                <ContextProvider<ApiContext> context={(*api).clone()}>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ContextProvider<ApiContext>>
            </SessionProvider>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Renders its children only for a signed-in admin, otherwise sends the
/// visitor to the login page.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("ProtectedRoute rendered outside a router");
    let is_authenticated = session.state.is_authenticated();

    use_effect_with(is_authenticated, move |is_auth| {
        if !*is_auth {
            navigator.push(&Route::Login);
        }
        || ()
    });

    if is_authenticated {
        html! { <>{props.children.clone()}</> }
    } else {
        html! {}
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! {
            <div class="flex flex-col min-h-screen">
                <Nav />
                <main class="flex-1">
                    <Home />
                </main>
                <Footer />
            </div>
        },
        Route::Login => html! { <Login /> },
        Route::Admin => {
            debug!("Rendering Admin component (protected)");
            html! {
                <ProtectedRoute>
                    <AdminPage />
                </ProtectedRoute>
            }
        }
        Route::Join => html! { <JoinPage /> },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting Spartans site to #app");
    yew::Renderer::<App>::new().render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            web_sys::console::error_1(&e);
        }
    });
    Ok(())
}
