use log::debug;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::SessionContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Login rendered outside a router");

    // Redirect to the dashboard once signed in
    {
        let navigator = navigator.clone();
        use_effect_with(session.state.is_authenticated(), move |authenticated| {
            if *authenticated {
                debug!("Admin session present, redirecting to dashboard");
                navigator.push(&Route::Admin);
            }
            || ()
        });
    }

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let session = session.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            session
                .login
                .emit(((*username).clone(), (*password).clone()));
        })
    };

    let onusernamechange = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 py-12 px-4">
            <div class="max-w-md w-full bg-white p-8 rounded-lg shadow">
                <h2 class="text-center text-2xl font-bold text-blue-900 mb-6">{"Admin Login"}</h2>
                <form class="space-y-4" {onsubmit}>
                    <div>
                        <label for="username" class="block mb-2 text-gray-600">{"Username"}</label>
                        <input
                            id="username"
                            type="text"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded"
                            onchange={onusernamechange}
                        />
                    </div>
                    <div>
                        <label for="password" class="block mb-2 text-gray-600">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded"
                            onchange={onpasswordchange}
                        />
                    </div>

                    if let Some(error) = session.state.error.clone() {
                        <p class="text-red-600 text-sm">{error}</p>
                    }

                    <button
                        type="submit"
                        class="w-full py-2 px-4 text-white bg-blue-900 rounded hover:bg-blue-800"
                    >
                        {"Login"}
                    </button>
                </form>
                <div class="text-center mt-4">
                    <Link<Route> to={Route::Home} classes="text-sm text-gray-500">{"Back to Home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
