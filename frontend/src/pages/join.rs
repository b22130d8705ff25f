use shared::registration::FormVariant;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::registration_form::RegistrationForm;
use crate::Route;

#[function_component(JoinPage)]
pub fn join_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-950 py-12 px-4">
            <div class="max-w-2xl mx-auto text-center mb-10">
                <Link<Route> to={Route::Home} classes="inline-block text-gray-400 hover:text-white mb-8">
                    {"← Back to Home"}
                </Link<Route>>
                <h1 class="text-5xl font-black text-white mb-4">{"Join The Club"}</h1>
                <p class="text-xl text-gray-400">{"Begin your journey with the Spartans."}</p>
            </div>
            <RegistrationForm variant={FormVariant::Join} />
        </div>
    }
}
