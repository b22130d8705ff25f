use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center text-center">
            <h1 class="text-4xl font-bold mb-4">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600 mb-6">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="text-blue-700 underline">{"Back to the club"}</Link<Route>>
        </div>
    }
}
