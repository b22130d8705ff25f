use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="bg-blue-900 text-white mt-auto">
            <div class="container mx-auto px-4 py-8 text-center space-y-2">
                <p>{format!("© {} Spartans Cricket Club. All rights reserved.", year)}</p>
                <p class="text-sm text-blue-200">
                    {"An official member of the Hessischer Cricket-Verband and the Deutscher Cricket Bund"}
                </p>
                <Link<Route> to={Route::Join} classes="text-sm underline text-blue-100">
                    {"Become a member"}
                </Link<Route>>
            </div>
        </footer>
    }
}
