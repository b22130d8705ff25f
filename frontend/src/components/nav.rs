use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Homepage anchors, in page order.
pub const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("media", "Media"),
    ("matches", "Matches"),
    ("team", "Team"),
    ("join", "Join Us"),
];

pub fn scroll_to(section_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id));
    if let Some(element) = element {
        element.scroll_into_view();
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_mobile_menu_open = use_state(|| false);

    let toggle_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            is_mobile_menu_open.set(!*is_mobile_menu_open);
        })
    };

    let links = SECTIONS.iter().map(|&(id, label)| {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            scroll_to(id);
            // Close mobile menu when navigating
            is_mobile_menu_open.set(false);
        });
        let highlight = id == "join";
        html! {
            <li>
                <button {onclick} class={classes!(
                    "px-3", "py-2", "rounded-md", "text-sm", "font-medium", "transition-colors",
                    if highlight { "bg-red-600 hover:bg-red-700" } else { "hover:bg-white/10" }
                )}>
                    {label}
                </button>
            </li>
        }
    });

    html! {
        <header class={classes!(
            "sticky", "top-0", "z-40", "bg-gradient-to-r", "from-blue-900", "to-blue-700",
            "text-white", "shadow-lg"
        )}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-20 items-center">
                    <Link<Route> to={Route::Home} classes="flex items-center space-x-3">
                        <img src="/spartans-logo-transparent.png" alt="Spartans Logo" class="h-14" />
                        <span class="text-3xl font-black uppercase tracking-widest">{"Spartans"}</span>
                    </Link<Route>>

                    <button class="md:hidden text-2xl" onclick={toggle_mobile_menu}>{"☰"}</button>

                    <nav class={classes!(
                        "md:block",
                        if *is_mobile_menu_open { "block" } else { "hidden" }
                    )}>
                        <ul class="flex flex-col md:flex-row md:items-center gap-1">
                            {for links}
                            <li class="opacity-60">
                                <Link<Route> to={Route::Login} classes="px-3 py-2 text-sm">{"Admin"}</Link<Route>>
                            </li>
                        </ul>
                    </nav>
                </div>
            </div>
        </header>
    }
}
