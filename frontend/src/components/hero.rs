use yew::prelude::*;

use crate::components::common_modal::Modal;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let show_stream_notice = use_state(|| false);

    let go = |section: &'static str| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    let open_stream = {
        let show_stream_notice = show_stream_notice.clone();
        Callback::from(move |_: MouseEvent| show_stream_notice.set(true))
    };

    let close_stream = {
        let show_stream_notice = show_stream_notice.clone();
        Callback::from(move |_: ()| show_stream_notice.set(false))
    };

    html! {
        <section id="home" class="bg-gradient-to-b from-blue-900 to-blue-700 text-white py-24 text-center">
            <div class="container mx-auto px-4">
                <h2 class="text-5xl font-extrabold mb-4">{"Welcome to Spartans Cricket Club"}</h2>
                <p class="text-xl text-blue-100 mb-8">{"Champions on and off the field"}</p>
                <div class="flex flex-wrap justify-center gap-4">
                    <button onclick={go("matches")} class="px-8 py-3 bg-yellow-400 text-blue-900 font-semibold rounded">
                        {"View Fixtures"}
                    </button>
                    <button onclick={go("team")} class="px-8 py-3 border-2 border-white font-semibold rounded">
                        {"Meet the Team"}
                    </button>
                    <button onclick={open_stream} class="px-8 py-3 bg-red-600 font-semibold rounded flex items-center gap-2">
                        <span class="w-2 h-2 bg-white rounded-full inline-block"></span>
                        {"Live Streaming"}
                    </button>
                </div>
                <div class="mt-12 flex justify-center gap-8">
                    <img src="/hcv-logo-transparent.png" alt="Hessischer Cricket-Verband" class="h-20 opacity-85" />
                    <img src="/dcb-logo.png" alt="Deutscher Cricket Bund" class="h-20 opacity-60" />
                </div>
            </div>
            <Modal
                is_open={*show_stream_notice}
                title="Live Streaming"
                message="Live streaming is under construction. Check back soon!"
                on_close={close_stream}
                button_text="Got it"
            />
        </section>
    }
}
