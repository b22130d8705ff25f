use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub message: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or(AttrValue::from("bg-red-600 hover:bg-red-700"))]
    pub button_class: AttrValue,
    #[prop_or(AttrValue::from("Close"))]
    pub button_text: AttrValue,
    /// Optional second button, rendered left of the primary one.
    #[prop_or_default]
    pub secondary: Option<(AttrValue, Callback<()>)>,
    /// Replaces `message` when the body is more than one line of text.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_button_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let secondary = props.secondary.as_ref().map(|(label, action)| {
        let action = action.clone();
        html! {
            <button
                onclick={Callback::from(move |_: MouseEvent| action.emit(()))}
                class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200 mr-3"
            >
                {label.clone()}
            </button>
        }
    });

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                onclick={on_overlay_click}
            ></div>
            <div
                class="relative bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4"
                onclick={on_modal_click}
            >
                <div class="mb-4">
                    <h3 class="text-lg font-medium text-gray-900">{props.title.clone()}</h3>
                </div>
                <div class="mb-6 text-sm text-gray-600">
                    if props.children.is_empty() {
                        <p>{props.message.clone()}</p>
                    } else {
                        {props.children.clone()}
                    }
                </div>
                <div class="flex justify-end">
                    {secondary}
                    <button
                        onclick={on_button_click}
                        class={classes!(
                            "px-4", "py-2", "text-sm", "font-medium", "text-white", "rounded-md", "focus:outline-none", "focus:ring-2", "focus:ring-offset-2",
                            props.button_class.to_string()
                        )}
                    >
                        {props.button_text.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
