use std::rc::Rc;

use log::info;
use shared::registration::{
    dispatch, Begin, FlowState, FormVariant, RegistrationFlow, SubmitOutcome, REGISTER_SUCCESS,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiContext;
use crate::components::common_modal::Modal;
use crate::hooks::{use_in_flight, use_is_mounted};
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Role,
    Experience,
    Website,
}

pub enum FormAction {
    Edit(Field, String),
    Consent(bool),
    /// Flow after a successful `begin_submit`.
    Started(RegistrationFlow),
    Outcome(SubmitOutcome),
    Review,
    Dismiss,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState(pub RegistrationFlow);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut flow = self.0.clone();
        match action {
            FormAction::Edit(field, value) => {
                let form = &mut flow.form;
                match field {
                    Field::Name => form.name = value,
                    Field::Email => form.email = value,
                    Field::Phone => form.phone = value,
                    Field::Role => form.role = value,
                    Field::Experience => form.experience = value,
                    Field::Website => form.website = value,
                }
            }
            FormAction::Consent(checked) => flow.form.legal_consent = checked,
            FormAction::Started(started) => flow = started,
            FormAction::Outcome(outcome) => flow.apply_outcome(outcome),
            FormAction::Review => flow.review(),
            FormAction::Dismiss => flow.dismiss_notice(),
        }
        Rc::new(Self(flow))
    }
}

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub variant: FormVariant,
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-700";

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let api = use_context::<ApiContext>().expect("Api context not found");
    let mounted = use_is_mounted();
    let in_flight = use_in_flight();
    let variant = props.variant;
    let state = use_reducer_eq(|| FormState(RegistrationFlow::new(variant)));
    let popup = use_state(|| None::<String>);

    let submit = {
        let state = state.clone();
        let popup = popup.clone();
        let api = api.api();
        Callback::from(move |force: bool| {
            // `state` is the snapshot from the last render; a second event
            // before the re-render only sees the guard.
            if !in_flight.try_begin() {
                info!("Submission already in flight");
                return;
            }
            let mut flow = state.0.clone();
            match flow.begin_submit(force) {
                Begin::Send(pending) => {
                    state.dispatch(FormAction::Started(flow));
                    let state = state.clone();
                    let api = api.clone();
                    let mounted = mounted.clone();
                    let in_flight = in_flight.clone();
                    spawn_local(async move {
                        let outcome = dispatch(api.as_ref(), &pending).await;
                        in_flight.finish();
                        if mounted.is_mounted() {
                            state.dispatch(FormAction::Outcome(outcome));
                        }
                    });
                }
                Begin::Rejected(e) => {
                    in_flight.finish();
                    popup.set(Some(e.to_string()));
                }
                Begin::Ignored => {
                    in_flight.finish();
                    info!("Submission ignored");
                }
            }
        })
    };

    let onsubmit = {
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(false);
        })
    };

    let edit_input = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let edit_select = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(FormAction::Edit(field, select.value()));
        })
    };

    let edit_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(FormAction::Edit(Field::Experience, area.value()));
        })
    };

    let on_consent = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::Consent(input.checked()));
        })
    };

    let close_popup = {
        let popup = popup.clone();
        Callback::from(move |_: ()| popup.set(None))
    };

    let force_submit = {
        let submit = submit.clone();
        Callback::from(move |_: ()| submit.emit(true))
    };

    let review = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(FormAction::Review))
    };

    let dismiss = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(FormAction::Dismiss))
    };

    let flow = &state.0;
    let form = &flow.form;
    let submitting = flow.is_submitting();

    if variant == FormVariant::Join && *flow.state() == FlowState::Succeeded {
        return html! {
            <div class="max-w-lg mx-auto bg-gray-900 text-white rounded-3xl p-10 text-center">
                <div class="text-6xl mb-6">{"✅"}</div>
                <h2 class="text-4xl font-bold mb-4">{"Request Sent"}</h2>
                <p class="text-gray-300 mb-8">
                    {"Thank you for your interest in Spartans Cricket Club! We have received your application. \
                      The administration will review your details and contact you shortly."}
                </p>
                <Link<Route> to={Route::Home} classes="inline-block w-full px-8 py-4 bg-red-600 rounded-xl font-semibold">
                    {"Return to Home"}
                </Link<Route>>
            </div>
        };
    }

    let role_options = variant.roles().iter().map(|role| {
        html! { <option value={*role} selected={form.role == *role}>{*role}</option> }
    });

    let experience_field = if variant == FormVariant::Join {
        html! {
            <div>
                <label class="block mb-2 font-medium">{"Message / Experience"}</label>
                <textarea rows="4" class={INPUT_CLASS} placeholder="Tell us about yourself..."
                    value={form.experience.clone()} oninput={edit_message} />
            </div>
        }
    } else {
        html! {
            <div>
                <label class="block mb-2 font-medium">{"Experience"}</label>
                <select class={INPUT_CLASS} onchange={edit_select(Field::Experience)}>
                    {for variant.experience_levels().iter().map(|level| html! {
                        <option value={*level} selected={form.experience == *level}>{*level}</option>
                    })}
                </select>
            </div>
        }
    };

    let (title, button) = match variant {
        FormVariant::Register => ("Join the Club", "Register Now"),
        FormVariant::Join => ("Join The Club", "Submit Request"),
    };

    html! {
        <section class="container mx-auto px-4 py-16 flex justify-center">
            <div class="w-full max-w-xl bg-white p-12 rounded-2xl shadow-xl">
                <h3 class="text-3xl font-bold text-blue-900 text-center mb-6">{title}</h3>

                if *flow.state() == FlowState::Succeeded {
                    <div class="p-4 mb-4 bg-green-100 text-green-800 rounded-lg flex justify-between">
                        <span>{REGISTER_SUCCESS}</span>
                        <button onclick={dismiss.reform(|_: MouseEvent| ())}>{"✕"}</button>
                    </div>
                }
                if let FlowState::Failed(message) = flow.state() {
                    <div class="p-4 mb-4 bg-red-100 text-red-800 rounded-lg flex justify-between">
                        <span>{message.clone()}</span>
                        <button onclick={dismiss.reform(|_: MouseEvent| ())}>{"✕"}</button>
                    </div>
                }

                <form {onsubmit} class="grid gap-6" novalidate=true>
                    <div>
                        <label class="block mb-2 font-medium">{"Full Name"}</label>
                        <input class={INPUT_CLASS} value={form.name.clone()} oninput={edit_input(Field::Name)} />
                    </div>
                    <div>
                        <label class="block mb-2 font-medium">{"Email"}</label>
                        <input type="email" class={INPUT_CLASS} value={form.email.clone()} oninput={edit_input(Field::Email)} />
                    </div>
                    <div>
                        <label class="block mb-2 font-medium">{"Phone Number"}</label>
                        <input type="tel" class={INPUT_CLASS} value={form.phone.clone()} oninput={edit_input(Field::Phone)} />
                    </div>
                    <div>
                        <label class="block mb-2 font-medium">{"Preferred Role"}</label>
                        <select class={INPUT_CLASS} onchange={edit_select(Field::Role)}>
                            {for role_options}
                        </select>
                    </div>
                    {experience_field}

                    // Hidden from people, bots fill it in
                    <div style="display: none; position: absolute; left: -9999px;">
                        <input type="text" name="website" tabindex="-1" autocomplete="off"
                            value={form.website.clone()} oninput={edit_input(Field::Website)} />
                    </div>

                    <label class="flex items-start gap-3 text-sm text-gray-600">
                        <input type="checkbox" checked={form.legal_consent} onchange={on_consent} class="mt-1" />
                        <span>
                            {"By submitting this form, I explicitly consent to the processing of my personal data by \
                              Spartan Cricket Club e.V. for membership purposes in accordance with Art. 6 GDPR."}
                        </span>
                    </label>

                    <button type="submit" disabled={submitting}
                        class="w-full py-4 text-lg font-semibold text-white bg-blue-900 rounded-lg disabled:opacity-50">
                        {if submitting { "Submitting..." } else { button }}
                    </button>
                </form>
            </div>

            <Modal
                is_open={popup.is_some()}
                title="Please check the form"
                message={(*popup).clone().unwrap_or_default()}
                on_close={close_popup}
                button_text="OK"
            />

            if let FlowState::Duplicate { count } = flow.state() {
                <Modal
                    is_open=true
                    title="Possible duplicate"
                    message={format!(
                        "We already have {} registration(s) with these details. Submit anyway?",
                        count
                    )}
                    on_close={review}
                    button_text="Review"
                    button_class="bg-gray-600 hover:bg-gray-700"
                    secondary={Some((AttrValue::from("Submit anyway"), force_submit))}
                />
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_land_in_the_form() {
        let state = Rc::new(FormState(RegistrationFlow::new(FormVariant::Join)));
        let state = state.reduce(FormAction::Edit(Field::Name, "Asif".to_string()));
        let state = state.reduce(FormAction::Consent(true));
        assert_eq!(state.0.form.name, "Asif");
        assert!(state.0.form.legal_consent);
    }

    #[test]
    fn test_duplicate_then_review_keeps_fields() {
        let state = Rc::new(FormState(RegistrationFlow::new(FormVariant::Register)));
        let state = state.reduce(FormAction::Edit(Field::Email, "a@example.com".to_string()));
        let state = state.reduce(FormAction::Outcome(SubmitOutcome::Duplicate { count: 2 }));
        assert_eq!(*state.0.state(), FlowState::Duplicate { count: 2 });
        let state = state.reduce(FormAction::Review);
        assert_eq!(*state.0.state(), FlowState::Editing);
        assert_eq!(state.0.form.email, "a@example.com");
    }
}
