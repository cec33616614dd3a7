use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use log::info;
use crate::error::{FormField, IntakeError};
use crate::intake::{InquiryForm, Intake, RelayOutcome};

#[derive(Clone, PartialEq)]
enum Status {
    Idle,
    Accepted,
    Invalid(String, Option<FormField>),
}

#[derive(Properties, PartialEq)]
pub struct InquiryFormProps {
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(InquiryFormView)]
pub fn inquiry_form_view(props: &InquiryFormProps) -> Html {
    let form = use_state(InquiryForm::default);
    let status = use_state(|| Status::Idle);

    let on_input = |apply: fn(&mut InquiryForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let set_name = on_input(|f, v| f.name = v);
    let set_contact = on_input(|f, v| f.contact = v);
    let set_email = on_input(|f, v| f.email = v);
    let set_message = on_input(|f, v| f.message = v);

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submitted = (*form).clone();
            let intake = Intake::browser();
            match intake.record(&submitted) {
                Ok(inquiry) => {
                    status.set(Status::Accepted);
                    form.set(InquiryForm::default());
                    spawn_local(async move {
                        if intake.notify(&submitted).await == RelayOutcome::Delivered {
                            info!("Inquiry {} relayed", inquiry.id);
                        }
                    });
                }
                Err(e) => {
                    let field = match &e {
                        IntakeError::Validation(invalid) => Some(invalid.field()),
                        IntakeError::Storage(_) => None,
                    };
                    status.set(Status::Invalid(e.to_string(), field));
                }
            }
        })
    };

    let invalid = match &*status {
        Status::Invalid(_, field) => *field,
        _ => None,
    };
    let flagged = |field: FormField| (invalid == Some(field)).then(|| "invalid");

    let input = |field: FormField, placeholder: &'static str, value: &str, kind: &'static str, setter: Callback<String>| {
        html! {
            <input
                class={classes!(flagged(field))}
                type={kind}
                placeholder={placeholder}
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    setter.emit(input.value());
                })}
            />
        }
    };

    html! {
        <form class={classes!("inquiry-form", props.compact.then(|| "compact"))} {onsubmit}>
            <style>
                {r#"
                .inquiry-form { display: grid; gap: 1rem; background: rgba(255, 255, 255, 0.04); border: 1px solid #222; border-radius: 24px; padding: 2.5rem; }
                .inquiry-form.compact { padding: 1.5rem; }
                .inquiry-form .row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .inquiry-form input, .inquiry-form textarea { width: 100%; background: #0b0b0b; border: 1px solid #333; border-radius: 12px; padding: 1rem; color: #fff; font-size: 1rem; }
                .inquiry-form textarea { min-height: 160px; resize: vertical; }
                .inquiry-form .invalid { border-color: #ff6b6b; }
                .inquiry-form button { background: var(--primary); color: #fff; border: none; border-radius: 12px; padding: 1.1rem; font-size: 1.1rem; font-weight: 800; cursor: pointer; }
                .inquiry-form .consent { color: #666; font-size: 0.8rem; }
                @media (max-width: 768px) { .inquiry-form .row { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="row">
                {input(FormField::Name, "성함 / 담당자명", &form.name, "text", set_name)}
                {input(FormField::Contact, "연락처", &form.contact, "tel", set_contact)}
            </div>
            {input(FormField::Email, "이메일", &form.email, "email", set_email)}
            <textarea
                class={classes!(flagged(FormField::Message))}
                placeholder="문의 내용을 자유롭게 적어주세요."
                value={form.message.clone()}
                oninput={Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    set_message.emit(area.value());
                })}
            />
            <p class="consent">{"문의를 제출하면 개인정보 수집 및 이용에 동의한 것으로 간주됩니다."}</p>
            {
                match &*status {
                    Status::Idle => html! {},
                    Status::Accepted => html! {
                        <p class="success-message">{"문의가 접수되었습니다. 빠르게 연락드리겠습니다."}</p>
                    },
                    Status::Invalid(message, _) => html! {
                        <p class="error-message">{message}</p>
                    },
                }
            }
            <button type="submit">{"상담 신청하기"}</button>
        </form>
    }
}
