use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::auth::BrowserGate;

#[derive(Properties, PartialEq)]
pub struct AdminLoginProps {
    pub on_login: Callback<()>,
}

#[function_component]
pub fn AdminLogin(props: &AdminLoginProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let remember = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let remember = remember.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match BrowserGate::browser().login(&username, &password, *remember) {
                Ok(()) => {
                    error.set(None);
                    on_login.emit(());
                }
                Err(e) => {
                    password.set(String::new());
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <div class="login-container">
            <style>
                {r#"
                .login-container { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; }
                .login-form { width: 100%; max-width: 400px; display: grid; gap: 1rem; background: rgba(30, 30, 30, 0.7); border: 1px solid #222; border-radius: 16px; padding: 2.5rem; }
                .login-form h1 { margin: 0 0 1rem; font-size: 1.6rem; }
                .login-form input[type=text], .login-form input[type=password] { background: #0b0b0b; border: 1px solid #333; border-radius: 8px; padding: 0.9rem; color: #fff; }
                .login-form label { color: #999; font-size: 0.9rem; display: flex; gap: 0.5rem; align-items: center; }
                .login-form button { background: var(--primary); border: none; border-radius: 8px; padding: 0.9rem; color: #fff; font-weight: 700; cursor: pointer; }
                "#}
            </style>
            <form class="login-form" {onsubmit}>
                <h1>{"Admin Login"}</h1>
                <input
                    type="text"
                    placeholder="ID"
                    autocomplete="username"
                    value={(*username).clone()}
                    oninput={{
                        let username = username.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            username.set(input.value());
                        })
                    }}
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    oninput={{
                        let password = password.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        })
                    }}
                />
                <label>
                    <input
                        type="checkbox"
                        checked={*remember}
                        onchange={{
                            let remember = remember.clone();
                            Callback::from(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                remember.set(input.checked());
                            })
                        }}
                    />
                    {"로그인 상태 유지"}
                </label>
                {
                    if let Some(message) = (*error).as_ref() {
                        html! { <p class="error-message">{message}</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit">{"로그인"}</button>
            </form>
        </div>
    }
}
