use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::state::{SettingField, SiteAction, SiteContext};

fn label(field: SettingField) -> &'static str {
    match field {
        SettingField::AgencyName => "업체명",
        SettingField::HeroTitle => "메인 타이틀",
        SettingField::HeroSlogan => "슬로건 (쉼표로 줄바꿈)",
        SettingField::PrimaryColor => "메인 컬러",
        SettingField::SecondaryColor => "배경 컬러",
        SettingField::YoutubeUrl => "YouTube URL",
        SettingField::InstagramUrl => "Instagram URL",
        SettingField::KakaoUrl => "KakaoTalk URL",
    }
}

fn input_type(field: SettingField) -> &'static str {
    match field {
        SettingField::PrimaryColor | SettingField::SecondaryColor => "color",
        SettingField::YoutubeUrl | SettingField::InstagramUrl | SettingField::KakaoUrl => "url",
        _ => "text",
    }
}

#[function_component]
pub fn AppearanceTab() -> Html {
    let site = use_context::<SiteContext>();
    let Some(site) = site else {
        return html! {};
    };

    html! {
        <div class="admin-card appearance">
            {
                SettingField::ALL.iter().map(|field| {
                    let field = *field;
                    let oninput = {
                        let site = site.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            site.dispatch(SiteAction::UpdateSetting(field, input.value()));
                        })
                    };
                    html! {
                        <label class="admin-field">
                            <span>{label(field)}</span>
                            <input type={input_type(field)} value={field.read(&site.content.settings).to_string()} {oninput} />
                        </label>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
