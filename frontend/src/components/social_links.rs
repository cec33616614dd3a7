use yew::prelude::*;
use crate::state::SiteContext;

/// Floating channel links, bottom right. Empty URLs are skipped.
#[function_component(SocialLinks)]
pub fn social_links() -> Html {
    let site = use_context::<SiteContext>();
    let Some(site) = site else {
        return html! {};
    };
    let settings = &site.content.settings;
    let links = [
        ("YouTube", "yt", &settings.youtube_url),
        ("Instagram", "ig", &settings.instagram_url),
        ("KakaoTalk", "kakao", &settings.kakao_url),
    ];

    html! {
        <div class="social-links">
            <style>
                {r#"
                .social-links { position: fixed; right: 1.5rem; bottom: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; z-index: 40; }
                .social-link { width: 52px; height: 52px; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 0.7rem; font-weight: 800; text-decoration: none; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4); }
                .social-link.yt { background: #ff0000; }
                .social-link.ig { background: linear-gradient(45deg, #f58529, #dd2a7b, #8134af); }
                .social-link.kakao { background: #fee500; color: #191919; }
                "#}
            </style>
            {
                links.iter().filter(|(_, _, url)| !url.is_empty()).map(|(label, class, url)| html! {
                    <a class={classes!("social-link", *class)} href={url.to_string()} target="_blank" rel="noopener noreferrer" title={*label}>
                        {label.chars().next().map(String::from).unwrap_or_default()}
                    </a>
                }).collect::<Html>()
            }
        </div>
    }
}
