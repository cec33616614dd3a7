use yew::prelude::*;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use crate::components::{
    gallery::ReferenceGallery,
    inquiry_form::InquiryFormView,
    social_links::SocialLinks,
    stats_banner::StatsBanner,
};
use crate::models::Solution;
use crate::state::SiteContext;

const INQUIRY_ANCHOR: &str = "inquiry";

/// Hero slogans are written as comma-separated phrases, one per line.
pub fn slogan_lines(slogan: &str) -> Vec<String> {
    slogan
        .split(',')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn scroll_to(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn solution_card(solution: &Solution, index: usize) -> Html {
    html! {
        <div class="solution-card" key={solution.id.clone()}>
            <span class="solution-index">{format!("{:02}", index + 1)}</span>
            <span class="solution-icon">{&solution.icon_name}</span>
            <h3>{&solution.title}</h3>
            <p>{&solution.description}</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let site = use_context::<SiteContext>();
    let Some(site) = site else {
        return html! {};
    };
    let settings = &site.content.settings;
    let onclick_inquiry = Callback::from(|_: MouseEvent| scroll_to(INQUIRY_ANCHOR));

    html! {
        <div class="landing">
            <style>
                {r#"
                .hero { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center; padding: 8rem 2rem 4rem; background: radial-gradient(circle at 50% 30%, rgba(139, 92, 246, 0.25), transparent 60%); }
                .hero h1 { font-size: clamp(3rem, 10vw, 7rem); font-weight: 900; letter-spacing: -0.05em; margin: 0 0 1.5rem; }
                .hero-slogan { font-size: clamp(1.1rem, 2.5vw, 1.6rem); color: #bbb; line-height: 1.6; margin: 0 0 3rem; }
                .hero-slogan span { display: block; }
                .hero-cta { background: var(--primary); border: none; color: #fff; padding: 1.1rem 2.6rem; border-radius: 999px; font-size: 1.1rem; font-weight: 800; cursor: pointer; }
                .solutions-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; }
                .solution-card { background: #0d0d0d; border: 1px solid #1f1f1f; border-radius: 24px; padding: 2.5rem; }
                .solution-index { color: var(--primary); font-weight: 900; }
                .solution-icon { display: block; color: #555; font-size: 0.8rem; margin-top: 0.5rem; }
                .solution-card h3 { font-size: 1.6rem; margin: 1rem 0; }
                .solution-card p { color: #999; line-height: 1.7; }
                .inquiry-section { max-width: 800px; }
                .inquiry-section p.lead { color: #999; margin-bottom: 2rem; }
                "#}
            </style>
            <section class="hero">
                <h1>{&settings.hero_title}</h1>
                <p class="hero-slogan">
                    { for slogan_lines(&settings.hero_slogan).into_iter().map(|line| html! { <span>{line}</span> }) }
                </p>
                <button class="hero-cta" onclick={onclick_inquiry}>{"프로젝트 문의하기"}</button>
            </section>

            <section class="section">
                <h2 class="section-title">{"Solution"}<span class="accent">{"."}</span></h2>
                <div class="solutions-grid">
                    { for site.content.solutions.iter().enumerate().map(|(i, s)| solution_card(s, i)) }
                </div>
            </section>

            <ReferenceGallery />
            <StatsBanner />

            <section class="section inquiry-section" id={INQUIRY_ANCHOR}>
                <h2 class="section-title">{"Contact"}<span class="accent">{"."}</span></h2>
                <p class="lead">{format!("{}와 함께 채널의 다음 단계를 설계하세요.", settings.agency_name)}</p>
                <InquiryFormView />
            </section>

            <SocialLinks />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slogan_lines() {
        assert_eq!(
            slogan_lines("당신의 비전을 현실로, 압도적인 유튜브 성장의 파트너"),
            vec!["당신의 비전을 현실로", "압도적인 유튜브 성장의 파트너"]
        );
        assert_eq!(slogan_lines(" 하나 ,, "), vec!["하나"]);
        assert!(slogan_lines("").is_empty());
    }
}
