use yew::prelude::*;
use yew_router::prelude::*;
use crate::content::{PRIVACY_POLICY, TERMS_OF_SERVICE};
use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalDocumentProps {
    title: &'static str,
    body: &'static str,
}

/// Blank lines separate sections; the first line of a section is its heading.
fn sections(body: &str) -> Vec<(&str, Vec<&str>)> {
    body.split("\n\n")
        .filter_map(|block| {
            let mut lines = block.lines().map(str::trim).filter(|line| !line.is_empty());
            let heading = lines.next()?;
            Some((heading, lines.collect()))
        })
        .collect()
}

#[function_component(LegalDocument)]
fn legal_document(props: &LegalDocumentProps) -> Html {
    html! {
        <div class="legal-content">
            <style>
                {r#"
                .legal-content { min-height: 100vh; padding: 9rem 2rem 4rem; display: flex; justify-content: center; }
                .legal-content > div { max-width: 800px; background: rgba(30, 30, 30, 0.7); border: 1px solid #222; border-radius: 16px; padding: 3rem; }
                .legal-content h1 { font-size: 2rem; margin-bottom: 2.5rem; }
                .legal-content h2 { color: var(--primary); font-size: 1.1rem; margin: 2rem 0 0.8rem; }
                .legal-content p { color: #999; line-height: 1.7; margin: 0 0 0.4rem; }
                .legal-back { display: inline-block; margin-top: 2.5rem; color: #888; }
                "#}
            </style>
            <div>
                <h1>{props.title}</h1>
                {
                    sections(props.body).into_iter().map(|(heading, lines)| html! {
                        <section>
                            <h2>{heading}</h2>
                            { for lines.into_iter().map(|line| html! { <p>{line}</p> }) }
                        </section>
                    }).collect::<Html>()
                }
                <Link<Route> to={Route::Landing} classes="legal-back">
                    {"홈으로 돌아가기"}
                </Link<Route>>
            </div>
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! { <LegalDocument title="이용약관" body={TERMS_OF_SERVICE} /> }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! { <LegalDocument title="개인정보처리방침" body={PRIVACY_POLICY} /> }
}
