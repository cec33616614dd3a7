use yew::prelude::*;
use crate::components::inquiry_form::InquiryFormView;

#[function_component(Consultation)]
pub fn consultation() -> Html {
    html! {
        <div class="section consultation">
            <style>
                {r#"
                .consultation { max-width: 760px; padding-top: 9rem; }
                .consultation h1 { font-size: 3rem; font-weight: 900; margin: 0 0 1rem; }
                .consultation .lead { color: #999; line-height: 1.7; margin-bottom: 3rem; }
                .consultation ol { color: #bbb; line-height: 2; margin-bottom: 3rem; }
                "#}
            </style>
            <h1>{"무료 상담 신청"}<span class="accent">{"."}</span></h1>
            <p class="lead">
                {"채널 기획부터 촬영, 편집, 운영까지. 현재 상황과 목표를 남겨주시면 담당 매니저가 영업일 기준 1일 이내에 연락드립니다."}
            </p>
            <ol>
                <li>{"문의 접수"}</li>
                <li>{"채널 진단 및 제안서 전달"}</li>
                <li>{"미팅 후 계약 및 제작 착수"}</li>
            </ol>
            <InquiryFormView compact=true />
        </div>
    }
}
