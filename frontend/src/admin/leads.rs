use yew::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use log::{info, warn};
use crate::intake::{inquiries_to_csv, Intake};

fn download_csv(filename: &str, csv: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let mut options = BlobPropertyBag::new();
    options.type_("text/csv;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Url::revoke_object_url(&url)
}

#[function_component]
pub fn LeadsTab() -> Html {
    let inquiries = use_state(|| Intake::browser().load_all());

    let on_download = {
        let inquiries = inquiries.clone();
        Callback::from(move |_: MouseEvent| {
            let filename = format!("inquiries_{}.csv", chrono::Local::now().format("%Y%m%d"));
            match download_csv(&filename, &inquiries_to_csv(&inquiries)) {
                Ok(()) => info!("Exported {} inquiries", inquiries.len()),
                Err(e) => warn!("CSV export failed: {:?}", e),
            }
        })
    };

    html! {
        <div class="leads">
            <style>
                {r#"
                .leads-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
                .leads-table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
                .leads-table th { text-align: left; color: #777; font-weight: 500; padding: 0.7rem; border-bottom: 1px solid #222; }
                .leads-table td { padding: 0.9rem 0.7rem; border-bottom: 1px solid #161616; vertical-align: top; }
                .leads-table td.message { white-space: pre-wrap; color: #bbb; max-width: 420px; }
                .leads-empty { color: #666; text-align: center; padding: 3rem; }
                "#}
            </style>
            <div class="leads-header">
                <span>{format!("총 {}건", inquiries.len())}</span>
                <button class="admin-button" onclick={on_download} disabled={inquiries.is_empty()}>
                    {"CSV 다운로드"}
                </button>
            </div>
            {
                if inquiries.is_empty() {
                    html! { <p class="leads-empty">{"아직 접수된 문의가 없습니다."}</p> }
                } else {
                    html! {
                        <table class="leads-table">
                            <thead>
                                <tr>
                                    <th>{"접수일"}</th>
                                    <th>{"요청자"}</th>
                                    <th>{"연락처"}</th>
                                    <th>{"이메일"}</th>
                                    <th>{"문의상세"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    inquiries.iter().map(|inquiry| html! {
                                        <tr key={inquiry.id.clone()}>
                                            <td>{&inquiry.submitted_at}</td>
                                            <td>{&inquiry.name}</td>
                                            <td>{&inquiry.contact}</td>
                                            <td><a href={format!("mailto:{}", inquiry.email)}>{&inquiry.email}</a></td>
                                            <td class="message">{&inquiry.message}</td>
                                        </tr>
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}
