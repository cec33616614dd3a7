use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use log::warn;
use crate::models::{VideoKind, VideoReference};
use crate::registry::{Direction, ReferenceField};
use crate::state::{SiteAction, SiteContext, SolutionField};
use crate::thumbnail;

fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
struct ReferenceRowProps {
    reference: VideoReference,
    first: bool,
    last: bool,
}

#[function_component(ReferenceRow)]
fn reference_row(props: &ReferenceRowProps) -> Html {
    let site = use_context::<SiteContext>();
    let upload_error = use_state(|| None::<String>);
    let Some(site) = site else {
        return html! {};
    };
    let id = props.reference.id.clone();

    let edit = |to_field: fn(String) -> ReferenceField| {
        let site = site.clone();
        let id = id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            site.dispatch(SiteAction::UpdateReference(id.clone(), to_field(input.value())));
        })
    };

    let on_kind = {
        let site = site.clone();
        let id = id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(kind) = VideoKind::parse(&select.value()) {
                site.dispatch(SiteAction::UpdateReference(id.clone(), ReferenceField::Kind(kind)));
            }
        })
    };

    let on_thumbnail = {
        let site = site.clone();
        let id = id.clone();
        let upload_error = upload_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let site = site.clone();
            let id = id.clone();
            let upload_error = upload_error.clone();
            spawn_local(async move {
                match thumbnail::read_as_data_uri(&file).await {
                    Ok(uri) => {
                        upload_error.set(None);
                        site.dispatch(SiteAction::SetThumbnail(id, uri));
                    }
                    Err(e) => {
                        warn!("Thumbnail upload for {} rejected: {}", id, e);
                        upload_error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let on_move = |direction: Direction| {
        let site = site.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| site.dispatch(SiteAction::MoveReference(id.clone(), direction)))
    };

    let on_remove = {
        let site = site.clone();
        let id = id.clone();
        let title = props.reference.title.clone();
        Callback::from(move |_: MouseEvent| {
            if confirm(&format!("'{}' 레퍼런스를 삭제할까요?", title)) {
                site.dispatch(SiteAction::RemoveReference(id.clone()));
            }
        })
    };

    let reference = &props.reference;
    html! {
        <div class="admin-card reference-row">
            <img class="reference-thumb" src={reference.display_thumbnail()} alt="" />
            <div class="reference-fields">
                <label class="admin-field">
                    <span>{"유형"}</span>
                    <select onchange={on_kind}>
                        {
                            VideoKind::ALL.iter().map(|kind| html! {
                                <option value={kind.as_str()} selected={*kind == reference.kind}>{kind.as_str()}</option>
                            }).collect::<Html>()
                        }
                    </select>
                </label>
                <label class="admin-field">
                    <span>{"제목"}</span>
                    <input type="text" value={reference.title.clone()} oninput={edit(ReferenceField::Title)} />
                </label>
                <label class="admin-field">
                    <span>{"영상 URL"}</span>
                    <input type="url" value={reference.external_url.clone()} oninput={edit(ReferenceField::ExternalUrl)} />
                </label>
                <label class="admin-field">
                    <span>{"썸네일 URL"}</span>
                    <input
                        type="text"
                        value={if reference.thumbnail.starts_with("data:") { String::new() } else { reference.thumbnail.clone() }}
                        placeholder={if reference.thumbnail.starts_with("data:") { "업로드된 이미지 사용 중" } else { "https://..." }}
                        oninput={edit(ReferenceField::Thumbnail)}
                    />
                </label>
                <label class="admin-field">
                    <span>{"썸네일 업로드"}</span>
                    <input type="file" accept="image/*" onchange={on_thumbnail} />
                </label>
                {
                    if let Some(message) = (*upload_error).as_ref() {
                        html! { <p class="error-message">{message}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="reference-actions">
                <button class="admin-button" onclick={on_move(Direction::Up)} disabled={props.first}>{"▲"}</button>
                <button class="admin-button" onclick={on_move(Direction::Down)} disabled={props.last}>{"▼"}</button>
                <button class="admin-button danger" onclick={on_remove}>{"삭제"}</button>
            </div>
        </div>
    }
}

#[function_component(SolutionsEditor)]
fn solutions_editor() -> Html {
    let site = use_context::<SiteContext>();
    let Some(site) = site else {
        return html! {};
    };

    html! {
        <div class="solutions-editor">
            {
                site.content.solutions.iter().map(|solution| {
                    let on_title = {
                        let site = site.clone();
                        let id = solution.id.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            site.dispatch(SiteAction::UpdateSolution(id.clone(), SolutionField::Title(input.value())));
                        })
                    };
                    let on_description = {
                        let site = site.clone();
                        let id = solution.id.clone();
                        Callback::from(move |e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            site.dispatch(SiteAction::UpdateSolution(id.clone(), SolutionField::Description(area.value())));
                        })
                    };
                    html! {
                        <div class="admin-card" key={solution.id.clone()}>
                            <label class="admin-field">
                                <span>{"제목"}</span>
                                <input type="text" value={solution.title.clone()} oninput={on_title} />
                            </label>
                            <label class="admin-field">
                                <span>{"설명"}</span>
                                <textarea value={solution.description.clone()} oninput={on_description} />
                            </label>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component]
pub fn ContentTab() -> Html {
    let site = use_context::<SiteContext>();
    let Some(site) = site else {
        return html! {};
    };

    let partition = |kind: VideoKind| {
        let references = site.content.registry.list(kind);
        let count = references.len();
        let on_add = {
            let site = site.clone();
            Callback::from(move |_: MouseEvent| site.dispatch(SiteAction::AddReference(kind)))
        };
        html! {
            <section class="reference-partition">
                <div class="partition-header">
                    <h3>{format!("{} ({})", kind, count)}</h3>
                    <button class="admin-button" onclick={on_add}>{"+ 추가"}</button>
                </div>
                {
                    references.into_iter().enumerate().map(|(i, reference)| html! {
                        <ReferenceRow
                            key={reference.id.clone()}
                            reference={reference.clone()}
                            first={i == 0}
                            last={i + 1 == count}
                        />
                    }).collect::<Html>()
                }
            </section>
        }
    };

    html! {
        <div class="content-tab">
            <style>
                {r#"
                .content-tab h2 { font-size: 1.3rem; margin: 2rem 0 1rem; }
                .partition-header { display: flex; justify-content: space-between; align-items: center; }
                .reference-row { display: grid; grid-template-columns: 200px 1fr auto; gap: 1.5rem; align-items: start; }
                .reference-thumb { width: 200px; aspect-ratio: 16 / 9; object-fit: cover; border-radius: 8px; background: #111; }
                .reference-actions { display: flex; flex-direction: column; gap: 0.5rem; }
                @media (max-width: 768px) { .reference-row { grid-template-columns: 1fr; } }
                "#}
            </style>
            <h2>{"Solutions"}</h2>
            <SolutionsEditor />
            <h2>{"References"}</h2>
            { for VideoKind::ALL.iter().map(|kind| partition(*kind)) }
        </div>
    }
}
