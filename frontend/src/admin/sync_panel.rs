use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use crate::error::StorageError;
use crate::models::{SyncTarget, VideoReference};
use crate::state::{SiteAction, SiteContent, SiteContext};
use crate::storage::{BrowserStorage, KeyValueStore};
use crate::sync::client::{load_target, SyncClient};

#[derive(Clone, PartialEq)]
enum Status {
    Idle,
    Working,
    Done(String),
    Failed(String),
}

/// Saves `content` locally and returns the references to push. Nothing is
/// pushed that the local store does not hold.
fn saved_snapshot(
    content: &SiteContent,
    local: &impl KeyValueStore,
) -> Result<Vec<VideoReference>, StorageError> {
    content.save(local)?;
    Ok(content.registry.entries().to_vec())
}

#[function_component]
pub fn SyncPanel() -> Html {
    let site = use_context::<SiteContext>();
    let target = use_state(|| load_target(&BrowserStorage::local()).unwrap_or_default());
    let status = use_state(|| Status::Idle);
    let Some(site) = site else {
        return html! {};
    };

    let field = |apply: fn(&mut SyncTarget, String)| {
        let target = target.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*target).clone();
            apply(&mut next, input.value());
            target.set(next);
        })
    };

    let on_sync = {
        let site = site.clone();
        let target = target.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let references = match saved_snapshot(&site.content, &BrowserStorage::local()) {
                Ok(references) => references,
                Err(e) => {
                    status.set(Status::Failed(format!("로컬 저장에 실패해 동기화하지 않았습니다: {}", e)));
                    return;
                }
            };
            site.dispatch(SiteAction::MarkSaved);
            let target = (*target).clone();
            let status = status.clone();
            status.set(Status::Working);
            spawn_local(async move {
                match SyncClient::browser().sync(&references, &target).await {
                    Ok(receipt) => status.set(Status::Done(format!(
                        "레퍼런스 {}개를 {}에 반영했습니다. (revision {})",
                        receipt.entries, target.path, receipt.sha
                    ))),
                    Err(e) => status.set(Status::Failed(e.to_string())),
                }
            });
        })
    };

    let on_pull = {
        let site = site.clone();
        let target = target.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let site = site.clone();
            let target = (*target).clone();
            let status = status.clone();
            status.set(Status::Working);
            spawn_local(async move {
                match SyncClient::browser().pull(&target).await {
                    Ok((file, references)) => {
                        let count = references.len();
                        site.dispatch(SiteAction::ReplaceReferences(references));
                        status.set(Status::Done(format!(
                            "원격 파일(revision {})에서 레퍼런스 {}개를 불러왔습니다. 저장을 눌러 확정하세요.",
                            file.sha, count
                        )));
                    }
                    Err(e) => status.set(Status::Failed(e.to_string())),
                }
            });
        })
    };

    let working = *status == Status::Working;

    html! {
        <div class="admin-card sync-panel">
            <p class="sync-help">
                {"레퍼런스 목록을 GitHub 저장소의 파일에 커밋합니다. .json 경로는 버전 문서로, 그 외 경로는 INITIAL_REFERENCES 선언을 찾아 교체합니다. 다른 곳에서 파일이 먼저 수정된 경우 덮어쓰지 않고 충돌로 중단합니다."}
            </p>
            <label class="admin-field">
                <span>{"저장소 (owner/name)"}</span>
                <input type="text" placeholder="entervibe/site" value={target.repo.clone()} oninput={field(|t, v| t.repo = v)} />
            </label>
            <label class="admin-field">
                <span>{"파일 경로"}</span>
                <input type="text" placeholder="data/references.json" value={target.path.clone()} oninput={field(|t, v| t.path = v)} />
            </label>
            <label class="admin-field">
                <span>{"브랜치 (비워두면 기본 브랜치)"}</span>
                <input
                    type="text"
                    placeholder="main"
                    value={target.branch.clone().unwrap_or_default()}
                    oninput={field(|t, v| t.branch = Some(v).filter(|b| !b.trim().is_empty()))}
                />
            </label>
            <label class="admin-field">
                <span>{"Access Token"}</span>
                <input type="password" autocomplete="off" value={target.token.clone()} oninput={field(|t, v| t.token = v)} />
            </label>
            <div class="panel-actions">
                <button class="admin-button primary" onclick={on_sync} disabled={working}>{"동기화"}</button>
                <button class="admin-button" onclick={on_pull} disabled={working}>{"원격에서 불러오기"}</button>
            </div>
            {
                match &*status {
                    Status::Idle => html! {},
                    Status::Working => html! { <p class="notice">{"처리 중..."}</p> },
                    Status::Done(message) => html! { <p class="notice success-message">{message}</p> },
                    Status::Failed(message) => html! { <p class="notice error-message">{message}</p> },
                }
            }
        </div>
    }
}
