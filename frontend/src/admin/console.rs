use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};
use crate::admin::{
    appearance::AppearanceTab,
    content_tab::ContentTab,
    leads::LeadsTab,
    login::AdminLogin,
    sync_panel::SyncPanel,
};
use crate::auth::BrowserGate;
use crate::state::{SiteAction, SiteContent, SiteContext};
use crate::storage::BrowserStorage;
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Leads,
    Content,
    Appearance,
    Sync,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Leads, Tab::Content, Tab::Appearance, Tab::Sync];

    fn label(&self) -> &'static str {
        match self {
            Tab::Leads => "문의 내역",
            Tab::Content => "콘텐츠",
            Tab::Appearance => "디자인 설정",
            Tab::Sync => "원격 동기화",
        }
    }
}

#[function_component]
pub fn AdminConsole() -> Html {
    let site = use_context::<SiteContext>();
    let is_admin = use_state(|| BrowserGate::browser().is_admin());
    let tab = use_state(|| Tab::Leads);
    let notice = use_state(|| None::<Result<String, String>>);

    let Some(site) = site else {
        return html! {};
    };

    if !*is_admin {
        let on_login = {
            let is_admin = is_admin.clone();
            Callback::from(move |_| is_admin.set(true))
        };
        return html! { <AdminLogin {on_login} /> };
    }

    let on_save = {
        let site = site.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| match site.content.save(&BrowserStorage::local()) {
            Ok(()) => {
                info!("Saved site content");
                site.dispatch(SiteAction::MarkSaved);
                notice.set(Some(Ok("저장되었습니다.".to_string())));
            }
            Err(e) => {
                error!("Saving site content failed: {}", e);
                notice.set(Some(Err(e.to_string())));
            }
        })
    };

    let on_discard = {
        let site = site.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            site.dispatch(SiteAction::Reload(SiteContent::load(&BrowserStorage::local())));
            notice.set(None);
        })
    };

    let on_logout = {
        let is_admin = is_admin.clone();
        Callback::from(move |_: MouseEvent| {
            BrowserGate::browser().logout();
            is_admin.set(false);
        })
    };

    html! {
        <div class="dashboard-container">
            <style>
                {r#"
                .dashboard-container { max-width: 1200px; margin: 0 auto; padding: 7rem 2rem 4rem; }
                .panel-header { display: flex; justify-content: space-between; align-items: center; gap: 1rem; flex-wrap: wrap; }
                .panel-title { font-size: 2rem; margin: 0; }
                .panel-actions { display: flex; gap: 0.75rem; align-items: center; }
                .panel-actions button, .admin-button { background: #1f1f1f; border: 1px solid #333; color: #fff; border-radius: 8px; padding: 0.6rem 1.1rem; cursor: pointer; }
                .panel-actions .primary, .admin-button.primary { background: var(--primary); border-color: var(--primary); font-weight: 700; }
                .admin-button.danger { color: #ff6b6b; }
                .admin-button:disabled { opacity: 0.4; cursor: default; }
                .dirty-badge { color: #facc15; font-size: 0.85rem; }
                .back-link { color: #888; }
                .tab-bar { display: flex; gap: 0.5rem; margin: 2rem 0; border-bottom: 1px solid #222; }
                .tab-bar button { background: none; border: none; color: #777; padding: 0.8rem 1.2rem; cursor: pointer; border-bottom: 2px solid transparent; }
                .tab-bar button.active { color: #fff; border-bottom-color: var(--primary); }
                .admin-card { background: #0d0d0d; border: 1px solid #1f1f1f; border-radius: 16px; padding: 1.5rem; margin-bottom: 1.5rem; }
                .admin-field { display: grid; gap: 0.4rem; margin-bottom: 1rem; }
                .admin-field span { color: #888; font-size: 0.85rem; }
                .admin-field input, .admin-field textarea, .admin-field select { background: #000; border: 1px solid #333; border-radius: 8px; padding: 0.7rem; color: #fff; }
                .notice { margin: 1rem 0 0; }
                "#}
            </style>
            <div class="panel-header">
                <h1 class="panel-title">{"Admin Console"}</h1>
                <div class="panel-actions">
                    {
                        if site.dirty {
                            html! { <span class="dirty-badge">{"저장되지 않은 변경사항"}</span> }
                        } else {
                            html! {}
                        }
                    }
                    <button onclick={on_discard} disabled={!site.dirty}>{"되돌리기"}</button>
                    <button class="primary" onclick={on_save}>{"저장"}</button>
                    <button onclick={on_logout}>{"로그아웃"}</button>
                    <Link<Route> to={Route::Landing} classes="back-link">
                        {"사이트 보기"}
                    </Link<Route>>
                </div>
            </div>
            {
                match (*notice).as_ref() {
                    Some(Ok(message)) => html! { <p class="notice success-message">{message}</p> },
                    Some(Err(message)) => html! { <p class="notice error-message">{message}</p> },
                    None => html! {},
                }
            }
            <div class="tab-bar">
                {
                    Tab::ALL.iter().map(|t| {
                        let onclick = {
                            let tab = tab.clone();
                            let t = *t;
                            Callback::from(move |_: MouseEvent| tab.set(t))
                        };
                        html! {
                            <button class={classes!((*tab == *t).then(|| "active"))} {onclick}>
                                {t.label()}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            {
                match *tab {
                    Tab::Leads => html! { <LeadsTab /> },
                    Tab::Content => html! { <ContentTab /> },
                    Tab::Appearance => html! { <AppearanceTab /> },
                    Tab::Sync => html! { <SyncPanel /> },
                }
            }
        </div>
    }
}
