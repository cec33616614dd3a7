use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod error;
mod models;
mod content;
mod storage;
mod clock;
mod http;
mod auth;
mod registry;
mod thumbnail;
mod intake;
mod stats;
mod state;
mod sync {
    pub mod client;
    pub mod codec;
    pub mod document;
}
mod components {
    pub mod inquiry_form;
    pub mod gallery;
    pub mod stats_banner;
    pub mod social_links;
}
mod pages {
    pub mod landing;
    pub mod consultation;
    pub mod legal;
}
mod admin {
    pub mod login;
    pub mod console;
    pub mod leads;
    pub mod content_tab;
    pub mod appearance;
    pub mod sync_panel;
}

use admin::console::AdminConsole;
use pages::{
    consultation::Consultation,
    landing::Landing,
    legal::{PrivacyPolicy, TermsOfService},
};
use state::{SiteContent, SiteContext, SiteState};
use storage::BrowserStorage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/consultation")]
    Consultation,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Consultation => {
            info!("Rendering Consultation page");
            html! { <Consultation /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Admin => {
            info!("Rendering Admin page");
            html! { <AdminConsole /> }
        },
        Route::NotFound => {
            info!("Unknown route, showing landing page");
            html! { <Redirect<Route> to={Route::Landing} /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let site = use_context::<SiteContext>();
    let menu_open = use_state(|| false);
    let agency_name = site
        .map(|site| site.content.settings.agency_name.clone())
        .unwrap_or_default();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Landing} classes="nav-logo">
                    {agency_name}
                </Link<Route>>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Landing} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Consultation} classes="nav-cta">
                            {"무료 상담 신청"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let site = use_context::<SiteContext>();
    let agency_name = site
        .map(|site| site.content.settings.agency_name.clone())
        .unwrap_or_default();

    html! {
        <footer class="site-footer">
            <p>{format!("© {}. All rights reserved.", agency_name)}</p>
            <div class="footer-links">
                <Link<Route> to={Route::Terms}>{"이용약관"}</Link<Route>>
                <Link<Route> to={Route::Privacy}>{"개인정보처리방침"}</Link<Route>>
                <Link<Route> to={Route::Admin}>{"Admin"}</Link<Route>>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    let site = use_reducer(|| SiteState::new(SiteContent::load(&BrowserStorage::local())));
    let settings = &site.content.settings;
    let theme = format!(
        "--primary: {}; --secondary: {};",
        settings.primary_color, settings.secondary_color
    );

    html! {
        <ContextProvider<SiteContext> context={site.clone()}>
            <BrowserRouter>
                <div class="site" style={theme}>
                    <style>
                        {r#"
                        * { box-sizing: border-box; }
                        body { margin: 0; background: #000; color: #fff; font-family: 'Pretendard', 'Noto Sans KR', sans-serif; }
                        a { color: inherit; }
                        .site { min-height: 100vh; background: var(--secondary); }
                        .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; background: rgba(0, 0, 0, 0.7); backdrop-filter: blur(10px); }
                        .nav-content { max-width: 1200px; margin: 0 auto; padding: 1rem 2rem; display: flex; align-items: center; justify-content: space-between; }
                        .nav-logo { font-weight: 900; font-size: 1.4rem; text-decoration: none; letter-spacing: -0.03em; }
                        .nav-right { display: flex; gap: 1.5rem; align-items: center; }
                        .nav-link { text-decoration: none; color: #bbb; }
                        .nav-cta { text-decoration: none; background: var(--primary); padding: 0.6rem 1.2rem; border-radius: 999px; font-weight: 700; }
                        .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                        .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                        .site-footer { border-top: 1px solid #222; padding: 3rem 2rem; text-align: center; color: #666; }
                        .footer-links { display: flex; gap: 1.5rem; justify-content: center; }
                        .footer-links a { color: #888; text-decoration: none; font-size: 0.9rem; }
                        .section { max-width: 1200px; margin: 0 auto; padding: 6rem 2rem; }
                        .section-title { font-size: 2.5rem; font-weight: 900; margin-bottom: 2rem; }
                        .accent { color: var(--primary); }
                        .error-message { color: #ff6b6b; }
                        .success-message { color: #4ade80; }
                        @media (max-width: 768px) {
                            .burger-menu { display: block; }
                            .nav-right { display: none; }
                            .nav-right.mobile-menu-open { display: flex; flex-direction: column; position: absolute; top: 100%; left: 0; right: 0; background: #000; padding: 1.5rem; }
                        }
                        "#}
                    </style>
                    <Nav />
                    <Switch<Route> render={switch} />
                    <Footer />
                </div>
            </BrowserRouter>
        </ContextProvider<SiteContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
