use yew::prelude::*;
use crate::models::{VideoKind, VideoReference};
use crate::state::SiteContext;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub reference: VideoReference,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let reference = &props.reference;
    let shape = match reference.kind {
        VideoKind::LongForm => "video-card landscape",
        VideoKind::ShortForm => "video-card portrait",
    };
    let body = html! {
        <>
            <img src={reference.display_thumbnail()} alt={reference.title.clone()} loading="lazy" />
            <div class="video-card-overlay">
                <span class="video-kind">{reference.kind.as_str()}</span>
                <h4>{&reference.title}</h4>
            </div>
        </>
    };

    if reference.external_url.is_empty() {
        html! { <div class={shape}>{body}</div> }
    } else {
        html! {
            <a class={shape} href={reference.external_url.clone()} target="_blank" rel="noopener noreferrer">
                {body}
            </a>
        }
    }
}

#[derive(Properties, PartialEq)]
struct RowProps {
    kind: VideoKind,
    title: &'static str,
    references: Vec<VideoReference>,
}

#[function_component(GalleryRow)]
fn gallery_row(props: &RowProps) -> Html {
    if props.references.is_empty() {
        return html! {};
    }
    html! {
        <div class="gallery-row">
            <h3 class="gallery-row-title">{props.title}</h3>
            <div class={classes!("gallery-track", (props.kind == VideoKind::ShortForm).then(|| "shorts"))}>
                {
                    props.references.iter().map(|reference| html! {
                        <VideoCard key={reference.id.clone()} reference={reference.clone()} />
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

/// Reference gallery: a long-form row above a short-form row, each
/// scrolling horizontally in registry order.
#[function_component(ReferenceGallery)]
pub fn reference_gallery() -> Html {
    let site = use_context::<SiteContext>();
    let Some(site) = site else {
        return html! {};
    };
    let registry = &site.content.registry;
    let row = |kind: VideoKind| -> Vec<VideoReference> {
        registry.list(kind).into_iter().cloned().collect()
    };

    html! {
        <section class="section gallery" id="references">
            <style>
                {r#"
                .gallery-row { margin-bottom: 3rem; }
                .gallery-row-title { color: #888; font-size: 1rem; letter-spacing: 0.2em; text-transform: uppercase; }
                .gallery-track { display: flex; gap: 1.25rem; overflow-x: auto; scroll-snap-type: x mandatory; padding-bottom: 1rem; }
                .video-card { position: relative; flex: 0 0 auto; border-radius: 20px; overflow: hidden; scroll-snap-align: start; background: #111; text-decoration: none; }
                .video-card.landscape { width: 420px; aspect-ratio: 16 / 9; }
                .video-card.portrait { width: 220px; aspect-ratio: 9 / 16; }
                .video-card img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.4s; }
                .video-card:hover img { transform: scale(1.05); }
                .video-card-overlay { position: absolute; inset: auto 0 0 0; padding: 1.2rem; background: linear-gradient(transparent, rgba(0, 0, 0, 0.85)); }
                .video-card-overlay h4 { margin: 0.3rem 0 0; font-size: 1rem; }
                .video-kind { color: var(--primary); font-size: 0.75rem; font-weight: 800; }
                @media (max-width: 768px) { .video-card.landscape { width: 300px; } .video-card.portrait { width: 170px; } }
                "#}
            </style>
            <h2 class="section-title">{"Reference"}<span class="accent">{"."}</span></h2>
            <GalleryRow kind={VideoKind::LongForm} title="Long-form" references={row(VideoKind::LongForm)} />
            <GalleryRow kind={VideoKind::ShortForm} title="Short-form" references={row(VideoKind::ShortForm)} />
        </section>
    }
}
