use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::content::baseline_stats;
use crate::stats::StatsFetcher;

/// `128000000` -> `128,000,000`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[function_component(StatsBanner)]
pub fn stats_banner() -> Html {
    let stats = use_state(baseline_stats);

    {
        let stats = stats.clone();
        use_mount(move || {
            spawn_local(async move {
                stats.set(StatsFetcher::browser().get_stats(false).await);
            });
        });
    }

    let figure = |label: &'static str, value: u64| html! {
        <div class="stat">
            <span class="stat-value">{format_count(value)}</span>
            <span class="stat-label">{label}</span>
        </div>
    };

    html! {
        <section class="stats-banner">
            <style>
                {r#"
                .stats-banner { background: linear-gradient(120deg, var(--primary), #1a1a1a); padding: 4rem 2rem; text-align: center; }
                .stats-hook { font-size: 1.6rem; font-weight: 800; margin: 0 0 2.5rem; }
                .stats-grid { display: flex; gap: 3rem; justify-content: center; flex-wrap: wrap; }
                .stat { display: flex; flex-direction: column; gap: 0.4rem; }
                .stat-value { font-size: 2.4rem; font-weight: 900; font-variant-numeric: tabular-nums; }
                .stat-label { color: rgba(255, 255, 255, 0.7); font-size: 0.9rem; }
                .stats-updated { margin-top: 2rem; font-size: 0.8rem; color: rgba(255, 255, 255, 0.5); }
                "#}
            </style>
            <p class="stats-hook">{&stats.hook_message}</p>
            <div class="stats-grid">
                {figure("누적 조회수", stats.total_views)}
                {figure("일 평균 조회수", stats.daily_views)}
                {figure("채널당 평균 조회수", stats.per_capita_views)}
            </div>
            <p class="stats-updated">{format!("Last updated {}", stats.last_updated)}</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(128_000_000), "128,000,000");
        assert_eq!(format_count(25_600_000), "25,600,000");
    }
}
