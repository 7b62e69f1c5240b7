// ============================================================================
// CHARTS PAGE - Top downloads
// ============================================================================
// Top 3 como tarjetas con medalla, el resto como lista a partir de #4.
// El rango es la posición en la respuesta del backend.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::layouts::MainLayout;
use crate::hooks::use_charts_flow;
use crate::models::{ChartItem, Period};
use crate::routes::Route;
use crate::state::charts_state::EMPTY_CHARTS_MESSAGE;
use crate::state::ChartsView;
use crate::utils::constants::TOP_SECTION_LEN;

const YOUTUBE_ICON: &str = "M23.5 6.2a4.6 4.6 0 0 0-3.2-3.2C18.5 2.5 12 2.5 12 2.5s-6.5 0-8.3.5A4.6 4.6 0 0 0 .5 6.2 48.4 48.4 0 0 0 0 12a48.4 48.4 0 0 0 .5 5.8 4.6 4.6 0 0 0 3.2 3.2c1.8.5 8.3.5 8.3.5s6.5 0 8.3-.5a4.6 4.6 0 0 0 3.2-3.2c.5-1.8.5-5.8.5-5.8s0-4-.5-5.8zM9.7 15.5V8.5L15.8 12l-6.1 3.5z";

/// Clase de medalla del top 3: oro, plata, bronce.
pub fn rank_class(rank: usize) -> &'static str {
    match rank {
        1 => "rank-gold",
        2 => "rank-silver",
        _ => "rank-bronze",
    }
}

#[function_component(ChartsPage)]
pub fn charts_page() -> Html {
    let flow = use_charts_flow();
    let navigator = use_navigator();
    let state = &flow.state;
    let sending = state.is_sending();

    let on_cta = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Send);
        }
    });

    let body = match state.view() {
        ChartsView::Loading => html! { <div class="charts-loading">{"Loading charts…"}</div> },
        ChartsView::Failed(error) => html! { <div class="charts-error">{error.to_string()}</div> },
        ChartsView::Empty => html! { <p class="charts-empty">{EMPTY_CHARTS_MESSAGE}</p> },
        ChartsView::Loaded { top, rest } => html! {
            <div class="charts-body">
                <div class="charts-top">
                    { for top.iter().enumerate().map(|(idx, item)| html! {
                        <TopCard
                            key={item_key(item, idx)}
                            item={item.clone()}
                            rank={idx + 1}
                            sending={sending}
                            on_send={flow.send_track.clone()}
                        />
                    }) }
                </div>
                if !rest.is_empty() {
                    <div class="charts-rest">
                        { for rest.iter().enumerate().map(|(idx, item)| html! {
                            <RankRow
                                key={item_key(item, idx + TOP_SECTION_LEN)}
                                item={item.clone()}
                                rank={idx + TOP_SECTION_LEN + 1}
                                sending={sending}
                                on_send={flow.send_track.clone()}
                            />
                        }) }
                    </div>
                }
            </div>
        },
    };

    html! {
        <MainLayout>
            <section class="charts-page">
                <div class="charts-cta">
                    <div>
                        <h1>{"Welcome back"}</h1>
                        <p>{"You can search or paste a link and send it to Telegram instantly."}</p>
                    </div>
                    <button class="btn-primary" onclick={on_cta}>
                        <span>{"Search to download"}</span>
                    </button>
                </div>

                <div class="charts-header">
                    <h2>{"Top downloads"}</h2>
                    <div class="period-buttons">
                        { for Period::ALL_PERIODS.into_iter().map(|period| html! {
                            <PeriodButton
                                value={period}
                                active={period == state.period}
                                on_select={flow.select_period.clone()}
                            />
                        }) }
                    </div>
                </div>

                {body}
            </section>
        </MainLayout>
    }
}

fn item_key(item: &ChartItem, position: usize) -> String {
    item.id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| format!("rank-{}", position))
}

#[derive(Properties, PartialEq)]
struct PeriodButtonProps {
    value: Period,
    active: bool,
    on_select: Callback<Period>,
}

#[function_component(PeriodButton)]
fn period_button(props: &PeriodButtonProps) -> Html {
    let value = props.value;
    let onclick = props.on_select.reform(move |_: MouseEvent| value);
    html! {
        <button class={classes!("period-btn", props.active.then_some("active"))} {onclick}>
            {value.as_str()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct TrackProps {
    item: ChartItem,
    rank: usize,
    sending: bool,
    on_send: Callback<ChartItem>,
}

fn youtube_link(url: &Option<String>) -> Html {
    match url {
        Some(url) => html! {
            <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="btn-youtube">
                <svg viewBox="0 0 24 24" class="icon" fill="currentColor" aria-hidden="true">
                    <path d={YOUTUBE_ICON} />
                </svg>
                <span>{"YouTube"}</span>
            </a>
        },
        None => html! {},
    }
}

fn send_click(props: &TrackProps) -> Callback<MouseEvent> {
    let item = props.item.clone();
    props.on_send.reform(move |_: MouseEvent| item.clone())
}

#[function_component(TopCard)]
fn top_card(props: &TrackProps) -> Html {
    let item = &props.item;
    let title = item.title.clone().unwrap_or_else(|| "Unknown title".to_string());

    html! {
        <div class="top-card">
            if let Some(thumbnail) = &item.thumbnail_url {
                <div class="top-card-thumb">
                    <img src={thumbnail.clone()} alt={title.clone()} />
                    <div class={classes!("rank-badge", rank_class(props.rank))}>
                        {format!("#{}", props.rank)}
                    </div>
                </div>
            }
            <div class="top-card-body">
                <p class="downloads">{format!("{} downloads", item.downloads)}</p>
                <h3 class="title">{title}</h3>
                if let Some(artist) = &item.artist {
                    <p class="artist">{artist.clone()}</p>
                }
                <div class="actions">
                    {youtube_link(&item.youtube_url)}
                    <button class="btn-download" onclick={send_click(props)} disabled={props.sending}>
                        <span>{ if props.sending { "Scheduling…" } else { "Download" } }</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(RankRow)]
fn rank_row(props: &TrackProps) -> Html {
    let item = &props.item;

    html! {
        <div class="rank-row">
            <div class="rank-chip">{format!("#{}", props.rank)}</div>
            if let Some(thumbnail) = &item.thumbnail_url {
                <img class="rank-thumb" src={thumbnail.clone()} alt="" />
            }
            <div class="rank-info">
                <div class="title">{item.title.clone().unwrap_or_else(|| "Unknown".to_string())}</div>
                <div class="meta">
                    if let Some(artist) = &item.artist {
                        <div class="artist">{artist.clone()}</div>
                    }
                    <span class="downloads">{format!("• {} downloads", item.downloads)}</span>
                </div>
            </div>
            <div class="actions">
                {youtube_link(&item.youtube_url)}
                <button class="btn-download" onclick={send_click(props)} disabled={props.sending}>
                    <span>{ if props.sending { "..." } else { "Download" } }</span>
                </button>
            </div>
        </div>
    }
}
