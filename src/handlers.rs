use crate::clock::ClockTime;
use crate::dom::Element;
use crate::duration::format_duration;
use crate::errors::AppError;
use crate::models::{DataItems, ItemUpdate};
use crate::state::AppState;
use crate::ui::render_index;
use crate::units::admin_clock::LOCAL_TIME_ID;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::{DateTime, Local, TimeZone};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = state.page.lock().await;
    Html(render_index(&page))
}

pub async fn current_data(State(state): State<AppState>) -> Json<DataItems> {
    Json(build_current_data(state.uptime_seconds(), Local::now()))
}

pub async fn get_element(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Element>, AppError> {
    let page = state.page.lock().await;
    page.by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no element with id {id}")))
}

pub fn build_current_data<Tz: TimeZone>(uptime: u64, now: DateTime<Tz>) -> DataItems
where
    Tz::Offset: std::fmt::Display,
{
    let clock = ClockTime::from_time(&now);
    let mut items = DataItems::new();
    items.insert(
        LOCAL_TIME_ID.into(),
        ItemUpdate::content(clock.to_string()).with_attribute("data-time", clock.to_seed()),
    );
    items.insert(
        "uptime".into(),
        ItemUpdate::content(format_duration(uptime)).with_attribute("data-seconds", uptime.to_string()),
    );
    items.insert("current-lastquery".into(), ItemUpdate::content(query_timestamp(&now)));
    items.insert(
        "current-queryago".into(),
        ItemUpdate::content(format_duration(0)).with_attribute("data-seconds", "0"),
    );
    items
}

pub fn query_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%b %d, %Y %I:%M:%S %p").to_string()
}
