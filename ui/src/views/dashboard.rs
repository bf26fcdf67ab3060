//! Admin dashboard shell. English-only, like the rest of the admin surface;
//! data comes from `api::admin` and renders read-only.

use dioxus::prelude::*;

use api::admin::{AccountRecord, AdminClient, DashboardStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum AdminTab {
    #[default]
    Overview,
    Users,
}

#[component]
pub fn Dashboard() -> Element {
    let mut tab = use_signal(AdminTab::default);

    let stats = use_resource(|| async move {
        AdminClient::from_env().fetch_stats().await
    });
    let users = use_resource(|| async move {
        AdminClient::from_env().fetch_users().await
    });

    rsx! {
        section { class: "page page-dashboard",
            aside { class: "dashboard__sidebar",
                h2 { class: "dashboard__brand", "Admin" }
                nav { class: "dashboard__nav",
                    button {
                        class: if tab() == AdminTab::Overview {
                            "dashboard__nav-item dashboard__nav-item--active"
                        } else {
                            "dashboard__nav-item"
                        },
                        onclick: move |_| tab.set(AdminTab::Overview),
                        "Overview"
                    }
                    button {
                        class: if tab() == AdminTab::Users {
                            "dashboard__nav-item dashboard__nav-item--active"
                        } else {
                            "dashboard__nav-item"
                        },
                        onclick: move |_| tab.set(AdminTab::Users),
                        "Users"
                    }
                }
            }

            main { class: "dashboard__main",
                match tab() {
                    AdminTab::Overview => overview(stats),
                    AdminTab::Users => users_table(users),
                }
            }
        }
    }
}

fn overview(stats: Resource<Result<DashboardStats, api::ApiError>>) -> Element {
    match &*stats.read_unchecked() {
        None => rsx! {
            p { class: "dashboard__loading", "Loading statistics..." }
        },
        Some(Err(err)) => rsx! {
            p { class: "dashboard__error", "{err.user_message()}" }
        },
        Some(Ok(stats)) => {
            let stats = *stats;
            let bars = [
                ("Users", stats.users_this_month),
                ("Uploads", stats.uploads_this_month),
                ("Questions", stats.questions_asked),
                ("Subscriptions", stats.active_subscriptions),
            ];

            rsx! {
                div { class: "dashboard__cards",
                    StatCard { label: "Users this month", value: stats.users_this_month }
                    StatCard { label: "Uploads this month", value: stats.uploads_this_month }
                    StatCard { label: "Questions asked", value: stats.questions_asked }
                    StatCard { label: "Active subscriptions", value: stats.active_subscriptions }
                }

                div { class: "dashboard__chart",
                    h3 { "This month at a glance" }
                    BarChart { bars: bars.map(|(label, value)| (label.to_string(), value)).to_vec() }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: u32) -> Element {
    rsx! {
        div { class: "dashboard__card",
            span { class: "dashboard__card-value", "{value}" }
            span { class: "dashboard__card-label", "{label}" }
        }
    }
}

/// Minimal inline SVG bar chart, scaled to the largest value.
#[component]
fn BarChart(bars: Vec<(String, u32)>) -> Element {
    const WIDTH: f32 = 480.0;
    const HEIGHT: f32 = 200.0;
    const GUTTER: f32 = 16.0;

    let max = bars.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1) as f32;
    let bar_width = (WIDTH - GUTTER * (bars.len() as f32 + 1.0)) / bars.len() as f32;

    rsx! {
        svg {
            class: "dashboard__bars",
            view_box: "0 0 {WIDTH} {HEIGHT + 24.0}",
            role: "img",
            for (index, (label, value)) in bars.iter().enumerate() {
                {
                    let height = (*value as f32 / max) * (HEIGHT - 20.0);
                    let x = GUTTER + index as f32 * (bar_width + GUTTER);
                    let y = HEIGHT - height;
                    rsx! {
                        rect {
                            key: "{label}",
                            x: "{x}",
                            y: "{y}",
                            width: "{bar_width}",
                            height: "{height}",
                            rx: "4",
                            fill: "#8a6d3b",
                        }
                        text {
                            x: "{x + bar_width / 2.0}",
                            y: "{HEIGHT + 16.0}",
                            text_anchor: "middle",
                            font_size: "12",
                            "{label}"
                        }
                        text {
                            x: "{x + bar_width / 2.0}",
                            y: "{y - 6.0}",
                            text_anchor: "middle",
                            font_size: "12",
                            "{value}"
                        }
                    }
                }
            }
        }
    }
}

fn users_table(users: Resource<Result<Vec<AccountRecord>, api::ApiError>>) -> Element {
    match &*users.read_unchecked() {
        None => rsx! {
            p { class: "dashboard__loading", "Loading accounts..." }
        },
        Some(Err(err)) => rsx! {
            p { class: "dashboard__error", "{err.user_message()}" }
        },
        Some(Ok(accounts)) => rsx! {
            table { class: "dashboard__table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Credits" }
                        th { "Payment" }
                        th { "Package" }
                    }
                }
                tbody {
                    for account in accounts.iter() {
                        tr { key: "{account.email}",
                            td { "{account.name}" }
                            td { "{account.email}" }
                            td { "{account.credits}" }
                            td {
                                if account.payment_done { "Paid" } else { "Pending" }
                            }
                            td { {account.package.clone().unwrap_or_else(|| "—".to_string())} }
                        }
                    }
                }
            }
        },
    }
}
