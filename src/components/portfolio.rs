//! Portfolio panel: creation form plus the fetched portfolio list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list resource is owned by the root view and passed in, so a
//! successful creation can trigger exactly one refetch of the same resource
//! the rest of the page renders from.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::input::TextInput;
use crate::net::api;
use crate::net::types::Portfolio;

/// Validate creation fields: a non-empty role name and a jobs count that
/// parses as a non-negative whole number.
fn validate_portfolio_input(
    role_name: &str,
    jobs_count: &str,
) -> Result<(String, i32), &'static str> {
    let role_name = role_name.trim();
    if role_name.is_empty() {
        return Err("Enter a job title first.");
    }
    let Ok(jobs_count) = jobs_count.trim().parse::<i32>() else {
        return Err("Jobs count must be a whole number.");
    };
    if jobs_count < 0 {
        return Err("Jobs count cannot be negative.");
    }
    Ok((role_name.to_owned(), jobs_count))
}

/// Creation form and list display for the current user's portfolios.
#[component]
pub fn PortfolioPanel(portfolios: LocalResource<Result<Vec<Portfolio>, String>>) -> impl IntoView {
    let jobs_count = RwSignal::new(String::new());
    let role_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (role_value, jobs_value) =
            match validate_portfolio_input(&role_name.get(), &jobs_count.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating portfolio...".to_owned());

        let portfolios = portfolios.clone();
        leptos::task::spawn_local(async move {
            match api::create_portfolio(&role_value, jobs_value).await {
                Ok(portfolio) => {
                    info.set(format!("Created portfolio for {}", portfolio.role_name));
                    role_name.set(String::new());
                    jobs_count.set(String::new());
                    portfolios.refetch();
                }
                Err(e) => {
                    log::warn!("createPortfolio failed: {e}");
                    info.set(format!("Create failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="panel panel--portfolio">
            <form class="panel__form" on:submit=on_submit>
                <TextInput value=jobs_count placeholder="job count..."/>
                <TextInput value=role_name placeholder="job title"/>
                <Button button_type="submit" disabled=busy>"Submit"</Button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="panel__message">{move || info.get()}</p>
            </Show>
            <div class="portfolio-list">
                <Suspense fallback=move || view! { <p>"Loading portfolios..."</p> }>
                    {move || {
                        portfolios
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! { <p class="portfolio-list__empty">"No portfolios yet."</p> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <ul class="portfolio-list__items">
                                                {list
                                                    .into_iter()
                                                    .map(|p| view! { <PortfolioRow portfolio=p/> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(e) => {
                                    view! {
                                        <p class="portfolio-list__error">
                                            {format!("Could not load portfolios: {e}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}

/// One row of the portfolio list.
#[component]
fn PortfolioRow(portfolio: Portfolio) -> impl IntoView {
    view! {
        <li class="portfolio-list__row">
            <span class="portfolio-list__role">{portfolio.role_name}</span>
            <span class="portfolio-list__jobs">{format!("{} jobs", portfolio.jobs_count)}</span>
            <span class="portfolio-list__created">{portfolio.created_at}</span>
        </li>
    }
}
