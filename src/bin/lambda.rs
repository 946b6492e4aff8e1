//! HTTP handler serving equivalent values and timelines as JSON
//!
//! Query parameters: `amount`, `from_year`, `from_month`, `to_year`, `to_month`.
//! Until all five are present the response carries `"result": null`.

use inflation_calculator::format::{format_currency, format_percentage, purchasing_power_sentence};
use inflation_calculator::{default_table, CalcError, RateTable, RequestDraft};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use log::{info, warn};
use serde_json::{json, Value};
use std::str::FromStr;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    info!("Starting inflation calculator handler");
    run(service_fn(handler)).await
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let params = event.query_string_parameters();
    let (status, body) = match draft_from_query(|key| params.first(key)) {
        Ok(draft) => evaluate(&draft, default_table()),
        Err(e) => {
            warn!("Rejected query: {}", e);
            (400, json!({ "error": e.to_string() }))
        }
    };

    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header("access-control-allow-origin", "*")
        .body(Body::from(body.to_string()))?;
    Ok(response)
}

/// Collect the optional inputs; a present but unparseable value is an error
fn draft_from_query<'a, F>(get: F) -> Result<RequestDraft, CalcError>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let amount = match get("amount") {
        Some(raw) => Some(
            raw.trim()
                .parse::<f64>()
                .map_err(|_| CalcError::InvalidNumber(raw.to_string()))?,
        ),
        None => None,
    };

    Ok(RequestDraft {
        amount,
        from_year: parse_field(get("from_year"))?,
        from_month: parse_field(get("from_month"))?,
        to_year: parse_field(get("to_year"))?,
        to_month: parse_field(get("to_month"))?,
    })
}

fn parse_field<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, CalcError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|_| CalcError::InvalidNumber(value.to_string()))
    })
    .transpose()
}

/// Status code and JSON body for a draft request
fn evaluate(draft: &RequestDraft, table: &RateTable) -> (u16, Value) {
    let request = match draft.complete() {
        None => return (200, json!({ "result": null, "timeline": [] })),
        Some(Err(e)) => return (400, json!({ "error": e.to_string() })),
        Some(Ok(request)) => request,
    };

    let result = request.compound(table);
    let timeline = request.timeline(table);
    let formatted = json!({
        "final_amount": format_currency(result.final_amount),
        "total_change": format_percentage(result.total_change_percent),
        "summary": purchasing_power_sentence(
            request.amount(),
            request.from(),
            request.to(),
            &result,
            "$",
        ),
    });

    (
        200,
        json!({
            "result": result,
            "timeline": timeline,
            "monthly_rates": timeline.rate_bars(),
            "formatted": formatted,
            "available_from_months": table.available_months(request.from().year()),
            "available_to_months": table.available_months(request.to().year()),
        }),
    )
}
