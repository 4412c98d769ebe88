//! Route command
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use rutier_core::error::{Result, RutierError};
use rutier_core::graph::{shortest_route_interruptible, Cost, Network, Route};

/// Route rendered for output, with per-leg distances.
#[derive(Debug, Serialize)]
struct RouteReport {
    from: String,
    to: String,
    found: bool,
    stops: Vec<String>,
    legs: Vec<Leg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_distance: Option<Cost>,
    hops: usize,
}

#[derive(Debug, Serialize)]
struct Leg {
    from: String,
    to: String,
    distance: Cost,
}

/// Execute the route command
pub fn execute(cli: &Cli, network: &Network, from: &str, to: &str) -> Result<()> {
    // Reject typos before searching; the engine itself treats an unknown
    // city as unreachable rather than as an error.
    for city in [from, to] {
        if !network.contains(city) {
            return Err(RutierError::CityNotFound {
                name: city.to_string(),
            });
        }
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let route = shortest_route_interruptible(network, from, to, &interrupted)?;
    let report = build_report(network, from, to, route);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => output_human(cli, &report),
        OutputFormat::Records => output_records(&report),
    }

    Ok(())
}

fn build_report(network: &Network, from: &str, to: &str, route: Option<Route>) -> RouteReport {
    let Some(route) = route else {
        return RouteReport {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            stops: Vec::new(),
            legs: Vec::new(),
            total_distance: None,
            hops: 0,
        };
    };

    let legs = route
        .stops
        .windows(2)
        .map(|pair| Leg {
            from: pair[0].clone(),
            to: pair[1].clone(),
            distance: network.weight(&pair[0], &pair[1]).unwrap_or(Cost::ZERO),
        })
        .collect();

    RouteReport {
        from: from.to_string(),
        to: to.to_string(),
        found: true,
        hops: route.hops(),
        total_distance: Some(route.cost),
        stops: route.stops,
        legs,
    }
}

fn output_human(cli: &Cli, report: &RouteReport) {
    if !report.found {
        if !cli.quiet {
            println!("No route from {} to {}", report.from, report.to);
        }
        return;
    }

    for leg in &report.legs {
        println!("{} -> {} ({})", leg.from, leg.to, leg.distance);
    }

    let total = report.total_distance.unwrap_or(Cost::ZERO);
    let unit = if report.hops == 1 { "hop" } else { "hops" };
    println!("Total distance: {} ({} {})", total, report.hops, unit);
}

fn output_records(report: &RouteReport) {
    let total = report.total_distance.unwrap_or(Cost::ZERO);
    println!(
        "R route from=\"{}\" to=\"{}\" found={} distance={} hops={}",
        report.from, report.to, report.found, total, report.hops
    );
    for (i, stop) in report.stops.iter().enumerate() {
        println!("S {} \"{}\"", i, stop);
    }
    for leg in &report.legs {
        println!("L \"{}\" \"{}\" {}", leg.from, leg.to, leg.distance);
    }
}
