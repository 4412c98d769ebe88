use super::*;
use crate::romania;

fn entry(cost: f64, seq: u64) -> FrontierEntry {
    FrontierEntry {
        cost: Cost::new(cost),
        seq,
        city: "X".to_string(),
        path: Vec::new(),
    }
}

fn stops(route: &Route) -> Vec<&str> {
    route.stops.iter().map(String::as_str).collect()
}

/// Exhaustive minimum over all simple paths, for cross-checking the engine.
fn brute_force_min_cost(network: &Network, start: &str, goal: &str) -> Option<f64> {
    fn walk(
        network: &Network,
        current: &str,
        goal: &str,
        seen: &mut Vec<String>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            if best.is_none() || best.is_some_and(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for (next, weight) in network.neighbors(current) {
            if seen.iter().any(|s| s == next) {
                continue;
            }
            seen.push(next.to_string());
            walk(network, next, goal, seen, cost + weight.value(), best);
            seen.pop();
        }
    }

    let mut best = None;
    let mut seen = vec![start.to_string()];
    walk(network, start, goal, &mut seen, 0.0, &mut best);
    best
}

#[test]
fn test_frontier_entry_ordered_by_cost() {
    assert!(entry(1.0, 5) < entry(2.0, 0));
    assert!(entry(2.0, 0) > entry(1.0, 5));
}

#[test]
fn test_frontier_entry_ties_broken_by_sequence() {
    assert!(entry(3.0, 1) < entry(3.0, 2));
    assert_eq!(entry(3.0, 1).cmp(&entry(3.0, 1)), std::cmp::Ordering::Equal);
}

#[test]
fn test_direct_road() {
    let network = Network::builder().road("A", "B", 4.0).build().unwrap();

    let route = shortest_route(&network, "A", "B").unwrap();
    assert_eq!(stops(&route), vec!["A", "B"]);
    assert_eq!(route.cost.value(), 4.0);
}

#[test]
fn test_cheaper_detour_beats_direct_road() {
    let network = Network::builder()
        .road("A", "B", 10.0)
        .road("A", "C", 1.0)
        .road("C", "B", 2.0)
        .build()
        .unwrap();

    let route = shortest_route(&network, "A", "B").unwrap();
    assert_eq!(stops(&route), vec!["A", "C", "B"]);
    assert_eq!(route.cost.value(), 3.0);
}

#[test]
fn test_start_equals_goal_is_trivial_route() {
    let network = Network::builder().road("A", "B", 4.0).build().unwrap();

    let route = shortest_route(&network, "A", "A").unwrap();
    assert_eq!(stops(&route), vec!["A"]);
    assert_eq!(route.cost, Cost::ZERO);
}

#[test]
fn test_unknown_start_is_no_route() {
    let network = Network::builder().road("A", "B", 4.0).build().unwrap();

    assert!(shortest_route(&network, "Nowhere", "B").is_none());
}

#[test]
fn test_unknown_goal_is_no_route() {
    let network = Network::builder().road("A", "B", 4.0).build().unwrap();

    assert!(shortest_route(&network, "A", "Nowhere").is_none());
}

#[test]
fn test_disconnected_components_no_route() {
    let network = Network::builder()
        .road("A", "B", 1.0)
        .road("C", "D", 1.0)
        .build()
        .unwrap();

    assert!(shortest_route(&network, "A", "D").is_none());
}

#[test]
fn test_tie_break_prefers_first_discovered() {
    // Two cost-2 routes to D. C is discovered at cost 1 and expanded
    // before B, so the A-C-D frontier entry is created first and wins.
    let network = Network::builder()
        .road("A", "B", 2.0)
        .road("A", "C", 1.0)
        .road("C", "D", 1.0)
        .road("B", "D", 0.0)
        .build()
        .unwrap();

    let route = shortest_route(&network, "A", "D").unwrap();
    assert_eq!(stops(&route), vec!["A", "C", "D"]);
    assert_eq!(route.cost.value(), 2.0);
}

#[test]
fn test_equal_cost_diamond_takes_alphabetical_branch() {
    // Both branches cost 2 and are discovered while expanding A; sorted
    // neighbor order discovers B before C.
    let network = Network::builder()
        .road("A", "B", 1.0)
        .road("A", "C", 1.0)
        .road("B", "D", 1.0)
        .road("C", "D", 1.0)
        .build()
        .unwrap();

    let route = shortest_route(&network, "A", "D").unwrap();
    assert_eq!(stops(&route), vec!["A", "B", "D"]);
}

#[test]
fn test_repeated_searches_identical() {
    let network = romania::network().unwrap();

    let first = shortest_route(&network, "Arad", "Bucharest").unwrap();
    for _ in 0..10 {
        assert_eq!(shortest_route(&network, "Arad", "Bucharest").unwrap(), first);
    }
}

#[test]
fn test_optimality_matches_brute_force_all_pairs() {
    let network = Network::builder()
        .road("A", "B", 4.0)
        .road("A", "C", 2.0)
        .road("B", "C", 1.0)
        .road("B", "D", 5.0)
        .road("C", "D", 8.0)
        .road("C", "E", 10.0)
        .road("D", "E", 2.0)
        .road("D", "F", 6.0)
        .road("E", "F", 3.0)
        .build()
        .unwrap();

    for start in network.cities() {
        for goal in network.cities() {
            let expected = brute_force_min_cost(&network, start, goal);
            let route = shortest_route(&network, start, goal);
            match (expected, route) {
                (Some(cost), Some(route)) => assert_eq!(
                    route.cost.value(),
                    cost,
                    "suboptimal route {} -> {}",
                    start,
                    goal
                ),
                (None, None) => {}
                (expected, route) => {
                    panic!("mismatch for {} -> {}: {:?} vs {:?}", start, goal, expected, route)
                }
            }
        }
    }
}

#[test]
fn test_interrupted_search_errors() {
    let network = romania::network().unwrap();
    let interrupted = AtomicBool::new(true);

    let result = shortest_route_interruptible(&network, "Arad", "Bucharest", &interrupted);
    assert!(matches!(result, Err(RutierError::Interrupted)));
}

#[test]
fn test_arad_to_bucharest() {
    let network = romania::network().unwrap();

    let route = shortest_route(&network, "Arad", "Bucharest").unwrap();
    assert_eq!(
        stops(&route),
        vec!["Arad", "Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"]
    );
    assert_eq!(route.cost.value(), 418.0);
}

#[test]
fn test_arad_to_neamt() {
    let network = romania::network().unwrap();

    let route = shortest_route(&network, "Arad", "Neamt").unwrap();
    assert_eq!(
        stops(&route),
        vec![
            "Arad",
            "Sibiu",
            "Rimnicu Vilcea",
            "Pitesti",
            "Bucharest",
            "Urziceni",
            "Vaslui",
            "Iasi",
            "Neamt"
        ]
    );
    assert_eq!(route.cost.value(), 824.0);
}

#[test]
fn test_concurrent_searches_share_network() {
    let network = romania::network().unwrap();
    let network = &network;

    std::thread::scope(|scope| {
        for goal in ["Bucharest", "Neamt", "Eforie", "Oradea"] {
            scope.spawn(move || {
                let route = shortest_route(network, "Arad", goal).unwrap();
                assert!(route.cost > Cost::ZERO);
            });
        }
    });
}

#[test]
fn test_route_cost_symmetric() {
    let network = romania::network().unwrap();

    for (start, goal) in [
        ("Arad", "Bucharest"),
        ("Oradea", "Eforie"),
        ("Timisoara", "Neamt"),
    ] {
        let forward = shortest_route(&network, start, goal).unwrap();
        let reverse = shortest_route(&network, goal, start).unwrap();
        assert_eq!(forward.cost, reverse.cost);
    }
}

#[test]
fn test_romania_optimality_spot_checks() {
    let network = romania::network().unwrap();

    for (start, goal) in [("Arad", "Bucharest"), ("Arad", "Neamt"), ("Lugoj", "Iasi")] {
        let expected = brute_force_min_cost(&network, start, goal).unwrap();
        let route = shortest_route(&network, start, goal).unwrap();
        assert_eq!(route.cost.value(), expected);
    }
}
