use fietsat::*;

fn tier(level: u8) -> Tier {
    Tier::new(level).unwrap()
}

fn plan(instance: &Instance, config: Config) -> Plan {
    Planner::new(config, Splr).plan(instance).unwrap().plan
}

fn plan_all_encodings(instance: &Instance, qualification: Qualification) -> Vec<Plan> {
    [AtMostOne::Pairwise, AtMostOne::Sequential, AtMostOne::Auto]
        .iter()
        .map(|&amo| {
            plan(
                instance,
                Config::default()
                    .with_qualification(qualification)
                    .with_at_most_one(amo),
            )
        })
        .collect()
}

/// One driver per tier, each knowing only route 1
fn ladder() -> Vec<Driver> {
    (1..=4)
        .map(|id| Driver::new(id, format!("D{}", id), tier(id as u8), vec![1]))
        .collect()
}

#[test]
fn one_driver_per_tier_staffs_the_route() {
    let instance = Instance::new(ladder(), vec![Route::new(1, "Delft", "Leiden")]).unwrap();

    for qualification in [Qualification::AtLeast, Qualification::Exact].iter() {
        for plan in plan_all_encodings(&instance, *qualification) {
            let assignment = plan.assignment().expect("ladder is staffable");
            assert_eq!(assignment.route(1), Some(&Staffing::new([1, 2, 3, 4])));
        }
    }
}

#[test]
fn missing_top_tier_is_infeasible() {
    let drivers = vec![
        Driver::new(1, "A", tier(1), vec![1]),
        Driver::new(2, "B", tier(2), vec![1]),
        Driver::new(3, "C", tier(3), vec![1]),
        Driver::new(4, "D", tier(3), vec![1]),
    ];
    let instance = Instance::new(drivers, vec![Route::new(1, "a", "b")]).unwrap();

    for plan in plan_all_encodings(&instance, Qualification::AtLeast) {
        assert_eq!(plan, Plan::Infeasible);
    }
}

#[test]
fn single_senior_driver_cannot_serve_two_routes() {
    let mut drivers = vec![Driver::new(1, "Senior", tier(4), vec![1, 2])];
    for route in 1..=2 {
        for level in 1..=3 {
            let id = route * 10 + level;
            drivers.push(Driver::new(id, "", tier(level as u8), vec![route]));
        }
    }
    let instance = Instance::new(
        drivers,
        vec![Route::new(1, "a", "b"), Route::new(2, "c", "d")],
    )
    .unwrap();

    for plan in plan_all_encodings(&instance, Qualification::AtLeast) {
        assert_eq!(plan, Plan::Infeasible);
    }
}

#[test]
fn versatile_driver_fills_at_most_one_slot() {
    let mut drivers = ladder();
    drivers.push(Driver::new(9, "Versatile", tier(4), vec![1, 2]));
    for level in 1..=4 {
        drivers.push(Driver::new(20 + level, "", tier(level as u8), vec![2]));
    }
    let instance = Instance::new(
        drivers,
        vec![Route::new(1, "a", "b"), Route::new(2, "c", "d")],
    )
    .unwrap();

    for plan in plan_all_encodings(&instance, Qualification::AtLeast) {
        let assignment = plan.assignment().expect("both routes are staffable");
        let appearances = assignment
            .iter()
            .flat_map(|(_, staffing)| staffing.slots())
            .filter(|slot| slot.driver == 9)
            .count();
        assert!(appearances <= 1);
    }
}

#[test]
fn senior_drivers_cover_lower_tiers_only_under_at_least() {
    let drivers = (1..=4)
        .map(|id| Driver::new(id, "", tier(4), vec![1]))
        .collect();
    let instance = Instance::new(drivers, vec![Route::new(1, "a", "b")]).unwrap();

    for plan in plan_all_encodings(&instance, Qualification::AtLeast) {
        let assignment = plan.assignment().expect("seniors can fill every tier");
        let mut used = assignment
            .route(1)
            .unwrap()
            .slots()
            .map(|slot| slot.driver)
            .collect::<Vec<_>>();
        used.sort();
        assert_eq!(used, vec![1, 2, 3, 4]);
    }
    for plan in plan_all_encodings(&instance, Qualification::Exact) {
        assert_eq!(plan, Plan::Infeasible);
    }
}

#[test]
fn no_routes_is_trivially_staffed() {
    let idle = ladder()
        .into_iter()
        .map(|mut driver| {
            driver.routes.clear();
            driver
        })
        .collect();
    let instance = Instance::new(idle, Vec::new()).unwrap();
    let plan = plan(&instance, Config::default());
    assert_eq!(plan.assignment().map(Assignment::len), Some(0));
}

#[test]
fn loads_and_plans_from_json() {
    let drivers = r#"[
        {"id": 1, "name": "Anouk", "exp": 1, "routes": [1]},
        {"id": 2, "name": "Bram", "exp": 2, "routes": [1]},
        {"id": 3, "name": "Daan", "exp": 3, "routes": [1]},
        {"id": 4, "name": "Eva", "exp": 4, "routes": [1]}
    ]"#;
    let routes = r#"[{"id": 1, "start": "Utrecht", "end": "Gouda"}]"#;
    let instance = Instance::from_json_str(drivers, routes).unwrap();

    let plan = plan(&instance, Config::default());
    let text = Report::new(&instance, &plan).to_string();
    assert!(text.contains("SAT? Yes"));
    assert!(text.contains("Route 1 (Utrecht – Gouda):"));
    assert!(text.contains("\tDriver 4 (Eva) @ exp. level 4"));
}
